use plinth_core::nalgebra::Matrix4;
use serde::{Deserialize, Serialize};

/// A 4x4 placement of a unit cube in the scene.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NamedTransform {
    pub name: String,
    pub transform: Matrix4<f64>,
}

impl NamedTransform {
    pub fn new(name: impl Into<String>, transform: Matrix4<f64>) -> Self {
        Self {
            name: name.into(),
            transform,
        }
    }
}

/// Everything the papercraft and scene formatters consume.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SceneGeometry {
    /// The long and short base edge lengths.
    pub base_lengths: [f64; 2],
    /// Base-local to scene coordinates, row-vector form.
    pub scene_of_base4: Matrix4<f64>,
    /// The transform applied to the camera.
    pub base_of_scene4: Matrix4<f64>,
    /// The focal length in mm.
    pub focal_length: f64,
    /// The horizontal sensor size in mm.
    pub aperture: f64,
    pub field_of_view_degrees: f64,
    /// The base slab.
    pub base_block: NamedTransform,
    /// One placement per block, `block0` to `block3`.
    pub blocks: Vec<NamedTransform>,
}
