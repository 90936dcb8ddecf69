//! # Plinth Core
//!
//! Common types shared by the crates that reconstruct the base ("plinth") of a sculpture
//! from hand-marked points in a single reference photograph. The reconstruction is a
//! short chain of pure stages:
//!
//! * pixel coordinates ([`KeyPoint`]) are normalized by the [`ImageFrame`] into
//!   [`NormalizedPoint`]s,
//! * a [`Homography`] maps normalized points onto the unit square of the base ([`PlanePoint`]),
//! * the inverse homography lifts unit-square corners back into [`PreImage`]s, which are
//!   3d points whose depth is only known up to a scale factor.
//!
//! The crates downstream of this one resolve that scale, build the base frame and place
//! blocks relative to it. Everything here is small and `Copy`, and all the math is
//! [`nalgebra`] underneath.
//!
//! The sketch below shows the photographed base `ABCD` and the unit square it is
//! mapped to. Corner order matters throughout: `(0,0)`, `(1,0)`, `(0,1)`, `(1,1)`.
//!
//! ```text
//!        C_______________D            (0,1)_______(1,1)
//!        /             /                |           |
//!       /    image    /        H        |   plane   |
//!      /             /      ------->    |           |
//!     A_____________B                 (0,0)_______(1,0)
//! ```

mod camera;
mod correspondence;
mod error;
mod homography;
mod keypoint;
mod point;
pub mod transform;

pub use camera::*;
pub use correspondence::*;
pub use error::*;
pub use homography::*;
pub use keypoint::*;
pub use nalgebra;
pub use point::*;
