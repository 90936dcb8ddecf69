//! Computational geometry for recovering the base ("plinth") of a sculpture from one
//! photograph and placing blocks on it.
//!
//! ## Depth ambiguity
//!
//! A homography from the image plane to the unit square tells us where every pixel
//! lands on the base, but lifting the unit square back into 3d leaves one unknown: the
//! focal length, expressed here as the depth scale `λ`. The inverse homography gives
//! pre-images `(x, y, z)` whose `x` and `y` are correct while the true depth is `λ·z`.
//! The base is known to be a rectangle, so its two edges from a shared corner must be
//! orthogonal in 3d, and that single constraint fixes `λ`.
//!
//! - `O` the optical center of the camera
//! - `@` the virtual image plane, `λ` away from `O`
//! - `o`, `u`, `v` the origin corner and the ends of the two base edges
//!
//! ```text
//!            u
//!           / \
//!          /   \  base
//!         o     \
//!          \     v
//!   @@@@@@@@\@@@@/@@@@@
//!            \  /
//!             \/
//!             O
//! ```
//!
//! ## Osculation
//!
//! Blocks resting on the base are placed from additional marked points. Rather than
//! place each block independently, the marked points are first adjusted so that
//! neighbouring blocks share an edge exactly.

mod aspect;
mod block;
mod depth;
mod frame;
mod interior;

pub use aspect::*;
pub use block::*;
pub use depth::*;
pub use frame::*;
pub use interior::*;
