//! # FormSense-Core
//!
//! Joint-angle computation and reference-pose comparison engine.
//!
//! Given the 2D keypoints of a detected body, this crate extracts the
//! twelve canonical joints, computes torso tilt and limb flexion angles
//! via planar vector geometry, and maps the deviation from a stored
//! reference pose to a heatmap color per joint. All operations are pure
//! and synchronous; rendering lives in `formsense-overlay`.

pub mod analysis;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod heatmap;
pub mod types;

pub use analysis::*;
pub use error::{Error, Result};
pub use extract::*;
pub use geometry::*;
pub use heatmap::*;
pub use types::*;
