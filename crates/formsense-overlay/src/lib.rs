//! # FormSense-Overlay
//!
//! Visual overlay for the FormSense pose-comparison engine.
//!
//! The engine itself never touches pixels; everything here is written
//! against the [`Canvas`] trait, whose two primitives (filled circle,
//! text) map one-to-one onto an OpenCV-style drawing API. The session
//! entry points compose extraction, analysis, comparison and rendering
//! into the two workflows a host application needs: capturing a
//! reference pose and checking later frames against it.

pub mod canvas;
pub mod render;
pub mod session;

pub use canvas::*;
pub use render::*;
pub use session::*;
