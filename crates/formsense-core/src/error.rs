//! Error types for the FormSense engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("prediction set contains no detections")]
    NoDetection,

    #[error("keypoint '{name}' missing from model schema")]
    KeypointLookup { name: &'static str },

    #[error("keypoint '{name}' resolves to index {index}, but only {available} positions were supplied")]
    KeypointIndex {
        name: &'static str,
        index: usize,
        available: usize,
    },

    #[error("cosine ratio {ratio} outside valid domain for inverse cosine")]
    CosineDomain { ratio: f64 },

    #[error("joint '{name}' missing from partial joint set")]
    MissingJoint { name: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
