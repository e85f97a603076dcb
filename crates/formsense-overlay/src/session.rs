//! Session entry points: reference capture and per-frame comparison.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use formsense_core::{
    AngleProfile, JointSet, KeypointSchema, PredictionSet, Result,
};

use crate::canvas::Canvas;
use crate::render::{draw_angle_readout, draw_heatmap_markers, draw_reference_markers};

/// Identifier for one comparison session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// A captured reference pose.
///
/// Held by the caller for the duration of a comparison session and only
/// ever read by the engine; per-frame comparisons may share it freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    pub id: SessionId,
    pub captured_at: DateTime<Utc>,
    pub angles: AngleProfile,
}

impl Reference {
    pub fn new(angles: AngleProfile) -> Self {
        Self {
            id: SessionId::new(),
            captured_at: Utc::now(),
            angles,
        }
    }
}

/// Capture the current frame's pose as the session reference.
///
/// Runs extraction and analysis, draws plain joint markers (there is no
/// heatmap before a reference exists), and returns the reference the
/// caller holds for subsequent [`compare_to_reference`] calls.
pub fn create_reference<C: Canvas>(
    canvas: &mut C,
    predictions: &PredictionSet,
    schema: &KeypointSchema,
) -> Result<Reference> {
    let joints = JointSet::from_predictions(predictions, schema)?;
    let angles = AngleProfile::from_joints(&joints)?;
    draw_reference_markers(canvas, &joints);

    let reference = Reference::new(angles);
    tracing::debug!(
        session = %reference.id.0,
        shoulders = angles.shoulders,
        hips = angles.hips,
        "captured reference pose"
    );
    Ok(reference)
}

/// Check one frame against a previously captured reference.
///
/// Runs extraction and analysis, then draws the per-joint heatmap
/// markers and the angle/diff readout. Returns the frame's angle
/// profile so the caller can act on the numeric deviations as well.
pub fn compare_to_reference<C: Canvas>(
    canvas: &mut C,
    predictions: &PredictionSet,
    schema: &KeypointSchema,
    reference: &Reference,
) -> Result<AngleProfile> {
    let joints = JointSet::from_predictions(predictions, schema)?;
    let angles = AngleProfile::from_joints(&joints)?;
    draw_heatmap_markers(canvas, &joints, &angles, &reference.angles);
    draw_angle_readout(canvas, &angles, &reference.angles);
    Ok(angles)
}
