//! Tilt and limb-flexion analysis over an extracted joint set.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{angle_between, right_triangle_angle, vector};
use crate::types::{JointSet, Metric, PartialJointSet, PixelPoint};

/// Signed tilt between a symmetric joint pair, in degrees.
///
/// With y growing downward, the lead joint sitting higher on screen than
/// the follow joint gives a positive angle; level joints give 0.
pub fn tilt(lead: PixelPoint, follow: PixelPoint) -> f64 {
    let dy = lead.y - follow.y;
    if dy == 0.0 {
        return 0.0;
    }
    let angle = right_triangle_angle(dy.abs(), (lead.x - follow.x).abs());
    if dy < 0.0 {
        angle
    } else {
        -angle
    }
}

/// Flexion angle at `vertex` between the vectors toward its two adjacent
/// endpoints.
pub fn limb_angle(vertex: PixelPoint, end1: PixelPoint, end2: PixelPoint) -> Result<f64> {
    angle_between(&vector(vertex, end1), &vector(vertex, end2))
}

/// The six angle metrics computed for one frame.
///
/// Shoulder and hip tilt are always present. The four limb entries are
/// present only when all three contributing joints were available, which
/// is always the case for a set built by the extractor and only varies
/// for caller-supplied partial sets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleProfile {
    pub shoulders: f64,
    pub hips: f64,
    pub left_knee: Option<f64>,
    pub right_knee: Option<f64>,
    pub right_elbow: Option<f64>,
    pub left_elbow: Option<f64>,
}

impl AngleProfile {
    /// Analyze a complete joint set. All six metrics come out present.
    pub fn from_joints(joints: &JointSet) -> Result<Self> {
        Self::from_partial(&joints.into())
    }

    /// Analyze a possibly incomplete joint set.
    ///
    /// Shoulders and hips are mandatory; each limb metric is computed
    /// only when its vertex and both endpoints are present.
    pub fn from_partial(joints: &PartialJointSet) -> Result<Self> {
        let require = |point: Option<PixelPoint>, name: &'static str| {
            point.ok_or(Error::MissingJoint { name })
        };
        let left_shoulder = require(joints.left_shoulder, "left_shoulder")?;
        let right_shoulder = require(joints.right_shoulder, "right_shoulder")?;
        let left_hip = require(joints.left_hip, "left_hip")?;
        let right_hip = require(joints.right_hip, "right_hip")?;

        let mut profile = Self {
            shoulders: tilt(left_shoulder, right_shoulder),
            hips: tilt(left_hip, right_hip),
            left_knee: None,
            right_knee: None,
            right_elbow: None,
            left_elbow: None,
        };

        if let (Some(knee), Some(hip), Some(ankle)) =
            (joints.left_knee, joints.left_hip, joints.left_ankle)
        {
            profile.left_knee = Some(limb_angle(knee, hip, ankle)?);
        }
        if let (Some(knee), Some(hip), Some(ankle)) =
            (joints.right_knee, joints.right_hip, joints.right_ankle)
        {
            profile.right_knee = Some(limb_angle(knee, hip, ankle)?);
        }
        if let (Some(elbow), Some(shoulder), Some(wrist)) =
            (joints.right_elbow, joints.right_shoulder, joints.right_wrist)
        {
            profile.right_elbow = Some(limb_angle(elbow, shoulder, wrist)?);
        }
        if let (Some(elbow), Some(shoulder), Some(wrist)) =
            (joints.left_elbow, joints.left_shoulder, joints.left_wrist)
        {
            profile.left_elbow = Some(limb_angle(elbow, shoulder, wrist)?);
        }

        Ok(profile)
    }

    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Shoulders => Some(self.shoulders),
            Metric::Hips => Some(self.hips),
            Metric::LeftKnee => self.left_knee,
            Metric::RightKnee => self.right_knee,
            Metric::RightElbow => self.right_elbow,
            Metric::LeftElbow => self.left_elbow,
        }
    }

    /// Metrics present in both profiles, with (current, reference) values,
    /// in readout order.
    pub fn shared_with<'a>(
        &'a self,
        reference: &'a AngleProfile,
    ) -> impl Iterator<Item = (Metric, f64, f64)> + 'a {
        Metric::ALL.iter().filter_map(move |&metric| {
            match (self.get(metric), reference.get(metric)) {
                (Some(current), Some(refv)) => Some((metric, current, refv)),
                _ => None,
            }
        })
    }
}
