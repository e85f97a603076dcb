//! Fundamental types for the FormSense engine.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// 2D position in pixel space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn to_nalgebra(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn from_nalgebra(p: Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rounded integer pixel coordinates for drawing.
    pub fn to_pixel(&self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

/// The twelve canonical joints the engine analyzes.
///
/// Iteration order of [`Joint::ALL`] is the order markers are drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Joint {
    LeftWrist,
    RightWrist,
    LeftElbow,
    RightElbow,
    LeftKnee,
    RightKnee,
    LeftHip,
    RightHip,
    LeftShoulder,
    RightShoulder,
    LeftAnkle,
    RightAnkle,
}

impl Joint {
    pub const COUNT: usize = 12;

    pub const ALL: [Joint; Self::COUNT] = [
        Joint::LeftWrist,
        Joint::RightWrist,
        Joint::LeftElbow,
        Joint::RightElbow,
        Joint::LeftKnee,
        Joint::RightKnee,
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftShoulder,
        Joint::RightShoulder,
        Joint::LeftAnkle,
        Joint::RightAnkle,
    ];

    /// Wire name used by pose-estimation model schemas.
    pub fn name(&self) -> &'static str {
        match self {
            Joint::LeftWrist => "left_wrist",
            Joint::RightWrist => "right_wrist",
            Joint::LeftElbow => "left_elbow",
            Joint::RightElbow => "right_elbow",
            Joint::LeftKnee => "left_knee",
            Joint::RightKnee => "right_knee",
            Joint::LeftHip => "left_hip",
            Joint::RightHip => "right_hip",
            Joint::LeftShoulder => "left_shoulder",
            Joint::RightShoulder => "right_shoulder",
            Joint::LeftAnkle => "left_ankle",
            Joint::RightAnkle => "right_ankle",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|j| j.name() == name)
    }

    /// The angle metric computed at this joint, if any.
    ///
    /// Only elbows and knees carry their own flexion metric; shoulders and
    /// hips contribute to the paired tilt metrics instead, and wrists and
    /// ankles only serve as limb endpoints.
    pub fn own_metric(&self) -> Option<Metric> {
        match self {
            Joint::LeftElbow => Some(Metric::LeftElbow),
            Joint::RightElbow => Some(Metric::RightElbow),
            Joint::LeftKnee => Some(Metric::LeftKnee),
            Joint::RightKnee => Some(Metric::RightKnee),
            _ => None,
        }
    }
}

/// The six angle metrics of an [`AngleProfile`](crate::analysis::AngleProfile).
///
/// Iteration order of [`Metric::ALL`] is the order of the on-screen readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Shoulders,
    Hips,
    LeftKnee,
    RightKnee,
    RightElbow,
    LeftElbow,
}

impl Metric {
    pub const COUNT: usize = 6;

    pub const ALL: [Metric; Self::COUNT] = [
        Metric::Shoulders,
        Metric::Hips,
        Metric::LeftKnee,
        Metric::RightKnee,
        Metric::RightElbow,
        Metric::LeftElbow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Shoulders => "shoulders",
            Metric::Hips => "hips",
            Metric::LeftKnee => "left_knee",
            Metric::RightKnee => "right_knee",
            Metric::RightElbow => "right_elbow",
            Metric::LeftElbow => "left_elbow",
        }
    }
}

/// A single body detection from the pose-estimation collaborator.
///
/// Keypoint positions are index-aligned with the names in the
/// [`KeypointSchema`] supplied alongside the prediction set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub keypoints: Vec<PixelPoint>,
}

impl Detection {
    pub fn new(keypoints: Vec<PixelPoint>) -> Self {
        Self { keypoints }
    }
}

/// Everything the pose model produced for one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionSet {
    pub detections: Vec<Detection>,
}

impl PredictionSet {
    pub fn new(detections: Vec<Detection>) -> Self {
        Self { detections }
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    /// The detection the engine analyzes. Multi-person frames use the first.
    pub fn primary(&self) -> Option<&Detection> {
        self.detections.first()
    }
}

/// Ordered keypoint names from the model's metadata, index-aligned with
/// each detection's position list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeypointSchema {
    names: Vec<String>,
}

impl KeypointSchema {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// COCO-style 17-keypoint schema, the common case in practice.
    pub fn coco() -> Self {
        Self::new(
            [
                "nose",
                "left_eye",
                "right_eye",
                "left_ear",
                "right_ear",
                "left_shoulder",
                "right_shoulder",
                "left_elbow",
                "right_elbow",
                "left_wrist",
                "right_wrist",
                "left_hip",
                "right_hip",
                "left_knee",
                "right_knee",
                "left_ankle",
                "right_ankle",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// All twelve canonical joints of one detected body.
///
/// Fixed fields rather than a string-keyed map, so every joint name is
/// covered at compile time. Construction goes through
/// [`JointSet::from_predictions`](crate::extract) and fails unless all
/// twelve joints resolve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointSet {
    pub left_wrist: PixelPoint,
    pub right_wrist: PixelPoint,
    pub left_elbow: PixelPoint,
    pub right_elbow: PixelPoint,
    pub left_knee: PixelPoint,
    pub right_knee: PixelPoint,
    pub left_hip: PixelPoint,
    pub right_hip: PixelPoint,
    pub left_shoulder: PixelPoint,
    pub right_shoulder: PixelPoint,
    pub left_ankle: PixelPoint,
    pub right_ankle: PixelPoint,
}

impl JointSet {
    pub fn get(&self, joint: Joint) -> PixelPoint {
        match joint {
            Joint::LeftWrist => self.left_wrist,
            Joint::RightWrist => self.right_wrist,
            Joint::LeftElbow => self.left_elbow,
            Joint::RightElbow => self.right_elbow,
            Joint::LeftKnee => self.left_knee,
            Joint::RightKnee => self.right_knee,
            Joint::LeftHip => self.left_hip,
            Joint::RightHip => self.right_hip,
            Joint::LeftShoulder => self.left_shoulder,
            Joint::RightShoulder => self.right_shoulder,
            Joint::LeftAnkle => self.left_ankle,
            Joint::RightAnkle => self.right_ankle,
        }
    }

    /// Joints with their positions, in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = (Joint, PixelPoint)> + '_ {
        Joint::ALL.iter().map(move |&j| (j, self.get(j)))
    }
}

/// A possibly incomplete joint map, for callers that feed the analyzer
/// directly instead of going through the extractor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialJointSet {
    pub left_wrist: Option<PixelPoint>,
    pub right_wrist: Option<PixelPoint>,
    pub left_elbow: Option<PixelPoint>,
    pub right_elbow: Option<PixelPoint>,
    pub left_knee: Option<PixelPoint>,
    pub right_knee: Option<PixelPoint>,
    pub left_hip: Option<PixelPoint>,
    pub right_hip: Option<PixelPoint>,
    pub left_shoulder: Option<PixelPoint>,
    pub right_shoulder: Option<PixelPoint>,
    pub left_ankle: Option<PixelPoint>,
    pub right_ankle: Option<PixelPoint>,
}

impl PartialJointSet {
    pub fn get(&self, joint: Joint) -> Option<PixelPoint> {
        match joint {
            Joint::LeftWrist => self.left_wrist,
            Joint::RightWrist => self.right_wrist,
            Joint::LeftElbow => self.left_elbow,
            Joint::RightElbow => self.right_elbow,
            Joint::LeftKnee => self.left_knee,
            Joint::RightKnee => self.right_knee,
            Joint::LeftHip => self.left_hip,
            Joint::RightHip => self.right_hip,
            Joint::LeftShoulder => self.left_shoulder,
            Joint::RightShoulder => self.right_shoulder,
            Joint::LeftAnkle => self.left_ankle,
            Joint::RightAnkle => self.right_ankle,
        }
    }
}

impl From<&JointSet> for PartialJointSet {
    fn from(joints: &JointSet) -> Self {
        Self {
            left_wrist: Some(joints.left_wrist),
            right_wrist: Some(joints.right_wrist),
            left_elbow: Some(joints.left_elbow),
            right_elbow: Some(joints.right_elbow),
            left_knee: Some(joints.left_knee),
            right_knee: Some(joints.right_knee),
            left_hip: Some(joints.left_hip),
            right_hip: Some(joints.right_hip),
            left_shoulder: Some(joints.left_shoulder),
            right_shoulder: Some(joints.right_shoulder),
            left_ankle: Some(joints.left_ankle),
            right_ankle: Some(joints.right_ankle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_name_roundtrip() {
        for joint in Joint::ALL {
            assert_eq!(Joint::from_name(joint.name()), Some(joint));
        }
        assert_eq!(Joint::from_name("nose"), None);
    }

    #[test]
    fn test_coco_schema_covers_all_joints() {
        let schema = KeypointSchema::coco();
        for joint in Joint::ALL {
            assert!(schema.index_of(joint.name()).is_some(), "{}", joint.name());
        }
    }

    #[test]
    fn test_pixel_point_distance() {
        let p1 = PixelPoint::new(0.0, 0.0);
        let p2 = PixelPoint::new(3.0, 4.0);
        assert!((p1.distance_to(&p2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_own_metric_only_for_elbows_and_knees() {
        assert_eq!(Joint::LeftElbow.own_metric(), Some(Metric::LeftElbow));
        assert_eq!(Joint::RightKnee.own_metric(), Some(Metric::RightKnee));
        assert_eq!(Joint::LeftWrist.own_metric(), None);
        assert_eq!(Joint::LeftShoulder.own_metric(), None);
    }
}
