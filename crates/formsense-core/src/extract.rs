//! Resolution of canonical joints from raw model output.

use crate::error::{Error, Result};
use crate::types::{Joint, JointSet, KeypointSchema, PixelPoint, PredictionSet};

impl JointSet {
    /// Resolve all twelve canonical joints from a prediction set and its
    /// keypoint schema.
    ///
    /// There is no partial-success mode: an empty prediction set or a
    /// schema missing any canonical name fails the whole call, since a
    /// missing name means the model speaks an incompatible keypoint
    /// vocabulary.
    pub fn from_predictions(
        predictions: &PredictionSet,
        schema: &KeypointSchema,
    ) -> Result<Self> {
        let detection = predictions.primary().ok_or(Error::NoDetection)?;

        let resolve = |joint: Joint| -> Result<PixelPoint> {
            let name = joint.name();
            let index = schema
                .index_of(name)
                .ok_or(Error::KeypointLookup { name })?;
            detection
                .keypoints
                .get(index)
                .copied()
                .ok_or(Error::KeypointIndex {
                    name,
                    index,
                    available: detection.keypoints.len(),
                })
        };

        Ok(Self {
            left_wrist: resolve(Joint::LeftWrist)?,
            right_wrist: resolve(Joint::RightWrist)?,
            left_elbow: resolve(Joint::LeftElbow)?,
            right_elbow: resolve(Joint::RightElbow)?,
            left_knee: resolve(Joint::LeftKnee)?,
            right_knee: resolve(Joint::RightKnee)?,
            left_hip: resolve(Joint::LeftHip)?,
            right_hip: resolve(Joint::RightHip)?,
            left_shoulder: resolve(Joint::LeftShoulder)?,
            right_shoulder: resolve(Joint::RightShoulder)?,
            left_ankle: resolve(Joint::LeftAnkle)?,
            right_ankle: resolve(Joint::RightAnkle)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Detection;

    fn coco_detection() -> Detection {
        // One keypoint per COCO schema entry, positions encode the index.
        let keypoints = (0..17)
            .map(|i| PixelPoint::new(i as f64 * 10.0, i as f64 * 10.0 + 1.0))
            .collect();
        Detection::new(keypoints)
    }

    #[test]
    fn test_extraction_resolves_all_joints() {
        let predictions = PredictionSet::new(vec![coco_detection()]);
        let schema = KeypointSchema::coco();

        let joints = JointSet::from_predictions(&predictions, &schema).unwrap();
        // left_wrist is COCO index 9.
        assert_eq!(joints.left_wrist, PixelPoint::new(90.0, 91.0));
        // right_ankle is COCO index 16.
        assert_eq!(joints.right_ankle, PixelPoint::new(160.0, 161.0));
    }

    #[test]
    fn test_empty_predictions_fail() {
        let err = JointSet::from_predictions(&PredictionSet::default(), &KeypointSchema::coco());
        assert!(matches!(err, Err(Error::NoDetection)));
    }

    #[test]
    fn test_missing_schema_name_fails() {
        let names = [
            "left_wrist",
            "right_wrist",
            "left_elbow",
            "right_elbow",
            "left_knee",
            "right_knee",
            "left_hip",
            "right_hip",
            "left_shoulder",
            "right_shoulder",
            // left_ankle deliberately absent.
            "right_ankle",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let schema = KeypointSchema::new(names);
        let detection = Detection::new(vec![PixelPoint::origin(); 11]);

        let err = JointSet::from_predictions(&PredictionSet::new(vec![detection]), &schema);
        assert!(matches!(
            err,
            Err(Error::KeypointLookup { name: "left_ankle" })
        ));
    }

    #[test]
    fn test_short_position_list_fails() {
        let schema = KeypointSchema::coco();
        // Schema names 17 keypoints but the detection only carries 5.
        let detection = Detection::new(vec![PixelPoint::origin(); 5]);

        let err = JointSet::from_predictions(&PredictionSet::new(vec![detection]), &schema);
        assert!(matches!(err, Err(Error::KeypointIndex { .. })));
    }

    #[test]
    fn test_first_detection_wins() {
        let mut far = coco_detection();
        for kp in &mut far.keypoints {
            kp.x += 1000.0;
        }
        let predictions = PredictionSet::new(vec![coco_detection(), far]);

        let joints = JointSet::from_predictions(&predictions, &KeypointSchema::coco()).unwrap();
        assert_eq!(joints.left_wrist, PixelPoint::new(90.0, 91.0));
    }
}
