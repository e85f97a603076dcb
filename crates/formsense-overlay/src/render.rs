//! Marker and readout rendering against a [`Canvas`].

use formsense_core::{heatmap_color, AngleProfile, Bgr, Joint, JointSet};

use crate::canvas::Canvas;

/// Radius of the per-joint indicator circles.
pub const INDICATOR_RADIUS: i32 = 10;

/// Baseline y of the first readout line.
const READOUT_TOP: i32 = 20;

/// Vertical spacing between readout lines.
const LINE_SPACING: i32 = 20;

const FONT_SCALE: f64 = 0.75;
const OUTLINE_THICKNESS: i32 = 2;
const FILL_THICKNESS: i32 = 1;

/// Plain markers at every joint, for frames captured as a reference
/// (no heatmap exists yet).
pub fn draw_reference_markers<C: Canvas>(canvas: &mut C, joints: &JointSet) {
    for (_, position) in joints.iter() {
        canvas.fill_circle(position.to_pixel(), INDICATOR_RADIUS, Bgr::WHITE);
    }
}

/// Heatmap markers encoding each joint's deviation from the reference.
///
/// Shoulder and hip joints carry the paired tilt metric's color; elbow
/// and knee joints carry their own flexion metric's color when it is
/// present in both profiles. Wrists and ankles get no marker, they only
/// serve as limb endpoints.
pub fn draw_heatmap_markers<C: Canvas>(
    canvas: &mut C,
    joints: &JointSet,
    current: &AngleProfile,
    reference: &AngleProfile,
) {
    for (joint, position) in joints.iter() {
        let color = match joint {
            Joint::LeftShoulder | Joint::RightShoulder => {
                Some(heatmap_color(reference.shoulders, current.shoulders))
            }
            Joint::LeftHip | Joint::RightHip => {
                Some(heatmap_color(reference.hips, current.hips))
            }
            _ => joint.own_metric().and_then(|metric| {
                match (reference.get(metric), current.get(metric)) {
                    (Some(refv), Some(cur)) => Some(heatmap_color(refv, cur)),
                    _ => None,
                }
            }),
        };
        if let Some(color) = color {
            canvas.fill_circle(position.to_pixel(), INDICATOR_RADIUS, color);
        }
    }
}

/// Text readout of every metric shared by the two profiles, stacked from
/// the top-left corner.
///
/// Each line is drawn twice, a thick dark outline then a thin light
/// fill, so it stays legible against arbitrary backgrounds.
pub fn draw_angle_readout<C: Canvas>(
    canvas: &mut C,
    current: &AngleProfile,
    reference: &AngleProfile,
) {
    let mut y = READOUT_TOP;
    for (metric, value, refv) in current.shared_with(reference) {
        let text = format!(
            "{}: Angle = {:.2}, Diff = {:.2}",
            metric.name(),
            value,
            value - refv
        );
        canvas.put_text(&text, (0, y), FONT_SCALE, Bgr::BLACK, OUTLINE_THICKNESS, true);
        canvas.put_text(&text, (0, y), FONT_SCALE, Bgr::WHITE, FILL_THICKNESS, true);
        y += LINE_SPACING;
    }
}
