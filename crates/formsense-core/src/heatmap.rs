//! Deviation-to-color mapping for per-joint heatmap markers.

use serde::{Deserialize, Serialize};

/// Color with f64 channels in blue, green, red order, matching the
/// channel convention of OpenCV-style canvases.
///
/// Channels are deliberately left unclamped here; the red channel of a
/// heatmap color grows without bound and display clamping belongs to
/// the canvas implementation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bgr {
    pub blue: f64,
    pub green: f64,
    pub red: f64,
}

impl Bgr {
    pub const fn new(blue: f64, green: f64, red: f64) -> Self {
        Self { blue, green, red }
    }

    pub const BLACK: Bgr = Bgr::new(0.0, 0.0, 0.0);
    pub const WHITE: Bgr = Bgr::new(255.0, 255.0, 255.0);
}

/// Color encoding how far `current` deviates from `reference`, in degrees.
///
/// Green fades linearly and bottoms out at a 12.75° deviation; red grows
/// linearly without bound. A perfect match is pure green. The constants
/// are load-bearing for golden-image comparisons, so they are not
/// tunable.
pub fn heatmap_color(reference: f64, current: f64) -> Bgr {
    let difference = (reference - current).abs();
    let green = (255.0 - difference * 20.0).max(0.0);
    let red = 10.0 * difference;
    Bgr::new(0.0, green, red)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_deviation_is_pure_green() {
        for value in [-45.0, 0.0, 12.345, 179.0] {
            assert_eq!(heatmap_color(value, value), Bgr::new(0.0, 255.0, 0.0));
        }
    }

    #[test]
    fn test_symmetric_in_argument_order() {
        assert_eq!(heatmap_color(30.0, 11.5), heatmap_color(11.5, 30.0));
        assert_eq!(heatmap_color(-4.0, 9.0), heatmap_color(9.0, -4.0));
    }

    #[test]
    fn test_green_saturates_at_boundary() {
        let at_boundary = heatmap_color(0.0, 12.75);
        assert_eq!(at_boundary.green, 0.0);

        let beyond = heatmap_color(0.0, 40.0);
        assert_eq!(beyond.green, 0.0);
    }

    #[test]
    fn test_red_is_unclamped() {
        let color = heatmap_color(0.0, 30.0);
        assert_eq!(color.red, 300.0);
        assert_eq!(color.blue, 0.0);
    }

    #[test]
    fn test_small_deviation_stays_green_dominant() {
        let color = heatmap_color(10.0, 12.0);
        assert_eq!(color.green, 215.0);
        assert_eq!(color.red, 20.0);
    }
}
