//! Drawing surface abstraction.

use formsense_core::Bgr;

/// A mutable 2D drawing surface.
///
/// The two operations mirror the primitives of OpenCV-style APIs
/// (`circle` with a negative thickness, `put_text`), so an adapter over
/// a real image buffer is a direct passthrough. Coordinates are pixel
/// positions with the origin at the top-left and y growing downward.
/// Implementations are responsible for clamping color channels to their
/// displayable range.
pub trait Canvas {
    /// Draw a filled circle centered at `center`.
    fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Bgr);

    /// Draw a text string with its baseline origin at `origin`.
    fn put_text(
        &mut self,
        text: &str,
        origin: (i32, i32),
        font_scale: f64,
        color: Bgr,
        thickness: i32,
        antialias: bool,
    );
}

/// A recorded [`Canvas`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Circle {
        center: (i32, i32),
        radius: i32,
        color: Bgr,
    },
    Text {
        text: String,
        origin: (i32, i32),
        font_scale: f64,
        color: Bgr,
        thickness: i32,
        antialias: bool,
    },
}

/// Canvas that records every call instead of rasterizing.
///
/// The headless implementation: used by tests to assert on exactly what
/// the renderer emitted, and usable by hosts that forward draw calls to
/// a remote or deferred surface.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = ((i32, i32), i32, Bgr)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, (i32, i32), Bgr)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text {
                text,
                origin,
                color,
                ..
            } => Some((text.as_str(), *origin, *color)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Bgr) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn put_text(
        &mut self,
        text: &str,
        origin: (i32, i32),
        font_scale: f64,
        color: Bgr,
        thickness: i32,
        antialias: bool,
    ) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            origin,
            font_scale,
            color,
            thickness,
            antialias,
        });
    }
}
