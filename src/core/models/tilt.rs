use std::fmt;

use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle of the tilt viewport in the same coordinate space as the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewportRect {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltStyle {
    pub rotate_x_degrees: f64,
    pub rotate_y_degrees: f64,
    pub pointer_x_percent: f64,
    pub pointer_y_percent: f64,
}

impl TiltStyle {
    pub fn neutral() -> Self {
        Self {
            rotate_x_degrees: 0.0,
            rotate_y_degrees: 0.0,
            pointer_x_percent: 50.0,
            pointer_y_percent: 50.0,
        }
    }

    pub fn css_declarations(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TiltStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "--rx: {:.2}deg; --ry: {:.2}deg; --mx: {:.1}%; --my: {:.1}%;",
            self.rotate_x_degrees,
            self.rotate_y_degrees,
            self.pointer_x_percent,
            self.pointer_y_percent
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltMapping {
    pub max_tilt_degrees: f64,
}

impl Default for TiltMapping {
    fn default() -> Self {
        Self {
            max_tilt_degrees: global_constants::DEFAULT_MAX_TILT_DEGREES,
        }
    }
}

impl TiltMapping {
    pub fn with_max_tilt(max_tilt_degrees: f64) -> Self {
        Self {
            max_tilt_degrees: max_tilt_degrees.abs(),
        }
    }

    /// Maps the pointer linearly onto the viewport. The centre is flat and the edges tilt by
    /// `max_tilt_degrees`; pointers outside the viewport are clamped to its edges.
    pub fn map(&self, pointer: PointerPosition, viewport: ViewportRect) -> TiltStyle {
        if viewport.is_degenerate() {
            return TiltStyle::neutral();
        }

        let relative_x = ((pointer.x - viewport.left) / viewport.width).clamp(0.0, 1.0);
        let relative_y = ((pointer.y - viewport.top) / viewport.height).clamp(0.0, 1.0);
        let offset_x = relative_x - 0.5;
        let offset_y = 0.5 - relative_y;

        TiltStyle {
            rotate_x_degrees: offset_y * 2.0 * self.max_tilt_degrees,
            rotate_y_degrees: offset_x * 2.0 * self.max_tilt_degrees,
            pointer_x_percent: relative_x * 100.0,
            pointer_y_percent: relative_y * 100.0,
        }
    }
}
