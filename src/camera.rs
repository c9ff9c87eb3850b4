use std::f64::consts::SQRT_2;

use kurbo::Point;

use crate::{
    curve::CurveOffset,
    error::{InkweedError, InkweedResult},
    frame::Canvas,
    rng::RandomSource,
};

/// Where the figure sits on the canvas, in canvas-normalized coordinates,
/// plus the per-cycle rotation of the lobe structure and the overall zoom.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraPosition {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub zoom: f64,
}

/// Focus point of the simulated depth of field. `x`/`y` move every frame
/// (eased sweep, or snapped to the pointer); `angle`/`length` describe the
/// sweep path chosen once per cycle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FocusTarget {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub length: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraState {
    pub position: CameraPosition,
    pub focus: FocusTarget,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: CameraPosition {
                x: 0.5,
                y: 0.5,
                angle: 2.4,
                zoom: 1.0,
            },
            focus: FocusTarget {
                x: 0.5,
                y: 0.5,
                angle: 0.0,
                length: 0.0,
            },
        }
    }
}

impl CameraState {
    pub fn validate(&self) -> InkweedResult<()> {
        for (name, v) in [
            ("position.x", self.position.x),
            ("position.y", self.position.y),
            ("position.angle", self.position.angle),
            ("focus.x", self.focus.x),
            ("focus.y", self.focus.y),
            ("focus.angle", self.focus.angle),
        ] {
            if !v.is_finite() {
                return Err(InkweedError::validation(format!("{name} must be finite")));
            }
        }
        if !self.position.zoom.is_finite() || self.position.zoom < 1.0 {
            return Err(InkweedError::validation("position.zoom must be >= 1"));
        }
        if !self.focus.length.is_finite() || self.focus.length < 0.0 {
            return Err(InkweedError::validation("focus.length must be >= 0"));
        }
        Ok(())
    }

    /// Redraw the per-cycle camera placement. The figure lands left-to-right
    /// anywhere in the middle band, alternating between the upper and lower
    /// half (`upper`), and the focus sweep always aims back at the canvas
    /// center.
    pub fn randomize(&mut self, rng: &mut dyn RandomSource, upper: bool) {
        self.position.x = rng.range_f64(0.1, 0.9);
        let side = if upper { -1.0 } else { 1.0 };
        self.position.y = 0.5 + rng.range_f64(0.2, 0.4) * side;
        self.position.angle = rng.unit_angle();
        self.position.zoom = rng.range_f64(1.0, 1.2);

        self.focus.angle = (0.5 - self.position.y).atan2(0.5 - self.position.x);
        self.focus.length = SQRT_2 * rng.range_f64(0.5, 1.0);
    }

    /// Current focus point in pixel space.
    pub fn focus_px(&self, canvas: Canvas) -> Point {
        Point::new(
            self.focus.x * f64::from(canvas.width),
            self.focus.y * f64::from(canvas.height),
        )
    }
}

/// Project a curve-space offset to pixel coordinates. Pure; performs no
/// clamping — off-canvas results are filtered by the stippler.
pub fn project(
    offset: CurveOffset,
    position: &CameraPosition,
    tilt: f64,
    canvas: Canvas,
) -> Point {
    Point::new(
        position.x * f64::from(canvas.width) + offset.angle.cos() * offset.length,
        position.y * f64::from(canvas.height) + offset.angle.sin() * offset.length * tilt,
    )
}
