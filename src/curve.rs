use std::f64::consts::{FRAC_PI_2, TAU};

use crate::params::ShapeParams;

/// Curve-space offset of one sample: direction and distance from the camera
/// position, before projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveOffset {
    pub angle: f64,
    pub length: f64,
}

/// Two-harmonic parametric curve: a low-frequency lobe pattern (`freq_main`,
/// rotated by the per-cycle camera angle) with a fine perpendicular ripple
/// (`freq_sub`, scaled by `amp_sub`) riding on it. `ip` is the sample's index
/// fraction in `[0,1)`; `scale` is the pixel scale of the whole figure.
pub fn curve_offset(ip: f64, shape: &ShapeParams, camera_angle: f64, scale: f64) -> CurveOffset {
    let ma = ip * TAU;
    let ml = (camera_angle + f64::from(shape.freq_main) * ma).sin() * scale;
    let mx = ma.cos() * ml;
    let my = ma.sin() * ml;

    let sa = ma + FRAC_PI_2;
    let sl = (f64::from(shape.freq_sub) * ma).sin() * scale * shape.amp_sub;
    let sx = sa.cos() * sl;
    let sy = sa.sin() * sl;

    CurveOffset {
        angle: (my + sy).atan2(mx + sx),
        length: (mx + sx).hypot(my + sy),
    }
}
