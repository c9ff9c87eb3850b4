use crate::{
    bokeh::defocus_weight,
    camera::{CameraState, project},
    curve::curve_offset,
    frame::FrameBuffer,
    params::{BokehParams, ShapeParams},
    rng::RandomSource,
    stipple::stipple_dot,
};

/// One stipple pass: run every curve sample through generation, projection,
/// defocus weighting and dot scatter. `sample_count == 0` is a no-op. The
/// caller applies the fade-to-white before this and presents after.
pub fn render_pass(
    frame: &mut FrameBuffer,
    shape: &ShapeParams,
    camera: &CameraState,
    bokeh: &BokehParams,
    phase: f64,
    rng: &mut dyn RandomSource,
) {
    if shape.sample_count == 0 {
        return;
    }

    let canvas = frame.canvas();
    let scale = canvas.min_extent() * camera.position.zoom;
    let focus_px = camera.focus_px(canvas);
    let n = shape.sample_count;

    for i in 0..n {
        let ip = i as f64 / n as f64;
        let offset = curve_offset(ip, shape, camera.position.angle, scale);
        let p = project(offset, &camera.position, shape.tilt, canvas);
        let weight = defocus_weight(p, focus_px, bokeh, phase);
        stipple_dot(frame, p, weight, bokeh, shape.darkness, rng);
    }
}
