use kurbo::Point;

use crate::{
    frame::FrameBuffer,
    math::lerp,
    params::{BokehParams, DarknessRange},
    rng::RandomSource,
};

/// Scatter one stippled "dot": several jittered sub-dots multiplicatively
/// darkening the buffer around `origin`. The defocus weight drives all three
/// knobs at once — scatter radius (1 px sharp, `max_dot_radius` defocused),
/// sub-dot count (5 to 10) and darkening factor (`darkness.min` to `.max`).
///
/// An off-buffer origin is a silent no-op; the pipeline produces those
/// routinely. Individual sub-dots falling off the buffer are dropped the same
/// way. The blue channel is biased by 1.002 for a faint warm/cool split
/// between ink layers.
pub fn stipple_dot(
    frame: &mut FrameBuffer,
    origin: Point,
    weight: f64,
    bokeh: &BokehParams,
    darkness: DarknessRange,
    rng: &mut dyn RandomSource,
) {
    if !frame.contains(origin.x, origin.y) {
        return;
    }

    let radius = lerp(1.0, bokeh.max_dot_radius, weight);
    let count = lerp(5.0, 10.0, weight).round() as u32;
    let al = lerp(darkness.min, darkness.max, weight);

    for _ in 0..count {
        let da = rng.unit_angle();
        let dl = rng.range_f64(0.0, radius);
        let x = (origin.x + da.cos() * dl).round() as i64;
        let y = (origin.y + da.sin() * dl).round() as i64;
        frame.darken_px(x, y, [al, al, al * 1.002]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{frame::Canvas, rng::EntropyRandom};

    fn white_frame(w: u32, h: u32) -> FrameBuffer {
        FrameBuffer::from_raw(Canvas::new(w, h).unwrap(), vec![255u8; (w * h * 4) as usize])
            .unwrap()
    }

    #[test]
    fn out_of_bounds_origin_is_a_no_op() {
        let mut rng = EntropyRandom::seeded(1);
        let bokeh = BokehParams::default();
        let darkness = DarknessRange { min: 0.5, max: 0.9 };
        let mut frame = white_frame(8, 8);
        let before = frame.data().to_vec();

        for (x, y) in [
            (-0.001, 4.0),
            (4.0, -0.001),
            (8.0, 4.0),
            (4.0, 8.0),
            (1e12, 1e12),
            (-1e12, 0.0),
            (f64::NAN, 4.0),
            (4.0, f64::INFINITY),
        ] {
            stipple_dot(&mut frame, Point::new(x, y), 0.5, &bokeh, darkness, &mut rng);
        }
        assert_eq!(frame.data(), &before[..]);
    }

    #[test]
    fn never_panics_on_radius_larger_than_buffer() {
        let mut rng = EntropyRandom::seeded(2);
        let bokeh = BokehParams {
            max_dot_radius: 400.0,
            ..BokehParams::default()
        };
        let darkness = DarknessRange { min: 0.9, max: 1.0 };
        let mut frame = white_frame(4, 4);
        for _ in 0..200 {
            stipple_dot(&mut frame, Point::new(2.0, 2.0), 1.0, &bokeh, darkness, &mut rng);
        }
        // Whatever landed, it landed inside the 4x4 buffer.
        assert_eq!(frame.data().len(), 4 * 4 * 4);
    }

    #[test]
    fn sharp_dot_darkens_only_near_the_origin() {
        let mut rng = EntropyRandom::seeded(3);
        let bokeh = BokehParams::default();
        let darkness = DarknessRange { min: 0.5, max: 1.0 };
        let mut frame = white_frame(16, 16);

        // weight 0: radius 1, darkening factor darkness.min.
        stipple_dot(&mut frame, Point::new(8.0, 8.0), 0.0, &bokeh, darkness, &mut rng);

        let mut touched = 0;
        for y in 0..16u32 {
            for x in 0..16u32 {
                let px = frame.pixel(x, y).unwrap();
                if px[0] != 255 {
                    touched += 1;
                    let dx = f64::from(x) - 8.0;
                    let dy = f64::from(y) - 8.0;
                    assert!(dx.hypot(dy) <= 1.5, "write too far at ({x},{y})");
                    // Multiplicative: one hit gives 128, overlaps compound.
                    assert!(px[0] <= 128);
                }
                assert_eq!(px[3], 255);
            }
        }
        assert!(touched >= 1 && touched <= 5);
    }

    #[test]
    fn overlapping_writes_compound_multiplicatively() {
        let mut rng = EntropyRandom::seeded(4);
        let bokeh = BokehParams {
            max_dot_radius: 1.0,
            ..BokehParams::default()
        };
        let darkness = DarknessRange { min: 0.9, max: 0.9 };
        let mut frame = white_frame(3, 3);
        for _ in 0..50 {
            stipple_dot(&mut frame, Point::new(1.0, 1.0), 0.0, &bokeh, darkness, &mut rng);
        }
        let center = frame.pixel(1, 1).unwrap();
        assert!(center[0] < 200, "center did not accumulate: {center:?}");
    }
}
