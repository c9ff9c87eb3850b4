use std::f64::consts::PI;

use kurbo::Point;

use crate::params::BokehParams;

/// Defocus weight in `[0,1]` for a projected sample: 0 at the focus (sharp),
/// approaching 1 far away (maximally scattered and faded).
///
/// Linear mode measures distance only along the vertical axis (a horizontal
/// focus band, doubled to tighten it); radial mode measures straight-line
/// distance to the focus point. A `cos(t*pi)^48` pulse biases the distance by
/// up to 2000 px right after a cycle reset, so each new figure starts fully
/// defocused, snaps sharp, then blurs back out as the cycle ages.
pub fn defocus_weight(p: Point, focus_px: Point, bokeh: &BokehParams, phase: f64) -> f64 {
    if !bokeh.enabled {
        return 0.0;
    }

    let d = if bokeh.linear {
        (p.y - focus_px.y).abs() * 2.0
    } else {
        p.distance(focus_px)
    };
    let td = (phase * PI).cos().powi(48) * 2000.0;

    let u = (d + td) * 0.002;
    1.0 - (-(u * u) / (2.0 * bokeh.sigma * bokeh.sigma)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radial() -> BokehParams {
        BokehParams {
            linear: false,
            ..BokehParams::default()
        }
    }

    #[test]
    fn disabled_returns_exactly_zero_for_any_input() {
        let bokeh = BokehParams {
            enabled: false,
            ..BokehParams::default()
        };
        for (x, y, t) in [(0.0, 0.0, 0.0), (1e6, -1e6, 0.5), (50.0, 100.0, 0.99)] {
            assert_eq!(
                defocus_weight(Point::new(x, y), Point::new(3.0, 4.0), &bokeh, t),
                0.0
            );
        }
    }

    #[test]
    fn weight_is_zero_at_focus_mid_cycle() {
        // At t=0.5 the time pulse vanishes, so an on-focus sample is sharp.
        let w = defocus_weight(
            Point::new(50.0, 100.0),
            Point::new(0.0, 100.0),
            &BokehParams::default(),
            0.5,
        );
        assert!(w.abs() < 1e-12, "w={w}");
    }

    #[test]
    fn weight_is_monotone_in_distance() {
        let bokeh = radial();
        let focus = Point::new(100.0, 100.0);
        let mut prev = -1.0;
        for d in 0..400 {
            let w = defocus_weight(
                Point::new(100.0 + f64::from(d), 100.0),
                focus,
                &bokeh,
                0.5,
            );
            assert!(w >= prev);
            assert!((0.0..=1.0).contains(&w));
            prev = w;
        }
    }

    #[test]
    fn cycle_start_pulse_defocuses_everything() {
        // Right at t=0 the pulse alone pushes the weight near 1 even on focus.
        let focus = Point::new(100.0, 100.0);
        let w = defocus_weight(focus, focus, &radial(), 0.0);
        assert!(w > 0.6, "w={w}");
    }

    #[test]
    fn is_a_pure_function() {
        let p = Point::new(12.0, 34.0);
        let f = Point::new(56.0, 78.0);
        let bokeh = BokehParams::default();
        assert_eq!(
            defocus_weight(p, f, &bokeh, 0.3),
            defocus_weight(p, f, &bokeh, 0.3)
        );
    }

    #[test]
    fn linear_mode_ignores_horizontal_offset() {
        let bokeh = BokehParams::default();
        let focus = Point::new(0.0, 100.0);
        let a = defocus_weight(Point::new(50.0, 130.0), focus, &bokeh, 0.5);
        let b = defocus_weight(Point::new(-500.0, 130.0), focus, &bokeh, 0.5);
        assert_eq!(a, b);
    }
}
