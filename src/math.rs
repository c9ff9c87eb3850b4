/// Linear interpolation between `a` and `b` at parameter `t` (unclamped).
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Remap `v` from the range `[in_lo, in_hi]` onto `[out_lo, out_hi]`
/// (unclamped, like the affine remap used everywhere in the render path).
pub fn remap(v: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    out_lo + (v - in_lo) / (in_hi - in_lo) * (out_hi - out_lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_are_exact() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn lerp_extrapolates_outside_unit_range() {
        assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), -10.0);
    }

    #[test]
    fn remap_matches_lerp_on_unit_input() {
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(remap(t, 0.0, 1.0, 5.0, 10.0), lerp(5.0, 10.0, t));
        }
    }

    #[test]
    fn remap_general_ranges() {
        assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(remap(0.0, -1.0, 1.0, 0.0, 8.0), 4.0);
    }
}
