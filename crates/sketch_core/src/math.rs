/// Clamp `v` into the interval spanned by `l1` and `l2`.
///
/// The bounds may be given in either order. NaN passes through unchanged.
pub fn constrain(v: f32, l1: f32, l2: f32) -> f32 {
    let lo = l1.min(l2);
    let hi = l1.max(l2);
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * constrain(t, 0.0, 1.0)
}

pub fn deg2rad(a: f32) -> f32 {
    a.to_radians()
}

pub fn rad2deg(a: f32) -> f32 {
    a.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_accepts_reversed_bounds() {
        assert_eq!(constrain(300.0, 255.0, 0.0), 255.0);
        assert_eq!(constrain(-4.0, 255.0, 0.0), 0.0);
        assert_eq!(constrain(12.5, 0.0, 255.0), 12.5);
    }

    #[test]
    fn lerp_clamps_t() {
        assert_eq!(lerp(0.0, 10.0, -1.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 2.0), 10.0);
        assert!((lerp(0.0, 10.0, 0.25) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn degrees_round_trip_through_radians() {
        assert!((deg2rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
        assert!((rad2deg(std::f32::consts::FRAC_PI_2) - 90.0).abs() < 1e-4);
    }
}
