//! Easing curves mapping normalized time to normalized progress.

/// Time curve applied to an animation's normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Quadratic, accelerating through the first half and decelerating
    /// through the second. Used for in-page anchor navigation.
    EaseInOutQuad,
    /// Cubic, slow start and fast finish. Used for scroll-to-top.
    EaseInCubic,
}

impl Easing {
    /// Evaluates the curve at `t`. Inputs outside `[0, 1]` are clamped, so
    /// `apply(0.0) == 0.0` and `apply(1.0) == 1.0` for every curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 2] = [Easing::EaseInOutQuad, Easing::EaseInCubic];

    #[test]
    fn test_endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let e = Easing::EaseInOutQuad;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((e.apply(t) + e.apply(1.0 - t) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ease_in_cubic_starts_slow() {
        let e = Easing::EaseInCubic;
        assert!(e.apply(0.25) < 0.25);
        assert!((e.apply(0.5) - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.3), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(i as f64 / 100.0);
                assert!(v >= prev, "{:?} decreased at step {}", easing, i);
                prev = v;
            }
        }
    }
}
