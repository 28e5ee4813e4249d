//! Easing curves.

/// Easing curve applied to normalized tween progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease in/out.
    Power1InOut,
    /// Cubic ease in/out.
    #[default]
    Power2InOut,
}

impl Ease {
    /// Map progress `t` in 0.0-1.0 through the curve. Input is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 3] = [Ease::Linear, Ease::Power1InOut, Ease::Power2InOut];

    #[test]
    fn endpoints_are_exact() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        }
    }

    #[test]
    fn midpoint_is_half() {
        for ease in ALL {
            assert!((ease.apply(0.5) - 0.5).abs() < 1e-6, "{ease:?}");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for ease in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = ease.apply(i as f32 / 100.0);
                assert!(v >= prev, "{ease:?} dipped at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn cubic_starts_slower_than_quadratic() {
        assert!(Ease::Power2InOut.apply(0.2) < Ease::Power1InOut.apply(0.2));
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Ease::Power1InOut.apply(-1.0), 0.0);
        assert_eq!(Ease::Power2InOut.apply(2.0), 1.0);
    }
}
