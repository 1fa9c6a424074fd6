//! Easing curves for the result banner.
//!
//! `Ease` is the CSS/React Native `ease` curve, cubic-bezier(0.42, 0, 1, 1).
//! `EaseInOut` mirrors it around the midpoint, the same construction as
//! `Easing.inOut(Easing.ease)`.

use serde::{Deserialize, Serialize};

/// Maps linear reveal progress in [0,1] to banner opacity in [0,1].
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    Ease,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the curve. Input is clamped to [0,1].
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::Ease => EASE.sample(t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    EASE.sample(t * 2.0) / 2.0
                } else {
                    1.0 - EASE.sample((1.0 - t) * 2.0) / 2.0
                }
            }
        }
    }
}

/// Cubic bezier from (0,0) to (1,1) with two control points.
struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

const EASE: CubicBezier = CubicBezier {
    x1: 0.42,
    y1: 0.0,
    x2: 1.0,
    y2: 1.0,
};

const EPSILON: f64 = 1e-7;

impl CubicBezier {
    fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    fn x_at(&self, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(self.x1, self.x2);
        ((a * t + b) * t + c) * t
    }

    fn y_at(&self, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(self.y1, self.y2);
        ((a * t + b) * t + c) * t
    }

    fn dx_at(&self, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(self.x1, self.x2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Solve x(t) = x for t, then return y(t).
    fn sample(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let x = f64::from(x);

        // Newton first; it converges in a few steps away from flat regions.
        let mut t = x;
        for _ in 0..8 {
            let err = self.x_at(t) - x;
            if err.abs() < EPSILON {
                return self.y_at(t) as f32;
            }
            let slope = self.dx_at(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - err / slope).clamp(0.0, 1.0);
        }

        // x(t) is monotonic on [0,1], so bisection always lands.
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let value = self.x_at(t);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        self.y_at(t) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 3] = [Easing::Linear, Easing::Ease, Easing::EaseInOut];

    #[test]
    fn test_endpoints() {
        for easing in CURVES {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_clamps_input() {
        for easing in CURVES {
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.5), 1.0);
            assert_eq!(easing.apply(f32::NAN), 0.0);
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in CURVES {
            let mut previous = 0.0;
            for step in 0..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!(value + 1e-5 >= previous, "{easing:?} dips at step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn test_ease_starts_slow() {
        // cubic-bezier(0.42, 0, 1, 1) at x = 0.5 is about 0.315
        let mid = Easing::Ease.apply(0.5);
        assert!((mid - 0.315).abs() < 0.01, "got {mid}");
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-4);
        for step in 1..50 {
            let t = step as f32 / 100.0;
            let low = Easing::EaseInOut.apply(t);
            let high = Easing::EaseInOut.apply(1.0 - t);
            assert!((low + high - 1.0).abs() < 1e-4, "asymmetric at {t}");
        }
    }
}
