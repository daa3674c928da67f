// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing curves for placeholder transitions.

/// Timing curve of a transition.
///
/// The eased variants are the standard cubic-bezier timing functions with
/// endpoints fixed at `(0, 0)` and `(1, 1)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Curve {
    /// Constant speed.
    Linear,
    /// Slow start: `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// Slow end: `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// Slow start and end: `cubic-bezier(0.42, 0, 0.58, 1)`.
    #[default]
    EaseInOut,
}

impl Curve {
    /// Bisection steps; enough for sub-pixel accuracy on any realistic duration.
    const SOLVE_STEPS: u32 = 32;

    fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Linear => (0.0, 0.0, 1.0, 1.0),
            Self::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    /// Maps linear progress `t` to eased progress.
    ///
    /// `t` is clamped to `[0, 1]`; NaN is treated as `0`.
    ///
    /// ```rust
    /// use understory_floating_field::Curve;
    ///
    /// assert_eq!(Curve::EaseInOut.apply(0.0), 0.0);
    /// assert_eq!(Curve::EaseInOut.apply(1.0), 1.0);
    /// assert!(Curve::EaseInOut.apply(0.25) < 0.25);
    /// ```
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if self == Self::Linear || t == 0.0 || t == 1.0 {
            return t;
        }
        let (x1, y1, x2, y2) = self.control_points();
        // x(s) is monotonic for control points inside the unit square.
        let (mut lo, mut hi) = (0.0, 1.0);
        for _ in 0..Self::SOLVE_STEPS {
            let mid = (lo + hi) * 0.5;
            if bezier(x1, x2, mid) < t {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        bezier(y1, y2, (lo + hi) * 0.5)
    }
}

/// One axis of a cubic bezier with `P0 = 0` and `P3 = 1`.
fn bezier(p1: f64, p2: f64, s: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Curve; 4] = [Curve::Linear, Curve::EaseIn, Curve::EaseOut, Curve::EaseInOut];

    #[test]
    fn endpoints_are_fixed() {
        for curve in CURVES {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?}");
            assert_eq!(curve.apply(1.0), 1.0, "{curve:?}");
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for curve in CURVES {
            assert_eq!(curve.apply(-1.0), 0.0, "{curve:?}");
            assert_eq!(curve.apply(2.0), 1.0, "{curve:?}");
            assert_eq!(curve.apply(f64::NAN), 0.0, "{curve:?}");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for curve in CURVES {
            let mut previous = 0.0;
            for step in 1..=100 {
                let value = curve.apply(f64::from(step) / 100.0);
                assert!(value >= previous, "{curve:?} decreased at step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let a = Curve::EaseInOut.apply(0.3);
        let b = Curve::EaseInOut.apply(0.7);
        assert!((a + b - 1.0) < 1e-6 && (a + b - 1.0) > -1e-6, "{a} + {b}");
        let mid = Curve::EaseInOut.apply(0.5);
        assert!(mid > 0.499_999 && mid < 0.500_001, "{mid}");
    }

    #[test]
    fn ease_in_lags_and_ease_out_leads() {
        assert!(Curve::EaseIn.apply(0.5) < 0.5);
        assert!(Curve::EaseOut.apply(0.5) > 0.5);
        assert_eq!(Curve::Linear.apply(0.5), 0.5);
    }
}
