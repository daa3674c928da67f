// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field configuration.

use core::fmt;
use core::time::Duration;

use crate::curve::Curve;

/// Duration and curve of a placeholder transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransitionSpec {
    /// Total time from start to target.
    pub duration: Duration,
    /// Timing curve.
    pub curve: Curve,
}

impl TransitionSpec {
    /// Default transition length.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

    /// A transition that jumps straight to its target.
    pub const INSTANT: Self = Self {
        duration: Duration::ZERO,
        curve: Curve::Linear,
    };
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            duration: Self::DEFAULT_DURATION,
            curve: Curve::EaseInOut,
        }
    }
}

/// Error returned when a [`FieldConfig`] value is out of range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Stroke width is negative, infinite or NaN.
    InvalidStrokeWidth(f64),
    /// Accessory width fraction is outside `[0, 1]` or NaN.
    InvalidAccessoryFraction(f64),
    /// Accessory vertical inset is negative, infinite or NaN.
    InvalidAccessoryInset(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStrokeWidth(width) => {
                write!(f, "underline stroke width {width} must be finite and non-negative")
            }
            Self::InvalidAccessoryFraction(fraction) => {
                write!(f, "accessory width fraction {fraction} must be within [0, 1]")
            }
            Self::InvalidAccessoryInset(inset) => {
                write!(f, "accessory inset {inset} must be finite and non-negative")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

fn is_length(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Configuration of a [`FloatingField`](crate::FloatingField).
///
/// ```rust
/// use understory_floating_field::{ConfigError, FieldConfig};
///
/// let config = FieldConfig::default().with_underline_stroke_width(1.0);
/// assert_eq!(config.validate(), Ok(()));
///
/// let config = FieldConfig::default().with_underline_stroke_width(-1.0);
/// assert_eq!(config.validate(), Err(ConfigError::InvalidStrokeWidth(-1.0)));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    /// Width of the underline stroke.
    pub underline_stroke_width: f64,
    /// Transition used when the placeholder moves between placements.
    pub transition: TransitionSpec,
    /// Vertical inset applied to the bounds before placing a trailing accessory.
    pub accessory_vertical_inset: f64,
    /// Maximum share of the bounds width a trailing accessory may take.
    pub accessory_max_width_fraction: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            underline_stroke_width: 2.0,
            transition: TransitionSpec::default(),
            accessory_vertical_inset: 8.0,
            accessory_max_width_fraction: 0.4,
        }
    }
}

impl FieldConfig {
    /// Sets the underline stroke width.
    #[must_use]
    pub fn with_underline_stroke_width(mut self, width: f64) -> Self {
        self.underline_stroke_width = width;
        self
    }

    /// Sets the placeholder transition.
    #[must_use]
    pub fn with_transition(mut self, transition: TransitionSpec) -> Self {
        self.transition = transition;
        self
    }

    /// Checks every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_length(self.underline_stroke_width) {
            return Err(ConfigError::InvalidStrokeWidth(self.underline_stroke_width));
        }
        let fraction = self.accessory_max_width_fraction;
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ConfigError::InvalidAccessoryFraction(fraction));
        }
        if !is_length(self.accessory_vertical_inset) {
            return Err(ConfigError::InvalidAccessoryInset(
                self.accessory_vertical_inset,
            ));
        }
        Ok(())
    }

    pub(crate) fn check_stroke_width(width: f64) -> Result<(), ConfigError> {
        if is_length(width) {
            Ok(())
        } else {
            Err(ConfigError::InvalidStrokeWidth(width))
        }
    }
}
