//! Progress bar classes and value arithmetic.

use crate::core::classes::{join_classes, with_extra};
use serde::{Deserialize, Serialize};

/// Track height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressSize {
    /// Thin.
    Sm,
    /// Standard.
    #[default]
    Default,
    /// Thick.
    Lg,
}

impl ProgressSize {
    /// Classes for the size.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sm => "h-1",
            Self::Default => "h-2",
            Self::Lg => "h-3",
        }
    }
}

/// Indicator colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressVariant {
    /// Black.
    #[default]
    Primary,
    /// Grey.
    Secondary,
    /// Green.
    Success,
    /// Yellow.
    Warning,
    /// Red.
    Danger,
}

impl ProgressVariant {
    /// Classes for the variant.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "bg-black",
            Self::Secondary => "bg-gray-600",
            Self::Success => "bg-green-500",
            Self::Warning => "bg-yellow-500",
            Self::Danger => "bg-red-500",
        }
    }
}

/// Resolved numbers for one progress bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressValue {
    /// Value clamped into `[0, max]`.
    pub clamped: f64,
    /// Upper bound.
    pub max: f64,
    /// Completion in percent, `[0, 100]`.
    pub percentage: f64,
}

impl ProgressValue {
    /// Clamp `value` into `[0, max]` and derive the percentage. A non-positive or
    /// non-finite `max` yields zero progress.
    #[must_use]
    pub fn new(value: f64, max: f64) -> Self {
        if !(max.is_finite() && max > 0.0) {
            return Self {
                clamped: 0.0,
                max,
                percentage: 0.0,
            };
        }
        let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, max) };
        Self {
            clamped,
            max,
            percentage: clamped / max * 100.0,
        }
    }

    /// Inline transform for the indicator bar.
    #[must_use]
    pub fn indicator_transform(self) -> String {
        format!("transform: translateX(-{}%)", 100.0 - self.percentage)
    }

    /// Rounded percentage label, e.g. `"42%"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{:.0}%", self.percentage.round())
    }
}

/// Track classes.
#[must_use]
pub fn root_class(size: ProgressSize, extra: Option<&str>) -> String {
    with_extra(
        &join_classes([
            "relative overflow-hidden rounded-full bg-gray-200 w-full",
            size.class(),
        ]),
        extra,
    )
}

/// Indicator classes.
#[must_use]
pub fn indicator_class(variant: ProgressVariant, animated: bool, extra: Option<&str>) -> String {
    with_extra(
        &join_classes([
            "h-full w-full flex-1 transition-all duration-300 ease-in-out rounded-full",
            variant.class(),
            if animated { "transition-transform" } else { "" },
        ]),
        extra,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_clamped_into_range() {
        assert_eq!(ProgressValue::new(150.0, 100.0).clamped, 100.0);
        assert_eq!(ProgressValue::new(-5.0, 100.0).clamped, 0.0);
        assert_eq!(ProgressValue::new(f64::NAN, 100.0).percentage, 0.0);
    }

    #[test]
    fn percentage_respects_custom_max() {
        let value = ProgressValue::new(25.0, 50.0);
        assert_eq!(value.percentage, 50.0);
        assert_eq!(value.indicator_transform(), "transform: translateX(-50%)");
        assert_eq!(value.label(), "50%");
    }

    #[test]
    fn non_positive_max_is_empty() {
        let value = ProgressValue::new(10.0, 0.0);
        assert_eq!(value.percentage, 0.0);
        assert_eq!(value.indicator_transform(), "transform: translateX(-100%)");
    }

    #[test]
    fn label_rounds_to_whole_percent() {
        assert_eq!(ProgressValue::new(33.4, 100.0).label(), "33%");
        assert_eq!(ProgressValue::new(66.6, 100.0).label(), "67%");
    }

    #[test]
    fn indicator_animation_toggle() {
        let animated = indicator_class(ProgressVariant::Success, true, None);
        assert!(animated.ends_with("transition-transform"));
        let still = indicator_class(ProgressVariant::Success, false, None);
        assert!(!still.contains("transition-transform"));
        assert!(root_class(ProgressSize::Lg, None).ends_with("h-3"));
    }
}
