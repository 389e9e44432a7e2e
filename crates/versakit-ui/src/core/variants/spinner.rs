//! Loading spinner classes.

use crate::core::classes::{join_classes, with_extra};
use serde::{Deserialize, Serialize};

/// Spinner style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpinnerVariant {
    /// Bordered ring with a transparent top.
    #[default]
    Default,
    /// Same look as [`SpinnerVariant::Default`].
    Simple,
    /// SVG ring with a gradient stroke.
    Gradient,
    /// Three bouncing dots.
    Dots,
    /// Three pulsing bars.
    Bars,
    /// Pulsing disc.
    Pulse,
    /// Thick ring.
    Ring,
    /// Two-sided ring.
    DualRing,
}

impl SpinnerVariant {
    /// Variants that render staggered child elements instead of a single shape.
    #[must_use]
    pub const fn is_segmented(self) -> bool {
        matches!(self, Self::Dots | Self::Bars)
    }

    const fn class(self) -> &'static str {
        match self {
            Self::Default | Self::Simple => {
                "animate-spin border-2 border-current border-t-transparent rounded-full"
            }
            Self::Gradient | Self::Ring => "animate-spin rounded-full",
            Self::Dots | Self::Bars => "flex gap-1",
            Self::Pulse => "animate-pulse rounded-full",
            Self::DualRing => "animate-spin rounded-full border-2 border-transparent",
        }
    }
}

/// Spinner size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerSize {
    /// 0.75rem.
    Xs,
    /// 1rem.
    Sm,
    /// 1.5rem.
    #[default]
    Default,
    /// 2rem.
    Lg,
    /// 3rem.
    Xl,
}

impl SpinnerSize {
    const fn dimensions(self) -> &'static str {
        match self {
            Self::Xs => "w-3 h-3",
            Self::Sm => "w-4 h-4",
            Self::Default => "w-6 h-6",
            Self::Lg => "w-8 h-8",
            Self::Xl => "w-12 h-12",
        }
    }

    const fn ring_border(self) -> &'static str {
        match self {
            Self::Xs | Self::Sm => "border-2",
            Self::Default | Self::Lg => "border-[3px]",
            Self::Xl => "border-4",
        }
    }

    /// Classes for one bouncing dot.
    #[must_use]
    pub const fn dot_class(self) -> &'static str {
        match self {
            Self::Xs => "rounded-full bg-current animate-bounce w-1 h-1",
            Self::Sm => "rounded-full bg-current animate-bounce w-1.5 h-1.5",
            Self::Default => "rounded-full bg-current animate-bounce w-2 h-2",
            Self::Lg => "rounded-full bg-current animate-bounce w-2.5 h-2.5",
            Self::Xl => "rounded-full bg-current animate-bounce w-3 h-3",
        }
    }

    /// Classes for one pulsing bar.
    #[must_use]
    pub const fn bar_class(self) -> &'static str {
        match self {
            Self::Xs => "w-1 bg-current rounded-full animate-pulse h-2",
            Self::Sm => "w-1 bg-current rounded-full animate-pulse h-3",
            Self::Default => "w-1 bg-current rounded-full animate-pulse h-4",
            Self::Lg => "w-1 bg-current rounded-full animate-pulse h-6",
            Self::Xl => "w-1 bg-current rounded-full animate-pulse h-8",
        }
    }
}

/// Spinner colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerColor {
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
    /// White, for dark surfaces.
    White,
}

impl SpinnerColor {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "text-black",
            Self::Secondary => "text-gray-600",
            Self::Success => "text-green-500",
            Self::Warning => "text-yellow-500",
            Self::Danger => "text-red-500",
            Self::White => "text-white",
        }
    }
}

/// Delays applied to the three segments of dots and bars spinners.
pub const SEGMENT_DELAYS: [&str; 3] = ["0s", "0.15s", "0.3s"];

/// Size classes that depend on the variant. Segmented spinners size their children.
fn sized(variant: SpinnerVariant, size: SpinnerSize) -> [&'static str; 2] {
    match variant {
        SpinnerVariant::Default | SpinnerVariant::Simple | SpinnerVariant::Gradient => {
            [size.dimensions(), ""]
        }
        SpinnerVariant::Pulse => [size.dimensions(), "bg-current"],
        SpinnerVariant::Ring => [size.dimensions(), size.ring_border()],
        SpinnerVariant::DualRing => [size.dimensions(), "border-t-current border-r-current"],
        SpinnerVariant::Dots | SpinnerVariant::Bars => ["", ""],
    }
}

/// Container classes for a spinner.
#[must_use]
pub fn spinner_class(
    variant: SpinnerVariant,
    size: SpinnerSize,
    color: SpinnerColor,
    extra: Option<&str>,
) -> String {
    let [dimensions, detail] = sized(variant, size);
    let ring = if variant == SpinnerVariant::Ring {
        "border-current border-t-transparent"
    } else {
        ""
    };
    with_extra(
        &join_classes([
            "inline-block",
            variant.class(),
            color.class(),
            dimensions,
            detail,
            ring,
        ]),
        extra,
    )
}

/// Inline style for an animated element at `speed` seconds per cycle.
#[must_use]
pub fn animation_style(speed: f64, delay: Option<&str>) -> String {
    let speed = if speed.is_finite() && speed > 0.0 { speed } else { 1.0 };
    match delay {
        Some(delay) => format!("animation-duration: {speed}s; animation-delay: {delay}"),
        None => format!("animation-duration: {speed}s"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spinner_is_a_bordered_ring() {
        assert_eq!(
            spinner_class(
                SpinnerVariant::Default,
                SpinnerSize::Default,
                SpinnerColor::Primary,
                None
            ),
            concat!(
                "inline-block animate-spin border-2 border-current border-t-transparent ",
                "rounded-full text-black w-6 h-6",
            )
        );
    }

    #[test]
    fn ring_border_scales_with_size() {
        let xl = spinner_class(SpinnerVariant::Ring, SpinnerSize::Xl, SpinnerColor::White, None);
        assert!(xl.contains("w-12 h-12 border-4"));
        assert!(xl.contains("border-t-transparent"));
        let sm = spinner_class(SpinnerVariant::Ring, SpinnerSize::Sm, SpinnerColor::White, None);
        assert!(sm.contains("border-2"));
    }

    #[test]
    fn segmented_spinners_size_children() {
        let dots = spinner_class(SpinnerVariant::Dots, SpinnerSize::Lg, SpinnerColor::Danger, None);
        assert_eq!(dots, "inline-block flex gap-1 text-red-500");
        assert!(SpinnerVariant::Bars.is_segmented());
        assert!(SpinnerSize::Lg.dot_class().ends_with("w-2.5 h-2.5"));
        assert!(SpinnerSize::Xl.bar_class().ends_with("h-8"));
    }

    #[test]
    fn animation_style_falls_back_for_bad_speed() {
        assert_eq!(animation_style(0.5, None), "animation-duration: 0.5s");
        assert_eq!(
            animation_style(-1.0, Some("0.15s")),
            "animation-duration: 1s; animation-delay: 0.15s"
        );
    }

    #[test]
    fn variant_names_are_camel_case() {
        let variant: SpinnerVariant = serde_json::from_str("\"dualRing\"").unwrap();
        assert_eq!(variant, SpinnerVariant::DualRing);
    }
}
