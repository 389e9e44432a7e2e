//! Button classes.

use crate::core::classes::{join_classes, with_extra};
use serde::{Deserialize, Serialize};

/// Visual style of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// High-emphasis filled button.
    #[default]
    Primary,
    /// Muted filled button.
    Secondary,
    /// Bordered button.
    Outline,
    /// Borderless button.
    Ghost,
}

impl ButtonVariant {
    /// Classes for the variant.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => {
                "bg-black text-white shadow hover:bg-black/90 focus-visible:ring-black"
            }
            Self::Secondary => {
                "bg-gray-100 text-gray-900 shadow-sm hover:bg-gray-200 focus-visible:ring-gray-400"
            }
            Self::Outline => concat!(
                "border border-gray-200 bg-white shadow-sm hover:bg-gray-50 ",
                "hover:text-gray-900 focus-visible:ring-gray-400",
            ),
            Self::Ghost => "hover:bg-gray-100 hover:text-gray-900 focus-visible:ring-gray-400",
        }
    }
}

/// Button dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Compact.
    Sm,
    /// Standard.
    #[default]
    Default,
    /// Large.
    Lg,
    /// Square icon button.
    Icon,
}

impl ButtonSize {
    /// Classes for the size.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-xs",
            Self::Default => "h-9 px-4 py-2",
            Self::Lg => "h-10 px-8",
            Self::Icon => "h-9 w-9",
        }
    }
}

const BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md \
text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 \
focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50 \
[&_svg]:pointer-events-none [&_svg]:size-4 [&_svg]:shrink-0";

/// Full class list for a button.
#[must_use]
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    with_extra(&join_classes([BASE, variant.class(), size.class()]), extra)
}
