//! Alert classes.

use crate::core::classes::{join_classes, with_extra};
use serde::{Deserialize, Serialize};

/// Tone of an alert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    /// Neutral.
    #[default]
    Default,
    /// Informational.
    Info,
    /// Positive outcome.
    Success,
    /// Needs attention.
    Warning,
    /// Failure or irreversible action.
    Destructive,
}

impl AlertVariant {
    /// Container colour classes.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "bg-white text-gray-950 border-gray-200",
            Self::Info => "bg-blue-50 text-blue-900 border-blue-200",
            Self::Success => "bg-green-50 text-green-900 border-green-200",
            Self::Warning => "bg-yellow-50 text-yellow-900 border-yellow-200",
            Self::Destructive => "bg-red-50 text-red-900 border-red-200",
        }
    }

    /// Icon colour class.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Default => "text-gray-950",
            Self::Info => "text-blue-600",
            Self::Success => "text-green-600",
            Self::Warning => "text-yellow-600",
            Self::Destructive => "text-red-600",
        }
    }
}

/// Alert container classes.
#[must_use]
pub fn alert_class(variant: AlertVariant, extra: Option<&str>) -> String {
    with_extra(
        &join_classes([
            "relative w-full rounded-lg border px-4 py-3",
            variant.class(),
        ]),
        extra,
    )
}

/// Alert icon classes.
#[must_use]
pub fn icon_class(variant: AlertVariant, extra: Option<&str>) -> String {
    with_extra(
        &join_classes([
            "absolute left-4 top-3.5",
            variant.icon_class(),
        ]),
        extra,
    )
}

/// Alert content classes; content beside an icon is indented.
#[must_use]
pub fn content_class(has_icon: bool, extra: Option<&str>) -> String {
    with_extra(&join_classes([if has_icon { "pl-7" } else { "" }]), extra)
}

/// Alert title classes.
pub const TITLE: &str = "mb-1 font-medium leading-none tracking-tight";
/// Alert description classes.
pub const DESCRIPTION: &str = "text-sm [&_p]:leading-relaxed";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destructive_alert_uses_red_palette() {
        let class = alert_class(AlertVariant::Destructive, None);
        assert!(class.starts_with("relative w-full"));
        assert!(class.contains("bg-red-50"));
        assert_eq!(
            icon_class(AlertVariant::Destructive, None),
            "absolute left-4 top-3.5 text-red-600"
        );
    }

    #[test]
    fn content_indents_only_with_icon() {
        assert_eq!(content_class(true, None), "pl-7");
        assert_eq!(content_class(false, Some("flex")), "flex");
    }
}
