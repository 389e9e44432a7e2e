//! Card classes.

use super::SectionPadding;
use crate::core::classes::{join_classes, with_extra};
use serde::{Deserialize, Serialize};

/// Surface treatment of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    /// Thin border.
    #[default]
    Default,
    /// Border with drop shadow.
    Shadow,
    /// Stronger border.
    Outline,
    /// No border, no shadow.
    Ghost,
}

impl CardVariant {
    /// Classes for the variant.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "border-gray-200",
            Self::Shadow => "border-gray-200 shadow-md",
            Self::Outline => "border-gray-300",
            Self::Ghost => "border-transparent shadow-none",
        }
    }
}

/// Padding presets of the card container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardPadding {
    /// No padding.
    None,
    /// Small.
    Sm,
    /// Standard.
    #[default]
    Default,
    /// Large.
    Lg,
}

impl CardPadding {
    /// Classes for the padding.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Sm => "p-4",
            Self::Default => "p-6",
            Self::Lg => "p-8",
        }
    }
}

/// Card container classes.
#[must_use]
pub fn card_class(variant: CardVariant, padding: CardPadding, extra: Option<&str>) -> String {
    with_extra(
        &join_classes([
            "rounded-lg border bg-white text-gray-950 transition-shadow",
            variant.class(),
            padding.class(),
        ]),
        extra,
    )
}

/// Header section classes.
#[must_use]
pub fn header_class(padding: SectionPadding, extra: Option<&str>) -> String {
    let pad = match padding {
        SectionPadding::None => "",
        SectionPadding::Default => "p-6",
    };
    with_extra(&join_classes(["flex flex-col space-y-1.5", pad]), extra)
}

/// Content section classes.
#[must_use]
pub fn content_class(padding: SectionPadding, extra: Option<&str>) -> String {
    with_extra(&join_classes([section_pad(padding)]), extra)
}

/// Footer section classes.
#[must_use]
pub fn footer_class(padding: SectionPadding, extra: Option<&str>) -> String {
    with_extra(&join_classes(["flex items-center", section_pad(padding)]), extra)
}

const fn section_pad(padding: SectionPadding) -> &'static str {
    match padding {
        SectionPadding::None => "",
        SectionPadding::Default => "p-6 pt-0",
    }
}

/// Title classes.
pub const TITLE: &str = "text-2xl font-semibold leading-none tracking-tight";
/// Description classes.
pub const DESCRIPTION: &str = "text-sm text-gray-500";
