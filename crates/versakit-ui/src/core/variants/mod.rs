//! Class-name tables for every component.
//!
//! Each submodule maps a small set of typed options onto a Tailwind class list. The
//! functions are pure so they can be tested without a DOM and reused by any renderer.

pub mod alert;
pub mod button;
pub mod card;
pub mod code;
pub mod modal;
pub mod progress;
pub mod spinner;

/// Padding presets shared by card sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionPadding {
    /// No padding.
    None,
    /// Standard padding.
    #[default]
    Default,
}
