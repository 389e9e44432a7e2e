//! Modal overlay, panel and close-control classes.

use crate::core::classes::{join_classes, with_extra};
use crate::core::overlay::AnimationPhase;
use crate::core::slot::ClosePosition;
use serde::{Deserialize, Serialize};

/// Maximum width preset of a modal panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalSize {
    /// Narrow dialog.
    Sm,
    /// Standard dialog.
    #[default]
    Default,
    /// Wide dialog.
    Lg,
    /// Extra wide dialog.
    Xl,
    /// Nearly full viewport.
    Full,
}

impl ModalSize {
    /// All presets, smallest first.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Sm, Self::Default, Self::Lg, Self::Xl, Self::Full]
    }

    /// Width constraint classes for the preset.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sm => "max-w-sm",
            Self::Default => "max-w-lg",
            Self::Lg => "max-w-2xl",
            Self::Xl => "max-w-4xl",
            Self::Full => "max-w-[95vw] max-h-[95vh]",
        }
    }
}

const OVERLAY_BASE: &str =
    "fixed inset-0 z-50 bg-black/80 transition-opacity duration-300 ease-out";

const PANEL_BASE: &str = "fixed left-1/2 top-1/2 z-50 w-full -translate-x-1/2 -translate-y-1/2 \
gap-4 border border-gray-200 bg-white p-6 shadow-lg rounded-lg transition-all duration-300 \
ease-out";

const CLOSE_BASE: &str = "rounded-sm ring-offset-white transition-opacity focus:outline-none \
focus:ring-2 focus:ring-gray-950 focus:ring-offset-2 disabled:pointer-events-none";

/// Backdrop classes for the given phase.
#[must_use]
pub fn overlay_class(phase: AnimationPhase, extra: Option<&str>) -> String {
    let visibility = match phase {
        AnimationPhase::Open => "opacity-100",
        AnimationPhase::Closed => "opacity-0",
    };
    with_extra(&join_classes([OVERLAY_BASE, visibility]), extra)
}

/// Panel classes for the given size and phase.
#[must_use]
pub fn panel_class(size: ModalSize, phase: AnimationPhase, extra: Option<&str>) -> String {
    let visibility = match phase {
        AnimationPhase::Open => "opacity-100 scale-100",
        AnimationPhase::Closed => "opacity-0 scale-95",
    };
    with_extra(&join_classes([PANEL_BASE, size.class(), visibility]), extra)
}

/// Close-control classes for the given placement.
#[must_use]
pub fn close_class(position: ClosePosition, extra: Option<&str>) -> String {
    let placement = match position {
        ClosePosition::Absolute => concat!(
            "absolute right-4 top-4 opacity-70 hover:opacity-100 ",
            "inline-flex h-6 w-6 items-center justify-center",
        ),
        ClosePosition::Relative => "relative",
    };
    with_extra(&join_classes([CLOSE_BASE, placement]), extra)
}

/// Header block classes.
pub const HEADER: &str = "flex flex-col space-y-1.5 text-center sm:text-left";
/// Footer block classes.
pub const FOOTER: &str = "flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2";
/// Title classes.
pub const TITLE: &str = "text-lg font-semibold leading-none tracking-tight text-gray-950";
/// Description classes.
pub const DESCRIPTION: &str = "text-sm text-gray-500";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_table_matches_presets() {
        let classes: Vec<_> = ModalSize::all().iter().map(|size| size.class()).collect();
        assert_eq!(
            classes,
            vec![
                "max-w-sm",
                "max-w-lg",
                "max-w-2xl",
                "max-w-4xl",
                "max-w-[95vw] max-h-[95vh]"
            ]
        );
    }

    #[test]
    fn panel_class_tracks_phase() {
        let closed = panel_class(ModalSize::Lg, AnimationPhase::Closed, None);
        assert!(closed.contains("max-w-2xl"));
        assert!(closed.contains("opacity-0 scale-95"));

        let open = panel_class(ModalSize::Lg, AnimationPhase::Open, Some("mt-2"));
        assert!(open.contains("opacity-100 scale-100"));
        assert!(open.ends_with("mt-2"));
    }

    #[test]
    fn caller_class_overrides_size_and_padding() {
        let class = panel_class(ModalSize::Default, AnimationPhase::Open, Some("max-w-xl p-2"));
        let tokens: Vec<_> = class.split_whitespace().collect();
        assert!(tokens.contains(&"max-w-xl"));
        assert!(tokens.contains(&"p-2"));
        assert!(!tokens.contains(&"max-w-lg"));
        assert!(!tokens.contains(&"p-6"));
        assert!(tokens.contains(&"rounded-lg"));
    }

    #[test]
    fn overlay_class_tracks_phase() {
        assert!(overlay_class(AnimationPhase::Open, None).ends_with("opacity-100"));
        assert!(overlay_class(AnimationPhase::Closed, None).ends_with("opacity-0"));
    }

    #[test]
    fn close_class_reflects_position() {
        assert!(close_class(ClosePosition::Absolute, None).contains("absolute right-4 top-4"));
        let relative = close_class(ClosePosition::Relative, None);
        assert!(relative.contains("relative"));
        assert!(!relative.contains("absolute"));
    }

    #[test]
    fn size_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ModalSize::Full).unwrap(), "\"full\"");
    }
}
