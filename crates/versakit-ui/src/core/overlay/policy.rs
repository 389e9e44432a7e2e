//! Panel configuration and dismissal policy.

use crate::core::variants::modal::ModalSize;
use serde::{Deserialize, Serialize};

/// Behaviour and presentation options for a modal panel.
///
/// Every field has a default, so presets can be loaded from partial JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelConfig {
    /// Maximum width preset.
    pub size: ModalSize,
    /// Render the backdrop behind the panel.
    pub show_overlay: bool,
    /// Render the built-in icon close control.
    pub show_close_control: bool,
    /// Close on pointer-down over the backdrop.
    pub close_on_overlay_click: bool,
    /// Close on the Escape key.
    pub close_on_escape: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            size: ModalSize::Default,
            show_overlay: true,
            show_close_control: true,
            close_on_overlay_click: true,
            close_on_escape: true,
        }
    }
}

/// Input that asks an open panel to close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissSignal {
    /// Escape key pressed while the panel is top-most.
    Escape,
    /// Pointer went down on the backdrop.
    OverlayPointerDown,
    /// A close control inside the panel was activated.
    CloseControl,
}

impl PanelConfig {
    /// Whether `signal` closes a panel configured like this. Close controls always do.
    #[must_use]
    pub const fn allows(&self, signal: DismissSignal) -> bool {
        match signal {
            DismissSignal::Escape => self.close_on_escape,
            DismissSignal::OverlayPointerDown => self.close_on_overlay_click,
            DismissSignal::CloseControl => true,
        }
    }
}

/// What a document-level keydown means for an open panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyIntent {
    /// Dismissal request.
    Escape,
    /// Focus navigation that the trap must police.
    Tab {
        /// Shift was held (backwards navigation).
        shift: bool,
    },
    /// Not handled by the overlay.
    Other,
}

/// Classify a `KeyboardEvent.key` value.
#[must_use]
pub fn classify_key(key: &str, shift: bool) -> KeyIntent {
    match key {
        "Escape" | "Esc" => KeyIntent::Escape,
        "Tab" => KeyIntent::Tab { shift },
        _ => KeyIntent::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let config = PanelConfig::default();
        assert_eq!(config.size, ModalSize::Default);
        assert!(config.show_overlay);
        assert!(config.show_close_control);
        assert!(config.allows(DismissSignal::Escape));
        assert!(config.allows(DismissSignal::OverlayPointerDown));
    }

    #[test]
    fn flags_gate_escape_and_overlay_only() {
        let config = PanelConfig {
            close_on_escape: false,
            close_on_overlay_click: false,
            ..PanelConfig::default()
        };
        assert!(!config.allows(DismissSignal::Escape));
        assert!(!config.allows(DismissSignal::OverlayPointerDown));
        assert!(config.allows(DismissSignal::CloseControl));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: PanelConfig =
            serde_json::from_str(r#"{"size":"xl","closeOnEscape":false}"#).unwrap();
        assert_eq!(config.size, ModalSize::Xl);
        assert!(!config.close_on_escape);
        assert!(config.close_on_overlay_click);
        assert!(config.show_close_control);
    }

    #[test]
    fn keys_are_classified() {
        assert_eq!(classify_key("Escape", false), KeyIntent::Escape);
        assert_eq!(classify_key("Esc", true), KeyIntent::Escape);
        assert_eq!(classify_key("Tab", true), KeyIntent::Tab { shift: true });
        assert_eq!(classify_key("Enter", false), KeyIntent::Other);
    }
}
