//! Slot rendering contract for caller-supplied controls.
//!
//! # Design
//! - Controls never clone caller markup. A caller that wants its own element hands in a
//!   renderer and declares which computed attributes that renderer accepts.
//! - The component decides what to pass based on those declared capabilities.

/// Capabilities a caller-provided renderer declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotCapabilities {
    /// Renderer applies the computed class list to its root element.
    pub merges_class: bool,
    /// Renderer attaches the provided node reference to its root element.
    pub forwards_ref: bool,
}

impl SlotCapabilities {
    /// Renderer accepts both the computed class and the node reference.
    pub const FULL: Self = Self {
        merges_class: true,
        forwards_ref: true,
    };

    /// Renderer only wires the activation handler.
    pub const HANDLER_ONLY: Self = Self {
        merges_class: false,
        forwards_ref: false,
    };

    /// Class to hand to the renderer, if it accepts one.
    #[must_use]
    pub fn class_for(self, computed: &str) -> Option<String> {
        self.merges_class.then(|| computed.to_string())
    }
}

impl Default for SlotCapabilities {
    fn default() -> Self {
        Self::FULL
    }
}

/// Placement of a close control inside the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClosePosition {
    /// Icon-only control pinned to the top-right corner.
    Absolute,
    /// Caller-provided control laid out inline.
    Relative,
}

impl ClosePosition {
    /// Custom content (children or a slot renderer) is laid out inline; the bare icon is pinned.
    #[must_use]
    pub const fn resolve(has_custom_content: bool) -> Self {
        if has_custom_content {
            Self::Relative
        } else {
            Self::Absolute
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_only_offered_when_merged() {
        assert_eq!(
            SlotCapabilities::FULL.class_for("btn"),
            Some("btn".to_string())
        );
        assert_eq!(SlotCapabilities::HANDLER_ONLY.class_for("btn"), None);
    }

    #[test]
    fn custom_content_is_relative() {
        assert_eq!(ClosePosition::resolve(true), ClosePosition::Relative);
        assert_eq!(ClosePosition::resolve(false), ClosePosition::Absolute);
    }
}
