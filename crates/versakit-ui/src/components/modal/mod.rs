//! Dismissible modal overlay.
//!
//! # Design
//! - [`OverlayRoot`] owns the open flag (or defers to the caller) and shares it through
//!   context with every descendant.
//! - [`Trigger`] and [`CloseControl`] only ever call `set_open`; the [`Panel`] mounts itself
//!   from the flag and performs every document side effect while mounted.
//! - Caller-supplied controls are rendered through a [`SlotProps`] callback instead of
//!   cloning caller markup.

pub mod close;
pub mod panel;
pub mod parts;
pub mod root;
pub mod trigger;

pub use close::{CloseControl, CloseControlProps};
pub use panel::{Panel, PanelContext, PanelProps};
pub use parts::{ModalDescription, ModalFooter, ModalHeader, ModalTitle};
pub use root::{OverlayContext, OverlayRoot, OverlayRootProps, use_overlay, use_overlay_result};
pub use trigger::{Trigger, TriggerProps};

use yew::prelude::*;

/// What a caller-supplied control renderer receives.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotProps {
    /// Computed class list, present when the renderer declared it merges classes.
    pub class: Option<AttrValue>,
    /// Activation handler to attach to the rendered element.
    pub onclick: Callback<MouseEvent>,
    /// Node reference, present when the renderer declared it forwards refs.
    pub node_ref: Option<NodeRef>,
    /// Accessible label the built-in control would carry.
    pub aria_label: Option<AttrValue>,
}
