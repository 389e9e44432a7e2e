#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Versakit presentational components for Yew.
//!
//! The crate is split the same way on every target:
//! - [`core`] holds DOM-free state machines and class tables and is tested natively.
//! - `components` holds the Yew function components and DOM side effects; it only
//!   builds for `wasm32`.

pub mod core;
pub mod error;

#[cfg(target_arch = "wasm32")]
pub mod components;

pub use crate::core::overlay::{AnimationPhase, OverlayId, PanelConfig};
pub use crate::core::variants::modal::ModalSize;
pub use error::OverlayError;

#[cfg(target_arch = "wasm32")]
pub use components::modal::{
    CloseControl, ModalDescription, ModalFooter, ModalHeader, ModalTitle, OverlayRoot, Panel,
    Trigger,
};
