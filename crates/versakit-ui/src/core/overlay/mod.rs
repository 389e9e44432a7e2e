//! Dismissible overlay controller, DOM-free half.
//!
//! # Design
//! - The open flag is a plain state cell; controlled scopes route writes to the caller.
//! - The panel lifecycle is an explicit state machine whose deferred entry step carries a
//!   generation token, so a callback that outlives its mount can never flip the phase.
//! - Keyboard and pointer inputs are classified here; the DOM layer only executes the
//!   resulting moves.

pub mod focus;
pub mod lifecycle;
pub mod policy;
pub mod state;

use std::fmt::{self, Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

pub use focus::{FocusMove, FocusScope};
pub use lifecycle::{AnimationPhase, FrameStep, FrameToken, LifecycleState, PanelLifecycle};
pub use policy::{DismissSignal, KeyIntent, PanelConfig, classify_key};
pub use state::{OpenMode, OpenUpdate};

static NEXT_OVERLAY_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a mounted panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u64);

impl OverlayId {
    /// Allocate a fresh identifier.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_OVERLAY_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value, used for DOM ids.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for OverlayId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "overlay-{}", self.0)
    }
}
