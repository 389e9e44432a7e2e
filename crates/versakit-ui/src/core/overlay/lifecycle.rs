//! Panel mount lifecycle and entry animation sequencing.

/// Visual phase that drives the CSS transition classes through `data-state`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Initial and exit appearance.
    #[default]
    Closed,
    /// Fully entered appearance.
    Open,
}

impl AnimationPhase {
    /// Value written to the `data-state` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

/// Mount state of a single panel instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    /// Nothing in the document.
    Unmounted,
    /// In the document, waiting for the closed appearance to paint.
    Mounting,
    /// In the document with the entry transition applied.
    Visible,
}

/// Handle for one pending entry schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameToken {
    generation: u64,
}

/// Result of delivering an animation frame to the lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStep {
    /// Another frame is needed before entering.
    Again,
    /// The panel just became visible.
    Entered,
    /// The token belongs to a cancelled schedule; nothing changed.
    Stale,
}

/// Lifecycle state machine for one panel instance.
///
/// Closing bumps the generation, which cancels any frame still in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelLifecycle {
    state: LifecycleState,
    generation: u64,
    frames_remaining: u8,
}

impl PanelLifecycle {
    /// Frames that must elapse after mounting before the entry transition starts.
    pub const ENTRY_FRAMES: u8 = 2;

    /// Fresh, unmounted lifecycle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LifecycleState::Unmounted,
            generation: 0,
            frames_remaining: 0,
        }
    }

    /// Current mount state.
    #[must_use]
    pub const fn state(&self) -> LifecycleState {
        self.state
    }

    /// Whether the panel belongs in the document.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        !matches!(self.state, LifecycleState::Unmounted)
    }

    /// Animation phase derived from the mount state.
    #[must_use]
    pub const fn phase(&self) -> AnimationPhase {
        match self.state {
            LifecycleState::Visible => AnimationPhase::Open,
            LifecycleState::Unmounted | LifecycleState::Mounting => AnimationPhase::Closed,
        }
    }

    /// Mount the panel. Returns the token for the entry schedule, or `None` when the panel
    /// was already mounted.
    pub fn open(&mut self) -> Option<FrameToken> {
        if self.is_mounted() {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.state = LifecycleState::Mounting;
        self.frames_remaining = Self::ENTRY_FRAMES;
        tracing::trace!(generation = self.generation, "panel mounting");
        Some(FrameToken {
            generation: self.generation,
        })
    }

    /// Deliver one animation frame for `token`.
    pub fn on_frame(&mut self, token: FrameToken) -> FrameStep {
        if token.generation != self.generation || self.state != LifecycleState::Mounting {
            return FrameStep::Stale;
        }
        self.frames_remaining = self.frames_remaining.saturating_sub(1);
        if self.frames_remaining > 0 {
            return FrameStep::Again;
        }
        self.state = LifecycleState::Visible;
        tracing::trace!(generation = self.generation, "panel visible");
        FrameStep::Entered
    }

    /// Unmount the panel and cancel any pending entry schedule. Returns whether the panel
    /// was mounted.
    pub fn close(&mut self) -> bool {
        let was_mounted = self.is_mounted();
        self.generation = self.generation.wrapping_add(1);
        self.state = LifecycleState::Unmounted;
        self.frames_remaining = 0;
        if was_mounted {
            tracing::trace!(generation = self.generation, "panel unmounted");
        }
        was_mounted
    }
}

impl Default for PanelLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
