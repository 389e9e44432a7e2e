//! Focus trap arithmetic over a panel's focusable descendants.

/// Focus change the trap asks the DOM layer to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMove {
    /// Let the browser move focus natively.
    Native,
    /// Prevent the default and focus the element at this scope index.
    Focus(usize),
    /// Prevent the default and focus the panel container itself.
    Container,
}

impl FocusMove {
    /// Whether the originating key event must have its default action prevented.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        !matches!(self, Self::Native)
    }
}

/// Ordered focusable descendants of an open panel, captured by count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusScope {
    len: usize,
}

impl FocusScope {
    /// Scope over `len` focusable elements.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Number of focusable elements.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Whether the panel has no focusable descendants.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Where focus goes when the panel opens.
    #[must_use]
    pub const fn initial(self) -> FocusMove {
        if self.is_empty() {
            FocusMove::Container
        } else {
            FocusMove::Focus(0)
        }
    }

    /// React to Tab (`shift = false`) or Shift+Tab given the index of the currently focused
    /// element inside the scope (`None` when focus is elsewhere).
    #[must_use]
    pub fn on_tab(self, current: Option<usize>, shift: bool) -> FocusMove {
        if self.is_empty() {
            return FocusMove::Container;
        }
        let last = self.len - 1;
        match (current, shift) {
            (None, false) => FocusMove::Focus(0),
            (None, true) => FocusMove::Focus(last),
            (Some(0), true) => FocusMove::Focus(last),
            (Some(index), false) if index >= last => FocusMove::Focus(0),
            (Some(_), _) => FocusMove::Native,
        }
    }
}
