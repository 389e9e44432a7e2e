//! Open-state ownership for an overlay scope.

/// Where the open flag of a scope lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenMode {
    /// Caller owns the flag and receives every change request.
    Controlled,
    /// Caller pinned the flag without a setter; change requests are dropped.
    ReadOnly,
    /// The scope owns the flag.
    Uncontrolled {
        /// Caller asked to be told about changes without owning the value.
        notify: bool,
    },
}

/// Work the scope performs for a single `set_open` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenUpdate {
    /// New value for the scope-owned flag, if the scope owns it.
    pub store: Option<bool>,
    /// Value to report through the caller's change callback, if any.
    pub notify: Option<bool>,
}

impl OpenMode {
    /// Pick the mode from what the caller supplied.
    #[must_use]
    pub const fn resolve(has_value: bool, has_setter: bool) -> Self {
        match (has_value, has_setter) {
            (true, true) => Self::Controlled,
            (true, false) => Self::ReadOnly,
            (false, notify) => Self::Uncontrolled { notify },
        }
    }

    /// Whether the caller owns the value.
    #[must_use]
    pub const fn is_controlled(self) -> bool {
        matches!(self, Self::Controlled | Self::ReadOnly)
    }

    /// Effective open flag given the external and internal values.
    #[must_use]
    pub fn effective(self, external: Option<bool>, internal: bool) -> bool {
        if self.is_controlled() {
            external.unwrap_or(internal)
        } else {
            internal
        }
    }

    /// Plan a `set_open(value)` request. Writes are unconditional: asking for the current
    /// value still stores and notifies.
    #[must_use]
    pub fn plan(self, value: bool) -> OpenUpdate {
        let update = match self {
            Self::Controlled => OpenUpdate {
                store: None,
                notify: Some(value),
            },
            Self::ReadOnly => OpenUpdate {
                store: None,
                notify: None,
            },
            Self::Uncontrolled { notify } => OpenUpdate {
                store: Some(value),
                notify: notify.then_some(value),
            },
        };
        if update == (OpenUpdate { store: None, notify: None }) {
            tracing::debug!(value, "open request dropped by read-only overlay scope");
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays `set_open` requests the way the root component applies them.
    fn replay(
        mode: OpenMode,
        external: Option<bool>,
        initial: bool,
        calls: &[bool],
    ) -> (bool, Vec<bool>) {
        let mut internal = initial;
        let mut notified = Vec::new();
        for value in calls {
            let update = mode.plan(*value);
            if let Some(next) = update.store {
                internal = next;
            }
            notified.extend(update.notify);
        }
        (mode.effective(external, internal), notified)
    }

    #[test]
    fn mode_resolution_covers_all_combinations() {
        assert_eq!(OpenMode::resolve(true, true), OpenMode::Controlled);
        assert_eq!(OpenMode::resolve(true, false), OpenMode::ReadOnly);
        assert_eq!(
            OpenMode::resolve(false, true),
            OpenMode::Uncontrolled { notify: true }
        );
        assert_eq!(
            OpenMode::resolve(false, false),
            OpenMode::Uncontrolled { notify: false }
        );
    }

    #[test]
    fn uncontrolled_follows_most_recent_request() {
        let mode = OpenMode::resolve(false, false);
        let sequences: [&[bool]; 4] = [
            &[true],
            &[true, false],
            &[false, true, true],
            &[true, false, true, false],
        ];
        for calls in sequences {
            let (open, notified) = replay(mode, None, false, calls);
            assert_eq!(open, *calls.last().unwrap_or(&false), "calls: {calls:?}");
            assert!(notified.is_empty());
        }
    }

    #[test]
    fn uncontrolled_with_listener_notifies_every_write() {
        let mode = OpenMode::resolve(false, true);
        let (open, notified) = replay(mode, None, false, &[true, true, false]);
        assert!(!open);
        assert_eq!(notified, vec![true, true, false]);
    }

    #[test]
    fn controlled_never_self_closes() {
        let mode = OpenMode::resolve(true, true);
        let (open, notified) = replay(mode, Some(true), false, &[false]);
        assert!(open);
        assert_eq!(notified, vec![false]);
    }

    #[test]
    fn read_only_drops_requests() {
        let mode = OpenMode::resolve(true, false);
        let (open, notified) = replay(mode, Some(false), true, &[true]);
        assert!(!open);
        assert!(notified.is_empty());
    }
}
