//! Process-wide overlay bookkeeping held in a yewdux store.
//!
//! # Design
//! - The document body style and the document key listeners are shared by every panel, so
//!   ownership lives in one store slice instead of per-component state.
//! - Scroll lock is reference counted: the first holder saves the prior inline value, the
//!   last holder restores it verbatim.
//! - Open panels form a stack; only the top-most one answers Escape and Tab.
//! - A panel rendered inside another panel always sits above it, even when the inner one
//!   registers first.

use crate::core::overlay::OverlayId;
use yewdux::store::Store;

/// Body style change the DOM layer must apply after a registry update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollEffect {
    /// Hide page scrolling.
    Lock,
    /// Write this value back to the body's inline `overflow` (empty removes it).
    Restore(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct StackEntry {
    id: OverlayId,
    parent: Option<OverlayId>,
}

/// Shared registry of mounted overlays.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct OverlayRegistry {
    stack: Vec<StackEntry>,
    scroll_holders: Vec<OverlayId>,
    saved_overflow: Option<String>,
}

impl OverlayRegistry {
    /// Register `id` as open. `parent` is the panel `id` is rendered inside, if any.
    ///
    /// The new entry goes on top unless a panel nested inside it is already registered,
    /// in which case it slots in directly below that panel.
    pub fn push(&mut self, id: OverlayId, parent: Option<OverlayId>) {
        self.stack.retain(|entry| entry.id != id);
        let entry = StackEntry { id, parent };
        let child = self
            .stack
            .iter()
            .position(|existing| existing.parent == Some(id));
        match child {
            Some(index) => self.stack.insert(index, entry),
            None => self.stack.push(entry),
        }
        tracing::debug!(%id, depth = self.stack.len(), "overlay pushed");
    }

    /// Forget `id`, wherever it sits in the stack.
    pub fn remove(&mut self, id: OverlayId) {
        let before = self.stack.len();
        self.stack.retain(|entry| entry.id != id);
        if self.stack.len() != before {
            tracing::debug!(%id, depth = self.stack.len(), "overlay removed");
        }
    }

    /// Whether `id` is the overlay that should receive keyboard handling.
    #[must_use]
    pub fn is_topmost(&self, id: OverlayId) -> bool {
        self.stack.last().is_some_and(|entry| entry.id == id)
    }

    /// Number of open overlays.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of panels currently holding the scroll lock.
    #[must_use]
    pub fn scroll_holders(&self) -> usize {
        self.scroll_holders.len()
    }

    /// Take a scroll-lock reference for `id`. `current_overflow` is the body's inline
    /// `overflow` value right now; it is only recorded by the first holder.
    pub fn acquire_scroll(
        &mut self,
        id: OverlayId,
        current_overflow: &str,
    ) -> Option<ScrollEffect> {
        if self.scroll_holders.contains(&id) {
            return None;
        }
        self.scroll_holders.push(id);
        if self.scroll_holders.len() > 1 {
            return None;
        }
        self.saved_overflow = Some(current_overflow.to_string());
        tracing::debug!(%id, saved = current_overflow, "scroll lock acquired");
        Some(ScrollEffect::Lock)
    }

    /// Drop the scroll-lock reference held by `id`.
    pub fn release_scroll(&mut self, id: OverlayId) -> Option<ScrollEffect> {
        let before = self.scroll_holders.len();
        self.scroll_holders.retain(|entry| *entry != id);
        if self.scroll_holders.len() == before || !self.scroll_holders.is_empty() {
            return None;
        }
        let saved = self.saved_overflow.take().unwrap_or_default();
        tracing::debug!(%id, restored = %saved, "scroll lock released");
        Some(ScrollEffect::Restore(saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_overlay_locks_and_restores_verbatim() {
        let mut registry = OverlayRegistry::default();
        let id = OverlayId::next();
        assert_eq!(registry.acquire_scroll(id, "scroll"), Some(ScrollEffect::Lock));
        assert_eq!(registry.scroll_holders(), 1);
        assert_eq!(
            registry.release_scroll(id),
            Some(ScrollEffect::Restore("scroll".to_string()))
        );
        assert_eq!(registry.scroll_holders(), 0);
    }

    #[test]
    fn nested_overlays_restore_only_after_last_release() {
        let mut registry = OverlayRegistry::default();
        let outer = OverlayId::next();
        let inner = OverlayId::next();
        assert_eq!(registry.acquire_scroll(outer, ""), Some(ScrollEffect::Lock));
        assert_eq!(registry.acquire_scroll(inner, "hidden"), None);
        assert_eq!(registry.release_scroll(outer), None);
        assert_eq!(
            registry.release_scroll(inner),
            Some(ScrollEffect::Restore(String::new()))
        );
    }

    #[test]
    fn double_acquire_and_unknown_release_are_noops() {
        let mut registry = OverlayRegistry::default();
        let id = OverlayId::next();
        assert!(registry.acquire_scroll(id, "auto").is_some());
        assert!(registry.acquire_scroll(id, "hidden").is_none());
        assert!(registry.release_scroll(OverlayId::next()).is_none());
        assert_eq!(
            registry.release_scroll(id),
            Some(ScrollEffect::Restore("auto".to_string()))
        );
        assert!(registry.release_scroll(id).is_none());
    }

    #[test]
    fn stack_tracks_topmost_overlay() {
        let mut registry = OverlayRegistry::default();
        let first = OverlayId::next();
        let second = OverlayId::next();
        registry.push(first, None);
        registry.push(second, None);
        assert!(registry.is_topmost(second));
        assert!(!registry.is_topmost(first));

        registry.remove(second);
        assert!(registry.is_topmost(first));
        assert_eq!(registry.depth(), 1);

        registry.push(first, None);
        assert_eq!(registry.depth(), 1);
    }

    #[test]
    fn nested_panel_stays_above_parent_registered_after_it() {
        let mut registry = OverlayRegistry::default();
        let outer = OverlayId::next();
        let inner = OverlayId::next();
        let innermost = OverlayId::next();
        registry.push(innermost, Some(inner));
        registry.push(inner, Some(outer));
        registry.push(outer, None);
        assert!(registry.is_topmost(innermost));

        registry.remove(innermost);
        assert!(registry.is_topmost(inner));
        registry.remove(inner);
        assert!(registry.is_topmost(outer));
    }

    #[test]
    fn nested_panel_opened_later_goes_on_top() {
        let mut registry = OverlayRegistry::default();
        let outer = OverlayId::next();
        let inner = OverlayId::next();
        registry.push(outer, None);
        registry.push(inner, Some(outer));
        assert!(registry.is_topmost(inner));
        assert_eq!(registry.depth(), 2);
    }
}
