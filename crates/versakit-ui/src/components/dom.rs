//! Document side effects shared by the overlay components.
//!
//! # Design
//! - Every function here is a thin adapter: decisions are made by the types in
//!   [`crate::core`], this module only reads and writes the DOM.
//! - Failures are logged to the console and never panic; a missing body or a rejected
//!   focus call degrades to a no-op.

use crate::core::overlay::{
    FocusMove, FocusScope, FrameStep, FrameToken, OverlayId, PanelLifecycle,
};
use crate::core::store::{OverlayRegistry, ScrollEffect};
use gloo::console;
use gloo::render::{AnimationFrame, request_animation_frame};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yewdux::prelude::Dispatch;

/// Elements the focus trap cycles through.
pub(crate) const FOCUSABLE: &str = "button:not([disabled]), [href], input:not([disabled]), \
select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

/// Element overlay panels are portalled into.
pub(crate) fn portal_host() -> Option<Element> {
    gloo::utils::document().body().map(Into::into)
}

fn body_overflow(body: &HtmlElement) -> String {
    body.style()
        .get_property_value("overflow")
        .unwrap_or_default()
}

fn apply_scroll(effect: &ScrollEffect) {
    let Some(body) = gloo::utils::document().body() else {
        return;
    };
    let style = body.style();
    let result = match effect {
        ScrollEffect::Lock => style.set_property("overflow", "hidden"),
        ScrollEffect::Restore(value) if value.is_empty() => {
            style.remove_property("overflow").map(|_| ())
        }
        ScrollEffect::Restore(value) => style.set_property("overflow", value),
    };
    if let Err(err) = result {
        console::error!("overlay scroll lock failed", err);
    }
}

/// Register `id` on the overlay stack and take a share of the body scroll lock.
pub(crate) fn register_overlay(id: OverlayId, parent: Option<OverlayId>) {
    let current = gloo::utils::document()
        .body()
        .map(|body| body_overflow(&body))
        .unwrap_or_default();
    let mut effect = None;
    Dispatch::<OverlayRegistry>::new().reduce_mut(|registry| {
        registry.push(id, parent);
        effect = registry.acquire_scroll(id, &current);
    });
    if let Some(effect) = effect {
        apply_scroll(&effect);
    }
}

/// Drop `id` from the stack and release its share of the scroll lock.
pub(crate) fn unregister_overlay(id: OverlayId) {
    let mut effect = None;
    Dispatch::<OverlayRegistry>::new().reduce_mut(|registry| {
        registry.remove(id);
        effect = registry.release_scroll(id);
    });
    if let Some(effect) = effect {
        apply_scroll(&effect);
    }
}

/// Whether `id` currently owns keyboard handling.
pub(crate) fn is_topmost(id: OverlayId) -> bool {
    Dispatch::<OverlayRegistry>::new().get().is_topmost(id)
}

/// Focusable descendants of `scope` in document order.
pub(crate) fn focusables(scope: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = scope.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Currently focused element, if it is an `HtmlElement`.
pub(crate) fn active_element() -> Option<HtmlElement> {
    gloo::utils::document()
        .active_element()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

fn focus(element: &HtmlElement, what: &str) {
    if let Err(err) = element.focus() {
        console::error!(format!("{what} focus failed"), err);
    }
}

/// Carry out a trap decision against the elements it was computed from.
pub(crate) fn apply_focus(step: FocusMove, items: &[HtmlElement], container: &HtmlElement) {
    match step {
        FocusMove::Native => {}
        FocusMove::Focus(index) => {
            if let Some(target) = items.get(index) {
                focus(target, "overlay");
            }
        }
        FocusMove::Container => focus(container, "overlay panel"),
    }
}

/// Move focus into a freshly opened panel.
pub(crate) fn focus_initial(container: &HtmlElement) {
    let items = focusables(container);
    apply_focus(FocusScope::new(items.len()).initial(), &items, container);
}

/// Resolve a Tab press inside `container`. Returns the decision so the caller can
/// suppress the browser default.
pub(crate) fn trap_tab(container: &HtmlElement, shift: bool) -> FocusMove {
    let items = focusables(container);
    let current = active_element().and_then(|active| {
        items
            .iter()
            .position(|item| item.is_same_node(Some(active.as_ref())))
    });
    let step = FocusScope::new(items.len()).on_tab(current, shift);
    apply_focus(step, &items, container);
    step
}

/// Return focus to the element that had it before the panel opened.
pub(crate) fn restore_focus(previous: Option<HtmlElement>) {
    if let Some(previous) = previous.filter(|element| element.is_connected()) {
        focus(&previous, "restore");
    }
}

/// Pending animation frames for one entry transition. Dropping it cancels the chain.
pub(crate) struct EntryFrames {
    frames: Rc<RefCell<Vec<AnimationFrame>>>,
}

impl Drop for EntryFrames {
    fn drop(&mut self) {
        self.frames.borrow_mut().clear();
    }
}

/// Run `lifecycle` through its entry frames and call `on_entered` once it reports
/// [`FrameStep::Entered`]. A token invalidated by a close in between stops the chain.
pub(crate) fn schedule_entry(
    lifecycle: Rc<RefCell<PanelLifecycle>>,
    token: FrameToken,
    on_entered: impl Fn() + 'static,
) -> EntryFrames {
    let frames = Rc::new(RefCell::new(Vec::new()));
    request_frame(&frames, lifecycle, token, Rc::new(on_entered));
    EntryFrames { frames }
}

fn request_frame(
    frames: &Rc<RefCell<Vec<AnimationFrame>>>,
    lifecycle: Rc<RefCell<PanelLifecycle>>,
    token: FrameToken,
    on_entered: Rc<dyn Fn()>,
) {
    let chain = Rc::clone(frames);
    let frame = request_animation_frame(move |_| {
        let step = lifecycle.borrow_mut().on_frame(token);
        match step {
            FrameStep::Again => request_frame(&chain, lifecycle, token, on_entered),
            FrameStep::Entered => on_entered(),
            FrameStep::Stale => {}
        }
    });
    frames.borrow_mut().push(frame);
}
