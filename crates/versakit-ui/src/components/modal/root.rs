//! Overlay scope and context hooks.

use crate::core::overlay::OpenMode;
use crate::error::{OverlayError, OverlayResult};
use yew::prelude::*;

/// Open flag and setter shared by everything inside an [`OverlayRoot`].
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayContext {
    /// Effective open flag.
    pub open: bool,
    /// Request a new open flag.
    pub set_open: Callback<bool>,
}

/// Props for [`OverlayRoot`].
#[derive(Properties, PartialEq)]
pub struct OverlayRootProps {
    /// Caller-owned open flag. Leave unset for an uncontrolled root.
    #[prop_or_default]
    pub open: Option<bool>,
    /// Receives every open request. With `open` set this makes the root controlled;
    /// without it the callback only observes changes.
    #[prop_or_default]
    pub on_open_change: Option<Callback<bool>>,
    /// Starting flag of an uncontrolled root.
    #[prop_or_default]
    pub initial_open: bool,
    /// Trigger, panel, and any other content sharing the flag.
    #[prop_or_default]
    pub children: Children,
}

/// Scope that holds one modal's open flag.
#[function_component(OverlayRoot)]
pub fn overlay_root(props: &OverlayRootProps) -> Html {
    let initial = props.initial_open;
    let internal = use_state_eq(move || initial);
    let mode = OpenMode::resolve(props.open.is_some(), props.on_open_change.is_some());
    let open = mode.effective(props.open, *internal);

    let set_open = {
        let internal = internal.clone();
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |value: bool| {
            let update = mode.plan(value);
            if let Some(next) = update.store {
                internal.set(next);
            }
            if let (Some(value), Some(callback)) = (update.notify, on_open_change.as_ref()) {
                callback.emit(value);
            }
        })
    };

    html! {
        <ContextProvider<OverlayContext> context={OverlayContext { open, set_open }}>
            { for props.children.iter() }
        </ContextProvider<OverlayContext>>
    }
}

/// Overlay context for `component`, or the error describing why it is missing.
#[hook]
pub fn use_overlay_result(component: &'static str) -> OverlayResult<OverlayContext> {
    use_context::<OverlayContext>().ok_or(OverlayError::OutsideRoot { component })
}

/// Overlay context for `component`.
///
/// # Panics
///
/// Panics when rendered outside an [`OverlayRoot`]; that is a composition error in the
/// caller's markup, not a runtime condition.
#[hook]
pub fn use_overlay(component: &'static str) -> OverlayContext {
    match use_overlay_result(component) {
        Ok(context) => context,
        Err(err) => panic!("{err}"),
    }
}
