//! Close control.

use super::{PanelContext, SlotProps, use_overlay};
use crate::components::foundations::extra_class;
use crate::core::slot::{ClosePosition, SlotCapabilities};
use crate::core::variants::modal::close_class;
use yew::prelude::*;

/// Props for [`CloseControl`].
#[derive(Properties, PartialEq)]
pub struct CloseControlProps {
    /// Runs before the overlay closes.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Accessible name of the control.
    #[prop_or(AttrValue::Static("Close"))]
    pub aria_label: AttrValue,
    /// Reference to the rendered element.
    #[prop_or_default]
    pub node_ref: NodeRef,
    /// Render a caller element instead of the default button.
    #[prop_or_default]
    pub render: Option<Callback<SlotProps, Html>>,
    /// What the `render` callback accepts.
    #[prop_or_default]
    pub capabilities: SlotCapabilities,
    /// Custom content; without it the control shows an icon in the panel corner.
    #[prop_or_default]
    pub children: Children,
}

/// Control that closes the enclosing overlay.
///
/// Inside a [`Panel`](super::Panel) the panel's `on_close` runs before the overlay closes.
#[function_component(CloseControl)]
pub fn close_control(props: &CloseControlProps) -> Html {
    let overlay = use_overlay("CloseControl");
    let panel = use_context::<PanelContext>();

    let onclick = {
        let user = props.onclick.clone();
        let on_close = panel.and_then(|panel| panel.on_close);
        let set_open = overlay.set_open;
        Callback::from(move |event: MouseEvent| {
            if let Some(user) = &user {
                user.emit(event);
            }
            if let Some(on_close) = &on_close {
                on_close.emit(());
            }
            set_open.emit(false);
        })
    };

    let custom = props.render.is_some() || !props.children.is_empty();
    let class = close_class(
        ClosePosition::resolve(custom),
        extra_class(&props.class).as_deref(),
    );

    if let Some(render) = &props.render {
        return render.emit(SlotProps {
            class: props.capabilities.class_for(&class).map(AttrValue::from),
            onclick,
            node_ref: props
                .capabilities
                .forwards_ref
                .then(|| props.node_ref.clone()),
            aria_label: Some(props.aria_label.clone()),
        });
    }

    let content = if props.children.is_empty() {
        close_icon()
    } else {
        html! { { for props.children.iter() } }
    };

    html! {
        <button
            type="button"
            ref={props.node_ref.clone()}
            class={class}
            aria-label={props.aria_label.clone()}
            onclick={onclick}
        >
            { content }
        </button>
    }
}

fn close_icon() -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="h-4 w-4"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </svg>
    }
}
