//! Open trigger.

use super::{SlotProps, use_overlay};
use crate::components::foundations::extra_class;
use crate::core::slot::SlotCapabilities;
use yew::prelude::*;

/// Props for [`Trigger`].
#[derive(Properties, PartialEq)]
pub struct TriggerProps {
    /// Runs before the overlay opens.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Classes for the rendered button.
    #[prop_or_default]
    pub class: Classes,
    /// Reference to the rendered element.
    #[prop_or_default]
    pub node_ref: NodeRef,
    /// Render a caller element instead of the default button.
    #[prop_or_default]
    pub render: Option<Callback<SlotProps, Html>>,
    /// What the `render` callback accepts.
    #[prop_or_default]
    pub capabilities: SlotCapabilities,
    /// Button content.
    #[prop_or_default]
    pub children: Children,
}

/// Control that opens the enclosing overlay.
#[function_component(Trigger)]
pub fn trigger(props: &TriggerProps) -> Html {
    let overlay = use_overlay("Trigger");

    let onclick = {
        let user = props.onclick.clone();
        let set_open = overlay.set_open;
        Callback::from(move |event: MouseEvent| {
            if let Some(user) = &user {
                user.emit(event);
            }
            set_open.emit(true);
        })
    };

    if let Some(render) = &props.render {
        let class = extra_class(&props.class)
            .and_then(|class| props.capabilities.class_for(&class))
            .map(AttrValue::from);
        return render.emit(SlotProps {
            class,
            onclick,
            node_ref: props
                .capabilities
                .forwards_ref
                .then(|| props.node_ref.clone()),
            aria_label: None,
        });
    }

    html! {
        <button
            type="button"
            ref={props.node_ref.clone()}
            class={props.class.clone()}
            aria-haspopup="dialog"
            aria-expanded={overlay.open.to_string()}
            onclick={onclick}
        >
            { for props.children.iter() }
        </button>
    }
}
