//! Button.

use crate::components::foundations::extra_class;
use crate::core::variants::button::{ButtonSize, ButtonVariant, button_class};
use yew::prelude::*;

/// Props for [`Button`].
#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Content.
    #[prop_or_default]
    pub children: Children,
    /// Visual style.
    #[prop_or_default]
    pub variant: ButtonVariant,
    /// Dimensions.
    #[prop_or_default]
    pub size: ButtonSize,
    /// Disable interaction.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// HTML `type`; defaults to `button`.
    #[prop_or(AttrValue::Static("button"))]
    pub r#type: AttrValue,
    /// Reference to the rendered element.
    #[prop_or_default]
    pub node_ref: NodeRef,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Styled `button` element.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = button_class(props.variant, props.size, extra_class(&props.class).as_deref());

    html! {
        <button
            ref={props.node_ref.clone()}
            class={class}
            disabled={props.disabled}
            type={props.r#type.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
