//! Inline and block code snippets.

use crate::components::foundations::extra_class;
use crate::core::variants::code::{CodeLayout, CodeSize, CodeVariant, code_class};
use yew::prelude::*;

/// Props for [`Code`].
#[derive(Properties, PartialEq)]
pub struct CodeProps {
    /// Colour scheme.
    #[prop_or_default]
    pub variant: CodeVariant,
    /// Font size.
    #[prop_or_default]
    pub size: CodeSize,
    /// Render as a block wrapped in `pre`.
    #[prop_or_default]
    pub block: bool,
    /// Let long lines wrap.
    #[prop_or_default]
    pub wrap: bool,
    /// Language tag, exposed as `data-language`.
    #[prop_or_default]
    pub language: Option<AttrValue>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Code text.
    #[prop_or_default]
    pub children: Children,
}

/// Monospace snippet.
#[function_component(Code)]
pub fn code(props: &CodeProps) -> Html {
    let layout = CodeLayout {
        block: props.block,
        wrap: props.wrap,
    };
    let class = code_class(
        props.variant,
        props.size,
        layout,
        extra_class(&props.class).as_deref(),
    );
    let element = html! {
        <code class={class} data-language={props.language.clone()}>
            { for props.children.iter() }
        </code>
    };

    if props.block {
        html! { <pre class="overflow-x-auto">{ element }</pre> }
    } else {
        element
    }
}
