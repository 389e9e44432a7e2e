//! Alert and its parts.

use crate::components::foundations::{BasicProps, extra_class, merge_classes, render_container};
use crate::core::variants::alert::{
    AlertVariant, DESCRIPTION, TITLE, alert_class, content_class, icon_class,
};
use yew::prelude::*;

/// Props for [`Alert`].
#[derive(Properties, PartialEq)]
pub struct AlertProps {
    /// Tone.
    #[prop_or_default]
    pub variant: AlertVariant,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Content.
    #[prop_or_default]
    pub children: Children,
}

/// Tone shared with the alert parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct AlertTone(AlertVariant);

/// Callout box with `role="alert"`.
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let class = alert_class(props.variant, extra_class(&props.class).as_deref());
    html! {
        <div role="alert" class={class}>
            <ContextProvider<AlertTone> context={AlertTone(props.variant)}>
                { for props.children.iter() }
            </ContextProvider<AlertTone>>
        </div>
    }
}

/// Icon slot, coloured after the enclosing alert's tone.
#[function_component(AlertIcon)]
pub fn alert_icon(props: &BasicProps) -> Html {
    let tone = use_context::<AlertTone>().map(|tone| tone.0).unwrap_or_default();
    render_container("div", icon_class(tone, extra_class(&props.class).as_deref()), props)
}

/// Props for [`AlertContent`].
#[derive(Properties, PartialEq)]
pub struct AlertContentProps {
    /// Indent the content past an [`AlertIcon`].
    #[prop_or_default]
    pub has_icon: bool,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Content.
    #[prop_or_default]
    pub children: Children,
}

/// Text column of an alert.
#[function_component(AlertContent)]
pub fn alert_content(props: &AlertContentProps) -> Html {
    let class = content_class(props.has_icon, extra_class(&props.class).as_deref());
    html! {
        <div class={(!class.is_empty()).then_some(class)}>
            { for props.children.iter() }
        </div>
    }
}

/// Alert heading, rendered as `h5`.
#[function_component(AlertTitle)]
pub fn alert_title(props: &BasicProps) -> Html {
    render_container("h5", merge_classes(TITLE, &props.class), props)
}

/// Alert body text.
#[function_component(AlertDescription)]
pub fn alert_description(props: &BasicProps) -> Html {
    render_container("div", merge_classes(DESCRIPTION, &props.class), props)
}
