//! Card and its sections.

use crate::components::foundations::{BasicProps, extra_class, merge_classes, render_container};
use crate::core::variants::SectionPadding;
use crate::core::variants::card::{
    CardPadding, CardVariant, DESCRIPTION, TITLE, card_class, content_class, footer_class,
    header_class,
};
use yew::prelude::*;

/// Props for [`Card`].
#[derive(Properties, PartialEq)]
pub struct CardProps {
    /// Surface treatment.
    #[prop_or_default]
    pub variant: CardVariant,
    /// Container padding.
    #[prop_or_default]
    pub padding: CardPadding,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Content.
    #[prop_or_default]
    pub children: Children,
}

/// Bordered content surface.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let class = card_class(props.variant, props.padding, extra_class(&props.class).as_deref());
    html! {
        <div class={class}>
            { for props.children.iter() }
        </div>
    }
}

/// Props for the padded card sections.
#[derive(Properties, PartialEq)]
pub struct CardSectionProps {
    /// Section padding.
    #[prop_or_default]
    pub padding: SectionPadding,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Content.
    #[prop_or_default]
    pub children: Children,
}

fn section(class: String, children: &Children) -> Html {
    html! {
        <div class={(!class.is_empty()).then_some(class)}>
            { for children.iter() }
        </div>
    }
}

/// Title block of a card.
#[function_component(CardHeader)]
pub fn card_header(props: &CardSectionProps) -> Html {
    section(
        header_class(props.padding, extra_class(&props.class).as_deref()),
        &props.children,
    )
}

/// Main body of a card.
#[function_component(CardContent)]
pub fn card_content(props: &CardSectionProps) -> Html {
    section(
        content_class(props.padding, extra_class(&props.class).as_deref()),
        &props.children,
    )
}

/// Action row of a card.
#[function_component(CardFooter)]
pub fn card_footer(props: &CardSectionProps) -> Html {
    section(
        footer_class(props.padding, extra_class(&props.class).as_deref()),
        &props.children,
    )
}

/// Card heading, rendered as `h3`.
#[function_component(CardTitle)]
pub fn card_title(props: &BasicProps) -> Html {
    render_container("h3", merge_classes(TITLE, &props.class), props)
}

/// Supporting text under the card title.
#[function_component(CardDescription)]
pub fn card_description(props: &BasicProps) -> Html {
    render_container("p", merge_classes(DESCRIPTION, &props.class), props)
}
