//! Static panel sections.

use crate::components::foundations::{BasicProps, merge_classes, render_container};
use crate::core::variants::modal;
use yew::prelude::*;

/// Title and description block at the top of a panel.
#[function_component(ModalHeader)]
pub fn modal_header(props: &BasicProps) -> Html {
    render_container("div", merge_classes(modal::HEADER, &props.class), props)
}

/// Action row at the bottom of a panel.
#[function_component(ModalFooter)]
pub fn modal_footer(props: &BasicProps) -> Html {
    render_container("div", merge_classes(modal::FOOTER, &props.class), props)
}

/// Panel heading, rendered as `h2`.
#[function_component(ModalTitle)]
pub fn modal_title(props: &BasicProps) -> Html {
    render_container("h2", merge_classes(modal::TITLE, &props.class), props)
}

/// Supporting text under the title.
#[function_component(ModalDescription)]
pub fn modal_description(props: &BasicProps) -> Html {
    render_container("p", merge_classes(modal::DESCRIPTION, &props.class), props)
}
