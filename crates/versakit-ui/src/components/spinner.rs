//! Loading spinner.

use crate::components::foundations::extra_class;
use crate::core::variants::spinner::{
    SEGMENT_DELAYS, SpinnerColor, SpinnerSize, SpinnerVariant, animation_style, spinner_class,
};
use std::sync::atomic::{AtomicU64, Ordering};
use yew::prelude::*;

static NEXT_GRADIENT: AtomicU64 = AtomicU64::new(1);

/// Props for [`Spinner`].
#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    /// Style.
    #[prop_or_default]
    pub variant: SpinnerVariant,
    /// Size.
    #[prop_or_default]
    pub size: SpinnerSize,
    /// Colour.
    #[prop_or_default]
    pub color: SpinnerColor,
    /// Seconds per animation cycle.
    #[prop_or(1.0)]
    pub speed: f64,
    /// Accessible name, also rendered as screen-reader text.
    #[prop_or(AttrValue::Static("Loading"))]
    pub aria_label: AttrValue,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Busy indicator with `role="status"`.
#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    let gradient_id = use_state(|| {
        format!(
            "spinner-gradient-{}",
            NEXT_GRADIENT.fetch_add(1, Ordering::Relaxed)
        )
    });
    let class = spinner_class(
        props.variant,
        props.size,
        props.color,
        extra_class(&props.class).as_deref(),
    );
    let label = props.aria_label.clone();

    let (style, body) = match props.variant {
        variant if variant.is_segmented() => {
            let segment = if props.variant == SpinnerVariant::Dots {
                props.size.dot_class()
            } else {
                props.size.bar_class()
            };
            let segments = SEGMENT_DELAYS
                .iter()
                .map(|delay| {
                    let style = animation_style(props.speed, Some(delay));
                    html! { <span class={segment} style={style} /> }
                })
                .collect::<Html>();
            (None, segments)
        }
        SpinnerVariant::Gradient => {
            let stroke = format!("url(#{})", *gradient_id);
            let body = html! {
                <svg class="w-full h-full" viewBox="0 0 50 50" aria-hidden="true">
                    <title>{ label.clone() }</title>
                    <defs>
                        <linearGradient
                            id={(*gradient_id).clone()}
                            x1="0%"
                            y1="0%"
                            x2="100%"
                            y2="100%"
                        >
                            <stop offset="0%" stop-color="currentColor" stop-opacity="0" />
                            <stop offset="100%" stop-color="currentColor" stop-opacity="1" />
                        </linearGradient>
                    </defs>
                    <circle
                        cx="25"
                        cy="25"
                        r="20"
                        fill="none"
                        stroke={stroke}
                        stroke-width="4"
                        stroke-linecap="round"
                    />
                </svg>
            };
            (Some(animation_style(props.speed, None)), body)
        }
        _ => (Some(animation_style(props.speed, None)), Html::default()),
    };

    html! {
        <div
            role="status"
            aria-live="polite"
            aria-label={label.clone()}
            class={class}
            style={style}
        >
            { body }
            <span class="sr-only">{ label }</span>
        </div>
    }
}
