//! Determinate progress bar.

use crate::components::foundations::extra_class;
use crate::core::variants::progress::{
    ProgressSize, ProgressValue, ProgressVariant, indicator_class, root_class,
};
use yew::prelude::*;

/// Props for [`Progress`].
#[derive(Properties, PartialEq)]
pub struct ProgressProps {
    /// Current value; clamped into `[0, max]`.
    #[prop_or_default]
    pub value: f64,
    /// Upper bound.
    #[prop_or(100.0)]
    pub max: f64,
    /// Track height.
    #[prop_or_default]
    pub size: ProgressSize,
    /// Indicator colour.
    #[prop_or_default]
    pub variant: ProgressVariant,
    /// Animate indicator movement.
    #[prop_or(true)]
    pub animated: bool,
    /// Show the rounded percentage under the bar.
    #[prop_or_default]
    pub show_value: bool,
    /// Accessible name.
    #[prop_or(AttrValue::Static("Progress"))]
    pub aria_label: AttrValue,
    /// Extra track classes.
    #[prop_or_default]
    pub class: Classes,
    /// Extra indicator classes.
    #[prop_or_default]
    pub indicator_class: Classes,
}

/// Horizontal progress bar with `role="progressbar"`.
#[function_component(Progress)]
pub fn progress(props: &ProgressProps) -> Html {
    let value = ProgressValue::new(props.value, props.max);

    html! {
        <div class="relative w-full">
            <div
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax={value.max.to_string()}
                aria-valuenow={value.clamped.to_string()}
                aria-label={props.aria_label.clone()}
                class={root_class(props.size, extra_class(&props.class).as_deref())}
            >
                <div
                    class={indicator_class(
                        props.variant,
                        props.animated,
                        extra_class(&props.indicator_class).as_deref(),
                    )}
                    style={value.indicator_transform()}
                />
            </div>
            {
                props.show_value.then(|| html! {
                    <span class="mt-1 text-xs text-gray-600 block text-right" aria-live="polite">
                        { value.label() }
                    </span>
                }).unwrap_or_default()
            }
        </div>
    }
}
