//! Portalled dialog panel and its document side effects.

use super::{CloseControl, use_overlay};
use crate::components::dom;
use crate::components::foundations::extra_class;
use crate::core::overlay::{
    AnimationPhase, DismissSignal, KeyIntent, OverlayId, PanelConfig, PanelLifecycle,
    classify_key,
};
use crate::core::variants::modal::{ModalSize, overlay_class, panel_class};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

/// Values a mounted panel shares with the controls rendered inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelContext {
    /// Registry id of the panel.
    pub id: OverlayId,
    /// The panel's close callback, run before the overlay closes.
    pub on_close: Option<Callback<()>>,
}

/// Props for [`Panel`].
#[derive(Properties, PartialEq)]
pub struct PanelProps {
    /// Maximum width preset.
    #[prop_or_default]
    pub size: ModalSize,
    /// Render the backdrop.
    #[prop_or(true)]
    pub show_overlay: bool,
    /// Render the built-in icon close control.
    #[prop_or(true)]
    pub show_close_control: bool,
    /// Close on pointer-down over the backdrop.
    #[prop_or(true)]
    pub close_on_overlay_click: bool,
    /// Close on Escape.
    #[prop_or(true)]
    pub close_on_escape: bool,
    /// Complete configuration, replacing the individual flags above when set.
    #[prop_or_default]
    pub preset: Option<PanelConfig>,
    /// Runs before the overlay closes, whatever closed it.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    /// Extra panel classes.
    #[prop_or_default]
    pub class: Classes,
    /// Extra backdrop classes.
    #[prop_or_default]
    pub overlay_class: Classes,
    /// Id of the element labelling the dialog.
    #[prop_or_default]
    pub aria_labelledby: Option<AttrValue>,
    /// Id of the element describing the dialog.
    #[prop_or_default]
    pub aria_describedby: Option<AttrValue>,
    /// Panel content.
    #[prop_or_default]
    pub children: Children,
}

impl PanelProps {
    /// Effective configuration.
    #[must_use]
    pub fn config(&self) -> PanelConfig {
        self.preset.unwrap_or(PanelConfig {
            size: self.size,
            show_overlay: self.show_overlay,
            show_close_control: self.show_close_control,
            close_on_overlay_click: self.close_on_overlay_click,
            close_on_escape: self.close_on_escape,
        })
    }
}

/// Latest render's view of the props, read by the document listener.
struct LiveProps {
    config: PanelConfig,
    dismiss: Callback<()>,
}

/// Document state held for as long as a panel is open. Dropping it undoes everything.
struct OpenSession {
    id: OverlayId,
    previous_focus: Option<HtmlElement>,
    _keydown: EventListener,
}

impl OpenSession {
    fn start(
        id: OverlayId,
        parent: Option<OverlayId>,
        panel_ref: &NodeRef,
        live: Rc<RefCell<LiveProps>>,
    ) -> Self {
        let previous_focus = dom::active_element();
        dom::register_overlay(id, parent);
        match panel_ref.cast::<HtmlElement>() {
            Some(container) if dom::is_topmost(id) => dom::focus_initial(&container),
            Some(_) => {}
            None => console::warn!("overlay panel was not mounted when it opened"),
        }

        let panel_ref = panel_ref.clone();
        let keydown = EventListener::new_with_options(
            &gloo::utils::document(),
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    on_keydown(id, event, &panel_ref, &live);
                }
            },
        );
        tracing::debug!(%id, "overlay session started");

        Self {
            id,
            previous_focus,
            _keydown: keydown,
        }
    }
}

impl Drop for OpenSession {
    fn drop(&mut self) {
        dom::unregister_overlay(self.id);
        dom::restore_focus(self.previous_focus.take());
        tracing::debug!(id = %self.id, "overlay session ended");
    }
}

fn on_keydown(
    id: OverlayId,
    event: &KeyboardEvent,
    panel_ref: &NodeRef,
    live: &RefCell<LiveProps>,
) {
    if event.default_prevented() || !dom::is_topmost(id) {
        return;
    }
    match classify_key(&event.key(), event.shift_key()) {
        KeyIntent::Escape => {
            let (config, dismiss) = {
                let live = live.borrow();
                (live.config, live.dismiss.clone())
            };
            if config.allows(DismissSignal::Escape) {
                event.prevent_default();
                dismiss.emit(());
            }
        }
        KeyIntent::Tab { shift } => {
            if let Some(container) = panel_ref.cast::<HtmlElement>()
                && dom::trap_tab(&container, shift).prevents_default()
            {
                event.prevent_default();
            }
        }
        KeyIntent::Other => {}
    }
}

/// Dialog surface rendered into the document body while the enclosing overlay is open.
///
/// The panel mounts on the render that observes `open == true` and unmounts on the render
/// that observes `open == false`. While mounted it hides page scrolling, traps focus, and
/// listens for Escape; all of it is undone when it unmounts.
#[function_component(Panel)]
pub fn panel(props: &PanelProps) -> Html {
    let overlay = use_overlay("Panel");
    let parent = use_context::<PanelContext>().map(|panel| panel.id);
    let config = props.config();
    let id = *use_state(OverlayId::next);
    let phase = use_state_eq(AnimationPhase::default);
    let lifecycle = use_mut_ref(PanelLifecycle::new);
    let panel_ref = use_node_ref();
    let open = overlay.open;

    let dismiss = {
        let on_close = props.on_close.clone();
        let set_open = overlay.set_open;
        Callback::from(move |()| {
            if let Some(on_close) = &on_close {
                on_close.emit(());
            }
            set_open.emit(false);
        })
    };

    let live = use_mut_ref(|| LiveProps {
        config,
        dismiss: dismiss.clone(),
    });
    *live.borrow_mut() = LiveProps {
        config,
        dismiss: dismiss.clone(),
    };

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let token = if *open {
                    lifecycle.borrow_mut().open()
                } else {
                    phase.set(AnimationPhase::Closed);
                    None
                };
                let frames = token.map(|token| {
                    dom::schedule_entry(lifecycle.clone(), token, move || {
                        phase.set(AnimationPhase::Open);
                    })
                });
                move || {
                    lifecycle.borrow_mut().close();
                    drop(frames);
                }
            },
            open,
        );
    }

    {
        let panel_ref = panel_ref.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let session = open.then(|| OpenSession::start(id, parent, &panel_ref, live));
                move || drop(session)
            },
            open,
        );
    }

    if !open {
        return Html::default();
    }
    let Some(host) = dom::portal_host() else {
        console::warn!("overlay panel has no document body to render into");
        return Html::default();
    };

    let on_overlay_pointer = Callback::from(move |_: PointerEvent| {
        if config.allows(DismissSignal::OverlayPointerDown) {
            dismiss.emit(());
        }
    });
    let on_panel_pointer = Callback::from(|event: PointerEvent| event.stop_propagation());

    let state = phase.as_str();
    let context = PanelContext {
        id,
        on_close: props.on_close.clone(),
    };
    let backdrop = config
        .show_overlay
        .then(|| {
            html! {
                <div
                    class={overlay_class(*phase, extra_class(&props.overlay_class).as_deref())}
                    data-state={state}
                    aria-hidden="true"
                    onpointerdown={on_overlay_pointer}
                />
            }
        })
        .unwrap_or_default();
    let close = config
        .show_close_control
        .then(|| html! { <CloseControl /> })
        .unwrap_or_default();

    let content = html! {
        <>
            { backdrop }
            <div
                ref={panel_ref}
                id={id.to_string()}
                class={panel_class(config.size, *phase, extra_class(&props.class).as_deref())}
                role="dialog"
                aria-modal="true"
                aria-labelledby={props.aria_labelledby.clone()}
                aria-describedby={props.aria_describedby.clone()}
                tabindex="-1"
                data-state={state}
                onpointerdown={on_panel_pointer}
            >
                <ContextProvider<PanelContext> context={context}>
                    { for props.children.iter() }
                    { close }
                </ContextProvider<PanelContext>>
            </div>
        </>
    };

    yew::create_portal(content, host)
}
