use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Event;
use yew::prelude::*;

use crate::config::SliderConfig;
use crate::slider::controller::{SliderEvent, SliderState};
use crate::slider::geometry;

#[derive(Properties, PartialEq)]
pub struct CardSliderProps {
    pub config: SliderConfig,
    #[prop_or_default]
    pub children: Children,
}

pub enum CardSliderMsg {
    /// Remeasure the track and reset to the first slide.
    Setup,
    Prev,
    Next,
    PointerDown(f64),
    PointerMove(f64),
    PointerUp,
}

/// Remeasure requests wait for the next `rendered` call so they see the
/// committed DOM, not the children of the previous render.
#[derive(Debug, Default)]
struct PendingSetup(bool);

impl PendingSetup {
    fn request(&mut self) {
        self.0 = true;
    }

    fn take(&mut self, first_render: bool) -> bool {
        let due = first_render || self.0;
        self.0 = false;
        due
    }
}

/// Fresh child callbacks alone must not reset the carousel.
fn layout_inputs_changed(old: &CardSliderProps, new: &CardSliderProps) -> bool {
    old.config != new.config || old.children.len() != new.children.len()
}

pub struct CardSlider {
    state: SliderState,
    track_ref: NodeRef,
    pending_setup: PendingSetup,
    window_listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

impl CardSlider {
    fn dispatch(&mut self, event: SliderEvent) -> bool {
        let next = self.state.apply(event);
        let changed = next != self.state;
        if next.current_index() != self.state.current_index() {
            let via = if self.state.is_dragging() && !next.is_dragging() {
                "swipe"
            } else {
                "step"
            };
            debug!("Card slider moved to {} ({})", next.current_index(), via);
        }
        self.state = next;
        changed
    }

    fn listen_on_window(&mut self, ctx: &Context<Self>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let bindings: [(&'static str, fn() -> CardSliderMsg); 3] = [
            ("resize", || CardSliderMsg::Setup),
            ("mouseup", || CardSliderMsg::PointerUp),
            ("touchend", || CardSliderMsg::PointerUp),
        ];
        for (event_name, to_msg) in bindings {
            let link = ctx.link().clone();
            let callback = Closure::wrap(Box::new(move |_: Event| {
                link.send_message(to_msg());
            }) as Box<dyn FnMut(Event)>);
            if let Err(e) = window
                .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            {
                warn!("Could not listen for {}: {:?}", event_name, e);
                continue;
            }
            self.window_listeners.push((event_name, callback));
        }
    }
}

impl Component for CardSlider {
    type Message = CardSliderMsg;
    type Properties = CardSliderProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: SliderState::new(ctx.props().config.commit_threshold),
            track_ref: NodeRef::default(),
            pending_setup: PendingSetup::default(),
            window_listeners: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CardSliderMsg::Setup => match geometry::measure(&self.track_ref, ".slider-track") {
                Ok(geometry) => {
                    let layout = geometry.layout(&ctx.props().config);
                    debug!("Card slider setup: {:?}", layout);
                    self.dispatch(SliderEvent::Setup(layout))
                }
                Err(e) => {
                    debug!("Card slider not mounted: {}", e);
                    false
                }
            },
            CardSliderMsg::Prev => self.dispatch(SliderEvent::Prev),
            CardSliderMsg::Next => self.dispatch(SliderEvent::Next),
            CardSliderMsg::PointerDown(x) => self.dispatch(SliderEvent::PointerDown(x)),
            CardSliderMsg::PointerMove(x) => self.dispatch(SliderEvent::PointerMove(x)),
            CardSliderMsg::PointerUp => self.dispatch(SliderEvent::PointerUp),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        self.state = self
            .state
            .with_commit_threshold(ctx.props().config.commit_threshold);
        // measured in `rendered`, against the new children
        if layout_inputs_changed(old_props, ctx.props()) {
            self.pending_setup.request();
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let view = self.state.view();

        html! {
            <div class="slider-wrapper">
                <button
                    id="prev-slide"
                    class="slider-btn"
                    aria-label="Previous"
                    disabled={view.prev_disabled}
                    onclick={link.callback(|_: MouseEvent| CardSliderMsg::Prev)}
                >
                    {"‹"}
                </button>
                <div
                    class={classes!("slider-container", view.grabbing.then(|| "grabbing"))}
                    onmousedown={link.callback(|e: MouseEvent| CardSliderMsg::PointerDown(geometry::mouse_x(&e)))}
                    ontouchstart={link.batch_callback(|e: TouchEvent| geometry::touch_x(&e).map(CardSliderMsg::PointerDown))}
                    onmousemove={link.callback(|e: MouseEvent| CardSliderMsg::PointerMove(geometry::mouse_x(&e)))}
                    ontouchmove={link.batch_callback(|e: TouchEvent| geometry::touch_x(&e).map(CardSliderMsg::PointerMove))}
                    ontouchcancel={link.callback(|_: TouchEvent| CardSliderMsg::PointerUp)}
                >
                    <div
                        class="slider-track"
                        ref={self.track_ref.clone()}
                        style={format!("transform: {};", view.transform)}
                    >
                        { for ctx.props().children.iter() }
                    </div>
                </div>
                <button
                    id="next-slide"
                    class="slider-btn"
                    aria-label="Next"
                    disabled={view.next_disabled}
                    onclick={link.callback(|_: MouseEvent| CardSliderMsg::Next)}
                >
                    {"›"}
                </button>
                <style>
                    {r#"
                    .slider-wrapper {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .slider-container {
                        overflow: hidden;
                        flex: 1;
                        cursor: grab;
                        user-select: none;
                    }
                    .slider-container.grabbing {
                        cursor: grabbing;
                    }
                    .slider-track {
                        display: flex;
                        transition: transform 0.4s ease;
                    }
                    .slider-track > * {
                        flex: 0 0 100%;
                    }
                    @media (min-width: 576px) {
                        .slider-track > * { flex-basis: 50%; }
                    }
                    @media (min-width: 992px) {
                        .slider-track > * { flex-basis: 33.3333%; }
                    }
                    .slider-btn {
                        background: rgba(30, 144, 255, 0.15);
                        border: 1px solid rgba(30, 144, 255, 0.3);
                        color: #fff;
                        border-radius: 50%;
                        width: 44px;
                        height: 44px;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .slider-btn:disabled {
                        opacity: 0.3;
                        cursor: default;
                    }
                    "#}
                </style>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.listen_on_window(ctx);
        }
        if self.pending_setup.take(first_render) {
            ctx.link().send_message(CardSliderMsg::Setup);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(window) = web_sys::window() {
            for (event_name, callback) in self.window_listeners.drain(..) {
                if let Err(e) = window.remove_event_listener_with_callback(
                    event_name,
                    callback.as_ref().unchecked_ref(),
                ) {
                    warn!("Could not stop listening for {}: {:?}", event_name, e);
                }
            }
        }
    }
}
