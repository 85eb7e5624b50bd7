use std::rc::Rc;

use log::debug;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::slider::geometry::{self, Geometry};
use crate::slider::testimonial::TestimonialState;

pub enum TestimonialAction {
    Setup(Geometry),
    Select(usize),
}

impl Reducible for TestimonialState {
    type Action = TestimonialAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            TestimonialAction::Setup(geometry) => {
                self.setup(geometry.slide_count, geometry.slide_width)
            }
            TestimonialAction::Select(index) => self.select(index),
        };
        if next.current() != self.current() {
            debug!("Testimonial {} selected", next.current());
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialSliderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TestimonialSlider)]
pub fn testimonial_slider(props: &TestimonialSliderProps) -> Html {
    let track_ref = use_node_ref();
    let state = use_reducer(TestimonialState::default);

    let remeasure = {
        let track_ref = track_ref.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| {
            match geometry::measure(&track_ref, ".testimonial-track") {
                Ok(geometry) => dispatcher.dispatch(TestimonialAction::Setup(geometry)),
                Err(e) => debug!("Testimonial slider not mounted: {}", e),
            }
        })
    };

    {
        let remeasure = remeasure.clone();
        use_effect_with_deps(
            move |_| {
                remeasure.emit(());
                || ()
            },
            props.children.len(),
        );
    }

    {
        let remeasure = remeasure.clone();
        use_event_with_window("resize", move |_: Event| remeasure.emit(()));
    }

    let view = state.view();

    html! {
        <section id="testimonials" class="testimonial-section">
            <div class="testimonial-viewport">
                <div
                    class="testimonial-track"
                    ref={track_ref}
                    style={format!("transform: {};", view.transform)}
                >
                    { for props.children.iter() }
                </div>
            </div>
            <div class="testimonial-dots">
                {
                    for (0..state.slide_count()).map(|index| {
                        let onclick = {
                            let state = state.clone();
                            Callback::from(move |_: MouseEvent| state.dispatch(TestimonialAction::Select(index)))
                        };
                        html! {
                            <button
                                class={classes!("dot", (view.active_dot == Some(index)).then(|| "active"))}
                                aria-label={format!("Show testimonial {}", index + 1)}
                                {onclick}
                            />
                        }
                    })
                }
            </div>
            <style>
                {r#"
                .testimonial-viewport {
                    overflow: hidden;
                }
                .testimonial-track {
                    display: flex;
                    transition: transform 0.5s ease;
                }
                .testimonial-track > * {
                    flex: 0 0 100%;
                }
                .testimonial-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }
                .testimonial-dots .dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.3);
                    cursor: pointer;
                }
                .testimonial-dots .dot.active {
                    background: #7EB2FF;
                }
                "#}
            </style>
        </section>
    }
}
