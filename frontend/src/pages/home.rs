use wasm_bindgen::JsCast;
use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::card_slider::CardSlider;
use crate::components::testimonial_slider::TestimonialSlider;
use crate::config;
use crate::pages::card_focus::{CardFocus, CardFocusAction};
use crate::pages::content::{FALLBACK_IMAGE, PROGRAMS, TESTIMONIALS};

#[derive(Properties, PartialEq)]
struct ProgramCardProps {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    focused: bool,
    onclick: Callback<MouseEvent>,
}

#[function_component(ProgramCard)]
fn program_card(props: &ProgramCardProps) -> Html {
    let onerror = Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<web_sys::HtmlImageElement>() {
            // a broken placeholder must not retrigger this forever
            if img.src() != FALLBACK_IMAGE {
                img.set_src(FALLBACK_IMAGE);
            }
        }
    });

    html! {
        <div
            class={classes!("program-card", props.focused.then(|| "focused"))}
            onclick={props.onclick.clone()}
        >
            <div class="program-card-image">
                <img src={props.image} alt={props.title} {onerror} />
            </div>
            <div class="program-card-content">
                <h3>{props.title}</h3>
                <div class="rating">{"★★★★★"}</div>
                <p>{props.description}</p>
                <a href="#programs" class="btn-learn-more">{"Learn More →"}</a>
            </div>
        </div>
    }
}

fn is_inside_program_card(e: &Event) -> bool {
    e.target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(".program-card").ok().flatten())
        .is_some()
}

#[function_component(Home)]
pub fn home() -> Html {
    let slider_config = use_state(config::load);
    let card_focus = use_reducer(CardFocus::default);

    {
        let card_focus = card_focus.clone();
        use_event_with_window("click", move |e: Event| {
            if !is_inside_program_card(&e) {
                card_focus.dispatch(CardFocusAction::ClickOutside);
            }
        });
    }

    html! {
        <div class="home-page">
            <section
                id="programs"
                class={classes!("programs-section", card_focus.focused().map(|_| "card-focused"))}
            >
                <h2>{"Internship Programs"}</h2>
                <CardSlider config={(*slider_config).clone()}>
                    {
                        for PROGRAMS.iter().enumerate().map(|(index, &(title, description, image))| {
                            let onclick = {
                                let card_focus = card_focus.clone();
                                Callback::from(move |_: MouseEvent| {
                                    card_focus.dispatch(CardFocusAction::Click(index))
                                })
                            };
                            html! {
                                <ProgramCard
                                    {title}
                                    {description}
                                    {image}
                                    focused={card_focus.is_focused(index)}
                                    {onclick}
                                />
                            }
                        })
                    }
                </CardSlider>
            </section>

            <TestimonialSlider>
                {
                    for TESTIMONIALS.iter().map(|&(quote, author, role)| html! {
                        <blockquote class="testimonial">
                            <p>{quote}</p>
                            <footer>
                                <strong>{author}</strong>
                                <span>{role}</span>
                            </footer>
                        </blockquote>
                    })
                }
            </TestimonialSlider>

            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    padding: 4rem 2rem;
                    color: #ffffff;
                    background: #0d1b1e;
                }
                .programs-section h2 {
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .program-card {
                    margin: 0 0.75rem;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    overflow: hidden;
                }
                .program-card {
                    cursor: pointer;
                    transition: opacity 0.3s ease, filter 0.3s ease, transform 0.3s ease;
                }
                .card-focused .program-card:not(.focused) {
                    opacity: 0.4;
                    filter: blur(2px);
                }
                .program-card.focused {
                    transform: scale(1.03);
                }
                .btn-learn-more {
                    color: #7EB2FF;
                    text-decoration: none;
                }
                .program-card-image img {
                    width: 100%;
                    height: 180px;
                    object-fit: cover;
                    pointer-events: none;
                }
                .program-card-content {
                    padding: 1.25rem;
                }
                .rating {
                    color: #f5c518;
                    margin: 0.5rem 0;
                }
                .testimonial-section {
                    max-width: 720px;
                    margin: 5rem auto 0;
                }
                .testimonial {
                    margin: 0;
                    padding: 2rem;
                    text-align: center;
                    font-size: 1.1rem;
                }
                .testimonial footer {
                    display: flex;
                    flex-direction: column;
                    margin-top: 1rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                "#}
            </style>
        </div>
    }
}
