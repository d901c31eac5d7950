use yew::prelude::*;
use web_sys::{window, KeyboardEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::safe_image::SafeImage;
use crate::i18n::context::use_language;

const TESTIMONIAL_COUNT: usize = 6;

pub fn testimonial_image(n: usize) -> String {
    format!("/assets/testimonials/testimonial_{}.jpg", n)
}

pub fn closes_modal(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let language = use_language();
    let selected = use_state(|| None::<usize>);

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    // Focus stays on the gallery item, so Escape is caught on the window.
    let open_now = *selected;
    {
        let selected = selected.clone();
        use_effect_with_deps(
            move |open: &Option<usize>| {
                let listener = open.and_then(|_| {
                    let on_key = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        if closes_modal(&e.key()) {
                            selected.set(None);
                        }
                    });
                    window().map(|window| {
                        let _ = window.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
                        (window, on_key)
                    })
                });
                move || {
                    if let Some((window, on_key)) = listener {
                        let _ = window.remove_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
                    }
                }
            },
            open_now,
        );
    }

    html! {
        <section id="feedback" class="testimonials">
            <h2 class="section-title">{ language.t("feedback.title") }</h2>
            <p class="section-subtitle">{ language.t("feedback.subtitle") }</p>
            <div class="testimonial-grid" role="list" aria-label={language.t("feedback.ariaLabel.gallery")}>
                { for (1..=TESTIMONIAL_COUNT).map(|n| {
                    let open = {
                        let selected = selected.clone();
                        Callback::from(move |_: MouseEvent| selected.set(Some(n)))
                    };
                    let open_with_key = {
                        let selected = selected.clone();
                        Callback::from(move |e: KeyboardEvent| {
                            if e.key() == "Enter" || e.key() == " " {
                                e.prevent_default();
                                selected.set(Some(n));
                            }
                        })
                    };
                    html! {
                        <div
                            class="testimonial-item"
                            role="listitem"
                            tabindex="0"
                            aria-label={language.t("feedback.ariaLabel.viewImage")}
                            onclick={open}
                            onkeydown={open_with_key}
                        >
                            <SafeImage src={testimonial_image(n)} alt={format!("{} {}", language.t("feedback.title"), n)} />
                        </div>
                    }
                }) }
            </div>
            {
                if let Some(n) = *selected {
                    html! {
                        <div class="testimonial-modal" onclick={close.clone()}>
                            <div class="testimonial-modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                                <button class="testimonial-modal-close" onclick={close} aria-label={language.t("feedback.close")}>
                                    {"×"}
                                </button>
                                <SafeImage src={testimonial_image(n)} alt={format!("{} {}", language.t("feedback.title"), n)} />
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .testimonials {
                    padding: 6rem 1.5rem;
                    text-align: center;
                }

                .testimonial-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                    gap: 1.5rem;
                }

                .testimonial-item {
                    cursor: zoom-in;
                    border-radius: 12px;
                    overflow: hidden;
                    transition: transform 0.3s ease;
                }

                .testimonial-item:hover,
                .testimonial-item:focus {
                    transform: scale(1.03);
                }

                .testimonial-item img {
                    width: 100%;
                    display: block;
                }

                .testimonial-modal {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.9);
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                }

                .testimonial-modal-content {
                    position: relative;
                    max-width: 90vw;
                    max-height: 90vh;
                }

                .testimonial-modal-content img {
                    max-width: 100%;
                    max-height: 85vh;
                }

                .testimonial-modal-close {
                    position: absolute;
                    top: -2.5rem;
                    inset-inline-end: 0;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 2rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </section>
    }
}
