use yew::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::i18n::context::use_language;

const FAQ_COUNT: usize = 7;

/// Opening the open item closes it; opening another closes the rest.
pub fn toggle_index(active: Option<usize>, index: usize) -> Option<usize> {
    if active == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: String,
    answer: String,
    is_open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                on_toggle.emit(index);
            }
        })
    };

    let answer_id = format!("faq-answer-{}", props.index);

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button
                class="faq-question"
                {onclick}
                {onkeydown}
                aria-expanded={props.is_open.to_string()}
                aria-controls={answer_id.clone()}
            >
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer" id={answer_id} role="region">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let language = use_language();
    let active = use_state(|| None::<usize>);

    let on_toggle = {
        let active = active.clone();
        Callback::from(move |index: usize| active.set(toggle_index(*active, index)))
    };

    html! {
        <section id="faq" class="faq-section">
            <h2 class="section-title">{ language.t("faq.title") }</h2>
            <p class="section-subtitle">{ language.t("faq.subtitle") }</p>
            <div class="faq-list">
                { for (1..=FAQ_COUNT).map(|n| html! {
                    <FaqItem
                        index={n}
                        question={language.t(&format!("faq.q{}", n))}
                        answer={language.t(&format!("faq.a{}", n))}
                        is_open={*active == Some(n)}
                        on_toggle={on_toggle.clone()}
                    />
                }) }
            </div>
            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                    text-align: center;
                }

                .faq-list {
                    text-align: start;
                }

                .faq-item {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(182, 13, 13, 0.1);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(182, 13, 13, 0.4);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: start;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }

                .faq-question:hover {
                    color: #ff6b6b;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #B60D0D;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #aaa;
                    line-height: 1.7;
                    margin: 0;
                }

                @media (max-width: 768px) {
                    .faq-question {
                        font-size: 1rem;
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
