use yew::prelude::*;

use crate::i18n::context::use_language;

#[function_component(Hero)]
pub fn hero() -> Html {
    let language = use_language();

    html! {
        <section id="home" class="hero">
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1 class="hero-title">
                    <span>{ language.t("landing.title.break") }</span>
                    {" "}
                    <span class="accent">{ language.t("landing.title.your") }</span>
                    {" "}
                    <span>{ language.t("landing.title.limits") }</span>
                </h1>
                <p class="hero-subtitle">{ language.t("landing.subtitle") }</p>
                <div class="hero-buttons">
                    <a href="#footer" class="hero-cta primary">{ language.t("nav.contact") }</a>
                    <a href="#services" class="hero-cta secondary">{ language.t("nav.services") }</a>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    background: url('/assets/hero.jpg') center / cover no-repeat, #0a0a0a;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.6), rgba(10, 10, 10, 1));
                }

                .hero-content {
                    position: relative;
                    max-width: 800px;
                    padding: 0 1.5rem;
                }

                .hero-title {
                    font-size: clamp(2.5rem, 8vw, 5rem);
                    font-weight: 800;
                    text-transform: uppercase;
                    margin: 0 0 1.5rem;
                }

                .hero-title .accent {
                    color: #B60D0D;
                }

                .hero-subtitle {
                    font-size: 1.2rem;
                    color: #ccc;
                    line-height: 1.7;
                }

                .hero-buttons {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-top: 2rem;
                }

                .hero-cta {
                    padding: 0.9rem 2rem;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 600;
                    transition: transform 0.2s ease;
                }

                .hero-cta:hover {
                    transform: translateY(-2px);
                }

                .hero-cta.primary {
                    background: #B60D0D;
                }

                .hero-cta.secondary {
                    border: 1px solid #B60D0D;
                }
                "#}
            </style>
        </section>
    }
}
