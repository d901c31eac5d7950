use yew::prelude::*;

use crate::components::nav::NavBar;
use crate::components::reveal::Reveal;
use crate::components::scroll_to_top::ScrollToTop;
use crate::i18n::context::use_language;
use crate::pages::{
    about::About,
    faq::Faq,
    footer::Footer,
    hero::Hero,
    packages::Packages,
    services::Services,
    testimonials::Testimonials,
    transformations::Transformations,
};

#[function_component(Home)]
pub fn home() -> Html {
    let language = use_language();

    html! {
        <div class="landing-page" dir={language.dir()}>
            <ScrollToTop />
            <NavBar />
            <main id="main">
                <Hero />
                <Reveal><About /></Reveal>
                <Reveal><Services /></Reveal>
                <Reveal><Transformations /></Reveal>
                <Reveal><Testimonials /></Reveal>
                <Reveal><Packages /></Reveal>
                <Reveal><Faq /></Reveal>
            </main>
            <Footer />
            <style>
                {r#"
                .reveal {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }

                .reveal.visible {
                    opacity: 1;
                    transform: none;
                }

                .safe-image {
                    position: relative;
                }

                .safe-image img.loading {
                    opacity: 0;
                }

                .image-spinner {
                    position: absolute;
                    inset: 0;
                    margin: auto;
                    width: 32px;
                    height: 32px;
                    border: 3px solid #B60D0D;
                    border-top-color: transparent;
                    border-radius: 50%;
                    animation: spin 0.8s linear infinite;
                }

                .image-placeholder {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    min-height: 200px;
                    background: #1a1a1a;
                    color: #777;
                    border-radius: 8px;
                }
                "#}
            </style>
        </div>
    }
}
