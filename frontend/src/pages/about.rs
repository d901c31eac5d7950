use yew::prelude::*;

use crate::components::safe_image::SafeImage;
use crate::i18n::context::use_language;

const QUALIFICATION_KEYS: [&str; 4] = [
    "about.qualification.1",
    "about.qualification.2",
    "about.qualification.3",
    "about.qualification.4",
];

#[function_component(About)]
pub fn about() -> Html {
    let language = use_language();

    html! {
        <section id="about" class="about">
            <div class="about-grid">
                <SafeImage src="/assets/coach.jpg" alt={language.t("nav.about")} class={classes!("about-image")} />
                <div class="about-text">
                    <h2 class="section-title">
                        { language.t("about.title") }
                        {" "}
                        <span class="accent">{ language.t("about.me") }</span>
                    </h2>
                    <p>{ language.t("about.description") }</p>
                    <ul class="qualifications">
                        { for QUALIFICATION_KEYS.iter().map(|key| html! {
                            <li>{ language.t(key) }</li>
                        }) }
                    </ul>
                </div>
            </div>
            <style>
                {r#"
                .about {
                    padding: 6rem 1.5rem;
                }

                .about-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .section-title {
                    font-size: 2.5rem;
                    margin-bottom: 1.5rem;
                }

                .section-title .accent {
                    color: #B60D0D;
                }

                .about-text p {
                    color: #ccc;
                    line-height: 1.8;
                }

                .qualifications {
                    list-style: none;
                    padding: 0;
                }

                .qualifications li {
                    padding: 0.5rem 0;
                    border-bottom: 1px solid rgba(182, 13, 13, 0.2);
                }

                .qualifications li::before {
                    content: "✓ ";
                    color: #B60D0D;
                }

                @media (max-width: 768px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
