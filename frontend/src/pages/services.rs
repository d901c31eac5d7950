use yew::prelude::*;

use crate::i18n::context::use_language;

struct Service {
    key: &'static str,
    icon: &'static str,
    features: usize,
}

const SERVICES: [Service; 3] = [
    Service { key: "workout", icon: "🏋️", features: 3 },
    Service { key: "diet", icon: "🥗", features: 3 },
    Service { key: "tools", icon: "📈", features: 4 },
];

#[function_component(Services)]
pub fn services() -> Html {
    let language = use_language();

    html! {
        <section id="services" class="services">
            <h2 class="section-title">{ language.t("services.title") }</h2>
            <p class="section-subtitle">{ language.t("services.subtitle") }</p>
            <div class="services-grid">
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-card">
                        <div class="service-icon">{ service.icon }</div>
                        <h3>{ language.t(&format!("services.{}.title", service.key)) }</h3>
                        <p>{ language.t(&format!("services.{}.description", service.key)) }</p>
                        <ul>
                            { for (1..=service.features).map(|n| html! {
                                <li>{ language.t(&format!("services.{}.feature.{}", service.key, n)) }</li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
            <div class="services-cta">
                <p>{ language.t("services.cta.looking") }</p>
                <a href="#packages" class="hero-cta primary">{ language.t("services.cta.view") }</a>
            </div>
            <style>
                {r#"
                .services {
                    padding: 6rem 1.5rem;
                    text-align: center;
                }

                .section-subtitle {
                    color: #999;
                    margin-bottom: 3rem;
                }

                .services-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }

                .service-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(182, 13, 13, 0.2);
                    border-radius: 12px;
                    padding: 2rem;
                    text-align: start;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }

                .service-card:hover {
                    transform: translateY(-4px);
                    border-color: #B60D0D;
                }

                .service-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }

                .service-card p {
                    color: #bbb;
                }

                .service-card ul {
                    padding-inline-start: 1.2rem;
                    color: #ddd;
                }

                .services-cta {
                    margin-top: 3rem;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::dictionary::{has_key, Language};

    #[test]
    fn every_service_card_key_exists() {
        for language in Language::ALL {
            for service in SERVICES.iter() {
                assert!(has_key(language, &format!("services.{}.title", service.key)));
                assert!(has_key(language, &format!("services.{}.description", service.key)));
                for n in 1..=service.features {
                    assert!(has_key(language, &format!("services.{}.feature.{}", service.key, n)));
                }
            }
        }
    }
}
