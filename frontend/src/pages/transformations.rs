use yew::prelude::*;

use crate::components::safe_image::SafeImage;
use crate::i18n::context::use_language;

const CLIENTS: [u8; 2] = [1, 2];

/// Before/after photo path for one client, view (`front`/`back`) and phase
/// (`before`/`after`).
pub fn transformation_image(client: u8, view: &str, phase: &str) -> String {
    format!("/assets/transformations/client_{}_{}_{}.jpg", client, view, phase)
}

#[derive(Properties, PartialEq)]
struct ComparisonProps {
    client: u8,
    view: &'static str,
}

#[function_component(Comparison)]
fn comparison(props: &ComparisonProps) -> Html {
    let language = use_language();
    let view_label = language.t(&format!("transformations.{}", props.view));

    html! {
        <div class="comparison">
            <span class="comparison-view">{ view_label.clone() }</span>
            <div class="comparison-pair">
                { for ["before", "after"].iter().map(|phase| html! {
                    <figure>
                        <SafeImage
                            src={transformation_image(props.client, props.view, phase)}
                            alt={format!("{} {}", view_label, language.t(&format!("transformations.{}", phase)))}
                            class={classes!("comparison-image")}
                        />
                        <figcaption>{ language.t(&format!("transformations.{}", phase)) }</figcaption>
                    </figure>
                }) }
            </div>
        </div>
    }
}

#[function_component(Transformations)]
pub fn transformations() -> Html {
    let language = use_language();

    html! {
        <section id="transformations" class="transformations">
            <h2 class="section-title">{ language.t("transformations.title") }</h2>
            <p class="section-subtitle">{ language.t("transformations.subtitle") }</p>
            { for CLIENTS.iter().map(|client| {
                let key = |field: &str| language.t(&format!("transformations.client.{}.{}", client, field));
                html! {
                    <article class="transformation-card">
                        <header>
                            <h3>{ key("name") }</h3>
                            <span class="client-role">{ key("role") }</span>
                        </header>
                        <div class="transformation-meta">
                            <span>{ format!("{}: {}", language.t("transformations.duration"), key("duration")) }</span>
                            <span class="achievement">{ key("achievement") }</span>
                        </div>
                        <Comparison client={*client} view="front" />
                        <Comparison client={*client} view="back" />
                        <p class="client-story">{ key("story") }</p>
                    </article>
                }
            }) }
            <style>
                {r#"
                .transformations {
                    padding: 6rem 1.5rem;
                    text-align: center;
                }

                .transformation-card {
                    max-width: 900px;
                    margin: 0 auto 3rem;
                    background: rgba(30, 30, 30, 0.7);
                    border-radius: 12px;
                    padding: 2rem;
                }

                .client-role {
                    color: #999;
                }

                .transformation-meta {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin: 1rem 0;
                }

                .achievement {
                    color: #B60D0D;
                    font-weight: 600;
                }

                .comparison {
                    margin: 1.5rem 0;
                }

                .comparison-view {
                    display: block;
                    margin-bottom: 0.5rem;
                    color: #bbb;
                }

                .comparison-pair {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .comparison-pair figure {
                    margin: 0;
                }

                .comparison-image img,
                .image-placeholder {
                    width: 100%;
                    aspect-ratio: 3 / 4;
                    object-fit: cover;
                    border-radius: 8px;
                }

                .client-story {
                    color: #ccc;
                    line-height: 1.8;
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
    fn image_paths_follow_the_asset_layout() {
        assert_eq!(
            transformation_image(2, "back", "after"),
            "/assets/transformations/client_2_back_after.jpg"
        );
    }

    #[test]
    fn every_client_field_is_translated() {
        for language in Language::ALL {
            for client in CLIENTS {
                for field in ["name", "role", "duration", "achievement", "story"] {
                    let key = format!("transformations.client.{}.{}", client, field);
                    assert!(has_key(language, &key), "{} missing", key);
                }
            }
        }
    }
}
