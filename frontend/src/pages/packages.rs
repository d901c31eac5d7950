use yew::prelude::*;
use web_sys::HtmlSelectElement;
use wasm_bindgen_futures::spawn_local;
use log::info;

use crate::config;
use crate::i18n::context::use_language;
use crate::pricing::currency::PriceContext;
use crate::pricing::location::{resolve_pricing, RequestGeneration};
use crate::pricing::packages::{PackageKind, TierKind, DEFAULT_PACKAGE, FEATURE_KEYS};
use crate::pricing::whatsapp::{package_message, whatsapp_link};

#[function_component(Packages)]
pub fn packages() -> Html {
    let language = use_language();
    let pricing = use_state(PriceContext::loading);
    let selected = use_state(|| DEFAULT_PACKAGE);
    let generation = use_state(RequestGeneration::default);

    {
        let pricing = pricing.clone();
        let generation = (*generation).clone();
        use_effect_with_deps(
            move |_| {
                let ticket = generation.begin();
                let guard = generation.clone();
                spawn_local(async move {
                    let resolved = resolve_pricing().await;
                    if guard.is_current(ticket) {
                        pricing.set(resolved);
                    } else {
                        info!("Dropping pricing result from a stale request");
                    }
                });
                move || generation.invalidate()
            },
            (),
        );
    }

    let on_package_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select = e.target_unchecked_into::<HtmlSelectElement>();
            if let Some(kind) = PackageKind::from_key(&select.value()) {
                selected.set(kind);
            }
        })
    };

    let package = *selected;
    let t = |key: &str| language.t(key);
    let package_title = t(&package.title_key());

    html! {
        <section id="packages" class="packages">
            <h2 class="section-title">{ t("packages.title") }</h2>
            <p class="section-subtitle">{ t("packages.subtitle") }</p>

            <div class="package-selector">
                <label for="package-duration">{ t("packages.duration") }</label>
                <select id="package-duration" onchange={on_package_change}>
                    { for PackageKind::ALL.iter().map(|kind| html! {
                        <option value={kind.key()} selected={*kind == package}>
                            { format!("{} ({})", t(&kind.title_key()), t(&kind.duration_key())) }
                        </option>
                    }) }
                </select>
            </div>

            <div class={classes!("package-card", package.is_highlighted().then(|| "highlighted"))}>
                if package.is_highlighted() {
                    <span class="popular-badge">{ t("packages.popular") }</span>
                }
                <h3>{ package_title.clone() }</h3>
                <p class="package-duration">{ t(&package.duration_key()) }</p>
                <p class="package-suitable">{ t(&package.suitable_for_key()) }</p>

                <h4>{ t("packages.features") }</h4>
                <ul class="package-features">
                    { for FEATURE_KEYS.iter().copied().map(|key| html! { <li>{ t(key) }</li> }) }
                </ul>

                <h4>{ t("packages.tier") }</h4>
                <div class="tier-grid">
                    { for TierKind::ALL.iter().map(|tier| {
                        let price = pricing.format_price(package, *tier, t);
                        let tier_name = t(tier.name_key());
                        let message = package_message(&t("whatsapp.package"), &package_title, &tier_name, &price);
                        let link = whatsapp_link(config::WHATSAPP_NUMBER, &message);
                        html! {
                            <div class={classes!("tier-card", tier.key())}>
                                <div class="tier-header">
                                    <span class="tier-icon">{ tier.icon() }</span>
                                    <span class="tier-name">{ tier_name.clone() }</span>
                                    <span class="discount-badge">{ t("packages.discount") }</span>
                                </div>
                                <div class="tier-price">
                                    <span class="price-current">{ price.to_string() }</span>
                                    {
                                        if let Some(original) = price.original_price() {
                                            html! { <span class="price-original">{ format!("{} {}", original, price.currency) }</span> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                                <ul class="tier-benefits">
                                    { for tier.benefit_keys().iter().copied().map(|key| html! { <li>{ t(key) }</li> }) }
                                </ul>
                                <a class="tier-cta" href={link} target="_blank" rel="noopener noreferrer">
                                    { format!("{} ({})", t(tier.cta_key()), price) }
                                </a>
                            </div>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .packages {
                    padding: 6rem 1.5rem;
                    text-align: center;
                }

                .package-selector {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }

                .package-selector select {
                    background: #1a1a1a;
                    color: #fff;
                    border: 1px solid #B60D0D;
                    border-radius: 6px;
                    padding: 0.5rem 1rem;
                }

                .package-card {
                    position: relative;
                    max-width: 900px;
                    margin: 0 auto;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(182, 13, 13, 0.2);
                    border-radius: 12px;
                    padding: 2.5rem 2rem;
                }

                .package-card.highlighted {
                    border-color: #B60D0D;
                    box-shadow: 0 0 30px rgba(182, 13, 13, 0.25);
                }

                .popular-badge {
                    position: absolute;
                    top: -0.9rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #B60D0D;
                    padding: 0.3rem 1rem;
                    border-radius: 999px;
                    font-size: 0.85rem;
                }

                .package-duration,
                .package-suitable {
                    color: #bbb;
                }

                .package-features {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 0.5rem;
                    list-style: none;
                    padding: 0;
                    text-align: start;
                }

                .package-features li::before {
                    content: "✓ ";
                    color: #B60D0D;
                }

                .tier-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                    margin-top: 1rem;
                }

                .tier-card {
                    background: #141414;
                    border-radius: 10px;
                    padding: 1.5rem;
                }

                .tier-card.gold {
                    border: 1px solid #d4af37;
                }

                .tier-card.silver {
                    border: 1px solid #c0c0c0;
                }

                .tier-header {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                }

                .discount-badge {
                    background: rgba(182, 13, 13, 0.2);
                    color: #ff6b6b;
                    border-radius: 4px;
                    padding: 0.1rem 0.5rem;
                    font-size: 0.8rem;
                }

                .tier-price {
                    margin: 1rem 0;
                }

                .price-current {
                    font-size: 2rem;
                    font-weight: 700;
                }

                .price-original {
                    display: block;
                    color: #777;
                    text-decoration: line-through;
                }

                .tier-benefits {
                    list-style: none;
                    padding: 0;
                    color: #ccc;
                }

                .tier-cta {
                    display: inline-block;
                    margin-top: 1rem;
                    background: #25D366;
                    color: #fff;
                    padding: 0.75rem 1.25rem;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 600;
                }
                "#}
            </style>
        </section>
    }
}
