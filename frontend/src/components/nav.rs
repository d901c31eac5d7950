use yew::prelude::*;
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config;
use crate::i18n::context::use_language;
use super::scroll_spy::use_scroll_spy;

/// Page sections in order, with the nav label for each.
pub const SECTIONS: [(&str, &str); 8] = [
    ("home", "nav.home"),
    ("about", "nav.about"),
    ("services", "nav.services"),
    ("transformations", "nav.transformations"),
    ("feedback", "nav.feedback"),
    ("packages", "nav.packages"),
    ("faq", "nav.faq"),
    ("footer", "nav.contact"),
];

pub const SECTION_IDS: [&str; 8] = [
    "home", "about", "services", "transformations", "feedback", "packages", "faq", "footer",
];

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let language = use_language();
    let active = use_scroll_spy(&SECTION_IDS);
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_y > config::NAV_SCROLLED_THRESHOLD);
                });
                let window = window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let toggle_language = {
        let language = language.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            language.toggle();
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))} dir={language.dir()}>
            <a href="#main" class="skip-link">{ language.t("nav.skip") }</a>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={close_menu.clone()}>
                    { config::SITE_TITLE }
                </a>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label={language.t("nav.menu")}
                    aria-expanded={(*menu_open).to_string()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    {
                        SECTIONS.iter().map(|(id, label)| {
                            html! {
                                <a
                                    href={format!("#{}", id)}
                                    class={classes!("nav-link", (active == *id).then(|| "active"))}
                                    onclick={close_menu.clone()}
                                >
                                    { language.t(label) }
                                </a>
                            }
                        }).collect::<Html>()
                    }
                    <button class="language-toggle" onclick={toggle_language} disabled={language.is_changing}>
                        { language.t("nav.language") }
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(10, 10, 10, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.5);
                }

                .skip-link {
                    position: absolute;
                    left: -9999px;
                }

                .skip-link:focus {
                    left: 1rem;
                    top: 1rem;
                    background: #B60D0D;
                    padding: 0.5rem 1rem;
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-weight: 700;
                    font-size: 1.25rem;
                    text-decoration: none;
                    letter-spacing: 0.05em;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.25rem;
                }

                .nav-link {
                    text-decoration: none;
                    color: #bbb;
                    transition: color 0.2s ease;
                }

                .nav-link:hover,
                .nav-link.active {
                    color: #B60D0D;
                }

                .language-toggle {
                    background: #B60D0D;
                    color: #fff;
                    border: none;
                    border-radius: 6px;
                    padding: 0.4rem 0.9rem;
                    cursor: pointer;
                }

                .language-toggle:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }

                @media (max-width: 900px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: rgba(10, 10, 10, 0.98);
                        padding: 1.5rem;
                    }

                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::dictionary::{has_key, Language};

    #[test]
    fn section_ids_match_the_labelled_sections() {
        let ids: Vec<&str> = SECTIONS.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, SECTION_IDS.to_vec());
    }

    #[test]
    fn every_nav_label_is_translated() {
        for language in Language::ALL {
            for (_, label) in SECTIONS {
                assert!(has_key(language, label), "{} missing for {:?}", label, language);
            }
        }
    }
}
