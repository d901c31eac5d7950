use yew::prelude::*;
use web_sys::window;
use gloo_timers::callback::Timeout;
use log::{info, warn};

use crate::config;
use super::dictionary::{translate, Language};

const STORAGE_KEY: &str = "language";

/// What every component reads to render text in the active language.
#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub is_changing: bool,
    pub set_language: Callback<Language>,
}

impl Default for LanguageContext {
    fn default() -> Self {
        LanguageContext {
            language: Language::default(),
            is_changing: false,
            set_language: Callback::noop(),
        }
    }
}

impl LanguageContext {
    pub fn t(&self, key: &str) -> String {
        translate(self.language, key).to_string()
    }

    pub fn dir(&self) -> &'static str {
        self.language.dir()
    }

    pub fn toggle(&self) {
        self.set_language.emit(self.language.toggled());
    }
}

/// Outside a provider this yields the default (Arabic) context.
#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_default()
}

/// The language to switch to, or `None` when the request changes nothing.
pub fn next_language(current: Language, requested: Language, is_changing: bool) -> Option<Language> {
    if requested == current || is_changing {
        None
    } else {
        Some(requested)
    }
}

fn load_saved_language() -> Language {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok())
        .flatten()
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

fn save_language(language: Language) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
        if storage.set_item(STORAGE_KEY, language.code()).is_err() {
            warn!("Could not persist language {}", language.code());
        }
    }
}

fn apply_document_language(language: Language) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("dir", language.dir());
        let _ = root.set_attribute("lang", language.code());
    }
    if let Some(body) = document.body() {
        let classes = body.class_list();
        let _ = classes.toggle_with_force("rtl", language.is_rtl());
        let _ = classes.toggle_with_force("ltr", !language.is_rtl());
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let language = use_state(load_saved_language);
    let switching_to = use_state(|| None::<Language>);

    {
        use_effect_with_deps(
            move |language: &Language| {
                apply_document_language(*language);
                || ()
            },
            *language,
        );
    }

    let set_language = {
        let language = language.clone();
        let switching_to = switching_to.clone();
        Callback::from(move |requested: Language| {
            let Some(next) = next_language(*language, requested, switching_to.is_some()) else {
                return;
            };
            info!("Switching language to {}", next.code());
            let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            switching_to.set(Some(next));

            let language = language.clone();
            let switching_to = switching_to.clone();
            Timeout::new(config::LANGUAGE_SWAP_DELAY_MS, move || {
                language.set(next);
                save_language(next);
                Timeout::new(config::LANGUAGE_SETTLE_DELAY_MS, move || {
                    if let Some(window) = window() {
                        window.scroll_to_with_x_and_y(0.0, scroll_y);
                    }
                    switching_to.set(None);
                })
                .forget();
            })
            .forget();
        })
    };

    let context = LanguageContext {
        language: *language,
        is_changing: switching_to.is_some(),
        set_language,
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            { for props.children.iter() }
            {
                if let Some(target) = *switching_to {
                    html! {
                        <div class="language-overlay">
                            <div class="language-overlay-content">
                                <div class="spinner"></div>
                                <div class="language-overlay-message" dir={target.dir()}>
                                    { translate(target, "language.changing") }
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .language-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(4px);
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .language-overlay-content {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }

                .language-overlay-message {
                    font-size: 1.5rem;
                    color: #fff;
                }

                .spinner {
                    width: 48px;
                    height: 48px;
                    border: 4px solid #B60D0D;
                    border-top-color: transparent;
                    border-radius: 50%;
                    animation: spin 0.8s linear infinite;
                }

                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </ContextProvider<LanguageContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_to_the_active_language_is_a_no_op() {
        assert_eq!(next_language(Language::Ar, Language::Ar, false), None);
        assert_eq!(next_language(Language::En, Language::En, false), None);
    }

    #[test]
    fn switching_is_ignored_while_a_switch_is_running() {
        assert_eq!(next_language(Language::Ar, Language::En, true), None);
    }

    #[test]
    fn switching_to_the_other_language_goes_through() {
        assert_eq!(next_language(Language::Ar, Language::En, false), Some(Language::En));
        assert_eq!(next_language(Language::En, Language::Ar, false), Some(Language::Ar));
    }

    #[test]
    fn default_context_is_arabic_and_translates() {
        let context = LanguageContext::default();
        assert_eq!(context.language, Language::Ar);
        assert_eq!(context.dir(), "rtl");
        assert_eq!(context.t("nav.home"), "الرئيسية");
        assert_eq!(context.t("missing.key"), "missing.key");
    }

    #[test]
    fn double_toggle_through_context_restores_text() {
        let ar = LanguageContext::default();
        let en = LanguageContext { language: ar.language.toggled(), ..ar.clone() };
        let back = LanguageContext { language: en.language.toggled(), ..en.clone() };
        assert_eq!(en.dir(), "ltr");
        assert_eq!(back.dir(), ar.dir());
        assert_eq!(back.t("packages.title"), ar.t("packages.title"));
    }
}
