use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::context::use_language;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let language = use_language();

    html! {
        <div class="not-found" dir={language.dir()}>
            <h1>{ language.t("notfound.title") }</h1>
            <h2>{ language.t("notfound.subtitle") }</h2>
            <p>{ language.t("notfound.description") }</p>
            <Link<Route> to={Route::Home} classes="hero-cta primary">
                { language.t("notfound.backhome") }
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 2rem;
                }

                .not-found h1 {
                    font-size: 6rem;
                    color: #B60D0D;
                    margin: 0;
                }

                .not-found p {
                    color: #999;
                    margin-bottom: 2rem;
                }

                .not-found .hero-cta {
                    padding: 0.9rem 2rem;
                    border-radius: 8px;
                    background: #B60D0D;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
