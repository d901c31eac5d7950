use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::nav::SECTIONS;
use crate::config;
use crate::i18n::context::use_language;
use crate::pricing::whatsapp::whatsapp_link;

#[function_component(Footer)]
pub fn footer() -> Html {
    let language = use_language();
    let year = Local::now().year();
    let general_link = whatsapp_link(config::WHATSAPP_NUMBER, &language.t("whatsapp.general"));

    html! {
        <footer id="footer" class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{ config::SITE_TITLE }</h3>
                    <p>{ language.t("footer.tagline") }</p>
                </div>

                <div class="footer-column">
                    <h4>{ language.t("footer.quicklinks") }</h4>
                    <ul>
                        { for SECTIONS.iter().filter(|(id, _)| *id != "footer").map(|(id, label)| html! {
                            <li><a href={format!("#{}", id)}>{ language.t(label) }</a></li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{ language.t("footer.legal") }</h4>
                    <ul>
                        <li><a href="#footer">{ language.t("footer.privacy") }</a></li>
                        <li><a href="#footer">{ language.t("footer.terms") }</a></li>
                        <li><a href="#footer">{ language.t("footer.cookies") }</a></li>
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{ language.t("footer.connect") }</h4>
                    <ul class="social-links">
                        <li><a href={general_link} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a></li>
                        <li><a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a></li>
                        <li><a href={config::TIKTOK_URL} target="_blank" rel="noopener noreferrer">{"TikTok"}</a></li>
                        <li><a href={config::YOUTUBE_URL} target="_blank" rel="noopener noreferrer">{"YouTube"}</a></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                { format!("© {} {}. {}", year, config::SITE_TITLE, language.t("footer.rights")) }
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #050505;
                    border-top: 1px solid rgba(182, 13, 13, 0.3);
                    padding: 4rem 1.5rem 2rem;
                }

                .footer-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 2rem;
                }

                .footer-brand p {
                    color: #999;
                }

                .footer-column ul {
                    list-style: none;
                    padding: 0;
                }

                .footer-column li {
                    margin-bottom: 0.5rem;
                }

                .footer-column a {
                    color: #bbb;
                    text-decoration: none;
                }

                .footer-column a:hover {
                    color: #B60D0D;
                }

                .footer-bottom {
                    text-align: center;
                    color: #666;
                    margin-top: 3rem;
                    font-size: 0.9rem;
                }

                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
