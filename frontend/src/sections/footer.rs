use chrono::{Datelike, Local};
use log::info;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::legal_modal::LegalModal;
use crate::config::SiteConfig;
use crate::content::legal::{PRIVACY_POLICY, TERMS_OF_SERVICE};
use crate::enquiry::modal::use_enquiry_launcher;
use crate::sections::common::GradientButton;
use crate::sections::contact::{PHONE_DISPLAY, PHONE_LINK};
use crate::Route;

const QUICK_LINKS: &[(&str, Route)] = &[
    ("Home", Route::Home),
    ("About Us", Route::About),
    ("Services", Route::Services),
    ("Industries", Route::Industries),
    ("Portfolio", Route::Portfolio),
    ("Contact Us", Route::Contact),
];

const SERVICE_LINKS: &[&str] = &[
    "Software Development",
    "Digital Marketing",
    "Social Media Management",
    "Web Design & Development",
    "Photography & Videography",
];

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("WhatsApp", "https://wa.me/971507751293"),
    ("Instagram", "https://www.instagram.com/elverasolutionsllc/"),
    ("LinkedIn", "https://www.linkedin.com/company/111757888/"),
];

#[derive(Clone, Copy, PartialEq)]
enum OpenDocument {
    Privacy,
    Terms,
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let open_enquiry = use_enquiry_launcher();
    let open_document = use_state(|| None::<OpenDocument>);
    let year = Local::now().year();

    let show = |which: OpenDocument| {
        let open_document = open_document.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Opening legal document");
            open_document.set(Some(which));
        })
    };
    let close_document = {
        let open_document = open_document.clone();
        Callback::from(move |_: ()| open_document.set(None))
    };
    let back_to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    html! {
        <footer class="site-footer">
            <section class="footer-cta">
                <span class="eyebrow">{"READY TO GROW?"}</span>
                <h2>{"Ready to Elevate "}<span class="accent">{"Your Brand?"}</span></h2>
                <p>{"Let's turn your vision into reality. Get in touch with our team today."}</p>
                <div class="footer-contact-cards">
                    <a href={config.mailto_link("Project enquiry")}>{config.contact_email.clone()}</a>
                    <a href={PHONE_LINK}>{PHONE_DISPLAY}</a>
                </div>
                <GradientButton onclick={open_enquiry}>{"START YOUR PROJECT →"}</GradientButton>
            </section>

            <div class="footer-columns">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="footer-logo">{"ELVERA"}</Link<Route>>
                    <p>{"Elevating brands in the digital era."}<br />{"UAE Licensed | Globally Trusted"}<br />{"License No: 2644692.01"}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for QUICK_LINKS.iter().map(|(label, route)| html! {
                            <li key={*label}>
                                <Link<Route> to={route.clone()} classes="footer-link">{*label}</Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        { for SERVICE_LINKS.iter().map(|label| html! {
                            <li key={*label}>
                                <Link<Route> to={Route::Services} classes="footer-link">{*label}</Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li>{"Sharjah Media City Free Zone, UAE"}</li>
                        <li><a class="footer-link" href={config.mailto_link("Website enquiry")}>{config.contact_email.clone()}</a></li>
                        <li><a class="footer-link" href={PHONE_LINK}>{PHONE_DISPLAY}</a></li>
                    </ul>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                            <a key={*label} href={*href} target="_blank" rel="noopener noreferrer">{*label}</a>
                        }) }
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} Elvera Solutions LLC. All rights reserved.", year)}</p>
                <div class="footer-legal">
                    <a href="#" onclick={show(OpenDocument::Privacy)}>{"Privacy Policy"}</a>
                    <a href="#" onclick={show(OpenDocument::Terms)}>{"Terms of Service"}</a>
                    <a href="#" onclick={back_to_top}>{"Back to top ↑"}</a>
                </div>
            </div>

            <LegalModal
                document={PRIVACY_POLICY}
                open={*open_document == Some(OpenDocument::Privacy)}
                on_close={close_document.clone()}
            />
            <LegalModal
                document={TERMS_OF_SERVICE}
                open={*open_document == Some(OpenDocument::Terms)}
                on_close={close_document.clone()}
            />

            <style>{r#"
                .site-footer {
                    background: #0A0A0A;
                    color: rgba(255, 255, 255, 0.6);
                }
                .footer-cta {
                    background: #fff;
                    padding: 7rem 1.5rem;
                    text-align: center;
                }
                .footer-cta h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(2rem, 5vw, 3.5rem);
                    font-weight: 500;
                    color: #0A0A0A;
                    margin: 0 0 1.5rem;
                }
                .footer-cta p {
                    color: rgba(10, 10, 10, 0.5);
                    max-width: 36rem;
                    margin: 0 auto 2.5rem;
                    line-height: 1.8;
                }
                .footer-contact-cards {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-bottom: 2.5rem;
                }
                .footer-contact-cards a {
                    padding: 1rem 1.5rem;
                    border-radius: 16px;
                    background: #F4ECF7;
                    color: #0A0A0A;
                    text-decoration: none;
                    font-size: 0.85rem;
                    transition: background 0.3s, color 0.3s;
                }
                .footer-contact-cards a:hover {
                    background: #9B59B6;
                    color: #fff;
                }
                .footer-columns {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 5rem 1.5rem 3rem;
                    display: grid;
                    grid-template-columns: 1.5fr 1fr 1fr 1.2fr;
                    gap: 3rem;
                }
                @media (max-width: 768px) {
                    .footer-columns {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                .footer-logo {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.5rem;
                    letter-spacing: 0.2em;
                    color: #fff;
                    text-decoration: none;
                }
                .footer-brand p {
                    font-size: 0.8rem;
                    line-height: 1.9;
                }
                .site-footer h4 {
                    color: #F1C40F;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    font-size: 0.85rem;
                }
                .footer-link,
                .footer-legal a,
                .footer-social a {
                    color: rgba(255, 255, 255, 0.5);
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .footer-link:hover,
                .footer-legal a:hover,
                .footer-social a:hover {
                    color: #fff;
                }
                .footer-social {
                    display: flex;
                    gap: 1rem;
                    font-size: 0.8rem;
                }
                .footer-bottom {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 2rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.75rem;
                }
                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                }
            "#}</style>
        </footer>
    }
}
