use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::model::ContactContent;
use crate::enquiry::modal::use_enquiry_launcher;
use crate::sections::common::GradientButton;

pub const PHONE_DISPLAY: &str = "+971 507 751 293";
pub const PHONE_LINK: &str = "tel:+971507751293";

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub content: ContactContent,
}

#[function_component(ContactDetails)]
pub fn contact_details(props: &ContactProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let open_enquiry = use_enquiry_launcher();
    let content = &props.content;

    html! {
        <section class="contact-section">
            <div class="contact-inner">
                <div class="contact-intro">
                    <h2>{"Send Us a "}<span class="accent">{"Message"}</span></h2>
                    <p>{content.intro}</p>
                    <GradientButton onclick={open_enquiry}>{"START AN ENQUIRY →"}</GradientButton>
                </div>
                <div class="contact-cards">
                    <div class="contact-card">
                        <span class="contact-label">{"Email"}</span>
                        <a href={config.mailto_link("Website enquiry")}>{config.contact_email.clone()}</a>
                    </div>
                    <div class="contact-card">
                        <span class="contact-label">{"Phone"}</span>
                        <a href={PHONE_LINK}>{PHONE_DISPLAY}</a>
                    </div>
                    <div class="contact-card">
                        <span class="contact-label">{"Office"}</span>
                        <span>{content.office}</span>
                    </div>
                    <div class="contact-card">
                        <span class="contact-label">{"Prefer to talk?"}</span>
                        <a href={config.calendar_url.clone()} target="_blank" rel="noopener noreferrer">
                            {"Book a free strategy call"}
                        </a>
                    </div>
                </div>
            </div>
            <style>{r#"
                .contact-section {
                    background: #fff;
                    padding: 7rem 1.5rem;
                }
                .contact-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: start;
                }
                @media (max-width: 768px) {
                    .contact-inner {
                        grid-template-columns: 1fr;
                    }
                }
                .contact-intro h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(2rem, 4vw, 3rem);
                    font-weight: 500;
                    margin: 0 0 1.5rem;
                }
                .contact-intro p {
                    color: rgba(10, 10, 10, 0.55);
                    line-height: 1.8;
                    margin-bottom: 2rem;
                }
                .contact-cards {
                    display: grid;
                    gap: 1rem;
                }
                .contact-card {
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                    padding: 1.5rem;
                    border-radius: 16px;
                    background: #F5F0FA;
                }
                .contact-label {
                    font-size: 0.7rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #9B59B6;
                }
                .contact-card a {
                    color: rgba(10, 10, 10, 0.7);
                    text-decoration: none;
                }
                .contact-card a:hover {
                    color: #9B59B6;
                    text-decoration: underline;
                }
            "#}</style>
        </section>
    }
}
