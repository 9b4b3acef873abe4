use yew::prelude::*;

use crate::content::model::CtaContent;
use crate::enquiry::modal::use_enquiry_launcher;
use crate::sections::common::GradientButton;

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub content: CtaContent,
}

#[function_component(CtaBanner)]
pub fn cta_banner(props: &CtaProps) -> Html {
    let open_enquiry = use_enquiry_launcher();
    let content = &props.content;

    html! {
        <section class="cta-banner">
            <div class="cta-glow"></div>
            <div class="cta-inner">
                <h2>{content.title}{" "}<span class="accent">{content.highlight}</span></h2>
                <p>{content.text}</p>
                <GradientButton onclick={open_enquiry}>{content.button}{" →"}</GradientButton>
            </div>
            <style>{r#"
                .cta-banner {
                    position: relative;
                    overflow: hidden;
                    background: linear-gradient(135deg, #1a0e28 0%, #0A0A0A 100%);
                    padding: 8rem 1.5rem;
                    text-align: center;
                    color: #fff;
                }
                .cta-glow {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 40rem;
                    height: 40rem;
                    transform: translate(-50%, -50%);
                    background: radial-gradient(circle, rgba(155, 89, 182, 0.25), transparent 70%);
                }
                .cta-inner {
                    position: relative;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .cta-inner h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(2rem, 5vw, 3.75rem);
                    font-weight: 500;
                    margin: 0 0 1.5rem;
                }
                .cta-inner p {
                    color: rgba(255, 255, 255, 0.55);
                    line-height: 1.8;
                    margin-bottom: 2.5rem;
                }
            "#}</style>
        </section>
    }
}
