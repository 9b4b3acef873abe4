use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::model::HeroContent;
use crate::enquiry::modal::use_enquiry_launcher;
use crate::layout::viewport::use_lite_animations;
use crate::sections::common::GradientButton;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: HeroContent,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let content = &props.content;
    let lite = use_lite_animations();
    let open_enquiry = use_enquiry_launcher();
    let navigator = use_navigator();

    let explore = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Services);
        }
    });

    html! {
        <section class={classes!("hero", lite.then(|| "lite"), content.with_cta.then(|| "full"))}>
            <div class="hero-background" style={format!("background-image: url('{}');", content.background)}></div>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <span class="hero-eyebrow">{content.eyebrow}</span>
                <h1>
                    <span class="hero-line">{content.title}</span>
                    {" "}
                    <span class="hero-line accent">{content.highlight}</span>
                </h1>
                <p class="hero-subtitle">{content.subtitle}</p>
                if content.with_cta {
                    <div class="hero-actions">
                        <GradientButton onclick={open_enquiry}>{"START A PROJECT →"}</GradientButton>
                        <GradientButton outline=true onclick={explore}>{"EXPLORE SERVICES"}</GradientButton>
                    </div>
                }
                if !content.highlights.is_empty() {
                    <div class="hero-highlights">
                        { for content.highlights.iter().map(|h| html! {
                            <div class="hero-highlight" key={h.label}>
                                <span class="hero-highlight-value">{h.value}</span>
                                <span class="hero-highlight-label">{h.label}</span>
                            </div>
                        }) }
                    </div>
                }
            </div>
            <style>{r#"
                .hero {
                    position: relative;
                    min-height: 70vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: #0A0A0A;
                    color: #fff;
                    text-align: center;
                }
                .hero.full {
                    min-height: 100vh;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    transform: scale(1.05);
                    animation: heroZoom 20s ease-out forwards;
                }
                .hero.lite .hero-background {
                    animation: none;
                    transform: none;
                }
                @keyframes heroZoom {
                    to { transform: scale(1); }
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(180deg, rgba(10,10,10,0.6) 0%, rgba(26,14,40,0.75) 60%, #0A0A0A 100%);
                }
                .hero-content {
                    position: relative;
                    max-width: 64rem;
                    padding: 8rem 1.5rem 4rem;
                    animation: heroRise 1s cubic-bezier(0.22, 1, 0.36, 1) both;
                }
                .hero.lite .hero-content {
                    animation-duration: 0.5s;
                }
                @keyframes heroRise {
                    from { opacity: 0; transform: translateY(40px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .hero-eyebrow {
                    color: #F1C40F;
                    letter-spacing: 0.35em;
                    font-size: 0.7rem;
                }
                .hero h1 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(2.5rem, 7vw, 5.5rem);
                    font-weight: 500;
                    line-height: 1.1;
                    margin: 1.5rem 0;
                }
                .hero-subtitle {
                    color: rgba(255, 255, 255, 0.6);
                    max-width: 40rem;
                    margin: 0 auto 2.5rem;
                    line-height: 1.8;
                    font-weight: 300;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .hero-highlights {
                    display: flex;
                    justify-content: center;
                    gap: 3rem;
                    margin-top: 4rem;
                    flex-wrap: wrap;
                }
                .hero-highlight {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }
                .hero-highlight-value {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.75rem;
                    color: #F1C40F;
                }
                .hero-highlight-label {
                    font-size: 0.7rem;
                    letter-spacing: 0.15em;
                    color: rgba(255, 255, 255, 0.5);
                    text-transform: uppercase;
                }
            "#}</style>
        </section>
    }
}
