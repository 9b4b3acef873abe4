//! Card grids: why choose us, industries and testimonials.

use yew::prelude::*;

use crate::content::model::{Heading, Industry, Pillar, Testimonial};
use crate::sections::common::SectionHeading;

#[derive(Properties, PartialEq)]
pub struct WhyChooseUsProps {
    pub heading: Heading,
    pub pillars: &'static [Pillar],
}

#[function_component(WhyChooseUs)]
pub fn why_choose_us(props: &WhyChooseUsProps) -> Html {
    html! {
        <section class="why-section">
            <SectionHeading heading={props.heading.clone()} />
            <div class="card-grid">
                { for props.pillars.iter().enumerate().map(|(i, pillar)| html! {
                    <div class="why-card" key={pillar.title}>
                        <span class="why-number">{format!("{:02}", i + 1)}</span>
                        <h3>{pillar.title}</h3>
                        <p>{pillar.text}</p>
                    </div>
                }) }
            </div>
            <style>{CARD_STYLES}</style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct IndustriesProps {
    pub heading: Heading,
    pub industries: &'static [Industry],
}

#[function_component(IndustriesOverview)]
pub fn industries_overview(props: &IndustriesProps) -> Html {
    html! {
        <section class="industries-section">
            <SectionHeading heading={props.heading.clone()} dark=true />
            <div class="card-grid">
                { for props.industries.iter().map(|industry| html! {
                    <div class="industry-card" key={industry.name}>
                        <h3>{industry.name}</h3>
                        <p>{industry.desc}</p>
                    </div>
                }) }
            </div>
            <style>{CARD_STYLES}</style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub heading: Heading,
    pub testimonials: &'static [Testimonial],
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section(props: &TestimonialsProps) -> Html {
    html! {
        <section class="testimonials-section">
            <SectionHeading heading={props.heading.clone()} />
            <div class="card-grid">
                { for props.testimonials.iter().map(|t| html! {
                    <figure class="testimonial-card" key={t.role}>
                        <span class="testimonial-mark">{"“"}</span>
                        <blockquote>{t.quote}</blockquote>
                        <figcaption>{t.role}</figcaption>
                    </figure>
                }) }
            </div>
            <style>{CARD_STYLES}</style>
        </section>
    }
}

const CARD_STYLES: &str = r#"
.why-section,
.testimonials-section {
    background: #F5F0FA;
    padding: 7rem 1.5rem;
}
.industries-section {
    background: linear-gradient(160deg, #1a0e28 0%, #0A0A0A 100%);
    padding: 7rem 1.5rem;
}
.card-grid {
    max-width: 72rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.5rem;
}
.why-card,
.testimonial-card {
    margin: 0;
    background: #fff;
    border-radius: 20px;
    padding: 2rem;
    transition: transform 0.3s, box-shadow 0.3s;
}
.why-card:hover,
.testimonial-card:hover {
    transform: translateY(-6px);
    box-shadow: 0 20px 40px rgba(155, 89, 182, 0.12);
}
.why-number {
    font-family: 'Playfair Display', serif;
    font-size: 2rem;
    color: rgba(155, 89, 182, 0.35);
}
.why-card h3,
.industry-card h3 {
    font-family: 'Playfair Display', serif;
    font-weight: 500;
    margin: 0.75rem 0 0.5rem;
}
.why-card p {
    color: rgba(10, 10, 10, 0.55);
    font-size: 0.9rem;
    line-height: 1.7;
}
.industry-card {
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 20px;
    padding: 2rem;
    color: #fff;
    transition: border-color 0.3s;
}
.industry-card:hover {
    border-color: rgba(241, 196, 15, 0.4);
}
.industry-card p {
    color: rgba(255, 255, 255, 0.45);
    font-size: 0.9rem;
}
.testimonial-mark {
    font-family: 'Playfair Display', serif;
    font-size: 3rem;
    color: #F1C40F;
    line-height: 1;
}
.testimonial-card blockquote {
    margin: 0.5rem 0 1.5rem;
    font-family: 'Playfair Display', serif;
    font-style: italic;
    line-height: 1.6;
    color: #0A0A0A;
}
.testimonial-card figcaption {
    font-size: 0.75rem;
    letter-spacing: 0.15em;
    text-transform: uppercase;
    color: #9B59B6;
}
"#;
