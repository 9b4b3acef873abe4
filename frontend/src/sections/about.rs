use yew::prelude::*;

use crate::content::model::AboutContent;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: AboutContent,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutProps) -> Html {
    let content = &props.content;

    html! {
        <section class="about-section">
            <div class="about-inner">
                <div class="about-copy">
                    <span class="eyebrow">{content.eyebrow}</span>
                    <h2>{content.title}</h2>
                    { for content.body.iter().map(|p| html! { <p>{*p}</p> }) }
                    if let Some((quote, author)) = content.quote {
                        <blockquote class="about-quote">
                            <p>{quote}</p>
                            <cite>{author}</cite>
                        </blockquote>
                    }
                </div>
                <div class="about-pillars">
                    { for content.pillars.iter().enumerate().map(|(i, pillar)| html! {
                        <div class="about-pillar" key={pillar.title}>
                            <span class="about-pillar-index">{format!("0{}", i + 1)}</span>
                            <h3>{pillar.title}</h3>
                            <p>{pillar.text}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>{r#"
                .about-section {
                    background: #fff;
                    padding: 7rem 1.5rem;
                }
                .about-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1.1fr 1fr;
                    gap: 4rem;
                }
                @media (max-width: 768px) {
                    .about-inner {
                        grid-template-columns: 1fr;
                        gap: 2.5rem;
                    }
                }
                .about-copy h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(2rem, 4vw, 3rem);
                    font-weight: 500;
                    color: #0A0A0A;
                    margin: 0 0 1.5rem;
                }
                .about-copy p {
                    color: rgba(10, 10, 10, 0.6);
                    line-height: 1.9;
                    font-weight: 300;
                }
                .about-quote {
                    margin: 2rem 0 0;
                    padding-left: 1.5rem;
                    border-left: 2px solid #F1C40F;
                }
                .about-quote p {
                    font-family: 'Playfair Display', serif;
                    font-style: italic;
                    color: #0A0A0A;
                }
                .about-quote cite {
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    color: #9B59B6;
                }
                .about-pillars {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .about-pillar {
                    padding: 1.75rem;
                    border-radius: 20px;
                    background: #F5F0FA;
                    transition: transform 0.3s;
                }
                .about-pillar:hover {
                    transform: translateY(-4px);
                }
                .about-pillar-index {
                    color: #9B59B6;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                }
                .about-pillar h3 {
                    font-family: 'Playfair Display', serif;
                    font-weight: 500;
                    margin: 0.5rem 0;
                }
                .about-pillar p {
                    margin: 0;
                    color: rgba(10, 10, 10, 0.55);
                    font-size: 0.9rem;
                }
            "#}</style>
        </section>
    }
}
