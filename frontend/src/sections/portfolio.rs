use log::debug;
use yew::prelude::*;

use crate::content::model::{Heading, Project};
use crate::content::pages::{projects_in, PROJECT_CATEGORIES};
use crate::sections::common::SectionHeading;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub heading: Heading,
    pub projects: &'static [Project],
}

#[function_component(PortfolioGrid)]
pub fn portfolio_grid(props: &PortfolioProps) -> Html {
    let active = use_state_eq(|| "All");
    let visible = projects_in(props.projects, *active);

    html! {
        <section class="portfolio-section">
            <SectionHeading heading={props.heading.clone()} />
            <div class="portfolio-filters">
                { for PROJECT_CATEGORIES.iter().map(|category| {
                    let select = {
                        let active = active.clone();
                        let category = *category;
                        Callback::from(move |_: MouseEvent| {
                            debug!("Portfolio filter: {}", category);
                            active.set(category);
                        })
                    };
                    html! {
                        <button
                            key={*category}
                            class={classes!("portfolio-filter", (*active == *category).then(|| "active"))}
                            onclick={select}
                        >
                            {*category}
                        </button>
                    }
                }) }
            </div>
            <div class="portfolio-grid">
                { for visible.into_iter().map(|project| html! {
                    <article class="project-card" key={project.title}>
                        <div class="project-image" style={format!("background-image: url('{}');", project.image)}></div>
                        <div class="project-copy">
                            <span class="project-category">{project.category}</span>
                            <h3>{project.title}</h3>
                            <p>{project.summary}</p>
                        </div>
                    </article>
                }) }
            </div>
            <style>{r#"
                .portfolio-section {
                    background: #fff;
                    padding: 7rem 1.5rem;
                }
                .portfolio-filters {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-bottom: 3rem;
                }
                .portfolio-filter {
                    padding: 0.6rem 1.5rem;
                    border-radius: 999px;
                    border: 1px solid rgba(10, 10, 10, 0.1);
                    background: transparent;
                    font-size: 0.8rem;
                    letter-spacing: 0.05em;
                    cursor: pointer;
                }
                .portfolio-filter.active {
                    background: #9B59B6;
                    border-color: #9B59B6;
                    color: #fff;
                }
                .portfolio-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .project-card {
                    border-radius: 24px;
                    overflow: hidden;
                    background: #F5F0FA;
                }
                .project-image {
                    height: 240px;
                    background-size: cover;
                    background-position: center;
                    transition: transform 0.6s;
                }
                .project-card:hover .project-image {
                    transform: scale(1.04);
                }
                .project-copy {
                    padding: 1.75rem;
                }
                .project-category {
                    color: #9B59B6;
                    font-size: 0.7rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .project-copy h3 {
                    font-family: 'Playfair Display', serif;
                    font-weight: 500;
                    margin: 0.5rem 0;
                }
                .project-copy p {
                    color: rgba(10, 10, 10, 0.55);
                    font-size: 0.9rem;
                    margin: 0;
                }
            "#}</style>
        </section>
    }
}
