use yew::prelude::*;

use crate::content::model::{Heading, ServiceGroup};
use crate::sections::common::SectionHeading;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub heading: Heading,
    pub groups: &'static [ServiceGroup],
}

#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesProps) -> Html {
    html! {
        <section class="services-section">
            <SectionHeading heading={props.heading.clone()} dark=true />
            <div class="services-groups">
                { for props.groups.iter().enumerate().map(|(i, group)| html! {
                    <article class={classes!("service-group", (i % 2 == 1).then(|| "flipped"))} key={group.title}>
                        <div class="service-image" style={format!("background-image: url('{}');", group.image)}></div>
                        <div class="service-copy">
                            <h3>{group.title}</h3>
                            <p class="service-subtitle">{group.subtitle}</p>
                            <ul>
                                { for group.items.iter().map(|item| html! {
                                    <li key={item.label}>
                                        <strong>{item.label}</strong>
                                        <span>{item.desc}</span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    </article>
                }) }
            </div>
            <style>{r#"
                .services-section {
                    background: #0A0A0A;
                    padding: 7rem 1.5rem;
                }
                .services-groups {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }
                .service-group {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .service-group.flipped .service-image {
                    order: 2;
                }
                @media (max-width: 768px) {
                    .service-group {
                        grid-template-columns: 1fr;
                    }
                    .service-group.flipped .service-image {
                        order: 0;
                    }
                }
                .service-image {
                    min-height: 320px;
                    border-radius: 24px;
                    background-size: cover;
                    background-position: center;
                }
                .service-copy h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.75rem;
                    font-weight: 500;
                    color: #fff;
                    margin: 0;
                }
                .service-subtitle {
                    color: #F1C40F;
                    font-style: italic;
                    font-size: 0.9rem;
                }
                .service-copy ul {
                    list-style: none;
                    padding: 0;
                    margin: 1.5rem 0 0;
                }
                .service-copy li {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    padding: 1rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }
                .service-copy strong {
                    color: #fff;
                    font-weight: 500;
                }
                .service-copy span {
                    color: rgba(255, 255, 255, 0.45);
                    font-size: 0.85rem;
                }
            "#}</style>
        </section>
    }
}
