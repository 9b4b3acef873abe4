use log::{error, info};
use web_sys::window;
use yew::prelude::*;

use crate::content::model::{PageContent, SectionKind};
use crate::layout::stack::validate_stack;
use crate::layout::sticky::StickySection;
use crate::sections::about::AboutSection;
use crate::sections::common::SHARED_STYLES;
use crate::sections::contact::ContactDetails;
use crate::sections::cta::CtaBanner;
use crate::sections::footer::Footer;
use crate::sections::hero::HeroSection;
use crate::sections::marquee::MarqueeBanner;
use crate::sections::portfolio::PortfolioGrid;
use crate::sections::services::ServicesSection;
use crate::sections::showcase::{IndustriesOverview, TestimonialsSection, WhyChooseUs};
use crate::sections::stats::StatsSection;

/// Sets the document title and meta description for the current page.
fn apply_seo(title: &str, description: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(title);

    let meta = match document.query_selector("meta[name='description']") {
        Ok(Some(meta)) => Some(meta),
        _ => document.create_element("meta").ok().and_then(|meta| {
            meta.set_attribute("name", "description").ok()?;
            document.head()?.append_child(&meta).ok()?;
            Some(meta)
        }),
    };
    if let Some(meta) = meta {
        let _ = meta.set_attribute("content", description);
    }
}

fn render_section(kind: &SectionKind) -> Html {
    match kind.clone() {
        SectionKind::Hero(content) => html! { <HeroSection {content} /> },
        SectionKind::Marquee(items) => html! { <MarqueeBanner {items} /> },
        SectionKind::About(content) => html! { <AboutSection {content} /> },
        SectionKind::Stats(stats) => html! { <StatsSection {stats} /> },
        SectionKind::Services(heading, groups) => html! { <ServicesSection {heading} {groups} /> },
        SectionKind::WhyChooseUs(heading, pillars) => html! { <WhyChooseUs {heading} {pillars} /> },
        SectionKind::Industries(heading, industries) => {
            html! { <IndustriesOverview {heading} {industries} /> }
        }
        SectionKind::Testimonials(heading, testimonials) => {
            html! { <TestimonialsSection {heading} {testimonials} /> }
        }
        SectionKind::Portfolio(heading, projects) => html! { <PortfolioGrid {heading} {projects} /> },
        SectionKind::ContactDetails(content) => html! { <ContactDetails {content} /> },
        SectionKind::CallToAction(content) => html! { <CtaBanner {content} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionStackProps {
    pub page: PageContent,
}

/// Renders a page as stacked sticky layers, each one sliding over the last,
/// with the footer on top.
#[function_component(SectionStack)]
pub fn section_stack(props: &SectionStackProps) -> Html {
    let page = &props.page;

    use_effect_with_deps(
        |(title, description)| {
            info!("Rendering page: {}", title);
            apply_seo(title, description);
            || ()
        },
        (page.title, page.description),
    );

    let z_indices = page.z_indices();
    if let Err(e) = validate_stack(&z_indices) {
        error!("Section stack for {} is out of order: {}", page.title, e);
    }

    html! {
        <main class="section-stack">
            <style>{SHARED_STYLES}</style>
            { for page.sections.iter().zip(z_indices).map(|(section, z_index)| html! {
                <StickySection
                    key={format!("{}-{}", section.kind.name(), z_index)}
                    {z_index}
                    class={classes!(section.kind.name(), section.shadow.class())}
                >
                    { render_section(&section.kind) }
                </StickySection>
            }) }
            <StickySection z_index={page.footer_z_index()} pinned=false>
                <Footer />
            </StickySection>
        </main>
    }
}
