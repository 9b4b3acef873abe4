use crate::content::model::*;

const MARQUEE: &[&str] = &[
    "Public Relations",
    "Media Production",
    "Digital Strategy",
    "Content Creation",
    "Media Management",
    "Direct Marketing",
];

const HOME_HIGHLIGHTS: &[Highlight] = &[
    Highlight { value: "50+", label: "Projects Delivered" },
    Highlight { value: "10+", label: "Industries Served" },
    Highlight { value: "UAE", label: "Licensed & Globally Ready" },
];

const ABOUT_PILLARS: &[Pillar] = &[
    Pillar {
        title: "Media Production",
        text: "High-fidelity visual storytelling that captivates and converts.",
    },
    Pillar {
        title: "Strategic Marketing",
        text: "Data-driven growth strategies that put your brand center stage.",
    },
    Pillar {
        title: "Digital Infrastructure",
        text: "Robust web ecosystems that power your brand's digital presence.",
    },
];

const ABOUT_BODY: &[&str] = &[
    "At Elvera, we don't just create content, we create impact. We believe that a brand's story is only as strong as the medium it lives on and the strategy behind its reach.",
    "Running a company is hard enough without having to manage five different agencies. At ELVERA Solutions, we bridge the gap between your technology and your story. We build the secure systems you need to stay safe and create the media that gets you noticed.",
];

const STATS: &[Stat] = &[
    Stat { value: 50, suffix: "+", label: "Projects Delivered", description: "Across marketing, media & web" },
    Stat { value: 98, suffix: "%", label: "Client Satisfaction", description: "Retained & referred clients" },
    Stat { value: 50, suffix: "+", label: "Brands Served", description: "From startups to enterprises" },
    Stat { value: 12, suffix: "+", label: "Industry Awards", description: "Recognition for excellence" },
];

const SERVICE_GROUPS: &[ServiceGroup] = &[
    ServiceGroup {
        title: "Strategic Marketing & PR",
        subtitle: "Precision-engineered growth to put your brand center stage.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=1200&q=80",
        items: &[
            ServiceItem { label: "Full-Scale Ad Campaigns", desc: "Concept-to-consumer strategy across all channels." },
            ServiceItem { label: "Digital & Direct Marketing", desc: "High-conversion tactics to reach your specific audience." },
            ServiceItem { label: "Public Relations", desc: "Managing your narrative and building industry authority." },
            ServiceItem { label: "Marketing Consulting", desc: "Data-backed insights to optimize your business trajectory." },
            ServiceItem { label: "Outdoor Advertising", desc: "Dominating the physical landscape with bold visibility." },
        ],
    },
    ServiceGroup {
        title: "Media & Visual Production",
        subtitle: "High-fidelity storytelling captured through the lens.",
        image: "https://images.unsplash.com/photo-1492691527719-9d1e07e534b4?auto=format&fit=crop&w=1200&q=80",
        items: &[
            ServiceItem { label: "Commercial & Consumer Media", desc: "Professional photography and videography tailored for brands and individuals." },
            ServiceItem { label: "Specialized Imaging", desc: "Advanced visual techniques and film processing for unique aesthetic needs." },
            ServiceItem { label: "Media Management", desc: "Professional handling and curation of your brand's visual assets." },
        ],
    },
    ServiceGroup {
        title: "Web Portals & Content Ecosystems",
        subtitle: "The digital architecture your brand deserves.",
        image: "https://images.unsplash.com/photo-1547658719-da2b51169166?auto=format&fit=crop&w=1200&q=80",
        items: &[
            ServiceItem { label: "Web Portal Operation", desc: "End-to-end management of complex digital hubs." },
            ServiceItem { label: "Media & Blogging Sites", desc: "Creating destination platforms for news, lifestyle, and niche communities." },
            ServiceItem { label: "Content Services", desc: "Professional blogging and editorial management to keep your audience engaged." },
        ],
    },
];

const WHY_PILLARS: &[Pillar] = &[
    Pillar { title: "Tailored Strategies", text: "We don't do one-size-fits-all. Every solution is built around your specific goals." },
    Pillar { title: "Cross-Disciplinary Expertise", text: "From code to creative, our team brings diverse skills under one roof." },
    Pillar { title: "Proven Track Record", text: "We've partnered with top brands and government entities across the UAE." },
    Pillar { title: "Future-Ready Tech", text: "We leverage AI and modern frameworks to ensure your business stays ahead." },
];

const INDUSTRIES: &[Industry] = &[
    Industry { name: "E-commerce & Retail", desc: "Storefronts, campaigns and content that turn browsers into buyers." },
    Industry { name: "Government & Public Sector", desc: "Accessible portals and public communication built for trust." },
    Industry { name: "Healthcare & Wellness", desc: "Clear, compliant messaging that puts patients first." },
    Industry { name: "Real Estate & Construction", desc: "Visual launches and lead funnels for developments of every size." },
    Industry { name: "Tech Startups", desc: "Brand, product storytelling and growth marketing from day one." },
    Industry { name: "Finance & Fintech", desc: "Credible digital presence for regulated, fast-moving markets." },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Elvera didn't just build us a website; they transformed our entire digital presence. Our engagement has tripled.",
        role: "Tech Startup Founder",
    },
    Testimonial {
        quote: "Professional, fast, and incredibly creative. Highly recommend the team at Elvera.",
        role: "E-commerce Director",
    },
    Testimonial {
        quote: "They understand exactly what a modern brand needs to thrive online.",
        role: "Real Estate Developer",
    },
];

pub const PROJECT_CATEGORIES: &[&str] = &["All", "Tech", "E-commerce", "Government", "Real Estate"];

const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Transformation",
        category: "E-commerce",
        summary: "A full replatform and launch campaign for a regional retailer.",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?auto=format&fit=crop&w=1200&q=80",
    },
    Project {
        title: "Corporate Rebranding",
        category: "Real Estate",
        summary: "Identity, film and web refresh for a property developer.",
        image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?auto=format&fit=crop&w=1200&q=80",
    },
    Project {
        title: "Government Portal Redesign",
        category: "Government",
        summary: "An accessible services portal with a new content model.",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&w=1200&q=80",
    },
    Project {
        title: "Launch Campaign",
        category: "Tech",
        summary: "Go-to-market creative and paid media for a SaaS launch.",
        image: "https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=format&fit=crop&w=1200&q=80",
    },
];

/// Projects shown for a portfolio filter. "All" and unknown filters show everything.
pub fn projects_in(projects: &'static [Project], category: &str) -> Vec<&'static Project> {
    if category == "All" || !PROJECT_CATEGORIES.contains(&category) {
        return projects.iter().collect();
    }
    projects.iter().filter(|p| p.category == category).collect()
}

fn default_cta() -> SectionSpec {
    SectionSpec::new(
        SectionKind::CallToAction(CtaContent {
            title: "Let's Build Something",
            highlight: "Extraordinary",
            text: "Join the brands that trust Elvera Solutions to scale their digital presence.",
            button: "Start Your Project",
        }),
        Shadow::Strong,
    )
}

fn heading(eyebrow: &'static str, title: &'static str, highlight: &'static str) -> Heading {
    Heading { eyebrow, title, highlight }
}

pub fn home() -> PageContent {
    PageContent {
        title: "Elvera Solutions | Elevating Brands in the Digital Era",
        description: "Elvera Solutions is a premier UAE-based digital agency specializing in software engineering, digital marketing, media production, and AI automation.",
        sections: vec![
            SectionSpec::new(
                SectionKind::Hero(HeroContent {
                    eyebrow: "ELVERA SOLUTIONS",
                    title: "Elevating Brands in the",
                    highlight: "Digital Era",
                    subtitle: "We build, grow, and transform businesses through powerful technology, creative marketing, and bold digital strategies - from the UAE to the world.",
                    background: "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&w=2400&q=80",
                    with_cta: true,
                    highlights: HOME_HIGHLIGHTS,
                }),
                Shadow::None,
            ),
            SectionSpec::new(SectionKind::Marquee(MARQUEE), Shadow::Strong),
            SectionSpec::new(
                SectionKind::About(AboutContent {
                    eyebrow: "WHO WE ARE",
                    title: "The Elvera Difference",
                    body: ABOUT_BODY,
                    pillars: ABOUT_PILLARS,
                    quote: Some(("Great brands are built where story meets system.", "ELVERA Creative Director")),
                }),
                Shadow::Medium,
            ),
            SectionSpec::new(SectionKind::Stats(STATS), Shadow::Soft),
            SectionSpec::new(
                SectionKind::Services(heading("WHAT WE DO", "Services Built to", "Elevate"), SERVICE_GROUPS),
                Shadow::Medium,
            ),
            SectionSpec::new(
                SectionKind::WhyChooseUs(heading("WHY ELVERA", "Why Brands", "Choose Us"), WHY_PILLARS),
                Shadow::Strong,
            ),
            SectionSpec::new(
                SectionKind::Industries(heading("INDUSTRIES", "Sectors We", "Serve"), INDUSTRIES),
                Shadow::Medium,
            ),
            SectionSpec::new(
                SectionKind::Testimonials(heading("TESTIMONIALS", "Success", "Stories"), TESTIMONIALS),
                Shadow::Strong,
            ),
            default_cta(),
        ],
    }
}

pub fn about() -> PageContent {
    PageContent {
        title: "About Us | Elvera Solutions",
        description: "Meet the team behind Elvera Solutions, a UAE digital agency bridging technology and storytelling.",
        sections: vec![
            SectionSpec::new(
                SectionKind::Hero(HeroContent {
                    eyebrow: "ABOUT US",
                    title: "Where Technology Meets",
                    highlight: "Story",
                    subtitle: "One partner for the systems that keep you running and the media that gets you noticed.",
                    background: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&w=2400&q=80",
                    with_cta: false,
                    highlights: &[],
                }),
                Shadow::None,
            ),
            SectionSpec::new(
                SectionKind::About(AboutContent {
                    eyebrow: "OUR STORY",
                    title: "The Elvera Difference",
                    body: ABOUT_BODY,
                    pillars: ABOUT_PILLARS,
                    quote: None,
                }),
                Shadow::Medium,
            ),
            SectionSpec::new(SectionKind::Stats(STATS), Shadow::Soft),
            SectionSpec::new(
                SectionKind::WhyChooseUs(heading("OUR VALUES", "What Drives", "Us"), WHY_PILLARS),
                Shadow::Strong,
            ),
            default_cta(),
        ],
    }
}

pub fn services() -> PageContent {
    PageContent {
        title: "Services | Elvera Solutions",
        description: "Marketing, PR, media production and web platforms delivered by one team.",
        sections: vec![
            SectionSpec::new(
                SectionKind::Hero(HeroContent {
                    eyebrow: "OUR SERVICES",
                    title: "Everything Your Brand Needs to",
                    highlight: "Grow",
                    subtitle: "From campaigns to cameras to code, pick one service or hand us the whole journey.",
                    background: "https://images.unsplash.com/photo-1552664730-d307ca884978?auto=format&fit=crop&w=2400&q=80",
                    with_cta: false,
                    highlights: &[],
                }),
                Shadow::None,
            ),
            SectionSpec::new(
                SectionKind::Services(heading("WHAT WE DO", "Services Built to", "Elevate"), SERVICE_GROUPS),
                Shadow::Medium,
            ),
            SectionSpec::new(SectionKind::Marquee(MARQUEE), Shadow::Strong),
            default_cta(),
        ],
    }
}

pub fn industries() -> PageContent {
    PageContent {
        title: "Industries | Elvera Solutions",
        description: "Digital marketing and technology for retail, government, healthcare, real estate, startups and finance.",
        sections: vec![
            SectionSpec::new(
                SectionKind::Hero(HeroContent {
                    eyebrow: "INDUSTRIES",
                    title: "Expertise Across",
                    highlight: "Sectors",
                    subtitle: "We learn your market before we speak for it.",
                    background: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?auto=format&fit=crop&w=2400&q=80",
                    with_cta: false,
                    highlights: &[],
                }),
                Shadow::None,
            ),
            SectionSpec::new(
                SectionKind::Industries(heading("WHO WE SERVE", "Sectors We", "Serve"), INDUSTRIES),
                Shadow::Medium,
            ),
            SectionSpec::new(
                SectionKind::Testimonials(heading("TESTIMONIALS", "Success", "Stories"), TESTIMONIALS),
                Shadow::Strong,
            ),
            default_cta(),
        ],
    }
}

pub fn portfolio() -> PageContent {
    PageContent {
        title: "Portfolio | Elvera Solutions",
        description: "Selected campaigns, rebrands and platforms delivered by Elvera Solutions.",
        sections: vec![
            SectionSpec::new(
                SectionKind::Hero(HeroContent {
                    eyebrow: "OUR WORK",
                    title: "Results That",
                    highlight: "Speak",
                    subtitle: "A selection of the brands we have helped launch, grow and transform.",
                    background: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=2400&q=80",
                    with_cta: false,
                    highlights: &[],
                }),
                Shadow::None,
            ),
            SectionSpec::new(
                SectionKind::Portfolio(heading("CASE STUDIES", "Featured", "Projects"), PROJECTS),
                Shadow::Medium,
            ),
            default_cta(),
        ],
    }
}

pub fn contact() -> PageContent {
    PageContent {
        title: "Contact | Elvera Solutions",
        description: "Talk to Elvera Solutions about your next project.",
        sections: vec![
            SectionSpec::new(
                SectionKind::Hero(HeroContent {
                    eyebrow: "GET IN TOUCH",
                    title: "Let's Make It",
                    highlight: "Happen",
                    subtitle: "Whether you're a startup looking for lift-off or an enterprise seeking transformation, our team is ready.",
                    background: "https://images.unsplash.com/photo-1516387938699-a93567ec168e?auto=format&fit=crop&w=2400&q=80",
                    with_cta: false,
                    highlights: &[],
                }),
                Shadow::None,
            ),
            SectionSpec::new(
                SectionKind::ContactDetails(ContactContent {
                    office: "Sharjah Media City (Shams), UAE",
                    intro: "Ready to elevate your digital presence? Send us a message, and we'll get back to you to discuss how we can help achieve your goals.",
                }),
                Shadow::Medium,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::stack::validate_stack;

    fn all_pages() -> Vec<PageContent> {
        vec![home(), about(), services(), industries(), portfolio(), contact()]
    }

    #[test]
    fn every_page_stacks_in_ascending_order() {
        for page in all_pages() {
            let mut z = page.z_indices();
            z.push(page.footer_z_index());
            assert_eq!(validate_stack(&z), Ok(()), "page {}", page.title);
        }
    }

    #[test]
    fn every_page_opens_with_a_hero() {
        for page in all_pages() {
            assert!(matches!(page.sections[0].kind, SectionKind::Hero(_)), "page {}", page.title);
        }
    }

    #[test]
    fn home_sections_run_hero_to_cta() {
        let names: Vec<_> = home().sections.iter().map(|s| s.kind.name()).collect();
        assert_eq!(
            names,
            [
                "hero",
                "marquee",
                "about",
                "stats",
                "services",
                "why-choose-us",
                "industries",
                "testimonials",
                "cta"
            ]
        );
    }

    #[test]
    fn portfolio_filter_narrows_by_category() {
        assert_eq!(projects_in(PROJECTS, "All").len(), PROJECTS.len());
        let tech = projects_in(PROJECTS, "Tech");
        assert_eq!(tech.len(), 1);
        assert_eq!(tech[0].title, "Launch Campaign");
        assert_eq!(projects_in(PROJECTS, "Unknown").len(), PROJECTS.len());
    }
}
