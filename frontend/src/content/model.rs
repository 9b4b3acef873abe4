//! Plain data describing what each page shows. Rendering lives in `sections`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shadow {
    None,
    Soft,
    Medium,
    Strong,
}

impl Shadow {
    pub fn class(self) -> &'static str {
        match self {
            Shadow::None => "",
            Shadow::Soft => "stack-shadow-soft",
            Shadow::Medium => "stack-shadow-medium",
            Shadow::Strong => "stack-shadow-strong",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroContent {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub highlight: &'static str,
    pub subtitle: &'static str,
    pub background: &'static str,
    /// Shows the enquiry CTA and the highlight numbers under the headline.
    pub with_cta: bool,
    pub highlights: &'static [Highlight],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pillar {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AboutContent {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub body: &'static [&'static str],
    pub pillars: &'static [Pillar],
    pub quote: Option<(&'static str, &'static str)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceItem {
    pub label: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceGroup {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub items: &'static [ServiceItem],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Industry {
    pub name: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactContent {
    pub office: &'static str,
    pub intro: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CtaContent {
    pub title: &'static str,
    pub highlight: &'static str,
    pub text: &'static str,
    pub button: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Heading {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub highlight: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SectionKind {
    Hero(HeroContent),
    Marquee(&'static [&'static str]),
    About(AboutContent),
    Stats(&'static [Stat]),
    Services(Heading, &'static [ServiceGroup]),
    WhyChooseUs(Heading, &'static [Pillar]),
    Industries(Heading, &'static [Industry]),
    Testimonials(Heading, &'static [Testimonial]),
    Portfolio(Heading, &'static [Project]),
    ContactDetails(ContactContent),
    CallToAction(CtaContent),
}

impl SectionKind {
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Hero(_) => "hero",
            SectionKind::Marquee(_) => "marquee",
            SectionKind::About(_) => "about",
            SectionKind::Stats(_) => "stats",
            SectionKind::Services(..) => "services",
            SectionKind::WhyChooseUs(..) => "why-choose-us",
            SectionKind::Industries(..) => "industries",
            SectionKind::Testimonials(..) => "testimonials",
            SectionKind::Portfolio(..) => "portfolio",
            SectionKind::ContactDetails(_) => "contact",
            SectionKind::CallToAction(_) => "cta",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpec {
    pub kind: SectionKind,
    pub shadow: Shadow,
}

impl SectionSpec {
    pub fn new(kind: SectionKind, shadow: Shadow) -> Self {
        Self { kind, shadow }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageContent {
    pub title: &'static str,
    pub description: &'static str,
    pub sections: Vec<SectionSpec>,
}

impl PageContent {
    /// Z-index for each section in document order; the footer sits one above.
    pub fn z_indices(&self) -> Vec<i32> {
        crate::layout::stack::stack_z_indices(self.sections.len())
    }

    pub fn footer_z_index(&self) -> i32 {
        self.sections.len() as i32 + 1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Paragraph(&'static str),
    List(&'static [&'static str]),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Clause {
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegalDocument {
    pub title: &'static str,
    pub highlight: &'static str,
    pub effective: &'static str,
    pub clauses: &'static [Clause],
}
