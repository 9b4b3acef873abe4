use yew::prelude::*;

use crate::content::model::Heading;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub heading: Heading,
    /// Light text on dark sections.
    #[prop_or(false)]
    pub dark: bool,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let Heading { eyebrow, title, highlight } = props.heading;
    html! {
        <div class={classes!("section-heading", props.dark.then(|| "dark"))}>
            <span class="eyebrow">{eyebrow}</span>
            <h2>{title}{" "}<span class="accent">{highlight}</span></h2>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GradientButtonProps {
    pub onclick: Callback<MouseEvent>,
    #[prop_or(false)]
    pub outline: bool,
    pub children: Children,
}

#[function_component(GradientButton)]
pub fn gradient_button(props: &GradientButtonProps) -> Html {
    html! {
        <button
            class={classes!("gradient-button", props.outline.then(|| "outline"))}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

/// Shared by every section; mounted once per page.
pub const SHARED_STYLES: &str = r#"
.section-heading {
    text-align: center;
    margin-bottom: 3.5rem;
}
.eyebrow {
    display: inline-block;
    color: #9B59B6;
    letter-spacing: 0.3em;
    font-size: 0.7rem;
    margin-bottom: 1rem;
}
.section-heading h2 {
    font-family: 'Playfair Display', serif;
    font-size: clamp(2rem, 4.5vw, 3.5rem);
    font-weight: 500;
    color: #0A0A0A;
    margin: 0;
}
.section-heading.dark h2 {
    color: #fff;
}
.accent {
    font-style: italic;
    color: #F1C40F;
}
.gradient-button {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem 2rem;
    border: none;
    border-radius: 999px;
    color: #fff;
    font-size: 0.85rem;
    letter-spacing: 0.05em;
    cursor: pointer;
    background: linear-gradient(135deg, #9B59B6, #7D3C98, #9B59B6, #AF7AC5, #9B59B6);
    background-size: 400% 400%;
    animation: gradientShift 4s ease infinite;
}
.gradient-button.outline {
    background: transparent;
    border: 1px solid rgba(255, 255, 255, 0.2);
    color: rgba(255, 255, 255, 0.8);
    animation: none;
}
.gradient-button.outline:hover {
    border-color: rgba(241, 196, 15, 0.5);
    color: #fff;
}
@keyframes gradientShift {
    0% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
    100% { background-position: 0% 50%; }
}
.stack-shadow-soft > .sticky-slot-content {
    box-shadow: 0 -10px 30px rgba(0, 0, 0, 0.08);
}
.stack-shadow-medium > .sticky-slot-content {
    box-shadow: 0 -20px 50px rgba(0, 0, 0, 0.15);
}
.stack-shadow-strong > .sticky-slot-content {
    box-shadow: 0 -30px 60px rgba(0, 0, 0, 0.3);
}
"#;
