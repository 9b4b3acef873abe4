use web_sys::window;
use yew::create_portal;
use yew::prelude::*;

use crate::components::nav::NAV_Z_INDEX;
use crate::content::model::{Block, LegalDocument};
use crate::layout::scroll_lock::ScrollLock;

/// Must clear the fixed nav, which would otherwise cover the close button.
pub const LEGAL_OVERLAY_Z_INDEX: i32 = NAV_Z_INDEX * 4;

#[derive(Properties, PartialEq)]
pub struct LegalModalProps {
    pub document: LegalDocument,
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(LegalModal)]
pub fn legal_modal(props: &LegalModalProps) -> Html {
    use_effect_with_deps(
        |open| {
            let lock = open.then(ScrollLock::acquire);
            move || drop(lock)
        },
        props.open,
    );

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let doc = &props.document;

    let overlay = html! {
        <div
            class="legal-overlay"
            style={format!("z-index: {};", LEGAL_OVERLAY_Z_INDEX)}
            onclick={close.clone()}
        >
            <div class="legal-card" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="legal-close" aria-label="Close" onclick={close}>{"×"}</button>
                <h2>{doc.title}{" "}<span class="accent">{doc.highlight}</span></h2>
                <p class="legal-effective">{doc.effective}</p>
                { for doc.clauses.iter().map(|clause| html! {
                    <section class="legal-clause" key={clause.heading}>
                        <h3>{clause.heading}</h3>
                        { for clause.blocks.iter().map(render_block) }
                    </section>
                }) }
            </div>
            <style>{r#"
                .legal-overlay {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.7);
                    backdrop-filter: blur(12px);
                }
                .legal-card {
                    position: relative;
                    width: 100%;
                    max-width: 48rem;
                    max-height: 85vh;
                    overflow-y: auto;
                    background: #fff;
                    border-radius: 24px;
                    padding: 3rem 2.5rem;
                    color: #0A0A0A;
                }
                .legal-close {
                    position: absolute;
                    top: 1.25rem;
                    right: 1.25rem;
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 50%;
                    border: 1px solid rgba(10, 10, 10, 0.1);
                    background: transparent;
                    cursor: pointer;
                }
                .legal-card h2 {
                    font-family: 'Playfair Display', serif;
                    font-weight: 500;
                    margin: 0;
                }
                .legal-effective {
                    color: rgba(10, 10, 10, 0.4);
                    font-size: 0.8rem;
                    margin-bottom: 2rem;
                }
                .legal-clause h3 {
                    font-size: 1rem;
                    color: #9B59B6;
                    margin: 1.75rem 0 0.5rem;
                }
                .legal-clause p,
                .legal-clause li {
                    color: rgba(10, 10, 10, 0.65);
                    font-size: 0.9rem;
                    line-height: 1.8;
                }
            "#}</style>
        </div>
    };

    // Mounted on <body> so no sticky section's stacking context can trap it.
    match window().and_then(|w| w.document()).and_then(|d| d.body()) {
        Some(body) => create_portal(overlay, body.into()),
        None => overlay,
    }
}

fn render_block(block: &Block) -> Html {
    match block {
        Block::Paragraph(text) => html! { <p>{*text}</p> },
        Block::List(items) => html! {
            <ul>
                { for items.iter().map(|item| html! { <li>{*item}</li> }) }
            </ul>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_sits_above_the_nav() {
        assert!(LEGAL_OVERLAY_Z_INDEX > NAV_Z_INDEX);
    }
}
