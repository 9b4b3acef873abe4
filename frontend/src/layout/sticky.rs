use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{window, Event, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Delay before the one-off re-measure that catches late-sized content.
pub const RECHECK_DELAY_MS: u32 = 1_000;

/// One section of a sticky stack and its last known content height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickySlot {
    pub z_index: i32,
    pub content_height: f64,
}

impl StickySlot {
    pub fn new(z_index: i32) -> Self {
        Self { z_index, content_height: 0.0 }
    }

    pub fn padding(&self, viewport_height: f64) -> f64 {
        extra_scroll_room(self.content_height, viewport_height)
    }
}

/// Scroll room needed so content taller than the viewport is fully seen
/// before the next section covers it. Bad measurements mean no room.
pub fn extra_scroll_room(content_height: f64, viewport_height: f64) -> f64 {
    if !content_height.is_finite() || !viewport_height.is_finite() {
        return 0.0;
    }
    if content_height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    (content_height - viewport_height).max(0.0)
}

fn measure(content: &NodeRef, slot: &mut StickySlot) -> Option<f64> {
    let element = content.cast::<HtmlElement>()?;
    let viewport = window()?.inner_height().ok()?.as_f64()?;
    slot.content_height = f64::from(element.offset_height());
    Some(slot.padding(viewport))
}

#[derive(Properties, PartialEq)]
pub struct StickySectionProps {
    pub z_index: i32,
    #[prop_or_default]
    pub class: Classes,
    /// The last layer of a page scrolls normally instead of pinning.
    #[prop_or(true)]
    pub pinned: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(StickySection)]
pub fn sticky_section(props: &StickySectionProps) -> Html {
    let content_ref = use_node_ref();
    let padding = use_state_eq(|| 0.0_f64);

    let remeasure = {
        let content_ref = content_ref.clone();
        let padding = padding.clone();
        let z_index = props.z_index;
        Rc::new(move || {
            let mut slot = StickySlot::new(z_index);
            if let Some(next) = measure(&content_ref, &mut slot) {
                debug!(
                    "Sticky slot {} measured {}px, padding {}px",
                    z_index, slot.content_height, next
                );
                padding.set(next);
            }
        })
    };

    // Mount and the delayed re-check.
    {
        let remeasure = remeasure.clone();
        use_effect_with_deps(
            move |_| {
                remeasure();
                let recheck = Timeout::new(RECHECK_DELAY_MS, move || remeasure());
                move || drop(recheck)
            },
            (),
        );
    }

    {
        let remeasure = remeasure.clone();
        use_event_with_window("resize", move |_: Event| remeasure());
    }
    {
        let remeasure = remeasure.clone();
        use_event_with_window("load", move |_: Event| remeasure());
    }

    let padding_bottom = if props.pinned { *padding } else { 0.0 };
    let inner_style = if props.pinned { "position: sticky; top: 0;" } else { "" };

    html! {
        <div
            class={classes!("sticky-slot", props.class.clone())}
            style={format!(
                "position: relative; z-index: {}; padding-bottom: {}px;",
                props.z_index, padding_bottom
            )}
        >
            <div ref={content_ref} class="sticky-slot-content" style={inner_style}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_gets_no_padding() {
        assert_eq!(extra_scroll_room(600.0, 900.0), 0.0);
        assert_eq!(extra_scroll_room(900.0, 900.0), 0.0);
    }

    #[test]
    fn tall_content_is_padded_by_the_overflow() {
        assert_eq!(extra_scroll_room(1450.0, 900.0), 550.0);
        assert_eq!(extra_scroll_room(900.5, 900.0), 0.5);
    }

    #[test]
    fn unusable_measurements_mean_no_padding() {
        assert_eq!(extra_scroll_room(0.0, 900.0), 0.0);
        assert_eq!(extra_scroll_room(-20.0, 900.0), 0.0);
        assert_eq!(extra_scroll_room(f64::NAN, 900.0), 0.0);
        assert_eq!(extra_scroll_room(1200.0, 0.0), 0.0);
        assert_eq!(extra_scroll_room(1200.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn slot_padding_uses_its_measured_height() {
        let mut slot = StickySlot::new(3);
        assert_eq!(slot.padding(800.0), 0.0);
        slot.content_height = 1000.0;
        assert_eq!(slot.padding(800.0), 200.0);
    }
}
