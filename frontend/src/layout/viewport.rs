use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

pub const MOBILE_QUERY: &str = "(max-width: 768px)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Tracks a CSS media query, following `change` events.
#[hook]
pub fn use_media_query(query: &'static str) -> bool {
    let matches = use_state_eq(|| media_matches(query));

    {
        let matches = matches.clone();
        use_effect_with_deps(
            move |query| {
                let mql = window().and_then(|w| w.match_media(query).ok().flatten());
                let listener = mql.as_ref().map(|mql| {
                    let source = mql.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        matches.set(source.matches());
                    }) as Box<dyn FnMut()>);
                    let _ = mql.add_event_listener_with_callback(
                        "change",
                        callback.as_ref().unchecked_ref(),
                    );
                    callback
                });

                move || {
                    if let (Some(mql), Some(callback)) = (mql, listener) {
                        let _ = mql.remove_event_listener_with_callback(
                            "change",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            query,
        );
    }

    *matches
}

/// Small screens and reduced-motion users get shorter, simpler animations.
#[hook]
pub fn use_lite_animations() -> bool {
    let mobile = use_media_query(MOBILE_QUERY);
    let reduced_motion = use_media_query(REDUCED_MOTION_QUERY);
    mobile || reduced_motion
}

/// Whether an element's top edge has crossed into the viewport by `margin` px.
pub fn entered_viewport(element_top: f64, viewport_height: f64, margin: f64) -> bool {
    element_top < viewport_height - margin
}

fn element_in_view(node: &NodeRef, margin: f64) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let Some(viewport) = window().and_then(|w| w.inner_height().ok()).and_then(|h| h.as_f64()) else {
        return false;
    };
    entered_viewport(element.get_bounding_client_rect().top(), viewport, margin)
}

/// Flips to true the first time the element scrolls into view and stays there.
#[hook]
pub fn use_in_view_once(node: NodeRef, margin: f64) -> bool {
    let seen = use_state_eq(|| false);

    {
        let seen = seen.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                if element_in_view(&node, margin) {
                    seen.set(true);
                }
                || ()
            },
            (),
        );
    }

    {
        let seen = seen.clone();
        use_event_with_window("scroll", move |_: Event| {
            if !*seen && element_in_view(&node, margin) {
                seen.set(true);
            }
        });
    }

    *seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entering_respects_the_margin() {
        assert!(entered_viewport(700.0, 900.0, 50.0));
        assert!(!entered_viewport(860.0, 900.0, 50.0));
        assert!(entered_viewport(-300.0, 900.0, 50.0));
    }
}
