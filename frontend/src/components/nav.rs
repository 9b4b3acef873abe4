use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SiteConfig;
use crate::enquiry::modal::use_enquiry_launcher;
use crate::sections::footer::scroll_to_top;
use crate::Route;

/// Past this many pixels the bar gets its solid background.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

pub const NAV_Z_INDEX: i32 = 50;

const NAV_LINKS: &[(&str, Route)] = &[
    ("About", Route::About),
    ("Services", Route::Services),
    ("Industries", Route::Industries),
    ("Portfolio", Route::Portfolio),
    ("Contact", Route::Contact),
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let open_enquiry = use_enquiry_launcher();
    let route = use_route::<Route>();
    let menu_open = use_state_eq(|| false);
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = window();
                let listener = window.as_ref().map(|window| {
                    let source = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let y = source.scroll_y().unwrap_or(0.0);
                        scrolled.set(is_scrolled(y));
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    scroll_callback
                });

                move || {
                    if let (Some(window), Some(scroll_callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // A new page starts at the top with the menu closed.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                scroll_to_top();
                || ()
            },
            route.clone(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav
            class={classes!("top-nav", (*scrolled).then(|| "scrolled"), (*menu_open).then(|| "menu-open"))}
            style={format!("z-index: {};", NAV_Z_INDEX)}
        >
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"ELVERA"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class="nav-right" onclick={close_menu}>
                    { for NAV_LINKS.iter().map(|(label, target)| {
                        let active = route.as_ref() == Some(target);
                        html! {
                            <Link<Route>
                                to={target.clone()}
                                classes={classes!("nav-link", active.then(|| "active"))}
                            >
                                {*label}
                            </Link<Route>>
                        }
                    }) }
                    <a
                        class="nav-link nav-calendar"
                        href={config.calendar_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Book a Call"}
                    </a>
                    <button class="nav-cta" onclick={open_enquiry}>{"Get in Touch"}</button>
                </div>
            </div>
            <style>{r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    padding: 1.5rem 0;
                    transition: background 0.4s, padding 0.4s;
                }
                .top-nav.scrolled {
                    padding: 0.9rem 0;
                    background: rgba(10, 10, 10, 0.85);
                    backdrop-filter: blur(16px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.4rem;
                    letter-spacing: 0.25em;
                    color: #fff;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                    font-size: 0.8rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    transition: color 0.3s;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #F1C40F;
                }
                .nav-cta {
                    padding: 0.7rem 1.5rem;
                    border-radius: 999px;
                    border: 1px solid rgba(241, 196, 15, 0.5);
                    background: transparent;
                    color: #F1C40F;
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: fixed;
                        inset: 0;
                        top: 4rem;
                        flex-direction: column;
                        justify-content: center;
                        background: rgba(10, 10, 10, 0.97);
                    }
                    .top-nav.menu-open .nav-right {
                        display: flex;
                    }
                    .nav-link {
                        font-size: 1.1rem;
                    }
                }
            "#}</style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_solid_past_the_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1_200.0));
    }
}
