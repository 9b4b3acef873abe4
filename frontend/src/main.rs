use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod enquiry {
    pub mod draft;
    pub mod flow;
    pub mod modal;
    pub mod relay;
}
mod layout {
    pub mod scroll_lock;
    pub mod stack;
    pub mod sticky;
    pub mod viewport;
}
mod content {
    pub mod legal;
    pub mod model;
    pub mod pages;
}
mod sections {
    pub mod about;
    pub mod common;
    pub mod contact;
    pub mod cta;
    pub mod footer;
    pub mod hero;
    pub mod marquee;
    pub mod portfolio;
    pub mod services;
    pub mod showcase;
    pub mod stats;
}
mod components {
    pub mod legal_modal;
    pub mod nav;
}
mod pages {
    pub mod page;
}

use components::nav::Nav;
use config::SiteConfig;
use enquiry::modal::{EnquiryLauncher, EnquiryModal};
use pages::page::SectionStack;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/industries")]
    Industries,
    #[at("/portfolio")]
    Portfolio,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <SectionStack page={content::pages::home()} /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <SectionStack page={content::pages::about()} /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <SectionStack page={content::pages::services()} /> }
        }
        Route::Industries => {
            info!("Rendering Industries page");
            html! { <SectionStack page={content::pages::industries()} /> }
        }
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <SectionStack page={content::pages::portfolio()} /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <SectionStack page={content::pages::contact()} /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| SiteConfig::from_build_env(), ());
    let enquiry_open = use_state_eq(|| false);

    let launcher = {
        let enquiry_open = enquiry_open.clone();
        EnquiryLauncher(Callback::from(move |_: ()| enquiry_open.set(true)))
    };
    let close_enquiry = {
        let enquiry_open = enquiry_open.clone();
        Callback::from(move |_: ()| enquiry_open.set(false))
    };

    html! {
        <ContextProvider<SiteConfig> context={(*config).clone()}>
            <ContextProvider<EnquiryLauncher> context={launcher}>
                <BrowserRouter>
                    <Nav />
                    <Switch<Route> render={switch} />
                    <EnquiryModal open={*enquiry_open} on_close={close_enquiry} />
                </BrowserRouter>
            </ContextProvider<EnquiryLauncher>>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting Elvera site");
    SiteConfig::from_build_env().report();
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_to_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/industries"), Some(Route::Industries));
        assert_eq!(Route::recognize("/portfolio"), Some(Route::Portfolio));
        assert_eq!(Route::About.to_path(), "/about");
        assert_eq!(Route::Contact.to_path(), "/contact");
    }
}
