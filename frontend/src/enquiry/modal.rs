use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::HtmlInputElement;
use yew::context::ContextHandle;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::enquiry::draft::{BudgetRange, DraftEdit, ServiceInterest};
use crate::enquiry::flow::{Dropdown, EnquiryFlow, ResetTicket, SubmissionState, RESET_DELAY_MS};
use crate::enquiry::relay::{send_enquiry, EnquiryError};
use crate::layout::scroll_lock::ScrollLock;

/// Lets any section open the site-wide enquiry modal.
#[derive(Clone, PartialEq)]
pub struct EnquiryLauncher(pub Callback<()>);

#[hook]
pub fn use_enquiry_launcher() -> Callback<MouseEvent> {
    let launcher = use_context::<EnquiryLauncher>();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(EnquiryLauncher(open)) = &launcher {
            open.emit(());
        }
    })
}

pub enum Msg {
    Edit(DraftEdit),
    ToggleDropdown(Dropdown),
    Submit,
    Resolved {
        session: u64,
        outcome: Result<(), EnquiryError>,
    },
    Close,
    ResetElapsed(ResetTicket),
    ConfigChanged(SiteConfig),
}

#[derive(Properties, PartialEq)]
pub struct EnquiryModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

pub struct EnquiryModal {
    flow: EnquiryFlow,
    config: SiteConfig,
    _config_handle: Option<ContextHandle<SiteConfig>>,
    reset_timer: Option<Timeout>,
    scroll_lock: Option<ScrollLock>,
}

impl Component for EnquiryModal {
    type Message = Msg;
    type Properties = EnquiryModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (config, handle) = match ctx
            .link()
            .context::<SiteConfig>(ctx.link().callback(Msg::ConfigChanged))
        {
            Some((config, handle)) => (config, Some(handle)),
            None => (SiteConfig::default(), None),
        };

        Self {
            flow: EnquiryFlow::default(),
            config,
            _config_handle: handle,
            reset_timer: None,
            scroll_lock: ctx.props().open.then(ScrollLock::acquire),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let open = ctx.props().open;
        if open == old_props.open {
            return false;
        }

        info!("Enquiry modal {}", if open { "opened" } else { "closed" });
        self.scroll_lock = open.then(ScrollLock::acquire);
        self.reset_timer = self.flow.set_open(open).map(|ticket| {
            let link = ctx.link().clone();
            Timeout::new(RESET_DELAY_MS, move || {
                link.send_message(Msg::ResetElapsed(ticket));
            })
        });
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(edit) => self.flow.edit(edit),
            Msg::ToggleDropdown(which) => {
                self.flow.toggle_dropdown(which);
                true
            }
            Msg::Submit => match self.flow.submit() {
                Ok(submission) => {
                    info!("Sending enquiry for {}", submission.draft.email);
                    let config = self.config.clone();
                    ctx.link().send_future(async move {
                        let outcome = send_enquiry(&config, &submission.draft).await;
                        Msg::Resolved {
                            session: submission.session,
                            outcome,
                        }
                    });
                    true
                }
                Err(rejected) => {
                    debug!("Submit ignored: {}", rejected);
                    false
                }
            },
            Msg::Resolved { session, outcome } => self.flow.resolve(session, outcome),
            Msg::Close => {
                ctx.props().on_close.emit(());
                false
            }
            Msg::ResetElapsed(ticket) => {
                self.reset_timer = None;
                self.flow.reset(ticket);
                true
            }
            Msg::ConfigChanged(config) => {
                self.config = config;
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let open = ctx.props().open;
        if !open && self.reset_timer.is_none() {
            return html! {};
        }

        let close = ctx.link().callback(|_: MouseEvent| Msg::Close);

        html! {
            <div class={classes!("enquiry-overlay", (!open).then(|| "closing"))} onclick={close.clone()}>
                <div class="enquiry-card" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <button class="enquiry-close" aria-label="Close" onclick={close}>{"×"}</button>
                    {
                        if matches!(self.flow.state(), SubmissionState::Success) {
                            self.view_success(ctx)
                        } else {
                            self.view_form(ctx)
                        }
                    }
                </div>
                <style>{ENQUIRY_STYLES}</style>
            </div>
        }
    }
}

impl EnquiryModal {
    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let draft = self.flow.draft();
        let state = self.flow.state();
        let locked = state.is_sending();
        let link = ctx.link();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let text_input = |make: fn(String) -> DraftEdit| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::Edit(make(input.value()))
            })
        };

        let budget_label = draft.budget.map(BudgetRange::label);
        let service_label = draft.service.map(ServiceInterest::label);

        html! {
            <>
                <div class="enquiry-header">
                    <span class="enquiry-eyebrow">{"GET IN TOUCH"}</span>
                    <h3>{"Let's Start "}<span class="accent">{"Something"}</span></h3>
                    <h3>{"Great Together."}</h3>
                </div>
                <form class="enquiry-form" {onsubmit}>
                    <input
                        type="text"
                        placeholder="Your Name *"
                        required=true
                        disabled={locked}
                        value={draft.name.clone()}
                        oninput={text_input(DraftEdit::Name)}
                    />
                    <input
                        type="email"
                        placeholder="Email Address *"
                        required=true
                        disabled={locked}
                        value={draft.email.clone()}
                        oninput={text_input(DraftEdit::Email)}
                    />
                    <input
                        type="tel"
                        placeholder="Phone Number"
                        disabled={locked}
                        value={draft.phone.clone()}
                        oninput={text_input(DraftEdit::Phone)}
                    />
                    { self.view_dropdown(
                        ctx,
                        Dropdown::Budget,
                        budget_label.unwrap_or("Budget Range"),
                        budget_label.is_some(),
                        BudgetRange::ALL.iter().map(|b| (b.label(), DraftEdit::Budget(*b), budget_label == Some(b.label()))).collect(),
                    ) }
                    { self.view_dropdown(
                        ctx,
                        Dropdown::Service,
                        service_label.unwrap_or("How can we help you? *"),
                        service_label.is_some(),
                        ServiceInterest::ALL.iter().map(|s| (s.label(), DraftEdit::Service(*s), service_label == Some(s.label()))).collect(),
                    ) }

                    if let Some(error) = state.error() {
                        <div class="enquiry-error" role="alert">{error}</div>
                    }

                    <button type="submit" class="enquiry-submit" disabled={!self.flow.can_submit()}>
                        if locked {
                            <span class="loading-spinner"></span>
                        } else {
                            {"SUBMIT ENQUIRY"}
                        }
                    </button>

                    <div class="enquiry-divider"><span>{"OR"}</span></div>

                    <a
                        href={self.config.calendar_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="enquiry-calendar"
                    >
                        {"BOOK A FREE STRATEGY CALL"}
                    </a>
                </form>
            </>
        }
    }

    fn view_dropdown(
        &self,
        ctx: &Context<Self>,
        which: Dropdown,
        label: &'static str,
        chosen: bool,
        options: Vec<(&'static str, DraftEdit, bool)>,
    ) -> Html {
        let expanded = self.flow.dropdown() == Some(which);
        let toggle = ctx.link().callback(move |e: MouseEvent| {
            e.prevent_default();
            Msg::ToggleDropdown(which)
        });

        html! {
            <div class="enquiry-select">
                <button
                    type="button"
                    class={classes!("enquiry-select-toggle", chosen.then(|| "chosen"))}
                    disabled={self.flow.state().is_sending()}
                    onclick={toggle}
                >
                    <span>{label}</span>
                    <span class={classes!("chevron", expanded.then(|| "open"))}>{"▾"}</span>
                </button>
                if expanded {
                    <ul class="enquiry-options">
                        { for options.into_iter().map(|(option, edit, selected)| {
                            let pick = ctx.link().callback(move |e: MouseEvent| {
                                e.prevent_default();
                                Msg::Edit(edit.clone())
                            });
                            html! {
                                <li key={option}>
                                    <button type="button" class={classes!(selected.then(|| "selected"))} onclick={pick}>
                                        {option}
                                    </button>
                                </li>
                            }
                        }) }
                    </ul>
                }
            </div>
        }
    }

    fn view_success(&self, ctx: &Context<Self>) -> Html {
        let close = ctx.link().callback(|_: MouseEvent| Msg::Close);
        html! {
            <div class="enquiry-success">
                <div class="enquiry-success-icon">{"✓"}</div>
                <h3>{"Thank "}<span class="accent">{"You!"}</span></h3>
                <p>{"We've received your enquiry. The Elvera team will be in touch within 24 hours."}</p>
                <button class="enquiry-success-close" onclick={close}>{"Close"}</button>
            </div>
        }
    }
}

const ENQUIRY_STYLES: &str = r#"
.enquiry-overlay {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    background: rgba(0, 0, 0, 0.7);
    backdrop-filter: blur(12px);
    animation: enquiryFadeIn 0.3s ease-out;
}
.enquiry-overlay.closing {
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s ease-in;
}
@keyframes enquiryFadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
.enquiry-card {
    position: relative;
    width: 100%;
    max-width: 32rem;
    max-height: 90vh;
    overflow-y: auto;
    border-radius: 24px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: linear-gradient(160deg, #1a0e28 0%, #0f0817 40%, #0A0A0A 100%);
    padding: 2.5rem;
    color: #fff;
}
.enquiry-close {
    position: absolute;
    top: 1.25rem;
    right: 1.25rem;
    width: 2.25rem;
    height: 2.25rem;
    border-radius: 50%;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: transparent;
    color: rgba(255, 255, 255, 0.5);
    cursor: pointer;
}
.enquiry-eyebrow {
    color: #9B59B6;
    letter-spacing: 0.25em;
    font-size: 0.65rem;
}
.enquiry-header h3 {
    font-family: 'Playfair Display', serif;
    font-size: clamp(1.5rem, 3vw, 2rem);
    font-weight: 500;
    margin: 0.25rem 0;
}
.accent {
    font-style: italic;
    color: #F1C40F;
}
.enquiry-form {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    margin-top: 2rem;
}
.enquiry-form input,
.enquiry-select-toggle {
    width: 100%;
    background: rgba(21, 10, 30, 0.6);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 12px;
    padding: 0.9rem 1rem;
    color: #fff;
    font-size: 0.85rem;
    font-weight: 300;
}
.enquiry-select {
    position: relative;
}
.enquiry-select-toggle {
    display: flex;
    justify-content: space-between;
    color: rgba(255, 255, 255, 0.25);
    cursor: pointer;
    text-align: left;
}
.enquiry-select-toggle.chosen {
    color: #fff;
}
.chevron.open {
    transform: rotate(180deg);
}
.enquiry-options {
    position: absolute;
    left: 0;
    right: 0;
    top: 100%;
    margin-top: 0.5rem;
    padding: 0;
    list-style: none;
    background: #1a0e28;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 12px;
    overflow: hidden;
    z-index: 20;
}
.enquiry-options button {
    width: 100%;
    text-align: left;
    padding: 0.75rem 1rem;
    background: transparent;
    border: none;
    color: rgba(255, 255, 255, 0.6);
    cursor: pointer;
}
.enquiry-options button.selected {
    background: rgba(155, 89, 182, 0.2);
    color: #F1C40F;
}
.enquiry-error {
    padding: 0.75rem 1rem;
    border-radius: 12px;
    background: rgba(239, 68, 68, 0.1);
    border: 1px solid rgba(239, 68, 68, 0.2);
    color: #fca5a5;
    font-size: 0.8rem;
}
.enquiry-submit {
    padding: 1rem 2rem;
    border: none;
    border-radius: 999px;
    color: #fff;
    letter-spacing: 0.08em;
    background: linear-gradient(135deg, #9B59B6, #7D3C98, #9B59B6, #AF7AC5, #9B59B6);
    cursor: pointer;
}
.enquiry-submit:disabled {
    opacity: 0.4;
    cursor: not-allowed;
}
.loading-spinner {
    display: inline-block;
    width: 18px;
    height: 18px;
    border: 3px solid rgba(255, 255, 255, 0.3);
    border-radius: 50%;
    border-top-color: #fff;
    animation: spin 1s ease-in-out infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.enquiry-divider {
    text-align: center;
    color: rgba(255, 255, 255, 0.25);
    font-size: 0.7rem;
    letter-spacing: 0.1em;
}
.enquiry-calendar {
    display: block;
    text-align: center;
    padding: 0.9rem 2rem;
    border-radius: 999px;
    border: 1px solid rgba(241, 196, 15, 0.3);
    color: #F1C40F;
    font-size: 0.8rem;
    letter-spacing: 0.08em;
    text-decoration: none;
}
.enquiry-success {
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
    padding: 2.5rem 0;
}
.enquiry-success-icon {
    width: 4rem;
    height: 4rem;
    border-radius: 50%;
    background: rgba(155, 89, 182, 0.15);
    color: #F1C40F;
    font-size: 2rem;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1.5rem;
}
.enquiry-success p {
    color: rgba(255, 255, 255, 0.4);
    max-width: 20rem;
    line-height: 1.7;
}
.enquiry-success-close {
    margin-top: 2rem;
    background: none;
    border: none;
    color: #9B59B6;
    cursor: pointer;
}
"#;
