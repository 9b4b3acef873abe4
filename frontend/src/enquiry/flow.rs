use log::{debug, info};
use thiserror::Error;

use crate::enquiry::draft::{DraftEdit, EnquiryDraft, RequiredField};
use crate::enquiry::relay::EnquiryError;

/// Milliseconds between closing the modal and clearing its fields.
pub const RESET_DELAY_MS: u32 = 400;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Success,
    Failed(String),
}

impl SubmissionState {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionState::Sending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dropdown {
    Budget,
    Service,
}

#[derive(Debug, Error, PartialEq)]
pub enum SubmitRejected {
    #[error("missing required fields: {0:?}")]
    MissingFields(Vec<RequiredField>),
    #[error("an enquiry is already being sent")]
    InFlight,
    #[error("this enquiry was already sent")]
    AlreadySent,
}

/// An accepted submit. Its response is only applied while the session it was
/// issued in is still current.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub session: u64,
    pub draft: EnquiryDraft,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetTicket {
    session: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnquiryFlow {
    draft: EnquiryDraft,
    state: SubmissionState,
    dropdown: Option<Dropdown>,
    session: u64,
    reset_pending: bool,
}

impl EnquiryFlow {
    pub fn draft(&self) -> &EnquiryDraft {
        &self.draft
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn dropdown(&self) -> Option<Dropdown> {
        self.dropdown
    }

    pub fn can_submit(&self) -> bool {
        self.draft.is_complete()
            && matches!(self.state, SubmissionState::Idle | SubmissionState::Failed(_))
    }

    /// Fields are locked while a request is in flight and after a successful send.
    pub fn edit(&mut self, edit: DraftEdit) -> bool {
        if matches!(self.state, SubmissionState::Sending | SubmissionState::Success) {
            return false;
        }
        let closes_dropdown = matches!(edit, DraftEdit::Budget(_) | DraftEdit::Service(_));
        self.draft.apply(edit);
        if closes_dropdown {
            self.dropdown = None;
        }
        true
    }

    /// Opening one dropdown closes the other.
    pub fn toggle_dropdown(&mut self, which: Dropdown) {
        if self.state.is_sending() {
            return;
        }
        self.dropdown = if self.dropdown == Some(which) { None } else { Some(which) };
    }

    pub fn submit(&mut self) -> Result<Submission, SubmitRejected> {
        match self.state {
            SubmissionState::Sending => return Err(SubmitRejected::InFlight),
            SubmissionState::Success => return Err(SubmitRejected::AlreadySent),
            SubmissionState::Idle | SubmissionState::Failed(_) => {}
        }

        let missing = self.draft.missing_required();
        if !missing.is_empty() {
            debug!("Enquiry submit blocked, missing {:?}", missing);
            return Err(SubmitRejected::MissingFields(missing));
        }

        self.state = SubmissionState::Sending;
        self.dropdown = None;
        Ok(Submission {
            session: self.session,
            draft: self.draft.clone(),
        })
    }

    /// Applies a relay outcome. Returns false when the response belongs to a
    /// session that has since been closed.
    pub fn resolve(&mut self, session: u64, outcome: Result<(), EnquiryError>) -> bool {
        if session != self.session || !self.state.is_sending() {
            info!("Dropping relay response for stale session {}", session);
            return false;
        }
        self.state = match outcome {
            Ok(()) => {
                info!("Enquiry delivered");
                SubmissionState::Success
            }
            Err(err) => {
                info!("Enquiry failed: {}", err);
                SubmissionState::Failed(err.user_message())
            }
        };
        true
    }

    /// Starts a new session so in-flight responses are ignored. The fields stay
    /// visible until the returned ticket is redeemed with [`EnquiryFlow::reset`].
    pub fn close(&mut self) -> ResetTicket {
        self.session += 1;
        self.reset_pending = true;
        self.dropdown = None;
        ResetTicket { session: self.session }
    }

    pub fn reset(&mut self, ticket: ResetTicket) -> bool {
        if ticket.session != self.session || !self.reset_pending {
            return false;
        }
        self.clear();
        true
    }

    /// A reopen that beats the reset timer still starts from an empty form.
    pub fn open(&mut self) {
        if self.reset_pending {
            self.clear();
        }
    }

    /// Closing hands back the ticket to redeem once `RESET_DELAY_MS` has passed.
    pub fn set_open(&mut self, open: bool) -> Option<ResetTicket> {
        if open {
            self.open();
            None
        } else {
            Some(self.close())
        }
    }

    fn clear(&mut self) {
        self.draft = EnquiryDraft::default();
        self.state = SubmissionState::Idle;
        self.dropdown = None;
        self.reset_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enquiry::draft::{BudgetRange, ServiceInterest};
    use crate::enquiry::relay::{NETWORK_ERROR, REJECTED_FALLBACK};

    fn filled() -> EnquiryFlow {
        let mut flow = EnquiryFlow::default();
        flow.edit(DraftEdit::Name("Jane".into()));
        flow.edit(DraftEdit::Email("jane@x.com".into()));
        flow.edit(DraftEdit::Service(ServiceInterest::FullService));
        flow
    }

    #[test]
    fn submit_is_gated_on_required_fields() {
        let cases = [
            vec![DraftEdit::Email("a@b.c".into()), DraftEdit::Service(ServiceInterest::Other)],
            vec![DraftEdit::Name("A".into()), DraftEdit::Service(ServiceInterest::Other)],
            vec![DraftEdit::Name("A".into()), DraftEdit::Email("a@b.c".into())],
            vec![],
        ];
        for edits in cases {
            let mut flow = EnquiryFlow::default();
            for edit in edits {
                flow.edit(edit);
            }
            assert!(!flow.can_submit());
            assert!(matches!(flow.submit(), Err(SubmitRejected::MissingFields(_))));
            assert_eq!(flow.state(), &SubmissionState::Idle);
        }
    }

    #[test]
    fn success_response_reaches_success() {
        let mut flow = filled();
        let submission = flow.submit().unwrap();
        assert_eq!(flow.state(), &SubmissionState::Sending);
        assert_eq!(submission.draft.name, "Jane");

        assert!(flow.resolve(submission.session, Ok(())));
        assert_eq!(flow.state(), &SubmissionState::Success);
        assert_eq!(flow.submit(), Err(SubmitRejected::AlreadySent));
    }

    #[test]
    fn rejection_surfaces_server_message_and_allows_retry() {
        let mut flow = filled();
        let submission = flow.submit().unwrap();
        flow.resolve(
            submission.session,
            Err(EnquiryError::Rejected(Some("Invalid key".into()))),
        );
        assert_eq!(flow.state().error(), Some("Invalid key"));
        assert!(flow.can_submit());

        let retry = flow.submit().unwrap();
        flow.resolve(retry.session, Err(EnquiryError::Rejected(None)));
        assert_eq!(flow.state().error(), Some(REJECTED_FALLBACK));
    }

    #[test]
    fn transport_failure_shows_network_message() {
        let mut flow = filled();
        let submission = flow.submit().unwrap();
        flow.resolve(submission.session, Err(EnquiryError::Transport("offline".into())));
        assert_eq!(flow.state().error(), Some(NETWORK_ERROR));
        assert!(flow.can_submit());
    }

    #[test]
    fn fields_lock_while_sending() {
        let mut flow = filled();
        flow.submit().unwrap();
        assert!(!flow.edit(DraftEdit::Name("Changed".into())));
        assert_eq!(flow.draft().name, "Jane");
        assert_eq!(flow.submit(), Err(SubmitRejected::InFlight));
    }

    #[test]
    fn close_then_reset_empties_the_draft() {
        let mut flow = filled();
        flow.edit(DraftEdit::Phone("123".into()));
        flow.edit(DraftEdit::Budget(BudgetRange::Above25k));

        let ticket = flow.close();
        assert_eq!(flow.draft().name, "Jane");
        assert!(flow.reset(ticket));
        assert!(flow.draft().is_empty());
        assert_eq!(flow.state(), &SubmissionState::Idle);
    }

    #[test]
    fn hiding_waits_for_the_fade_out_before_clearing() {
        assert_eq!(RESET_DELAY_MS, 400);

        let mut flow = filled();
        let ticket = flow.set_open(false).expect("closing yields a reset ticket");
        assert_eq!(flow.draft().name, "Jane");
        assert!(flow.reset(ticket));
        assert!(flow.draft().is_empty());

        flow.edit(DraftEdit::Name("Again".into()));
        assert_eq!(flow.set_open(true), None);
        assert_eq!(flow.draft().name, "Again");
    }

    #[test]
    fn reset_after_success_clears_confirmation() {
        let mut flow = filled();
        let submission = flow.submit().unwrap();
        flow.resolve(submission.session, Ok(()));
        let ticket = flow.close();
        flow.reset(ticket);
        assert_eq!(flow.state(), &SubmissionState::Idle);
        assert!(flow.draft().is_empty());
    }

    #[test]
    fn reopening_before_the_timer_still_starts_empty() {
        let mut flow = filled();
        let ticket = flow.close();
        flow.open();
        assert!(flow.draft().is_empty());
        assert!(!flow.reset(ticket));
    }

    #[test]
    fn superseded_reset_ticket_is_ignored() {
        let mut flow = filled();
        let first = flow.close();
        flow.open();
        flow.edit(DraftEdit::Name("Second".into()));
        let _second = flow.close();
        assert!(!flow.reset(first));
        assert_eq!(flow.draft().name, "Second");
    }

    #[test]
    fn response_after_close_is_dropped() {
        let mut flow = filled();
        let submission = flow.submit().unwrap();
        let ticket = flow.close();
        flow.reset(ticket);
        flow.open();

        assert!(!flow.resolve(submission.session, Ok(())));
        assert_eq!(flow.state(), &SubmissionState::Idle);
        assert!(flow.draft().is_empty());
    }

    #[test]
    fn dropdowns_are_mutually_exclusive() {
        let mut flow = EnquiryFlow::default();
        flow.toggle_dropdown(Dropdown::Budget);
        assert_eq!(flow.dropdown(), Some(Dropdown::Budget));
        flow.toggle_dropdown(Dropdown::Service);
        assert_eq!(flow.dropdown(), Some(Dropdown::Service));
        flow.edit(DraftEdit::Service(ServiceInterest::Branding));
        assert_eq!(flow.dropdown(), None);
        flow.toggle_dropdown(Dropdown::Budget);
        flow.toggle_dropdown(Dropdown::Budget);
        assert_eq!(flow.dropdown(), None);
    }
}
