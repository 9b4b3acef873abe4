use gloo_net::http::Request;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SiteConfig;
use crate::enquiry::draft::EnquiryDraft;

pub const NOT_PROVIDED: &str = "Not provided";
pub const REJECTED_FALLBACK: &str = "Something went wrong. Please try again.";
pub const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnquiryError {
    /// The relay answered but refused the enquiry.
    #[error("relay rejected the enquiry: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unreadable relay response: {0}")]
    Decode(String),
}

impl EnquiryError {
    /// Text shown in the modal's inline error region.
    pub fn user_message(&self) -> String {
        match self {
            EnquiryError::Rejected(Some(message)) if !message.trim().is_empty() => message.clone(),
            EnquiryError::Rejected(_) => REJECTED_FALLBACK.to_string(),
            EnquiryError::Transport(_) | EnquiryError::Decode(_) => NETWORK_ERROR.to_string(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct RelayRequest {
    access_key: String,
    subject: String,
    from_name: String,
    name: String,
    email: String,
    phone: String,
    budget: String,
    service: String,
}

impl RelayRequest {
    pub fn new(config: &SiteConfig, draft: &EnquiryDraft) -> Self {
        let name = draft.name.trim().to_string();
        let phone = draft.phone.trim();
        Self {
            access_key: config.access_key.clone(),
            subject: format!("New Enquiry from {}", name),
            from_name: config.from_name.clone(),
            email: draft.email.trim().to_string(),
            phone: if phone.is_empty() { NOT_PROVIDED.to_string() } else { phone.to_string() },
            budget: draft.budget.map_or(NOT_PROVIDED, |b| b.label()).to_string(),
            service: draft.service.map(|s| s.label()).unwrap_or_default().to_string(),
            name,
        }
    }
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn into_result(self) -> Result<(), EnquiryError> {
        if self.success {
            Ok(())
        } else {
            Err(EnquiryError::Rejected(self.message))
        }
    }
}

/// Posts one enquiry. The relay reports application failures in the body, often
/// alongside a non-2xx status, so the body decides the outcome either way.
pub async fn send_enquiry(config: &SiteConfig, draft: &EnquiryDraft) -> Result<(), EnquiryError> {
    let payload = RelayRequest::new(config, draft);

    let response = Request::post(&config.relay_url)
        .header("Accept", "application/json")
        .json(&payload)
        .map_err(|e| EnquiryError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            warn!("Enquiry request did not complete: {}", e);
            EnquiryError::Transport(e.to_string())
        })?;

    info!("Relay answered with status {}", response.status());

    let body = response.json::<RelayResponse>().await.map_err(|e| {
        warn!("Relay response was not JSON: {}", e);
        EnquiryError::Decode(e.to_string())
    })?;

    body.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enquiry::draft::{BudgetRange, DraftEdit, ServiceInterest};
    use serde_json::json;

    fn config() -> SiteConfig {
        SiteConfig {
            access_key: "test-key".into(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn payload_substitutes_missing_optionals() {
        let mut draft = EnquiryDraft::default();
        draft.apply(DraftEdit::Name("Jane".into()));
        draft.apply(DraftEdit::Email("jane@x.com".into()));
        draft.apply(DraftEdit::Service(ServiceInterest::FullService));

        let body = serde_json::to_value(RelayRequest::new(&config(), &draft)).unwrap();
        assert_eq!(
            body,
            json!({
                "access_key": "test-key",
                "subject": "New Enquiry from Jane",
                "from_name": "ELVERA Solutions Website",
                "name": "Jane",
                "email": "jane@x.com",
                "phone": "Not provided",
                "budget": "Not provided",
                "service": "Full service",
            })
        );
    }

    #[test]
    fn payload_carries_optional_fields_when_given() {
        let mut draft = EnquiryDraft::default();
        draft.apply(DraftEdit::Name(" Omar ".into()));
        draft.apply(DraftEdit::Email("omar@example.ae".into()));
        draft.apply(DraftEdit::Phone("+971 50 000 0000".into()));
        draft.apply(DraftEdit::Budget(BudgetRange::UpTo10k));
        draft.apply(DraftEdit::Service(ServiceInterest::Media));

        let body = serde_json::to_value(RelayRequest::new(&config(), &draft)).unwrap();
        assert_eq!(body["subject"], "New Enquiry from Omar");
        assert_eq!(body["phone"], "+971 50 000 0000");
        assert_eq!(body["budget"], "$5,000 - $10,000");
        assert_eq!(body["service"], "Media Services");
    }

    #[test]
    fn success_response_ignores_message() {
        let response: RelayResponse =
            serde_json::from_str(r#"{"success": true, "message": "Email sent"}"#).unwrap();
        assert_eq!(response.into_result(), Ok(()));
    }

    #[test]
    fn rejection_keeps_server_message() {
        let response: RelayResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid key"}"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.user_message(), "Invalid key");
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let response: RelayResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.user_message(), REJECTED_FALLBACK);
        assert_eq!(
            EnquiryError::Rejected(Some("  ".into())).user_message(),
            REJECTED_FALLBACK
        );
    }

    #[test]
    fn transport_class_errors_share_the_network_message() {
        assert_eq!(EnquiryError::Transport("offline".into()).user_message(), NETWORK_ERROR);
        assert_eq!(EnquiryError::Decode("expected value".into()).user_message(), NETWORK_ERROR);
    }
}
