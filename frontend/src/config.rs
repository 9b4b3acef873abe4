use log::warn;

const DEFAULT_RELAY_URL: &str = "https://api.web3forms.com/submit";
const DEFAULT_FROM_NAME: &str = "ELVERA Solutions Website";
const DEFAULT_CALENDAR_URL: &str = "https://calendar.app.google/Poua2ktxjMeBeCJx8";
const DEFAULT_CONTACT_EMAIL: &str = "hello@elverasolutions.com";

/// Deployment settings baked in at build time.
///
/// Trunk forwards the build environment to rustc, so `ELVERA_ACCESS_KEY=... trunk build`
/// is enough to point a deployment at its own relay key.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub relay_url: String,
    pub access_key: String,
    pub from_name: String,
    pub calendar_url: String,
    pub contact_email: String,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("ELVERA_RELAY_URL"),
            option_env!("ELVERA_ACCESS_KEY"),
            option_env!("ELVERA_FROM_NAME"),
            option_env!("ELVERA_CALENDAR_URL"),
            option_env!("ELVERA_CONTACT_EMAIL"),
        )
    }

    fn from_values(
        relay_url: Option<&str>,
        access_key: Option<&str>,
        from_name: Option<&str>,
        calendar_url: Option<&str>,
        contact_email: Option<&str>,
    ) -> Self {
        let pick = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            relay_url: pick(relay_url, DEFAULT_RELAY_URL),
            access_key: pick(access_key, ""),
            from_name: pick(from_name, DEFAULT_FROM_NAME),
            calendar_url: pick(calendar_url, DEFAULT_CALENDAR_URL),
            contact_email: pick(contact_email, DEFAULT_CONTACT_EMAIL),
        }
    }

    pub fn has_access_key(&self) -> bool {
        !self.access_key.is_empty()
    }

    /// Logs the settings a deployment is most likely to get wrong.
    pub fn report(&self) {
        if !self.has_access_key() {
            warn!("ELVERA_ACCESS_KEY was not set at build time, the relay will reject enquiries");
        }
    }

    pub fn mailto_link(&self, subject: &str) -> String {
        format!(
            "mailto:{}?subject={}",
            self.contact_email,
            urlencoding::encode(subject)
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = SiteConfig::from_values(Some("  "), None, Some(""), None, None);
        assert_eq!(config.relay_url, DEFAULT_RELAY_URL);
        assert_eq!(config.from_name, DEFAULT_FROM_NAME);
        assert_eq!(config.calendar_url, DEFAULT_CALENDAR_URL);
        assert!(!config.has_access_key());
    }

    #[test]
    fn provided_values_win() {
        let config = SiteConfig::from_values(
            Some("https://relay.test/submit"),
            Some(" key-123 "),
            None,
            None,
            Some("team@example.com"),
        );
        assert_eq!(config.relay_url, "https://relay.test/submit");
        assert_eq!(config.access_key, "key-123");
        assert_eq!(config.contact_email, "team@example.com");
        assert!(config.has_access_key());
    }

    #[test]
    fn mailto_subject_is_encoded() {
        let config = SiteConfig::default();
        assert_eq!(
            config.mailto_link("Project enquiry & brief"),
            "mailto:hello@elverasolutions.com?subject=Project%20enquiry%20%26%20brief"
        );
    }
}
