/// What a lead says they need help with. Required on every enquiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceInterest {
    Branding,
    SocialMedia,
    MarketingAdvertising,
    Media,
    FullService,
    ItIntegration,
    Other,
}

impl ServiceInterest {
    pub const ALL: [ServiceInterest; 7] = [
        ServiceInterest::Branding,
        ServiceInterest::SocialMedia,
        ServiceInterest::MarketingAdvertising,
        ServiceInterest::Media,
        ServiceInterest::FullService,
        ServiceInterest::ItIntegration,
        ServiceInterest::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceInterest::Branding => "Branding Services",
            ServiceInterest::SocialMedia => "Social Media Management",
            ServiceInterest::MarketingAdvertising => "Marketing & Advertisement",
            ServiceInterest::Media => "Media Services",
            ServiceInterest::FullService => "Full service",
            ServiceInterest::ItIntegration => "IT & Integration",
            ServiceInterest::Other => "Other",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetRange {
    UpTo3k,
    UpTo5k,
    UpTo10k,
    UpTo25k,
    Above25k,
    Undecided,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 6] = [
        BudgetRange::UpTo3k,
        BudgetRange::UpTo5k,
        BudgetRange::UpTo10k,
        BudgetRange::UpTo25k,
        BudgetRange::Above25k,
        BudgetRange::Undecided,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BudgetRange::UpTo3k => "$1,000 - $3,000",
            BudgetRange::UpTo5k => "$3,000 - $5,000",
            BudgetRange::UpTo10k => "$5,000 - $10,000",
            BudgetRange::UpTo25k => "$10,000 - $25,000",
            BudgetRange::Above25k => "$25,000+",
            BudgetRange::Undecided => "Not sure yet",
        }
    }
}

/// Fields the form refuses to submit without.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Service,
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RequiredField::Name => "name",
            RequiredField::Email => "email",
            RequiredField::Service => "service",
        };
        f.write_str(name)
    }
}

/// A single user edit, as emitted by the form inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum DraftEdit {
    Name(String),
    Email(String),
    Phone(String),
    Budget(BudgetRange),
    Service(ServiceInterest),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnquiryDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub budget: Option<BudgetRange>,
    pub service: Option<ServiceInterest>,
}

impl EnquiryDraft {
    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Name(value) => self.name = value,
            DraftEdit::Email(value) => self.email = value,
            DraftEdit::Phone(value) => self.phone = value,
            DraftEdit::Budget(value) => self.budget = Some(value),
            DraftEdit::Service(value) => self.service = Some(value),
        }
    }

    pub fn missing_required(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(RequiredField::Name);
        }
        if self.email.trim().is_empty() {
            missing.push(RequiredField::Email);
        }
        if self.service.is_none() {
            missing.push(RequiredField::Service);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        *self == EnquiryDraft::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_unique() {
        let services: HashSet<_> = ServiceInterest::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(services.len(), 7);

        let budgets: HashSet<_> = BudgetRange::ALL.iter().map(|b| b.label()).collect();
        assert_eq!(budgets.len(), 6);
    }

    #[test]
    fn empty_draft_misses_every_required_field() {
        let draft = EnquiryDraft::default();
        assert_eq!(
            draft.missing_required(),
            vec![RequiredField::Name, RequiredField::Email, RequiredField::Service]
        );
        assert!(draft.is_empty());
    }

    #[test]
    fn whitespace_name_counts_as_missing() {
        let mut draft = EnquiryDraft::default();
        draft.apply(DraftEdit::Name("   ".into()));
        draft.apply(DraftEdit::Email("jane@x.com".into()));
        draft.apply(DraftEdit::Service(ServiceInterest::FullService));
        assert_eq!(draft.missing_required(), vec![RequiredField::Name]);
    }

    #[test]
    fn optional_fields_do_not_gate_completion() {
        let mut draft = EnquiryDraft::default();
        draft.apply(DraftEdit::Name("Jane".into()));
        draft.apply(DraftEdit::Email("jane@x.com".into()));
        draft.apply(DraftEdit::Service(ServiceInterest::Media));
        assert!(draft.is_complete());
        assert!(draft.budget.is_none());
        assert!(draft.phone.is_empty());
    }
}
