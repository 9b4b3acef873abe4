use crate::content::model::{Block, Clause, LegalDocument};

use Block::{List, Paragraph};

pub const PRIVACY_POLICY: LegalDocument = LegalDocument {
    title: "Privacy",
    highlight: "Policy",
    effective: "Effective Date: February 2026",
    clauses: &[
        Clause {
            heading: "1. Scope of Application",
            blocks: &[
                Paragraph("This Privacy Policy explains how Elvera Solutions LLC collects, processes, stores and protects personal data in accordance with the United Arab Emirates Personal Data Protection Law (UAE PDPL). It applies to personal data processed in connection with:"),
                List(&[
                    "Website usage",
                    "Inquiries and communications",
                    "Client onboarding and service delivery",
                    "Marketing and business operations",
                ]),
            ],
        },
        Clause {
            heading: "2. Responsible Entity",
            blocks: &[Paragraph("Elvera Solutions LLC, United Arab Emirates. Privacy-related matters can be sent to contact@elverasolutions.com.")],
        },
        Clause {
            heading: "3. Personal Data Processed",
            blocks: &[
                List(&[
                    "First and last name",
                    "Email address",
                    "Phone number",
                    "Company name and job title",
                    "Billing address",
                    "IP address, website usage and analytics data",
                ]),
                Paragraph("Payment-related data is not stored by Elvera Solutions."),
            ],
        },
        Clause {
            heading: "4. Purpose of Data Processing",
            blocks: &[List(&[
                "Responding to inquiries and communication requests",
                "Providing and managing contracted services",
                "Administrative and invoicing purposes",
                "Marketing communications, subject to explicit consent",
                "Compliance with applicable UAE legal obligations",
            ])],
        },
        Clause {
            heading: "5. Marketing Communications",
            blocks: &[Paragraph("Marketing and promotional communications are sent only after explicit opt-in consent has been obtained. Consent can be withdrawn at any time by contacting contact@elverasolutions.com.")],
        },
        Clause {
            heading: "6. Data Sharing and Disclosure",
            blocks: &[Paragraph("Personal data is not sold, rented, or commercially disclosed. It is disclosed to third parties only where required to fulfil contractual obligations or comply with UAE law.")],
        },
        Clause {
            heading: "7. Data Storage and Retention",
            blocks: &[Paragraph("Personal data is stored and processed within the United Arab Emirates and retained only for as long as the purpose of processing requires, unless UAE law requires longer retention.")],
        },
        Clause {
            heading: "8. Rights of Data Subjects",
            blocks: &[
                List(&[
                    "Request deletion of personal data",
                    "Object to or restrict data processing",
                    "Withdraw consent at any time",
                    "Request access to personal data in a portable format",
                ]),
                Paragraph("Requests must be submitted in writing to contact@elverasolutions.com."),
            ],
        },
        Clause {
            heading: "9. Data Security",
            blocks: &[Paragraph("Elvera Solutions applies appropriate technical and organisational measures to safeguard personal data, including SSL/HTTPS encryption and access restricted to authorised personnel.")],
        },
        Clause {
            heading: "10. Amendments and Contact",
            blocks: &[Paragraph("This policy may be updated from time to time. The current version is always published on this website. Questions can be sent to contact@elverasolutions.com.")],
        },
    ],
};

pub const TERMS_OF_SERVICE: LegalDocument = LegalDocument {
    title: "Terms of",
    highlight: "Service",
    effective: "Effective Date: February 2026",
    clauses: &[
        Clause {
            heading: "Important Notice",
            blocks: &[Paragraph("By accessing www.elverasolutions.com or entering into a service agreement with Elvera Solutions LLC, you confirm that you have read, understood, and agree to be bound by these Terms and Conditions. If you do not agree, discontinue use of the website and services.")],
        },
        Clause {
            heading: "1. About Us",
            blocks: &[Paragraph("Elvera Solutions LLC is a Limited Liability Company registered and licensed under Sharjah Media City Free Zone (Shams), Government of Sharjah, United Arab Emirates.")],
        },
        Clause {
            heading: "2. Services",
            blocks: &[Paragraph("The scope, deliverables, timelines, and fees of each engagement are set out in a separate Service Agreement, Proposal, or Statement of Work. Results from marketing campaigns are not guaranteed and vary with market conditions, platform algorithms and competition.")],
        },
        Clause {
            heading: "3. Client Responsibilities",
            blocks: &[List(&[
                "Provide accurate, complete, and timely information",
                "Review and approve work within agreed timeframes",
                "Own or hold the right to use all materials supplied",
                "Make payments in accordance with agreed terms",
            ])],
        },
        Clause {
            heading: "4. Fees and Payment",
            blocks: &[Paragraph("Unless agreed otherwise in writing, a deposit is due when a project starts and the balance before final delivery. Fees for work already commenced or delivered are non-refundable.")],
        },
        Clause {
            heading: "5. Intellectual Property",
            blocks: &[Paragraph("Rights in deliverables created for the Client transfer on receipt of full payment. Pre-existing methodologies, tools and templates remain the property of Elvera Solutions. Completed work may be featured in our portfolio unless a confidentiality agreement applies.")],
        },
        Clause {
            heading: "6. Confidentiality",
            blocks: &[Paragraph("Both parties treat non-public information shared during an engagement as confidential. This obligation survives termination.")],
        },
        Clause {
            heading: "7. Limitation of Liability",
            blocks: &[Paragraph("To the fullest extent permitted by law, total liability in connection with any engagement shall not exceed the fees paid in the three months preceding the claim.")],
        },
        Clause {
            heading: "8. Termination",
            blocks: &[Paragraph("Either party may end an engagement in writing. Fees for work completed up to termination remain payable, and deliverables stay with Elvera Solutions until paid in full.")],
        },
        Clause {
            heading: "9. Governing Law",
            blocks: &[Paragraph("These terms are governed by the laws of the United Arab Emirates as applicable to Sharjah Media City Free Zone entities. Disputes are first addressed through good-faith negotiation for 30 days.")],
        },
        Clause {
            heading: "10. Contact Us",
            blocks: &[Paragraph("Questions about these terms can be sent to contact@elverasolutions.com.")],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_have_content() {
        for doc in [PRIVACY_POLICY, TERMS_OF_SERVICE] {
            assert!(!doc.clauses.is_empty());
            assert!(doc.clauses.iter().all(|c| !c.blocks.is_empty()), "{}", doc.title);
        }
    }
}
