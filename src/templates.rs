//! The forms this tool provisions.

use crate::models::template::{FieldSpec, FormTemplate};

const AUM_OPTIONS: &[&str] = &[
    "Under €100M",
    "€100M - €500M",
    "€500M - €1B",
    "€1B - €5B",
    "€5B+",
];

const DEALS_PER_YEAR_OPTIONS: &[&str] = &["1-10", "11-25", "26-50", "50+"];

const NEWSLETTER_CONSENT: &[&str] =
    &["I consent to receiving communications about Ralph and Beneficious products"];

const MEETING_SLOTS: &[&str] = &[
    "Monday Morning",
    "Monday Afternoon",
    "Tuesday Morning",
    "Tuesday Afternoon",
    "Wednesday Morning",
    "Wednesday Afternoon",
];

pub const DEMO_REQUEST: FormTemplate = FormTemplate {
    name: "demo_request",
    title: "Ralph - Private Beta Demo Request",
    document_title: Some("Ralph Demo Request Form"),
    description: Some(
        "Schedule a personalized demo to see how Ralph can transform your due diligence process. \
         We're currently partnering with select private equity firms for our private beta program.",
    ),
    fields: &[
        FieldSpec::short_text("Name", true),
        FieldSpec::short_text("Company", true),
        FieldSpec::short_text("Email", true),
        FieldSpec::short_text("Phone", false),
        FieldSpec::dropdown("Assets Under Management", false, AUM_OPTIONS),
        FieldSpec::dropdown("Deals Evaluated Annually", false, DEALS_PER_YEAR_OPTIONS),
        FieldSpec::paragraph("Specific Interest Areas", false).with_description(
            "Tell us about your current due diligence challenges or specific use cases",
        ),
    ],
};

/// Newsletter signup.
///
/// The description is set through the batch update. Sent with the create
/// request instead, the API drops it and the form ends up without one.
pub const NEWSLETTER: FormTemplate = FormTemplate {
    name: "newsletter",
    title: "Ralph - Newsletter Signup",
    document_title: Some("Ralph Newsletter"),
    description: Some(
        "Get the latest updates on Ralph and the future of AI-native private equity operations.",
    ),
    fields: &[
        FieldSpec::short_text("Email Address", true),
        FieldSpec::checkbox("Consent", true, NEWSLETTER_CONSENT),
    ],
};

/// Meeting requests for SuperReturn Berlin.
///
/// Like [`NEWSLETTER`], the description goes out in the batch update so that
/// the created form actually carries it.
pub const SUPERRETURN_MEETING: FormTemplate = FormTemplate {
    name: "superreturn_meeting",
    title: "Schedule Meeting at SuperReturn Berlin 2025",
    document_title: Some("SuperReturn Meeting Request"),
    description: Some(
        "Schedule a meeting with our team at SuperReturn International 2025 in Berlin to see \
         Ralph in action and discuss how autonomous intelligence can transform your due \
         diligence process.",
    ),
    fields: &[
        FieldSpec::short_text("Name", true),
        FieldSpec::short_text("Company", true),
        FieldSpec::short_text("Email", true),
        FieldSpec::short_text("Phone", false),
        FieldSpec::checkbox("Preferred Meeting Times", true, MEETING_SLOTS)
            .with_description("Please select your preferred time slots"),
        FieldSpec::paragraph("Meeting Focus", false)
            .with_description("What would you like to discuss?"),
    ],
};

/// Built-in templates in the order they are provisioned.
pub const BUILTIN: [&FormTemplate; 3] = [&DEMO_REQUEST, &NEWSLETTER, &SUPERRETURN_MEETING];
