use serde::{Deserialize, Serialize};

/// A form created by this run, with the URLs used to share and embed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionedForm {
    pub form_id: String,
    pub embed_url: String,
    pub direct_url: String,
}

impl ProvisionedForm {
    pub fn from_form_id(form_id: impl Into<String>) -> Self {
        let form_id = form_id.into();
        Self {
            embed_url: embed_url(&form_id),
            direct_url: direct_url(&form_id),
            form_id,
        }
    }
}

pub fn embed_url(form_id: &str) -> String {
    format!(
        "https://docs.google.com/forms/d/e/{}/viewform?embedded=true",
        form_id
    )
}

pub fn direct_url(form_id: &str) -> String {
    format!("https://docs.google.com/forms/d/{}/viewform", form_id)
}

/// Everything one run produced, keyed by template name.
///
/// Field names are the keys of the output file and must match
/// [`FormTemplate::name`](crate::models::template::FormTemplate) of the built-in templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvisioningResult {
    pub demo_request: ProvisionedForm,
    pub newsletter: ProvisionedForm,
    pub superreturn_meeting: ProvisionedForm,
}

impl ProvisioningResult {
    /// Entries in provisioning order.
    pub fn entries(&self) -> [(&'static str, &ProvisionedForm); 3] {
        [
            ("demo_request", &self.demo_request),
            ("newsletter", &self.newsletter),
            ("superreturn_meeting", &self.superreturn_meeting),
        ]
    }
}
