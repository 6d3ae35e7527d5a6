//! Request and response bodies of the Google Forms REST API (v1).
//!
//! Only the parts of the API this crate sends or reads are modelled.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /v1/forms`. The API ignores everything but the title fields here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFormRequest {
    pub info: Info,
}

// Form resource as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub form_id: String,
    #[serde(default)]
    pub info: Option<Info>,
    #[serde(default)]
    pub responder_uri: Option<String>,
}

/// Body of `POST /v1/forms/{formId}:batchUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchUpdateFormRequest {
    pub requests: Vec<Request>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchUpdateFormResponse {
    #[serde(default)]
    pub replies: Vec<serde_json::Value>,
}

/// One operation inside a batch update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    UpdateFormInfo(UpdateFormInfoRequest),
    CreateItem(CreateItemRequest),
}

impl Request {
    /// Sets the form description and nothing else.
    pub fn set_description(description: &str) -> Self {
        Request::UpdateFormInfo(UpdateFormInfoRequest {
            info: Info {
                description: Some(description.to_string()),
                ..Info::default()
            },
            update_mask: "description".to_string(),
        })
    }

    pub fn insert_item(index: u32, item: Item) -> Self {
        Request::CreateItem(CreateItemRequest {
            item,
            location: Location { index },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFormInfoRequest {
    pub info: Info,
    pub update_mask: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub item: Item,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub question_item: QuestionItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub question: Question,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub required: bool,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKind {
    TextQuestion(TextQuestion),
    ChoiceQuestion(ChoiceQuestion),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextQuestion {
    pub paragraph: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    #[serde(rename = "type")]
    pub choice_type: ChoiceType,
    pub options: Vec<ChoiceOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceType {
    #[serde(rename = "CHECKBOX")]
    Checkbox,
    #[serde(rename = "DROP_DOWN")]
    DropDown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
}

/// Error envelope used by Google APIs for non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct GoogleErrorEnvelope {
    pub error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct GoogleErrorBody {
    #[serde(default)]
    pub message: String,
}
