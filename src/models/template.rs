use crate::models::form::{
    ChoiceOption, ChoiceQuestion, ChoiceType, Item, Question, QuestionItem, QuestionKind,
    TextQuestion,
};

/// Static definition of one form: its metadata and its questions in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTemplate {
    /// Key of this form in the provisioning result file
    pub name: &'static str,
    pub title: &'static str,
    pub document_title: Option<&'static str>,
    pub description: Option<&'static str>,
    pub fields: &'static [FieldSpec],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub required: bool,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text { multiline: bool },
    Choice {
        mode: ChoiceMode,
        options: &'static [&'static str],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMode {
    Dropdown,
    Checkbox,
}

impl FieldSpec {
    /// Single line text answer
    pub const fn short_text(title: &'static str, required: bool) -> Self {
        Self {
            title,
            description: None,
            required,
            kind: FieldKind::Text { multiline: false },
        }
    }

    /// Multi-line text answer
    pub const fn paragraph(title: &'static str, required: bool) -> Self {
        Self {
            title,
            description: None,
            required,
            kind: FieldKind::Text { multiline: true },
        }
    }

    pub const fn dropdown(
        title: &'static str,
        required: bool,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            title,
            description: None,
            required,
            kind: FieldKind::Choice {
                mode: ChoiceMode::Dropdown,
                options,
            },
        }
    }

    pub const fn checkbox(
        title: &'static str,
        required: bool,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            title,
            description: None,
            required,
            kind: FieldKind::Choice {
                mode: ChoiceMode::Checkbox,
                options,
            },
        }
    }

    pub const fn with_description(self, description: &'static str) -> Self {
        Self {
            description: Some(description),
            ..self
        }
    }

    /// Build the API item for this field.
    pub fn to_item(&self) -> Item {
        let kind = match self.kind {
            FieldKind::Text { multiline } => QuestionKind::TextQuestion(TextQuestion {
                paragraph: multiline,
            }),
            FieldKind::Choice { mode, options } => QuestionKind::ChoiceQuestion(ChoiceQuestion {
                choice_type: mode.into(),
                options: options
                    .iter()
                    .map(|value| ChoiceOption {
                        value: value.to_string(),
                    })
                    .collect(),
            }),
        };

        Item {
            title: self.title.to_string(),
            description: self.description.map(str::to_string),
            question_item: QuestionItem {
                question: Question {
                    required: self.required,
                    kind,
                },
            },
        }
    }
}

impl From<ChoiceMode> for ChoiceType {
    fn from(mode: ChoiceMode) -> Self {
        match mode {
            ChoiceMode::Dropdown => ChoiceType::DropDown,
            ChoiceMode::Checkbox => ChoiceType::Checkbox,
        }
    }
}
