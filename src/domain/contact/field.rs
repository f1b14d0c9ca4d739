// SPDX-License-Identifier: MPL-2.0
//! Contact form field model.

use serde::{Deserialize, Serialize};

/// Identifies one field of the contact form.
///
/// Declaration order is display order and submit-time validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Subject,
    Message,
    /// LGPD privacy-policy consent checkbox.
    Consent,
}

impl FieldId {
    /// All fields in display order.
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Subject,
        FieldId::Message,
        FieldId::Consent,
    ];

    /// Form control name, as posted by the page markup.
    #[must_use]
    pub fn form_name(self) -> &'static str {
        match self {
            FieldId::Name => "nome",
            FieldId::Email => "email",
            FieldId::Phone => "telefone",
            FieldId::Subject => "assunto",
            FieldId::Message => "mensagem",
            FieldId::Consent => "lgpd",
        }
    }

    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Name | FieldId::Email | FieldId::Phone => FieldKind::Text,
            FieldId::Subject => FieldKind::Select,
            FieldId::Message => FieldKind::TextArea,
            FieldId::Consent => FieldKind::Checkbox,
        }
    }

    /// i18n key of the field label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            FieldId::Name => "contact-field-name",
            FieldId::Email => "contact-field-email",
            FieldId::Phone => "contact-field-phone",
            FieldId::Subject => "contact-field-subject",
            FieldId::Message => "contact-field-message",
            FieldId::Consent => "contact-field-consent",
        }
    }
}

/// Kind of control backing a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Select,
    Checkbox,
}

/// Raw input of a field as currently entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Checkbox(bool),
}

impl FieldInput {
    /// Empty input for a field of the given kind.
    #[must_use]
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Checkbox => FieldInput::Checkbox(false),
            FieldKind::Text | FieldKind::TextArea | FieldKind::Select => {
                FieldInput::Text(String::new())
            }
        }
    }

    /// Text value; checkboxes report `"on"` when checked, like a posted form.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            FieldInput::Text(value) => value,
            FieldInput::Checkbox(true) => "on",
            FieldInput::Checkbox(false) => "",
        }
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        matches!(self, FieldInput::Checkbox(true))
    }
}

/// Declaration of one field in a form schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub required: bool,
}

impl FieldSpec {
    #[must_use]
    pub fn required(id: FieldId) -> Self {
        Self { id, required: true }
    }

    #[must_use]
    pub fn optional(id: FieldId) -> Self {
        Self {
            id,
            required: false,
        }
    }
}

/// Ordered list of fields making up a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Builds a schema, keeping the first declaration of any duplicated field.
    #[must_use]
    pub fn new(fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        let mut unique: Vec<FieldSpec> = Vec::new();
        for spec in fields {
            if !unique.iter().any(|existing| existing.id == spec.id) {
                unique.push(spec);
            }
        }
        Self { fields: unique }
    }

    /// Every field in display order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    #[must_use]
    pub fn spec(&self, id: FieldId) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: FieldId) -> bool {
        self.spec(id).is_some()
    }
}

impl Default for FormSchema {
    /// The landing page form: every field is required.
    fn default() -> Self {
        Self::new(FieldId::ALL.into_iter().map(FieldSpec::required))
    }
}
