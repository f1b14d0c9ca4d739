// SPDX-License-Identifier: MPL-2.0
//! Contact form engine: values, per-field decoration and the submit protocol.
//!
//! Everything here is independent of the widget toolkit. The view reads
//! decorations and the submission flag; the application forwards input
//! events and submission results.

use crate::application::port::{ContactPayload, SubmitError};
use crate::domain::contact::{
    format_phone, validate, FieldId, FieldInput, FieldKind, FieldValidation, FormSchema,
    ValidationError,
};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{NotificationCenter, NotificationId};
use std::collections::BTreeMap;
use std::time::Instant;

/// Visual state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoration {
    #[default]
    Untouched,
    /// Success indicator shown.
    Valid,
    /// Error indicator and message shown.
    Invalid(ValidationError),
}

impl Decoration {
    #[must_use]
    pub fn error(self) -> Option<ValidationError> {
        match self {
            Decoration::Invalid(error) => Some(error),
            Decoration::Untouched | Decoration::Valid => None,
        }
    }
}

/// What caused a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Live input. Failures are not shown.
    Typing,
    /// The field lost focus.
    Blur,
    Submit,
}

/// Result of [`ContactForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight; nothing happened.
    Busy,
    /// At least one field failed; focus moves to the first one.
    Rejected { first_invalid: FieldId },
    /// Every field passed. The caller hands the payload to the submitter
    /// and reports back through [`ContactForm::complete`].
    Accepted(ContactPayload),
}

/// An in-flight submission. Exists only between an accepted submit and
/// the matching [`ContactForm::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    started_at: Instant,
    payload: ContactPayload,
}

impl Submission {
    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    #[must_use]
    pub fn payload(&self) -> &ContactPayload {
        &self.payload
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldState {
    input: FieldInput,
    decoration: Decoration,
}

impl FieldState {
    fn empty(id: FieldId) -> Self {
        Self {
            input: FieldInput::empty(id.kind()),
            decoration: Decoration::Untouched,
        }
    }
}

/// The contact form.
#[derive(Debug, Clone)]
pub struct ContactForm {
    schema: FormSchema,
    fields: BTreeMap<FieldId, FieldState>,
    focused: Option<FieldId>,
    /// Field the view should scroll to and focus, set by a rejected submit.
    focus_request: Option<FieldId>,
    submission: Option<Submission>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(FormSchema::default())
    }
}

impl ContactForm {
    #[must_use]
    pub fn new(schema: FormSchema) -> Self {
        let fields = schema
            .fields()
            .map(|spec| (spec.id, FieldState::empty(spec.id)))
            .collect();
        Self {
            schema,
            fields,
            focused: None,
            focus_request: None,
            submission: None,
        }
    }

    #[must_use]
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Current input of `id`, or `None` when the form has no such field.
    #[must_use]
    pub fn input(&self, id: FieldId) -> Option<&FieldInput> {
        self.fields.get(&id).map(|field| &field.input)
    }

    /// Text value of `id` (`""` for unknown fields).
    #[must_use]
    pub fn text(&self, id: FieldId) -> &str {
        self.input(id).map_or("", FieldInput::as_text)
    }

    #[must_use]
    pub fn is_checked(&self, id: FieldId) -> bool {
        self.input(id).is_some_and(FieldInput::is_checked)
    }

    #[must_use]
    pub fn decoration(&self, id: FieldId) -> Decoration {
        self.fields
            .get(&id)
            .map_or(Decoration::Untouched, |field| field.decoration)
    }

    #[must_use]
    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submission.is_some()
    }

    #[must_use]
    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// i18n key of the submit control label.
    #[must_use]
    pub fn submit_label_key(&self) -> &'static str {
        if self.is_submitting() {
            "contact-submitting"
        } else {
            "contact-submit"
        }
    }

    /// Takes the pending focus request, if any.
    pub fn take_focus_request(&mut self) -> Option<FieldId> {
        self.focus_request.take()
    }

    /// Stores typed text and re-validates live.
    ///
    /// The phone field is masked as it is typed. The message area only
    /// clears its decoration while typing; it is validated on blur and
    /// submit. Ignored while a submission is in flight.
    pub fn set_text(&mut self, id: FieldId, raw: &str) -> Option<FieldValidation> {
        if self.is_submitting() {
            return None;
        }
        self.focus(id);

        let value = if id == FieldId::Phone {
            format_phone(raw)
        } else {
            raw.to_owned()
        };
        let field = self.fields.get_mut(&id)?;
        field.input = FieldInput::Text(value);

        if id.kind() == FieldKind::TextArea {
            field.decoration = Decoration::Untouched;
            return None;
        }
        self.validate_field(id, Trigger::Typing)
    }

    /// Picks a select option; a selection counts as leaving the field.
    pub fn select(&mut self, id: FieldId, value: &str) -> Option<FieldValidation> {
        if self.is_submitting() {
            return None;
        }
        self.focus(id);
        self.fields.get_mut(&id)?.input = FieldInput::Text(value.to_owned());
        self.validate_field(id, Trigger::Blur)
    }

    pub fn set_checked(&mut self, id: FieldId, checked: bool) -> Option<FieldValidation> {
        if self.is_submitting() {
            return None;
        }
        self.focus(id);
        self.fields.get_mut(&id)?.input = FieldInput::Checkbox(checked);
        self.validate_field(id, Trigger::Typing)
    }

    /// Moves focus to `id`, blurring the previously focused field.
    pub fn focus(&mut self, id: FieldId) {
        if self.focused == Some(id) {
            return;
        }
        if let Some(previous) = self.focused.replace(id) {
            self.validate_field(previous, Trigger::Blur);
        }
    }

    /// The focused field lost focus without another one gaining it.
    pub fn blur(&mut self) {
        if let Some(previous) = self.focused.take() {
            self.validate_field(previous, Trigger::Blur);
        }
    }

    /// Validates one field and updates its decoration.
    ///
    /// The decoration is cleared first. An unchecked consent box is shown
    /// as invalid for every trigger; otherwise typing only ever promotes a
    /// field to valid.
    pub fn validate_field(&mut self, id: FieldId, trigger: Trigger) -> Option<FieldValidation> {
        let spec = *self.schema.spec(id)?;
        let field = self.fields.get_mut(&id)?;
        field.decoration = Decoration::Untouched;

        let result = validate(&spec, &field.input);
        field.decoration = match (result.error, trigger) {
            (None, _) => Decoration::Valid,
            (Some(ValidationError::ConsentRequired), _) => {
                Decoration::Invalid(ValidationError::ConsentRequired)
            }
            (Some(_), Trigger::Typing) => Decoration::Untouched,
            (Some(error), Trigger::Blur | Trigger::Submit) => Decoration::Invalid(error),
        };
        Some(result)
    }

    /// Validates every field in schema order and, when all pass, starts a
    /// submission.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Busy;
        }
        self.focused = None;

        let ids: Vec<FieldId> = self.schema.fields().map(|spec| spec.id).collect();
        let mut first_invalid = None;
        for id in ids {
            let failed = self
                .validate_field(id, Trigger::Submit)
                .is_some_and(|result| !result.is_valid());
            if failed && first_invalid.is_none() {
                first_invalid = Some(id);
            }
        }

        if let Some(first_invalid) = first_invalid {
            self.focus_request = Some(first_invalid);
            return SubmitOutcome::Rejected { first_invalid };
        }

        let payload = self.payload();
        self.submission = Some(Submission {
            started_at: now,
            payload: payload.clone(),
        });
        SubmitOutcome::Accepted(payload)
    }

    /// Ends the in-flight submission and reports the outcome.
    ///
    /// Success greets the sender by first name and resets the form; failure
    /// keeps the values for a retry. Returns the id of the toast shown, or
    /// `None` when nothing was in flight.
    pub fn complete(
        &mut self,
        now: Instant,
        result: Result<(), SubmitError>,
        notifications: &mut NotificationCenter,
        i18n: &I18n,
    ) -> Option<NotificationId> {
        let submission = self.submission.take()?;

        match result {
            Ok(()) => {
                let message = i18n.tr_with_args(
                    "contact-success-message",
                    &[("name", submission.payload.first_name())],
                );
                let title = i18n.tr("contact-success-title");
                self.reset();
                notifications.success(now, message, Some(&title))
            }
            Err(error) => notifications.error(now, i18n.tr(error.i18n_key()), None),
        }
    }

    /// Empties every field and clears every decoration.
    pub fn reset(&mut self) {
        for (id, field) in &mut self.fields {
            *field = FieldState::empty(*id);
        }
        self.focused = None;
        self.focus_request = None;
    }

    fn payload(&self) -> ContactPayload {
        let trimmed = |id| self.text(id).trim().to_owned();
        ContactPayload {
            name: trimmed(FieldId::Name),
            email: trimmed(FieldId::Email),
            phone: trimmed(FieldId::Phone),
            subject: trimmed(FieldId::Subject),
            message: trimmed(FieldId::Message),
            consent: self.is_checked(FieldId::Consent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::FieldSpec;
    use crate::ui::notifications::{Notification, Severity};

    fn pt_br() -> I18n {
        I18n::new(Some("pt-BR".into()), &crate::config::Config::default())
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_text(FieldId::Name, "Maria Silva");
        form.set_text(FieldId::Email, "maria@example.com");
        form.set_text(FieldId::Phone, "11999998888");
        form.select(FieldId::Subject, "civil");
        form.set_text(FieldId::Message, "Preciso de uma consulta sobre contrato.");
        form.set_checked(FieldId::Consent, true);
        form
    }

    #[test]
    fn new_form_is_untouched() {
        let form = ContactForm::default();
        for id in FieldId::ALL {
            assert_eq!(form.decoration(id), Decoration::Untouched);
        }
        assert!(!form.is_submitting());
        assert_eq!(form.submit_label_key(), "contact-submit");
    }

    #[test]
    fn phone_is_masked_while_typing() {
        let mut form = ContactForm::default();
        form.set_text(FieldId::Phone, "11999998888");
        assert_eq!(form.text(FieldId::Phone), "(11) 99999-8888");
        assert_eq!(form.decoration(FieldId::Phone), Decoration::Valid);
    }

    #[test]
    fn typing_failing_value_shows_no_error() {
        let mut form = ContactForm::default();
        form.set_text(FieldId::Name, "M");
        assert_eq!(form.decoration(FieldId::Name), Decoration::Untouched);
    }

    #[test]
    fn typing_failure_clears_previous_success() {
        let mut form = ContactForm::default();
        form.set_text(FieldId::Email, "a@b.co");
        assert_eq!(form.decoration(FieldId::Email), Decoration::Valid);

        form.set_text(FieldId::Email, "a@b");
        assert_eq!(form.decoration(FieldId::Email), Decoration::Untouched);

        form.blur();
        assert_eq!(
            form.decoration(FieldId::Email),
            Decoration::Invalid(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn focusing_another_field_blurs_the_previous_one() {
        let mut form = ContactForm::default();
        form.set_text(FieldId::Name, "M");
        form.set_text(FieldId::Email, "m");
        assert_eq!(
            form.decoration(FieldId::Name),
            Decoration::Invalid(ValidationError::NameTooShort)
        );
        assert_eq!(form.focused(), Some(FieldId::Email));
    }

    #[test]
    fn message_typing_only_clears_decoration() {
        let mut form = ContactForm::default();
        form.set_text(FieldId::Message, "Mensagem longa o bastante");
        assert_eq!(form.decoration(FieldId::Message), Decoration::Untouched);
        form.blur();
        assert_eq!(form.decoration(FieldId::Message), Decoration::Valid);
    }

    #[test]
    fn unchecked_consent_is_invalid_even_while_typing() {
        let mut form = ContactForm::default();
        form.set_checked(FieldId::Consent, true);
        assert_eq!(form.decoration(FieldId::Consent), Decoration::Valid);
        form.set_checked(FieldId::Consent, false);
        assert_eq!(
            form.decoration(FieldId::Consent),
            Decoration::Invalid(ValidationError::ConsentRequired)
        );
    }

    #[test]
    fn empty_submit_rejects_on_first_field() {
        let mut form = ContactForm::default();
        let outcome = form.submit(Instant::now());
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                first_invalid: FieldId::Name
            }
        );
        assert_eq!(form.take_focus_request(), Some(FieldId::Name));
        assert_eq!(form.take_focus_request(), None);
        assert_eq!(
            form.decoration(FieldId::Email),
            Decoration::Invalid(ValidationError::Required)
        );
        assert!(!form.is_submitting());
    }

    #[test]
    fn missing_consent_blocks_submission() {
        let mut form = filled_form();
        form.set_checked(FieldId::Consent, false);
        let outcome = form.submit(Instant::now());
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                first_invalid: FieldId::Consent
            }
        );
        assert_eq!(
            form.decoration(FieldId::Consent),
            Decoration::Invalid(ValidationError::ConsentRequired)
        );
    }

    #[test]
    fn accepted_submit_builds_payload_and_locks_form() {
        let mut form = filled_form();
        let outcome = form.submit(Instant::now());
        let SubmitOutcome::Accepted(payload) = outcome else {
            panic!("expected accepted submission, got {outcome:?}");
        };
        assert_eq!(payload.name, "Maria Silva");
        assert_eq!(payload.phone, "(11) 99999-8888");
        assert!(payload.consent);

        assert!(form.is_submitting());
        assert_eq!(form.submit_label_key(), "contact-submitting");
        assert_eq!(form.submit(Instant::now()), SubmitOutcome::Busy);
        assert!(form.set_text(FieldId::Name, "Outro").is_none());
        assert_eq!(form.text(FieldId::Name), "Maria Silva");
    }

    #[test]
    fn successful_completion_greets_and_resets() {
        let now = Instant::now();
        let i18n = pt_br();
        let mut center = NotificationCenter::default();
        let mut form = filled_form();
        form.submit(now);

        let id = form
            .complete(now, Ok(()), &mut center, &i18n)
            .expect("toast shown");
        let toast = center.get(id).unwrap();
        assert_eq!(toast.severity(), Severity::Success);
        assert!(toast.message().contains("Maria"));
        assert!(!toast.message().contains("Silva"));
        assert_eq!(toast.title(), Some("Mensagem Enviada"));

        assert!(!form.is_submitting());
        for id in FieldId::ALL {
            assert_eq!(form.decoration(id), Decoration::Untouched);
            assert_eq!(form.text(id), "");
        }
    }

    #[test]
    fn failed_completion_keeps_values() {
        let now = Instant::now();
        let i18n = pt_br();
        let mut center = NotificationCenter::default();
        let mut form = filled_form();
        form.submit(now);

        let id = form
            .complete(now, Err(SubmitError::Timeout), &mut center, &i18n)
            .unwrap();
        assert_eq!(center.get(id).map(Notification::severity), Some(Severity::Error));
        assert!(!form.is_submitting());
        assert_eq!(form.text(FieldId::Name), "Maria Silva");
    }

    #[test]
    fn complete_without_submission_is_noop() {
        let i18n = pt_br();
        let mut center = NotificationCenter::default();
        let mut form = ContactForm::default();
        assert!(form
            .complete(Instant::now(), Ok(()), &mut center, &i18n)
            .is_none());
        assert!(center.is_empty());
    }

    #[test]
    fn optional_phone_may_stay_empty() {
        let schema = FormSchema::new(FieldId::ALL.map(|id| {
            if id == FieldId::Phone {
                FieldSpec::optional(id)
            } else {
                FieldSpec::required(id)
            }
        }));
        let mut form = ContactForm::new(schema);
        form.set_text(FieldId::Name, "Ana");
        form.set_text(FieldId::Email, "ana@example.com");
        form.select(FieldId::Subject, "familia");
        form.set_text(FieldId::Message, "Gostaria de agendar uma conversa.");
        form.set_checked(FieldId::Consent, true);

        assert!(matches!(form.submit(Instant::now()), SubmitOutcome::Accepted(_)));
    }

    #[test]
    fn fields_outside_schema_are_ignored() {
        let mut form = ContactForm::new(FormSchema::new([FieldSpec::required(FieldId::Name)]));
        assert!(form.set_text(FieldId::Email, "x").is_none());
        assert_eq!(form.text(FieldId::Email), "");
    }
}
