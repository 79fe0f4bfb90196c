use log::debug;

use super::dispatch;
use super::fields::{BookingFields, FormField};
use super::message::compose_booking_message;
use super::selection::SelectionState;
use super::validate::{validate, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Invalid,
    Composing,
    Dispatched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent. `focus` is the field to focus and shake, if any; a
    /// missing service only shows the banner.
    Rejected { focus: Option<FormField> },
    Ready { message: String, url: String },
}

/// All local state of the booking form, owned in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub selection: SelectionState,
    pub fields: BookingFields,
    pub errors: ValidationErrors,
    pub service_warning: bool,
    state: SubmissionState,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            selection: SelectionState::new(),
            fields: BookingFields::default(),
            errors: ValidationErrors::default(),
            service_warning: false,
            state: SubmissionState::Idle,
        }
    }
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Toggles a service and hides the "select a service" banner. The banner is
    /// hidden even when this toggle empties the selection again.
    pub fn toggle_service(&mut self, id: &str) {
        self.selection.toggle_service(id);
        self.service_warning = false;
    }

    pub fn toggle_add_on(&mut self, label: &str) {
        self.selection.toggle_add_on(label);
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set_field(field, value);
    }

    /// Runs validation and, when it passes, builds the message and chat URL.
    /// Leaves the form in `Invalid` or `Dispatched`; call [`settle`](Self::settle)
    /// once the side effects have been carried out.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.state = SubmissionState::Validating;
        let outcome = validate(&self.selection, &self.fields);
        self.errors = outcome.errors;
        if outcome.service_warning {
            self.service_warning = true;
        }

        if !outcome.valid {
            debug!(
                "Booking rejected: name_missing={} date_missing={} no_service={}",
                outcome.errors.name, outcome.errors.date, outcome.service_warning
            );
            self.state = SubmissionState::Invalid;
            return SubmitOutcome::Rejected {
                focus: outcome.errors.first_invalid(),
            };
        }

        self.state = SubmissionState::Composing;
        let message = compose_booking_message(&self.selection, &self.fields);
        let url = dispatch::whatsapp_url(&message);
        self.state = SubmissionState::Dispatched;
        SubmitOutcome::Ready { message, url }
    }

    pub fn settle(&mut self) {
        self.state = SubmissionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_empty() {
        let form = BookingForm::new();
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.errors.is_empty());
        assert!(!form.service_warning);
    }

    #[test]
    fn empty_submit_is_rejected_with_name_focus() {
        let mut form = BookingForm::new();
        let outcome = form.submit();
        assert_eq!(outcome, SubmitOutcome::Rejected { focus: Some(FormField::Name) });
        assert_eq!(form.state(), SubmissionState::Invalid);
        assert!(form.errors.name && form.errors.date);
        assert!(form.service_warning);

        form.settle();
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn missing_service_rejects_without_focus() {
        let mut form = BookingForm::new();
        form.set_field(FormField::Name, "Asha");
        form.set_field(FormField::EventDate, "2025-03-14");
        assert_eq!(form.submit(), SubmitOutcome::Rejected { focus: None });
        assert!(form.service_warning);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn toggling_a_service_hides_the_warning() {
        let mut form = BookingForm::new();
        form.submit();
        assert!(form.service_warning);

        form.toggle_service("led-walls");
        assert!(!form.service_warning);

        form.toggle_service("led-walls");
        assert!(!form.selection.has_services());
        assert!(!form.service_warning);
    }

    #[test]
    fn errors_are_recomputed_each_attempt() {
        let mut form = BookingForm::new();
        form.toggle_service("led-tvs");
        form.submit();
        assert!(form.errors.name && form.errors.date);

        form.set_field(FormField::Name, "Asha");
        assert_eq!(form.submit(), SubmitOutcome::Rejected { focus: Some(FormField::EventDate) });
        assert!(!form.errors.name);
        assert!(form.errors.date);
    }

    #[test]
    fn valid_submit_clears_errors_and_builds_url() {
        let mut form = BookingForm::new();
        form.submit();
        form.toggle_service("led-walls");
        form.set_field(FormField::Name, "Asha");
        form.set_field(FormField::EventDate, "2025-03-14");

        match form.submit() {
            SubmitOutcome::Ready { message, url } => {
                assert!(message.contains("• Services: LED Walls\n"));
                assert_eq!(url, dispatch::whatsapp_url(&message));
            }
            other => panic!("expected Ready, got {:?}", other),
        }
        assert!(form.errors.is_empty());
        assert_eq!(form.state(), SubmissionState::Dispatched);
    }
}
