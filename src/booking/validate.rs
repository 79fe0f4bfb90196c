use super::fields::{BookingFields, FormField};
use super::selection::SelectionState;

/// Required-field failures from one submission attempt. Rebuilt from scratch on
/// every attempt, never merged with a previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: bool,
    pub date: bool,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        !self.name && !self.date
    }

    /// Field that should receive focus: name first, then date.
    pub fn first_invalid(&self) -> Option<FormField> {
        if self.name {
            Some(FormField::Name)
        } else if self.date {
            Some(FormField::EventDate)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub errors: ValidationErrors,
    pub service_warning: bool,
    pub valid: bool,
}

/// Checks every rule in one pass so all problems surface together.
pub fn validate(selection: &SelectionState, fields: &BookingFields) -> ValidationOutcome {
    let errors = ValidationErrors {
        name: fields.name.trim().is_empty(),
        date: fields.event_date.is_empty(),
    };
    let service_warning = !selection.has_services();

    ValidationOutcome {
        errors,
        service_warning,
        valid: errors.is_empty() && !service_warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> (SelectionState, BookingFields) {
        let mut selection = SelectionState::new();
        selection.toggle_service("led-walls");
        let fields = BookingFields {
            name: "Asha".into(),
            event_date: "2025-03-14".into(),
            ..Default::default()
        };
        (selection, fields)
    }

    #[test]
    fn complete_form_is_valid() {
        let (selection, fields) = filled();
        let outcome = validate(&selection, &fields);
        assert!(outcome.valid);
        assert!(outcome.errors.is_empty());
        assert!(!outcome.service_warning);
    }

    #[test]
    fn all_failures_reported_in_one_pass() {
        let outcome = validate(&SelectionState::new(), &BookingFields::default());
        assert!(outcome.errors.name);
        assert!(outcome.errors.date);
        assert!(outcome.service_warning);
        assert!(!outcome.valid);
    }

    #[test]
    fn whitespace_name_is_missing() {
        let (selection, mut fields) = filled();
        fields.name = "  \t ".into();
        let outcome = validate(&selection, &fields);
        assert!(outcome.errors.name);
        assert!(!outcome.errors.date);
        assert!(!outcome.valid);
    }

    #[test]
    fn missing_service_alone_invalidates() {
        let (_, fields) = filled();
        let outcome = validate(&SelectionState::new(), &fields);
        assert!(outcome.errors.is_empty());
        assert!(outcome.service_warning);
        assert!(!outcome.valid);
    }

    #[test]
    fn focus_goes_to_name_before_date() {
        let both = ValidationErrors { name: true, date: true };
        assert_eq!(both.first_invalid(), Some(FormField::Name));
        let date_only = ValidationErrors { name: false, date: true };
        assert_eq!(date_only.first_invalid(), Some(FormField::EventDate));
        assert_eq!(ValidationErrors::default().first_invalid(), None);
    }
}
