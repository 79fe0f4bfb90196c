#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    EventDate,
    Venue,
    City,
    Audience,
    Notes,
}

/// Free-text quote form values. Nothing is checked on input; required fields are
/// only looked at when the booking is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFields {
    pub name: String,
    /// `YYYY-MM-DD` as produced by a native date picker, or empty.
    pub event_date: String,
    pub venue: String,
    pub city: String,
    /// Kept as typed; the input is number-styled but nothing enforces digits.
    pub audience: String,
    pub notes: String,
}

impl BookingFields {
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::EventDate => &self.event_date,
            FormField::Venue => &self.venue,
            FormField::City => &self.city,
            FormField::Audience => &self.audience,
            FormField::Notes => &self.notes,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::EventDate => &mut self.event_date,
            FormField::Venue => &mut self.venue,
            FormField::City => &mut self.city,
            FormField::Audience => &mut self.audience,
            FormField::Notes => &mut self.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let fields = BookingFields::default();
        for field in [
            FormField::Name,
            FormField::EventDate,
            FormField::Venue,
            FormField::City,
            FormField::Audience,
            FormField::Notes,
        ] {
            assert_eq!(fields.get(field), "");
        }
    }

    #[test]
    fn set_field_only_touches_one_field() {
        let mut fields = BookingFields::default();
        fields.set_field(FormField::Venue, "Grand Hall");
        fields.set_field(FormField::Audience, "three hundred");

        assert_eq!(fields.venue, "Grand Hall");
        assert_eq!(fields.audience, "three hundred");
        assert_eq!(fields.name, "");
        assert_eq!(fields.city, "");

        fields.set_field(FormField::Venue, "");
        assert_eq!(fields.venue, "");
        assert_eq!(fields.audience, "three hundred");
    }
}
