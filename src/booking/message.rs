use chrono::NaiveDate;

use super::fields::BookingFields;
use super::selection::SelectionState;
use crate::config::BUSINESS_NAME;

const PLACEHOLDER: &str = "—";
const NONE_SELECTED: &str = "None";

/// Builds the booking summary sent to the business over WhatsApp.
pub fn compose_booking_message(selection: &SelectionState, fields: &BookingFields) -> String {
    let services = join_or_none(selection.services_in_catalog_order().map(|s| s.name));
    let add_ons = join_or_none(selection.add_ons().iter().copied());
    let date = if fields.event_date.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        format_event_date(&fields.event_date)
    };

    format!(
        "Hi {business}! I'd like to book the following:\n\
         • Services: {services}\n\
         • Date: {date}\n\
         • Venue/City: {venue}, {city}\n\
         • Audience: {audience}\n\
         • Add-ons: {add_ons}\n\
         • Notes: {notes}\n\
         \n\
         My details:\n\
         • Name: {name}\n\
         \n\
         Please share availability and a quick quote.",
        business = BUSINESS_NAME,
        venue = or_placeholder(&fields.venue),
        city = or_placeholder(&fields.city),
        audience = or_placeholder(&fields.audience),
        notes = or_placeholder(&fields.notes),
        name = or_placeholder(&fields.name),
    )
}

/// Fixed text for the "just contacting" buttons; ignores any form state.
pub fn compose_inquiry_message() -> String {
    format!(
        "Hi {}! I'm interested in your services. Please share more information.",
        BUSINESS_NAME
    )
}

/// `2025-03-14` -> `14-03-2025`. Anything that doesn't parse is passed through.
pub fn format_event_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d-%m-%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

fn join_or_none<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let joined = items.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        NONE_SELECTED.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::fields::FormField;

    fn asha() -> (SelectionState, BookingFields) {
        let mut selection = SelectionState::new();
        selection.toggle_service("drone-coverage");
        selection.toggle_service("led-walls");
        selection.toggle_add_on("Stage lighting");

        let mut fields = BookingFields::default();
        fields.set_field(FormField::Name, "Asha");
        fields.set_field(FormField::EventDate, "2025-03-14");
        fields.set_field(FormField::Venue, "Grand Hall");
        fields.set_field(FormField::City, "Hyderabad");
        fields.set_field(FormField::Audience, "300");
        (selection, fields)
    }

    #[test]
    fn booking_message_golden() {
        let (selection, fields) = asha();
        let expected = "Hi JS Live Events! I'd like to book the following:\n\
                        • Services: LED Walls, Drone Coverage\n\
                        • Date: 14-03-2025\n\
                        • Venue/City: Grand Hall, Hyderabad\n\
                        • Audience: 300\n\
                        • Add-ons: Stage lighting\n\
                        • Notes: —\n\
                        \n\
                        My details:\n\
                        • Name: Asha\n\
                        \n\
                        Please share availability and a quick quote.";
        assert_eq!(compose_booking_message(&selection, &fields), expected);
    }

    #[test]
    fn empty_state_uses_placeholders() {
        let message = compose_booking_message(&SelectionState::new(), &BookingFields::default());
        let lines: Vec<_> = message.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Hi JS Live Events! I'd like to book the following:",
                "• Services: None",
                "• Date: —",
                "• Venue/City: —, —",
                "• Audience: —",
                "• Add-ons: None",
                "• Notes: —",
                "",
                "My details:",
                "• Name: —",
                "",
                "Please share availability and a quick quote.",
            ]
        );
    }

    #[test]
    fn add_ons_keep_toggle_order() {
        let mut selection = SelectionState::new();
        selection.toggle_add_on("Stage lighting");
        selection.toggle_add_on("Backup internet");
        let message = compose_booking_message(&selection, &BookingFields::default());
        assert!(message.contains("• Add-ons: Stage lighting, Backup internet\n"));
    }

    #[test]
    fn venue_and_city_are_replaced_individually() {
        let mut fields = BookingFields::default();
        fields.set_field(FormField::City, "Pune");
        let message = compose_booking_message(&SelectionState::new(), &fields);
        assert!(message.contains("• Venue/City: —, Pune\n"));
    }

    #[test]
    fn name_is_rendered_verbatim() {
        let mut fields = BookingFields::default();
        fields.set_field(FormField::Name, " Ravi ");
        let message = compose_booking_message(&SelectionState::new(), &fields);
        assert!(message.contains("• Name:  Ravi \n"));
    }

    #[test]
    fn event_date_reformatting() {
        assert_eq!(format_event_date("2025-03-14"), "14-03-2025");
        assert_eq!(format_event_date("2024-12-01"), "01-12-2024");
        assert_eq!(format_event_date("14/03/2025"), "14/03/2025");
    }

    #[test]
    fn inquiry_ignores_form_state() {
        assert_eq!(
            compose_inquiry_message(),
            "Hi JS Live Events! I'm interested in your services. Please share more information."
        );
    }
}
