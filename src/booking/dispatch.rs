use log::{info, warn};

use crate::config;

/// `https://wa.me/<number>?text=<message>` with the message percent-encoded.
pub fn whatsapp_url(message: &str) -> String {
    format!(
        "{}/{}?text={}",
        config::whatsapp_base_url(),
        config::business_phone(),
        urlencoding::encode(message)
    )
}

pub fn call_uri() -> String {
    format!("tel:+{}", config::business_phone())
}

/// Opens the chat link in a new tab. Fire and forget: if the browser refuses
/// (popup blocker, missing app) there is nothing left for us to do.
pub fn dispatch_whatsapp(message: &str) {
    open_chat(&whatsapp_url(message));
}

/// Opens an already built chat URL, see [`whatsapp_url`].
pub fn open_chat(url: &str) {
    info!("Opening WhatsApp chat");
    let Some(window) = web_sys::window() else {
        warn!("No window available, cannot open WhatsApp");
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        warn!("Failed to open WhatsApp link: {:?}", e);
    }
}

/// Navigates the current tab to the `tel:` URI.
pub fn dispatch_call() {
    info!("Starting phone call");
    let Some(window) = web_sys::window() else {
        warn!("No window available, cannot start call");
        return;
    };
    if let Err(e) = window.location().set_href(&call_uri()) {
        warn!("Failed to start call: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::fields::{BookingFields, FormField};
    use crate::booking::message::{compose_booking_message, compose_inquiry_message};
    use crate::booking::selection::SelectionState;

    fn text_param(url: &str) -> &str {
        url.split_once("?text=").map(|(_, text)| text).unwrap_or_default()
    }

    #[test]
    fn whatsapp_url_shape() {
        let url = whatsapp_url("hello world");
        assert_eq!(
            url,
            format!("https://wa.me/{}?text=hello%20world", config::business_phone())
        );
    }

    #[test]
    fn special_characters_are_encoded() {
        let url = whatsapp_url("a\n• b — c");
        let encoded = text_param(&url);
        assert_eq!(encoded, "a%0A%E2%80%A2%20b%20%E2%80%94%20c");
    }

    #[test]
    fn booking_message_survives_encoding() {
        let mut selection = SelectionState::new();
        selection.toggle_service("led-tvs");
        selection.toggle_add_on("Multi-camera switcher");
        let mut fields = BookingFields::default();
        fields.set_field(FormField::Name, "Zoë & Co?");
        fields.set_field(FormField::Notes, "50% outdoor, need #2 backup=yes");

        for message in [compose_booking_message(&selection, &fields), compose_inquiry_message()] {
            let url = whatsapp_url(&message);
            let decoded = urlencoding::decode(text_param(&url)).unwrap();
            assert_eq!(decoded, message);
        }
    }

    #[test]
    fn call_uri_has_plus() {
        assert_eq!(call_uri(), format!("tel:+{}", config::business_phone()));
    }
}
