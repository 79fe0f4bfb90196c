pub const BUSINESS_NAME: &str = "JS Live Events";

const DEFAULT_BUSINESS_PHONE: &str = "919912322265";

/// How long the "opening WhatsApp" toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Gap between clearing and re-applying the shake animation on an invalid field.
pub const ATTENTION_RETRIGGER_MS: u32 = 10;

pub fn whatsapp_base_url() -> &'static str {
    "https://wa.me"
}

/// Business number as E.164 digits without the leading `+`.
/// Set `JS_LIVE_EVENTS_PHONE` at build time to override.
pub fn business_phone() -> &'static str {
    normalize_phone(option_env!("JS_LIVE_EVENTS_PHONE").unwrap_or(DEFAULT_BUSINESS_PHONE))
}

fn normalize_phone(raw: &str) -> &str {
    let trimmed = raw.trim();
    let digits = trimmed.trim_start_matches('+');
    if digits.is_empty() {
        DEFAULT_BUSINESS_PHONE
    } else {
        digits
    }
}
