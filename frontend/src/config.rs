use log::Level;

/// Local storage key holding the theme preference (`"light"` or `"dark"`).
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

pub const BOOKING_WIDGET_URL: &str = "https://link.cliniclab.ai/widget/booking/1vPDtpCW6IYhWsxzfIXy";
pub const SURVEY_WIDGET_URL: &str = "https://link.cliniclab.ai/widget/survey/O5TNUWhQ0291mmjtuPpC";
pub const SURVEY_WIDGET_ID: &str = "O5TNUWhQ0291mmjtuPpC";
pub const FORM_EMBED_SCRIPT_URL: &str = "https://link.cliniclab.ai/js/form_embed.js";

pub const EXPLAINER_VIDEO_URL: &str =
    "https://www.loom.com/embed/f1740373967e4294831185523b1225b1?sid=ac3c5f46-f894-4c47-91dd-6987fd461544";
pub const EXPLAINER_VIDEO_RATIO: &str = "42.15456674473068%";

pub const CALENDAR_GUIDE_IMAGE_URL: &str =
    "https://storage.googleapis.com/msgsndr/lsRkLEFyYwqF2xpmgLp9/media/683d8c41e1360ea944245bb5.jpeg";

pub const DEMO_PHONE_HREF: &str = "tel:+19547513967";
pub const DEMO_PHONE_DISPLAY: &str = "(954) 751-3967";

/// Anchor the home page CTA scrolls to.
pub const SURVEY_SECTION_ID: &str = "survey-section";

pub const LOGO_PATH: &str = "/assets/cliniclab-logo.svg";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_urls_are_https() {
        for url in [
            BOOKING_WIDGET_URL,
            SURVEY_WIDGET_URL,
            FORM_EMBED_SCRIPT_URL,
            EXPLAINER_VIDEO_URL,
            CALENDAR_GUIDE_IMAGE_URL,
        ] {
            assert!(url.starts_with("https://"), "{url} is not https");
        }
    }

    #[test]
    fn survey_widget_id_matches_url() {
        assert!(SURVEY_WIDGET_URL.ends_with(SURVEY_WIDGET_ID));
    }

    #[test]
    fn demo_phone_is_a_dialer_link() {
        assert!(DEMO_PHONE_HREF.starts_with("tel:+1"));
        let digits: String = DEMO_PHONE_DISPLAY.chars().filter(char::is_ascii_digit).collect();
        assert!(DEMO_PHONE_HREF.ends_with(&digits));
    }
}
