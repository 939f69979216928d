//! Language preference and the translation-widget seam.
//!
//! The preference is a single code string in a cookie, independent of
//! the session. Applying a locale means driving the dropdown a
//! third-party translation script injects into the page; that fragile
//! DOM poking is confined to this module, behind `apply_locale`.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, HtmlDocument, HtmlSelectElement};

pub const LANGUAGE_COOKIE: &str = "selectedLanguage";
const COOKIE_EXPIRY_DAYS: f64 = 30.0;

/// Selector for the dropdown the translation widget injects.
const WIDGET_SELECT: &str = ".goog-te-combo";
const APPLY_ATTEMPTS: u32 = 10;
const APPLY_RETRY_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Español" },
    Language { code: "fr", name: "Français" },
    Language { code: "de", name: "Deutsch" },
    Language { code: "it", name: "Italiano" },
    Language { code: "pt", name: "Português" },
    Language { code: "ru", name: "Русский" },
    Language { code: "ja", name: "日本語" },
    Language { code: "ko", name: "한국어" },
    Language { code: "zh", name: "中文" },
    Language { code: "ar", name: "العربية" },
    Language { code: "hi", name: "हिन्दी" },
    Language { code: "tr", name: "Türkçe" },
    Language { code: "pl", name: "Polski" },
    Language { code: "nl", name: "Nederlands" },
];

/// Extract a cookie's value from a `document.cookie` string.
pub(crate) fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim_start().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// The saved language code, if any.
pub fn saved_language() -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    cookie_value(&cookies, LANGUAGE_COOKIE)
}

/// Persist the preference for 30 days. Last writer wins.
pub fn save_language(code: &str) {
    if let Some(document) = html_document() {
        let expires = js_sys::Date::new_0();
        expires.set_time(js_sys::Date::now() + COOKIE_EXPIRY_DAYS * 24.0 * 60.0 * 60.0 * 1000.0);
        let cookie = format!(
            "{}={};expires={};path=/",
            LANGUAGE_COOKIE,
            code,
            expires.to_utc_string()
        );
        if document.set_cookie(&cookie).is_err() {
            log::error!("Failed to persist language preference");
        }
    }
}

/// Apply a locale through the injected widget, retrying while the
/// widget's dropdown has not appeared yet.
pub fn apply_locale(code: &str) {
    apply_with_retries(code.to_string(), APPLY_ATTEMPTS);
}

fn apply_with_retries(code: String, attempts_left: u32) {
    if try_apply(&code) {
        log::debug!("Applied locale: {}", code);
        return;
    }
    if attempts_left == 0 {
        log::error!("Translation widget dropdown never appeared; locale not applied");
        return;
    }
    Timeout::new(APPLY_RETRY_MS, move || {
        apply_with_retries(code, attempts_left - 1);
    })
    .forget();
}

fn try_apply(code: &str) -> bool {
    let Some(document) = window().and_then(|w| w.document()) else {
        return false;
    };
    let Ok(Some(element)) = document.query_selector(WIDGET_SELECT) else {
        return false;
    };
    let Ok(select) = element.dyn_into::<HtmlSelectElement>() else {
        return false;
    };
    select.set_value(code);
    match Event::new("change") {
        Ok(event) => {
            let _ = select.dispatch_event(&event);
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_finds_the_named_cookie() {
        let cookies = "theme=dark; selectedLanguage=es; other=1";
        assert_eq!(
            cookie_value(cookies, LANGUAGE_COOKIE),
            Some("es".to_string())
        );
    }

    #[test]
    fn cookie_value_ignores_prefix_collisions() {
        let cookies = "selectedLanguageOld=fr;selectedLanguage=de";
        assert_eq!(
            cookie_value(cookies, LANGUAGE_COOKIE),
            Some("de".to_string())
        );
        assert_eq!(cookie_value("", LANGUAGE_COOKIE), None);
        assert_eq!(cookie_value("a=b", LANGUAGE_COOKIE), None);
    }

    #[test]
    fn english_is_a_supported_language() {
        assert!(LANGUAGES.iter().any(|l| l.code == "en"));
        // Codes are unique.
        let mut codes: Vec<_> = LANGUAGES.iter().map(|l| l.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), LANGUAGES.len());
    }
}
