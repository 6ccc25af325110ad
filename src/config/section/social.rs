//! `[social]` section: Twitter and Open Graph identifiers.

use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::{ConfigDiagnostics, FieldPath};

static TWITTER_HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[A-Za-z0-9_]{1,15}$").unwrap());

/// Open Graph locale, e.g. `en_US`.
static OG_LOCALE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}_[A-Z]{2}$").unwrap());

/// Social metadata. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "social")]
pub struct SocialConfig {
    /// Twitter username, e.g. "@name".
    #[config(inline_doc)]
    pub twitter: Option<String>,

    /// Facebook site name (og:site_name).
    #[config(inline_doc)]
    pub og_site_name: Option<String>,

    /// Facebook language (og:locale), e.g. "en_US".
    #[config(inline_doc)]
    pub og_language: Option<String>,

    /// Facebook App ID (fb:app_id).
    #[config(inline_doc)]
    pub fb_app_id: Option<String>,
}

impl SocialConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(handle) = set(&self.twitter)
            && !TWITTER_HANDLE.is_match(handle)
        {
            let hint = if handle.starts_with('@') {
                "handles are 1-15 letters, digits or underscores".to_string()
            } else {
                format!("write it as \"@{}\"", handle.trim())
            };
            invalid(diag, Self::FIELDS.twitter, handle, "Twitter handle", hint);
        }

        if let Some(locale) = set(&self.og_language)
            && !OG_LOCALE.is_match(locale)
        {
            let hint = format!("use language_TERRITORY like \"en_US\", not \"{locale}\"");
            invalid(diag, Self::FIELDS.og_language, locale, "Open Graph locale", hint);
        }

        if let Some(id) = set(&self.fb_app_id)
            && !id.chars().all(|c| c.is_ascii_digit())
        {
            invalid(
                diag,
                Self::FIELDS.fb_app_id,
                id,
                "Facebook App ID",
                "the App ID is numeric, e.g. \"123456789\"",
            );
        }
    }
}

/// Treat `Some("")` the same as an unset field.
fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn invalid(
    diag: &mut ConfigDiagnostics,
    field: FieldPath,
    value: &str,
    what: &str,
    hint: impl Into<String>,
) {
    diag.error_with_hint(field, format!("'{value}' is not a valid {what}"), hint);
}
