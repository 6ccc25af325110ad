//! Flat view of the site record, keyed by external field names.
//!
//! Downstream tooling reads the record by the names below (`siteTitle`,
//! `googleAnalyticsID`, ...). `SiteRecord` borrows from a loaded
//! [`SiteConfig`] and serializes with exactly those keys.

use serde::Serialize;
use serde_json::Value as JsonValue;

use super::section::{AnalyticsConfig, SiteInfoConfig, SocialConfig, ThemeConfig};
use super::{FieldPath, SiteConfig};

/// External field name paired with its `sitemeta.toml` key.
pub const FIELD_NAMES: &[(&str, FieldPath)] = &[
    ("pathPrefix", SiteInfoConfig::FIELDS.path_prefix),
    ("siteTitle", SiteInfoConfig::FIELDS.title),
    ("siteTitleAlt", SiteInfoConfig::FIELDS.title_alt),
    ("siteTitleManifest", SiteInfoConfig::FIELDS.title_manifest),
    ("siteUrl", SiteInfoConfig::FIELDS.url),
    ("siteLanguage", SiteInfoConfig::FIELDS.language),
    ("siteHeadline", SiteInfoConfig::FIELDS.headline),
    ("siteBanner", SiteInfoConfig::FIELDS.banner),
    ("favicon", SiteInfoConfig::FIELDS.favicon),
    ("siteDescription", SiteInfoConfig::FIELDS.description),
    ("author", SiteInfoConfig::FIELDS.author),
    ("siteLogo", SiteInfoConfig::FIELDS.logo),
    ("siteFBAppID", SocialConfig::FIELDS.fb_app_id),
    ("userTwitter", SocialConfig::FIELDS.twitter),
    ("ogSiteName", SocialConfig::FIELDS.og_site_name),
    ("ogLanguage", SocialConfig::FIELDS.og_language),
    ("googleAnalyticsID", AnalyticsConfig::FIELDS.google_analytics_id),
    ("themeColor", ThemeConfig::FIELDS.theme_color),
    ("backgroundColor", ThemeConfig::FIELDS.background_color),
];

/// The site configuration record as consumed by build tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord<'a> {
    pub path_prefix: &'a str,
    pub site_title: &'a str,
    pub site_title_alt: &'a str,
    pub site_title_manifest: &'a str,
    pub site_url: &'a str,
    pub site_language: &'a str,
    pub site_headline: &'a str,
    pub site_banner: &'a str,
    pub favicon: &'a str,
    pub site_description: &'a str,
    pub author: &'a str,
    pub site_logo: &'a str,
    #[serde(rename = "siteFBAppID")]
    pub site_fb_app_id: Option<&'a str>,
    pub user_twitter: Option<&'a str>,
    pub og_site_name: Option<&'a str>,
    pub og_language: Option<&'a str>,
    #[serde(rename = "googleAnalyticsID")]
    pub google_analytics_id: &'a str,
    pub theme_color: &'a str,
    pub background_color: &'a str,
}

impl<'a> SiteRecord<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        let site = &config.site;
        let social = &config.social;
        Self {
            path_prefix: &site.path_prefix,
            site_title: &site.title,
            site_title_alt: &site.title_alt,
            site_title_manifest: &site.title_manifest,
            site_url: &site.url,
            site_language: &site.language,
            site_headline: &site.headline,
            site_banner: &site.banner,
            favicon: &site.favicon,
            site_description: &site.description,
            author: &site.author,
            site_logo: &site.logo,
            site_fb_app_id: social.fb_app_id.as_deref(),
            user_twitter: social.twitter.as_deref(),
            og_site_name: social.og_site_name.as_deref(),
            og_language: social.og_language.as_deref(),
            google_analytics_id: &config.analytics.google_analytics_id,
            theme_color: &config.theme.theme_color,
            background_color: &config.theme.background_color,
        }
    }

    /// Record as a JSON object, optionally without null/empty fields.
    pub fn to_json(&self, filter_empty: bool) -> JsonValue {
        let value = serde_json::to_value(self).unwrap_or_default();
        match value {
            JsonValue::Object(map) if filter_empty => JsonValue::Object(
                map.into_iter()
                    .filter(|(_, v)| !is_empty_value(v))
                    .collect(),
            ),
            other => other,
        }
    }

    /// Look up one field by external name (`siteUrl`) or key path (`site.url`).
    pub fn get(&self, name: &str) -> Option<JsonValue> {
        let external = external_name(name)?;
        match self.to_json(false) {
            JsonValue::Object(mut map) => map.remove(external),
            _ => None,
        }
    }
}

/// Map a user-supplied field name to its external name.
pub fn external_name(name: &str) -> Option<&'static str> {
    FIELD_NAMES
        .iter()
        .find(|(external, path)| *external == name || path.as_str() == name)
        .map(|(external, _)| *external)
}

fn is_empty_value(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        _ => false,
    }
}
