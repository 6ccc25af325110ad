//! `[site]` section: titles, URL, language and descriptive metadata.
//!
//! # Example
//!
//! ```toml
//! [site]
//! path_prefix = "/"
//! title = "Miha Sedej - React developer"
//! url = "https://tresko.dev"
//! language = "en"
//! banner = "/social/banner.jpg"
//! favicon = "src/favicon.png"
//! ```

use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::ConfigDiagnostics;
use crate::config::util::extract_url_path;
use crate::config::types::normalize_prefix;

/// IETF language tag shape: primary subtag plus optional subtags.
static LANGUAGE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{1,8})*$").unwrap());

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Prefix for all links. Use "portfolio" when deploying to example.com/portfolio.
    #[config(default = "/", inline_doc)]
    pub path_prefix: String,

    /// Navigation and site title.
    #[config(inline_doc)]
    pub title: String,

    /// Alternative site title for SEO (defaults to `title`).
    #[config(inline_doc)]
    pub title_alt: String,

    /// Short name for the web app manifest (defaults to `title` without spaces).
    #[config(inline_doc)]
    pub title_manifest: String,

    /// Domain of your site, without trailing slash.
    #[config(inline_doc)]
    pub url: String,

    /// Language tag on the `<html>` element.
    #[config(default = "en", inline_doc)]
    pub language: String,

    /// Headline for schema.org JSON-LD.
    #[config(inline_doc)]
    pub headline: String,

    /// Image for the og:image tag, relative to the static directory.
    #[config(inline_doc)]
    pub banner: String,

    /// Favicon source file, relative to the project root.
    #[config(inline_doc)]
    pub favicon: String,

    /// Site description.
    #[config(inline_doc)]
    pub description: String,

    /// Author for schema.org JSON-LD.
    #[config(inline_doc)]
    pub author: String,

    /// Logo for schema.org JSON-LD, relative to the static directory.
    #[config(inline_doc)]
    pub logo: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            path_prefix: "/".into(),
            title: String::new(),
            title_alt: String::new(),
            title_manifest: String::new(),
            url: String::new(),
            language: "en".into(),
            headline: String::new(),
            banner: String::new(),
            favicon: String::new(),
            description: String::new(),
            author: String::new(),
            logo: String::new(),
        }
    }
}

impl SiteInfoConfig {
    /// Fill `title_alt` and `title_manifest` from `title` when left empty.
    pub fn fill_derived_titles(&mut self) {
        if self.title_alt.is_empty() {
            self.title_alt = self.title.clone();
        }
        if self.title_manifest.is_empty() {
            self.title_manifest = manifest_name(&self.title);
        }
    }

    /// Use the URL path as `path_prefix` when the prefix is left at root.
    ///
    /// `url = "https://example.github.io/my-project"` gives `/my-project`.
    pub fn sync_path_prefix_from_url(&mut self) {
        if !normalize_prefix(&self.path_prefix).is_empty() {
            return;
        }
        if let Some(path) = extract_url_path(&self.url)
            && !path.is_empty()
        {
            self.path_prefix = format!("/{path}");
        }
    }

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` is set
    /// - `url` is an http(s) URL with a host, no trailing slash, no query/fragment
    /// - `path_prefix` is a clean path and agrees with the URL path
    /// - `language` looks like an IETF tag
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title is empty",
                format!("set {}, e.g.: \"My Site\"", Self::FIELDS.title),
            );
        }

        if self.description.trim().is_empty() {
            diag.warn(Self::FIELDS.description, "site description is empty");
        }

        self.validate_url(diag);
        self.validate_path_prefix(diag);

        if !LANGUAGE_TAG.is_match(&self.language) {
            diag.error_with_hint(
                Self::FIELDS.language,
                format!("'{}' is not a valid language tag", self.language),
                "use an IETF tag like \"en\", \"en-US\" or \"zh-Hans\"",
            );
        }
    }

    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        if self.url.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.url,
                "site URL is not configured",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
            return;
        }

        // URL format check using url crate for strict validation
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                if parsed.query().is_some() || parsed.fragment().is_some() {
                    diag.error(
                        Self::FIELDS.url,
                        "URL must not contain a query string or fragment",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }

        if self.url.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.url,
                "URL must not end with `/`",
                format!("use \"{}\"", self.url.trim_end_matches('/')),
            );
        }
    }

    fn validate_path_prefix(&self, diag: &mut ConfigDiagnostics) {
        let prefix = &self.path_prefix;
        if prefix.contains("//") || prefix.contains(['?', '#']) || prefix.contains(char::is_whitespace)
        {
            diag.error_with_hint(
                Self::FIELDS.path_prefix,
                format!("'{prefix}' is not a clean URL path"),
                "use \"/\" or a path like \"/portfolio\"",
            );
            return;
        }

        let Some(url_path) = extract_url_path(&self.url) else {
            return;
        };
        let from_url = normalize_prefix(&url_path);
        let configured = normalize_prefix(prefix);
        if !from_url.is_empty() && from_url != configured {
            diag.error_with_hint(
                Self::FIELDS.path_prefix,
                format!(
                    "'{prefix}' does not match the path of {} ('{from_url}')",
                    Self::FIELDS.url
                ),
                format!("set {} to \"{from_url}\" or remove it", Self::FIELDS.path_prefix),
            );
        }
    }
}

/// Manifest short name: the title with everything but letters and digits removed.
fn manifest_name(title: &str) -> String {
    title.chars().filter(|c| c.is_alphanumeric()).collect()
}
