//! Dotted config key paths used in diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// A `sitemeta.toml` key path such as `site.url` or `theme.theme_color`.
///
/// `#[derive(Config)]` generates a `FIELDS` constant per section holding one
/// `FieldPath` for every field, so diagnostics never spell paths by hand:
///
/// ```ignore
/// diag.error(SiteInfoConfig::FIELDS.url, "must not end with `/`");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
