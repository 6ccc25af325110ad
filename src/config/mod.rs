//! Site metadata configuration from `sitemeta.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── social     # [social]
//! │   ├── analytics  # [analytics]
//! │   ├── theme      # [theme]
//! │   └── assets     # [assets]
//! ├── types/         # Utility types
//! │   ├── color      # HexColor
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── handle     # Global load-once handle
//! │   └── url        # UrlResolver
//! ├── record.rs      # SiteRecord (flat view with external names)
//! └── mod.rs         # SiteConfig (this file)
//! ```

pub mod record;
pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use record::SiteRecord;
pub use types::{
    ConfigDiagnostics, ConfigError, FieldPath, HexColor, UrlResolver, cfg, init_config,
};

use section::{AnalyticsConfig, AssetsConfig, SiteInfoConfig, SocialConfig, ThemeConfig};

use crate::cli::Cli;
use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "sitemeta.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitemeta.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Titles, URL, language and descriptive metadata
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Twitter and Open Graph identifiers
    #[serde(default)]
    pub social: SocialConfig,

    /// Analytics identifiers
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Manifest colors
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Static asset location
    #[serde(default)]
    pub assets: AssetsConfig,
}

impl SiteConfig {
    /// Load configuration for the current command.
    ///
    /// Searches upward from cwd to find the config file, then applies CLI
    /// overrides, fills derived fields and validates. `init` never loads.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let config_path = match find_config_file(&cwd, &cli.config) {
            Some(path) => path,
            None => return Err(ConfigError::NotFound(cli.config.clone()).into()),
        };
        crate::debug!("config"; "using {}", config_path.display());

        let (mut config, ignored) = Self::from_path(&config_path)?;
        if !ignored.is_empty() {
            if cli.is_strict() {
                return Err(ConfigError::UnknownFields(ignored).into());
            }
            Self::print_unknown_fields_warning(&ignored, &config_path);
        }

        config.set_paths(&config_path);
        config.finalize(cli);
        config.validate(cli.is_strict())?;

        Ok(config)
    }

    /// Set `config_path` and derive `root` from it.
    fn set_paths(&mut self, config_path: &Path) {
        self.config_path = crate::utils::normalize_path(config_path);
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
    }

    /// Apply CLI overrides and fill derived fields.
    fn finalize(&mut self, cli: &Cli) {
        // Override site URL if provided via CLI
        if let Some(ref url) = cli.site_url {
            self.site.url = url.clone();
        }
        self.site.sync_path_prefix_from_url();
        self.site.fill_derived_titles();
    }

    /// Load configuration from file path, returning unknown field paths.
    pub fn from_path(path: &Path) -> Result<(Self, Vec<String>), ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        if content.trim().is_empty() {
            return Ok((Self::default(), Vec::new()));
        }
        Self::parse_with_ignored(&content)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Flat record keyed by external field names.
    pub fn record(&self) -> SiteRecord<'_> {
        SiteRecord::new(self)
    }

    /// Value of one field by external name (`siteUrl`) or key path (`site.url`).
    pub fn lookup(&self, name: &str) -> Option<serde_json::Value> {
        self.record().get(name)
    }

    /// URL builder for this site.
    ///
    /// # Example
    /// ```ignore
    /// let url = config.urls().absolute("blog/hello");
    /// ```
    pub fn urls(&self) -> UrlResolver {
        UrlResolver::new(&self.site.url, &self.site.path_prefix)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every section check into one diagnostics set.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.social.validate(&mut diag);
        self.analytics.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.assets.validate(&self.site, self.get_root(), &mut diag);

        diag
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once. With
    /// `strict`, warnings fail validation too.
    pub fn validate(&self, strict: bool) -> Result<(), ConfigError> {
        let mut diag = self.diagnostics();

        if strict {
            diag.promote_warnings();
        } else {
            diag.print_warnings();
        }

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// `extra` continues the `[site]` table unless it opens another section.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    const EXAMPLE: &str = r##"
[site]
path_prefix = "/"
title = "Miha Sedej - React developer"
title_alt = "Miha Sedej - React developer"
title_manifest = "MihaSedejReactdeveloper"
url = "https://tresko.dev"
language = "en"
headline = "Writing and publishing React content | Miha Sedej - React developer"
banner = "/social/banner.jpg"
favicon = "src/favicon.png"
description = "I am Miha Sedej, a React developer with four years of industry experience."
author = "Miha Sedej"
logo = "/social/logo.png"

[social]
twitter = "@tresko9"
og_site_name = "tresko"
og_language = "en_US"

[analytics]
google_analytics_id = "UA-141942737-1"

[theme]
theme_color = "#3498DB"
background_color = "#2b2e3c"
"##;

    #[test]
    fn test_parse_invalid_toml() {
        let result = SiteConfig::parse_with_ignored("[site\ntitle = \"My Blog\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.site.path_prefix, "/");
        assert_eq!(config.site.language, "en");
        assert_eq!(config.theme.theme_color, "#000000");
        assert!(config.assets.check);
    }

    #[test]
    fn test_example_config() {
        let (mut config, ignored) = SiteConfig::parse_with_ignored(EXAMPLE).unwrap();
        assert!(ignored.is_empty());
        // no asset files in this test
        config.assets.check = false;

        assert_eq!(config.site.url, "https://tresko.dev");
        assert_eq!(config.social.twitter.as_deref(), Some("@tresko9"));
        assert_eq!(HexColor::parse(&config.theme.theme_color).ok(), Some(HexColor::new(0x34, 0x98, 0xdb)));

        let diag = config.diagnostics();
        assert!(!diag.has_errors(), "{:?}", diag.errors());
        // only the Universal Analytics notice
        let warned: Vec<_> = diag.warnings().iter().map(|w| w.field.as_str()).collect();
        assert_eq!(warned, vec!["analytics.google_analytics_id"]);

        assert!(config.validate(false).is_ok());
        assert!(matches!(
            config.validate(true),
            Err(ConfigError::Diagnostics(_))
        ));
    }

    #[test]
    fn test_urls_from_config() {
        let (config, _) = SiteConfig::parse_with_ignored(EXAMPLE).unwrap();
        let urls = config.urls();
        assert_eq!(urls.absolute("blog/post"), "https://tresko.dev/blog/post");
        assert_eq!(urls.absolute("/social/banner.jpg"), "https://tresko.dev/social/banner.jpg");
    }

    #[test]
    fn test_lookup() {
        let (config, _) = SiteConfig::parse_with_ignored(EXAMPLE).unwrap();
        assert_eq!(
            config.lookup("googleAnalyticsID"),
            Some(serde_json::Value::from("UA-141942737-1"))
        );
        assert_eq!(config.lookup("theme.theme_color"), config.lookup("themeColor"));
        assert_eq!(config.lookup("siteNope"), None);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\ntitel = \"typo\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f == "site.titel"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored(EXAMPLE).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_from_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, EXAMPLE).unwrap();

        let (config, ignored) = SiteConfig::from_path(&path).unwrap();
        assert!(ignored.is_empty());
        assert_eq!(config.site.author, "Miha Sedej");
    }

    #[test]
    fn test_from_path_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "  \n").unwrap();

        let (config, _) = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.site.language, "en");
    }

    #[test]
    fn test_from_path_missing() {
        let temp = TempDir::new().unwrap();
        let result = SiteConfig::from_path(&temp.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }

    #[test]
    fn test_set_paths() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "").unwrap();

        let mut config = SiteConfig::default();
        config.set_paths(&path);
        assert!(config.config_path.is_absolute());
        assert_eq!(config.get_root(), config.config_path.parent().unwrap());
    }

    #[test]
    fn test_validate_collects_across_sections() {
        let config = test_parse_config(
            "url = \"https://tresko.dev/\"\n[theme]\ntheme_color = \"blue\"\n[social]\ntwitter = \"x\"",
        );
        let diag = config.diagnostics();
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["site.url", "social.twitter", "theme.theme_color"]
        );
    }

    #[test]
    fn test_serialize_skips_internal_paths() {
        let mut config = test_parse_config("");
        config.root = PathBuf::from("/somewhere");
        let toml = toml::to_string(&config).unwrap();
        assert!(!toml.contains("somewhere"));
        assert!(toml.contains("[site]"));
    }

    fn write_config(content: &str) -> (TempDir, String) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, content).unwrap();
        let path = path.to_string_lossy().into_owned();
        (temp, path)
    }

    const PROJECT_SITE: &str = "[site]\ntitle = \"My Project\"\ndescription = \"Docs\"\nurl = \"https://example.github.io/my-project\"\n";

    #[test]
    fn test_load_derives_prefix_and_titles() {
        let (_temp, path) = write_config(PROJECT_SITE);
        let cli = Cli::parse_from(["sitemeta", "-C", path.as_str(), "url", "x"]);
        let config = SiteConfig::load(&cli).unwrap();

        assert_eq!(config.site.path_prefix, "/my-project");
        assert_eq!(config.site.title_alt, "My Project");
        assert_eq!(config.site.title_manifest, "MyProject");
        assert!(config.config_path.is_absolute());
        assert_eq!(
            config.urls().absolute("blog/post"),
            "https://example.github.io/my-project/blog/post"
        );
        assert_eq!(config.lookup("pathPrefix"), Some(serde_json::Value::from("/my-project")));
    }

    #[test]
    fn test_load_site_url_override() {
        let (_temp, path) = write_config(
            "[site]\ntitle = \"Blog\"\ndescription = \"Posts\"\nurl = \"https://tresko.dev\"\n",
        );
        let cli = Cli::parse_from([
            "sitemeta",
            "-C",
            path.as_str(),
            "--site-url",
            "https://example.github.io/preview",
            "url",
            "x",
        ]);
        let config = SiteConfig::load(&cli).unwrap();

        assert_eq!(config.site.url, "https://example.github.io/preview");
        assert_eq!(config.site.path_prefix, "/preview");
        assert_eq!(
            config.urls().absolute("about"),
            "https://example.github.io/preview/about"
        );
    }

    #[test]
    fn test_load_strict_rejects_unknown_fields() {
        let (_temp, path) = write_config(&format!("{PROJECT_SITE}titel = \"typo\"\n"));

        let cli = Cli::parse_from(["sitemeta", "-C", path.as_str(), "check", "--strict"]);
        let err = SiteConfig::load(&cli).unwrap_err();
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::UnknownFields(fields)) => assert_eq!(fields, &["site.titel"]),
            other => panic!("expected unknown fields error, got {other:?}"),
        }

        // without --strict the typo only warns
        let cli = Cli::parse_from(["sitemeta", "-C", path.as_str(), "check"]);
        assert!(SiteConfig::load(&cli).is_ok());
    }

    #[test]
    fn test_load_missing_and_directory_config() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_string_lossy().into_owned();
        let cli = Cli::parse_from(["sitemeta", "-C", dir.as_str(), "check"]);
        let err = SiteConfig::load(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));
    }
}
