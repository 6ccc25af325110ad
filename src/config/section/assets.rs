//! `[assets]` section: where favicon, banner and logo files live.
//!
//! Root-relative paths (`/social/banner.jpg`) are served from `static_dir`;
//! other relative paths (`src/favicon.png`) resolve against the project root.
//! Absolute URLs are never checked.

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::section::SiteInfoConfig;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "assets")]
pub struct AssetsConfig {
    /// Directory served at the site root.
    #[config(default = "static", inline_doc)]
    pub static_dir: PathBuf,

    /// Warn when favicon, banner or logo files are missing.
    #[config(inline_doc)]
    pub check: bool,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            static_dir: "static".into(),
            check: true,
        }
    }
}

impl AssetsConfig {
    /// Filesystem location of a site asset path, `None` for remote URLs.
    pub fn resolve(&self, root: &Path, asset: &str) -> Option<PathBuf> {
        if asset.is_empty() || is_remote(asset) {
            return None;
        }
        match asset.strip_prefix('/') {
            Some(served) => Some(root.join(&self.static_dir).join(served)),
            None => Some(root.join(asset)),
        }
    }

    /// Warn about asset files referenced from `[site]` that do not exist.
    pub fn validate(&self, site: &SiteInfoConfig, root: &Path, diag: &mut ConfigDiagnostics) {
        if !self.check {
            return;
        }

        let fields = SiteInfoConfig::FIELDS;
        self.check_file(&site.favicon, fields.favicon, root, diag);
        self.check_file(&site.banner, fields.banner, root, diag);
        self.check_file(&site.logo, fields.logo, root, diag);
    }

    fn check_file(&self, asset: &str, field: FieldPath, root: &Path, diag: &mut ConfigDiagnostics) {
        if let Some(path) = self.resolve(root, asset)
            && !path.is_file()
        {
            diag.warn(field, format!("file not found: {}", path.display()));
        }
    }
}

fn is_remote(asset: &str) -> bool {
    asset.starts_with("http://") || asset.starts_with("https://") || asset.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site_with_assets() -> SiteInfoConfig {
        SiteInfoConfig {
            favicon: "src/favicon.png".into(),
            banner: "/social/banner.jpg".into(),
            logo: "https://cdn.example.com/logo.png".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve() {
        let assets = AssetsConfig::default();
        let root = Path::new("/site");
        assert_eq!(
            assets.resolve(root, "/social/banner.jpg"),
            Some(PathBuf::from("/site/static/social/banner.jpg"))
        );
        assert_eq!(
            assets.resolve(root, "src/favicon.png"),
            Some(PathBuf::from("/site/src/favicon.png"))
        );
        assert_eq!(assets.resolve(root, "https://cdn.example.com/a.png"), None);
        assert_eq!(assets.resolve(root, ""), None);
    }

    #[test]
    fn test_missing_files_warn() {
        let temp = TempDir::new().unwrap();
        let mut diag = ConfigDiagnostics::new();
        AssetsConfig::default().validate(&site_with_assets(), temp.path(), &mut diag);

        assert!(!diag.has_errors());
        let fields: Vec<_> = diag.warnings().iter().map(|w| w.field.as_str()).collect();
        assert_eq!(fields, vec!["site.favicon", "site.banner"]);
    }

    #[test]
    fn test_existing_files_pass() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::create_dir_all(temp.path().join("static/social")).unwrap();
        fs::write(temp.path().join("src/favicon.png"), b"png").unwrap();
        fs::write(temp.path().join("static/social/banner.jpg"), b"jpg").unwrap();

        let mut diag = ConfigDiagnostics::new();
        AssetsConfig::default().validate(&site_with_assets(), temp.path(), &mut diag);
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_check_disabled() {
        let temp = TempDir::new().unwrap();
        let assets = AssetsConfig {
            check: false,
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        assets.validate(&site_with_assets(), temp.path(), &mut diag);
        assert!(diag.warnings().is_empty());
    }
}
