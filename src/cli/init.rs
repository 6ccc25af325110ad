//! `sitemeta init`: write a commented configuration template.

use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::section::{
    AnalyticsConfig, AssetsConfig, SiteInfoConfig, SocialConfig, ThemeConfig,
};
use crate::log;

/// Generate sitemeta.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# sitemeta configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    out.push_str(&SiteInfoConfig::template_with_header());
    out.push('\n');

    out.push_str(&SocialConfig::template_with_header());
    out.push('\n');

    out.push_str(&AnalyticsConfig::template_with_header());
    out.push('\n');

    out.push_str(&ThemeConfig::template_with_header());
    out.push('\n');

    out.push_str(&AssetsConfig::template_with_header());

    out
}

/// Where `init` writes the config for the given target directory.
fn target_path(dir: &Path, config: &Path) -> PathBuf {
    if config.is_absolute() {
        config.to_path_buf()
    } else {
        dir.join(config)
    }
}

/// Write a template config into `dir`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_config(dir: &Path, config: &Path, force: bool) -> Result<PathBuf> {
    let path = target_path(dir, config);
    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(path)
}

/// Run `init`.
///
/// If `dry_run` is true, only prints the template to stdout.
pub fn new_site(name: Option<&Path>, config: &Path, dry_run: bool, force: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let dir = name.map_or_else(|| cwd.clone(), |name| cwd.join(name));

    let path = write_config(&dir, config, force)?;
    log!("init"; "created {}", path.display());
    Ok(())
}
