//! `sitemeta check`: report the validation result.
//!
//! Loading already fails on errors (and on warnings with `--strict`), so by
//! the time this runs the config is known to be usable.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::log;
use crate::utils::plural_count;

pub fn check_config(config: &SiteConfig) -> Result<()> {
    let warnings = config.diagnostics().warnings().len();
    log!(
        "check";
        "{} is valid ({})",
        config.config_path.display(),
        plural_count(warnings, "warning")
    );
    Ok(())
}
