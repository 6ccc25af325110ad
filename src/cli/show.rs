//! `sitemeta show`: print the resolved record.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};

use super::{OutputFormat, ShowArgs};
use crate::config::SiteConfig;
use crate::log;

/// Render the record in the requested format.
pub fn render(config: &SiteConfig, args: &ShowArgs) -> Result<String> {
    let rendered = match args.format {
        OutputFormat::Toml => toml::to_string_pretty(config)?,
        OutputFormat::Json => {
            let json = config.record().to_json(args.filter_empty);
            if args.pretty {
                serde_json::to_string_pretty(&json)?
            } else {
                serde_json::to_string(&json)?
            }
        }
    };
    Ok(rendered)
}

pub fn show_config(config: &SiteConfig, args: &ShowArgs) -> Result<()> {
    let formatted = render(config, args)?;

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create '{}'", output_path.display()))?;
        writeln!(file, "{}", formatted.trim_end())?;
        log!("show"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted.trim_end());
    }

    Ok(())
}
