//! `sitemeta get` and `sitemeta url`.

use anyhow::{Result, bail};
use serde_json::Value as JsonValue;

use crate::config::SiteConfig;
use crate::config::record::FIELD_NAMES;

/// Text printed for a field value: strings bare, unset fields empty.
fn value_text(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn field_text(config: &SiteConfig, field: &str) -> Result<String> {
    match config.lookup(field) {
        Some(value) => Ok(value_text(&value)),
        None => {
            let names: Vec<_> = FIELD_NAMES.iter().map(|(name, _)| *name).collect();
            bail!("unknown field '{field}', expected one of: {}", names.join(", "))
        }
    }
}

pub fn get_field(config: &SiteConfig, field: &str) -> Result<()> {
    println!("{}", field_text(config, field)?);
    Ok(())
}

pub fn print_urls(config: &SiteConfig, paths: &[String]) -> Result<()> {
    let urls = config.urls();
    for path in paths {
        println!("{}", urls.absolute(path));
    }
    Ok(())
}
