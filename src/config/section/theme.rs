//! `[theme]` section: manifest and progress-bar colors.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! theme_color = "#3498DB"
//! background_color = "#2b2e3c"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath, HexColor};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeConfig {
    /// Browser UI and progress bar color.
    #[config(default = "#000000", inline_doc)]
    pub theme_color: String,

    /// Splash screen background color.
    #[config(default = "#ffffff", inline_doc)]
    pub background_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme_color: "#000000".into(),
            background_color: "#ffffff".into(),
        }
    }
}

impl ThemeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_color(&self.theme_color, Self::FIELDS.theme_color, diag);
        check_color(&self.background_color, Self::FIELDS.background_color, diag);
    }
}

fn check_color(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    let Err(err) = HexColor::parse(value) else {
        return;
    };

    let hint = match HexColor::expand_shorthand(value) {
        Some(expanded) => format!("shorthand colors are not allowed, use \"{expanded}\""),
        None => "use # followed by 6 hex digits, e.g. \"#3498DB\"".to_string(),
    };
    diag.error_with_hint(field, format!("'{value}' is not a valid color: {err}"), hint);
}
