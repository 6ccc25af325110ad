//! `[analytics]` section.

use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::ConfigDiagnostics;

/// Universal Analytics property, e.g. `UA-141942737-1`.
static UNIVERSAL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^UA-[0-9]{4,10}-[0-9]{1,4}$").unwrap());

/// GA4 measurement ID, e.g. `G-ABC123XYZ`.
static MEASUREMENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^G-[A-Z0-9]{4,12}$").unwrap());

/// Kind of Google Analytics identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingId {
    /// `UA-…` property (stopped processing data on 2023-07-01).
    Universal,
    /// `G-…` GA4 measurement ID.
    Measurement,
}

impl TrackingId {
    pub fn classify(id: &str) -> Option<Self> {
        if UNIVERSAL_ID.is_match(id) {
            Some(Self::Universal)
        } else if MEASUREMENT_ID.is_match(id) {
            Some(Self::Measurement)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "analytics")]
pub struct AnalyticsConfig {
    /// Google Analytics tracking ID. Leave empty to disable analytics.
    #[config(inline_doc)]
    pub google_analytics_id: String,
}

impl AnalyticsConfig {
    pub fn is_enabled(&self) -> bool {
        !self.google_analytics_id.is_empty()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.is_enabled() {
            return;
        }

        match TrackingId::classify(&self.google_analytics_id) {
            Some(TrackingId::Measurement) => {}
            Some(TrackingId::Universal) => diag.warn(
                Self::FIELDS.google_analytics_id,
                "Universal Analytics (UA-) properties no longer collect data, use a GA4 ID (G-)",
            ),
            None => diag.error_with_hint(
                Self::FIELDS.google_analytics_id,
                format!(
                    "'{}' is not a Google Analytics ID",
                    self.google_analytics_id
                ),
                "use a GA4 measurement ID like \"G-ABC123XYZ\", or leave empty",
            ),
        }
    }
}
