//! Process-wide, load-once config handle.
//!
//! The record is stored once at startup and shared as `Arc<SiteConfig>`.
//! It is never replaced, so readers need no locking.

use crate::config::{ConfigError, SiteConfig};
use std::sync::{Arc, LazyLock, OnceLock};

/// Global config storage.
static CONFIG: OnceLock<Arc<SiteConfig>> = OnceLock::new();

/// Returned by [`cfg`] before [`init_config`] has run.
static FALLBACK: LazyLock<Arc<SiteConfig>> = LazyLock::new(|| Arc::new(SiteConfig::default()));

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    match CONFIG.get() {
        Some(config) => Arc::clone(config),
        None => Arc::clone(&FALLBACK),
    }
}

/// Store the loaded config for the rest of the process.
pub fn init_config(config: SiteConfig) -> Result<Arc<SiteConfig>, ConfigError> {
    let arc = Arc::new(config);
    CONFIG
        .set(Arc::clone(&arc))
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    Ok(arc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::thread;

    // Single test: the handle is process-global and can only be set once.
    #[test]
    fn test_init_once_and_shared_reads() {
        let before = cfg();
        assert_eq!(before.site.language, "en");

        let config = test_parse_config("");
        let stored = init_config(config).unwrap();
        assert!(CONFIG.get().is_some());
        assert!(Arc::ptr_eq(&stored, &cfg()));

        let again = init_config(test_parse_config(""));
        assert!(matches!(again, Err(ConfigError::AlreadyInitialized)));

        let first = cfg().site.url.clone();
        let second = cfg().site.url.clone();
        assert_eq!(first, second);

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    let c = cfg();
                    assert!(Arc::ptr_eq(&c, &stored));
                    assert_eq!(c.site.title, "Test");
                });
            }
        });
    }
}
