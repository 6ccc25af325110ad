//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitemeta.toml`:
//!
//! | Module      | TOML Section    | Purpose                                |
//! |-------------|-----------------|----------------------------------------|
//! | `site`      | `[site]`        | Titles, URL, language, images, author  |
//! | `social`    | `[social]`      | Twitter handle, Open Graph identifiers |
//! | `analytics` | `[analytics]`   | Google Analytics ID                    |
//! | `theme`     | `[theme]`       | Manifest colors                        |
//! | `assets`    | `[assets]`      | Static directory, asset existence      |

mod analytics;
mod assets;
mod site;
mod social;
mod theme;

pub use analytics::AnalyticsConfig;
pub use assets::AssetsConfig;
pub use site::SiteInfoConfig;
pub use social::SocialConfig;
pub use theme::ThemeConfig;
