//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `color`  | `#RRGGBB` color parsing                      |
//! | `error`  | Configuration error types                    |
//! | `field`  | Dotted key paths for diagnostics             |
//! | `handle` | Global load-once configuration handle        |
//! | `url`    | Site URL composition                         |

mod color;
mod error;
mod field;
pub mod handle;
mod url;

pub use color::HexColor;
pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{cfg, init_config};
pub use self::url::{UrlResolver, normalize_prefix};
