//! i18n-asset Core Library
//!
//! Message lookup and positional formatting for localized UI strings.
//!
//! # Features
//!
//! - **Dictionary**: Read-only code to template mapping, loaded from JSON
//! - **Templates**: Plain strings with `{N}` placeholders, or fragment lists
//! - **Formatter**: Default-message fallback and argument substitution
//!
//! # Example
//!
//! ```
//! use i18n_asset_core::{Dictionary, DictionaryVariant, Formatter};
//!
//! let dict = Dictionary::from_json(
//!     r#"{"inbox": "Hello {0}, you have {1} messages"}"#,
//!     DictionaryVariant::Structured,
//! )
//! .expect("valid dictionary");
//!
//! let fmt = Formatter::new(&dict);
//! assert_eq!(fmt.m("inbox", &[&"Ann", &5], None), "Hello Ann, you have 5 messages");
//! assert_eq!(fmt.md("unknown", None), "[unknown]");
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod formatter;
pub mod template;

// Re-export commonly used types
pub use config::{Config, DictionaryConfig, FormatterConfig, GeneralConfig};
pub use dictionary::{placeholder, Dictionary, DictionaryVariant};
pub use error::{ConfigError, CoreError, DictionaryError};
pub use formatter::{Formatter, FormatterOptions};
pub use template::{substitute, Arg, Fragment, Template, MISSING_ARGUMENT};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
