//! Formatter facade
//!
//! Resolves message codes through a [`Dictionary`], falls back to a
//! caller-supplied default or to the `[code]` placeholder, and substitutes
//! positional arguments into the resolved text.
//!
//! # Fallback rules
//!
//! | Situation | Result |
//! |-----------|--------|
//! | Code present, plain template | Template with `{N}` substituted (when args given) |
//! | Code present, structured template | Fragments rendered with args |
//! | Code absent or empty, default given | The default, with `{N}` substituted |
//! | Code absent or empty, no default | `[code]`, with `{N}` substituted |
//! | `{N}` or fragment index past the args | `undefined` |

use crate::dictionary::{placeholder, Dictionary};
use crate::template::{substitute_with, Arg, Template, MISSING_ARGUMENT};

/// Formatter behavior switches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterOptions {
    /// Apply argument substitution to defaults and `[code]` placeholders
    pub substitute_fallbacks: bool,
    /// Text written for an argument index with no matching argument
    pub missing_argument: String,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            substitute_fallbacks: true,
            missing_argument: MISSING_ARGUMENT.to_string(),
        }
    }
}

/// Message formatter bound to one dictionary
///
/// # Example
///
/// ```
/// use i18n_asset_core::{Dictionary, DictionaryVariant, Formatter};
///
/// let dict = Dictionary::new(DictionaryVariant::Structured)
///     .with_plain("inbox", "Hello {0}, you have {1} messages");
/// let fmt = Formatter::new(&dict);
///
/// assert_eq!(fmt.m("inbox", &[&"Ann", &5], None), "Hello Ann, you have 5 messages");
/// assert_eq!(fmt.md("outbox", Some("Outbox")), "Outbox");
/// assert_eq!(fmt.md("outbox", None), "[outbox]");
/// ```
#[derive(Debug, Clone)]
pub struct Formatter<'d> {
    dictionary: &'d Dictionary,
    options: FormatterOptions,
}

impl<'d> Formatter<'d> {
    /// Create a formatter with default options
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self::with_options(dictionary, FormatterOptions::default())
    }

    /// Create a formatter with explicit options
    pub fn with_options(dictionary: &'d Dictionary, options: FormatterOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    /// The dictionary this formatter reads from
    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Active options
    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    /// Resolve `code`, substitute `args`, fall back to `default` or `[code]`
    pub fn format(&self, code: &str, args: &[Arg<'_>], default: Option<&str>) -> String {
        let missing = self.options.missing_argument.as_str();

        match self.dictionary.lookup(code) {
            Some(Template::Plain(text)) if !text.is_empty() => substitute_with(text, args, missing),
            Some(template @ Template::Structured(_)) => {
                let rendered = template.render_with(args, missing);
                if rendered.is_empty() {
                    self.fallback(code, args, default)
                } else {
                    rendered
                }
            }
            _ => self.fallback(code, args, default),
        }
    }

    /// Shorthand for [`format`](Self::format) with no arguments
    pub fn resolve_with_default(&self, code: &str, default: Option<&str>) -> String {
        self.format(code, &[], default)
    }

    /// Alias of [`format`](Self::format)
    pub fn m(&self, code: &str, args: &[Arg<'_>], default: Option<&str>) -> String {
        self.format(code, args, default)
    }

    /// Alias of [`resolve_with_default`](Self::resolve_with_default)
    pub fn md(&self, code: &str, default: Option<&str>) -> String {
        self.resolve_with_default(code, default)
    }

    /// The dictionary text for `code`, with no fallback and no substitution
    ///
    /// Structured templates are rendered without arguments. Empty messages
    /// count as absent.
    pub fn message(&self, code: &str) -> Option<String> {
        self.dictionary
            .lookup(code)
            .map(|t| t.render_with(&[], &self.options.missing_argument))
            .filter(|text| !text.is_empty())
    }

    /// Placeholder text used when `code` is unknown and no default is given
    pub fn default_message(&self, code: &str) -> String {
        placeholder(code)
    }

    /// Substitute `{N}` markers in arbitrary text
    pub fn substitute(&self, source: &str, args: &[Arg<'_>]) -> String {
        substitute_with(source, args, &self.options.missing_argument)
    }

    fn fallback(&self, code: &str, args: &[Arg<'_>], default: Option<&str>) -> String {
        tracing::debug!(
            "no message for code '{}', using {}",
            code,
            if default.is_some() { "caller default" } else { "placeholder" }
        );
        let text = match default {
            Some(text) => text.to_string(),
            None => self.default_message(code),
        };
        if self.options.substitute_fallbacks {
            self.substitute(&text, args)
        } else {
            text
        }
    }
}
