//! Message dictionary
//!
//! Maps message codes to [`Template`]s. A dictionary is built once, before
//! any lookup, and is read-only afterwards; it is handed to the
//! [`Formatter`](crate::Formatter) by reference.
//!
//! Two source formats exist. A structured dictionary accepts both plain
//! strings and fragment lists; a plain dictionary accepts strings only.

use crate::error::{CoreError, DictionaryError};
use crate::template::{Arg, Template, MISSING_ARGUMENT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Which template forms a dictionary accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryVariant {
    /// Plain strings and fragment lists
    #[default]
    Structured,
    /// Plain strings only
    Plain,
}

impl std::fmt::Display for DictionaryVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryVariant::Structured => write!(f, "structured"),
            DictionaryVariant::Plain => write!(f, "plain"),
        }
    }
}

/// Read-only mapping from message code to template
///
/// # Example
///
/// ```
/// use i18n_asset_core::{Dictionary, DictionaryVariant};
///
/// let dict = Dictionary::from_json(
///     r#"{"inbox": ["Hello ", 0, ", you have ", 1, " messages"]}"#,
///     DictionaryVariant::Structured,
/// )
/// .unwrap();
///
/// assert_eq!(dict.localize("inbox", &[&"Ann", &5]), "Hello Ann, you have 5 messages");
/// assert_eq!(dict.localize("missing", &[]), "[missing]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    variant: DictionaryVariant,
    messages: HashMap<String, Template>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new(variant: DictionaryVariant) -> Self {
        Self {
            variant,
            messages: HashMap::new(),
        }
    }

    /// Add a plain string entry
    pub fn with_plain(mut self, code: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages
            .insert(code.into(), Template::Plain(text.into()));
        self
    }

    /// Add a structured entry
    ///
    /// A plain dictionary flattens the fragments into `{N}` notation, which
    /// renders identically through the formatter.
    pub fn with_structured(mut self, code: impl Into<String>, template: impl Into<Template>) -> Self {
        let template = template.into();
        let template = match self.variant {
            DictionaryVariant::Structured => template,
            DictionaryVariant::Plain => Template::Plain(template.to_string()),
        };
        self.messages.insert(code.into(), template);
        self
    }

    /// Parse a JSON object of `code -> string | [string | index, ...]`
    pub fn from_json(source: &str, variant: DictionaryVariant) -> Result<Self, CoreError> {
        let messages: HashMap<String, Template> =
            serde_json::from_str(source).map_err(DictionaryError::ParseJson)?;

        if variant == DictionaryVariant::Plain {
            if let Some(code) = messages
                .iter()
                .find(|(_, template)| template.is_structured())
                .map(|(code, _)| code.clone())
            {
                return Err(DictionaryError::StructuredInPlain { code }.into());
            }
        }

        Ok(Self { variant, messages })
    }

    /// Read and parse a JSON dictionary file
    pub fn load_from_path(path: &Path, variant: DictionaryVariant) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| DictionaryError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let dictionary = Self::from_json(&content, variant)?;
        tracing::info!(
            "loaded {} {} messages from {}",
            dictionary.len(),
            variant,
            path.display()
        );
        Ok(dictionary)
    }

    /// Look up the template stored for `code`
    ///
    /// Exact, case-sensitive match. Absence is not an error.
    pub fn lookup(&self, code: &str) -> Option<&Template> {
        self.messages.get(code)
    }

    /// Resolve `code` directly, without default-message handling
    ///
    /// Structured templates are rendered against `args`; plain templates are
    /// returned verbatim. An unknown code yields `[code]`.
    pub fn localize(&self, code: &str, args: &[Arg<'_>]) -> String {
        match self.lookup(code) {
            Some(template) => template.render_with(args, MISSING_ARGUMENT),
            None => {
                tracing::debug!("missing message code '{}'", code);
                placeholder(code)
            }
        }
    }

    /// Which template forms this dictionary accepts
    pub fn variant(&self) -> DictionaryVariant {
        self.variant
    }

    /// Whether `code` has an entry
    pub fn contains(&self, code: &str) -> bool {
        self.messages.contains_key(code)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All codes, sorted
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.messages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Iterate over entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.messages.iter().map(|(code, t)| (code.as_str(), t))
    }
}

impl FromIterator<(String, Template)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, Template)>>(iter: I) -> Self {
        Self {
            variant: DictionaryVariant::Structured,
            messages: iter.into_iter().collect(),
        }
    }
}

/// The bracketed text shown for a code with no entry
pub fn placeholder(code: &str) -> String {
    format!("[{}]", code)
}

/// Resolve a code with trailing arguments
///
/// ```
/// use i18n_asset_core::{localize, Dictionary, DictionaryVariant, Fragment};
///
/// let dict = Dictionary::new(DictionaryVariant::Structured)
///     .with_structured("bye", vec![Fragment::from("Bye "), Fragment::ArgRef(0)]);
/// assert_eq!(localize!(dict, "bye", "Ann"), "Bye Ann");
/// assert_eq!(localize!(dict, "nope"), "[nope]");
/// ```
#[macro_export]
macro_rules! localize {
    ($dict:expr, $code:expr $(,)?) => {
        $dict.localize($code, &[])
    };
    ($dict:expr, $code:expr, $($arg:expr),+ $(,)?) => {
        $dict.localize($code, $crate::msg_args![$($arg),+])
    };
}

/// Build an argument slice from values of mixed types
///
/// ```
/// use i18n_asset_core::{msg_args, template::substitute};
///
/// assert_eq!(substitute("{0} x {1}", msg_args!["a", 3]), "a x 3");
/// ```
#[macro_export]
macro_rules! msg_args {
    () => {
        &[] as &[&dyn ::std::fmt::Display]
    };
    ($($arg:expr),+ $(,)?) => {
        &[$(&$arg as &dyn ::std::fmt::Display),+] as &[&dyn ::std::fmt::Display]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Fragment;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const STRUCTURED_JSON: &str = r#"{
        "app.title": "Inbox",
        "inbox.count": "Hello {0}, you have {1} messages",
        "inbox.greeting": ["Hello ", 0, ", you have ", 1, " messages"],
        "empty": ""
    }"#;

    fn structured() -> Dictionary {
        Dictionary::from_json(STRUCTURED_JSON, DictionaryVariant::Structured).unwrap()
    }

    #[test]
    fn test_lookup_present_and_absent() {
        let dict = structured();
        assert_eq!(dict.lookup("app.title"), Some(&Template::from("Inbox")));
        assert!(dict.lookup("inbox.greeting").unwrap().is_structured());
        assert!(dict.lookup("nope").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let dict = structured();
        assert!(dict.lookup("App.Title").is_none());
        assert!(dict.lookup(" app.title").is_none());
    }

    #[test]
    fn test_localize_structured() {
        let dict = structured();
        assert_eq!(
            dict.localize("inbox.greeting", &[&"Ann", &5]),
            "Hello Ann, you have 5 messages"
        );
    }

    #[test]
    fn test_localize_plain_is_verbatim() {
        let dict = structured();
        assert_eq!(
            dict.localize("inbox.count", &[&"Ann", &5]),
            "Hello {0}, you have {1} messages"
        );
    }

    #[test]
    fn test_localize_unknown_code() {
        assert_eq!(structured().localize("no.such.code", &[]), "[no.such.code]");
    }

    #[test]
    fn test_localize_macro_forms() {
        let dict = structured();
        assert_eq!(
            localize!(dict, "inbox.greeting", "Ann", 5),
            "Hello Ann, you have 5 messages"
        );
        assert_eq!(localize!(dict, "app.title"), "Inbox");
        assert_eq!(
            localize!(dict, "inbox.greeting", "Ann"),
            "Hello Ann, you have undefined messages"
        );
    }

    #[test]
    fn test_plain_variant_rejects_fragments() {
        let result = Dictionary::from_json(STRUCTURED_JSON, DictionaryVariant::Plain);
        match result {
            Err(CoreError::Dictionary(DictionaryError::StructuredInPlain { code })) => {
                assert_eq!(code, "inbox.greeting");
            }
            other => panic!("Expected StructuredInPlain, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_variant_accepts_strings() {
        let dict =
            Dictionary::from_json(r#"{"a": "A", "b": "B {0}"}"#, DictionaryVariant::Plain).unwrap();
        assert_eq!(dict.variant(), DictionaryVariant::Plain);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_with_structured_flattens_in_plain_dictionary() {
        let dict = Dictionary::new(DictionaryVariant::Plain)
            .with_structured("g", vec![Fragment::from("Hi "), Fragment::ArgRef(0)]);
        assert_eq!(dict.lookup("g"), Some(&Template::from("Hi {0}")));
    }

    #[test]
    fn test_invalid_json() {
        assert!(Dictionary::from_json("not json", DictionaryVariant::Structured).is_err());
        assert!(Dictionary::from_json(r#"["a"]"#, DictionaryVariant::Structured).is_err());
        assert!(Dictionary::from_json(r#"{"a": 1}"#, DictionaryVariant::Structured).is_err());
    }

    #[test]
    fn test_codes_sorted() {
        let dict = structured();
        assert_eq!(
            dict.codes(),
            vec!["app.title", "empty", "inbox.count", "inbox.greeting"]
        );
        assert!(dict.contains("empty"));
        assert!(!dict.is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let dict: Dictionary = vec![("k".to_string(), Template::from("v"))]
            .into_iter()
            .collect();
        assert_eq!(dict.variant(), DictionaryVariant::Structured);
        assert_eq!(dict.localize("k", &[]), "v");
    }

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(STRUCTURED_JSON.as_bytes()).unwrap();

        let dict = Dictionary::load_from_path(file.path(), DictionaryVariant::Structured).unwrap();
        assert_eq!(dict.len(), 4);
    }

    #[test]
    fn test_load_from_missing_path() {
        let result = Dictionary::load_from_path(
            Path::new("/nonexistent/messages.json"),
            DictionaryVariant::Structured,
        );
        assert!(matches!(
            result,
            Err(CoreError::Dictionary(DictionaryError::ReadFile { .. }))
        ));
    }
}
