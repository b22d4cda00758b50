//! CLI strings, served by the core dictionary itself.
//!
//! The English dictionary is compiled in and parsed on first use.

use i18n_asset_core::{Arg, Dictionary, DictionaryVariant, Formatter};
use std::sync::OnceLock;

const EN_MESSAGES: &str = include_str!("../locales/en.json");

static DICTIONARY: OnceLock<Dictionary> = OnceLock::new();

fn get_dictionary() -> &'static Dictionary {
    DICTIONARY.get_or_init(|| {
        Dictionary::from_json(EN_MESSAGES, DictionaryVariant::Structured)
            .expect("valid bundled dictionary")
    })
}

/// Look up a message by its code. Returns `[code]` if not found.
pub fn t(code: &str) -> String {
    Formatter::new(get_dictionary()).md(code, None)
}

/// Look up a message with positional arguments.
pub fn t_args(code: &str, args: &[Arg<'_>]) -> String {
    Formatter::new(get_dictionary()).m(code, args, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lookup() {
        assert_eq!(t("version-title"), "i18n-asset");
    }

    #[test]
    fn test_lookup_with_args() {
        let result = t_args("check-entries", &[&3, &1, &2]);
        assert_eq!(result, "Entries: 3 (1 structured, 2 plain)");
    }

    #[test]
    fn test_structured_lookup_with_args() {
        let result = t_args("codes-summary", &[&4, &"plain"]);
        assert_eq!(result, "4 codes in plain dictionary");
    }

    #[test]
    fn test_missing_key_returns_placeholder() {
        assert_eq!(t("nonexistent-key"), "[nonexistent-key]");
    }
}
