//! Message templates and positional substitution
//!
//! A template is either a plain string that may carry `{N}` placeholders, or
//! a list of fragments mixing literal text with argument indices. Both
//! render to the same text for the same arguments.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// Text produced for an argument index that has no matching argument
pub const MISSING_ARGUMENT: &str = "undefined";

/// A positional formatting argument
pub type Arg<'a> = &'a dyn fmt::Display;

/// Stored representation of a message prior to substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Template {
    /// A string, optionally with `{N}` placeholders
    Plain(String),
    /// Literal fragments interleaved with argument references
    Structured(Vec<Fragment>),
}

/// One element of a structured template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fragment {
    /// Index into the caller's argument list
    ArgRef(usize),
    /// Literal text appended as is
    Literal(String),
}

impl Template {
    /// Render the template against `args`.
    ///
    /// Plain templates come back unchanged: placeholder substitution is the
    /// formatter's job, not the dictionary's.
    pub fn render(&self, args: &[Arg<'_>]) -> String {
        self.render_with(args, MISSING_ARGUMENT)
    }

    /// Render, writing `missing` for argument references past the end of `args`
    pub fn render_with(&self, args: &[Arg<'_>], missing: &str) -> String {
        match self {
            Template::Plain(text) => text.clone(),
            Template::Structured(fragments) => {
                let mut out = String::new();
                for fragment in fragments {
                    match fragment {
                        Fragment::Literal(text) => out.push_str(text),
                        Fragment::ArgRef(index) => push_arg(&mut out, args.get(*index), missing),
                    }
                }
                out
            }
        }
    }

    /// Whether this is the fragment-list form
    pub fn is_structured(&self) -> bool {
        matches!(self, Template::Structured(_))
    }

    /// Number of positional arguments the template refers to
    ///
    /// One more than the highest index referenced, or 0 when the template
    /// takes no arguments.
    pub fn arity(&self) -> usize {
        let highest = match self {
            Template::Plain(text) => highest_placeholder(text),
            Template::Structured(fragments) => fragments
                .iter()
                .filter_map(|f| match f {
                    Fragment::ArgRef(index) => Some(*index),
                    Fragment::Literal(_) => None,
                })
                .max(),
        };
        highest.map_or(0, |index| index + 1)
    }
}

/// Shows the template in plain `{N}` notation
impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Plain(text) => f.write_str(text),
            Template::Structured(fragments) => {
                for fragment in fragments {
                    match fragment {
                        Fragment::Literal(text) => f.write_str(text)?,
                        Fragment::ArgRef(index) => write!(f, "{{{}}}", index)?,
                    }
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Template::Plain(text.to_string())
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Template::Plain(text)
    }
}

impl From<Vec<Fragment>> for Template {
    fn from(fragments: Vec<Fragment>) -> Self {
        Template::Structured(fragments)
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Literal(text.to_string())
    }
}

impl From<usize> for Fragment {
    fn from(index: usize) -> Self {
        Fragment::ArgRef(index)
    }
}

/// Replace every `{i}` in `source` with `args[i]`
///
/// # Examples
/// ```
/// use i18n_asset_core::template::substitute;
///
/// let out = substitute("Hello {0}, you have {1} messages", &[&"Ann", &5]);
/// assert_eq!(out, "Hello Ann, you have 5 messages");
/// ```
pub fn substitute(source: &str, args: &[Arg<'_>]) -> String {
    substitute_with(source, args, MISSING_ARGUMENT)
}

/// Like [`substitute`], writing `missing` for indices past the end of `args`
///
/// Each `{i}` for `i` in `0..args.len()` is replaced everywhere, one index
/// at a time in ascending order, so text inserted for index `i` is matched
/// again by the passes for higher indices. Argument text is inserted
/// literally. Out-of-range markers in the source are resolved to `missing`
/// before those passes. Markers that are not a canonical decimal index
/// (`{}`, `{01}`, `{name}`) stay as written. With no arguments the source
/// is returned unchanged.
pub fn substitute_with(source: &str, args: &[Arg<'_>], missing: &str) -> String {
    if args.is_empty() {
        return source.to_string();
    }

    let mut out = replace_markers(source, |index| {
        (index >= args.len()).then(|| missing.to_string())
    });
    for (index, arg) in args.iter().enumerate() {
        let marker = format!("{{{}}}", index);
        if out.contains(&marker) {
            out = out.replace(&marker, &arg.to_string());
        }
    }
    out
}

/// Replace each canonical `{N}` for which `resolve` returns text
fn replace_markers(source: &str, resolve: impl Fn(usize) -> Option<String>) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match placeholder_at(after).and_then(|(index, consumed)| Some((resolve(index)?, consumed))) {
            Some((text, consumed)) => {
                out.push_str(&text);
                rest = &after[consumed..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn push_arg(out: &mut String, arg: Option<&Arg<'_>>, missing: &str) {
    match arg {
        // Writing into a String cannot fail
        Some(arg) => {
            let _ = write!(out, "{}", arg);
        }
        None => out.push_str(missing),
    }
}

/// Parse `N}` at the start of `s`; returns the index and the bytes consumed
fn placeholder_at(s: &str) -> Option<(usize, usize)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || s.as_bytes().get(digits) != Some(&b'}') {
        return None;
    }
    if digits > 1 && s.starts_with('0') {
        return None;
    }
    let index = s[..digits].parse().ok()?;
    Some((index, digits + 1))
}

fn highest_placeholder(source: &str) -> Option<usize> {
    let mut highest = None;
    let mut rest = source;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match placeholder_at(after) {
            Some((index, consumed)) => {
                highest = highest.max(Some(index));
                rest = &after[consumed..];
            }
            None => rest = after,
        }
    }
    highest
}
