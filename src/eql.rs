//! Minimal `key=value` configuration language.
//!
//! Used for the `rules`, `categories` and `ignore` settings, e.g.
//! `fix=patch feat=minor bang=major` or `feat="New Features" *='Other'`.
//!
//! Values may be wrapped in `"` or `'`. Inside a quoted value a backslash only
//! escapes the active delimiter; any other escaped character keeps its
//! backslash.

use indexmap::IndexMap;
use thiserror::Error;

use crate::error::{ReleaseError, Result};

/// Malformed configuration input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unexpected '=' at position {position}")]
    UnexpectedEquals { position: usize },

    #[error("unterminated quoted string")]
    UnterminatedQuote,
}

/// Parsed `key=value` pairs.
///
/// Keys keep the position of their first declaration; redeclaring a key
/// replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMapping {
    entries: IndexMap<String, String>,
}

impl ConfigMapping {
    pub fn new() -> Self {
        ConfigMapping::default()
    }

    /// Insert a pair, returning the value it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Serialize back into the configuration language.
    ///
    /// Parsing the returned string yields a mapping equal to `self`. Fails for
    /// keys or values the grammar cannot express, such as a key containing `=`
    /// or a value with surrounding whitespace.
    pub fn to_eql(&self) -> Result<String> {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            if key.is_empty() || key.contains('=') || key.trim() != key {
                return Err(ReleaseError::Unencodable { key: key.clone() });
            }
            let encoded = encode_value(value)
                .ok_or_else(|| ReleaseError::Unencodable { key: key.clone() })?;
            pairs.push(format!("{}={}", key, encoded));
        }
        Ok(pairs.join(" "))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConfigMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = ConfigMapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

fn encode_value(value: &str) -> Option<String> {
    if value.trim() != value {
        return None;
    }
    let needs_quotes =
        value.is_empty() || value.contains(' ') || value.starts_with(['"', '\'']);
    if !needs_quotes {
        return Some(value.to_string());
    }
    quote_with(value, '"').or_else(|| quote_with(value, '\''))
}

fn quote_with(value: &str, delimiter: char) -> Option<String> {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(delimiter);
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c == delimiter {
            out.push('\\');
            out.push(c);
        } else if c == '\\' {
            match chars.next() {
                // a lone backslash right before the delimiter has no spelling
                Some(next) if next == delimiter => return None,
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                // the trailing space is trimmed away again on parse
                None => out.push_str("\\ "),
            }
        } else {
            out.push(c);
        }
    }
    out.push(delimiter);
    Some(out)
}

/// Where the scanner currently is within a `key=value` pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Key,
    Value,
    Quote { delimiter: char },
}

/// Scanner state threaded through [`parse`].
///
/// Each call to [`ScanState::advance`] consumes one character and may
/// complete a pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    mode: Mode,
    key: String,
    value: String,
    escaping: bool,
}

impl ScanState {
    pub fn new() -> Self {
        ScanState::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_escaping(&self) -> bool {
        self.escaping
    }

    /// Consume the character at 1-based `position`
    pub fn advance(
        &mut self,
        position: usize,
        c: char,
    ) -> std::result::Result<Option<(String, String)>, SyntaxError> {
        match self.mode {
            Mode::Key => {
                if c == ' ' && self.key.is_empty() {
                    return Ok(None);
                }
                if c == '=' {
                    if self.key.is_empty() {
                        return Err(SyntaxError::UnexpectedEquals { position });
                    }
                    self.mode = Mode::Value;
                    return Ok(None);
                }
                self.key.push(c);
            }
            Mode::Value => {
                if self.value.is_empty() {
                    if c == ' ' {
                        return Ok(None);
                    }
                    if c == '"' || c == '\'' {
                        self.mode = Mode::Quote { delimiter: c };
                        return Ok(None);
                    }
                }
                if c == ' ' {
                    return Ok(Some(self.commit()));
                }
                self.value.push(c);
            }
            Mode::Quote { delimiter } => {
                if self.escaping {
                    if c != delimiter {
                        self.value.push('\\');
                    }
                    self.value.push(c);
                    self.escaping = false;
                } else if c == '\\' {
                    self.escaping = true;
                } else if c == delimiter {
                    return Ok(Some(self.commit()));
                } else {
                    self.value.push(c);
                }
            }
        }
        Ok(None)
    }

    /// Close the scan at end of input
    pub fn finish(mut self) -> std::result::Result<Option<(String, String)>, SyntaxError> {
        match self.mode {
            Mode::Quote { .. } => Err(SyntaxError::UnterminatedQuote),
            Mode::Value => Ok(Some(self.commit())),
            // a dangling key without '=' carries no value
            Mode::Key => Ok(None),
        }
    }

    fn commit(&mut self) -> (String, String) {
        let pair = (
            self.key.trim().to_string(),
            self.value.trim().to_string(),
        );
        self.key.clear();
        self.value.clear();
        self.escaping = false;
        self.mode = Mode::Key;
        pair
    }
}

/// Parse a configuration string into its key/value pairs.
///
/// # Example
/// ```
/// let rules = semver_release::eql::parse("fix=patch feat = minor").unwrap();
/// assert_eq!(rules.get("fix"), Some("patch"));
/// assert_eq!(rules.get("feat"), Some("minor"));
/// ```
pub fn parse(input: &str) -> std::result::Result<ConfigMapping, SyntaxError> {
    let mut state = ScanState::new();
    let mut mapping = ConfigMapping::new();

    for (index, c) in input.chars().enumerate() {
        if let Some((key, value)) = state.advance(index + 1, c)? {
            mapping.insert(key, value);
        }
    }
    if let Some((key, value)) = state.finish()? {
        mapping.insert(key, value);
    }

    Ok(mapping)
}
