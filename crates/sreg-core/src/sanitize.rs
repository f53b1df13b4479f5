//! # Input Sanitization
//!
//! Every submitted value is sanitized before it is validated or displayed.
//! [`Sanitized`] is the only way text reaches an HTML document: it can only
//! be built by escaping, so renderers embed it verbatim without a second
//! escaping pass.

use serde::{Serialize, Serializer};

/// A submitted value in two forms: the cleaned text that rules evaluate,
/// and the escaped text that is safe to embed in HTML text content and
/// quoted attributes.
///
/// Cleaning drops ASCII control characters other than tab, line feed and
/// carriage return. Escaping then replaces the five HTML-significant
/// characters with named entities. Rules never see entities, so a
/// one-character `<` is still one character long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sanitized {
    text: String,
    escaped: String,
}

impl Sanitized {
    /// Clean `raw` and escape HTML special characters.
    pub fn special_chars(raw: &str) -> Self {
        let text: String = raw
            .chars()
            .filter(|c| matches!(c, '\t' | '\n' | '\r') || !c.is_ascii_control())
            .collect();
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                c => escaped.push(c),
            }
        }
        Self { text, escaped }
    }

    /// Escaped text, ready to embed.
    pub fn as_str(&self) -> &str {
        &self.escaped
    }

    /// Cleaned, unescaped text. Validation rules read this.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `true` when nothing but whitespace remains.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl std::fmt::Display for Sanitized {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.escaped)
    }
}

impl Serialize for Sanitized {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.escaped)
    }
}

/// Characters permitted to survive email sanitization besides ASCII
/// letters and digits.
const EMAIL_PUNCTUATION: &str = "!#$%&'*+-=?^_`{|}~@.[]";

/// Strip every character that cannot appear in an email address.
///
/// The result is plain text, not yet HTML-safe: validate it, then pass it
/// through [`Sanitized::special_chars`] for display.
pub fn filter_email(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || EMAIL_PUNCTUATION.contains(*c))
        .collect()
}

/// Keep only ASCII digits.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
