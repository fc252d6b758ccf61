//! Content redaction.
//!
//! Replaces known credential literals with fixed placeholders, leaving all
//! other content untouched.

use super::patterns::credential_patterns;
use regex::Captures;

/// Outcome of a byte-level redaction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedactOutcome {
    /// The input decoded as UTF-8 and substitutions were applied.
    Text(String),
    /// The input was not valid UTF-8 and passes through untouched.
    Binary(Vec<u8>),
}

impl RedactOutcome {
    /// Returns the bytes to write downstream.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.into_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }

    /// Whether the input failed UTF-8 decoding.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }
}

/// Redacts known credential literals from content.
///
/// The patterns are fixed; there is nothing to configure.
pub struct CredentialRedactor;

impl CredentialRedactor {
    /// Creates a new credential redactor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Replaces every quoted credential occurrence, preserving the quote
    /// character that delimited the original span.
    #[must_use]
    pub fn redact(&self, content: &str) -> String {
        let mut result = content.to_string();

        for pattern in credential_patterns() {
            result = pattern
                .regex
                .replace_all(&result, |caps: &Captures<'_>| {
                    // The first character of the match is the delimiter; the
                    // same-quote alternation guarantees it also closes the span.
                    let matched = &caps[0];
                    let quote = &matched[..1];
                    format!("{quote}{}{quote}", pattern.placeholder)
                })
                .into_owned();
        }

        result
    }

    /// Returns the redacted content and a flag indicating if anything was
    /// replaced.
    #[must_use]
    pub fn redact_with_flag(&self, content: &str) -> (String, bool) {
        let redacted = self.redact(content);
        let was_redacted = redacted != content;
        (redacted, was_redacted)
    }

    /// Attempts UTF-8 decoding, then redacts.
    ///
    /// Decode failure is not an error: binary input passes through
    /// byte-for-byte, with no partial redaction attempted.
    #[must_use]
    pub fn redact_bytes(&self, input: Vec<u8>) -> RedactOutcome {
        match String::from_utf8(input) {
            Ok(text) => RedactOutcome::Text(self.redact(&text)),
            Err(err) => RedactOutcome::Binary(err.into_bytes()),
        }
    }

    /// Checks if content contains either credential shape.
    #[must_use]
    pub fn needs_redaction(&self, content: &str) -> bool {
        credential_patterns()
            .iter()
            .any(|pattern| pattern.regex.is_match(content))
    }

    /// Returns the names of the credential kinds found.
    #[must_use]
    pub fn detected_kinds(&self, content: &str) -> Vec<&'static str> {
        credential_patterns()
            .iter()
            .filter(|pattern| pattern.regex.is_match(content))
            .map(|pattern| pattern.name)
            .collect()
    }
}

impl Default for CredentialRedactor {
    fn default() -> Self {
        Self::new()
    }
}
