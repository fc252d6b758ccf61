//! Credential patterns.
// Allow expect() on static regex patterns - these are guaranteed to compile
#![allow(clippy::expect_used)]
//!
//! The two credential shapes scour recognizes, compiled once as static
//! regexes. Both are matched only when surrounded by a quote character, and
//! the same character must open and close the span.

use regex::Regex;
use std::sync::LazyLock;

/// Quote characters that may delimit an embedded credential.
pub(crate) const QUOTE_CHARS: [char; 3] = ['"', '\'', '`'];

/// The Supabase project URL, escaped for regex use.
const SUPABASE_URL_BODY: &str = r"https://piyqnldhdxkmuwqajkhz\.supabase\.co";

/// The Supabase anon key: a fixed JWT header segment followed by two
/// base64url segments.
const SUPABASE_KEY_BODY: &str =
    r"eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+";

/// Expands a pattern body into an alternation of same-quote variants.
///
/// The regex crate has no backreferences, so the open/close-quote invariant
/// is encoded by listing each quote character explicitly. Mixed-quote spans
/// never match.
fn same_quote_variants(body: &str) -> String {
    let variants: Vec<String> = QUOTE_CHARS
        .iter()
        .map(|quote| format!("{quote}{body}{quote}"))
        .collect();
    variants.join("|")
}

static SUPABASE_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&same_quote_variants(SUPABASE_URL_BODY))
        .expect("static regex: Supabase URL pattern")
});

static SUPABASE_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&same_quote_variants(SUPABASE_KEY_BODY))
        .expect("static regex: Supabase anon key pattern")
});

/// A fixed credential pattern with its replacement placeholder.
pub(crate) struct CredentialPattern {
    pub(crate) name: &'static str,
    pub(crate) placeholder: &'static str,
    pub(crate) regex: &'static LazyLock<Regex>,
}

/// Returns the list of credential patterns to replace.
pub(crate) fn credential_patterns() -> Vec<CredentialPattern> {
    vec![
        CredentialPattern {
            name: "Supabase URL",
            placeholder: "REDACTED_SUPABASE_URL",
            regex: &SUPABASE_URL_REGEX,
        },
        CredentialPattern {
            name: "Supabase Anon Key",
            placeholder: "REDACTED_SUPABASE_KEY",
            regex: &SUPABASE_KEY_REGEX,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_matches_every_quote() {
        for quote in QUOTE_CHARS {
            let content = format!("{quote}https://piyqnldhdxkmuwqajkhz.supabase.co{quote}");
            assert!(SUPABASE_URL_REGEX.is_match(&content), "quote {quote:?}");
        }
    }

    #[test]
    fn test_key_matches_every_quote() {
        for quote in QUOTE_CHARS {
            let content =
                format!("{quote}eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.abc123_-XYZ.def456_-ABC{quote}");
            assert!(SUPABASE_KEY_REGEX.is_match(&content), "quote {quote:?}");
        }
    }

    #[test]
    fn test_mixed_quotes_rejected() {
        let content = "\"https://piyqnldhdxkmuwqajkhz.supabase.co'";
        assert!(!SUPABASE_URL_REGEX.is_match(content));
    }

    #[test]
    fn test_unquoted_rejected() {
        assert!(!SUPABASE_URL_REGEX.is_match("https://piyqnldhdxkmuwqajkhz.supabase.co"));
        assert!(!SUPABASE_KEY_REGEX.is_match(
            "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.abc.def"
        ));
    }

    #[test]
    fn test_key_requires_three_segments() {
        let content = "\"eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.onlyone\"";
        assert!(!SUPABASE_KEY_REGEX.is_match(content));
    }

    #[test]
    fn test_key_prefix_must_match_exactly() {
        // A different JWT header segment is not this credential.
        let content = "\"eyJzb21ldGhpbmcifQ.abc.def\"";
        assert!(!SUPABASE_KEY_REGEX.is_match(content));
    }

    #[test]
    fn test_other_supabase_hosts_rejected() {
        let content = "\"https://someotherproject.supabase.co\"";
        assert!(!SUPABASE_URL_REGEX.is_match(content));
    }
}
