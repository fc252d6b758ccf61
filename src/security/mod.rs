//! Credential detection and redaction.
//!
//! Recognizes exactly two fixed credential shapes (a Supabase project URL
//! and its anon-key JWT) when they appear quoted in text, and replaces each
//! with a fixed placeholder. This is deliberately not a general-purpose
//! secret scanner.

mod patterns;
mod redactor;

pub use redactor::{CredentialRedactor, RedactOutcome};
