//! Redact CLI command.
//!
//! Reads all of stdin, replaces known credential literals, and writes the
//! result to stdout. Designed to sit behind a version-control content
//! filter (e.g. a git `clean` filter), so the transform must never fail on
//! arbitrary input: binary content passes through untouched.

use crate::security::CredentialRedactor;
use crate::{Error, Result};
use std::io::{self, Read, Write};

/// Runs the redact filter from stdin to stdout.
///
/// # Errors
///
/// Returns an error only for stdin/stdout I/O failures. Undecodable input
/// is a defined alternate path, not an error.
pub fn cmd_redact() -> Result<()> {
    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .map_err(|e| Error::OperationFailed {
            operation: "read_stdin".to_string(),
            cause: e.to_string(),
        })?;

    let redactor = CredentialRedactor::new();
    let outcome = redactor.redact_bytes(input);

    if outcome.is_binary() {
        tracing::debug!("input is not valid UTF-8, passing through unchanged");
    }

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&outcome.into_bytes())
        .map_err(|e| Error::OperationFailed {
            operation: "write_stdout".to_string(),
            cause: e.to_string(),
        })?;
    stdout.flush().map_err(|e| Error::OperationFailed {
        operation: "flush_stdout".to_string(),
        cause: e.to_string(),
    })?;

    Ok(())
}
