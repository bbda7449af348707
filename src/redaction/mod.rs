//! Key selection, traversal, and the redaction entrypoints.
//!
//! This module ties the pieces together:
//!
//! - **`keys`**: Selection layer - which mapping keys are sensitive (`SensitiveKeys`)
//! - **`redact`**: Application layer - the redaction machinery (`Redactor`, `redact`)
//!
//! The `slog` integration lives in `crate::slog`.

mod keys;
mod redact;

pub use keys::SensitiveKeys;
pub use redact::{redact, Redactor, Traversal, REDACTED_PLACEHOLDER};
