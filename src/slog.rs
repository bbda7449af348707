//! Adapters for emitting redacted documents through `slog`.
//!
//! This module exists to connect [`crate::Redactor`] with `slog` by providing
//! a `slog::Value` implementation that serializes already-redacted payloads
//! as structured JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from `Redactor::redact()`,
//!   not from the original document.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog`, choose which keys are sensitive, or emit log
//! records itself - the caller passes the adapter to `slog::info!` (or any
//! other level) like any key-value argument.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::Redactor;

/// Message stored in place of a payload that could not be serialized.
pub const SERIALIZE_FAILURE_MESSAGE: &str = "Failed to serialize redacted value";

/// A `slog::Value` that emits an owned redacted payload as structured JSON.
///
/// The payload is stored as a `serde_json::Value` and emitted via `slog`'s
/// nested-value support. Construct one with [`Redactor::loggable`] or
/// [`Redactor::loggable_of`]; the redaction has already happened by the time
/// this type exists, so the original document is never serialized.
pub struct RedactedJson {
    value: JsonValue,
}

impl RedactedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }
}

impl SlogValue for RedactedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl Redactor {
    /// Redacts `document` and returns a `slog::Value` that serializes the
    /// redacted copy as structured JSON.
    ///
    /// ## Example
    /// ```ignore
    /// use logredact::{Redactor, SensitiveKeys};
    ///
    /// let redactor = Redactor::new(SensitiveKeys::single("content"));
    /// info!(logger, "request body"; "data" => redactor.loggable(&body));
    /// ```
    #[must_use]
    pub fn loggable(&self, document: &JsonValue) -> RedactedJson {
        RedactedJson::new(self.redact(document))
    }

    /// Serializes `value` into a document, redacts it, and returns a
    /// `slog::Value` for the redacted copy.
    ///
    /// If `value` cannot be converted into `serde_json::Value`, the returned
    /// adapter stores a JSON string with [`SERIALIZE_FAILURE_MESSAGE`]; the
    /// failure is never surfaced through the logging call.
    #[must_use]
    pub fn loggable_of<T>(&self, value: &T) -> RedactedJson
    where
        T: Serialize,
    {
        let document = match serde_json::to_value(value) {
            Ok(document) => self.redact(&document),
            Err(_) => JsonValue::String(SERIALIZE_FAILURE_MESSAGE.to_string()),
        };
        RedactedJson::new(document)
    }
}
