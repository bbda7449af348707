//! Key-based redaction of nested documents before they reach a log sink.
//!
//! This crate separates:
//! - **Selection**: which mapping keys are sensitive ([`SensitiveKeys`]).
//! - **Redaction**: producing an independent copy of a document with every
//!   selected key's value replaced ([`Redactor`], [`redact`]).
//!
//! A document is any [`serde_json::Value`]. Objects are traversed at every
//! depth; everything else (strings, numbers, booleans, null, arrays) is a
//! leaf and is copied untouched. A matched key's value is replaced wholesale,
//! whatever its type, and is never descended into.
//!
//! Key rules:
//! - The input document is never mutated; the output is a fresh,
//!   independently-owned value.
//! - The key set applies uniformly at every depth.
//! - Arrays are opaque leaves: objects nested inside arrays are not visited.
//! - Matching is on mapping keys, never on values.
//!
//! What this crate does:
//! - defines the [`SensitiveKeys`] selection type
//! - defines the [`Redactor`] and the [`redact`] entrypoint
//! - provides integrations behind feature flags (e.g. `slog`)
//!
//! What it does not do:
//! - perform I/O or logging
//! - redact by value content or pattern

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::missing_const_for_fn,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use redaction::{redact, Redactor, SensitiveKeys, Traversal, REDACTED_PLACEHOLDER};
