//! # bs-core
//!
//! Core types, error definitions, and digit helpers for bikram-sambat.
//!
//! This crate provides the building blocks shared by the other crates in
//! the workspace: the error hierarchy, the two supported display languages,
//! per-language labels, and the Devanagari digit helpers used to render
//! years, months, and days.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Display language (`ne` / `en`) and per-language labels.
pub mod language;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use language::{Language, Localized};
pub use utilities::digits::{pad_two_digits, to_localized_digits, to_nepali_digits};
