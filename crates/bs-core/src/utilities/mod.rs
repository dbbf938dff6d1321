//! Utility helpers.

/// Devanagari digit transliteration and zero padding.
pub mod digits;
