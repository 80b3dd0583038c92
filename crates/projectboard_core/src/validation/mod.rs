//! Field validation for user input.
//!
//! # Responsibility
//! - Evaluate optional constraints against one submitted value.
//!
//! # Invariants
//! - Validation is pure and never panics.
//! - Length bounds apply only to text values; range bounds apply only to
//!   numeric values. A bound of the other kind is skipped, never coerced.

pub mod rule;
