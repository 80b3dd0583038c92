//! Domain model for the project board.
//!
//! # Responsibility
//! - Define the record created by the input form and listed by the views.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Projects are immutable once appended to the store.

pub mod project;
