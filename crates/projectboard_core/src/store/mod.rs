//! Observable in-memory state.
//!
//! # Responsibility
//! - Hold ordered records and fan changes out to subscribed views.
//! - Provide the single application store for projects.
//!
//! # Invariants
//! - Insertion order is the canonical order; nothing reorders or removes.
//! - Subscribers are notified synchronously, in registration order, with a
//!   snapshot taken after the append completed.
//! - All access happens on the UI event thread (`Rc`/`RefCell`, not `Send`).

pub mod observable;
pub mod project_store;
