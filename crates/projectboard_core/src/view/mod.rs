//! View components and their rendering collaborator.
//!
//! # Responsibility
//! - Define the `Renderer` boundary the host UI implements.
//! - Provide the shared mount lifecycle (`ViewComponent`, `View`).
//! - Implement the project input form and the filtered project lists.
//!
//! # Invariants
//! - A view attaches to its host exactly once, during construction, and only
//!   after every template, host and sub-element lookup has succeeded.
//! - Unresolvable templates, hosts or sub-elements abort construction with
//!   `MountError`.
//! - Event handlers capture a weak handle to their view when registered.

pub mod component;
pub mod project_input;
pub mod project_list;
pub mod renderer;
