//! Renderer implementations shipped with the core.
//!
//! # Responsibility
//! - Provide a headless `Renderer` so the board runs without a browser or
//!   native UI toolkit attached.

pub mod memory;
