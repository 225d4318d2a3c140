//! # Workflows Module
//!
//! The highest-level, user-facing layer. Workflows tie the [`core`](crate::core)
//! and [`layout`](crate::layout) layers together into complete procedures,
//! providing a simple entry point for end-users of the library.

pub mod visualize;
