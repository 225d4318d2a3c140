//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent ligand
//! molecules in LigandView, providing the foundation for parsing and layout.
//!
//! ## Overview
//!
//! The models module defines the core abstractions for representing molecular
//! structures as an atom graph with serial-number-keyed connectivity. These
//! models are designed to:
//!
//! - **Represent molecular structure** - Atomic coordinates and declared connectivity
//! - **Tolerate imperfect input** - Dangling bond references are a valid state, not an error
//! - **Stay renderer-agnostic** - Plain data with no drawing or scene-graph concerns
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom representation with position, element code, and link list
//! - [`molecule`] - The serial-keyed atom mapping built wholesale per parse
//! - [`builder`] - Incremental construction during the multi-pass document scan

pub mod atom;
pub mod builder;
pub mod molecule;
