//! Provides input functionality for molecular structure documents.
//!
//! This module contains the fixed-column PDB record decoder and the trait-based
//! interface the rest of the library (and external callers) use to obtain a
//! [`Molecule`](crate::core::models::molecule::Molecule) from raw text.

pub mod pdb;
pub mod traits;
