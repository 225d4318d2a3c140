//! # LigandView Core Library
//!
//! A library for decoding PDB-style ligand models into in-memory atom/bond graphs
//! and deriving the sphere and cylinder placements an external renderer needs to
//! draw them.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Molecule`),
//!   fixed-column record decoding (`io::pdb`), the CPK element palette, and pure
//!   bond geometry.
//!
//! - **[`layout`]: The Assembly Layer.** Consumes a `Molecule` and produces a
//!   render-ready description: one sphere instance per atom and one cylinder
//!   instance per bond link, with unresolved bond targets skipped rather than
//!   failing the whole display.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties parsing and layout together into complete procedures, such as
//!   turning a raw document into a drawable molecule in a single call.
//!
//! Rendering itself, user interaction, and network retrieval of documents are
//! deliberately outside this library; callers hand in a full document as text and
//! receive plain data back.

pub mod core;
pub mod layout;
pub mod workflows;
