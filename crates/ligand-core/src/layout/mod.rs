//! # Layout Module
//!
//! This stateless layer turns a decoded [`Molecule`] into the render-ready
//! description an external renderer consumes: one sphere instance per atom and
//! one cylinder instance per declared bond link. The renderer is responsible
//! for turning these into drawable primitives; nothing here draws.
//!
//! A link whose target serial does not exist in the molecule is skipped and
//! counted rather than failing the whole display.

pub mod tables;

use crate::core::models::atom::Atom;
use crate::core::models::molecule::Molecule;
use crate::core::palette::{self, DisplayCategory};
use crate::core::utils::geometry::{self, BondPlacement};
use nalgebra::Point3;
use tracing::warn;

/// Sizing options for the generated instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Sphere radius per atom, in Angstroms.
    pub atom_radius: f32,
    /// Cylinder radius per bond, in Angstroms.
    pub bond_radius: f32,
    /// Radial segment count hint passed through to the renderer.
    pub radial_segments: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            atom_radius: 0.4,
            bond_radius: 0.1,
            radial_segments: 16,
        }
    }
}

/// One sphere to draw for an atom.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereInstance {
    pub serial: u32,
    pub center: Point3<f32>,
    pub radius: f32,
    pub category: DisplayCategory,
}

/// One cylinder to draw for a bond link.
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderInstance {
    pub from: u32,
    pub to: u32,
    pub placement: BondPlacement,
    pub radius: f32,
    pub segments: u32,
}

/// The complete render-ready description of a molecule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoleculeLayout {
    pub spheres: Vec<SphereInstance>,
    pub cylinders: Vec<CylinderInstance>,
    /// Link entries skipped because their target serial is absent.
    pub unresolved_bonds: usize,
}

/// Builds the sphere and cylinder instances for a molecule.
///
/// Atoms are visited in ascending serial order so repeated calls produce the
/// same layout; molecule iteration order itself remains unspecified. Every
/// link entry yields its own cylinder, so duplicate declarations and both
/// directions of a symmetric declaration are drawn verbatim.
pub fn layout_molecule(molecule: &Molecule, options: &LayoutOptions) -> MoleculeLayout {
    let mut layout = MoleculeLayout::default();

    let mut atoms: Vec<&Atom> = molecule.atoms_iter().collect();
    atoms.sort_unstable_by_key(|atom| atom.serial);

    for atom in atoms {
        layout.spheres.push(SphereInstance {
            serial: atom.serial,
            center: atom.position,
            radius: options.atom_radius,
            category: palette::category_for(&atom.element),
        });

        for &target in &atom.links {
            let Some(other) = molecule.atom(target) else {
                warn!(
                    from = atom.serial,
                    to = target,
                    "Bond target serial not found; skipping cylinder."
                );
                layout.unresolved_bonds += 1;
                continue;
            };
            layout.cylinders.push(CylinderInstance {
                from: atom.serial,
                to: target,
                placement: geometry::bond_placement(&atom.position, &other.position),
                radius: options.bond_radius,
                segments: options.radial_segments,
            });
        }
    }

    layout
}
