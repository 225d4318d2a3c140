use super::atom::Atom;
use std::collections::HashMap;

/// Represents a complete molecule as an atom graph keyed by serial number.
///
/// This struct is the central data structure handed to downstream consumers.
/// It is rebuilt wholesale on each parse - there is no incremental update API;
/// parsing a new document discards the prior molecule entirely. After the parse
/// returns, the molecule is an immutable snapshot from the library's
/// perspective.
///
/// The atom mapping is an unordered keyed collection; consumers must not rely
/// on any particular iteration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    /// Mapping from serial number to atom. Keys are unique by construction.
    atoms: HashMap<u32, Atom>,
}

impl Molecule {
    /// Creates a new, empty molecule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an immutable reference to an atom by its serial number.
    ///
    /// # Arguments
    ///
    /// * `serial` - The serial number to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the atom exists, otherwise `None`.
    pub fn atom(&self, serial: u32) -> Option<&Atom> {
        self.atoms.get(&serial)
    }

    /// Returns an iterator over all atoms in the molecule, in no guaranteed
    /// order.
    pub fn atoms_iter(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.values()
    }

    /// Returns the number of atoms in the molecule.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Returns `true` if the molecule contains no atoms.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns the total number of declared bond links across all atoms.
    ///
    /// Each link entry counts once, so a symmetric declaration (1->2 and 2->1)
    /// counts twice, matching what a renderer consuming the link lists would
    /// draw.
    pub fn link_count(&self) -> usize {
        self.atoms.values().map(|atom| atom.links.len()).sum()
    }

    /// Inserts an atom keyed by its serial number, replacing any existing
    /// atom with the same serial (last write wins).
    pub(crate) fn insert(&mut self, atom: Atom) {
        self.atoms.insert(atom.serial, atom);
    }

    /// Retrieves a mutable reference to an atom by its serial number.
    pub(crate) fn atom_mut(&mut self, serial: u32) -> Option<&mut Atom> {
        self.atoms.get_mut(&serial)
    }
}
