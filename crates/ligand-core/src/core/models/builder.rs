use super::atom::Atom;
use super::molecule::Molecule;

/// Incrementally builds a [`Molecule`] during the multi-pass document scan.
///
/// The builder is the only write path into a molecule: atoms are inserted
/// keyed by serial (last write wins on duplicates), and links are appended to
/// already-inserted anchors. Linking against an unknown anchor is reported to
/// the caller rather than treated as an error, since connectivity records may
/// legitimately reference atoms outside the decoded set.
pub struct MoleculeBuilder {
    molecule: Molecule,
}

impl Default for MoleculeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MoleculeBuilder {
    pub fn new() -> Self {
        Self {
            molecule: Molecule::new(),
        }
    }

    /// Inserts an atom keyed by its serial number. A later atom with the same
    /// serial replaces the earlier one, links included.
    pub fn add_atom(&mut self, atom: Atom) -> &mut Self {
        self.molecule.insert(atom);
        self
    }

    /// Returns `true` if an atom with the given serial has been inserted.
    pub fn contains(&self, serial: u32) -> bool {
        self.molecule.atom(serial).is_some()
    }

    /// Appends `target` to the link list of the atom keyed by `anchor`.
    ///
    /// Returns `true` if the link was recorded, or `false` (with the molecule
    /// untouched) when no atom with the anchor serial exists. The target serial
    /// is never checked here; dangling targets are a valid state resolved (or
    /// skipped) by consumers.
    pub fn link(&mut self, anchor: u32, target: u32) -> bool {
        match self.molecule.atom_mut(anchor) {
            Some(atom) => {
                atom.links.push(target);
                true
            }
            None => false,
        }
    }

    pub fn build(self) -> Molecule {
        self.molecule
    }
}
