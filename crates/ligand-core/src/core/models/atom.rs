use nalgebra::Point3;

/// Represents a single atom decoded from one fixed-column record.
///
/// This struct encapsulates everything the rest of the pipeline needs to know
/// about an atom: its identity within the document, its position in Angstroms,
/// and the connectivity declared for it. It is plain data with no behavior tied
/// to any renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The serial number uniquely identifying this atom within one document.
    /// Never changes after construction.
    pub serial: u32,
    /// The short atom name label (e.g., "CA", "N1"), trimmed.
    pub name: String,
    /// The single-character chain identifier. Informational only; `' '` when
    /// the column is absent from the record.
    pub chain_id: char,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f32>,
    /// The raw two-character, right-justified element code exactly as decoded
    /// (e.g., `" C"`). Used only for display-category lookup; never validated
    /// against a periodic table.
    pub element: String,
    /// Serial numbers this atom bonds to, in declaration order. Duplicates are
    /// permitted and preserved; entries may reference serials not present in
    /// the molecule (a tolerated dangling state).
    pub links: Vec<u32>,
}

impl Atom {
    /// Creates a new `Atom` with an empty link list.
    ///
    /// # Arguments
    ///
    /// * `serial` - The serial number identifying the atom.
    /// * `name` - The trimmed atom name label.
    /// * `chain_id` - The single-character chain identifier.
    /// * `position` - The 3D coordinates of the atom.
    /// * `element` - The raw two-character element code.
    pub fn new(
        serial: u32,
        name: &str,
        chain_id: char,
        position: Point3<f32>,
        element: &str,
    ) -> Self {
        Self {
            serial,
            name: name.to_string(),
            chain_id,
            position,
            element: element.to_string(),
            links: Vec::new(),
        }
    }
}
