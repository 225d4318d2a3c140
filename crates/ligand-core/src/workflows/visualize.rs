use crate::core::io::pdb::{ParseReport, PdbError, PdbFile};
use crate::core::io::traits::MolecularFile;
use crate::core::models::molecule::Molecule;
use crate::layout::{self, LayoutOptions, MoleculeLayout};
use tracing::{info, instrument, warn};

/// Everything a caller needs after turning a raw document into drawable data.
#[derive(Debug, Clone)]
pub struct VisualizeResult {
    pub molecule: Molecule,
    pub layout: MoleculeLayout,
    pub report: ParseReport,
}

/// Decodes a full ligand document and assembles its render-ready layout.
///
/// The document must be complete; there is no streaming or partial-parse
/// mode. An empty or atom-free document yields an empty molecule and layout,
/// not an error - the caller decides whether that is acceptable.
///
/// # Errors
///
/// Returns an error only when the input is structurally unreadable; malformed
/// records and dangling connectivity are collected in the returned report.
#[instrument(skip_all, name = "visualize_workflow")]
pub fn run(document: &str, options: &LayoutOptions) -> Result<VisualizeResult, PdbError> {
    info!("Decoding ligand document ({} bytes).", document.len());
    let (molecule, report) = PdbFile::read_str(document)?;

    if molecule.is_empty() {
        warn!("No ATOM records decoded; returning an empty molecule.");
    }
    if !report.is_clean() {
        warn!(
            skipped = report.skipped.len(),
            dangling = report.dangling.len(),
            "Document decoded with anomalies."
        );
    }

    let layout = layout::layout_molecule(&molecule, options);
    info!(
        "Prepared layout: {} sphere(s), {} cylinder(s), {} unresolved bond target(s).",
        layout.spheres.len(),
        layout.cylinders.len(),
        layout.unresolved_bonds
    );

    Ok(VisualizeResult {
        molecule,
        layout,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "\
ATOM      1  C1  LIG A   1       0.000   0.000   0.000  1.00  0.00           C
ATOM      2  O1  LIG A   1       1.000   0.000   0.000  1.00  0.00           O
CONECT    1    2
";

    #[test]
    fn run_decodes_and_lays_out_a_document() {
        let result = run(DOCUMENT, &LayoutOptions::default()).unwrap();

        assert!(result.report.is_clean());
        assert_eq!(result.molecule.atom_count(), 2);
        assert_eq!(result.molecule.atom(1).unwrap().links, vec![2]);
        assert_eq!(result.layout.spheres.len(), 2);
        assert_eq!(result.layout.cylinders.len(), 1);
        assert_eq!(result.layout.cylinders[0].placement.length, 1.0);
    }

    #[test]
    fn run_on_empty_document_yields_empty_result() {
        let result = run("", &LayoutOptions::default()).unwrap();
        assert!(result.molecule.is_empty());
        assert!(result.layout.spheres.is_empty());
        assert!(result.layout.cylinders.is_empty());
    }

    #[test]
    fn run_surfaces_anomalies_in_the_report() {
        let document = format!("{DOCUMENT}CONECT   99    1\n");
        let result = run(&document, &LayoutOptions::default()).unwrap();

        assert!(!result.report.is_clean());
        assert_eq!(result.report.dangling.len(), 1);
        assert_eq!(result.report.dangling[0].anchor, 99);
        // The molecule and layout are unaffected by the dangling line.
        assert_eq!(result.molecule.atom_count(), 2);
        assert_eq!(result.layout.cylinders.len(), 1);
    }
}
