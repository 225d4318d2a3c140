use crate::cli::InfoArgs;
use crate::error::{CliError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use ligandview::core::io::pdb::{ParseReport, PdbFile};
use ligandview::core::io::traits::MolecularFile;
use ligandview::core::models::molecule::Molecule;
use ligandview::core::palette::category_for;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::info;

pub fn run(args: InfoArgs) -> Result<()> {
    let progress = (args.inputs.len() > 1).then(|| {
        ProgressBar::new(args.inputs.len() as u64).with_style(
            ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len}")
                .expect("Failed to create bar style template")
                .progress_chars("##-"),
        )
    });

    for input in &args.inputs {
        if let Some(pb) = &progress {
            pb.set_message(input.display().to_string());
        }
        let (molecule, report) = read_input(input)?;
        info!(
            "Decoded '{}': {} atom(s), {} bond link(s).",
            input.display(),
            molecule.atom_count(),
            molecule.link_count()
        );
        print_summary(input, &molecule, &report);
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<(Molecule, ParseReport)> {
    let parsed = if path.as_os_str() == "-" {
        let mut document = String::new();
        std::io::stdin().read_to_string(&mut document)?;
        PdbFile::read_str(&document)
    } else {
        PdbFile::read_from_path(path)
    };
    parsed.map_err(|source| CliError::FileParsing {
        path: path.to_path_buf(),
        source,
    })
}

fn element_histogram(molecule: &Molecule) -> BTreeMap<String, usize> {
    let mut histogram = BTreeMap::new();
    for atom in molecule.atoms_iter() {
        let code = atom.element.trim();
        let key = if code.is_empty() {
            "?".to_string()
        } else {
            code.to_ascii_uppercase()
        };
        *histogram.entry(key).or_insert(0) += 1;
    }
    histogram
}

fn print_summary(path: &Path, molecule: &Molecule, report: &ParseReport) {
    println!("{}", path.display());
    println!("  atoms:      {}", molecule.atom_count());
    println!("  bond links: {}", molecule.link_count());

    for (element, count) in element_histogram(molecule) {
        println!("  {:<3} x{:<5} ({})", element, count, category_for(&element));
    }

    if !report.is_clean() {
        println!(
            "  anomalies:  {} malformed record(s) skipped, {} dangling CONECT line(s)",
            report.skipped.len(),
            report.dangling.len()
        );
    }
}
