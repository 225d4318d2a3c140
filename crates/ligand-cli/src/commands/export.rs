use crate::cli::ExportArgs;
use crate::error::{CliError, Result};
use ligandview::core::io::pdb::PdbFile;
use ligandview::core::io::traits::MolecularFile;
use ligandview::core::palette::Palette;
use ligandview::layout::{LayoutOptions, layout_molecule, tables};
use std::fs::File;
use std::io::BufWriter;
use tracing::{info, warn};

pub fn run(args: ExportArgs) -> Result<()> {
    let palette = match &args.palette {
        Some(path) => Palette::load(path)?,
        None => Palette::default(),
    };

    let (molecule, report) =
        PdbFile::read_from_path(&args.input).map_err(|source| CliError::FileParsing {
            path: args.input.clone(),
            source,
        })?;

    if molecule.is_empty() {
        warn!("'{}' contained no decodable ATOM records.", args.input.display());
    }
    if !report.is_clean() {
        warn!(
            "'{}' decoded with {} skipped record(s) and {} dangling CONECT line(s).",
            args.input.display(),
            report.skipped.len(),
            report.dangling.len()
        );
    }

    let options = LayoutOptions {
        atom_radius: args.atom_radius,
        bond_radius: args.bond_radius,
        radial_segments: args.segments,
    };
    let layout = layout_molecule(&molecule, &options);

    let output = File::create(&args.output)?;
    tables::write_cylinder_table(&layout, BufWriter::new(output))?;
    info!(
        "Wrote {} cylinder placement(s) to '{}'.",
        layout.cylinders.len(),
        args.output.display()
    );

    if let Some(atoms_path) = &args.atoms {
        let file = File::create(atoms_path)?;
        tables::write_sphere_table(&layout, &palette, BufWriter::new(file))?;
        info!(
            "Wrote {} sphere placement(s) to '{}'.",
            layout.spheres.len(),
            atoms_path.display()
        );
    }

    println!(
        "Exported {} atom(s), {} bond cylinder(s){}.",
        layout.spheres.len(),
        layout.cylinders.len(),
        if layout.unresolved_bonds > 0 {
            format!(" ({} unresolved bond target(s) skipped)", layout.unresolved_bonds)
        } else {
            String::new()
        }
    );
    Ok(())
}
