use crate::core::io::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::builder::MoleculeBuilder;
use crate::core::models::molecule::Molecule;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::warn;

/// One decoded ATOM record, before insertion into a molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub serial: u32,
    pub name: String,
    pub chain_id: char,
    pub position: Point3<f32>,
    pub element: String,
}

/// One decoded CONECT record: an anchor serial and one to four bonded serials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConectRecord {
    pub anchor: u32,
    pub bonded: Vec<u32>,
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt {
        columns: &'static str,
        value: String,
    },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat {
        columns: &'static str,
        value: String,
    },
}

/// A record that failed to decode and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub line_number: usize,
    pub error: RecordError,
}

/// A CONECT record whose anchor serial matched no decoded atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingConect {
    pub line_number: usize,
    pub anchor: u32,
}

/// Non-fatal anomalies collected while decoding one document.
///
/// A malformed record discards only that record; a CONECT anchor with no
/// matching atom discards only that line. Both are recorded here so callers
/// can decide whether a partially decoded document is acceptable for their
/// use case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub skipped: Vec<SkippedRecord>,
    pub dangling: Vec<DanglingConect>,
}

impl ParseReport {
    /// Returns `true` when every record in the document decoded cleanly.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.dangling.is_empty()
    }
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

// Unlike numeric fields, text fields tolerate a line ending mid-range.
fn slice_raw(line: &str, start: usize, end: usize) -> &str {
    match line.get(start..end) {
        Some(slice) => slice,
        None => line.get(start..).unwrap_or(""),
    }
}

fn parse_u32(
    line: &str,
    start: usize,
    end: usize,
    columns: &'static str,
) -> Result<u32, RecordError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| RecordError::InvalidInt {
        columns,
        value: value.to_string(),
    })
}

fn parse_f32(
    line: &str,
    start: usize,
    end: usize,
    columns: &'static str,
) -> Result<f32, RecordError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| RecordError::InvalidFloat {
        columns,
        value: value.to_string(),
    })
}

/// Decodes one ATOM line at the legacy fixed column positions.
///
/// Numeric fields are trimmed before parsing and are required; a failure is a
/// decode error for the whole record. The element code is taken raw
/// (right-justified, two characters) and the chain identifier defaults to a
/// space when the column is absent.
pub fn parse_atom_record(line: &str) -> Result<AtomRecord, RecordError> {
    let serial = parse_u32(line, 6, 11, "7-11")?;
    let name = slice_and_trim(line, 12, 16).to_string();
    let chain_id = slice_raw(line, 21, 22).chars().next().unwrap_or(' ');
    let x = parse_f32(line, 30, 38, "31-38")?;
    let y = parse_f32(line, 38, 46, "39-46")?;
    let z = parse_f32(line, 46, 54, "47-54")?;
    let element = slice_raw(line, 76, 78).to_string();

    Ok(AtomRecord {
        serial,
        name,
        chain_id,
        position: Point3::new(x, y, z),
        element,
    })
}

/// Decodes one CONECT line at the legacy fixed column positions.
///
/// The anchor serial and the first bonded serial are required; the remaining
/// three bonded columns are each independently optional, so a blank or
/// non-numeric slot does not suppress the slots after it.
pub fn parse_conect_record(line: &str) -> Result<ConectRecord, RecordError> {
    let anchor = parse_u32(line, 6, 11, "7-11")?;
    let mut bonded = vec![parse_u32(line, 11, 16, "12-16")?];

    for &(start, end) in &[(16usize, 21usize), (21, 26), (26, 31)] {
        if let Ok(serial) = slice_and_trim(line, start, end).parse::<u32>() {
            bonded.push(serial);
        }
    }

    Ok(ConectRecord { anchor, bonded })
}

/// The PDB-style fixed-column ligand document format.
///
/// Record kinds are matched by substring (`"ATOM"` / `"CONECT"` occurring
/// anywhere in the line) rather than a strict record-type field check. That is
/// the documented matching rule for this format, preserved deliberately;
/// tightening it would change which inputs are accepted.
pub struct PdbFile;

impl MolecularFile for PdbFile {
    type Report = ParseReport;
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<(Molecule, ParseReport), PdbError> {
        let mut builder = MoleculeBuilder::new();
        let mut report = ParseReport::default();

        let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;

        // First pass: atoms. CONECT lines may precede the atoms they
        // reference, so connectivity waits for the second pass.
        for (index, line) in lines.iter().enumerate() {
            if !line.contains("ATOM") {
                continue;
            }
            let line_number = index + 1;
            match parse_atom_record(line) {
                Ok(record) => {
                    builder.add_atom(Atom::new(
                        record.serial,
                        &record.name,
                        record.chain_id,
                        record.position,
                        &record.element,
                    ));
                }
                Err(error) => {
                    warn!(line = line_number, %error, "Skipping malformed ATOM record.");
                    report.skipped.push(SkippedRecord { line_number, error });
                }
            }
        }

        // Second pass: connectivity.
        for (index, line) in lines.iter().enumerate() {
            if !line.contains("CONECT") {
                continue;
            }
            let line_number = index + 1;
            match parse_conect_record(line) {
                Ok(record) => {
                    if !builder.contains(record.anchor) {
                        warn!(
                            line = line_number,
                            anchor = record.anchor,
                            "CONECT anchor has no matching ATOM record; skipping line."
                        );
                        report.dangling.push(DanglingConect {
                            line_number,
                            anchor: record.anchor,
                        });
                        continue;
                    }
                    for target in record.bonded {
                        builder.link(record.anchor, target);
                    }
                }
                Err(error) => {
                    warn!(line = line_number, %error, "Skipping malformed CONECT record.");
                    report.skipped.push(SkippedRecord { line_number, error });
                }
            }
        }

        Ok((builder.build(), report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn atom_line(serial: u32, name: &str, chain: char, x: f32, y: f32, z: f32, elem: &str) -> String {
        format!(
            "ATOM  {serial:>5} {name:<4} LIG {chain}{resseq:>4}    \
             {x:>8.3}{y:>8.3}{z:>8.3}  1.00  0.00          {elem:>2}",
            resseq = 1,
        )
    }

    fn conect_line(serials: &[u32]) -> String {
        let mut line = String::from("CONECT");
        for serial in serials {
            line.push_str(&format!("{serial:>5}"));
        }
        line
    }

    #[test]
    fn parse_atom_record_extracts_fixed_columns() {
        let line = atom_line(1, "N1", 'A', 11.86, 13.207, -12.724, " N");
        let record = parse_atom_record(&line).unwrap();

        assert_eq!(record.serial, 1);
        assert_eq!(record.name, "N1");
        assert_eq!(record.chain_id, 'A');
        assert_eq!(record.position, Point3::new(11.86, 13.207, -12.724));
        assert_eq!(record.element, " N");
    }

    #[test]
    fn parse_atom_record_keeps_element_code_raw() {
        let line = atom_line(2, "C2", 'A', 0.0, 0.0, 0.0, " C");
        let record = parse_atom_record(&line).unwrap();
        assert_eq!(record.element, " C");
    }

    #[test]
    fn parse_atom_record_defaults_missing_chain_to_space() {
        // Truncated right after the serial would lose the coordinates too, so
        // only the chain column is blanked here.
        let mut line = atom_line(3, "C3", 'A', 1.0, 2.0, 3.0, " C");
        line.replace_range(21..22, " ");
        let record = parse_atom_record(&line).unwrap();
        assert_eq!(record.chain_id, ' ');
    }

    #[test]
    fn parse_atom_record_rejects_non_numeric_serial() {
        let mut line = atom_line(4, "C4", 'A', 1.0, 2.0, 3.0, " C");
        line.replace_range(6..11, "  abc");
        let error = parse_atom_record(&line).unwrap_err();
        assert_eq!(
            error,
            RecordError::InvalidInt {
                columns: "7-11",
                value: "abc".to_string(),
            }
        );
    }

    #[test]
    fn parse_atom_record_rejects_blank_coordinate() {
        let mut line = atom_line(5, "C5", 'A', 1.0, 2.0, 3.0, " C");
        line.replace_range(30..38, "        ");
        let error = parse_atom_record(&line).unwrap_err();
        assert_eq!(
            error,
            RecordError::InvalidFloat {
                columns: "31-38",
                value: String::new(),
            }
        );
    }

    #[test]
    fn parse_atom_record_rejects_line_shorter_than_coordinates() {
        let error = parse_atom_record("ATOM      6  C6  LIG A   1").unwrap_err();
        assert!(matches!(error, RecordError::InvalidFloat { columns: "31-38", .. }));
    }

    #[test]
    fn parse_conect_record_requires_anchor_and_first_bonded() {
        let record = parse_conect_record(&conect_line(&[1, 2])).unwrap();
        assert_eq!(record.anchor, 1);
        assert_eq!(record.bonded, vec![2]);

        let error = parse_conect_record(&conect_line(&[1])).unwrap_err();
        assert!(matches!(error, RecordError::InvalidInt { columns: "12-16", .. }));
    }

    #[test]
    fn parse_conect_record_reads_up_to_four_bonded_serials() {
        let record = parse_conect_record(&conect_line(&[1, 2, 3, 4, 5])).unwrap();
        assert_eq!(record.anchor, 1);
        assert_eq!(record.bonded, vec![2, 3, 4, 5]);
    }

    #[test]
    fn parse_conect_record_tries_optional_slots_independently() {
        // Third bonded slot is garbage; the fourth must still contribute.
        let mut line = conect_line(&[1, 2, 3, 4, 5]);
        line.replace_range(21..26, "  x  ");
        let record = parse_conect_record(&line).unwrap();
        assert_eq!(record.bonded, vec![2, 3, 5]);
    }

    #[test]
    fn read_str_builds_molecule_from_atoms_and_conect() {
        let document = format!(
            "{}\n{}\n{}\n",
            atom_line(1, "C1", 'A', 0.0, 0.0, 0.0, " C"),
            atom_line(2, "O1", 'A', 1.0, 0.0, 0.0, " O"),
            conect_line(&[1, 2]),
        );

        let (molecule, report) = PdbFile::read_str(&document).unwrap();

        assert!(report.is_clean());
        assert_eq!(molecule.atom_count(), 2);
        assert_eq!(molecule.atom(1).unwrap().links, vec![2]);
        assert!(molecule.atom(2).unwrap().links.is_empty());
        assert_eq!(molecule.atom(2).unwrap().element, " O");
        assert_eq!(molecule.atom(2).unwrap().position, Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn read_str_matches_record_kind_by_substring() {
        // A strict record-type check would reject this tag; the substring rule
        // accepts it, with the fixed columns intact.
        let mut line = atom_line(7, "C7", 'A', 0.0, 0.0, 0.0, " C");
        line.replace_range(0..6, "ATOMIC");

        let (molecule, report) = PdbFile::read_str(&line).unwrap();
        assert!(report.is_clean());
        assert_eq!(molecule.atom_count(), 1);
        assert!(molecule.atom(7).is_some());
    }

    #[test]
    fn read_str_with_duplicate_serial_keeps_the_later_atom() {
        let document = format!(
            "{}\n{}\n",
            atom_line(1, "OLD", 'A', 0.0, 0.0, 0.0, " C"),
            atom_line(1, "NEW", 'A', 5.0, 0.0, 0.0, " N"),
        );

        let (molecule, report) = PdbFile::read_str(&document).unwrap();

        assert!(report.is_clean());
        assert_eq!(molecule.atom_count(), 1);
        assert_eq!(molecule.atom(1).unwrap().name, "NEW");
        assert_eq!(molecule.atom(1).unwrap().element, " N");
    }

    #[test]
    fn read_str_links_bonds_declared_before_their_atoms() {
        let document = format!(
            "{}\n{}\n{}\n",
            conect_line(&[1, 2]),
            atom_line(1, "C1", 'A', 0.0, 0.0, 0.0, " C"),
            atom_line(2, "O1", 'A', 1.0, 0.0, 0.0, " O"),
        );

        let (molecule, report) = PdbFile::read_str(&document).unwrap();
        assert!(report.is_clean());
        assert_eq!(molecule.atom(1).unwrap().links, vec![2]);
    }

    #[test]
    fn read_str_skips_conect_with_unknown_anchor() {
        let document = format!(
            "{}\n{}\n",
            atom_line(1, "C1", 'A', 0.0, 0.0, 0.0, " C"),
            conect_line(&[99, 1]),
        );

        let (molecule, report) = PdbFile::read_str(&document).unwrap();

        assert_eq!(molecule.atom_count(), 1);
        assert!(molecule.atom(1).unwrap().links.is_empty());
        assert_eq!(report.skipped.len(), 0);
        assert_eq!(
            report.dangling,
            vec![DanglingConect {
                line_number: 2,
                anchor: 99,
            }]
        );
    }

    #[test]
    fn read_str_skips_malformed_record_and_keeps_the_rest() {
        let mut bad = atom_line(2, "O1", 'A', 1.0, 0.0, 0.0, " O");
        bad.replace_range(30..38, "     ???");
        let document = format!(
            "{}\n{}\n{}\n",
            atom_line(1, "C1", 'A', 0.0, 0.0, 0.0, " C"),
            bad,
            atom_line(3, "N1", 'A', 2.0, 0.0, 0.0, " N"),
        );

        let (molecule, report) = PdbFile::read_str(&document).unwrap();

        assert_eq!(molecule.atom_count(), 2);
        assert!(molecule.atom(1).is_some());
        assert!(molecule.atom(2).is_none());
        assert!(molecule.atom(3).is_some());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line_number, 2);
    }

    #[test]
    fn read_str_on_empty_document_yields_empty_molecule() {
        let (molecule, report) = PdbFile::read_str("").unwrap();
        assert!(molecule.is_empty());
        assert!(report.is_clean());

        let (molecule, report) = PdbFile::read_str("REMARK nothing here\nEND\n").unwrap();
        assert!(molecule.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn read_str_is_deterministic() {
        let document = format!(
            "{}\n{}\n{}\n{}\n",
            atom_line(1, "C1", 'A', 0.0, 0.0, 0.0, " C"),
            atom_line(2, "O1", 'A', 1.0, 0.0, 0.0, " O"),
            conect_line(&[1, 2]),
            conect_line(&[2, 1]),
        );

        let (first, first_report) = PdbFile::read_str(&document).unwrap();
        let (second, second_report) = PdbFile::read_str(&document).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_report, second_report);
    }

    #[test]
    fn read_from_path_matches_read_str() {
        let document = format!(
            "{}\n{}\n{}\n",
            atom_line(1, "C1", 'A', 0.0, 0.0, 0.0, " C"),
            atom_line(2, "O1", 'A', 1.0, 0.0, 0.0, " O"),
            conect_line(&[1, 2]),
        );

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(document.as_bytes()).unwrap();

        let from_path = PdbFile::read_from_path(file.path()).unwrap();
        let from_str = PdbFile::read_str(&document).unwrap();
        assert_eq!(from_path, from_str);
    }
}
