use crate::core::models::molecule::Molecule;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;

/// Defines the interface for decoding molecular structure documents.
///
/// This trait provides a common API for turning a full text document into a
/// molecule plus a format-specific report of non-fatal anomalies encountered
/// along the way. Implementors handle format-specific record decoding.
pub trait MolecularFile {
    /// The type describing non-fatal anomalies collected during decoding.
    type Report;

    /// The error type for decoding operations.
    type Error: Error + From<io::Error>;

    /// Decodes a molecule from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the decoded molecule and the anomaly report.
    ///
    /// # Errors
    ///
    /// Returns an error only when the input is structurally unreadable;
    /// record-level decode failures are collected in the report instead.
    fn read_from(reader: &mut impl BufRead) -> Result<(Molecule, Self::Report), Self::Error>;

    /// Decodes a molecule from an in-memory document.
    ///
    /// # Arguments
    ///
    /// * `document` - The full document text.
    ///
    /// # Return
    ///
    /// Returns the decoded molecule and the anomaly report.
    ///
    /// # Errors
    ///
    /// Returns an error only when the input is structurally unreadable.
    fn read_str(document: &str) -> Result<(Molecule, Self::Report), Self::Error> {
        let mut reader = Cursor::new(document.as_bytes());
        Self::read_from(&mut reader)
    }

    /// Decodes a molecule from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    ///
    /// # Return
    ///
    /// Returns the decoded molecule and the anomaly report.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is structurally
    /// unreadable.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<(Molecule, Self::Report), Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
