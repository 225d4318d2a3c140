use ligandview::core::io::pdb::PdbError;
use ligandview::core::palette::PaletteLoadError;
use ligandview::layout::tables::PlacementExportError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: PdbError,
    },

    #[error(transparent)]
    Palette(#[from] PaletteLoadError),

    #[error(transparent)]
    Export(#[from] PlacementExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
