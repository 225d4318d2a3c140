use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The LigandView Developers",
    version,
    about = "LigandView CLI - Decodes PDB ligand documents into atom/bond graphs and exports render-ready sphere and cylinder placement tables.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse ligand documents and print a structural summary.
    Info(InfoArgs),
    /// Export render-ready sphere and cylinder placement tables as CSV.
    Export(ExportArgs),
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Paths to input PDB documents ('-' reads from stdin).
    #[arg(required = true, value_name = "PATH")]
    pub inputs: Vec<PathBuf>,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path to the input PDB document.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the cylinder placement table (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Optional path for the sphere placement table (CSV).
    #[arg(long, value_name = "PATH")]
    pub atoms: Option<PathBuf>,

    /// Path to a TOML palette override file (category name -> RGB triple).
    #[arg(short, long, value_name = "PATH")]
    pub palette: Option<PathBuf>,

    /// Cylinder radius in Angstroms.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.1)]
    pub bond_radius: f32,

    /// Sphere radius in Angstroms.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.4)]
    pub atom_radius: f32,

    /// Radial segment count hint passed through to the renderer.
    #[arg(long, value_name = "INT", default_value_t = 16)]
    pub segments: u32,
}
