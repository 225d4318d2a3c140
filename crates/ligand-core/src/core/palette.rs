//! Element classification for display, following the classic CPK convention.
//!
//! The lookup is total: any element code, known or not, maps to a category.
//! Colors are a presentation concern exposed as data; nothing here renders.

use phf::{Map, phf_map};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// The CPK display category an element code resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DisplayCategory {
    White,
    Black,
    Blue,
    Red,
    Green,
    DarkRed,
    DarkViolet,
    Cyan,
    Orange,
    Yellow,
    Peach,
    Purple,
    DarkGreen,
    Gray,
    DarkOrange,
    Pink,
}

impl DisplayCategory {
    pub const ALL: [DisplayCategory; 16] = [
        DisplayCategory::White,
        DisplayCategory::Black,
        DisplayCategory::Blue,
        DisplayCategory::Red,
        DisplayCategory::Green,
        DisplayCategory::DarkRed,
        DisplayCategory::DarkViolet,
        DisplayCategory::Cyan,
        DisplayCategory::Orange,
        DisplayCategory::Yellow,
        DisplayCategory::Peach,
        DisplayCategory::Purple,
        DisplayCategory::DarkGreen,
        DisplayCategory::Gray,
        DisplayCategory::DarkOrange,
        DisplayCategory::Pink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::DarkRed => "dark-red",
            Self::DarkViolet => "dark-violet",
            Self::Cyan => "cyan",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Peach => "peach",
            Self::Purple => "purple",
            Self::DarkGreen => "dark-green",
            Self::Gray => "gray",
            Self::DarkOrange => "dark-orange",
            Self::Pink => "pink",
        }
    }

    /// The built-in RGB value for this category.
    pub const fn default_rgb(self) -> [u8; 3] {
        match self {
            Self::White => [255, 255, 255],
            Self::Black => [0, 0, 0],
            Self::Blue => [0, 0, 255],
            Self::Red => [255, 0, 0],
            Self::Green => [0, 255, 0],
            Self::DarkRed => [139, 0, 0],
            Self::DarkViolet => [148, 0, 211],
            Self::Cyan => [0, 255, 255],
            Self::Orange => [255, 165, 0],
            Self::Yellow => [255, 255, 0],
            Self::Peach => [255, 218, 185],
            Self::Purple => [128, 0, 128],
            Self::DarkGreen => [0, 100, 0],
            Self::Gray => [128, 128, 128],
            Self::DarkOrange => [255, 140, 0],
            Self::Pink => [255, 105, 180],
        }
    }
}

impl fmt::Display for DisplayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Error)]
#[error("Invalid display category string")]
pub struct ParseDisplayCategoryError;

impl FromStr for DisplayCategory {
    type Err = ParseDisplayCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|category| category.name() == s.to_ascii_lowercase())
            .copied()
            .ok_or(ParseDisplayCategoryError)
    }
}

static CPK_CATEGORIES: Map<&'static str, DisplayCategory> = phf_map! {
    "H" => DisplayCategory::White,
    "C" => DisplayCategory::Black,
    "N" => DisplayCategory::Blue,
    "O" => DisplayCategory::Red,
    "F" => DisplayCategory::Green,
    "CL" => DisplayCategory::Green,
    "BR" => DisplayCategory::DarkRed,
    "I" => DisplayCategory::DarkViolet,
    "HE" => DisplayCategory::Cyan,
    "NE" => DisplayCategory::Cyan,
    "AR" => DisplayCategory::Cyan,
    "KR" => DisplayCategory::Cyan,
    "XE" => DisplayCategory::Cyan,
    "RN" => DisplayCategory::Cyan,
    "P" => DisplayCategory::Orange,
    "S" => DisplayCategory::Yellow,
    "B" => DisplayCategory::Peach,
    "LI" => DisplayCategory::Purple,
    "NA" => DisplayCategory::Purple,
    "K" => DisplayCategory::Purple,
    "RB" => DisplayCategory::Purple,
    "CS" => DisplayCategory::Purple,
    "FR" => DisplayCategory::Purple,
    "BE" => DisplayCategory::DarkGreen,
    "MG" => DisplayCategory::DarkGreen,
    "CA" => DisplayCategory::DarkGreen,
    "SR" => DisplayCategory::DarkGreen,
    "BA" => DisplayCategory::DarkGreen,
    "RA" => DisplayCategory::DarkGreen,
    "TI" => DisplayCategory::Gray,
    "FE" => DisplayCategory::DarkOrange,
};

/// Resolves an element code to its CPK display category.
///
/// The code is trimmed and upper-cased before lookup, so the raw
/// right-justified two-character codes decoded from records (`" C"`) resolve
/// directly. Unmatched codes fall back to [`DisplayCategory::Pink`].
pub fn category_for(element: &str) -> DisplayCategory {
    let code = element.trim().to_ascii_uppercase();
    CPK_CATEGORIES
        .get(code.as_str())
        .copied()
        .unwrap_or(DisplayCategory::Pink)
}

#[derive(Debug, Error)]
pub enum PaletteLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Unknown display category '{name}' in '{path}'")]
    UnknownCategory { path: String, name: String },
}

/// A category-to-RGB table, defaulting to the classic CPK colors.
///
/// Overrides can be loaded from a TOML file mapping category names to RGB
/// triples; categories not named in the file keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<DisplayCategory, [u8; 3]>,
}

impl Default for Palette {
    fn default() -> Self {
        let colors = DisplayCategory::ALL
            .iter()
            .map(|&category| (category, category.default_rgb()))
            .collect();
        Self { colors }
    }
}

impl Palette {
    pub fn load(path: &Path) -> Result<Self, PaletteLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| PaletteLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let overrides: HashMap<String, [u8; 3]> =
            toml::from_str(&content).map_err(|e| PaletteLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        let mut palette = Self::default();
        for (name, rgb) in overrides {
            let category =
                name.parse::<DisplayCategory>()
                    .map_err(|_| PaletteLoadError::UnknownCategory {
                        path: path.to_string_lossy().to_string(),
                        name: name.clone(),
                    })?;
            palette.colors.insert(category, rgb);
        }
        Ok(palette)
    }

    /// Returns the RGB value for a category.
    pub fn rgb(&self, category: DisplayCategory) -> [u8; 3] {
        self.colors
            .get(&category)
            .copied()
            .unwrap_or_else(|| category.default_rgb())
    }

    /// Resolves an element code straight to its RGB value.
    pub fn color_of(&self, element: &str) -> [u8; 3] {
        self.rgb(category_for(element))
    }
}
