//! Palette type: an ordered list of named colours with nearest-colour search.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

use super::colour::{redmean_distance_sq, Colour};

/// A named colour in a palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourEntry {
    /// Display name (e.g. a yarn colour name).
    pub name: String,

    /// The swatch value.
    pub colour: Colour,
}

impl ColourEntry {
    /// Create a new entry.
    pub fn new(name: impl Into<String>, colour: Colour) -> Self {
        Self {
            name: name.into(),
            colour,
        }
    }
}

/// An ordered collection of colours the engine is allowed to output.
///
/// Order matters: nearest-colour ties are broken by the first entry
/// encountered, so two palettes with the same colours in different orders
/// are different palettes. The engine never mutates a palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Palette name.
    pub name: String,

    entries: Vec<ColourEntry>,
}

impl Palette {
    /// Create a palette from entries.
    pub fn new(name: impl Into<String>, entries: Vec<ColourEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// The builtin 16-colour chart palette.
    pub fn basic() -> Self {
        let entries = [
            ("White", "#FFFFFF"),
            ("Black", "#000000"),
            ("Red", "#FF0000"),
            ("Green", "#00FF00"),
            ("Blue", "#0000FF"),
            ("Yellow", "#FFFF00"),
            ("Magenta", "#FF00FF"),
            ("Cyan", "#00FFFF"),
            ("Orange", "#FFA500"),
            ("Purple", "#800080"),
            ("Pink", "#FFC0CB"),
            ("Brown", "#A52A2A"),
            ("Grey", "#808080"),
            ("Silver", "#C0C0C0"),
            ("Gold", "#FFD700"),
            ("Navy", "#000080"),
        ]
        .into_iter()
        .map(|(name, hex)| ColourEntry::new(name, Colour::from_hex_lossy(hex)))
        .collect();

        Self::new("basic", entries)
    }

    /// Build a palette from bare hex strings, naming each entry after its
    /// swatch value. Malformed strings become black (the lossy contract).
    pub fn from_hex_list(name: impl Into<String>, hexes: &[&str]) -> Self {
        let entries = hexes
            .iter()
            .map(|h| {
                let colour = Colour::from_hex_lossy(h);
                ColourEntry::new(colour.to_hex(), colour)
            })
            .collect();
        Self::new(name, entries)
    }

    /// Get the entries in palette order.
    pub fn entries(&self) -> &[ColourEntry] {
        &self.entries
    }

    /// Get an entry by index.
    pub fn get(&self, index: usize) -> Option<&ColourEntry> {
        self.entries.get(index)
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the palette entry nearest to `colour` under the redmean metric.
    ///
    /// Linear scan in palette order; the first strict minimum wins, so the
    /// result is stable and deterministic. Returns `None` only when the
    /// palette is empty.
    pub fn closest_entry(&self, colour: Colour) -> Option<&ColourEntry> {
        let mut best: Option<&ColourEntry> = None;
        let mut best_dist = f64::INFINITY;

        for entry in &self.entries {
            let dist = redmean_distance_sq(colour, entry.colour);
            if dist < best_dist {
                best_dist = dist;
                best = Some(entry);
            }
        }

        best
    }

    /// Find the palette colour nearest to `colour`.
    ///
    /// Degrades to black on an empty palette rather than failing; the
    /// pipeline stays total by design.
    pub fn closest(&self, colour: Colour) -> Colour {
        self.closest_entry(colour)
            .map(|e| e.colour)
            .unwrap_or(Colour::BLACK)
    }

    /// Load a palette from a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let raw: RawPalette = serde_json::from_str(input).map_err(|e| ChartError::Parse {
            message: format!("Invalid palette JSON: {}", e),
            help: None,
        })?;
        raw.into_palette()
    }

    /// Load a palette from a YAML document.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let raw: RawPalette = serde_yaml::from_str(input).map_err(|e| ChartError::Parse {
            message: format!("Invalid palette YAML: {}", e),
            help: None,
        })?;
        raw.into_palette()
    }

    /// Load a palette file, dispatching on the extension (`.json`, `.yaml`,
    /// `.yml`).
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ChartError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read palette file: {}", e),
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Err(ChartError::Parse {
                message: format!("Unsupported palette file: {}", path.display()),
                help: Some("Use a .json, .yaml, or .yml palette file".to_string()),
            }),
        }
    }

    /// Serialize the palette to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        let raw = RawPalette {
            name: self.name.clone(),
            colours: self
                .entries
                .iter()
                .map(|e| RawEntry {
                    name: e.name.clone(),
                    hex: e.colour.to_hex(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&raw).map_err(|e| ChartError::Parse {
            message: format!("Failed to serialize palette: {}", e),
            help: None,
        })
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::basic()
    }
}

/// On-disk palette document: `{ name, colours: [{ name, hex }] }`.
#[derive(Debug, Serialize, Deserialize)]
struct RawPalette {
    #[serde(default = "default_palette_name")]
    name: String,
    colours: Vec<RawEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawEntry {
    name: String,
    hex: String,
}

fn default_palette_name() -> String {
    "custom".to_string()
}

impl RawPalette {
    /// Resolve raw entries, validating every hex value strictly.
    fn into_palette(self) -> Result<Palette> {
        let mut entries = Vec::with_capacity(self.colours.len());
        for raw in self.colours {
            let colour = Colour::from_hex(&raw.hex).map_err(|_| ChartError::Parse {
                message: format!("Invalid hex colour for '{}': {}", raw.name, raw.hex),
                help: Some("Palette entries use #RRGGBB format".to_string()),
            })?;
            entries.push(ColourEntry::new(raw.name, colour));
        }
        Ok(Palette::new(self.name, entries))
    }
}
