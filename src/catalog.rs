//! Asset tables: which placeholders to generate, and with what colors and text.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::{
    color::Rgb8,
    error::{PlacegenError, PlacegenResult},
};

/// Extension used for the raster copy when an id carries none.
pub const DEFAULT_RASTER_EXT: &str = "png";

/// Extension of the vector copy.
pub const SVG_EXT: &str = "svg";

/// A full-frame scene backdrop.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BackgroundAsset {
    /// Output file name, e.g. `black.png`.
    pub id: String,
    /// Base color as `#rrggbb`.
    pub color: String,
    /// Centered caption; may be empty or span several lines.
    #[serde(default)]
    pub label: String,
}

/// A character sprite in one emotional state.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CharacterAsset {
    /// Output file name, e.g. `harper_neutral.png`.
    pub id: String,
    /// Base color as `#rrggbb`.
    pub color: String,
    /// Display name drawn under the silhouette.
    pub name: String,
    /// Emotion caption, drawn in parentheses.
    pub emotion: String,
}

/// Both asset tables, in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub backgrounds: Vec<BackgroundAsset>,
    #[serde(default)]
    pub characters: Vec<CharacterAsset>,
}

const BUILTIN_BACKGROUNDS: &[(&str, &str, &str)] = &[
    ("police_station_night.png", "#1a2332", "POLICE STATION\nNIGHT"),
    ("evidence_board.png", "#3d2817", "EVIDENCE BOARD"),
    ("lake_house_exterior_storm.png", "#1f2937", "LAKE HOUSE\nSTORMY NIGHT"),
    ("interrogation_room.png", "#2d3748", "INTERROGATION\nROOM"),
    ("police_station_hallway.png", "#374151", "POLICE STATION\nHALLWAY"),
    ("interrogation_room_dawn.png", "#4b5563", "INTERROGATION ROOM\nDAWN"),
    ("black.png", "#000000", ""),
    ("courtroom.png", "#8b4513", "COURTROOM"),
    ("cliff_overlook_day.png", "#4a90e2", "CLIFF OVERLOOK\nDAY"),
    ("lake_house_day.png", "#6b8e23", "LAKE HOUSE\nDAY"),
    ("airport.png", "#708090", "AIRPORT"),
    ("police_station_day.png", "#5f6b7a", "POLICE STATION\nDAY"),
];

/// (id prefix, color, display name, emotions)
const BUILTIN_CAST: &[(&str, &str, &str, &[&str])] = &[
    (
        "harper",
        "#c41e3a",
        "HARPER",
        &[
            "Neutral",
            "Worried",
            "Guarded",
            "Defensive",
            "Vulnerable",
            "Bitter",
            "Cold",
            "Anxious",
            "Tired",
            "Broken",
        ],
    ),
    (
        "marcus",
        "#1e40af",
        "MARCUS",
        &[
            "Neutral",
            "Defensive",
            "Angry",
            "Bitter",
            "Controlled",
            "Resigned",
            "Nervous",
        ],
    ),
    (
        "rowan",
        "#15803d",
        "ROWAN",
        &[
            "Neutral",
            "Controlled",
            "Sharp",
            "Cold",
            "Calculating",
            "Tense",
            "Calm",
        ],
    ),
];

impl Catalog {
    /// The tables shipped with the tool.
    pub fn builtin() -> Self {
        let backgrounds = BUILTIN_BACKGROUNDS
            .iter()
            .map(|&(id, color, label)| BackgroundAsset {
                id: id.to_string(),
                color: color.to_string(),
                label: label.to_string(),
            })
            .collect();

        let characters = BUILTIN_CAST
            .iter()
            .flat_map(|&(prefix, color, name, emotions)| {
                emotions.iter().map(move |&emotion| CharacterAsset {
                    id: format!(
                        "{prefix}_{}.{DEFAULT_RASTER_EXT}",
                        emotion.to_ascii_lowercase()
                    ),
                    color: color.to_string(),
                    name: name.to_string(),
                    emotion: emotion.to_string(),
                })
            })
            .collect();

        Self {
            backgrounds,
            characters,
        }
    }

    pub fn from_json_str(s: &str) -> PlacegenResult<Self> {
        serde_json::from_str(s).map_err(|e| PlacegenError::serde(format!("catalog JSON: {e}")))
    }

    pub fn from_json_path(path: &Path) -> PlacegenResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read catalog '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> PlacegenResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PlacegenError::serde(e.to_string()))
    }

    /// Reject tables that would write outside their directory, overwrite each other, or carry
    /// colors the renderers cannot parse.
    pub fn validate(&self) -> PlacegenResult<()> {
        let mut seen = HashMap::new();
        for a in &self.backgrounds {
            validate_entry("backgrounds", &a.id, &a.color, &mut seen)?;
        }

        let mut seen = HashMap::new();
        for a in &self.characters {
            validate_entry("characters", &a.id, &a.color, &mut seen)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.backgrounds.len() + self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backgrounds.is_empty() && self.characters.is_empty()
    }
}

/// `seen` maps each output file name, lowercased, to the id that claimed it.
fn validate_entry<'a>(
    table: &str,
    id: &'a str,
    color: &str,
    seen: &mut HashMap<String, &'a str>,
) -> PlacegenResult<()> {
    if id.trim().is_empty() {
        return Err(PlacegenError::validation(format!(
            "{table}: asset id must be non-empty"
        )));
    }
    if id.contains(['/', '\\']) || id == "." || id == ".." {
        return Err(PlacegenError::validation(format!(
            "{table}: asset id '{id}' must be a plain file name"
        )));
    }
    let ext = Path::new(id).extension().and_then(|e| e.to_str());
    if ext.is_some_and(|e| e.eq_ignore_ascii_case(SVG_EXT)) {
        return Err(PlacegenError::validation(format!(
            "{table}: asset id '{id}' would collide with its own .{SVG_EXT} copy"
        )));
    }
    let paths = asset_paths(Path::new(""), id);
    for out in [&paths.svg, &paths.raster] {
        let file = out.to_string_lossy().to_lowercase();
        match seen.get(&file) {
            Some(&other) if other == id => {
                return Err(PlacegenError::validation(format!(
                    "{table}: duplicate asset id '{id}'"
                )));
            }
            Some(&other) => {
                return Err(PlacegenError::validation(format!(
                    "{table}: asset id '{id}' would overwrite '{file}' written by '{other}'"
                )));
            }
            None => {}
        }
    }
    for out in [paths.svg, paths.raster] {
        seen.insert(out.to_string_lossy().to_lowercase(), id);
    }
    Rgb8::from_hex(color)
        .map_err(|e| PlacegenError::validation(format!("{table}: asset '{id}': {e}")))?;
    Ok(())
}

/// The two files written for one asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPaths {
    pub svg: PathBuf,
    pub raster: PathBuf,
}

/// Map an asset id to its output pair inside `dir`.
///
/// `harper_neutral.png` becomes `harper_neutral.svg` + `harper_neutral.png`; an id without an
/// extension gets `.png` for the raster copy.
pub fn asset_paths(dir: &Path, id: &str) -> AssetPaths {
    let base = dir.join(id);
    let svg = base.with_extension(SVG_EXT);
    let raster = if base.extension().is_some() {
        base
    } else {
        base.with_extension(DEFAULT_RASTER_EXT)
    };
    AssetPaths { svg, raster }
}
