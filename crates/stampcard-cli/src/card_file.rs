//! Card spec files.
//!
//! A card file is a JSON object mirroring the CLI flags, so a design can be
//! kept under version control and re-rendered without retyping everything.
//! Every field is optional; flags given on the command line win over file
//! values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Point count as it appears in a card file.
///
/// Accepts either a JSON number or a string, since the renderer's parse
/// contract takes raw text anyway.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PointsValue {
    Number(i64),
    Text(String),
}

impl PointsValue {
    pub fn into_raw(self) -> String {
        match self {
            PointsValue::Number(n) => n.to_string(),
            PointsValue::Text(s) => s,
        }
    }
}

/// On-disk card description.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardFile {
    pub shop_name:        Option<String>,
    pub title:            Option<String>,
    pub benefit:          Option<String>,
    pub points:           Option<PointsValue>,
    pub created_by:       Option<String>,
    pub background_color: Option<String>,
    pub accent_color:     Option<String>,
    /// Background photo path; relative paths resolve against the card
    /// file's own directory, not the working directory.
    pub background:       Option<PathBuf>,
}

/// Loads and parses a card file.
pub fn load(path: &Path) -> Result<CardFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let mut card: CardFile = serde_json::from_str(&text)
        .with_context(|| format!("invalid card file {}", path.display()))?;
    if let Some(background) = card.background.take() {
        card.background = Some(if background.is_relative() {
            path.parent().unwrap_or(Path::new("")).join(background)
        } else {
            background
        });
    }
    Ok(card)
}
