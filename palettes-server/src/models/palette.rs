//! Palette records and the creation payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{require, ValidationError};

/// Fields a palette must carry on creation, in the order they are checked
pub const PALETTE_FIELDS: [&str; 7] = [
    "name",
    "color1",
    "color2",
    "color3",
    "color4",
    "color5",
    "project_id",
];

const PALETTE_USAGE: &str = "Request body must include \
    name: <string>, \
    color1: <string>, \
    color2: <string>, \
    color3: <string>, \
    color4: <string>, \
    color5: <string>, \
    and project_id: <number>.";

/// Palette row with full projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Palette {
    pub id: i64,
    pub name: String,
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub color4: String,
    pub color5: String,
    pub project_id: i64,
}

/// Validated palette ready for insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPalette {
    pub name: String,
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub color4: String,
    pub color5: String,
    pub project_id: i64,
}

impl NewPalette {
    /// Attach a generated id, producing the stored row.
    pub fn with_id(self, id: i64) -> Palette {
        Palette {
            id,
            name: self.name,
            color1: self.color1,
            color2: self.color2,
            color3: self.color3,
            color4: self.color4,
            color5: self.color5,
            project_id: self.project_id,
        }
    }
}

/// POST /palettes body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreatePaletteRequest {
    pub name: Option<String>,
    pub color1: Option<String>,
    pub color2: Option<String>,
    pub color3: Option<String>,
    pub color4: Option<String>,
    pub color5: Option<String>,
    pub project_id: Option<i64>,
}

impl CreatePaletteRequest {
    /// Check the required fields in [`PALETTE_FIELDS`] order, failing on the
    /// first one that is missing.
    ///
    /// Colour values are not format-checked.
    pub fn validate(self) -> Result<NewPalette, ValidationError> {
        let usage = Some(PALETTE_USAGE);
        Ok(NewPalette {
            name: require(self.name, "name", usage)?,
            color1: require(self.color1, "color1", usage)?,
            color2: require(self.color2, "color2", usage)?,
            color3: require(self.color3, "color3", usage)?,
            color4: require(self.color4, "color4", usage)?,
            color5: require(self.color5, "color5", usage)?,
            project_id: require(self.project_id, "project_id", usage)?,
        })
    }
}
