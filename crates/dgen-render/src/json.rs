//! Integer grid serialization
//!
//! A dungeon is written as a JSON array of rows, each an array of material
//! codes (0 wall, 1 floor, 2 door, 3 tunnel). Region ids and rooms are not
//! part of the format.

use dgen_core::{Dungeon, Material, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RenderError;

/// Tile materials in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialGrid {
    rows: Vec<Vec<Material>>,
}

impl MaterialGrid {
    /// Build from rows, rejecting empty or ragged input
    pub fn from_rows(rows: Vec<Vec<Material>>) -> Result<Self, RenderError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(RenderError::EmptyGrid);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(RenderError::RaggedGrid {
                row,
                expected,
                found,
            });
        }
        Ok(Self { rows })
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Material>] {
        &self.rows
    }

    pub fn get(&self, p: Point) -> Option<Material> {
        self.rows.get(p.y)?.get(p.x).copied()
    }

    pub fn count(&self, material: Material) -> usize {
        self.rows.iter().flatten().filter(|&&m| m == material).count()
    }
}

impl From<&Dungeon> for MaterialGrid {
    fn from(dungeon: &Dungeon) -> Self {
        let rows = dungeon
            .rows()
            .iter()
            .map(|row| row.iter().map(|tile| tile.material).collect())
            .collect();
        Self { rows }
    }
}

pub fn to_json(dungeon: &Dungeon) -> Result<String, RenderError> {
    let json = serde_json::to_string(&MaterialGrid::from(dungeon))?;
    debug!(bytes = json.len(), "dungeon serialized");
    Ok(json)
}

/// Parse a grid written by [`to_json`]
pub fn from_json(json: &str) -> Result<MaterialGrid, RenderError> {
    let codes: Vec<Vec<i64>> = serde_json::from_str(json)?;

    let rows = codes
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|code| {
                    u8::try_from(code)
                        .ok()
                        .and_then(Material::from_code)
                        .ok_or(RenderError::UnknownMaterial(code))
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    MaterialGrid::from_rows(rows)
}
