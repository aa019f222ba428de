//! Tile materials and region ids

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use strum::{Display, EnumIter};

/// Region id; 0 is reserved for wall
pub type RegionId = u32;

/// What a tile is made of
///
/// The discriminants are the integer codes of the grid serialization format.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize_repr,
    Deserialize_repr,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum Material {
    #[default]
    Wall = 0,
    Floor = 1,
    Door = 2,
    Tunnel = 3,
}

impl Material {
    pub const fn is_wall(&self) -> bool {
        matches!(self, Material::Wall)
    }

    /// Room floor or corridor: ground that belongs to a region by itself
    pub const fn is_open(&self) -> bool {
        matches!(self, Material::Floor | Material::Tunnel)
    }

    /// Corridor or door: the tiles dead-end trimming may remove
    pub const fn is_passage(&self) -> bool {
        matches!(self, Material::Tunnel | Material::Door)
    }

    /// Integer code used by the grid format
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Material::Wall),
            1 => Some(Material::Floor),
            2 => Some(Material::Door),
            3 => Some(Material::Tunnel),
            _ => None,
        }
    }

    /// Character used by the text renderer
    pub const fn symbol(&self) -> char {
        match self {
            Material::Wall => '0',
            Material::Floor => '=',
            Material::Door => '|',
            Material::Tunnel => '-',
        }
    }
}

/// A single grid tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tile {
    pub material: Material,
    /// Owning region (0 = none)
    pub region: RegionId,
}

impl Tile {
    pub const fn wall() -> Self {
        Self {
            material: Material::Wall,
            region: 0,
        }
    }

    pub const fn floor(region: RegionId) -> Self {
        Self {
            material: Material::Floor,
            region,
        }
    }

    pub const fn tunnel(region: RegionId) -> Self {
        Self {
            material: Material::Tunnel,
            region,
        }
    }

    pub const fn door(region: RegionId) -> Self {
        Self {
            material: Material::Door,
            region,
        }
    }

    pub const fn is_wall(&self) -> bool {
        self.material.is_wall()
    }
}
