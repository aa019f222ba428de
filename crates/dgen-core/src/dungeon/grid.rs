//! The dungeon grid

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::room::{Point, Room};
use super::tile::{Material, RegionId, Tile};

/// A generated dungeon: tiles, rooms and the region counter
///
/// Tiles are stored row-major, `tiles[y][x]`. Stages mutate it in place
/// while they own it; once generation returns it is only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    pub(crate) tiles: Vec<Vec<Tile>>,
    pub(crate) rooms: Vec<Room>,
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) num_regions: RegionId,
}

/// Allocate a solid wall grid with no rooms and no regions
pub fn initialize_grid(width: usize, height: usize) -> Dungeon {
    debug!(width, height, "creating empty dungeon");
    Dungeon::new(width, height)
}

impl Dungeon {
    /// Create a solid wall grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            tiles: vec![vec![Tile::wall(); width]; height],
            rooms: Vec::new(),
            width,
            height,
            num_regions: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Rooms in placement order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of region ids minted so far (the highest id in use or retired)
    pub fn num_regions(&self) -> RegionId {
        self.num_regions
    }

    /// Rows of tiles, top to bottom
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    /// Tile at a position inside the grid
    pub fn tile(&self, p: Point) -> Tile {
        self.tiles[p.y][p.x]
    }

    /// Tile at a position, `None` outside the grid
    pub fn get(&self, p: Point) -> Option<Tile> {
        self.tiles.get(p.y)?.get(p.x).copied()
    }

    pub fn material(&self, p: Point) -> Material {
        self.tile(p).material
    }

    /// Whether `p` is inside the grid
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }

    /// Every position, row by row
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    /// Count tiles of one material
    pub fn count(&self, material: Material) -> usize {
        self.tiles
            .iter()
            .flatten()
            .filter(|tile| tile.material == material)
            .count()
    }

    pub(crate) fn set(&mut self, p: Point, tile: Tile) {
        self.tiles[p.y][p.x] = tile;
    }

    /// Wall test by signed coordinates; anything off the grid is not wall
    pub(crate) fn is_wall_at(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.get(Point::new(x as usize, y as usize))
            .is_some_and(|tile| tile.is_wall())
    }

    /// Hand out the next unused region id
    pub(crate) fn mint_region(&mut self) -> RegionId {
        self.num_regions += 1;
        self.num_regions
    }
}
