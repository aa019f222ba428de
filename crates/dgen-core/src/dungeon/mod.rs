//! Dungeon model and generation pipeline
//!
//! Stages run strictly in order, each taking the dungeon by value and
//! handing it back: grid, rooms, mazes, edges, connections, trimming.

mod analysis;
mod corridor;
mod edges;
mod generation;
mod grid;
mod maze;
mod placement;
mod room;
mod tile;
mod trim;

pub use analysis::{DungeonStats, components, dead_ends, is_connected, stats};
pub use corridor::{LinkedRegions, connect_regions};
pub use edges::identify_edges;
pub use generation::{generate, generate_with};
pub use grid::{Dungeon, initialize_grid};
pub use maze::carve_mazes;
pub use placement::place_rooms;
pub use room::{Point, Room};
pub use tile::{Material, RegionId, Tile};
pub use trim::trim_dead_ends;
