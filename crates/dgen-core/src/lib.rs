//! dgen-core: dungeon layout generation
//!
//! Builds a tile grid of rooms joined by maze corridors. The pipeline is
//! pure: no I/O, one explicitly passed random source, and the finished
//! [`Dungeon`] is handed to renderers in other crates.

pub mod config;
pub mod dungeon;

mod consts;
mod rng;

pub use config::{GenerationParams, ParamError, RawParams};
pub use consts::*;
pub use dungeon::{Dungeon, Material, Point, RegionId, Room, Tile, generate, generate_with};
pub use rng::DungeonRng;
