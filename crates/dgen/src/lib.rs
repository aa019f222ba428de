//! dgen: generate dungeons from the command line or over HTTP

pub mod cli;
pub mod server;

use dgen_core::DungeonRng;

/// A generator seeded from `seed` when it parses, from entropy otherwise
pub fn seeded_rng(seed: Option<&str>) -> DungeonRng {
    match seed.and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => DungeonRng::new(seed),
        None => DungeonRng::from_entropy(),
    }
}
