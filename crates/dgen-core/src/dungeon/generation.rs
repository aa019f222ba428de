//! Dungeon generation pipeline

use tracing::debug;

use crate::config::{GenerationParams, ParamError};
use crate::rng::DungeonRng;

use super::corridor::connect_regions;
use super::edges::identify_edges;
use super::grid::{Dungeon, initialize_grid};
use super::maze::carve_mazes;
use super::placement::place_rooms;
use super::trim::trim_dead_ends;

/// Generate a dungeon
///
/// Parameters are trusted: use [`generate_with`] or
/// [`GenerationParams::from_raw`] for caller-supplied values. Room sides
/// are drawn from `min_room_size..max_room_size`. The same seed and
/// parameters always give the same dungeon.
pub fn generate(
    width: usize,
    height: usize,
    room_attempts: usize,
    min_room_size: usize,
    max_room_size: usize,
    rng: &mut DungeonRng,
) -> Dungeon {
    debug!(
        width,
        height,
        room_attempts,
        min_room_size,
        max_room_size,
        seed = rng.seed(),
        "generating dungeon"
    );

    let dungeon = initialize_grid(width, height);
    let dungeon = place_rooms(dungeon, min_room_size, max_room_size, room_attempts, rng);
    let dungeon = carve_mazes(dungeon, rng);
    let dungeon = identify_edges(dungeon);
    let dungeon = connect_regions(dungeon, rng);
    trim_dead_ends(dungeon)
}

/// Validate `params`, then generate
pub fn generate_with(params: &GenerationParams, rng: &mut DungeonRng) -> Result<Dungeon, ParamError> {
    params.validate()?;
    Ok(generate(
        params.width,
        params.height,
        params.room_attempts,
        params.min_room_size,
        params.max_room_size,
        rng,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::Material;

    #[test]
    fn test_generation() {
        let mut rng = DungeonRng::new(12345);
        let dungeon = generate(50, 50, 200, 5, 15, &mut rng);

        assert!(dungeon.count(Material::Floor) > 0, "Should have room cells");
        assert!(dungeon.count(Material::Door) > 0, "Should have doors");
        assert!(!dungeon.rooms().is_empty());
    }

    #[test]
    fn test_generate_with_rejects_bad_params() {
        let params = GenerationParams {
            min_room_size: 10,
            max_room_size: 4,
            ..GenerationParams::default()
        };
        let mut rng = DungeonRng::new(1);
        assert!(matches!(
            generate_with(&params, &mut rng),
            Err(ParamError::RoomSizeOrder { min: 10, max: 4 })
        ));
    }

    #[test]
    fn test_generate_with_matches_generate() {
        let params = GenerationParams::default();
        let a = generate_with(&params, &mut DungeonRng::new(5)).unwrap();
        let b = generate(50, 50, 200, 5, 15, &mut DungeonRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_tiny_grids_do_not_panic() {
        for (w, h) in [(1, 1), (2, 3), (3, 3), (5, 4), (8, 8)] {
            let dungeon = generate(w, h, 10, 1, 2, &mut DungeonRng::new(3));
            assert_eq!(dungeon.width(), w);
            assert_eq!(dungeon.height(), h);
        }
    }
}
