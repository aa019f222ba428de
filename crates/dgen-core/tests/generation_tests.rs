//! Whole-pipeline invariants over many seeds

use dgen_core::dungeon::{components, dead_ends, is_connected, stats};
use dgen_core::{Dungeon, DungeonRng, GenerationParams, Material, ROOM_MARGIN, generate};
use proptest::prelude::*;

fn standard(seed: u64) -> Dungeon {
    generate(50, 50, 200, 5, 15, &mut DungeonRng::new(seed))
}

fn check_regions(dungeon: &Dungeon) {
    for p in dungeon.points() {
        let tile = dungeon.tile(p);
        assert_eq!(
            tile.material == Material::Wall,
            tile.region == 0,
            "tile {p:?} is {} with region {}",
            tile.material,
            tile.region
        );
        assert!(tile.region <= dungeon.num_regions());
    }
}

fn check_rooms(dungeon: &Dungeon) {
    let rooms = dungeon.rooms();
    for (i, a) in rooms.iter().enumerate() {
        assert!(a.x >= ROOM_MARGIN && a.y >= ROOM_MARGIN, "{a:?}");
        assert!(a.right() + ROOM_MARGIN <= dungeon.width(), "{a:?}");
        assert!(a.bottom() + ROOM_MARGIN <= dungeon.height(), "{a:?}");
        for b in &rooms[i + 1..] {
            assert!(!a.overlaps(b, 1), "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn test_region_matches_material() {
    for seed in 0..20 {
        check_regions(&standard(seed));
    }
}

#[test]
fn test_rooms_are_separate_and_inside_margin() {
    for seed in 0..20 {
        check_rooms(&standard(seed));
    }
}

#[test]
fn test_rooms_stay_floor() {
    let dungeon = standard(3);
    for room in dungeon.rooms() {
        for p in room.points() {
            assert_eq!(dungeon.material(p), Material::Floor);
        }
    }
}

#[test]
fn test_no_dead_ends_after_trimming() {
    for seed in 0..20 {
        let dungeon = standard(seed);
        assert_eq!(dead_ends(&dungeon), vec![], "seed {seed}");
    }
}

#[test]
fn test_same_seed_same_dungeon() {
    let a = standard(42);
    let b = standard(42);
    assert_eq!(a, b);
    assert_eq!(a.rows(), b.rows());

    let c = standard(43);
    assert_ne!(a.rows(), c.rows());
}

#[test]
fn test_mostly_connected() {
    let mut split = Vec::new();
    for seed in 0..100 {
        let dungeon = standard(seed);
        if !is_connected(&dungeon) {
            split.push((seed, components(&dungeon).len()));
        }
    }

    if !split.is_empty() {
        println!("disconnected dungeons (seed, components): {split:?}");
    }
    assert!(split.len() <= 10, "{} of 100 dungeons disconnected", split.len());
}

#[test]
fn test_single_maximal_room() {
    for seed in 0..20 {
        let mut rng = DungeonRng::new(seed);
        let dungeon = generate(20, 20, 1, 19, 20, &mut rng);

        // A 19x19 room cannot keep the margin, so the whole grid is maze
        assert!(dungeon.rooms().is_empty());
        check_regions(&dungeon);
        assert_eq!(dungeon.count(Material::Floor), 0);
        assert_eq!(dungeon.count(Material::Door), 0);
    }
}

#[test]
fn test_single_maximal_room_leaves_grid_for_mazes() {
    use dgen_core::dungeon::{carve_mazes, initialize_grid, place_rooms};

    let mut rng = DungeonRng::new(42);
    let dungeon = place_rooms(initialize_grid(20, 20), 19, 20, 1, &mut rng);
    assert!(dungeon.rooms().is_empty());
    let dungeon = carve_mazes(dungeon, &mut rng);
    assert!(dungeon.count(Material::Tunnel) > 0);
}

#[test]
fn test_stats_agree_with_grid() {
    let dungeon = standard(11);
    let s = stats(&dungeon);
    assert_eq!(s.width, 50);
    assert_eq!(s.height, 50);
    assert_eq!(s.rooms, dungeon.rooms().len());
    assert_eq!(s.regions, dungeon.num_regions());
    assert_eq!(s.floors + s.tunnels + s.doors + dungeon.count(Material::Wall), 2500);
    assert_eq!(s.components, components(&dungeon).len());
}

#[test]
fn test_default_params_generate() {
    let params = GenerationParams::default();
    let dungeon = dgen_core::generate_with(&params, &mut DungeonRng::new(8)).unwrap();
    assert_eq!(dungeon, standard(8));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_invariants_hold(
        seed in any::<u64>(),
        width in 20usize..60,
        height in 20usize..60,
        attempts in 1usize..300,
        min in 1usize..10,
        extra in 1usize..10,
    ) {
        let max = (min + extra).min(width.min(height) - 2).max(min + 1);
        let dungeon = generate(width, height, attempts, min, max, &mut DungeonRng::new(seed));

        prop_assert_eq!(dungeon.width(), width);
        prop_assert_eq!(dungeon.height(), height);
        check_regions(&dungeon);
        check_rooms(&dungeon);
        prop_assert!(dead_ends(&dungeon).is_empty());
        for room in dungeon.rooms() {
            prop_assert!(room.width >= min && room.width < max);
            prop_assert!(room.height >= min && room.height < max);
        }
    }
}
