//! Output formats over generated dungeons

use dgen_core::{DungeonRng, Material, Point, generate};
use dgen_render::{MaterialGrid, RenderOptions, json, png, text};
use proptest::prelude::*;

#[test]
fn test_json_round_trip() {
    let dungeon = generate(50, 50, 200, 5, 15, &mut DungeonRng::new(42));
    let json = json::to_json(&dungeon).unwrap();
    let grid = json::from_json(&json).unwrap();

    assert_eq!(grid, MaterialGrid::from(&dungeon));
    assert_eq!(grid.width(), 50);
    assert_eq!(grid.height(), 50);
    for p in dungeon.points() {
        assert_eq!(grid.get(p), Some(dungeon.material(p)));
    }
}

#[test]
fn test_png_decodes() {
    let dungeon = generate(30, 20, 50, 3, 7, &mut DungeonRng::new(9));
    let options = RenderOptions { pixel_size: 3 };
    let bytes = png::encode(&dungeon, &options).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (90, 60));
    assert_eq!(decoded, png::render(&dungeon, &options));
}

#[test]
fn test_png_colors_follow_material() {
    let dungeon = generate(30, 30, 100, 4, 8, &mut DungeonRng::new(4));
    let image = png::render(&dungeon, &RenderOptions { pixel_size: 5 });

    // Body pixels of different materials differ; same material matches
    let body = |p: Point| *image.get_pixel(p.x as u32 * 5 + 2, p.y as u32 * 5 + 2);
    let wall = body(Point::new(0, 0));
    for p in dungeon.points() {
        if dungeon.material(p) == Material::Wall {
            assert_eq!(body(p), wall);
        } else {
            assert_ne!(body(p), wall);
        }
    }
}

#[test]
fn test_text_matches_grid() {
    let dungeon = generate(25, 25, 40, 3, 6, &mut DungeonRng::new(1));
    let out = text::render(&dungeon);
    assert!(out.starts_with("Dungeon: ( 25 , 25 ) Regions: "));
    assert_eq!(out.lines().count(), 26);
    assert_eq!(
        out.matches('=').count(),
        dungeon.count(Material::Floor),
        "floor symbols"
    );
    assert_eq!(out.matches('|').count(), dungeon.count(Material::Door));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_json_preserves_materials(seed in any::<u64>(), width in 20usize..40, height in 20usize..40) {
        let dungeon = generate(width, height, 60, 3, 8, &mut DungeonRng::new(seed));
        let grid = json::from_json(&json::to_json(&dungeon).unwrap()).unwrap();
        prop_assert_eq!(grid.width(), width);
        prop_assert_eq!(grid.height(), height);
        for material in [Material::Wall, Material::Floor, Material::Door, Material::Tunnel] {
            prop_assert_eq!(grid.count(material), dungeon.count(material));
        }
    }
}
