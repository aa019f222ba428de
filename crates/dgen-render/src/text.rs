//! Plain text rendering

use std::fmt::Write;

use dgen_core::Dungeon;

/// Header line followed by one line per row, each tile as its symbol and
/// a space
pub fn render(dungeon: &Dungeon) -> String {
    let mut out = String::with_capacity((dungeon.width() * 2 + 1) * (dungeon.height() + 1));
    let _ = writeln!(out, "{}", header(dungeon));

    for row in dungeon.rows() {
        for tile in row {
            out.push(tile.material.symbol());
            out.push(' ');
        }
        out.push('\n');
    }

    out
}

pub fn header(dungeon: &Dungeon) -> String {
    format!(
        "Dungeon: ( {} , {} ) Regions: {}",
        dungeon.width(),
        dungeon.height(),
        dungeon.num_regions()
    )
}
