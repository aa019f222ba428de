//! Dead-end trimming
//!
//! A corridor or door tile with three or four walls around it leads
//! nowhere. It is filled back in, and the trim follows the stub back to
//! the next junction.

use tracing::debug;

use super::grid::Dungeon;
use super::room::Point;
use super::tile::Tile;

/// Fill in every dead end, following each stub to its junction
pub fn trim_dead_ends(mut dungeon: Dungeon) -> Dungeon {
    debug!("trimming tunnels");

    let mut removed = 0;
    for x in 1..dungeon.width.saturating_sub(1) {
        for y in 1..dungeon.height.saturating_sub(1) {
            removed += trim_from(&mut dungeon, Point::new(x, y));
        }
    }

    debug!(removed, "tunnels trimmed");
    dungeon
}

/// Trim starting at `start`, returning how many tiles were filled
fn trim_from(dungeon: &mut Dungeon, start: Point) -> usize {
    let mut removed = 0;
    let mut next = Some(start);

    while let Some(p) = next.take() {
        if !dungeon.material(p).is_passage() {
            break;
        }

        let mut walls = 0;
        for n in p.neighbors4() {
            let material = dungeon.material(n);
            if material.is_wall() {
                walls += 1;
            } else if material.is_passage() {
                next = Some(n);
            }
        }

        if walls < 3 {
            break;
        }

        dungeon.set(p, Tile::wall());
        removed += 1;
    }

    removed
}
