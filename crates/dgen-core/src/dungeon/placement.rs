//! Room placement
//!
//! Rejection sampling: every trial rolls a size and a position, and the
//! room is kept only if it leaves at least one wall tile between itself
//! and every room kept so far. Accepted rooms are carved as floor, each
//! with its own region, in acceptance order.

use tracing::debug;

use crate::consts::ROOM_MARGIN;
use crate::rng::DungeonRng;

use super::grid::Dungeon;
use super::room::Room;
use super::tile::Tile;

/// Wall tiles required between two rooms
const ROOM_GAP: usize = 1;

/// Run `attempts` placement trials and carve the accepted rooms
///
/// Room sides are drawn from `min_size..max_size`.
pub fn place_rooms(
    mut dungeon: Dungeon,
    min_size: usize,
    max_size: usize,
    attempts: usize,
    rng: &mut DungeonRng,
) -> Dungeon {
    debug!(attempts, min_size, max_size, "creating rooms");

    let mut rooms: Vec<Room> = Vec::new();
    for _ in 0..attempts {
        let Some(room) = roll_room(&dungeon, min_size, max_size, rng) else {
            continue;
        };

        if rooms.iter().any(|r| room.overlaps(r, ROOM_GAP)) {
            continue;
        }

        rooms.push(room);
    }

    // Carve out rooms
    for room in &rooms {
        let region = dungeon.mint_region();
        for p in room.points() {
            dungeon.set(p, Tile::floor(region));
        }
    }

    debug!(placed = rooms.len(), "rooms placed");
    dungeon.rooms = rooms;
    dungeon
}

/// Roll one candidate room
///
/// The size is always drawn. If a room that size cannot keep the border
/// margin plus its own wall ring, the trial ends there without drawing a
/// position.
fn roll_room(
    dungeon: &Dungeon,
    min_size: usize,
    max_size: usize,
    rng: &mut DungeonRng,
) -> Option<Room> {
    let width = rng.range(min_size, max_size);
    let height = rng.range(min_size, max_size);

    // Exclusive bound on the left edge
    let max_x = dungeon.width.checked_sub(width + 2)?;
    let max_y = dungeon.height.checked_sub(height + 2)?;

    if max_x <= ROOM_MARGIN || max_y <= ROOM_MARGIN {
        return None;
    }

    let x = rng.range(ROOM_MARGIN, max_x);
    let y = rng.range(ROOM_MARGIN, max_y);

    Some(Room::new(x, y, width, height))
}
