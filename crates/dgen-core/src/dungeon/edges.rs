//! Room edge detection
//!
//! An edge is a tile of a room's wall ring with open ground (a corridor
//! or another room) directly behind it. Edges are the only places doors
//! can go.

use tracing::debug;

use super::grid::Dungeon;
use super::room::{Point, Room};

/// Record the edges of every room
pub fn identify_edges(mut dungeon: Dungeon) -> Dungeon {
    debug!("identifying edges");

    let mut rooms = std::mem::take(&mut dungeon.rooms);
    for room in &mut rooms {
        room.edges = room_edges(&dungeon, room);
    }
    dungeon.rooms = rooms;

    debug!(
        edges = dungeon.rooms.iter().map(|r| r.edges.len()).sum::<usize>(),
        "edges identified"
    );
    dungeon
}

/// Edges in scan order: top row, bottom row, left column, right column
fn room_edges(dungeon: &Dungeon, room: &Room) -> Vec<Point> {
    let open = |x: usize, y: usize| dungeon.material(Point::new(x, y)).is_open();
    let mut edges = Vec::new();

    for x in room.x..room.right() {
        if open(x, room.y - 2) {
            edges.push(Point::new(x, room.y - 1));
        }
    }
    for x in room.x..room.right() {
        if open(x, room.bottom() + 1) {
            edges.push(Point::new(x, room.bottom()));
        }
    }
    for y in room.y..room.bottom() {
        if open(room.x - 2, y) {
            edges.push(Point::new(room.x - 1, y));
        }
    }
    for y in room.y..room.bottom() {
        if open(room.right() + 1, y) {
            edges.push(Point::new(room.right(), y));
        }
    }

    edges
}
