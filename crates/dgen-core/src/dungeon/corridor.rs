//! Region connection (doors)
//!
//! Two phases:
//! 1. Each room opens one random edge and joins the region behind it.
//! 2. Rooms and their edges are visited in random order; an edge that
//!    separates two regions is opened unless the far region is already
//!    marked as linked. At most one extra door per room.
//!
//! Phase 2 tracks linked regions in a flat set rather than a union-find,
//! so a pathological layout can stay split. Dead-end trimming later
//! removes any door left facing wall.

use std::collections::BTreeSet;

use tracing::debug;

use crate::rng::DungeonRng;

use super::grid::Dungeon;
use super::room::Point;
use super::tile::{RegionId, Tile};

/// Regions already joined by a phase 2 door
#[derive(Debug, Clone, Default)]
pub struct LinkedRegions {
    linked: BTreeSet<RegionId>,
}

impl LinkedRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, region: RegionId) -> bool {
        self.linked.contains(&region)
    }

    /// Mark both sides of a new door as linked
    pub fn link(&mut self, a: RegionId, b: RegionId) {
        self.linked.insert(a);
        self.linked.insert(b);
    }

    pub fn len(&self) -> usize {
        self.linked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.linked.is_empty()
    }
}

/// Open doors so rooms join the regions around them
pub fn connect_regions(mut dungeon: Dungeon, rng: &mut DungeonRng) -> Dungeon {
    debug!("connecting regions");

    let joined = join_rooms(&mut dungeon, rng);
    let linked = link_remaining(&mut dungeon, rng);

    debug!(joined, linked, "regions connected");
    dungeon
}

/// Phase 1: one random edge per room, in room order
///
/// The edge becomes a door when any of its eight neighbours is open ground
/// of a different region; the whole room then takes that region. Rooms
/// without edges are skipped without a draw.
fn join_rooms(dungeon: &mut Dungeon, rng: &mut DungeonRng) -> usize {
    let mut joined = 0;

    for i in 0..dungeon.rooms.len() {
        let Some(&edge) = rng.choose(&dungeon.rooms[i].edges) else {
            continue;
        };
        let room_region = dungeon.tile(dungeon.rooms[i].location()).region;

        let target = edge
            .neighbors8()
            .into_iter()
            .map(|p| dungeon.tile(p))
            .find(|tile| tile.material.is_open() && tile.region != room_region);

        if let Some(target) = target {
            dungeon.set(edge, Tile::door(target.region));
            for p in dungeon.rooms[i].points() {
                dungeon.tiles[p.y][p.x].region = target.region;
            }
            joined += 1;
        }
    }

    joined
}

/// Phase 2: extra doors between regions not yet linked
fn link_remaining(dungeon: &mut Dungeon, rng: &mut DungeonRng) -> usize {
    let mut linked = LinkedRegions::new();
    let mut doors = 0;

    for i in rng.permutation(dungeon.rooms.len()) {
        for j in rng.permutation(dungeon.rooms[i].edges.len()) {
            let edge = dungeon.rooms[i].edges[j];
            if let Some((near, far)) = bridge(dungeon, edge, &linked) {
                dungeon.set(edge, Tile::door(near));
                linked.link(near, far);
                doors += 1;
                break;
            }
        }
    }

    doors
}

/// The pair of regions an edge would join, if it is worth opening
///
/// The first open neighbour (left, right, up, down) fixes the near region;
/// a later neighbour of another, unlinked region is the far side.
fn bridge(dungeon: &Dungeon, edge: Point, linked: &LinkedRegions) -> Option<(RegionId, RegionId)> {
    let mut near = None;

    for p in edge.neighbors4() {
        let tile = dungeon.tile(p);
        if !tile.material.is_open() {
            continue;
        }
        match near {
            None => near = Some(tile.region),
            Some(current) if tile.region != current && !linked.contains(tile.region) => {
                return Some((current, tile.region));
            }
            Some(_) => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Material, Room, identify_edges, initialize_grid};

    /// A room at (5,5) 4x3 with a corridor strip above it
    fn room_below_corridor() -> Dungeon {
        let mut dungeon = initialize_grid(20, 20);
        let room = Room::new(5, 5, 4, 3);
        let region = dungeon.mint_region();
        for p in room.points() {
            dungeon.set(p, Tile::floor(region));
        }
        dungeon.rooms.push(room);

        let corridor = dungeon.mint_region();
        for x in 2..15 {
            dungeon.set(Point::new(x, 3), Tile::tunnel(corridor));
        }
        identify_edges(dungeon)
    }

    #[test]
    fn test_linked_regions() {
        let mut linked = LinkedRegions::new();
        assert!(linked.is_empty());
        linked.link(3, 5);
        assert!(linked.contains(3));
        assert!(linked.contains(5));
        assert!(!linked.contains(4));
        assert_eq!(linked.len(), 2);
    }

    #[test]
    fn test_room_joins_corridor_region() {
        let dungeon = room_below_corridor();
        assert_eq!(dungeon.rooms()[0].edges.len(), 4);

        let mut rng = DungeonRng::new(42);
        let dungeon = connect_regions(dungeon, &mut rng);

        let doors: Vec<Point> = dungeon
            .points()
            .filter(|&p| dungeon.material(p) == Material::Door)
            .collect();
        assert_eq!(doors.len(), 1);
        assert_eq!(doors[0].y, 4);
        assert_eq!(dungeon.tile(doors[0]).region, 2);

        // The room now belongs to the corridor region
        for p in dungeon.rooms()[0].points() {
            assert_eq!(dungeon.tile(p).region, 2);
        }
    }

    #[test]
    fn test_room_without_edges_is_skipped() {
        let mut dungeon = initialize_grid(20, 20);
        let room = Room::new(5, 5, 4, 3);
        let region = dungeon.mint_region();
        for p in room.points() {
            dungeon.set(p, Tile::floor(region));
        }
        dungeon.rooms.push(room);
        let dungeon = identify_edges(dungeon);

        let mut rng = DungeonRng::new(1);
        let before = dungeon.clone();
        let dungeon = connect_regions(dungeon, &mut rng);
        assert_eq!(dungeon, before);
    }

    #[test]
    fn test_bridge_between_two_rooms() {
        let mut dungeon = initialize_grid(30, 20);
        let left = Room::new(4, 4, 5, 5);
        let right = Room::new(10, 4, 5, 5);
        for (room, region) in [(&left, 1), (&right, 2)] {
            for p in room.points() {
                dungeon.set(p, Tile::floor(region));
            }
        }
        dungeon.num_regions = 2;

        let linked = LinkedRegions::new();
        assert_eq!(bridge(&dungeon, Point::new(9, 6), &linked), Some((1, 2)));

        let mut linked = LinkedRegions::new();
        linked.link(2, 7);
        assert_eq!(bridge(&dungeon, Point::new(9, 6), &linked), None);

        // A wall tile with open ground on one side only
        assert_eq!(bridge(&dungeon, Point::new(6, 3), &LinkedRegions::new()), None);
    }

    #[test]
    fn test_phase_two_links_two_rooms() {
        let mut dungeon = initialize_grid(30, 20);
        for room in [Room::new(4, 4, 5, 5), Room::new(10, 4, 5, 5)] {
            let region = dungeon.mint_region();
            for p in room.points() {
                dungeon.set(p, Tile::floor(region));
            }
            dungeon.rooms.push(room);
        }
        let mut dungeon = identify_edges(dungeon);

        let mut rng = DungeonRng::new(9);
        let doors = link_remaining(&mut dungeon, &mut rng);
        assert_eq!(doors, 1);
        assert_eq!(dungeon.count(Material::Door), 1);
    }
}
