//! Maze carving
//!
//! Every untouched block of wall left after room placement becomes one
//! region, filled with a tree-shaped corridor maze by depth-first
//! backtracking. A corridor may only step into wall that keeps a full wall
//! tile between it and any other corridor or room, so mazes never loop,
//! never run alongside themselves and never touch rooms directly.

use tracing::debug;

use crate::rng::DungeonRng;

use super::grid::Dungeon;
use super::room::Point;
use super::tile::{RegionId, Tile};

/// Directions for maze movement, in candidate order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
    Up,
    Down,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

impl Direction {
    const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Unit step across the direction of travel
    const fn across(self) -> (isize, isize) {
        match self {
            Direction::Left | Direction::Right => (0, 1),
            Direction::Up | Direction::Down => (1, 0),
        }
    }
}

/// Fill every untouched wall pocket with a maze
pub fn carve_mazes(mut dungeon: Dungeon, rng: &mut DungeonRng) -> Dungeon {
    debug!("creating tunnels");

    let first_region = dungeon.num_regions + 1;
    for x in 1..dungeon.width.saturating_sub(1) {
        for y in 1..dungeon.height.saturating_sub(1) {
            let origin = Point::new(x, y);
            if is_untouched(&dungeon, origin) {
                let region = dungeon.mint_region();
                grow_maze(&mut dungeon, origin, region, rng);
            }
        }
    }

    debug!(
        mazes = dungeon.num_regions + 1 - first_region,
        "tunnels carved"
    );
    dungeon
}

/// A tile whose whole 3x3 block is still wall
fn is_untouched(dungeon: &Dungeon, p: Point) -> bool {
    let (x, y) = (p.x as isize, p.y as isize);
    (-1..=1).all(|dx| (-1..=1).all(|dy| dungeon.is_wall_at(x + dx, y + dy)))
}

/// The tile one step from `from` if a corridor may be carved into it
///
/// The step must be wall, and so must the three tiles beyond it and the
/// two tiles beside it.
fn carve_target(dungeon: &Dungeon, from: Point, dir: Direction) -> Option<Point> {
    let (dx, dy) = dir.delta();
    let (ax, ay) = dir.across();
    let (x, y) = (from.x as isize, from.y as isize);
    let (sx, sy) = (x + dx, y + dy);
    let (bx, by) = (x + 2 * dx, y + 2 * dy);

    let clear = dungeon.is_wall_at(sx, sy)
        && dungeon.is_wall_at(bx, by)
        && dungeon.is_wall_at(bx + ax, by + ay)
        && dungeon.is_wall_at(bx - ax, by - ay)
        && dungeon.is_wall_at(sx + ax, sy + ay)
        && dungeon.is_wall_at(sx - ax, sy - ay);

    if clear { from.offset(dx, dy) } else { None }
}

/// Depth-first growth from `origin` with an explicit stack
///
/// After a branch is exhausted its parent is re-examined, so a tile keeps
/// sprouting branches until none of its directions is open. A random draw
/// is made only when more than one direction is open.
fn grow_maze(dungeon: &mut Dungeon, origin: Point, region: RegionId, rng: &mut DungeonRng) {
    dungeon.set(origin, Tile::tunnel(region));

    let mut stack = vec![origin];
    while let Some(&current) = stack.last() {
        let mut open = [current; 4];
        let mut q = 0;

        for dir in DIRECTIONS {
            if let Some(next) = carve_target(dungeon, current, dir) {
                open[q] = next;
                q += 1;
            }
        }

        let next = match q {
            0 => {
                stack.pop();
                continue;
            }
            1 => open[0],
            _ => open[rng.below(q)],
        };

        dungeon.set(next, Tile::tunnel(region));
        stack.push(next);
    }
}
