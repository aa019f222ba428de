//! Read-only checks over a finished dungeon

use serde::{Deserialize, Serialize};

use super::grid::Dungeon;
use super::room::Point;
use super::tile::{Material, RegionId};

/// Summary counts for logs and headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DungeonStats {
    pub width: usize,
    pub height: usize,
    pub rooms: usize,
    /// Region ids minted during generation
    pub regions: RegionId,
    pub floors: usize,
    pub tunnels: usize,
    pub doors: usize,
    /// 4-connected pieces of walkable ground
    pub components: usize,
}

pub fn stats(dungeon: &Dungeon) -> DungeonStats {
    DungeonStats {
        width: dungeon.width(),
        height: dungeon.height(),
        rooms: dungeon.rooms().len(),
        regions: dungeon.num_regions(),
        floors: dungeon.count(Material::Floor),
        tunnels: dungeon.count(Material::Tunnel),
        doors: dungeon.count(Material::Door),
        components: components(dungeon).len(),
    }
}

/// 4-connected groups of non-wall tiles, in row-major order of their
/// first tile
pub fn components(dungeon: &Dungeon) -> Vec<Vec<Point>> {
    let mut visited = vec![vec![false; dungeon.width()]; dungeon.height()];
    let mut groups = Vec::new();

    for start in dungeon.points() {
        if visited[start.y][start.x] || dungeon.material(start).is_wall() {
            continue;
        }

        let mut group = Vec::new();
        let mut stack = vec![start];
        visited[start.y][start.x] = true;

        while let Some(p) = stack.pop() {
            group.push(p);

            let (x, y) = (p.x as isize, p.y as isize);
            for (nx, ny) in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
                if nx < 0 || ny < 0 {
                    continue;
                }
                let n = Point::new(nx as usize, ny as usize);
                if !dungeon.in_bounds(n) || visited[n.y][n.x] || dungeon.material(n).is_wall() {
                    continue;
                }
                visited[n.y][n.x] = true;
                stack.push(n);
            }
        }

        groups.push(group);
    }

    groups
}

/// True when all walkable ground forms at most one piece
pub fn is_connected(dungeon: &Dungeon) -> bool {
    components(dungeon).len() <= 1
}

/// Corridor or door tiles with three or more walls around them
pub fn dead_ends(dungeon: &Dungeon) -> Vec<Point> {
    dungeon
        .points()
        .filter(|&p| dungeon.material(p).is_passage())
        .filter(|&p| {
            let (x, y) = (p.x as isize, p.y as isize);
            [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
                .into_iter()
                .filter(|&(nx, ny)| dungeon.is_wall_at(nx, ny))
                .count()
                >= 3
        })
        .collect()
}
