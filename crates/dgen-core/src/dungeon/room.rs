//! Grid positions and rooms

use serde::{Deserialize, Serialize};

/// A grid position, `x` across and `y` down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Offset by a signed delta, `None` if it would leave the first quadrant
    pub fn offset(self, dx: isize, dy: isize) -> Option<Point> {
        Some(Point {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Orthogonal neighbours: left, right, up, down
    ///
    /// The point must not lie on row or column 0.
    pub fn neighbors4(self) -> [Point; 4] {
        let Point { x, y } = self;
        [
            Point::new(x - 1, y),
            Point::new(x + 1, y),
            Point::new(x, y - 1),
            Point::new(x, y + 1),
        ]
    }

    /// All eight neighbours, row by row from the top left
    ///
    /// The point must not lie on row or column 0.
    pub fn neighbors8(self) -> [Point; 8] {
        let Point { x, y } = self;
        [
            Point::new(x - 1, y - 1),
            Point::new(x, y - 1),
            Point::new(x + 1, y - 1),
            Point::new(x - 1, y),
            Point::new(x + 1, y),
            Point::new(x - 1, y + 1),
            Point::new(x, y + 1),
            Point::new(x + 1, y + 1),
        ]
    }
}

/// A placed rectangular room
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Room {
    /// X coordinate of room interior (left edge)
    pub x: usize,
    /// Y coordinate of room interior (top edge)
    pub y: usize,
    /// Width of room interior
    pub width: usize,
    /// Height of room interior
    pub height: usize,
    /// Wall tiles next to a room or corridor, in scan order
    pub edges: Vec<Point>,
}

impl Room {
    /// Create a new room
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            edges: Vec::new(),
        }
    }

    /// Top-left interior tile
    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// First column past the interior
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// First row past the interior
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// True unless the two rooms are at least `gap` tiles apart on some axis
    pub fn overlaps(&self, other: &Room, gap: usize) -> bool {
        let apart_x = self.right() + gap <= other.x || other.right() + gap <= self.x;
        let apart_y = self.bottom() + gap <= other.y || other.bottom() + gap <= self.y;
        !(apart_x || apart_y)
    }

    /// Get center point of room
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if point is inside room
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Every interior tile, column by column
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (x, y, right, bottom) = (self.x, self.y, self.right(), self.bottom());
        (x..right).flat_map(move |px| (y..bottom).map(move |py| Point::new(px, py)))
    }
}
