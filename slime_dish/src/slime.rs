use crate::cell::Coord;
use serde::Serialize;

/// Main diffusion direction of a slime cell.
///
/// Decreasing `x` is "up" and decreasing `y` is "left".
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Direction {
    UpLeft,
    DownLeft,
    UpRight,
    DownRight,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn offset(&self) -> (i64, i64) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownRight => (1, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The coordinate one step away from `idx` in this direction.
    pub fn step(&self, idx: Coord) -> Coord {
        let (dx, dy) = self.offset();
        (idx.0 + dx, idx.1 + dy)
    }

    /// Direction pointing from `from` towards `to`, diagonals first.
    /// `None` when both coordinates are the same.
    pub fn towards(from: Coord, to: Coord) -> Option<Direction> {
        let dx = to.0.cmp(&from.0);
        let dy = to.1.cmp(&from.1);

        use std::cmp::Ordering::*;
        match (dx, dy) {
            (Less, Less) => Some(Direction::UpLeft),
            (Greater, Less) => Some(Direction::DownLeft),
            (Less, Greater) => Some(Direction::UpRight),
            (Greater, Greater) => Some(Direction::DownRight),
            (Less, Equal) => Some(Direction::Up),
            (Greater, Equal) => Some(Direction::Down),
            (Equal, Less) => Some(Direction::Left),
            (Equal, Greater) => Some(Direction::Right),
            (Equal, Equal) => None,
        }
    }
}

/// The 8 neighbours of `idx`, row by row.
pub fn neighbours(idx: Coord) -> Vec<Coord> {
    let (x, y) = idx;
    vec![
        (x - 1, y - 1),
        (x - 1, y),
        (x - 1, y + 1),
        (x, y - 1),
        (x, y + 1),
        (x + 1, y - 1),
        (x + 1, y),
        (x + 1, y + 1),
    ]
}

/// Whether a slime cell may spread into `idx`.
///
/// The outermost row and column at index 0 count as the dish wall, so only
/// coordinates strictly inside `(0, shape)` are open.
pub fn within_boundary(idx: Coord, shape: (usize, usize)) -> bool {
    idx.0 > 0 && idx.1 > 0 && idx.0 < shape.0 as i64 && idx.1 < shape.1 as i64
}

pub fn distance(a: Coord, b: Coord) -> f64 {
    let dx = (a.0 - b.0) as f64;
    let dy = (a.1 - b.1) as f64;
    (dx * dx + dy * dy).sqrt()
}
