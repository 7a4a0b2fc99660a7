use super::state::Position;
use rand::Rng;
use std::collections::HashSet;

/// The impassable cells of the board: a fixed outer ring plus interior
/// walls added as the round escalates. Walls are only ever added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    size: usize,
    walls: HashSet<Position>,
}

impl Maze {
    /// A maze with only the boundary ring walled
    pub fn new(size: usize) -> Self {
        let mut walls = HashSet::new();
        let edge = (size - 1) as i32;
        for i in 0..size as i32 {
            walls.insert(Position::new(i, 0));
            walls.insert(Position::new(i, edge));
            walls.insert(Position::new(0, i));
            walls.insert(Position::new(edge, i));
        }
        Self { size, walls }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// True if the cell is a wall or lies outside the grid
    pub fn is_blocked(&self, pos: Position) -> bool {
        !self.in_bounds(pos) || self.walls.contains(&pos)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.size as i32 && pos.y < self.size as i32
    }

    /// Try to add up to `count` interior walls on random free cells,
    /// skipping anything in `forbidden`. Gives up after a bounded number
    /// of trials, so a crowded board yields fewer walls than asked for.
    /// Returns how many walls were actually placed.
    pub fn add_walls<R: Rng>(
        &mut self,
        count: usize,
        forbidden: &HashSet<Position>,
        attempt_factor: usize,
        rng: &mut R,
    ) -> usize {
        let hi = (self.size - 1) as i32;
        let mut added = 0;
        for _ in 0..count * attempt_factor {
            if added >= count {
                break;
            }
            let candidate = Position::new(rng.gen_range(1..hi), rng.gen_range(1..hi));
            if !self.walls.contains(&candidate) && !forbidden.contains(&candidate) {
                self.walls.insert(candidate);
                added += 1;
            }
        }
        added
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn walls(&self) -> impl Iterator<Item = &Position> {
        self.walls.iter()
    }

    /// Snapshot of the wall set, for building per-tick obstacle sets
    pub fn wall_set(&self) -> HashSet<Position> {
        self.walls.clone()
    }
}
