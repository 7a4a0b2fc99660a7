use super::state::Position;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Manhattan distance, the admissible heuristic for unit-cost moves on a
/// 4-connected grid
fn manhattan(a: Position, b: Position) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

fn in_bounds(pos: Position, size: usize) -> bool {
    pos.x >= 0 && pos.y >= 0 && pos.x < size as i32 && pos.y < size as i32
}

/// A* from `start` to `goal`, treating `obstacles` and out-of-grid cells as
/// impassable. Returns the cells from the first step after `start` through
/// `goal` inclusive, or an empty vec when the goal is unreachable.
///
/// Ties between equal-priority frontier entries break by insertion order,
/// so identical inputs always produce the identical path. The caller passes
/// a fresh obstacle set every tick; nothing is cached here.
pub fn find_path(
    start: Position,
    goal: Position,
    obstacles: &HashSet<Position>,
    size: usize,
) -> Vec<Position> {
    let mut frontier = BinaryHeap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut cost_so_far: HashMap<Position, u32> = HashMap::new();
    let mut seq: u64 = 0;

    cost_so_far.insert(start, 0);
    frontier.push(Reverse((manhattan(start, goal), seq, start)));

    while let Some(Reverse((_, _, current))) = frontier.pop() {
        if current == goal {
            let mut path = Vec::new();
            let mut cell = current;
            while cell != start {
                path.push(cell);
                cell = came_from[&cell];
            }
            path.reverse();
            return path;
        }

        for neighbor in current.neighbors() {
            if !in_bounds(neighbor, size) || obstacles.contains(&neighbor) {
                continue;
            }
            let new_cost = cost_so_far[&current] + 1;
            if cost_so_far.get(&neighbor).map_or(true, |&c| new_cost < c) {
                cost_so_far.insert(neighbor, new_cost);
                came_from.insert(neighbor, current);
                seq += 1;
                frontier.push(Reverse((new_cost + manhattan(neighbor, goal), seq, neighbor)));
            }
        }
    }

    Vec::new()
}
