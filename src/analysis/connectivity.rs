//! Marked-cell scans and edge-connected component search.
//!
//! All functions are pure reads of the grid. Traversal is breadth-first
//! with a visited set keyed by cell value, so every cell is visited at most
//! once and neighbours are bounds-checked before they are read.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::{Cell, Grid, Relocation};

/// Every marked cell, in row-major order.
#[must_use]
pub fn marked_cells(grid: &Grid) -> Vec<Cell> {
    grid.iter()
        .filter_map(|(cell, marked)| marked.then_some(cell))
        .collect()
}

/// The marked cells edge-reachable from `start`, including `start`.
///
/// Empty if `start` is unmarked or out of bounds.
#[must_use]
pub fn component(grid: &Grid, start: Cell) -> FxHashSet<Cell> {
    let mut visited = FxHashSet::default();
    if !grid.is_marked(start) {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        for neighbor in cell.neighbors(grid.size()) {
            if grid.is_marked(neighbor) && visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    visited
}

/// Size of the component containing `start`; 0 for no cell or an empty one.
#[must_use]
pub fn component_size(grid: &Grid, start: Option<Cell>) -> usize {
    start.map_or(0, |cell| component(grid, cell).len())
}

/// Number of edge-connected islands of marked cells.
#[must_use]
pub fn component_count(grid: &Grid) -> usize {
    let mut seen: FxHashSet<Cell> = FxHashSet::default();
    let mut count = 0;

    for cell in marked_cells(grid) {
        if seen.contains(&cell) {
            continue;
        }
        seen.extend(component(grid, cell));
        count += 1;
    }

    count
}

/// Empty cells that touch at least one marked cell, row-major, no duplicates.
#[must_use]
pub fn frontier(grid: &Grid) -> Vec<Cell> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();

    for cell in marked_cells(grid) {
        for neighbor in cell.neighbors(grid.size()) {
            if !grid.is_marked(neighbor) && seen.insert(neighbor) {
                out.push(neighbor);
            }
        }
    }

    out.sort_unstable();
    out
}

/// The single relocation that turns `before` into `after`, if there is one.
///
/// Returns `None` when the grids differ in size or in anything other than
/// exactly one cleared cell and exactly one newly marked cell.
#[must_use]
pub fn diff_relocation(before: &Grid, after: &Grid) -> Option<Relocation> {
    if before.size() != after.size() {
        return None;
    }

    let mut cleared = None;
    let mut marked = None;

    for ((cell, was), (_, is)) in before.iter().zip(after.iter()) {
        match (was, is) {
            (true, false) => {
                if cleared.replace(cell).is_some() {
                    return None;
                }
            }
            (false, true) => {
                if marked.replace(cell).is_some() {
                    return None;
                }
            }
            _ => {}
        }
    }

    Some(Relocation::new(cleared?, marked?))
}
