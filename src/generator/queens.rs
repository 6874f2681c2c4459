/*
queens.rs

Copyright 2025 Hervé Quatremain

This file is part of Brainplay.

Brainplay is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Brainplay is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Brainplay. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generate a board for the queens game.
//!
//! Generation works in two steps:
//!
//! 1. A random N-queens placement (one queen per row and column, no diagonal attack) is found
//!    by backtracking. Each row keeps its own copy of the occupied columns and diagonals, so
//!    that going back one row does not require undoing anything.
//! 2. Each queen seeds a region. All the regions grow together: at each step, the smallest
//!    region that can still grow (ties broken at random) claims a random cell on its border.
//!    This keeps the regions connected, of similar sizes, and covering the whole board.
//!
//! Only the regions are given to the player. The queens of the placement are kept as the
//! solution of the board.

use log::{debug, warn};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::HashSet;

use crate::grid::Position;
use crate::rules::queens::QueensBoard;
use crate::settings::QueensSettings;

/// Max number of placement attempts before falling back to a predefined solution.
const MAX_ITERATIONS: usize = 200_000;

/// Predefined placements, indexed by `size - 4`.
const FALLBACK_SOLUTIONS: [&[usize]; 5] = [
    &[1, 3, 0, 2],
    &[0, 2, 4, 1, 3],
    &[1, 3, 5, 0, 2, 4],
    &[0, 2, 4, 6, 1, 3, 5],
    &[0, 4, 7, 5, 2, 6, 1, 3],
];

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum PlacementError {
    /// No possible placement.
    NoPlacement,

    /// No placement found before the iteration limit.
    IterationsExceeded,
}

/// Columns and diagonals already taken by the queens of the previous rows.
#[derive(Debug, Clone, Default)]
struct Occupied {
    /// Column of the queen in each row placed so far.
    cols: Vec<usize>,
    used_cols: HashSet<usize>,

    /// Diagonals identified by `row - col`.
    diagonals: HashSet<isize>,

    /// Anti-diagonals identified by `row + col`.
    anti_diagonals: HashSet<usize>,
}

impl Occupied {
    /// Whether a queen can be placed in the next row at the given column.
    fn is_free(&self, col: usize) -> bool {
        let row: usize = self.cols.len();
        !self.used_cols.contains(&col)
            && !self.diagonals.contains(&(row as isize - col as isize))
            && !self.anti_diagonals.contains(&(row + col))
    }

    /// Return a copy with a queen placed in the next row at the given column.
    fn with_queen(&self, col: usize) -> Self {
        let row: usize = self.cols.len();
        let mut next: Occupied = self.clone();
        next.cols.push(col);
        next.used_cols.insert(col);
        next.diagonals.insert(row as isize - col as isize);
        next.anti_diagonals.insert(row + col);
        next
    }
}

/// Find random N-queens placements.
pub struct Placement {
    /// Width and height of the board.
    pub size: usize,

    /// Number of iterations it took to find the last placement.
    pub iteration: usize,
}

impl Placement {
    /// Create a [`Placement`] object.
    pub fn new(size: usize) -> Self {
        Self { size, iteration: 0 }
    }

    /// Return a random placement as the column of the queen in each row.
    ///
    /// # Errors
    ///
    /// The method returns an error if no placement exists for the board size, or if the number of
    /// iterations exceeds [`MAX_ITERATIONS`].
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<usize>, PlacementError> {
        self.iteration = 0;
        let res: Result<Vec<usize>, PlacementError> = self.place(&Occupied::default(), rng);
        debug!("Queens placement: {} iterations", self.iteration);
        res
    }

    /// Recursively place a queen in each row.
    fn place<R: Rng + ?Sized>(
        &mut self,
        occupied: &Occupied,
        rng: &mut R,
    ) -> Result<Vec<usize>, PlacementError> {
        if occupied.cols.len() == self.size {
            return Ok(occupied.cols.clone());
        }
        self.iteration += 1;
        if self.iteration > MAX_ITERATIONS {
            return Err(PlacementError::IterationsExceeded);
        }

        // Randomize the order in which to test the columns
        let mut cols: Vec<usize> = (0..self.size).filter(|c| occupied.is_free(*c)).collect();
        cols.shuffle(rng);

        for col in cols {
            match self.place(&occupied.with_queen(col), rng) {
                Ok(solution) => return Ok(solution),
                Err(PlacementError::IterationsExceeded) => {
                    return Err(PlacementError::IterationsExceeded);
                }
                Err(PlacementError::NoPlacement) => (),
            }
        }
        Err(PlacementError::NoPlacement)
    }
}

/// Grow one region around each queen until the whole board is covered.
///
/// Return the region identifier of each cell in row-major order. The region of the queen in row
/// `r` is `r`.
pub fn grow_regions<R: Rng + ?Sized>(size: usize, solution: &[usize], rng: &mut R) -> Vec<usize> {
    let mut regions: Vec<Option<usize>> = vec![None; size * size];
    let mut sizes: Vec<usize> = vec![1; solution.len()];
    let mut frontiers: Vec<Vec<Position>> = vec![Vec::new(); solution.len()];

    for (row, col) in solution.iter().enumerate() {
        regions[Position::new(row, *col).index(size)] = Some(row);
    }
    for (row, col) in solution.iter().enumerate() {
        frontiers[row] = Position::new(row, *col)
            .orthogonal(size)
            .into_iter()
            .filter(|p| regions[p.index(size)].is_none())
            .collect();
    }

    let mut unassigned: usize = regions.iter().filter(|r| r.is_none()).count();
    while unassigned > 0 {
        // Forget the cells that other regions claimed in the meantime
        for frontier in frontiers.iter_mut() {
            frontier.retain(|p| regions[p.index(size)].is_none());
        }

        let Some(smallest) = (0..frontiers.len())
            .filter(|r| !frontiers[*r].is_empty())
            .map(|r| sizes[r])
            .min()
        else {
            break;
        };
        let candidates: Vec<usize> = (0..frontiers.len())
            .filter(|r| !frontiers[*r].is_empty() && sizes[*r] == smallest)
            .collect();
        let Some(&region) = candidates.choose(rng) else {
            break;
        };

        let i: usize = rng.random_range(0..frontiers[region].len());
        let cell: Position = frontiers[region].swap_remove(i);
        regions[cell.index(size)] = Some(region);
        sizes[region] += 1;
        unassigned -= 1;

        for p in cell.orthogonal(size) {
            if regions[p.index(size)].is_none() && !frontiers[region].contains(&p) {
                frontiers[region].push(p);
            }
        }
    }

    if unassigned > 0 {
        warn!("{unassigned} cells could not be assigned to a region");
    }
    regions.into_iter().map(|r| r.unwrap_or_default()).collect()
}

/// Generate a random board.
pub fn generate(settings: &QueensSettings) -> QueensBoard {
    generate_with(settings, &mut rand::rng())
}

/// Generate a random board with the given random generator.
pub fn generate_with<R: Rng + ?Sized>(settings: &QueensSettings, rng: &mut R) -> QueensBoard {
    let size: usize = settings.size();
    let solution: Vec<usize> = match Placement::new(size).generate(rng) {
        Ok(s) => s,
        Err(e) => {
            warn!("Cannot generate a queens placement for {size}x{size} ({e:?}), using a predefined one");
            FALLBACK_SOLUTIONS[size - 4].to_vec()
        }
    };
    debug!("Queens solution: {solution:?}");

    let regions: Vec<usize> = grow_regions(size, &solution, rng);
    QueensBoard::with_solution(size, regions, solution)
}
