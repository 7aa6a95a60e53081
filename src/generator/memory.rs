/*
memory.rs

Copyright 2025 Hervé Quatremain

This file is part of Wakudo.

Wakudo is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wakudo is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wakudo. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generate show-then-recall grid puzzles.
//!
//! The puzzle is a square grid and an ordered list of distinct cells. The
//! application flashes the cells in that order, and the user must replay the
//! same cells in the same order.

use log::debug;

use super::puzzles;
use super::random;

// Max sampling attempts before the sequence is completed without the number
// source. The grid always has many more cells than the sequence needs, so the
// budget is never exhausted in practice.
const MAX_ATTEMPTS: usize = 1000;

/// Build a random memory puzzle scaled by the difficulty level.
pub fn generate_memory_puzzle(difficulty: puzzles::Difficulty) -> puzzles::MemoryPuzzle {
    generate_memory_puzzle_with_source(difficulty, &mut random::ThreadSource)
}

/// Same as [`generate_memory_puzzle`], with an explicit number source.
pub fn generate_memory_puzzle_with_source(
    difficulty: puzzles::Difficulty,
    source: &mut impl random::NumberSource,
) -> puzzles::MemoryPuzzle {
    let grid_size: usize = match difficulty {
        puzzles::Difficulty::Easy => 3,
        puzzles::Difficulty::Medium => 4,
        puzzles::Difficulty::Hard => 5,
    };
    let sequence_length: usize = grid_size;
    let total_cells: usize = grid_size * grid_size;

    // Sample distinct cells, rejecting the cells that are already in the
    // sequence.
    let mut sequence: Vec<usize> = Vec::with_capacity(sequence_length);
    let mut attempts: usize = 0;
    while sequence.len() < sequence_length && attempts < MAX_ATTEMPTS {
        attempts += 1;
        let cell: usize = source.next_int(0, (total_cells - 1) as i32) as usize;
        if !sequence.contains(&cell) {
            sequence.push(cell);
        }
    }

    // A defective number source can starve the sampling loop. Complete the
    // sequence with the first cells that are not used yet.
    if sequence.len() < sequence_length {
        debug!("Number source starved the cell sampling loop");
        for cell in 0..total_cells {
            if sequence.len() == sequence_length {
                break;
            }
            if !sequence.contains(&cell) {
                sequence.push(cell);
            }
        }
    }

    puzzles::MemoryPuzzle {
        grid_size,
        sequence,
    }
}
