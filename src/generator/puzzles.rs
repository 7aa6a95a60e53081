/*
puzzles.rs

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

//! Puzzle value types and kind dispatch.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use super::math;
use super::memory;
use super::random;
use super::sequence;

/// Puzzle difficulty level.
///
/// The difficulty drives the numeric ranges and the structure of every
/// generated puzzle.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Kind of puzzle that an alarm asks the user to solve.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
pub enum PuzzleKind {
    #[default]
    Math,
    Memory,
    Sequence,
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PuzzleKind::Math => write!(f, "Math"),
            PuzzleKind::Memory => write!(f, "Memory"),
            PuzzleKind::Sequence => write!(f, "Sequence"),
        }
    }
}

/// Arithmetic puzzle.
///
/// The user must pick the result of the expression among the proposed options.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MathPuzzle {
    /// Question text, for example `3 + 4 = ?`.
    pub question: String,

    /// Exact result of the expression.
    pub answer: i32,

    /// Proposed answers, in random order. The list contains
    /// [`MathPuzzle::answer`] exactly once, and no duplicate values.
    pub options: Vec<i32>,
}

impl MathPuzzle {
    /// Whether the given choice is the result of the expression.
    pub fn is_correct(&self, choice: i32) -> bool {
        choice == self.answer
    }
}

/// Show-then-recall grid puzzle.
///
/// The application flashes the cells of [`MemoryPuzzle::sequence`] one at a
/// time, in order, and the user must then tap the same cells in the same
/// order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MemoryPuzzle {
    /// The grid has `grid_size` x `grid_size` cells.
    pub grid_size: usize,

    /// Distinct cell indices in `[0, grid_size * grid_size - 1]`, in the order
    /// in which the cells are flashed.
    pub sequence: Vec<usize>,
}

impl MemoryPuzzle {
    /// Whether the replayed cells match the flashed sequence, in the same
    /// order.
    pub fn is_correct(&self, replay: &[usize]) -> bool {
        self.sequence == replay
    }
}

/// Number sequence puzzle.
///
/// One of the middle numbers of the sequence is hidden, and the user must pick
/// it among the proposed options.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SequencePuzzle {
    /// The five numbers of the sequence.
    pub sequence: Vec<i32>,

    /// Index of the hidden number. Always 1, 2, or 3, so that the first and
    /// last numbers stay visible.
    pub missing_index: usize,

    /// Proposed values for the hidden number, in random order. The list
    /// contains the hidden number exactly once, and no duplicate values.
    pub options: Vec<i32>,
}

impl SequencePuzzle {
    /// Return the hidden number.
    pub fn hidden_value(&self) -> i32 {
        self.sequence[self.missing_index]
    }

    /// Whether the given choice is the hidden number.
    pub fn is_correct(&self, choice: i32) -> bool {
        choice == self.hidden_value()
    }
}

/// One generated puzzle of any kind.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Puzzle {
    /// Arithmetic question.
    Math(MathPuzzle),

    /// Show-then-recall grid.
    Memory(MemoryPuzzle),

    /// Number sequence with a hidden value.
    Sequence(SequencePuzzle),
}

/// Generate a random puzzle of the given kind and difficulty.
pub fn generate_puzzle(kind: PuzzleKind, difficulty: Difficulty) -> Puzzle {
    generate_puzzle_with_source(kind, difficulty, &mut random::ThreadSource)
}

/// Same as [`generate_puzzle`], with an explicit number source.
pub fn generate_puzzle_with_source(
    kind: PuzzleKind,
    difficulty: Difficulty,
    source: &mut impl random::NumberSource,
) -> Puzzle {
    match kind {
        PuzzleKind::Math => {
            Puzzle::Math(math::generate_math_puzzle_with_source(difficulty, source))
        }
        PuzzleKind::Memory => Puzzle::Memory(memory::generate_memory_puzzle_with_source(
            difficulty, source,
        )),
        PuzzleKind::Sequence => Puzzle::Sequence(sequence::generate_sequence_puzzle_with_source(
            difficulty, source,
        )),
    }
}
