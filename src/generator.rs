/*
generator.rs

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

//! Generate random wake-up puzzles.
//!
//! The alarm application stores a [`puzzles::PuzzleKind`] and a
//! [`puzzles::Difficulty`] for every configured alarm.
//! When the alarm rings, the application requests a puzzle with the
//! [`puzzles::generate_puzzle`] function, which dispatches to one of the three
//! generators:
//!
//! * [`math::generate_math_puzzle`] builds an arithmetic question with its
//!   exact answer and a shuffled list of proposed answers.
//!
//! * [`memory::generate_memory_puzzle`] builds a square grid size and a
//!   sequence of distinct cells. The application flashes the cells in that
//!   order and the user must replay the same order.
//!
//! * [`sequence::generate_sequence_puzzle`] builds a five-number sequence
//!   that follows a pattern, hides one of the middle numbers, and proposes
//!   candidate values for it.
//!
//! The returned puzzle objects are plain values. They embed everything that
//! the application needs to display the puzzle and to check the user answer,
//! and they are dropped once the puzzle is answered. A new call returns a new,
//! independent puzzle.
//!
//! Every generator has a `_with_source` variant that takes a
//! [`random::NumberSource`] so that tests can force specific puzzles. The
//! plain variants use the thread-local random number generator.

pub mod math;
pub mod memory;
pub mod options;
pub mod puzzles;
pub mod random;
pub mod sequence;
