/*
math.rs

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

//! Generate arithmetic puzzles.
//!
//! An arithmetic puzzle is a question such as `12 * 3 = ?` with multiple
//! proposed answers. At the hard level, half of the questions use a third
//! operand, such as `(23 - 11) + 4 = ?`.

use log::debug;

use super::options;
use super::puzzles;
use super::random;

/// Operators that can appear in a question, in the order in which the
/// generator indexes them.
const OPERATORS: [char; 3] = ['+', '-', '*'];

/// Apply the operator to the operands with plain integer arithmetic.
fn apply(operand1: i32, operator: char, operand2: i32) -> i32 {
    match operator {
        '+' => operand1 + operand2,
        '-' => operand1 - operand2,
        _ => operand1 * operand2,
    }
}

/// Build a random arithmetic puzzle scaled by the difficulty level.
pub fn generate_math_puzzle(difficulty: puzzles::Difficulty) -> puzzles::MathPuzzle {
    generate_math_puzzle_with_source(difficulty, &mut random::ThreadSource)
}

/// Same as [`generate_math_puzzle`], with an explicit number source.
pub fn generate_math_puzzle_with_source(
    difficulty: puzzles::Difficulty,
    source: &mut impl random::NumberSource,
) -> puzzles::MathPuzzle {
    let (operand1, operand2, operator) = match difficulty {
        puzzles::Difficulty::Easy => (
            source.next_int(1, 10),
            source.next_int(1, 10),
            // Only additions and subtractions
            OPERATORS[source.next_int(0, 1) as usize],
        ),
        puzzles::Difficulty::Medium => (
            source.next_int(5, 20),
            source.next_int(5, 20),
            OPERATORS[source.next_int(0, 2) as usize],
        ),
        puzzles::Difficulty::Hard => {
            let operand1: i32 = source.next_int(10, 50);
            let operand2: i32 = source.next_int(10, 30);
            let operator: char = OPERATORS[source.next_int(0, 2) as usize];

            // Half of the hard questions get a third operand.
            if source.next_int(0, 1) == 1 {
                let operand3: i32 = source.next_int(1, 10);
                let operator2: char = OPERATORS[source.next_int(0, 1) as usize];
                let answer: i32 =
                    apply(apply(operand1, operator, operand2), operator2, operand3);

                debug!(
                    "3-operand question: ({operand1} {operator} {operand2}) {operator2} {operand3} = {answer}"
                );
                return puzzles::MathPuzzle {
                    question: format!(
                        "({operand1} {operator} {operand2}) {operator2} {operand3} = ?"
                    ),
                    answer,
                    options: options::generate_options_with_source(answer, difficulty, source),
                };
            }
            (operand1, operand2, operator)
        }
    };

    let answer: i32 = apply(operand1, operator, operand2);
    debug!("Question: {operand1} {operator} {operand2} = {answer}");
    puzzles::MathPuzzle {
        question: format!("{operand1} {operator} {operand2} = ?"),
        answer,
        options: options::generate_options_with_source(answer, difficulty, source),
    }
}
