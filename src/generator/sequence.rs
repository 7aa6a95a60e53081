/*
sequence.rs

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

//! Generate number sequence puzzles.
//!
//! A sequence puzzle is five numbers that follow a pattern. One of the middle
//! numbers is hidden, and the user must pick it among proposed values. The
//! pattern family depends on the difficulty level:
//!
//! * Easy: arithmetic progression, such as `2, 5, 8, 11, 14`.
//! * Medium: Fibonacci-like sums, or steps that alternate between two sizes.
//! * Hard: close to a quadratic progression.

use log::debug;

use super::options;
use super::puzzles;
use super::random;

/// Number of elements in every generated sequence.
const SEQUENCE_LENGTH: usize = 5;

/// Build a random sequence puzzle scaled by the difficulty level.
pub fn generate_sequence_puzzle(difficulty: puzzles::Difficulty) -> puzzles::SequencePuzzle {
    generate_sequence_puzzle_with_source(difficulty, &mut random::ThreadSource)
}

/// Same as [`generate_sequence_puzzle`], with an explicit number source.
pub fn generate_sequence_puzzle_with_source(
    difficulty: puzzles::Difficulty,
    source: &mut impl random::NumberSource,
) -> puzzles::SequencePuzzle {
    let sequence: Vec<i32> = build_sequence(difficulty, source);

    // Hide one of the middle numbers. The first and last numbers stay
    // visible, otherwise the pattern is too hard to recognize.
    let missing_index: usize = source.next_int(1, 3) as usize;
    let range: i32 = match difficulty {
        puzzles::Difficulty::Easy => 3,
        puzzles::Difficulty::Medium => 5,
        puzzles::Difficulty::Hard => 10,
    };
    let options: Vec<i32> = options::perturbed_options(sequence[missing_index], 4, range, source);

    debug!("Sequence {sequence:?}, hiding index {missing_index}");
    puzzles::SequencePuzzle {
        sequence,
        missing_index,
        options,
    }
}

/// Build the five numbers of the sequence for the difficulty level.
fn build_sequence(
    difficulty: puzzles::Difficulty,
    source: &mut impl random::NumberSource,
) -> Vec<i32> {
    match difficulty {
        // Arithmetic progression
        puzzles::Difficulty::Easy => {
            let start: i32 = source.next_int(1, 5);
            let step: i32 = source.next_int(1, 3);
            (0..SEQUENCE_LENGTH as i32).map(|i| start + i * step).collect()
        }

        puzzles::Difficulty::Medium => {
            if source.next_int(0, 1) == 0 {
                // Fibonacci-like: every number is the sum of the previous two
                let mut sequence: Vec<i32> =
                    vec![source.next_int(1, 3), source.next_int(2, 5)];
                for i in 2..SEQUENCE_LENGTH {
                    sequence.push(sequence[i - 1] + sequence[i - 2]);
                }
                sequence
            } else {
                // Steps alternating between a small and a large size
                let start: i32 = source.next_int(1, 10);
                let step1: i32 = source.next_int(1, 3);
                let step2: i32 = source.next_int(4, 6);
                let mut sequence: Vec<i32> = vec![start];
                for i in 1..SEQUENCE_LENGTH {
                    sequence.push(sequence[i - 1] + if i % 2 == 0 { step1 } else { step2 });
                }
                sequence
            }
        }

        // Close to a quadratic progression. The two additive terms are drawn
        // again for every index, so the result is usually not an exact
        // quadratic.
        puzzles::Difficulty::Hard => {
            let a: i32 = source.next_int(1, 2);
            (0..SEQUENCE_LENGTH as i32)
                .map(|i| a * i * i + source.next_int(1, 3) * i + source.next_int(0, 2))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random::ThreadSource;
    use crate::generator::random::testing::ScriptedSource;

    #[test]
    fn forced_easy_progression() {
        // start, step, missing index
        let mut source = ScriptedSource::new(&[2, 3, 2]);

        let puzzle: puzzles::SequencePuzzle =
            generate_sequence_puzzle_with_source(puzzles::Difficulty::Easy, &mut source);

        assert_eq!(puzzle.sequence, vec![2, 5, 8, 11, 14]);
        assert_eq!(puzzle.missing_index, 2);
        assert_eq!(puzzle.hidden_value(), 8);
        assert!(puzzle.options.contains(&8));
    }

    #[test]
    fn forced_medium_fibonacci_like() {
        // branch coin, first seed, second seed, missing index
        let mut source = ScriptedSource::new(&[0, 1, 2, 3]);

        let puzzle: puzzles::SequencePuzzle =
            generate_sequence_puzzle_with_source(puzzles::Difficulty::Medium, &mut source);

        assert_eq!(puzzle.sequence, vec![1, 2, 3, 5, 8]);
        assert_eq!(puzzle.missing_index, 3);
        assert_eq!(puzzle.hidden_value(), 5);
    }

    #[test]
    fn forced_medium_alternating_steps() {
        // branch coin, start, small step, large step, missing index
        let mut source = ScriptedSource::new(&[1, 5, 2, 4, 1]);

        let puzzle: puzzles::SequencePuzzle =
            generate_sequence_puzzle_with_source(puzzles::Difficulty::Medium, &mut source);

        // The large step applies to the odd indices.
        assert_eq!(puzzle.sequence, vec![5, 9, 11, 15, 17]);
        assert_eq!(puzzle.missing_index, 1);
        assert_eq!(puzzle.hidden_value(), 9);
    }

    #[test]
    fn hard_sequence_stays_in_the_quadratic_envelope() {
        let mut source = ThreadSource;
        for _ in 0..100 {
            let puzzle: puzzles::SequencePuzzle =
                generate_sequence_puzzle_with_source(puzzles::Difficulty::Hard, &mut source);

            assert_eq!(puzzle.sequence.len(), 5);
            for (i, value) in puzzle.sequence.iter().enumerate() {
                let i: i32 = i as i32;
                // a in [1, 2], linear term in [1, 3] * i, constant in [0, 2]
                assert!(*value >= i * i + i);
                assert!(*value <= 2 * i * i + 3 * i + 2);
            }
        }
    }

    #[test]
    fn hidden_index_and_options_are_valid_for_all_levels() {
        let mut source = ThreadSource;
        for difficulty in [
            puzzles::Difficulty::Easy,
            puzzles::Difficulty::Medium,
            puzzles::Difficulty::Hard,
        ] {
            for _ in 0..100 {
                let puzzle: puzzles::SequencePuzzle =
                    generate_sequence_puzzle_with_source(difficulty, &mut source);

                assert_eq!(puzzle.sequence.len(), 5);
                assert!((1..=3).contains(&puzzle.missing_index));
                assert_eq!(puzzle.options.len(), 4);
                let mut sorted: Vec<i32> = puzzle.options.clone();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted.len(), 4);
                assert_eq!(
                    puzzle
                        .options
                        .iter()
                        .filter(|&&o| o == puzzle.hidden_value())
                        .count(),
                    1
                );
            }
        }
    }

    #[test]
    fn sequences_vary_between_calls() {
        let mut source = ThreadSource;
        let mut seen: Vec<Vec<i32>> = Vec::new();
        for _ in 0..100 {
            let puzzle: puzzles::SequencePuzzle =
                generate_sequence_puzzle_with_source(puzzles::Difficulty::Medium, &mut source);
            seen.push(puzzle.sequence);
        }
        seen.sort_unstable();
        seen.dedup();
        assert!(seen.len() > 1);
    }
}
