/*
options.rs

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

//! Build the multiple-choice options proposed with a puzzle.
//!
//! The options are the correct answer plus wrong values close to it, so that
//! the wrong values stay plausible. The list is shuffled before it is
//! returned.

use log::debug;

use super::puzzles;
use super::random;

// Max sampling attempts before the perturbation range is widened. The ranges
// used by the difficulty levels leave far more candidate values than option
// slots, so widening never happens with them.
const MAX_ATTEMPTS: usize = 1000;

/// Return the multiple-choice options for the given answer: the answer itself
/// plus 2 (easy) or 3 (medium, hard) distinct wrong values close to it, in
/// random order.
pub fn generate_options(answer: i32, difficulty: puzzles::Difficulty) -> Vec<i32> {
    generate_options_with_source(answer, difficulty, &mut random::ThreadSource)
}

/// Same as [`generate_options`], with an explicit number source.
pub fn generate_options_with_source(
    answer: i32,
    difficulty: puzzles::Difficulty,
    source: &mut impl random::NumberSource,
) -> Vec<i32> {
    let count: usize = match difficulty {
        puzzles::Difficulty::Easy => 3,
        puzzles::Difficulty::Medium | puzzles::Difficulty::Hard => 4,
    };
    let range: i32 = match difficulty {
        puzzles::Difficulty::Easy => 5,
        puzzles::Difficulty::Medium => 10,
        puzzles::Difficulty::Hard => 20,
    };
    perturbed_options(answer, count, range, source)
}

/// Collect `count` distinct values around `anchor`: the anchor itself plus
/// values sampled from `[anchor - range, anchor + range]`, shuffled.
///
/// If the attempt budget runs out (the range is too small for the requested
/// count), the range is widened and sampling resumes.
pub(crate) fn perturbed_options(
    anchor: i32,
    count: usize,
    range: i32,
    source: &mut impl random::NumberSource,
) -> Vec<i32> {
    let mut options: Vec<i32> = Vec::with_capacity(count);
    options.push(anchor);

    let mut range: i32 = range;
    let mut attempts: usize = 0;
    while options.len() < count {
        if attempts >= MAX_ATTEMPTS {
            range = range.max(1) * 2;
            attempts = 0;
            debug!("Widening the perturbation range to {range}");
        }
        attempts += 1;

        let option: i32 = anchor + source.next_int(-range, range);
        if option != anchor && !options.contains(&option) {
            options.push(option);
        }
    }
    random::shuffle(&options, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random::ThreadSource;

    fn assert_distinct(options: &[i32]) {
        let mut sorted: Vec<i32> = options.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), options.len());
    }

    #[test]
    fn easy_options_hold_the_answer_and_two_close_values() {
        let mut source = ThreadSource;
        for _ in 0..100 {
            let options: Vec<i32> =
                generate_options_with_source(7, puzzles::Difficulty::Easy, &mut source);

            assert_eq!(options.len(), 3);
            assert_distinct(&options);
            assert_eq!(options.iter().filter(|&&o| o == 7).count(), 1);
            for option in &options {
                assert!((2..=12).contains(option));
            }
        }
    }

    #[test]
    fn medium_and_hard_options_hold_four_values() {
        let mut source = ThreadSource;
        for (difficulty, range) in [
            (puzzles::Difficulty::Medium, 10),
            (puzzles::Difficulty::Hard, 20),
        ] {
            for _ in 0..100 {
                let options: Vec<i32> = generate_options_with_source(50, difficulty, &mut source);

                assert_eq!(options.len(), 4);
                assert_distinct(&options);
                assert_eq!(options.iter().filter(|&&o| o == 50).count(), 1);
                for option in &options {
                    assert!((option - 50).abs() <= range);
                }
            }
        }
    }

    #[test]
    fn answer_position_varies() {
        let mut source = ThreadSource;
        let mut positions: Vec<usize> = Vec::new();
        for _ in 0..100 {
            let options: Vec<i32> =
                generate_options_with_source(7, puzzles::Difficulty::Easy, &mut source);
            positions.push(
                options
                    .iter()
                    .position(|&o| o == 7)
                    .expect("the answer must be in the options"),
            );
        }
        positions.sort_unstable();
        positions.dedup();
        assert!(positions.len() > 1);
    }

    #[test]
    fn exhausted_range_is_widened() {
        // A source stuck on the lower bound produces one new value per range
        // and then duplicates, so the loop must widen the range to finish.
        struct LowerBoundSource;
        impl random::NumberSource for LowerBoundSource {
            fn next_int(&mut self, min: i32, _max: i32) -> i32 {
                min
            }
        }

        let options: Vec<i32> = perturbed_options(0, 3, 1, &mut LowerBoundSource);

        assert_eq!(options.len(), 3);
        assert_distinct(&options);
        assert!(options.contains(&0));
    }
}
