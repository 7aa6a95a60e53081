/*
random.rs

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

//! Random number utilities shared by the puzzle generators.

use rand::Rng;

/// Source of random integers for the generators.
///
/// The generators take their numbers from a [`NumberSource`] instead of
/// calling the global generator directly, so that tests can inject a scripted
/// source and force specific puzzles.
pub trait NumberSource {
    /// Return an integer uniformly sampled from the closed interval
    /// `[min, max]`.
    ///
    /// Callers must ensure that `min <= max`.
    fn next_int(&mut self, min: i32, max: i32) -> i32;
}

/// Default number source, backed by the thread-local generator of the `rand`
/// crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSource;

impl NumberSource for ThreadSource {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        rand::rng().random_range(min..=max)
    }
}

/// Return a new vector with the elements of `values` in random order.
///
/// The function implements the Fisher-Yates algorithm with the given number
/// source. The input slice is not modified.
pub fn shuffle<T: Clone>(values: &[T], source: &mut impl NumberSource) -> Vec<T> {
    let mut shuffled: Vec<T> = values.to_vec();
    let mut i: usize = shuffled.len();
    while i > 1 {
        i -= 1;
        let j: usize = source.next_int(0, i as i32) as usize;
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{NumberSource, ThreadSource};
    use std::collections::VecDeque;

    /// Source that replays scripted values, and then falls back to the
    /// thread-local generator once the script is exhausted.
    pub(crate) struct ScriptedSource {
        values: VecDeque<i32>,
        fallback: ThreadSource,
    }

    impl ScriptedSource {
        pub(crate) fn new(values: &[i32]) -> Self {
            Self {
                values: values.iter().copied().collect(),
                fallback: ThreadSource,
            }
        }
    }

    impl NumberSource for ScriptedSource {
        fn next_int(&mut self, min: i32, max: i32) -> i32 {
            match self.values.pop_front() {
                Some(v) => v.clamp(min, max),
                None => self.fallback.next_int(min, max),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedSource;
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn next_int_stays_in_the_closed_interval() {
        let mut source = ThreadSource;
        for _ in 0..1000 {
            let v: i32 = source.next_int(-5, 5);
            assert!((-5..=5).contains(&v));
        }
        assert_eq!(source.next_int(3, 3), 3);
    }

    #[test]
    fn shuffle_keeps_the_elements_and_the_input() {
        let values: Vec<i32> = (0..10).collect();
        let mut source = ThreadSource;

        let shuffled: Vec<i32> = shuffle(&values, &mut source);

        let mut sorted: Vec<i32> = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, values);
        assert_eq!(values, (0..10).collect::<Vec<i32>>());
    }

    #[test]
    fn shuffle_follows_the_number_source() {
        // Two swap positions are drawn for a three-element slice: j in [0, 2]
        // and then j in [0, 1].
        let mut source = ScriptedSource::new(&[0, 1]);

        let shuffled: Vec<i32> = shuffle(&[10, 20, 30], &mut source);

        assert_eq!(shuffled, vec![30, 20, 10]);
    }

    #[test]
    fn shuffle_produces_varied_orders() {
        let values: Vec<i32> = (0..10).collect();
        let mut source = ThreadSource;
        let mut seen: HashSet<Vec<i32>> = HashSet::new();

        for _ in 0..100 {
            seen.insert(shuffle(&values, &mut source));
        }

        assert!(seen.len() > 1);
    }
}
