/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command-line tool is intended for developers tuning the puzzle
//! generators. It generates puzzles, re-verifies them, and prints them as text
//! or JSON.
//!
//! # Examples
//!
//! List the puzzle kinds and difficulty levels:
//!
//! ```
//! $ wakudo --ls
//! Math easy
//! Math medium
//! ...
//! ```
//!
//! Generate two sequence puzzles at the hard difficulty level:
//!
//! ```
//! $ wakudo -k sequence -f hard -c 2
//! Sequence: 2, 7, _, 21, 34
//! Hidden:   13 (index 2)
//! Options:  [4, 13, 17, 10]
//!
//! Sequence: 0, 5, 10, _, 24
//! Hidden:   17 (index 3)
//! Options:  [17, 26, 11, 22]
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::time::Instant;

use crate::config::COPYRIGHT_NOTICE;
use wakudo::generator::puzzles;

/// Generate random wake-up puzzles for developers.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the puzzle kinds and difficulty levels
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Kind of puzzle to generate
    #[arg(value_enum, ignore_case = true, short, long, default_value_t = puzzles::PuzzleKind::Math)]
    kind: puzzles::PuzzleKind,

    /// Difficulty level for the puzzle
    #[arg(value_enum, ignore_case = true, short = 'f', long, default_value_t = puzzles::Difficulty::Medium)]
    difficulty: puzzles::Difficulty,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the puzzles in JSON instead of text
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        println!("DEBUG");
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the puzzle kinds and difficulty levels
    //
    if args.ls {
        for kind in [
            puzzles::PuzzleKind::Math,
            puzzles::PuzzleKind::Memory,
            puzzles::PuzzleKind::Sequence,
        ] {
            for difficulty in [
                puzzles::Difficulty::Easy,
                puzzles::Difficulty::Medium,
                puzzles::Difficulty::Hard,
            ] {
                match difficulty {
                    puzzles::Difficulty::Easy => println!("{kind} easy"),
                    puzzles::Difficulty::Medium => println!("{kind} medium"),
                    puzzles::Difficulty::Hard => println!("{kind} hard"),
                }
            }
        }
        return 0;
    }

    //
    // Generate, verify, and print the puzzles
    //
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut i: usize = 0;
    while i < args.count {
        debug!("Iteration {i}");

        let start: Instant = Instant::now();
        let puzzle: puzzles::Puzzle = puzzles::generate_puzzle(args.kind, args.difficulty);
        let duration: f32 = start.elapsed().as_secs_f32();
        total += duration;
        if duration > max {
            max = duration;
        }

        verify(&puzzle, args.difficulty);

        if args.json {
            match serde_json::to_string_pretty(&puzzle) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Cannot serialize the puzzle: {e}");
                    return 1;
                }
            }
        } else {
            print_puzzle(&puzzle);
        }
        if i + 1 < args.count {
            println!();
        }
        i += 1;
    }

    // Print some stats
    if args.summary {
        println!(
            "
  total time = {}s
average time = {}s
    max time = {}s",
            total,
            total / args.count as f32,
            max
        );
    }
    0
}

/// Print the puzzle as text.
fn print_puzzle(puzzle: &puzzles::Puzzle) {
    match puzzle {
        puzzles::Puzzle::Math(math) => {
            println!("Question: {}", math.question);
            println!("Answer:   {}", math.answer);
            println!("Options:  {:?}", math.options);
        }
        puzzles::Puzzle::Memory(memory) => {
            println!("Grid:     {} x {}", memory.grid_size, memory.grid_size);
            println!("Sequence: {:?}", memory.sequence);
        }
        puzzles::Puzzle::Sequence(sequence) => {
            let display: Vec<String> = sequence
                .sequence
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    if i == sequence.missing_index {
                        String::from("_")
                    } else {
                        v.to_string()
                    }
                })
                .collect();
            println!("Sequence: {}", display.join(", "));
            println!(
                "Hidden:   {} (index {})",
                sequence.hidden_value(),
                sequence.missing_index
            );
            println!("Options:  {:?}", sequence.options);
        }
    }
}

/// Re-verify a generated puzzle and panic if the generator broke one of its
/// guarantees.
fn verify(puzzle: &puzzles::Puzzle, difficulty: puzzles::Difficulty) {
    match puzzle {
        puzzles::Puzzle::Math(math) => {
            let count: usize = match difficulty {
                puzzles::Difficulty::Easy => 3,
                puzzles::Difficulty::Medium | puzzles::Difficulty::Hard => 4,
            };
            if math.options.len() != count {
                eprintln!(
                    "Wrong option count: {} instead of {}: {:?}",
                    math.options.len(),
                    count,
                    math.options
                );
                panic!("Bug: wrong option count for the generated puzzle");
            }
            verify_options(&math.options, math.answer);
        }
        puzzles::Puzzle::Memory(memory) => {
            if memory.sequence.len() != memory.grid_size {
                eprintln!(
                    "Wrong length: {} instead of {}: {:?}",
                    memory.sequence.len(),
                    memory.grid_size,
                    memory.sequence
                );
                panic!("Bug: wrong length for the generated sequence");
            }

            // Verify that there are no duplicated cells
            let mut cells: Vec<usize> = memory.sequence.clone();
            cells.sort_unstable();
            cells.dedup();
            if cells.len() != memory.sequence.len() {
                eprintln!("Duplicated cells in sequence: {:?}", memory.sequence);
                panic!("Bug: duplicated cells in generated sequence");
            }

            let total_cells: usize = memory.grid_size * memory.grid_size;
            if memory.sequence.iter().any(|cell| *cell >= total_cells) {
                eprintln!("Cell out of the grid: {:?}", memory.sequence);
                panic!("Bug: cell out of the grid in generated sequence");
            }
        }
        puzzles::Puzzle::Sequence(sequence) => {
            if sequence.sequence.len() != 5 {
                eprintln!("Wrong sequence length: {:?}", sequence.sequence);
                panic!("Bug: wrong length for the generated sequence");
            }
            if !(1..=3).contains(&sequence.missing_index) {
                eprintln!("Hidden index out of range: {}", sequence.missing_index);
                panic!("Bug: hidden index out of range");
            }
            if sequence.options.len() != 4 {
                eprintln!("Wrong option count: {:?}", sequence.options);
                panic!("Bug: wrong option count for the generated puzzle");
            }
            verify_options(&sequence.options, sequence.hidden_value());
        }
    }
}

/// Verify that the options are distinct and contain the answer.
fn verify_options(options: &[i32], answer: i32) {
    let mut sorted: Vec<i32> = options.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() != options.len() {
        eprintln!("Duplicated values in options: {options:?}");
        panic!("Bug: duplicated values in generated options");
    }
    if !options.contains(&answer) {
        eprintln!("Answer {answer} missing from options: {options:?}");
        panic!("Bug: answer missing from generated options");
    }
}
