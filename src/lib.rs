/*
lib.rs

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

//! Wakudo generates the wake-up puzzles that the alarm application asks the
//! user to solve before the alarm sound stops.
//!
//! The alarm management itself (alarm list, scheduling, sound, and screens) is
//! not part of this crate. The alarm application calls the generators from the
//! [`generator`] module and renders the returned puzzle objects.

pub mod generator;
