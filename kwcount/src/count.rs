// kwcount - counts reserved words in Java source trees.
// Copyright (C) 2025 Free Software Foundation, Inc.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <http://www.gnu.org/licenses/>.

//! Keyword occurrence counts.

use std::{cmp::Reverse, collections::HashMap};

use serde::Serialize;

/// Running occurrence counts, keyed by keyword.
///
/// Counts only ever go up.  Scanning more text into the same `Counts` adds to
/// what is already there, and [Counts::merge] folds one accumulator into
/// another, so per-file counts can be combined into a total for a whole run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counts(HashMap<&'static str, u64>);

/// One row of [Counts::ranked].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Ranked {
    pub keyword: &'static str,
    pub count: u64,
}

impl Counts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `keyword`.
    pub fn increment(&mut self, keyword: &'static str) {
        *self.0.entry(keyword).or_default() += 1;
    }

    /// Returns the number of occurrences of `keyword`, which is 0 if it was
    /// never seen.
    pub fn get(&self, keyword: &str) -> u64 {
        self.0.get(keyword).copied().unwrap_or(0)
    }

    /// Returns the number of distinct keywords seen.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of occurrences of all keywords together.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Adds all of the counts in `other` into `self`.
    pub fn merge(&mut self, other: Counts) {
        for (keyword, count) in other.0 {
            *self.0.entry(keyword).or_default() += count;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.0.iter().map(|(keyword, count)| (*keyword, *count))
    }

    /// Returns every keyword seen at least once with its count, most frequent
    /// first.  Keywords with equal counts are in alphabetical order.
    pub fn ranked(&self) -> Vec<Ranked> {
        let mut ranked = self
            .iter()
            .filter(|(_keyword, count)| *count > 0)
            .map(|(keyword, count)| Ranked { keyword, count })
            .collect::<Vec<_>>();
        ranked.sort_unstable_by_key(|entry| (Reverse(entry.count), entry.keyword));
        ranked
    }
}
