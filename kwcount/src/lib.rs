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

//! Counting reserved words in source trees.
//!
//! The work is split into a few small pieces:
//!
//! - [walk] finds source files under a root and decodes them to text.
//!
//! - [lex::scanner] runs a small lexical state machine over each file's text,
//!   skipping comments and string literals, and counts the words in
//!   [keyword::KeywordSet] that appear in code.
//!
//! - [count::Counts] accumulates those counts across files and ranks them.
//!
//! - [tally::Tally] ties the three together for a whole run.

pub mod count;
pub mod identifier;
pub mod keyword;
pub mod lex;
pub mod prompt;
pub mod report;
pub mod tally;
pub mod walk;
