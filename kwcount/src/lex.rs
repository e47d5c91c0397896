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

//! Lexical analysis for keyword counting.
//!
//! This is deliberately much less than a real tokenizer for the language being
//! scanned.  The [scanner] only needs to tell code apart from comments and
//! string literals, and to cut code into maximal runs of identifier
//! characters, so that each run can be compared against a keyword set.

pub mod scanner;
