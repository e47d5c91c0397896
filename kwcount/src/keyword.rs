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

//! Reserved word sets.

use std::{collections::HashSet, sync::LazyLock};

/// File name suffix of Java source files.
pub const JAVA_EXTENSION: &str = ".java";

/// Java's reserved words, including the unused `const` and `goto` and the
/// boolean literals.
pub static JAVA_KEYWORDS: [&str; 52] = [
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

static JAVA: LazyLock<KeywordSet> = LazyLock::new(|| KeywordSet::new(JAVA_KEYWORDS));

/// An immutable set of reserved words.
///
/// Lookups are exact and case-sensitive: `Return` and `RETURN` are not the
/// keyword `return`.
#[derive(Clone, Debug, Default)]
pub struct KeywordSet(HashSet<&'static str>);

impl KeywordSet {
    /// Returns a set containing each of `words`.
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        Self(words.into_iter().collect())
    }

    /// Returns the set of Java reserved words.
    pub fn java() -> &'static Self {
        &JAVA
    }

    /// If `word` is in the set, returns the set's own copy of it, which lives
    /// as long as the program.
    pub fn get(&self, word: &str) -> Option<&'static str> {
        self.0.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }
}
