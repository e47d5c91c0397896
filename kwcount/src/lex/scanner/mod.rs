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

//! Keyword scanning.
//!
//! The scanner makes a single pass over a file's text with a four-state
//! machine.  In [Mode::Code] it collects each maximal run of identifier
//! characters (see [IdentifierChar]) and, at the first character that ends
//! the run, checks the run against a [KeywordSet].  The other modes skip
//! comments and string literals without looking at their contents:
//!
//! | Mode                    | Input     | Result                                  |
//! |-------------------------|-----------|-----------------------------------------|
//! | [Mode::Code]            | `/*`      | check word, enter [Mode::BlockComment]  |
//! | [Mode::Code]            | `//`      | check word, enter [Mode::LineComment]   |
//! | [Mode::Code]            | `"`       | check word, enter [Mode::StringLiteral] |
//! | [Mode::Code]            | ident     | extend word                             |
//! | [Mode::Code]            | other     | check word                              |
//! | [Mode::LineComment]     | `\n` `\r` | enter [Mode::Code], without consuming   |
//! | [Mode::BlockComment]    | `*/`      | enter [Mode::Code]                      |
//! | [Mode::StringLiteral]   | `"`       | enter [Mode::Code]                      |
//!
//! A string literal ends at the next `"` even if it is preceded by a
//! backslash, so `"a\"b"` is mis-scanned.  Character literals are not
//! recognized at all, so `'"'` opens a string literal.  Both are known
//! limitations.
//!
//! Unterminated comments and strings simply run to the end of the text.  What
//! happens to a word that runs to the end of the text depends on
//! [EndOfInput].

use crate::{count::Counts, identifier::IdentifierChar, keyword::KeywordSet};


/// Lexer mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Code, where words are collected and checked.
    #[default]
    Code,

    /// After `//`, up to the end of the line.
    LineComment,

    /// Between `/*` and `*/`.
    BlockComment,

    /// Between a pair of `"`.
    StringLiteral,
}

/// What to do with a word that runs to the very end of the input, with no
/// character after it to end it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EndOfInput {
    /// Drop the word without checking it.  A keyword that is the last thing
    /// in a file, with not even a new-line after it, is not counted.
    #[default]
    Discard,

    /// Check the word like any other.
    Flush,
}

/// Per-file state.
struct State<'a> {
    keywords: &'a KeywordSet,
    mode: Mode,

    /// The identifier characters collected so far.  Only nonempty in
    /// [Mode::Code].
    word: String,
}

impl<'a> State<'a> {
    fn new(keywords: &'a KeywordSet) -> Self {
        Self {
            keywords,
            mode: Mode::Code,
            word: String::new(),
        }
    }

    /// Checks the collected word against the keyword set, counting it if it
    /// is one, and then clears it.
    fn flush(&mut self, counts: &mut Counts) {
        if !self.word.is_empty() {
            if let Some(keyword) = self.keywords.get(&self.word) {
                counts.increment(keyword);
            }
            self.word.clear();
        }
    }

    /// Consumes a prefix of `input` and returns the rest, or `None` if
    /// `input` is empty.
    fn push<'b>(&mut self, input: &'b str, counts: &mut Counts) -> Option<&'b str> {
        if input.is_empty() {
            return None;
        }
        Some(match self.mode {
            Mode::Code => self.parse_code(input, counts),
            Mode::LineComment => self.parse_line_comment(input),
            Mode::BlockComment => self.parse_block_comment(input),
            Mode::StringLiteral => self.parse_string_literal(input),
        })
    }

    fn parse_code<'b>(&mut self, input: &'b str, counts: &mut Counts) -> &'b str {
        if let Some(rest) = input.strip_prefix("/*") {
            self.flush(counts);
            self.mode = Mode::BlockComment;
            return rest;
        }
        if let Some(rest) = input.strip_prefix("//") {
            self.flush(counts);
            self.mode = Mode::LineComment;
            return rest;
        }
        if let Some(rest) = input.strip_prefix('"') {
            self.flush(counts);
            self.mode = Mode::StringLiteral;
            return rest;
        }

        let end = input
            .find(|c: char| !c.is_identifier_part())
            .unwrap_or(input.len());
        if end > 0 {
            self.word.push_str(&input[..end]);
            &input[end..]
        } else {
            // `input` is nonempty and doesn't start with an identifier
            // character.
            self.flush(counts);
            let mut iter = input.chars();
            iter.next();
            iter.as_str()
        }
    }

    fn parse_line_comment<'b>(&mut self, input: &'b str) -> &'b str {
        match input.find(['\n', '\r']) {
            Some(index) => {
                self.mode = Mode::Code;
                &input[index..]
            }
            None => "",
        }
    }

    fn parse_block_comment<'b>(&mut self, input: &'b str) -> &'b str {
        match input.find("*/") {
            Some(index) => {
                self.mode = Mode::Code;
                &input[index + 2..]
            }
            None => "",
        }
    }

    fn parse_string_literal<'b>(&mut self, input: &'b str) -> &'b str {
        match input.find('"') {
            Some(index) => {
                self.mode = Mode::Code;
                &input[index + 1..]
            }
            None => "",
        }
    }

    fn finish(mut self, end_of_input: EndOfInput, counts: &mut Counts) {
        match end_of_input {
            EndOfInput::Discard => (),
            EndOfInput::Flush => self.flush(counts),
        }
    }
}

/// Counts keywords in source text.
#[derive(Copy, Clone, Debug)]
pub struct Scanner<'a> {
    keywords: &'a KeywordSet,
    end_of_input: EndOfInput,
}

impl<'a> Scanner<'a> {
    /// Returns a scanner that counts the words in `keywords`.
    pub fn new(keywords: &'a KeywordSet) -> Self {
        Self {
            keywords,
            end_of_input: EndOfInput::default(),
        }
    }

    pub fn with_end_of_input(self, end_of_input: EndOfInput) -> Self {
        Self {
            end_of_input,
            ..self
        }
    }

    /// Adds to `counts` one occurrence for each keyword that appears in the
    /// code in `content`, outside comments and string literals.
    ///
    /// `content` is scanned as a whole file: scanning always starts in
    /// [Mode::Code], and nothing carries over from one call to the next
    /// except what is added to `counts`.
    pub fn scan(&self, content: &str, counts: &mut Counts) {
        let mut state = State::new(self.keywords);
        let mut input = content;
        while let Some(rest) = state.push(input, counts) {
            input = rest;
        }
        state.finish(self.end_of_input, counts);
    }
}

/// Adds to `counts` one occurrence for each word in `keywords` that appears in
/// the code in `content`, outside comments and string literals.
///
/// This is [Scanner::scan] with the default [EndOfInput::Discard] behavior.
pub fn scan(content: &str, keywords: &KeywordSet, counts: &mut Counts) {
    Scanner::new(keywords).scan(content, counts)
}
