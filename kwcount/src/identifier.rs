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

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

pub trait IdentifierChar {
    /// Returns true if `self` is an ASCII character that may appear in an
    /// identifier.
    fn ascii_is_identifier_part(self) -> bool;

    /// Returns true if `self` may appear in a Java identifier, following the
    /// rules of `Character.isJavaIdentifierPart`.
    ///
    /// This accepts letters, digits, `_`, currency symbols such as `$`,
    /// connector punctuation, letter numbers, combining and non-spacing marks,
    /// and the characters Java treats as ignorable inside identifiers: format
    /// characters and most ISO control characters other than whitespace.
    fn is_identifier_part(self) -> bool;
}

impl IdentifierChar for char {
    fn ascii_is_identifier_part(self) -> bool {
        matches!(self, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '$' | '\0'..='\u{8}' | '\u{e}'..='\u{1b}' | '\u{7f}')
    }

    fn is_identifier_part(self) -> bool {
        if self < '\u{0080}' {
            self.ascii_is_identifier_part()
        } else if self <= '\u{009f}' {
            true
        } else {
            use GeneralCategory::*;

            self.general_category_group() == GeneralCategoryGroup::Letter
                || matches!(
                    self.general_category(),
                    CurrencySymbol
                        | ConnectorPunctuation
                        | DecimalNumber
                        | LetterNumber
                        | SpacingMark
                        | NonspacingMark
                        | Format
                )
        }
    }
}
