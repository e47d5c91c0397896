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

#![no_main]

use kwcount::{
    count::Counts,
    keyword::KeywordSet,
    lex::scanner::{EndOfInput, Scanner},
    walk::SourceFile,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let file = SourceFile::decode("fuzz.java".into(), data, None);
    for end_of_input in [EndOfInput::Discard, EndOfInput::Flush] {
        let mut counts = Counts::new();
        Scanner::new(KeywordSet::java())
            .with_end_of_input(end_of_input)
            .scan(&file.contents, &mut counts);
    }
});
