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

//! Counting keywords across a whole tree of source files.

use std::path::Path;

use encoding_rs::Encoding;
use log::{debug, info, warn};

use crate::{
    count::Counts,
    keyword::{JAVA_EXTENSION, KeywordSet},
    lex::scanner::{EndOfInput, Scanner},
    walk::{Error, FileSystem, SourceFiles},
};

/// What to do when a directory or file can't be read.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first error and return it.
    #[default]
    Abort,

    /// Pass the error to the warning callback and go on with the rest of the
    /// tree.
    Skip,
}

/// The result of [Tally::run].
#[derive(Clone, Debug, Default)]
pub struct Summary {
    /// Keyword counts over all the files scanned.
    pub counts: Counts,

    /// Number of files scanned.
    pub files: usize,

    /// Number of directories and files skipped because of errors, under
    /// [ErrorPolicy::Skip].
    pub skipped: usize,
}

/// Options for counting keywords in a tree of source files.
pub struct Tally<'a, W> {
    keywords: &'a KeywordSet,
    extension: &'a str,
    encoding: Option<&'static Encoding>,
    end_of_input: EndOfInput,
    error_policy: ErrorPolicy,
    warn: W,
}

impl<'a, W> Tally<'a, W>
where
    W: FnMut(Error),
{
    /// Returns options for counting `keywords` in Java source files.  Errors
    /// skipped under [ErrorPolicy::Skip] are passed to `warn`.
    pub fn new(keywords: &'a KeywordSet, warn: W) -> Self {
        Self {
            keywords,
            extension: JAVA_EXTENSION,
            encoding: None,
            end_of_input: EndOfInput::default(),
            error_policy: ErrorPolicy::default(),
            warn,
        }
    }

    /// Returns `self` set to scan files whose names end in `extension`.
    pub fn with_extension(self, extension: &'a str) -> Self {
        Self { extension, ..self }
    }

    /// Returns `self` with the encoding for reading files set to `encoding`.
    /// If `encoding` is `None`, it is detected for each file.
    pub fn with_encoding(self, encoding: Option<&'static Encoding>) -> Self {
        Self { encoding, ..self }
    }

    pub fn with_end_of_input(self, end_of_input: EndOfInput) -> Self {
        Self {
            end_of_input,
            ..self
        }
    }

    pub fn with_error_policy(self, error_policy: ErrorPolicy) -> Self {
        Self {
            error_policy,
            ..self
        }
    }

    /// Scans each source file under `root` in `fs`, one at a time, and
    /// returns the combined counts.
    pub fn run<F>(&mut self, fs: &F, root: &Path) -> Result<Summary, Error>
    where
        F: FileSystem + ?Sized,
    {
        let scanner = Scanner::new(self.keywords).with_end_of_input(self.end_of_input);
        let mut summary = Summary::default();
        for file in SourceFiles::new(fs, root, self.extension).with_encoding(self.encoding) {
            let file = match file {
                Ok(file) => file,
                Err(error) => match self.error_policy {
                    ErrorPolicy::Abort => return Err(error),
                    ErrorPolicy::Skip => {
                        summary.skipped += 1;
                        (self.warn)(error);
                        continue;
                    }
                },
            };
            if file.malformed {
                warn!(
                    "{}: invalid {} text replaced by U+FFFD",
                    file.path.display(),
                    file.encoding.name()
                );
            }

            let mut counts = Counts::new();
            scanner.scan(&file.contents, &mut counts);
            debug!(
                "{}: {} keywords ({})",
                file.path.display(),
                counts.total(),
                file.encoding.name()
            );
            summary.counts.merge(counts);
            summary.files += 1;
        }
        info!(
            "{}: {} keywords in {} files",
            root.display(),
            summary.counts.total(),
            summary.files
        );
        Ok(summary)
    }
}
