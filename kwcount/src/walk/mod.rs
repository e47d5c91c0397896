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

//! Finding and reading source files.

use std::{
    fs,
    io::Error as IoError,
    path::{Path, PathBuf},
};

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use thiserror::Error as ThisError;

#[cfg(test)]
mod tests;

/// An error reading a directory or a file.
#[derive(ThisError, Debug)]
pub enum Error {
    #[error("{}: error reading directory ({source})", path.display())]
    ReadDir { path: PathBuf, source: IoError },

    #[error("{}: error reading file ({source})", path.display())]
    Read { path: PathBuf, source: IoError },
}

impl Error {
    /// Returns the directory or file that could not be read.
    pub fn path(&self) -> &Path {
        match self {
            Error::ReadDir { path, .. } | Error::Read { path, .. } => path,
        }
    }
}

/// The file system operations needed to find and read source files.
pub trait FileSystem {
    /// Returns true if `path` names a directory.  Returns false for anything
    /// else, including paths that do not exist.
    fn is_dir(&self, path: &Path) -> bool;

    /// Returns the immediate children of directory `path`.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, IoError>;

    /// Returns the full contents of file `path`.
    fn read(&self, path: &Path) -> Result<Vec<u8>, IoError>;
}

/// The operating system's file system.
#[derive(Copy, Clone, Debug, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, IoError> {
        fs::read_dir(path)?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, IoError> {
        fs::read(path)
    }
}

/// A source file and its contents, recoded into UTF-8.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub path: PathBuf,

    pub contents: String,

    /// The encoding the file was decoded from.
    pub encoding: &'static Encoding,

    /// Whether the file contained byte sequences that were not valid in
    /// `encoding`.  Each of those became U+FFFD REPLACEMENT CHARACTER in
    /// `contents`.
    pub malformed: bool,
}

impl SourceFile {
    /// Decodes `bytes`, read from `path`, into a `SourceFile`.
    ///
    /// If `encoding` is `None`, then a byte order mark, if present, determines
    /// the encoding; otherwise, the encoding is guessed from the contents.
    /// Decoding never fails.
    pub fn decode(path: PathBuf, bytes: &[u8], encoding: Option<&'static Encoding>) -> Self {
        let encoding = encoding
            .or_else(|| Encoding::for_bom(bytes).map(|(encoding, _bom_length)| encoding))
            .unwrap_or_else(|| {
                let mut encoding_detector = EncodingDetector::new();
                encoding_detector.feed(bytes, true);
                encoding_detector.guess(None, true)
            });
        let (contents, malformed) = encoding.decode_with_bom_removal(bytes);
        Self {
            path,
            contents: contents.into_owned(),
            encoding,
            malformed,
        }
    }
}

/// Returns true if the final component of `path` ends in `extension`.  The
/// comparison is case-sensitive.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(extension))
}

/// An iterator over the source files under a root.
///
/// Directories are descended into depth-first, visiting children in the order
/// that [FileSystem::read_dir] returns them.  Anything else whose name ends in
/// the extension is read and returned.  A root that is itself a file with the
/// extension yields just that file.
///
/// Directories and files are only read as the iteration reaches them.  A
/// failure to read one yields an [Error], after which iteration may continue
/// with the rest of the tree.
pub struct SourceFiles<'a, F>
where
    F: FileSystem + ?Sized,
{
    fs: &'a F,
    extension: &'a str,
    encoding: Option<&'static Encoding>,

    /// Paths still to visit, with the next one last.
    stack: Vec<PathBuf>,
}

impl<'a, F> SourceFiles<'a, F>
where
    F: FileSystem + ?Sized,
{
    pub fn new(fs: &'a F, root: impl Into<PathBuf>, extension: &'a str) -> Self {
        Self {
            fs,
            extension,
            encoding: None,
            stack: vec![root.into()],
        }
    }

    /// Returns `self` with the encoding for reading files set to `encoding`.
    /// If `encoding` is `None`, it is detected for each file.
    pub fn with_encoding(self, encoding: Option<&'static Encoding>) -> Self {
        Self { encoding, ..self }
    }
}

impl<F> Iterator for SourceFiles<'_, F>
where
    F: FileSystem + ?Sized,
{
    type Item = Result<SourceFile, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.stack.pop() {
            if self.fs.is_dir(&path) {
                match self.fs.read_dir(&path) {
                    Ok(children) => self.stack.extend(children.into_iter().rev()),
                    Err(source) => return Some(Err(Error::ReadDir { path, source })),
                }
            } else if has_extension(&path, self.extension) {
                return Some(match self.fs.read(&path) {
                    Ok(bytes) => Ok(SourceFile::decode(path, &bytes, self.encoding)),
                    Err(source) => Err(Error::Read { path, source }),
                });
            }
        }
        None
    }
}
