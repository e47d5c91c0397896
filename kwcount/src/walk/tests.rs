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

use std::{
    collections::{HashMap, HashSet},
    io::{Error as IoError, ErrorKind},
    path::{Path, PathBuf},
};

use encoding_rs::{UTF_8, UTF_16LE, WINDOWS_1252};

use super::{Error, FileSystem, SourceFile, SourceFiles, has_extension};

/// A file system held in memory.  Directories list their children in the order
/// they were added.
#[derive(Default)]
struct MemoryFileSystem {
    dirs: HashMap<PathBuf, Vec<PathBuf>>,

    /// File contents, or `None` for a file that can't be read.
    files: HashMap<PathBuf, Option<Vec<u8>>>,

    /// Directories that can't be listed.
    unlistable: HashSet<PathBuf>,
}

impl MemoryFileSystem {
    fn new(files: &[(&str, Option<&str>)]) -> Self {
        let mut fs = Self::default();
        for (path, contents) in files {
            fs.add_file(path, contents.map(|s| s.as_bytes().to_vec()));
        }
        fs
    }

    fn add_file(&mut self, path: &str, contents: Option<Vec<u8>>) {
        let path = PathBuf::from(path);
        self.add_parents(&path);
        self.files.insert(path, contents);
    }

    fn add_dir(&mut self, path: &str) {
        let path = PathBuf::from(path);
        self.add_parents(&path);
        self.dirs.entry(path).or_default();
    }

    fn add_parents(&mut self, path: &Path) {
        let mut child = path.to_path_buf();
        loop {
            let parent = match child.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => break,
            };
            let children = self.dirs.entry(parent.clone()).or_default();
            if !children.contains(&child) {
                children.push(child);
            }
            child = parent;
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains_key(path) || self.unlistable.contains(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, IoError> {
        if self.unlistable.contains(path) {
            return Err(IoError::from(ErrorKind::PermissionDenied));
        }
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| IoError::from(ErrorKind::NotFound))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, IoError> {
        match self.files.get(path) {
            Some(Some(contents)) => Ok(contents.clone()),
            Some(None) => Err(IoError::from(ErrorKind::PermissionDenied)),
            None => Err(IoError::from(ErrorKind::NotFound)),
        }
    }
}

fn paths<F>(files: SourceFiles<'_, F>) -> Vec<String>
where
    F: FileSystem,
{
    files
        .map(|file| file.unwrap().path.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn extension() {
    assert!(has_extension(Path::new("a/B.java"), ".java"));
    assert!(has_extension(Path::new(".java"), ".java"));
    assert!(!has_extension(Path::new("a/B.JAVA"), ".java"));
    assert!(!has_extension(Path::new("a/B.java.orig"), ".java"));
    assert!(!has_extension(Path::new("a/Bjava"), ".java"));
    assert!(!has_extension(Path::new("."), ".java"));
}

#[test]
fn depth_first_in_listing_order() {
    let fs = MemoryFileSystem::new(&[
        ("root/A.java", Some("class A {}")),
        ("root/b/B.java", Some("class B {}")),
        ("root/b/notes.txt", Some("not java")),
        ("root/b/c/C.java", Some("class C {}")),
        ("root/d/D.JAVA", Some("class D {}")),
        ("root/d/E.java.bak", Some("class E {}")),
        ("root/Z.java", Some("class Z {}")),
    ]);
    assert_eq!(
        paths(SourceFiles::new(&fs, "root", ".java")),
        vec![
            "root/A.java",
            "root/b/B.java",
            "root/b/c/C.java",
            "root/Z.java"
        ]
    );
    assert_eq!(
        paths(SourceFiles::new(&fs, "root", ".txt")),
        vec!["root/b/notes.txt"]
    );
}

#[test]
fn directories_are_always_descended() {
    let mut fs = MemoryFileSystem::new(&[("root/pkg.java/X.java", Some("class X {}"))]);
    fs.add_dir("root/empty");
    assert_eq!(
        paths(SourceFiles::new(&fs, "root", ".java")),
        vec!["root/pkg.java/X.java"]
    );
    assert!(paths(SourceFiles::new(&fs, "root/empty", ".java")).is_empty());
}

#[test]
fn root_is_file() {
    let fs = MemoryFileSystem::new(&[
        ("root/A.java", Some("class A {}")),
        ("root/a.txt", Some("")),
    ]);
    let files = SourceFiles::new(&fs, "root/A.java", ".java")
        .map(Result::unwrap)
        .collect::<Vec<_>>();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, Path::new("root/A.java"));
    assert_eq!(files[0].contents, "class A {}");
    assert!(!files[0].malformed);

    assert!(paths(SourceFiles::new(&fs, "root/a.txt", ".java")).is_empty());
    assert!(paths(SourceFiles::new(&fs, "missing", ".java")).is_empty());
}

#[test]
fn errors() {
    let mut fs = MemoryFileSystem::new(&[
        ("root/A.java", None),
        ("root/B.java", Some("class B {}")),
        ("root/c/C.java", Some("class C {}")),
    ]);
    fs.unlistable.insert(PathBuf::from("root/c"));

    let results = SourceFiles::new(&fs, "root", ".java").collect::<Vec<_>>();
    assert_eq!(results.len(), 3);
    match &results[0] {
        Err(Error::Read { path, source }) => {
            assert_eq!(path, Path::new("root/A.java"));
            assert_eq!(source.kind(), ErrorKind::PermissionDenied);
        }
        other => panic!("{other:?}"),
    }
    assert_eq!(results[1].as_ref().unwrap().contents, "class B {}");
    match &results[2] {
        Err(Error::ReadDir { path, .. }) => assert_eq!(path, Path::new("root/c")),
        other => panic!("{other:?}"),
    }
    assert_eq!(
        results[0].as_ref().unwrap_err().path(),
        Path::new("root/A.java")
    );
    assert!(results[2]
        .as_ref()
        .unwrap_err()
        .to_string()
        .starts_with("root/c: error reading directory"));
}

#[test]
fn decode() {
    let file = SourceFile::decode(PathBuf::from("a.java"), "int größe;".as_bytes(), None);
    assert_eq!(file.contents, "int größe;");
    assert!(!file.malformed);

    let file = SourceFile::decode(
        PathBuf::from("a.java"),
        b"int gr\xf6\xdfe;",
        Some(WINDOWS_1252),
    );
    assert_eq!(file.contents, "int größe;");
    assert_eq!(file.encoding, WINDOWS_1252);
    assert!(!file.malformed);

    let file = SourceFile::decode(PathBuf::from("a.java"), b"int \xff;", Some(UTF_8));
    assert_eq!(file.contents, "int \u{fffd};");
    assert!(file.malformed);

    let utf16 = [0xff, 0xfe, b'i', 0, b'f', 0, b';', 0];
    let file = SourceFile::decode(PathBuf::from("a.java"), &utf16, None);
    assert_eq!(file.encoding, UTF_16LE);
    assert_eq!(file.contents, "if;");
}
