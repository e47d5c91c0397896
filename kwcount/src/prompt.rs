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
    io::{BufRead, Result as IoResult, Write},
    path::{Path, PathBuf},
};

/// Asks the user on `output` for a path to scan, mentioning `cwd` as the
/// default, and reads one line from `input`.  Returns `.` if the line is empty
/// or if `input` is at end of file.
pub fn prompt_for_path<R, W>(mut input: R, mut output: W, cwd: &Path) -> IoResult<PathBuf>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Enter a path ({}):", cwd.display())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line
        .strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .unwrap_or(&line);
    Ok(PathBuf::from(if line.is_empty() { "." } else { line }))
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::prompt_for_path;

    fn prompt(input: &str) -> (PathBuf, String) {
        let mut output = Vec::new();
        let path = prompt_for_path(input.as_bytes(), &mut output, Path::new("/home/user")).unwrap();
        (path, String::from_utf8(output).unwrap())
    }

    #[test]
    fn prompt_text() {
        assert_eq!(prompt("src\n").1, "Enter a path (/home/user):\n");
    }

    #[test]
    fn paths() {
        assert_eq!(prompt("src\n").0, Path::new("src"));
        assert_eq!(prompt("src/main java\r\n").0, Path::new("src/main java"));
        assert_eq!(prompt("last line").0, Path::new("last line"));
        assert_eq!(prompt("first\nsecond\n").0, Path::new("first"));
    }

    #[test]
    fn default() {
        assert_eq!(prompt("\n").0, Path::new("."));
        assert_eq!(prompt("\r\n").0, Path::new("."));
        assert_eq!(prompt("").0, Path::new("."));
    }
}
