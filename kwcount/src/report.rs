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

//! Writing keyword counts.

use std::io::{Result as IoResult, Write};

use crate::count::Ranked;

/// Heading written before anything else in text output.
pub const BANNER: [&str; 2] = ["kwcount: Java keywords", "======================"];

/// Minimum width of the keyword column in [write_table].
const KEYWORD_WIDTH: usize = 12;

pub fn write_banner<W>(mut writer: W) -> IoResult<()>
where
    W: Write,
{
    for line in BANNER {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Writes `ranked` as a two-column table, after a pair of blank lines that
/// separate it from the banner and prompt.
pub fn write_table<W>(mut writer: W, ranked: &[Ranked]) -> IoResult<()>
where
    W: Write,
{
    writeln!(writer)?;
    writeln!(writer)?;
    writeln!(writer, "{:<KEYWORD_WIDTH$} Count", "Keyword")?;
    for Ranked { keyword, count } in ranked {
        writeln!(writer, "{keyword:<KEYWORD_WIDTH$} {count}")?;
    }
    Ok(())
}

/// Writes `ranked` as a JSON array of objects with `keyword` and `count`
/// members.
pub fn write_json<W>(mut writer: W, ranked: &[Ranked], pretty: bool) -> IoResult<()>
where
    W: Write,
{
    match pretty {
        true => serde_json::to_writer_pretty(&mut writer, ranked)?,
        false => serde_json::to_writer(&mut writer, ranked)?,
    };
    writeln!(writer)?;
    Ok(())
}
