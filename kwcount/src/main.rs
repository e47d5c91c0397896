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
    env::current_dir,
    io::{stdin, stdout, Write},
    path::PathBuf,
};

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use encoding_rs::Encoding;
use kwcount::{
    keyword::KeywordSet,
    lex::scanner::EndOfInput,
    prompt::prompt_for_path,
    report::{write_banner, write_json, write_table},
    tally::{ErrorPolicy, Tally},
    walk::OsFileSystem,
};
use log::warn;
use thiserror::Error as ThisError;

/// Counts the Java reserved words used in a tree of source files.
///
/// Words inside comments and string literals are not counted.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File or directory to scan.  If omitted, asks for one on standard input.
    path: Option<PathBuf>,

    /// The encoding to use for reading source files.  If omitted, the encoding
    /// of each file is detected from its contents.
    #[arg(short = 'e', long, value_parser = parse_encoding)]
    encoding: Option<&'static Encoding>,

    /// Skip directories and files that can't be read, with a warning, instead
    /// of stopping.
    #[arg(long)]
    keep_going: bool,

    /// Also count a keyword at the very end of a file with nothing after it.
    #[arg(long)]
    count_trailing: bool,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value_t)]
    format: OutputFormat,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Banner and a table of keywords and counts.
    #[default]
    Text,

    /// JSON array of keywords and counts.
    Json,
}

#[derive(ThisError, Debug)]
#[error("{0}: unknown encoding")]
struct UnknownEncodingError(String);

fn parse_encoding(arg: &str) -> Result<&'static Encoding, UnknownEncodingError> {
    match Encoding::for_label_no_replacement(arg.as_bytes()) {
        Some(encoding) => Ok(encoding),
        None => Err(UnknownEncodingError(arg.to_string())),
    }
}

impl Cli {
    fn run(self) -> Result<()> {
        let mut stdout = stdout().lock();
        if self.format == OutputFormat::Text {
            write_banner(&mut stdout)?;
        }

        let path = match self.path {
            Some(path) => path,
            None => prompt_for_path(stdin().lock(), &mut stdout, &current_dir()?)?,
        };
        if !path.exists() {
            bail!("{}: no such file or directory", path.display());
        }

        let summary = Tally::new(KeywordSet::java(), |error| warn!("{error}"))
            .with_encoding(self.encoding)
            .with_end_of_input(match self.count_trailing {
                true => EndOfInput::Flush,
                false => EndOfInput::Discard,
            })
            .with_error_policy(match self.keep_going {
                true => ErrorPolicy::Skip,
                false => ErrorPolicy::Abort,
            })
            .run(&OsFileSystem, &path)?;
        if summary.skipped > 0 {
            warn!(
                "{} directories or files could not be read and were skipped",
                summary.skipped
            );
        }

        let ranked = summary.counts.ranked();
        match self.format {
            OutputFormat::Text => write_table(&mut stdout, &ranked)?,
            OutputFormat::Json => write_json(&mut stdout, &ranked, true)?,
        }
        stdout.flush()?;
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    Cli::parse().run()
}
