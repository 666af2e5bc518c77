// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use suftree::{Alphabet, SuffixTree};

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the position of the first occurrence of a pattern in a text file
    Find { text: PathBuf, pattern: String },
    /// Report whether a pattern occurs in a text file
    Check { text: PathBuf, pattern: String },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Find { text, pattern } => {
            let tree = index_file(&text)?;
            match tree.index_of(pattern.as_bytes()) {
                Some(position) => println!("{position}"),
                None => println!("not found"),
            }
        }
        Command::Check { text, pattern } => {
            let tree = index_file(&text)?;
            println!("{}", tree.contains(pattern.as_bytes()));
        }
    }

    Ok(())
}

fn index_file(path: &Path) -> anyhow::Result<SuffixTree> {
    let data = fs::read(path)
        .with_context(|| format!("Failed to read text file '{}'", path.display()))?;

    // Printable ASCII plus the whitespace bytes ordinary text files carry
    let mut letters: Vec<u8> = (0x20..=0x7e).collect();
    letters.extend_from_slice(b"\t\n\r");
    let alphabet = Alphabet::new(&letters);

    if !alphabet.contains_all(&data) {
        bail!(
            "Text file '{}' contains bytes outside the printable ASCII alphabet",
            path.display(),
        );
    }

    Ok(SuffixTree::new(&data, alphabet))
}
