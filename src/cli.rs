// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::{Parser, Subcommand};
use cube_solver::persist::{CUBE_STATE_FILE, CUBE_STRING_FILE, SOLUTION_FILE};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cube",
    about = "Validate, canonicalize and solve a scanned Rubik's Cube",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the solved cube as a scan and print its cube string.
    Test {
        #[arg(long, default_value = CUBE_STATE_FILE)]
        state: PathBuf,
        #[arg(long, default_value = CUBE_STRING_FILE)]
        output: PathBuf,
    },
    /// Type in the nine colors of each face (WROYGB), in order U R F D L B.
    Enter {
        #[arg(long, default_value = CUBE_STATE_FILE)]
        state: PathBuf,
        #[arg(long, default_value = CUBE_STRING_FILE)]
        output: PathBuf,
    },
    /// Validate a stored scan and write its cube string.
    Canonicalize {
        #[arg(default_value = CUBE_STATE_FILE)]
        state: PathBuf,
        #[arg(long, default_value = CUBE_STRING_FILE)]
        output: PathBuf,
    },
    /// Check the structure of a stored cube string.
    Check {
        #[arg(default_value = CUBE_STRING_FILE)]
        input: PathBuf,
    },
    /// Solve a stored cube string.
    Solve {
        #[arg(long, default_value = CUBE_STRING_FILE)]
        input: PathBuf,
        #[arg(long, default_value = SOLUTION_FILE)]
        output: PathBuf,
        /// Longest acceptable solution.
        #[arg(long)]
        max_length: Option<usize>,
        /// Longest phase-2 search per phase-1 solution.
        #[arg(long)]
        max_phase2_depth: Option<usize>,
        /// Give up after this many seconds.
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}
