// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use cube_solver::canonical::{canonicalize, CanonicalCubeString};
use cube_solver::persist;
use cube_solver::solver::{solve_cube_string, SolverConfig, TwoPhaseSolver};
use cube_solver::state::{CubeState, ScanSession};
use cube_solver::validation::{validate_cube_state, validate_cube_string};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Test { state, output } => {
            let cube_state = CubeState::solved();
            persist::save_cube_state(&state, &cube_state)?;
            let cube = canonicalize_and_save(&cube_state, &output)?;
            println!("{}", cube);
        }
        Command::Enter { state, output } => {
            let stdin = io::stdin();
            let cube_state = enter_faces(stdin.lock(), io::stdout())?;
            persist::save_cube_state(&state, &cube_state)?;
            let cube = canonicalize_and_save(&cube_state, &output)?;
            println!("{}", cube);
        }
        Command::Canonicalize { state, output } => {
            let cube_state = persist::load_cube_state(&state)?;
            let cube = canonicalize_and_save(&cube_state, &output)?;
            println!("{}", cube);
        }
        Command::Check { input } => {
            let cube_string = load_cube_string(&input)?;
            validate_cube_string(&cube_string).context("invalid cube string")?;
            println!("valid cube string: {}", cube_string);
        }
        Command::Solve {
            input,
            output,
            max_length,
            max_phase2_depth,
            timeout_secs,
        } => {
            let defaults = SolverConfig::default();
            let config = SolverConfig {
                max_length: max_length.unwrap_or(defaults.max_length),
                max_phase2_depth: max_phase2_depth.unwrap_or(defaults.max_phase2_depth),
                timeout: timeout_secs.map(Duration::from_secs),
            };
            let cube_string = load_cube_string(&input)?;
            println!("solving cube: {}", cube_string);
            let solver = TwoPhaseSolver::new(config);
            let solution = solve_cube_string(&cube_string, &solver)?;
            println!("{}", solution);
            persist::save_solution(&output, &solution)?;
        }
    }
    Ok(())
}

fn load_cube_string(path: &Path) -> Result<String> {
    persist::load_cube_string(path).map_err(|err| {
        if err.is_not_found() {
            anyhow::anyhow!("{} not found; run `cube enter` or `cube test` first", path.display())
        } else {
            err.into()
        }
    })
}

fn canonicalize_and_save(cube_state: &CubeState, output: &Path) -> Result<CanonicalCubeString> {
    let validated = validate_cube_state(cube_state).context("invalid cube state, please re-scan")?;
    let cube = canonicalize(&validated);
    persist::save_cube_string(output, &cube)?;
    Ok(cube)
}

/// Prompt for each face in turn until all six are entered.
fn enter_faces<R: BufRead, W: Write>(input: R, mut output: W) -> Result<CubeState> {
    let mut session = ScanSession::new();
    let mut lines = input.lines();
    while let Some(face) = session.current_face() {
        write!(output, "Enter colors for {} face (9 chars, WROYGB): ", face)?;
        output.flush()?;
        let Some(line) = lines.next() else {
            bail!("input ended after {} of 6 faces", session.faces_scanned());
        };
        if let Err(err) = session.enter_manual(&line?) {
            writeln!(output, "{}", err)?;
        }
    }
    Ok(session.into_state())
}
