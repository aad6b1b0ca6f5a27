//! Gauntlet CLI — oracle values for the control-flow fixtures.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage/input error (unknown fixture, arity, unreadable or malformed file)
//! - 2: Oracle mismatch (failed checks or golden drift)

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use gauntlet_common::DEFAULT_SEED;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Debug, Parser)]
#[command(name = "gauntlet", version, about = "Oracle values for the control-flow fixtures")]
struct Cli {
    /// Log progress to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List fixtures with their arity and main value.
    List,
    /// Invoke a fixture's Test entry.
    ///
    /// Options must precede the fixture name: every token after it is a
    /// Test argument.
    Run {
        fixture: String,
        /// Test arguments (decimal or 0x hex, either may be negative).
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
        #[arg(long, env = "GAUNTLET_SEED", default_value_t = DEFAULT_SEED)]
        seed: u32,
    },
    /// Invoke a fixture's zero-argument main entry.
    Main {
        fixture: String,
        #[arg(long, env = "GAUNTLET_SEED", default_value_t = DEFAULT_SEED)]
        seed: u32,
    },
    /// Print successive rand() values after srand(seed).
    Rand {
        #[arg(long, env = "GAUNTLET_SEED", default_value_t = DEFAULT_SEED)]
        seed: u32,
        #[arg(long, default_value_t = 7)]
        count: usize,
    },
    /// Write witness files and a manifest for the golden catalog.
    Generate {
        #[arg(long, default_value = "witnesses")]
        output_dir: PathBuf,
        /// Only generate entries whose id contains this pattern.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Check results recorded from a runtime against the oracle.
    Check {
        fixture: String,
        observations: PathBuf,
        #[arg(long, env = "GAUNTLET_SEED", default_value_t = DEFAULT_SEED)]
        seed: u32,
    },
    /// Print the blake3 digest of a file.
    Hash { file: PathBuf },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    );

    let result = match cli.command {
        Command::List => commands::list(),
        Command::Run {
            fixture,
            args,
            seed,
        } => commands::run(&fixture, &args, seed),
        Command::Main { fixture, seed } => commands::main_entry(&fixture, seed),
        Command::Rand { seed, count } => commands::rand(seed, count),
        Command::Generate { output_dir, filter } => commands::generate(output_dir, filter),
        Command::Check {
            fixture,
            observations,
            seed,
        } => commands::check(&fixture, &observations, seed),
        Command::Hash { file } => commands::hash(&file),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}
