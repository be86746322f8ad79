//! Reverse Wordle - CLI
//!
//! Prints every guess sequence that could have produced a Wordle feedback grid.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use reverse_wordle::{
    commands::{ReconstructConfig, run_reconstruct},
    output::{print_grid, print_summary, write_paths},
    wordlists::WordOrder,
};
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reverse_wordle",
    about = "Reconstruct every guess sequence consistent with a Wordle feedback grid",
    version,
    author
)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Grid file: the solution on the first line, then one feedback row per
    /// line (g = green, y = yellow, - = grey), latest guess first
    grid: PathBuf,

    /// Dictionary file with one word per line
    dictionary: PathBuf,

    /// Walk the dictionary from its last line to its first
    #[arg(short, long)]
    reverse_dictionary: bool,

    /// Print only the number of guess sequences
    #[arg(short, long)]
    count: bool,

    /// Show the grid as emoji before the results
    #[arg(short, long)]
    emoji: bool,

    /// Show a spinner while the search runs
    #[arg(short, long)]
    progress: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    // -v overrides RUST_LOG
    if verbose > 0 {
        builder.filter_level(match verbose {
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });
    }

    builder.format_timestamp(None).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ReconstructConfig {
        order: if cli.reverse_dictionary {
            WordOrder::Reversed
        } else {
            WordOrder::File
        },
        show_progress: cli.progress,
        ..ReconstructConfig::new(cli.grid, cli.dictionary)
    };

    let result = run_reconstruct(&config).map_err(|e| anyhow::anyhow!(e))?;

    if cli.emoji {
        print_grid(&result.grid);
    }

    if cli.count {
        println!("{}", result.tree.path_count());
    } else {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        write_paths(&mut out, &result.tree).context("Failed to write guess sequences")?;
    }

    if cli.verbose > 0 {
        print_summary(&result);
    }

    Ok(())
}
