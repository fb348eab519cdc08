//! Queuedle Solver - CLI
//!
//! Play, solve and benchmark Queuedle puzzles from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use queuedle_solver::{
    commands::{BenchmarkConfig, ShowConfig, SolveConfig, run_benchmark, show_puzzle, solve_seed},
    engine::Engine,
    generator::{MAX_SEED, generate},
    interactive::{App, run_tui},
    output::{print_benchmark_result, print_puzzle, print_solve_result},
    solver::{FingerprintScope, SearchConfig},
    words::{Dictionary, MatchPolicy, loader},
};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "queuedle_solver",
    about = "Queuedle solver: best-first search over sliding-letter word grids",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or a path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Score every word a line contains instead of only maximal ones
    #[arg(long, global = true)]
    all_matches: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - play the puzzle yourself)
    Play {
        /// Puzzle seed (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Search a seed for a high-scoring move sequence
    Solve {
        /// Puzzle seed
        seed: u64,

        /// Node budget for the search
        #[arg(short = 'n', long, default_value = "200000")]
        budget: usize,

        /// Dedup scope: 'grid' or 'grid-queue'
        #[arg(short = 'f', long, default_value = "grid")]
        fingerprint: String,

        /// Wall-clock limit in milliseconds
        #[arg(short = 'd', long)]
        deadline_ms: Option<u64>,

        /// Show search statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark search scores across a range of seeds
    Benchmark {
        /// First seed of the range
        #[arg(short, long, default_value = "1")]
        start_seed: u64,

        /// Number of seeds to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: u64,

        /// Node budget per seed
        #[arg(short = 'b', long, default_value = "50000")]
        budget: usize,

        /// Random playouts per seed for a baseline column (0 disables)
        #[arg(long, default_value = "0")]
        baseline: usize,
    },

    /// Print the puzzle a seed generates
    Show {
        /// Puzzle seed
        seed: u64,

        /// Skip word-free resampling and show the raw letters
        #[arg(short, long)]
        raw: bool,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "builtin": the embedded list compiled into the binary
/// - "<path>": load a custom wordlist from file
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    let dictionary = match wordlist_mode {
        "builtin" => Dictionary::builtin(),
        path => loader::load_from_file(path)?,
    };
    if dictionary.is_empty() {
        anyhow::bail!("wordlist '{wordlist_mode}' contains no usable words");
    }
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let policy = if cli.all_matches {
        MatchPolicy::All
    } else {
        MatchPolicy::Maximal
    };
    let engine = Engine::new(&dictionary, policy);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    match command {
        Commands::Play { seed } => run_play_command(&engine, seed),
        Commands::Solve {
            seed,
            budget,
            fingerprint,
            deadline_ms,
            verbose,
        } => run_solve_command(&engine, seed, budget, &fingerprint, deadline_ms, verbose),
        Commands::Benchmark {
            start_seed,
            count,
            budget,
            baseline,
        } => {
            run_benchmark_command(&engine, start_seed, count, budget, baseline);
            Ok(())
        }
        Commands::Show { seed, raw } => run_show_command(&engine, seed, raw),
    }
}

fn run_play_command(engine: &Engine, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(|| rand::random_range(1..=MAX_SEED));
    let puzzle = generate(seed, engine)?;
    let app = App::new(*engine, puzzle);
    run_tui(app)
}

fn run_solve_command(
    engine: &Engine,
    seed: u64,
    budget: usize,
    fingerprint: &str,
    deadline_ms: Option<u64>,
    verbose: bool,
) -> Result<()> {
    let config = SolveConfig {
        seed,
        search: SearchConfig {
            max_nodes: budget,
            fingerprint: FingerprintScope::from_name(fingerprint),
            deadline: deadline_ms.map(Duration::from_millis),
        },
    };
    let result = solve_seed(&config, engine)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    engine: &Engine,
    start_seed: u64,
    count: u64,
    budget: usize,
    baseline: usize,
) {
    println!("Benchmarking {count} seeds starting at {start_seed}...\n");

    let config = BenchmarkConfig {
        start_seed,
        seed_count: count,
        search: SearchConfig {
            max_nodes: budget,
            ..SearchConfig::default()
        },
        baseline_playouts: baseline,
    };
    let result = run_benchmark(&config, engine);
    print_benchmark_result(&result);
}

fn run_show_command(engine: &Engine, seed: u64, raw: bool) -> Result<()> {
    let puzzle = show_puzzle(&ShowConfig { seed, raw }, engine)?;
    print_puzzle(&puzzle);
    Ok(())
}
