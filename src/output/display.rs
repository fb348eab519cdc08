//! Display functions for command results

use super::formatters::{
    create_progress_bar, describe_highlight, format_move, format_queue, grid_lines,
};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::GameState;
use crate::generator::GeneratedPuzzle;
use colored::Colorize;

fn print_board(state: &GameState) {
    for line in grid_lines(state.grid()) {
        println!("   {line}");
    }
    println!("   Queue: {}", format_queue(state.queue()));
}

fn print_words(state: &GameState) {
    if state.highlights().is_empty() {
        println!("   Words: none");
        return;
    }
    let described: Vec<String> = state
        .highlights()
        .iter()
        .map(|&highlight| describe_highlight(state.grid(), highlight))
        .collect();
    println!("   Words: {}", described.join(", "));
}

/// Print the result of solving a seed
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving seed {}",
        result.base_seed.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    if result.offset > 0 {
        println!(
            "   (opening words on the base board, resampled at seed +{})",
            result.offset
        );
    }

    println!("\n🧩 {}", "Initial board:".bright_cyan().bold());
    print_board(&result.initial);

    println!("\n🏆 {}", "Best line:".bright_cyan().bold());
    if result.report.best_moves.is_empty() {
        println!("   No move improves on the opening board");
    } else {
        for (i, &mv) in result.report.best_moves.iter().enumerate() {
            println!("   {:2}. {}", i + 1, format_move(mv));
        }
    }

    println!(
        "\n   Score: {} in {} moves",
        result.report.best_score().to_string().green().bold(),
        result.report.best_moves.len()
    );
    print_board(&result.report.best_state);
    print_words(&result.report.best_state);

    if verbose {
        println!("\n📊 {}", "Search:".bright_cyan().bold());
        println!("   Nodes expanded:  {}", result.report.nodes_expanded);
        println!(
            "   Time taken:      {:.2}s",
            result.report.duration.as_secs_f64()
        );
        println!(
            "   Nodes/second:    {:.0}",
            result.report.nodes_expanded as f64 / result.report.duration.as_secs_f64()
        );
    }
}

/// Print a generated puzzle without solving it
pub fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Seed {}",
        puzzle.base_seed.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    if puzzle.offset > 0 {
        println!("   (resampled at seed +{})", puzzle.offset);
    }

    println!();
    print_board(&puzzle.state);
    print_words(&puzzle.state);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Seeds solved:     {}", result.outcomes.len());
    println!(
        "   Average score:    {}",
        format!("{:.2}", result.average_score).bright_yellow().bold()
    );
    if let Some((seed, score)) = result.max {
        println!(
            "   Best seed:        {} {}",
            seed,
            format!("(score {score})").green()
        );
    }
    if let Some((seed, score)) = result.min {
        println!(
            "   Worst seed:       {} {}",
            seed,
            format!("(score {score})").yellow()
        );
    }
    println!("   Average nodes:    {:.0}", result.average_nodes);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Seeds/second:     {:.1}", result.seeds_per_second);

    if let Some(baseline) = result.baseline_average {
        println!("\n🎲 {}", "Random baseline:".bright_cyan().bold());
        println!("   Baseline score:   {baseline:.2}");
        println!(
            "   Solver lift:      {}",
            format!("{:+.2}", result.average_score - baseline)
                .green()
                .bold()
        );
    }

    if !result.outcomes.is_empty() && result.outcomes.len() <= 20 {
        println!("\n📈 {}", "Per seed:".bright_cyan().bold());
        let top = result.outcomes.iter().map(|o| o.score).max().unwrap_or(1);
        for outcome in &result.outcomes {
            let bar = create_progress_bar(f64::from(outcome.score), f64::from(top.max(1)), 30);
            println!(
                "   {:>10}: {} {:3} in {} moves",
                outcome.seed,
                bar.green(),
                outcome.score,
                outcome.moves_used
            );
        }
    }
}
