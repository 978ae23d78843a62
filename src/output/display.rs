//! Display functions for command results

use super::formatters::{create_progress_bar, histogram_width, score_text};
use crate::commands::{EvaluateResult, SolveResult};
use crate::core::Configuration;
use crate::game::GameOutcome;
use colored::Colorize;

/// Print the configuration being played
pub fn print_configuration(config: &Configuration) {
    println!(
        "{} alphabet {}, length {}, {} codes{}",
        "Mastermind:".bright_cyan().bold(),
        config.alphabet().bright_yellow(),
        config.length(),
        config.all_codes().len(),
        if config.has_unique_symbols() {
            ", unique symbols"
        } else {
            ""
        }
    );
}

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} with the {} strategy",
        result.secret.to_string().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.guess.to_string().bold(),
            score_text(step.score).bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.precomputed {
                println!("  {}", "precomputed".bright_black());
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the summary line of an interactive game
pub fn print_play_outcome(outcome: &GameOutcome) {
    let line = if outcome.won {
        format!("✅ Won in {} rounds", outcome.rounds).green().bold()
    } else {
        format!("❌ Lost after {} rounds", outcome.rounds).red().bold()
    };
    println!("\n{line}");
}

/// Print an evaluation report
pub fn print_evaluation_result(result: &EvaluateResult) {
    let report = &result.report;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "EVALUATION:".bright_cyan().bold(),
        result.strategy.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", report.games_played);
    let win_rate = report.win_rate().unwrap_or(0.0);
    let won = format!("{} ({:.1}%)", report.games_won, win_rate * 100.0);
    println!(
        "   Games won:        [{}] {}",
        create_progress_bar(win_rate, 1.0, 20).green(),
        if report.games_won == report.games_played {
            won.green()
        } else {
            won.red()
        }
    );
    println!("   Total rounds:     {}", report.total_rounds);
    println!(
        "   Average rounds:   {}",
        format!("{:.3}", report.average_rounds().unwrap_or(0.0))
            .bright_yellow()
            .bold()
    );
    println!(
        "   Std deviation:    {:.3}",
        report.std_dev().unwrap_or(0.0)
    );
    println!(
        "   Median / 90th:    {} / {}",
        report.percentile(50.0).unwrap_or(0),
        report.percentile(90.0).unwrap_or(0)
    );
    println!(
        "   Worst case:       {}",
        format!("{}", report.max_rounds).yellow()
    );
    println!(
        "   Precompute time:  {:.2}s",
        result.precompute_time.as_secs_f64()
    );
    println!("   Total time:       {:.2}s", result.total_time.as_secs_f64());

    println!("\n📈 {}", "Rounds Distribution:".bright_cyan().bold());
    let max_count = report.rounds.iter().map(|(_, count)| count).max().unwrap_or(0);
    for (rounds, count) in report.rounds.iter() {
        let pct = count as f64 / report.games_played as f64 * 100.0;
        let bar_len = histogram_width(count, max_count, 40);
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("   {rounds:2}: {bar} {count:5} ({pct:5.1}%)");
    }
}
