//! Display functions for command results

use super::formatters::{create_progress_bar, result_row};
use crate::commands::{CheckResult, GuessSummary, RankResult};
use crate::core::{MatchStatus, Word};
use colored::Colorize;

/// Print the result of checking a guess
pub fn print_check_result(check: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}   Guess: {}",
        check.secret.to_uppercase().bright_yellow().bold(),
        check.guess.to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let (Some(result), Ok(guess)) = (&check.result, Word::new(&check.guess)) else {
        println!("\n{}", "❌ Not in word list".red().bold());
        return;
    };

    println!("\n  {}   {}", result_row(&guess, result), result.to_emoji());
    println!(
        "\n  {} match, {} partial, {} no match",
        result.count(MatchStatus::Match).to_string().green(),
        result.count(MatchStatus::PartialMatch).to_string().yellow(),
        result.count(MatchStatus::NoMatch)
    );
    if result.is_solved() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print the analysis of a single guess
pub fn print_analysis_result(summary: &GuessSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        summary.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = create_progress_bar(summary.hit_rate, 1.0, 30);

    println!("\n📊 Against {} possible secrets:", summary.total_secrets);
    println!(
        "   Hit rate:         [{}] {}",
        bar.green(),
        format!("{:.1}%", summary.hit_rate * 100.0).bright_yellow()
    );
    println!("   Avg matches:      {:.2}", summary.average_matches);
    println!("   Avg partials:     {:.2}", summary.average_partials);
    println!("   Distinct results: {}", summary.distinct_results);
    println!("   Worst case:       {} secrets", summary.largest_group);
}

/// Print the top ranked guesses
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TOP GUESSES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Scored {} guesses in {:.2}s\n",
        result.candidates,
        result.duration.as_secs_f64()
    );
    println!("   {:>3}  {:<8} {:>8} {:>8} {:>8}", "#", "word", "results", "worst", "hits");
    for (i, summary) in result.ranked.iter().enumerate() {
        println!(
            "   {:>3}  {:<8} {:>8} {:>8} {:>8.2}",
            i + 1,
            summary.word.to_uppercase().bright_white().bold(),
            summary.distinct_results,
            summary.largest_group,
            summary.average_matches + summary.average_partials
        );
    }
}
