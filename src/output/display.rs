//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{CategorySummary, StatsReport};
use colored::Colorize;

/// Print the persisted win/loss record
pub fn print_stats_report(report: &StatsReport) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("{}", "סטטיסטיקה".bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());

    println!("  ניצחונות: {}", report.record.wins.to_string().green().bold());
    println!("  הפסדים:   {}", report.record.losses.to_string().red().bold());
    println!("  משחקים:   {}", report.games);

    if report.games > 0 {
        println!(
            "  [{}] {:.0}%",
            create_progress_bar(report.win_rate, 1.0, 20).green(),
            report.win_rate * 100.0
        );
    }
    println!();
}

/// Print categories with their word counts
pub fn print_categories(summaries: &[CategorySummary]) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("{}", "קטגוריות".bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());

    let mut button = 0;
    for summary in summaries {
        let key = if summary.has_button() {
            button += 1;
            format!("F{button}")
        } else {
            "  ".to_string()
        };

        let count = if summary.is_playable() {
            format!("{} מילים", summary.word_count).green()
        } else {
            "אין מילים".red()
        };

        println!(
            "  {} {} {:<10} {:<8} {}",
            key.bright_black(),
            summary.icon.unwrap_or("  "),
            summary.name.bright_white().bold(),
            summary.label.unwrap_or(""),
            count
        );
    }
    println!();
}
