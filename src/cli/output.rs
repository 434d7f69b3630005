//! Output formatting for CLI

use crate::types::{Action, ActionScores};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Format a rate in `[0, 1]` as a percentage
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the per-action scores of one evaluation, marking the chosen action.
pub fn print_score_table(scores: &ActionScores, chosen: Option<Action>) {
    println!("  {:>6}  {:>10}  {:>8}", "action", "score", "terminal");
    println!("  {}", "-".repeat(30));
    for entry in scores.entries() {
        let marker = if Some(entry.action) == chosen { " <" } else { "" };
        println!(
            "  {:>6}  {:>10.4}  {:>8}{marker}",
            entry.action, entry.score, entry.terminal
        );
    }
}
