//! Output formatting and progress spinners for CLI

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::{
    Result,
    strategy::{ScoreBundle, SearchStats},
    types::Score,
};

/// Create a spinner for long searches
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .map_err(|e| crate::Error::ProgressBarTemplate {
                message: e.to_string(),
            })?,
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
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

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Label a score the way a player would read it
pub fn describe_score(score: Score) -> String {
    let verdict = if score.is_win() {
        "win"
    } else if score.is_loss() {
        "loss"
    } else if score.is_tie() {
        "tie"
    } else {
        "estimate"
    };
    format!("{score} ({verdict})")
}

/// Print search counters
pub fn print_stats(stats: &SearchStats) {
    print_kv("Nodes", &format_number(stats.nodes));
    if stats.cache_hits > 0 {
        print_kv("Cache hits", &format_number(stats.cache_hits));
    }
    if stats.cutoffs > 0 {
        print_kv("Cutoffs", &format_number(stats.cutoffs));
    }
    if stats.heuristic_evaluations > 0 {
        print_kv("Heuristic calls", &format_number(stats.heuristic_evaluations));
    }
}

/// One score bucket, flattened for display and JSON
#[derive(Debug, Clone, Serialize)]
pub struct BucketReport {
    pub score: Score,
    pub moves: Vec<String>,
}

/// Buckets from best to worst
pub fn bucket_reports<M: std::fmt::Display>(bundle: &ScoreBundle<M>) -> Vec<BucketReport> {
    bundle
        .iter()
        .rev()
        .map(|(score, moves)| BucketReport {
            score,
            moves: moves.iter().map(ToString::to_string).collect(),
        })
        .collect()
}

/// Print bucketed moves, best first
pub fn print_buckets(buckets: &[BucketReport]) {
    for bucket in buckets {
        print_kv(&describe_score(bucket.score), &bucket.moves.join(" "));
    }
}

/// Print any serializable report as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
