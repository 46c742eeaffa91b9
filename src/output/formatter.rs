use std::collections::BTreeMap;
use std::io::IsTerminal;
use chrono::{Duration, Utc};
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::history::InternshipStats;
use crate::internships::Internship;
use crate::quiz::{Category, QuizResult, Tally};

/// Widest score bar drawn, even on very wide terminals
const MAX_BAR_WIDTH: usize = 30;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Bar width that fits next to a breakdown label and count
fn bar_width() -> usize {
    match get_terminal_width() {
        // label (12) + spaces + count (3)
        Some(w) if w > 20 => (w - 20).min(MAX_BAR_WIDTH),
        Some(_) => 10,
        None => MAX_BAR_WIDTH,
    }
}

/// Draw a proportional bar, `count` out of `max`, `width` cells wide
pub fn score_bar(count: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((count as f64 / max as f64) * width as f64).round() as usize
    };
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One line per category: name, bar, count. The winner is highlighted.
pub fn format_breakdown(tally: &Tally, winner: Category, width: usize, use_colors: bool) -> String {
    let max = tally.max();
    Category::ALL
        .iter()
        .map(|&category| {
            let count = tally.get(category);
            let bar = score_bar(count, max, width);
            let name = format!("{:<12}", category.short_name());
            if use_colors && category == winner {
                format!("  {} {} {:>3}", name.bold(), bar.magenta(), count.bold())
            } else if use_colors {
                format!("  {} {} {:>3}", name, bar.dimmed(), count)
            } else {
                let marker = if category == winner { "*" } else { " " };
                format!("{} {} {} {:>3}", marker, name, bar, count)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full result screen shown after a quiz
pub fn format_result(result: &QuizResult, destination: &str, use_colors: bool) -> String {
    let name = result.category.display_name();
    let breakdown = format_breakdown(&result.tally, result.category, bar_width(), use_colors);

    if use_colors {
        format!(
            "{}\nBased on your answers, we recommend:\n\n  {}\n\n{}\n\nCompleted: {}%\nLearn more: {}",
            "Your Results Are In!".bold(),
            name.magenta().bold(),
            breakdown,
            result.completion_percent,
            destination.underline()
        )
    } else {
        format!(
            "Your Results Are In!\nBased on your answers, we recommend:\n\n  {}\n\n{}\n\nCompleted: {}%\nLearn more: {}",
            name, breakdown, result.completion_percent, destination
        )
    }
}

/// Reminder listing the questions still to answer
pub fn format_unanswered(unanswered: &[usize]) -> String {
    if unanswered.is_empty() {
        return "All questions answered.".to_string();
    }
    let list = unanswered
        .iter()
        .map(|q| format!("Q{}", q))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Unanswered: {}", list)
}

/// Recent quiz results, newest first, one line each
pub fn format_history(results: &[&QuizResult], use_colors: bool) -> String {
    if results.is_empty() {
        return "No quiz results recorded yet.".to_string();
    }

    let now = Utc::now();
    results
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            let index_str = format!("{:>2}.", idx + 1);
            let age = format_age(now - result.timestamp);
            let tally = format!(
                "S{} T{} M{}",
                result.tally.science, result.tally.technology, result.tally.mathematics
            );
            if use_colors {
                format!(
                    "{} {:>4}  {}  {:<30}  {}  {:>3}%",
                    index_str.dimmed(),
                    age,
                    result.category.code().bold(),
                    result.category.display_name(),
                    tally.dimmed(),
                    result.completion_percent
                )
            } else {
                format!(
                    "{} {:>4}  {}  {:<30}  {}  {:>3}%",
                    index_str,
                    age,
                    result.category.code(),
                    result.category.display_name(),
                    tally,
                    result.completion_percent
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Internship catalog with key, title, organization, and details
pub fn format_internships(internships: &[Internship], use_colors: bool) -> String {
    let term_width = get_terminal_width();

    internships
        .iter()
        .map(|internship| {
            let title = match term_width {
                Some(w) if w > 24 => truncate(internship.title, w - 14),
                _ => internship.title.to_string(),
            };
            let mut details = vec![internship.kind.to_string(), internship.duration.to_string()];
            if let Some(location) = internship.location {
                details.push(location.to_string());
            }
            if let Some(eligibility) = internship.eligibility {
                details.push(format!("for {}", eligibility));
            }

            if use_colors {
                format!(
                    "{:<10}  {}\n            {} | {}\n            {}",
                    internship.key.cyan(),
                    title.bold(),
                    internship.organization.yellow(),
                    details.join(" | "),
                    internship.description.dimmed()
                )
            } else {
                format!(
                    "{:<10}  {}\n            {} | {}\n            {}",
                    internship.key,
                    title,
                    internship.organization,
                    details.join(" | "),
                    internship.description
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Internship click statistics plus how often each track was recommended
pub fn format_stats(stats: &InternshipStats, recommendations: &BTreeMap<Category, usize>) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Internship clicks: {}", stats.total_clicks));
    for (key, count) in &stats.clicks_by_key {
        lines.push(format!("  {:<10} {}", key, count));
    }

    if let Some((hour, count)) = stats.clicks_by_hour.iter().max_by_key(|(_, c)| **c) {
        lines.push(format!("Busiest hour: {:02}:00 ({} clicks)", hour, count));
    }

    if !stats.clicks_by_day.is_empty() {
        lines.push("By day:".to_string());
        for (day, count) in &stats.clicks_by_day {
            lines.push(format!("  {}  {}", day, count));
        }
    }

    let total: usize = recommendations.values().sum();
    lines.push(format!("Quiz recommendations: {}", total));
    for category in Category::ALL {
        let count = recommendations.get(&category).copied().unwrap_or(0);
        lines.push(format!("  {:<12} {}", category.short_name(), count));
    }

    lines.join("\n")
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}
