pub mod formatter;

pub use formatter::{
    format_age, format_breakdown, format_history, format_internships, format_result,
    format_stats, format_unanswered, score_bar, should_use_colors,
};
