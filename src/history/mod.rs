pub mod stats;
pub mod storage;
pub mod types;

pub use stats::{internship_stats, recommendation_counts, InternshipStats};
pub use storage::{get_history_path, load_history, save_history};
pub use types::{HistoryState, InternshipClick};
