use chrono::{Local, NaiveDate, Timelike};
use std::collections::BTreeMap;

use super::types::InternshipClick;
use crate::quiz::{Category, QuizResult};

/// Aggregated internship click counts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternshipStats {
    pub total_clicks: usize,
    pub clicks_by_key: BTreeMap<String, usize>,
    /// Local hour of day (0-23) to click count
    pub clicks_by_hour: BTreeMap<u32, usize>,
    pub clicks_by_day: BTreeMap<NaiveDate, usize>,
}

pub fn internship_stats(clicks: &[InternshipClick]) -> InternshipStats {
    let mut stats = InternshipStats {
        total_clicks: clicks.len(),
        ..Default::default()
    };

    for click in clicks {
        let local = click.clicked_at.with_timezone(&Local);
        *stats.clicks_by_key.entry(click.key.clone()).or_default() += 1;
        *stats.clicks_by_hour.entry(local.hour()).or_default() += 1;
        *stats.clicks_by_day.entry(local.date_naive()).or_default() += 1;
    }

    stats
}

/// How many times each career track was recommended
pub fn recommendation_counts(results: &[QuizResult]) -> BTreeMap<Category, usize> {
    let mut counts = BTreeMap::new();
    for result in results {
        *counts.entry(result.category).or_default() += 1;
    }
    counts
}
