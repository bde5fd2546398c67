use log::debug;
use serde::Serialize;

use crate::config::settings::RankingSettings;
use crate::domain::{Dataset, SummaryStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsSource {
    /// Taken from the dataset's own `summary_stats` block.
    Upstream,
    Computed,
}

/// Dataset-wide summary figures, defaults already applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate {
    pub total_races: u64,
    pub total_horses: u64,
    pub avg_score: f64,
    pub top_horses: u64,
    pub source: StatsSource,
}

/// Aggregate figures formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateDisplay {
    pub total_races: String,
    pub total_horses: String,
    pub avg_score: String,
    pub top_horses: String,
}

impl Aggregate {
    pub fn display(&self) -> AggregateDisplay {
        AggregateDisplay {
            total_races: self.total_races.to_string(),
            total_horses: self.total_horses.to_string(),
            avg_score: format_average(self.avg_score),
            top_horses: self.top_horses.to_string(),
        }
    }
}

/// Summary for a dataset: the upstream block when present, otherwise computed locally.
pub fn summarize(dataset: &Dataset, config: &RankingSettings) -> Aggregate {
    match &dataset.summary_stats {
        Some(stats) => from_upstream(stats),
        None => compute_aggregate(dataset, config),
    }
}

pub fn compute_aggregate(dataset: &Dataset, config: &RankingSettings) -> Aggregate {
    let valid_scores: Vec<f64> = dataset.horses().filter_map(|h| h.valid_score()).collect();

    let aggregate = Aggregate {
        total_races: dataset.races.len() as u64,
        total_horses: dataset.total_horses() as u64,
        avg_score: calculate_mean(&valid_scores),
        top_horses: count_high_chance(&valid_scores, config.high_chance_threshold),
        source: StatsSource::Computed,
    };

    debug!(
        "Computed aggregate over {} valid of {} horses",
        valid_scores.len(),
        aggregate.total_horses
    );
    aggregate
}

fn from_upstream(stats: &SummaryStats) -> Aggregate {
    Aggregate {
        total_races: stats.total_races.unwrap_or(0),
        total_horses: stats.total_horses.unwrap_or(0),
        avg_score: stats.avg_score.unwrap_or(0.0),
        top_horses: stats.top_horses.unwrap_or(0),
        source: StatsSource::Upstream,
    }
}

fn calculate_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn count_high_chance(values: &[f64], threshold: f64) -> u64 {
    values.iter().filter(|&&s| s >= threshold).count() as u64
}

fn format_average(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        "0.00".to_string()
    }
}
