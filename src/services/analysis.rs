use anyhow::Result;
use log::info;
use serde_json::Value;

use crate::aggregate::{self, Aggregate};
use crate::config::settings::AppConfig;
use crate::domain::{self, Dataset};
use crate::export;
use crate::view::{self, RaceBoard};

/// Everything produced from one dataset
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutput {
    pub dataset: Dataset,
    pub board: RaceBoard,
    pub csv: String,
}

/// Runs the full pipeline on a dataset value. Holds configuration only; the
/// dataset is passed into every call.
pub struct AnalysisService {
    config: AppConfig,
}

impl AnalysisService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn run(&self, raw: &Value) -> Result<AnalysisOutput> {
        info!("=== Starting Race Analysis ===");

        let dataset = self.normalize(raw)?;
        info!(
            "  → Normalized {} races with {} horses",
            dataset.races.len(),
            dataset.total_horses()
        );

        let board = self.build_board(&dataset);
        info!("  → Built {} race tabs", board.races.len());

        let csv = self.export_csv(&dataset)?;
        info!("  → Serialized {} bytes of CSV", csv.len());

        info!("=== Analysis Complete ===");
        Ok(AnalysisOutput {
            dataset,
            board,
            csv,
        })
    }

    pub fn normalize(&self, raw: &Value) -> Result<Dataset> {
        Ok(domain::normalize_dataset(raw)?)
    }

    pub fn summarize(&self, dataset: &Dataset) -> Aggregate {
        aggregate::summarize(dataset, &self.config.ranking)
    }

    pub fn build_board(&self, dataset: &Dataset) -> RaceBoard {
        view::build_race_board(dataset, &self.config)
    }

    pub fn export_csv(&self, dataset: &Dataset) -> Result<String> {
        export::dataset_to_csv(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InvalidDatasetError;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "success": true,
            "races": [
                {"race_number": "1", "horses": [
                    {"number": "3", "name": "Poyraz", "score": 4.1, "surface": "1"},
                    {"number": "1", "name": "Rüzgar", "score": 2.05, "surface": "2"}
                ]},
                {"race_number": "2", "horses": [
                    {"number": "2", "name": "Fırtına", "score": 0}
                ]}
            ],
            "summary_stats": {"total_races": 2, "total_horses": 3, "avg_score": 3.0751, "top_horses": 0}
        })
    }

    #[test]
    fn test_full_pipeline() {
        let service = AnalysisService::new(AppConfig::new());
        let output = service.run(&sample()).unwrap();

        assert_eq!(output.board.races.len(), 2);
        assert_eq!(output.board.races[0].horses[0].name, "Rüzgar");
        assert_eq!(output.board.summary.display.avg_score, "3.08");

        // CSV keeps source order
        let lines: Vec<&str> = output.csv.lines().collect();
        assert_eq!(lines[1], "1,\"3\",\"Poyraz\",\"\",\"1\",4.10");
        assert_eq!(lines[2], "1,\"1\",\"Rüzgar\",\"\",\"2\",2.05");
        assert_eq!(lines[3], "2,\"2\",\"Fırtına\",\"\",\"\",0.00");
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let service = AnalysisService::new(AppConfig::new());
        let raw = sample();
        let first = service.run(&raw).unwrap();
        let second = service.run(&raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_dataset_fails_fast() {
        let service = AnalysisService::new(AppConfig::new());
        let err = service.run(&json!({"success": true})).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidDatasetError>(),
            Some(&InvalidDatasetError::MissingRaces)
        );
    }
}
