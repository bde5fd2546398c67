use anyhow::Result;
use log::{info, warn};
use serde_json::Value;

use crate::api::{BackendClient, DatasetEndpoint, SaveOutcome, SavedDataStatus};
use crate::config::settings::BackendSettings;

/// Pulls a scored dataset for one city from the calculation backend
pub struct FetchService {
    api_client: BackendClient,
}

impl FetchService {
    pub fn new(settings: &BackendSettings) -> Result<Self> {
        Ok(Self {
            api_client: BackendClient::new(settings)?,
        })
    }

    pub async fn run(&self, city: &str, endpoint: DatasetEndpoint) -> Result<Value> {
        info!("=== Fetching Dataset for {} ===", city);

        let value = self.api_client.fetch_dataset(city, endpoint).await?;
        self.log_shape(&value);

        info!("=== Fetch Complete ===");
        Ok(value)
    }

    pub async fn check(&self, city: &str) -> Result<SavedDataStatus> {
        let status = self.api_client.check_saved_data(city).await?;
        if status.has_data {
            info!("  → Saved data found for {}", city);
        } else {
            warn!("  → No saved data for {}", city);
        }
        Ok(status)
    }

    pub async fn save(&self, city: &str) -> Result<SaveOutcome> {
        info!("=== Scraping Entries for {} ===", city);
        let outcome = self.api_client.scrape_and_save(city).await?;
        info!("=== Scrape Saved ===");
        Ok(outcome)
    }

    fn log_shape(&self, value: &Value) {
        match value.get("races").and_then(Value::as_array) {
            Some(races) => info!("  → Received {} races", races.len()),
            None => warn!("  → Response carries no race list"),
        }
    }
}
