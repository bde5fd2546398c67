use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::{SaveOutcome, SavedDataStatus};
use crate::config::settings::BackendSettings;
use crate::domain::check_backend_reply;
use crate::errors::{fetch_context, with_fetch_context};
use crate::http::JsonClient;

pub const CHECK_SAVED_DATA_PATH: &str = "/api/check_saved_data";
pub const SCRAPE_AND_SAVE_PATH: &str = "/api/scrape_and_save";

/// Backend endpoints that answer with a scored race dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetEndpoint {
    /// Analyse data the backend already scraped and saved
    CalculateFromSaved,
    /// Scrape fresh entries, then analyse them
    ScrapeAndCalculate,
}

impl DatasetEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            DatasetEndpoint::CalculateFromSaved => "/api/calculate_from_saved",
            DatasetEndpoint::ScrapeAndCalculate => "/api/scrape_and_calculate",
        }
    }
}

#[derive(Serialize)]
struct CityRequest<'a> {
    city: &'a str,
}

/// Client for the race-calculation backend
pub struct BackendClient {
    client: JsonClient,
    base_url: String,
}

impl BackendClient {
    pub fn new(settings: &BackendSettings) -> Result<Self> {
        let client = JsonClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the raw dataset document for a city. Validation is left to the normalizer.
    pub async fn fetch_dataset(&self, city: &str, endpoint: DatasetEndpoint) -> Result<Value> {
        info!("Requesting {} dataset", city);
        self.post_city(endpoint.path(), city).await
    }

    /// Ask whether today's scrape for a city is already saved.
    pub async fn check_saved_data(&self, city: &str) -> Result<SavedDataStatus> {
        info!("Checking saved data for {}", city);
        let value = self.post_city(CHECK_SAVED_DATA_PATH, city).await?;
        parse_reply(value)
    }

    /// Scrape a city's entries and save them on the backend without scoring.
    pub async fn scrape_and_save(&self, city: &str) -> Result<SaveOutcome> {
        info!("Scraping and saving data for {}", city);
        let value = self.post_city(SCRAPE_AND_SAVE_PATH, city).await?;
        parse_reply(value)
    }

    async fn post_city(&self, path: &str, city: &str) -> Result<Value> {
        let url = self.build_url(path);
        info!("POST {}", url);

        let response = self
            .client
            .post_json(&url, &CityRequest { city })
            .await
            .with_context(|| fetch_context(&url))?;

        if !response.status().is_success() {
            anyhow::bail!("Backend returned status: {}", response.status());
        }

        let value = with_fetch_context(response.json::<Value>().await, &url)?;
        Ok(value)
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Check the `success`/`message` envelope, then decode the rest of the reply.
pub fn parse_reply<T: DeserializeOwned>(value: Value) -> Result<T> {
    check_backend_reply(&value)?;
    serde_json::from_value(value).context("Unexpected backend reply shape")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_url_strips_trailing_slash() {
        let settings = BackendSettings {
            base_url: "http://localhost:5000/".to_string(),
            user_agent: "test",
            timeout_secs: 5,
        };
        let client = BackendClient::new(&settings).unwrap();
        assert_eq!(
            client.build_url(DatasetEndpoint::CalculateFromSaved.path()),
            "http://localhost:5000/api/calculate_from_saved"
        );
        assert_eq!(
            client.build_url(DatasetEndpoint::ScrapeAndCalculate.path()),
            "http://localhost:5000/api/scrape_and_calculate"
        );
        assert_eq!(
            client.build_url(CHECK_SAVED_DATA_PATH),
            "http://localhost:5000/api/check_saved_data"
        );
        assert_eq!(
            client.build_url(SCRAPE_AND_SAVE_PATH),
            "http://localhost:5000/api/scrape_and_save"
        );
    }

    #[test]
    fn test_parse_reply_rejects_failed_envelope() {
        let err = parse_reply::<SaveOutcome>(json!({
            "success": false,
            "message": "Geçersiz track kodu"
        }))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "backend rejected the request: Geçersiz track kodu"
        );

        let err = parse_reply::<SavedDataStatus>(json!({"success": false, "error": "boom"}))
            .unwrap_err();
        assert_eq!(err.to_string(), "backend rejected the request: boom");
    }

    #[test]
    fn test_parse_reply_accepts_plain_status() {
        let status: SavedDataStatus = parse_reply(json!({
            "has_data": true,
            "file_count": 2,
            "data": {"city": "Bursa"}
        }))
        .unwrap();
        assert!(status.has_data);
        assert_eq!(status.file_count, Some(2));

        let outcome: SaveOutcome =
            parse_reply(json!({"success": true, "message": "Kaydedildi"})).unwrap();
        assert_eq!(outcome.message.as_deref(), Some("Kaydedildi"));
    }

    #[test]
    fn test_parse_reply_rejects_wrong_shape() {
        assert!(parse_reply::<SavedDataStatus>(json!({"has_data": "yes"})).is_err());
        assert!(parse_reply::<SaveOutcome>(json!([])).is_err());
    }
}
