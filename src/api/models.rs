use serde::Deserialize;

/// Reply of `/api/check_saved_data`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SavedDataStatus {
    #[serde(default)]
    pub has_data: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub file_count: Option<u64>,
    #[serde(default)]
    pub data: Option<SavedDataInfo>,
}

/// Reply of `/api/scrape_and_save`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SaveOutcome {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<SavedDataInfo>,
}

/// What the backend knows about one city's saved scrape file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SavedDataInfo {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub total_horses: Option<u64>,
    #[serde(default)]
    pub successful_horses: Option<u64>,
    #[serde(default)]
    pub success_rate: Option<f64>,
    #[serde(default, alias = "raw_filename")]
    pub file_path: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SavedDataInfo {
    /// `successful/total (rate%)`, when the counts are known.
    pub fn coverage(&self) -> Option<String> {
        let (ok, total) = (self.successful_horses?, self.total_horses?);
        Some(match self.success_rate {
            Some(rate) => format!("{}/{} (%{:.1})", ok, total, rate),
            None => format!("{}/{}", ok, total),
        })
    }
}
