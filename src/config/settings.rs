use std::path::PathBuf;

pub struct RankingSettings {
    /// Effective score given to horses without a valid score; sorts them last.
    pub unscored_sentinel: f64,
    /// Scores at or above this count as "high chance" in the dataset summary.
    pub high_chance_threshold: f64,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            unscored_sentinel: 9999.0,
            high_chance_threshold: 8.0,
        }
    }
}

pub struct ScheduleSettings {
    pub start_hour: u32,
    pub start_minute: u32,
    pub interval_minutes: u32,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            start_hour: 16,
            start_minute: 45,
            interval_minutes: 30,
        }
    }
}

pub struct BackendSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: std::env::var("RACE_BACKEND_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
            user_agent: "RaceBoard/0.1",
            timeout_secs: 300, // scraping endpoints are slow
        }
    }
}

pub struct ExportSettings {
    pub output_dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: std::env::var("RACE_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

pub struct AppConfig {
    pub ranking: RankingSettings,
    pub schedule: ScheduleSettings,
    pub backend: BackendSettings,
    pub export: ExportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            ranking: RankingSettings::default(),
            schedule: ScheduleSettings::default(),
            backend: BackendSettings::default(),
            export: ExportSettings::default(),
        }
    }
}

// Passed explicitly into every pipeline call; nothing here is global.
