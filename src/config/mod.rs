pub mod settings;

pub use settings::{AppConfig, BackendSettings, ExportSettings, RankingSettings, ScheduleSettings};
