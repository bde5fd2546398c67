use serde::Serialize;

use crate::aggregate::{Aggregate, AggregateDisplay};

pub use crate::domain::UNKNOWN_NAME;

pub const PLACEHOLDER: &str = "-";
pub const NO_DATA: &str = "Veri yok";
pub const ALL_RACES_TAB_ID: &str = "tab-all";
pub const ALL_RACES_TITLE: &str = "Tüm Koşular";

/// Everything a renderer needs for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceBoard {
    pub summary: SummaryView,
    pub races: Vec<RaceTab>,
    pub all_races: AllRacesTab,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub figures: Aggregate,
    pub display: AggregateDisplay,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceTab {
    pub tab_id: String,
    pub position: usize,
    pub race_number: u32,
    pub time: String,
    pub title: String,
    pub horses: Vec<HorseRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HorseRow {
    pub rank: usize,
    pub number: String,
    pub name: String,
    pub score: String,
    pub scored: bool,
    pub distance: String,
    pub surface: String,
    pub win_chance: f64,
    pub jockey: String,
    pub trainer: String,
    pub form: String,
    pub finish_position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllRacesTab {
    pub tab_id: String,
    pub title: String,
    pub cards: Vec<RaceCard>,
}

/// Overview card for one race in the "all races" tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceCard {
    pub target_tab_id: String,
    pub race_number: u32,
    pub time: String,
    pub title: String,
    pub best_horse_name: String,
    pub best_horse_score: String,
    pub horse_count: usize,
    pub valid_horse_count: usize,
}
