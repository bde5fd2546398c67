use log::info;

use super::models::*;
use crate::aggregate;
use crate::config::settings::AppConfig;
use crate::domain::{Dataset, Horse, Race, Surface};
use crate::ranking::{self, RankedHorse};
use crate::schedule;

/// Builds the full tabbed view model for a dataset.
pub fn build_race_board(dataset: &Dataset, config: &AppConfig) -> RaceBoard {
    let races: Vec<RaceTab> = dataset
        .races
        .iter()
        .enumerate()
        .map(|(position, race)| build_race_tab(position, race, config))
        .collect();

    let cards = dataset
        .races
        .iter()
        .enumerate()
        .map(|(position, race)| build_race_card(position, race, config))
        .collect();

    let figures = aggregate::summarize(dataset, &config.ranking);
    let display = figures.display();

    info!("Built view model with {} race tabs", races.len());

    RaceBoard {
        summary: SummaryView { figures, display },
        races,
        all_races: AllRacesTab {
            tab_id: ALL_RACES_TAB_ID.to_string(),
            title: ALL_RACES_TITLE.to_string(),
            cards,
        },
    }
}

pub fn build_race_tab(position: usize, race: &Race, config: &AppConfig) -> RaceTab {
    let race_number = race.display_number(position);
    let time = schedule::race_time_label(position, &config.schedule);

    let horses = ranking::rank_horses(race, &config.ranking)
        .iter()
        .map(build_horse_row)
        .collect();

    RaceTab {
        tab_id: tab_id(position),
        position,
        race_number,
        title: race_title(race_number, &time),
        time,
        horses,
    }
}

pub fn build_race_card(position: usize, race: &Race, config: &AppConfig) -> RaceCard {
    let race_number = race.display_number(position);
    let time = schedule::race_time_label(position, &config.schedule);
    let best = ranking::best_horse(race, &config.ranking);

    let (best_horse_name, best_horse_score) = match best {
        Some(best) => (
            best.horse.name.clone().unwrap_or_else(|| NO_DATA.to_string()),
            best.horse
                .valid_score()
                .map(|s| format!("{:.2}", s))
                .unwrap_or_else(|| NO_DATA.to_string()),
        ),
        None => (NO_DATA.to_string(), NO_DATA.to_string()),
    };

    RaceCard {
        target_tab_id: tab_id(position),
        race_number,
        title: race_title(race_number, &time),
        time,
        best_horse_name,
        best_horse_score,
        horse_count: race.horses.len(),
        valid_horse_count: race.valid_horse_count(),
    }
}

fn build_horse_row(ranked: &RankedHorse<'_>) -> HorseRow {
    let horse = ranked.horse;
    HorseRow {
        rank: ranked.rank,
        number: or_placeholder(&horse.number),
        name: horse.name.clone().unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        score: display_score(horse),
        scored: ranked.is_scored(),
        distance: or_placeholder(&horse.distance),
        surface: display_surface(horse.surface.as_deref()),
        win_chance: horse.win_chance.unwrap_or(0.0),
        jockey: or_placeholder(&horse.jockey),
        trainer: or_placeholder(&horse.trainer),
        form: or_placeholder(&horse.form),
        finish_position: or_placeholder(&horse.finish_position),
    }
}

/// Two-decimal score, or the placeholder for unscored horses.
pub fn display_score(horse: &Horse) -> String {
    horse
        .valid_score()
        .map(|s| format!("{:.2}", s))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Surface label: known codes map to their name, unknown codes pass through.
pub fn display_surface(code: Option<&str>) -> String {
    match code {
        None | Some("") => PLACEHOLDER.to_string(),
        Some(code) => Surface::from_code(code)
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| code.to_string()),
    }
}

fn or_placeholder(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn tab_id(position: usize) -> String {
    format!("tab-{}", position)
}

fn race_title(race_number: u32, time: &str) -> String {
    format!("{}. Koşu {}", race_number, time)
}
