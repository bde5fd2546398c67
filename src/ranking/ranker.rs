use log::debug;

use super::types::{EffectiveScore, RankedHorse};
use crate::config::settings::RankingSettings;
use crate::domain::{Horse, Race};

/// Ranks a race's horses, best (lowest effective score) first.
///
/// The sort is stable, so horses with equal effective scores (all unscored
/// horses, for instance) keep their source order. The race is left untouched.
pub fn rank_horses<'a>(race: &'a Race, config: &RankingSettings) -> Vec<RankedHorse<'a>> {
    let mut scored: Vec<(EffectiveScore, &Horse)> = race
        .horses
        .iter()
        .map(|horse| (effective_score(horse, config), horse))
        .collect();

    scored.sort_by(|a, b| a.0.total_cmp(&b.0));

    debug!(
        "Ranked {} horses for race {:?}",
        scored.len(),
        race.race_number
    );

    scored
        .into_iter()
        .enumerate()
        .map(|(idx, (effective_score, horse))| RankedHorse {
            rank: idx + 1,
            effective_score,
            horse,
        })
        .collect()
}

/// Head of the ranking produced by [`rank_horses`]; `None` for an empty race.
pub fn best_horse<'a>(race: &'a Race, config: &RankingSettings) -> Option<RankedHorse<'a>> {
    rank_horses(race, config).into_iter().next()
}

pub fn effective_score(horse: &Horse, config: &RankingSettings) -> EffectiveScore {
    horse.valid_score().unwrap_or(config.unscored_sentinel)
}
