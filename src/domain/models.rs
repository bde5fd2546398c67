use serde::{Deserialize, Serialize};

/// Shown wherever a horse has no name.
pub const UNKNOWN_NAME: &str = "Bilinmiyor";

/// One city's race card as returned by the calculation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub races: Vec<Race>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_stats: Option<SummaryStats>,
}

impl Dataset {
    pub fn total_horses(&self) -> usize {
        self.races.iter().map(|r| r.horses.len()).sum()
    }

    /// All horses across races, race order then source order.
    pub fn horses(&self) -> impl Iterator<Item = &Horse> {
        self.races.iter().flat_map(|r| r.horses.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    #[serde(default)]
    pub race_number: Option<u32>,
    #[serde(default)]
    pub horses: Vec<Horse>,
}

impl Race {
    /// Race number for display; falls back to the 1-based position in the card.
    pub fn display_number(&self, position: usize) -> u32 {
        self.race_number.unwrap_or((position + 1) as u32)
    }

    pub fn valid_horse_count(&self) -> usize {
        self.horses.iter().filter(|h| h.is_scored()).count()
    }
}

/// A single entrant. Every field is kept optional so consumers can still tell
/// "absent" from "defaulted".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Horse {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub distance: Option<String>,
    #[serde(default)]
    pub surface: Option<String>,
    #[serde(default)]
    pub win_chance: Option<f64>,
    #[serde(default)]
    pub jockey: Option<String>,
    #[serde(default)]
    pub trainer: Option<String>,
    #[serde(default)]
    pub form: Option<String>,
    #[serde(default)]
    pub finish_position: Option<String>,
}

impl Horse {
    /// The score, if it is a real (finite, non-zero) rating.
    pub fn valid_score(&self) -> Option<f64> {
        self.score.filter(|s| s.is_finite() && *s != 0.0)
    }

    pub fn is_scored(&self) -> bool {
        self.valid_score().is_some()
    }
}

/// Dataset-wide figures, either computed upstream or by the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    #[serde(default)]
    pub total_races: Option<u64>,
    #[serde(default)]
    pub total_horses: Option<u64>,
    #[serde(default)]
    pub avg_score: Option<f64>,
    #[serde(default)]
    pub top_horses: Option<u64>,
}

/// Track surface labels used on Turkish race cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Cim,
    Kum,
    Sentetik,
}

impl Surface {
    /// Resolve a surface code. Accepts the numeric codes and the labels in
    /// capitalized or lower case; other casings are not recognized.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" | "Çim" | "çim" => Some(Surface::Cim),
            "2" | "Kum" | "kum" => Some(Surface::Kum),
            "3" | "Sentetik" | "sentetik" => Some(Surface::Sentetik),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Cim => "Çim",
            Surface::Kum => "Kum",
            Surface::Sentetik => "Sentetik",
        }
    }
}
