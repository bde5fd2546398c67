use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::{Dataset, Horse, UNKNOWN_NAME};

pub const CSV_HEADER: [&str; 6] = ["Koşu No", "At No", "At Adı", "Mesafe", "Pist", "Skor"];

/// Dumps every horse in source order (not ranked order), one row each.
///
/// Text columns are wrapped in double quotes verbatim; embedded quotes are
/// not escaped.
pub fn dataset_to_csv(dataset: &Dataset) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;

    for (position, race) in dataset.races.iter().enumerate() {
        let race_number = race.display_number(position).to_string();
        for horse in &race.horses {
            writer.write_record(horse_record(&race_number, horse))?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {}", e))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// `<city>_analiz_<YYYY-MM-DD>.csv`
pub fn suggested_filename(city: &str, date: NaiveDate) -> String {
    format!("{}_analiz_{}.csv", city, date.format("%Y-%m-%d"))
}

fn horse_record(race_number: &str, horse: &Horse) -> [String; 6] {
    [
        race_number.to_string(),
        quoted(horse.number.as_deref().unwrap_or("")),
        quoted(horse.name.as_deref().unwrap_or(UNKNOWN_NAME)),
        quoted(horse.distance.as_deref().unwrap_or("")),
        quoted(horse.surface.as_deref().unwrap_or("")),
        format_score(horse.score),
    ]
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) if s.is_finite() => format!("{:.2}", s),
        _ => "0.00".to_string(),
    }
}
