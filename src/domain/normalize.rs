use log::{debug, warn};
use serde_json::{Map, Value};

use super::models::{Dataset, Horse, Race, SummaryStats};
use crate::errors::{json_type_name, InvalidDatasetError};

/// Turn a decoded backend response into a typed [`Dataset`].
///
/// Only the top-level shape is checked; every other field is optional and
/// collapses to `None` when missing, empty, or of the wrong type.
pub fn normalize_dataset(value: &Value) -> Result<Dataset, InvalidDatasetError> {
    let root = value
        .as_object()
        .ok_or_else(|| InvalidDatasetError::NotAnObject(json_type_name(value)))?;

    check_envelope(root)?;

    let races = match root.get("races") {
        None | Some(Value::Null) => return Err(InvalidDatasetError::MissingRaces),
        Some(Value::Array(races)) => races,
        Some(other) => {
            return Err(InvalidDatasetError::RacesNotSequence(json_type_name(other)));
        }
    };

    let races = races
        .iter()
        .enumerate()
        .map(|(idx, race)| normalize_race(idx, race))
        .collect();

    let summary_stats = root
        .get("summary_stats")
        .and_then(Value::as_object)
        .map(normalize_summary);

    Ok(Dataset {
        races,
        summary_stats,
    })
}

/// Reject a backend reply whose envelope reports `success: false`.
///
/// Replies without a `success` flag pass; the message comes from `message`,
/// then `error`.
pub fn check_backend_reply(value: &Value) -> Result<(), InvalidDatasetError> {
    let root = value
        .as_object()
        .ok_or_else(|| InvalidDatasetError::NotAnObject(json_type_name(value)))?;
    check_envelope(root)
}

fn check_envelope(root: &Map<String, Value>) -> Result<(), InvalidDatasetError> {
    if root.get("success") != Some(&Value::Bool(false)) {
        return Ok(());
    }

    let message = text_field(root, "message")
        .or_else(|| text_field(root, "error"))
        .unwrap_or_else(|| "no result returned".to_string());
    Err(InvalidDatasetError::BackendRejected(message))
}

fn normalize_race(idx: usize, value: &Value) -> Race {
    let Some(race) = value.as_object() else {
        warn!("Race at position {} is not an object; treating it as empty", idx + 1);
        return Race {
            race_number: None,
            horses: Vec::new(),
        };
    };

    let horses = match race.get("horses") {
        Some(Value::Array(horses)) => horses.iter().map(normalize_horse).collect(),
        _ => {
            warn!("Race at position {} has no horse list", idx + 1);
            Vec::new()
        }
    };

    Race {
        race_number: race.get("race_number").and_then(positive_integer),
        horses,
    }
}

fn normalize_horse(value: &Value) -> Horse {
    let Some(horse) = value.as_object() else {
        debug!("Skipping fields of non-object horse entry: {}", value);
        return Horse::default();
    };

    Horse {
        number: identifier_field(horse, "number"),
        name: text_field(horse, "name"),
        score: numeric_field(horse, "score"),
        distance: text_field(horse, "distance"),
        surface: identifier_field(horse, "surface"),
        win_chance: numeric_field(horse, "win_chance"),
        jockey: text_field(horse, "jockey"),
        trainer: text_field(horse, "trainer"),
        form: text_field(horse, "form"),
        finish_position: text_field(horse, "finish_position"),
    }
}

fn normalize_summary(stats: &Map<String, Value>) -> SummaryStats {
    SummaryStats {
        total_races: count_field(stats, "total_races"),
        total_horses: count_field(stats, "total_horses"),
        avg_score: numeric_field(stats, "avg_score"),
        top_horses: count_field(stats, "top_horses"),
    }
}

// --- Field helpers ---

/// Non-empty string, or the text of a number.
fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        _ => None,
    }
}

/// `5.0` reads as `5`; other numbers keep their JSON text.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        _ => n.to_string(),
    }
}

/// Like [`text_field`], but a numeric zero counts as absent.
fn identifier_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        _ => text_field(obj, key),
    }
}

/// Finite number, or a string holding one.
fn numeric_field(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    let parsed = match obj.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn count_field(obj: &Map<String, Value>, key: &str) -> Option<u64> {
    numeric_field(obj, key)
        .filter(|v| *v >= 0.0)
        .map(|v| v as u64)
}

fn positive_integer(value: &Value) -> Option<u32> {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed
        .filter(|n| *n > 0)
        .and_then(|n| u32::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejects_missing_races() {
        let err = normalize_dataset(&json!({"summary_stats": {}})).unwrap_err();
        assert_eq!(err, InvalidDatasetError::MissingRaces);
    }

    #[test]
    fn test_rejects_races_not_sequence() {
        let err = normalize_dataset(&json!({"races": "none"})).unwrap_err();
        assert_eq!(err, InvalidDatasetError::RacesNotSequence("string"));
    }

    #[test]
    fn test_rejects_non_object() {
        let err = normalize_dataset(&json!([1, 2])).unwrap_err();
        assert_eq!(err, InvalidDatasetError::NotAnObject("array"));
    }

    #[test]
    fn test_backend_failure_envelope() {
        let err = normalize_dataset(&json!({"success": false, "message": "İşlem hatası"}))
            .unwrap_err();
        assert_eq!(err, InvalidDatasetError::BackendRejected("İşlem hatası".to_string()));

        let err = normalize_dataset(&json!({"success": false, "error": "boom"})).unwrap_err();
        assert_eq!(err, InvalidDatasetError::BackendRejected("boom".to_string()));
    }

    #[test]
    fn test_backend_reply_without_races() {
        assert!(check_backend_reply(&json!({"has_data": false})).is_ok());
        assert!(check_backend_reply(&json!({"success": true, "message": "ok"})).is_ok());

        let err = check_backend_reply(&json!({"success": false})).unwrap_err();
        assert_eq!(err, InvalidDatasetError::BackendRejected("no result returned".to_string()));

        let err = check_backend_reply(&json!("down")).unwrap_err();
        assert_eq!(err, InvalidDatasetError::NotAnObject("string"));
    }

    #[test]
    fn test_success_envelope_is_accepted() {
        let dataset = normalize_dataset(&json!({"success": true, "races": []})).unwrap();
        assert!(dataset.races.is_empty());
        assert!(dataset.summary_stats.is_none());
    }

    #[test]
    fn test_race_number_forms() {
        let dataset = normalize_dataset(&json!({
            "races": [
                {"race_number": 3, "horses": []},
                {"race_number": "5", "horses": []},
                {"race_number": 0, "horses": []},
                {"race_number": "R2", "horses": []},
                {"horses": []}
            ]
        }))
        .unwrap();

        let numbers: Vec<Option<u32>> = dataset.races.iter().map(|r| r.race_number).collect();
        assert_eq!(numbers, vec![Some(3), Some(5), None, None, None]);
    }

    #[test]
    fn test_missing_horse_list_becomes_empty_race() {
        let dataset = normalize_dataset(&json!({"races": [{"race_number": 1}, 42]})).unwrap();
        assert_eq!(dataset.races.len(), 2);
        assert!(dataset.races.iter().all(|r| r.horses.is_empty()));
    }

    #[test]
    fn test_horse_fields() {
        let dataset = normalize_dataset(&json!({
            "races": [{
                "horses": [
                    {"number": 5, "name": "Test At", "score": 1.5, "distance": "1400m", "surface": 1},
                    {"number": "", "name": "", "score": null, "surface": "Kum", "win_chance": "12.5"},
                    {"number": 0, "score": "abc"},
                    "garbage"
                ]
            }]
        }))
        .unwrap();

        let horses = &dataset.races[0].horses;
        assert_eq!(horses.len(), 4);

        assert_eq!(horses[0].number.as_deref(), Some("5"));
        assert_eq!(horses[0].name.as_deref(), Some("Test At"));
        assert_eq!(horses[0].score, Some(1.5));
        assert_eq!(horses[0].distance.as_deref(), Some("1400m"));
        assert_eq!(horses[0].surface.as_deref(), Some("1"));

        assert_eq!(horses[1].number, None);
        assert_eq!(horses[1].name, None);
        assert_eq!(horses[1].score, None);
        assert_eq!(horses[1].surface.as_deref(), Some("Kum"));
        assert_eq!(horses[1].win_chance, Some(12.5));

        assert_eq!(horses[2].number, None);
        assert_eq!(horses[2].score, None);

        assert_eq!(horses[3], Horse::default());
    }

    #[test]
    fn test_integral_floats_lose_fraction() {
        let dataset = normalize_dataset(&json!({
            "races": [{
                "horses": [
                    {"number": 5.0, "distance": 1400.0, "form": 1.5},
                    {"number": -3.0, "surface": 2}
                ]
            }]
        }))
        .unwrap();

        let horses = &dataset.races[0].horses;
        assert_eq!(horses[0].number.as_deref(), Some("5"));
        assert_eq!(horses[0].distance.as_deref(), Some("1400"));
        assert_eq!(horses[0].form.as_deref(), Some("1.5"));
        assert_eq!(horses[1].number.as_deref(), Some("-3"));
        assert_eq!(horses[1].surface.as_deref(), Some("2"));
    }

    #[test]
    fn test_summary_stats_passthrough() {
        let dataset = normalize_dataset(&json!({
            "races": [],
            "summary_stats": {"total_races": 8, "total_horses": 64, "avg_score": 4.25}
        }))
        .unwrap();

        let stats = dataset.summary_stats.unwrap();
        assert_eq!(stats.total_races, Some(8));
        assert_eq!(stats.total_horses, Some(64));
        assert_eq!(stats.avg_score, Some(4.25));
        assert_eq!(stats.top_horses, None);
    }
}
