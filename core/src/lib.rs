pub mod analyze_workout;
pub mod counters;
pub mod ingest;
pub mod metrics;
pub mod models;
pub mod physics;
pub mod reconcile;
pub mod types;

pub use analyze_workout::{analyze_records, analyze_workout, DEFAULT_METRICS};
pub use ingest::{elapsed_seconds, ingest};
pub use metrics::{avg_hr, avg_watts, best_window_avg, best_windows, series_stats, DEFAULT_BEST_WINDOWS};
pub use models::{Segment, Workout, WorkoutSummary};
pub use physics::{
    estimate_watts, parse_duration_secs, RoundTo, METERS_PER_MILE, WATTS_COEFF,
};
pub use reconcile::{reconcile_distances, SegmentIssue};
pub use types::{RawSample, RecordReport, RecordSet, SampleRecord, SeriesStats};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

/// Tolerant JSON-dekoding med sti i feilmeldingen.
fn from_json_str<T: DeserializeOwned>(s: &str) -> Result<T, String> {
    let mut de = serde_json::Deserializer::from_str(s);
    serde_path_to_error::deserialize(&mut de).map_err(|e| e.to_string())
}

/// JSON-grenseflate for skjermavledede økter (splits eller intervals).
/// Forventede datahull rapporteres i "issues" – aldri som Err; Err betyr
/// at selve inputen ikke lot seg dekode.
pub fn analyze_workout_json(workout_json: &str) -> Result<String, String> {
    let mut workout: Workout = from_json_str(workout_json)?;
    let issues = analyze_workout(&mut workout);

    let out = json!({
        "summary": workout.summary,
        "segments": workout.segments,
        "issues": issues.iter().map(|i| i.to_string()).collect::<Vec<_>>(),
    });
    serde_json::to_string(&out).map_err(|e| e.to_string())
}

#[derive(Debug, Default, Deserialize)]
struct RecordsCfg {
    #[serde(default)]
    metrics: Option<Vec<String>>,
    #[serde(default)]
    windows: Option<Vec<usize>>,
}

/// JSON-grenseflate for record-telemetri. `cfg_json` er valgfri:
/// {"metrics": ["power", ...], "windows": [60, 300, ...]}.
pub fn analyze_records_json(samples_json: &str, cfg_json: Option<&str>) -> Result<String, String> {
    let raw: Vec<RawSample> = from_json_str(samples_json)?;
    let cfg: RecordsCfg = match cfg_json {
        Some(s) => from_json_str(s)?,
        None => RecordsCfg::default(),
    };

    let records = ingest(&raw);
    let metric_names: Vec<String> = cfg
        .metrics
        .unwrap_or_else(|| DEFAULT_METRICS.iter().map(|m| m.to_string()).collect());
    let metric_refs: Vec<&str> = metric_names.iter().map(String::as_str).collect();
    let windows = cfg.windows.unwrap_or_else(|| DEFAULT_BEST_WINDOWS.to_vec());

    let report = analyze_records(&records, &metric_refs, &windows);
    serde_json::to_string(&report).map_err(|e| e.to_string())
}
