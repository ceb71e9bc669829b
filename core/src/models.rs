use serde::{Deserialize, Deserializer, Serialize};

// Skjermuttrekk leverer segmentnummer som streng, eldre klienter som tall.
fn de_number_as_string<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(d)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(serde::de::Error::custom("ventet streng eller tall")),
    }
}

/// Ett fullført segment (split eller intervall) fra skjermuttrekket.
/// Kumulativ distanse kommer fra kilden; incremental_distance_m og watts
/// settes av reconcile-/analyze-passene og eies av segmentet alene.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Segment {
    #[serde(
        alias = "split_number",
        alias = "interval_number",
        deserialize_with = "de_number_as_string"
    )]
    pub number: String,
    /// Kumulativ distanse ved segmentslutt, slik kilden rapporterte den.
    #[serde(alias = "split_distance", alias = "interval_distance")]
    pub cumulative_distance_m: f64,
    #[serde(alias = "split_time", alias = "interval_time")]
    pub time: String,
    #[serde(alias = "split_pace", alias = "interval_pace")]
    pub pace: String,
    /// Takt (spm).
    pub rate: u32,
    #[serde(default)]
    pub hr: Option<u32>,
    #[serde(default)]
    pub rest_time: Option<String>,

    // Avledet. None = ugyldig/ukjent, aldri 0 som sentinel.
    #[serde(default)]
    pub incremental_distance_m: Option<f64>,
    #[serde(default)]
    pub watts: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutSummary {
    #[serde(alias = "total_distance")]
    pub total_distance_m: f64,
    pub total_time: String,
    pub average_split: String,
    pub average_rate: u32,
    #[serde(default)]
    pub average_hr: Option<u32>,
    #[serde(default)]
    pub average_watts: Option<f64>,
    // Kun satt for intervalløkter.
    #[serde(default)]
    pub total_intervals: Option<u32>,
    #[serde(default)]
    pub rest_time: Option<String>,
}

/// Hele økten. Tåler både "splits"- og "intervals"-form på wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workout {
    pub summary: WorkoutSummary,
    #[serde(alias = "splits", alias = "intervals")]
    pub segments: Vec<Segment>,
}
