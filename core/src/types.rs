use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rå sample slik kilden leverer den: feltnavn -> JSON-verdi.
pub type RawSample = BTreeMap<String, serde_json::Value>;

/// Én normalisert prøve. Uparsbare felt blir None, aldri 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRecord {
    pub idx: usize,
    pub values: BTreeMap<String, Option<f64>>,
}

impl SampleRecord {
    pub fn get(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied().flatten()
    }
}

/// Normalisert opptak: feltskjema fra første sample + alle records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    pub fields: Vec<String>,
    pub records: Vec<SampleRecord>,
}

impl RecordSet {
    /// Gap-fri visning av én metrikk. Engangs-iterator; kall på nytt
    /// for å iterere på nytt.
    pub fn metric_series<'a>(&'a self, field: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.records.iter().filter_map(move |r| r.get(field))
    }

    pub fn collect_series(&self, field: &str) -> Vec<f64> {
        self.metric_series(field).collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

/// count = 0 rapporteres som fraværende stats, ikke som nuller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub count: usize,
    pub avg: f64,
    pub max: f64,
    pub min: f64,
}

/// Sammendrag for record-modus (enhets-telemetri).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordReport {
    pub duration_sec: Option<f64>,
    /// "HH:MM:SS", avledet av timestamp-serien.
    pub duration: Option<String>,
    pub stats: BTreeMap<String, SeriesStats>,
    /// metrikk -> vinduslengde (samples) -> beste snitt.
    pub best_windows: BTreeMap<String, BTreeMap<usize, f64>>,
    /// min/mile, avledet av timestamp + distance når begge finnes.
    pub pace: Option<SeriesStats>,
}
