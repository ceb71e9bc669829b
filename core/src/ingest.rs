use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::debug;
use serde_json::Value;

use crate::counters;
use crate::types::{RawSample, RecordSet, SampleRecord};

/// Normaliserer rå samples til et RecordSet.
/// Feltskjemaet tas fra FØRSTE sample og holdes stabilt ut serien:
/// senere avvik fylles med None i stedet for å omforme skjemaet midtveis.
/// Feiler aldri – delvis telemetri er normaltilfellet.
pub fn ingest(raw: &[RawSample]) -> RecordSet {
    let fields: Vec<String> = match raw.first() {
        Some(first) => first.keys().cloned().collect(),
        None => return RecordSet::default(),
    };

    let mut records = Vec::with_capacity(raw.len());
    for (idx, sample) in raw.iter().enumerate() {
        let mut values = BTreeMap::new();
        for field in &fields {
            let parsed = match sample.get(field) {
                None | Some(Value::Null) => None, // sensorhull
                Some(v) => {
                    let p = coerce_f64(v);
                    if p.is_none() {
                        counters::samples_discarded_total().inc();
                        debug!("uparsbar verdi i '{}' ved record {}", field, idx);
                    }
                    p
                }
            };
            values.insert(field.clone(), parsed);
        }
        records.push(SampleRecord { idx, values });
    }

    RecordSet { fields, records }
}

/// Tallkoersjon: JSON-tall eller numerisk streng. Alt annet -> None.
fn coerce_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Elapsed sekunder fra ekte tidsstempler; første sample blir 0.0.
pub fn elapsed_seconds(timestamps: &[DateTime<Utc>]) -> Vec<f64> {
    let t0 = match timestamps.first() {
        Some(t) => *t,
        None => return Vec::new(),
    };
    timestamps
        .iter()
        .map(|t| (*t - t0).num_milliseconds() as f64 / 1000.0)
        .collect()
}
