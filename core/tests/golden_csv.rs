use ergmetrics_core::{analyze_records, ingest, RawSample};

/// Leser fixture-CSV til rå samples: alle verdier som strenger, slik at
/// ingest-koersjonen gjør jobben (som når telemetri kommer fra tekstkilder).
fn read_fixture() -> Vec<RawSample> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/ride.csv");
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let headers = rdr.headers().unwrap().clone();

    let mut raw = Vec::new();
    for rec in rdr.records() {
        let rec = rec.unwrap();
        let mut sample = RawSample::new();
        for (h, v) in headers.iter().zip(rec.iter()) {
            sample.insert(h.to_string(), serde_json::Value::String(v.to_string()));
        }
        raw.push(sample);
    }
    raw
}

#[test]
fn golden_record_pipeline() {
    let records = ingest(&read_fixture());
    assert_eq!(records.records.len(), 12);

    let report = analyze_records(&records, &["power", "heart_rate"], &[5, 10]);

    assert_eq!(report.duration_sec, Some(11.0));
    assert_eq!(report.duration.as_deref(), Some("00:00:11"));

    // power rampes 100..210 i steg på 10
    let power = &report.stats["power"];
    assert_eq!(power.count, 12);
    assert_eq!(power.avg, 155.0);
    assert_eq!(power.min, 100.0);
    assert_eq!(power.max, 210.0);

    // beste 5-vindu er de 5 siste samplene, beste 10-vindu de 10 siste
    let power_bests = &report.best_windows["power"];
    assert_eq!(power_bests[&5], 190.0);
    assert_eq!(power_bests[&10], 165.0);

    let hr_bests = &report.best_windows["heart_rate"];
    assert_eq!(hr_bests[&5], 129.0);

    // distanse + timestamp finnes => pace-serien avledes
    assert_eq!(report.pace.unwrap().count, 11);
}
