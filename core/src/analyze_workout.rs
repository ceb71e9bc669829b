use log::debug;

use crate::metrics::{avg_hr, avg_watts, best_windows, series_stats, total_rest_secs};
use crate::models::Workout;
use crate::physics::{
    estimate_watts, format_duration_hms, format_duration_mss, pace_series_min_per_mile, RoundTo,
};
use crate::reconcile::{reconcile_distances, SegmentIssue};
use crate::types::{RecordReport, RecordSet};

/// Standardmetrikker for record-modus.
pub const DEFAULT_METRICS: [&str; 4] = ["power", "heart_rate", "speed", "cadence"];

/// To-fase pipeline for skjermavledede økter:
/// 1️⃣ avstem kumulativ -> inkrementell distanse
/// 2️⃣ én forover-pass som avleder watt per segment
/// deretter sammendrag over segmentene. Ingen lazy felt – rekkefølgen
/// er eksplisitt fordi watt avhenger av avstemte distanser.
pub fn analyze_workout(workout: &mut Workout) -> Vec<SegmentIssue> {
    let issues = reconcile_distances(&mut workout.segments);

    for seg in &mut workout.segments {
        seg.watts = match seg.incremental_distance_m {
            Some(d) => estimate_watts(&seg.pace, d),
            None => None,
        };
    }

    // Watt kan ikke leses av skjermen – alltid beregnet her, og kun over
    // segmenter med definert estimat.
    workout.summary.average_watts = avg_watts(&workout.segments).map(|w| w.round_to(1));

    // Skjermen er autoritativ der den rapporterte noe; fyll bare hull.
    if workout.summary.average_hr.is_none() {
        workout.summary.average_hr = avg_hr(&workout.segments).map(|h| h.round() as u32);
    }
    let is_interval = workout.segments.iter().any(|s| s.rest_time.is_some());
    if is_interval {
        if workout.summary.total_intervals.is_none() {
            workout.summary.total_intervals = Some(workout.segments.len() as u32);
        }
        if workout.summary.rest_time.is_none() {
            workout.summary.rest_time =
                total_rest_secs(&workout.segments).and_then(format_duration_mss);
        }
    }

    issues
}

/// Record-modus: stats + beste vinduer per ønsket metrikk, varighet fra
/// timestamp-serien, og pace (min/mile) avledet av timestamp + distance
/// når begge finnes. Metrikker uten data utelates fra rapporten.
pub fn analyze_records(records: &RecordSet, metrics: &[&str], windows: &[usize]) -> RecordReport {
    let mut report = RecordReport::default();

    let ts = records.collect_series("timestamp");
    if ts.len() >= 2 {
        let span = ts[ts.len() - 1] - ts[0];
        if span >= 0.0 {
            report.duration_sec = Some(span);
            report.duration = format_duration_hms(span);
        }
    }

    for &metric in metrics {
        let series = records.collect_series(metric);
        match series_stats(&series) {
            Some(stats) => {
                report.stats.insert(metric.to_string(), stats);
            }
            None => debug!("ingen data for metrikk '{}'", metric),
        }
        let bests = best_windows(&series, windows);
        if !bests.is_empty() {
            report.best_windows.insert(metric.to_string(), bests);
        }
    }

    if records.has_field("timestamp") && records.has_field("distance") {
        let points: Vec<(f64, f64)> = records
            .records
            .iter()
            .filter_map(|r| match (r.get("timestamp"), r.get("distance")) {
                (Some(t), Some(d)) => Some((t, d)),
                _ => None,
            })
            .collect();
        report.pace = series_stats(&pace_series_min_per_mile(&points));
    }

    report
}
