use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use crate::models::Segment;
use crate::physics::parse_duration_secs;
use crate::types::SeriesStats;

/// Standard vinduslengder (samples, ~sekunder ved 1 Hz): 1/5/10/20 min.
pub const DEFAULT_BEST_WINDOWS: [usize; 4] = [60, 300, 600, 1200];

/// Beste snitt over noe sammenhengende vindu på `window` samples:
/// 1) summer de første `window` verdiene
/// 2) glid vinduet – trekk fra den som går ut, legg til den som kommer inn
/// 3) del maks-summen på `window` til slutt
/// O(n) uavhengig av vinduslengde. For kort serie gir None, ikke feil.
pub fn best_window_avg(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }
    let mut sum: f64 = values[..window].iter().sum();
    let mut best = sum;
    for i in window..values.len() {
        sum += values[i] - values[i - window];
        if sum > best {
            best = sum;
        }
    }
    Some(best / window as f64)
}

/// Én lineær pass per ønsket vinduslengde; lengder serien ikke dekker
/// utelates fra resultatet.
pub fn best_windows(values: &[f64], windows: &[usize]) -> BTreeMap<usize, f64> {
    let mut out = BTreeMap::new();
    for &w in windows {
        if let Some(avg) = best_window_avg(values, w) {
            out.insert(w, avg);
        }
    }
    out
}

/// count/avg/max/min for en serie. Tom serie -> None.
pub fn series_stats(values: &[f64]) -> Option<SeriesStats> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    let max = values.iter().copied().map(OrderedFloat).max()?.into_inner();
    let min = values.iter().copied().map(OrderedFloat).min()?.into_inner();
    Some(SeriesStats {
        count: values.len(),
        avg: sum / values.len() as f64,
        max,
        min,
    })
}

/// Snittwatt over segmenter MED definert watt. Segmenter uten gyldig
/// estimat holdes utenfor nevneren – de telles ikke som 0.
pub fn avg_watts(segments: &[Segment]) -> Option<f64> {
    let mut sum = 0.0f64;
    let mut cnt = 0usize;
    for s in segments {
        if let Some(w) = s.watts {
            sum += w;
            cnt += 1;
        }
    }
    if cnt == 0 { None } else { Some(sum / cnt as f64) }
}

/// Snittpuls over segmenter som rapporterer puls.
pub fn avg_hr(segments: &[Segment]) -> Option<f64> {
    let mut sum = 0.0f64;
    let mut cnt = 0usize;
    for s in segments {
        if let Some(h) = s.hr {
            sum += h as f64;
            cnt += 1;
        }
    }
    if cnt == 0 { None } else { Some(sum / cnt as f64) }
}

/// Summert hviletid (sek) over segmenter med parsebar rest_time.
pub fn total_rest_secs(segments: &[Segment]) -> Option<f64> {
    let mut sum = 0.0f64;
    let mut cnt = 0usize;
    for s in segments {
        if let Some(r) = s.rest_time.as_deref().and_then(parse_duration_secs) {
            sum += r;
            cnt += 1;
        }
    }
    if cnt == 0 { None } else { Some(sum) }
}
