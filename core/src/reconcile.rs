use log::warn;
use thiserror::Error;

use crate::counters;
use crate::models::Segment;

/// Strukturelle brudd i segmentlisten. Indikerer upålitelig uttrekk
/// oppstrøms og skal videre til kalleren – ikke korrigeres i stillhet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SegmentIssue {
    #[error("kumulativ distanse synker ved segment {number}: {prev} -> {curr}")]
    DecreasingDistance { number: String, prev: f64, curr: f64 },
}

/// Kumulativ -> inkrementell distanse, i rekkefølge, med prev initiert til 0.
/// Negativ inkrementell betyr korrupt uttrekk: segmentet flagges og
/// incremental_distance_m forblir None, slik at watt-estimatet ikke
/// regnes på en fiktiv distanse. Ingen abs()-fiks.
/// Må kjøres FØR watt- og snittwatt-beregning.
pub fn reconcile_distances(segments: &mut [Segment]) -> Vec<SegmentIssue> {
    let mut issues = Vec::new();
    let mut prev = 0.0f64;

    for seg in segments.iter_mut() {
        let incremental = seg.cumulative_distance_m - prev;
        if incremental < 0.0 {
            warn!(
                "kumulativ distanse synker ved segment {}: {} -> {}",
                seg.number, prev, seg.cumulative_distance_m
            );
            counters::segments_flagged_total().inc();
            issues.push(SegmentIssue::DecreasingDistance {
                number: seg.number.clone(),
                prev,
                curr: seg.cumulative_distance_m,
            });
            seg.incremental_distance_m = None;
        } else {
            seg.incremental_distance_m = Some(incremental);
        }
        // Fortsett fra rapportert verdi også etter et flagget segment,
        // slik at resten av serien avstemmes mot det kilden faktisk viste.
        prev = seg.cumulative_distance_m;
    }

    issues
}
