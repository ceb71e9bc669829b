use ergmetrics_core::models::Segment;
use ergmetrics_core::{reconcile_distances, SegmentIssue};

fn seg(number: &str, cumulative: f64) -> Segment {
    Segment {
        number: number.to_string(),
        cumulative_distance_m: cumulative,
        time: "1:45.0".to_string(),
        pace: "1:45.0".to_string(),
        rate: 28,
        ..Default::default()
    }
}

#[test]
fn test_incrementals_telescope_to_final_cumulative() {
    let mut segments = vec![seg("1", 500.0), seg("2", 1000.0), seg("3", 1500.0)];
    let issues = reconcile_distances(&mut segments);
    assert!(issues.is_empty());

    let sum: f64 = segments
        .iter()
        .map(|s| s.incremental_distance_m.unwrap())
        .sum();
    assert_eq!(sum, 1500.0); // eksakt for heltallsdistanser
    assert_eq!(segments[0].incremental_distance_m, Some(500.0));
}

#[test]
fn test_first_segment_measured_from_zero() {
    let mut segments = vec![seg("1", 437.0)];
    reconcile_distances(&mut segments);
    assert_eq!(segments[0].incremental_distance_m, Some(437.0));
}

#[test]
fn test_decreasing_cumulative_flags_segment() {
    // 500 -> 400 er korrupt uttrekk: segment 2 flagges, ingen abs()-fiks
    let mut segments = vec![seg("1", 500.0), seg("2", 400.0), seg("3", 900.0)];
    let issues = reconcile_distances(&mut segments);

    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0],
        SegmentIssue::DecreasingDistance {
            number: "2".to_string(),
            prev: 500.0,
            curr: 400.0,
        }
    );

    assert_eq!(segments[0].incremental_distance_m, Some(500.0));
    assert_eq!(segments[1].incremental_distance_m, None);
    // resten av serien avstemmes videre fra rapportert verdi
    assert_eq!(segments[2].incremental_distance_m, Some(500.0));
}

#[test]
fn test_zero_length_segment_is_not_an_issue() {
    // uendret kumulativ er lovlig (f.eks. pause) – inkrementell 0, ikke flagg
    let mut segments = vec![seg("1", 500.0), seg("2", 500.0)];
    let issues = reconcile_distances(&mut segments);
    assert!(issues.is_empty());
    assert_eq!(segments[1].incremental_distance_m, Some(0.0));
}
