// core/src/physics.rs

/// Empirisk konstant for watt-estimat (meter/sekund-enheter -> watt).
pub const WATTS_COEFF: f64 = 2.80;
pub const METERS_PER_MILE: f64 = 1609.34;

// --- RoundTo trait (offentlig, brukt av analyze-passene) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Parser varighetsstrenger: "2:05.1" -> 125.1, ":48.2" -> 48.2, "48.2" -> 48.2.
/// Minuttdelen før kolon er valgfri. Uparsbart gir None, aldri 0 –
/// en 0-fallback ville gjort "ikke en tid" til "øyeblikkelig" og
/// forgiftet snittberegningene nedstrøms.
pub fn parse_duration_secs(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let total = match s.split_once(':') {
        Some((min, sec)) => {
            let m = if min.is_empty() { 0.0 } else { min.parse::<f64>().ok()? };
            let sec = sec.parse::<f64>().ok()?;
            if m < 0.0 || sec < 0.0 {
                return None;
            }
            m * 60.0 + sec
        }
        None => {
            let v = s.parse::<f64>().ok()?;
            if v < 0.0 {
                return None;
            }
            v
        }
    };
    if total.is_finite() { Some(total) } else { None }
}

/// Watt fra segment-pace og faktisk segmentdistanse:
/// watts = 2.80 / (sek_per_meter)^3, avrundet til 1 desimal.
/// Distanse <= 0, tid <= 0 eller uparsbar pace gir None –
/// aldri et 0-estimat som ville gått inn i snittet.
pub fn estimate_watts(pace: &str, distance_m: f64) -> Option<f64> {
    if distance_m <= 0.0 {
        return None;
    }
    let secs = parse_duration_secs(pace)?;
    if secs <= 0.0 {
        return None;
    }
    let pace_per_m = secs / distance_m;
    let watts = WATTS_COEFF / pace_per_m.powi(3);
    if watts.is_finite() { Some(watts.round_to(1)) } else { None }
}

/// Pace-serie (min/mile) fra kumulative (t_sek, distanse_m)-par ordnet på tid.
/// Intervaller med dt <= 0 eller dd <= 0 bidrar ikke; uendelig pace forkastes.
pub fn pace_series_min_per_mile(points: &[(f64, f64)]) -> Vec<f64> {
    let mut out = Vec::new();
    for w in points.windows(2) {
        let dt_hours = (w[1].0 - w[0].0) / 3600.0;
        let dd_miles = (w[1].1 - w[0].1) / METERS_PER_MILE;
        if dt_hours <= 0.0 || dd_miles <= 0.0 {
            continue;
        }
        let speed_mph = dd_miles / dt_hours;
        let pace = 60.0 / speed_mph;
        if pace.is_finite() {
            out.push(pace);
        }
    }
    out
}

/// "HH:MM:SS" for rapporter.
pub fn format_duration_hms(secs: f64) -> Option<String> {
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    let total = secs.round() as u64;
    Some(format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    ))
}

/// "M:SS.s" for summert hviletid o.l. Regner i tideler for å unngå "1:60.0".
pub fn format_duration_mss(secs: f64) -> Option<String> {
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    let tenths = (secs * 10.0).round() as u64;
    Some(format!("{}:{:02}.{}", tenths / 600, (tenths % 600) / 10, tenths % 10))
}
