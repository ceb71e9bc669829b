use once_cell::sync::Lazy;
use prometheus::{IntCounter, Registry};

/// Prosessvide datakvalitetstellere. Registry eksponeres slik at en
/// omkringliggende tjeneste kan scrape den sammen med sine egne.
pub struct Counters {
    pub registry: Registry,
    samples_discarded: IntCounter,
    segments_flagged: IntCounter,
}

impl Counters {
    fn new() -> Self {
        let registry = Registry::new();
        let samples_discarded = IntCounter::new(
            "ergmetrics_samples_discarded_total",
            "Uparsbare feltverdier forkastet under ingest",
        )
        .expect("gyldig tellernavn");
        let segments_flagged = IntCounter::new(
            "ergmetrics_segments_flagged_total",
            "Segmenter flagget for strukturbrudd under avstandsavstemming",
        )
        .expect("gyldig tellernavn");

        registry
            .register(Box::new(samples_discarded.clone()))
            .expect("teller registrert");
        registry
            .register(Box::new(segments_flagged.clone()))
            .expect("teller registrert");

        Self {
            registry,
            samples_discarded,
            segments_flagged,
        }
    }
}

static COUNTERS: Lazy<Counters> = Lazy::new(Counters::new);

pub fn counters() -> &'static Counters {
    &COUNTERS
}

pub fn samples_discarded_total() -> &'static IntCounter {
    &COUNTERS.samples_discarded
}

pub fn segments_flagged_total() -> &'static IntCounter {
    &COUNTERS.segments_flagged
}
