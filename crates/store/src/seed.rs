//! Demo data loaded at startup when `SEED_DEMO_DATA` is enabled.
//!
//! Seeds only the globally visible collections (alerts, activities, metric
//! samples). Projects and notifications are per-user and start empty.

use railops_core::activity::ActivityStatus;
use railops_core::alert::{SEVERITY_HIGH, SEVERITY_LOW, SEVERITY_MEDIUM};

use crate::error::StoreError;
use crate::models::activity::CreateActivity;
use crate::models::alert::CreateAlert;
use crate::models::metrics::NewMetricSample;
use crate::repositories::{ActivityRepo, AlertRepo, MetricRepo};
use crate::Store;

/// Counts of seeded records, for the startup log line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub alerts: usize,
    pub activities: usize,
    pub metric_samples: usize,
}

/// (system, cpu %, memory %, latency ms, uptime %)
const SYSTEMS: &[(&str, f64, f64, f64, f64)] = &[
    ("Signalling", 42.0, 61.5, 18.0, 99.97),
    ("Track Circuits", 35.5, 48.0, 22.5, 99.92),
    ("Power Supply", 58.0, 70.2, 9.5, 99.99),
    ("Level Crossings", 27.0, 39.8, 31.0, 99.85),
    ("Telecoms", 64.5, 72.0, 14.0, 99.90),
];

const ALERTS: &[(&str, &str, &str, &str)] = &[
    (
        "Axle counter reset required",
        "Section AC-112 reports a disturbed state after maintenance",
        SEVERITY_HIGH,
        "Track Circuits",
    ),
    (
        "Feeder voltage fluctuation",
        "Substation 7 feeder outside nominal band for 4 minutes",
        SEVERITY_MEDIUM,
        "Power Supply",
    ),
    (
        "Barrier cycle time degraded",
        "LX-23 barrier lowering took 14s against a 10s target",
        SEVERITY_LOW,
        "Level Crossings",
    ),
];

const ACTIVITIES: &[(&str, &str, ActivityStatus)] = &[
    ("Interlocking data verified", "Signalling", ActivityStatus::Success),
    ("Scheduled track inspection logged", "Track Circuits", ActivityStatus::Info),
    ("Backup radio link failover tested", "Telecoms", ActivityStatus::Warning),
];

/// Populate `store` with demo alerts, activities, and metric samples.
pub async fn seed_demo_data(store: &Store) -> Result<SeedSummary, StoreError> {
    let mut summary = SeedSummary::default();

    for &(system, cpu_usage, memory_usage, network_latency_ms, uptime_pct) in SYSTEMS {
        let sample = NewMetricSample {
            system: system.to_string(),
            cpu_usage,
            memory_usage,
            network_latency_ms,
            uptime_pct,
        };
        MetricRepo::record(store, &sample).await?;
        summary.metric_samples += 1;
    }

    for &(title, message, severity, system) in ALERTS {
        let input = CreateAlert {
            title: title.to_string(),
            message: message.to_string(),
            severity: severity.to_string(),
            system: system.to_string(),
        };
        AlertRepo::create(store, &input).await?;
        summary.alerts += 1;
    }

    for &(action, system, status) in ACTIVITIES {
        let input = CreateActivity {
            action: action.to_string(),
            system: system.to_string(),
            status,
        };
        ActivityRepo::create(store, &input).await?;
        summary.activities += 1;
    }

    tracing::debug!(?summary, "Demo data seeded");
    Ok(summary)
}
