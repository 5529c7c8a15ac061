//! Raw per-system metric samples.

use railops_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::collection::Entity;

/// One telemetry reading for a monitored system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSample {
    pub id: EntityId,
    pub system: String,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub network_latency_ms: f64,
    pub uptime_pct: f64,
    pub recorded_at: Timestamp,
}

impl Entity for MetricSample {
    const NAME: &'static str = "MetricSample";

    fn id(&self) -> &str {
        &self.id
    }
}

/// DTO for recording a sample.
#[derive(Debug, Clone)]
pub struct NewMetricSample {
    pub system: String,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub network_latency_ms: f64,
    pub uptime_pct: f64,
}
