//! Repository for raw metric samples.

use chrono::Utc;
use indexmap::IndexMap;

use crate::error::StoreError;
use crate::models::metrics::{MetricSample, NewMetricSample};
use crate::{new_id, Store};

pub struct MetricRepo;

impl MetricRepo {
    pub async fn record(store: &Store, input: &NewMetricSample) -> Result<MetricSample, StoreError> {
        let sample = MetricSample {
            id: new_id(),
            system: input.system.clone(),
            cpu_usage: input.cpu_usage,
            memory_usage: input.memory_usage,
            network_latency_ms: input.network_latency_ms,
            uptime_pct: input.uptime_pct,
            recorded_at: Utc::now(),
        };
        store.metrics.write().await.insert(sample).cloned()
    }

    /// The most recently recorded sample of each system, ordered by the
    /// first time each system reported.
    pub async fn latest_per_system(store: &Store) -> Vec<MetricSample> {
        let metrics = store.metrics.read().await;
        let mut latest: IndexMap<&str, &MetricSample> = IndexMap::new();
        for sample in metrics.iter() {
            latest.insert(sample.system.as_str(), sample);
        }
        latest.into_values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(system: &str, cpu: f64) -> NewMetricSample {
        NewMetricSample {
            system: system.into(),
            cpu_usage: cpu,
            memory_usage: 50.0,
            network_latency_ms: 12.0,
            uptime_pct: 99.9,
        }
    }

    #[tokio::test]
    async fn latest_sample_wins_per_system() {
        let store = Store::new();
        MetricRepo::record(&store, &sample("Signalling", 10.0)).await.unwrap();
        MetricRepo::record(&store, &sample("Power", 20.0)).await.unwrap();
        MetricRepo::record(&store, &sample("Signalling", 30.0)).await.unwrap();

        let latest = MetricRepo::latest_per_system(&store).await;
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].system, "Signalling");
        assert_eq!(latest[0].cpu_usage, 30.0);
        assert_eq!(latest[1].system, "Power");
    }
}
