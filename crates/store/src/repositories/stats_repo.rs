//! Derived dashboard aggregates, recomputed from current state on every call.

use std::collections::HashSet;

use chrono::Utc;
use railops_core::alert::{AlertStatus, SEVERITY_CRITICAL};
use railops_core::project::ProjectStatus;

use crate::models::metrics::MetricSample;
use crate::models::stats::{DashboardStats, SystemMetrics};
use crate::repositories::{ActivityRepo, MetricRepo, NotificationRepo, ProjectRepo};
use crate::Store;

pub struct StatsRepo;

impl StatsRepo {
    /// Summary counts for `user_id`'s dashboard.
    ///
    /// Collections are read one after another; the result is not a
    /// consistent snapshot across collections.
    pub async fn dashboard_stats(store: &Store, user_id: &str) -> DashboardStats {
        let (total_projects, active_projects, completed_projects, average_progress) = {
            let owned = ProjectRepo::list_for_owner(store, user_id, None).await;
            let count_status =
                |status: ProjectStatus| owned.iter().filter(|p| p.status == status).count();
            let average = if owned.is_empty() {
                0.0
            } else {
                owned.iter().map(|p| f64::from(p.progress)).sum::<f64>() / owned.len() as f64
            };
            (
                owned.len(),
                count_status(ProjectStatus::Active),
                count_status(ProjectStatus::Completed),
                average,
            )
        };

        let (open_alerts, critical_alerts) = {
            let alerts = store.alerts.read().await;
            let open: Vec<_> = alerts
                .iter()
                .filter(|a| a.status == AlertStatus::Open)
                .collect();
            let critical = open
                .iter()
                .filter(|a| a.severity == SEVERITY_CRITICAL)
                .count();
            (open.len(), critical)
        };

        let unread_notifications = NotificationRepo::unread_count(store, user_id).await;

        let start_of_day = Utc::now()
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc());
        let activities_today = match start_of_day {
            Some(start) => ActivityRepo::count_since(store, start).await,
            None => ActivityRepo::count(store).await,
        };

        DashboardStats {
            total_projects,
            active_projects,
            completed_projects,
            average_progress,
            open_alerts,
            critical_alerts,
            unread_notifications,
            activities_today,
        }
    }

    /// Fleet health from the latest sample of every monitored system.
    ///
    /// A system counts as healthy when it has no open alert.
    pub async fn latest_metrics(store: &Store) -> SystemMetrics {
        let samples = MetricRepo::latest_per_system(store).await;

        let alerting: HashSet<String> = store
            .alerts
            .read()
            .await
            .iter()
            .filter(|a| a.status == AlertStatus::Open)
            .map(|a| a.system.clone())
            .collect();

        let systems_monitored = samples.len();
        let healthy_systems = samples
            .iter()
            .filter(|s| !alerting.contains(&s.system))
            .count();

        let health_pct = if systems_monitored == 0 {
            100.0
        } else {
            healthy_systems as f64 * 100.0 / systems_monitored as f64
        };

        SystemMetrics {
            systems_monitored,
            healthy_systems,
            health_pct,
            average_cpu_usage: mean(&samples, |s| s.cpu_usage),
            average_memory_usage: mean(&samples, |s| s.memory_usage),
            average_network_latency_ms: mean(&samples, |s| s.network_latency_ms),
            average_uptime_pct: mean(&samples, |s| s.uptime_pct),
            computed_at: Utc::now(),
        }
    }
}

fn mean(samples: &[MetricSample], field: impl Fn(&MetricSample) -> f64) -> f64 {
    if samples.is_empty() {
        0.0
    } else {
        samples.iter().map(field).sum::<f64>() / samples.len() as f64
    }
}
