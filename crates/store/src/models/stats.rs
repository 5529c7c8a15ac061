//! Derived, read-only dashboard aggregates.

use railops_core::types::Timestamp;
use serde::Serialize;

/// Per-user summary counts shown on the dashboard landing page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: usize,
    pub active_projects: usize,
    pub completed_projects: usize,
    pub average_progress: f64,
    pub open_alerts: usize,
    pub critical_alerts: usize,
    pub unread_notifications: usize,
    pub activities_today: usize,
}

/// Fleet-wide health derived from the latest sample of every system.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetrics {
    pub systems_monitored: usize,
    pub healthy_systems: usize,
    pub health_pct: f64,
    pub average_cpu_usage: f64,
    pub average_memory_usage: f64,
    pub average_network_latency_ms: f64,
    pub average_uptime_pct: f64,
    pub computed_at: Timestamp,
}
