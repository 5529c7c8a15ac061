//! Repository layer: one unit struct per entity type.

pub mod activity_repo;
pub mod alert_repo;
pub mod metric_repo;
pub mod notification_repo;
pub mod project_repo;
pub mod stats_repo;

pub use activity_repo::ActivityRepo;
pub use alert_repo::AlertRepo;
pub use metric_repo::MetricRepo;
pub use notification_repo::NotificationRepo;
pub use project_repo::ProjectRepo;
pub use stats_repo::StatsRepo;
