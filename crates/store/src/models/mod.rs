pub mod activity;
pub mod alert;
pub mod metrics;
pub mod notification;
pub mod project;
pub mod stats;
