pub mod activity;
pub mod alert;
pub mod notification;
pub mod project;
pub mod stats;
pub mod version;
