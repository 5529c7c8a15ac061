//! Activity feed entries.

use railops_core::activity::{relative_time_label, ActivityStatus};
use railops_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::collection::Entity;

/// An append-only activity record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: EntityId,
    pub action: String,
    pub system: String,
    pub status: ActivityStatus,
    pub created_at: Timestamp,
}

impl Entity for Activity {
    const NAME: &'static str = "Activity";

    fn id(&self) -> &str {
        &self.id
    }
}

/// DTO for appending an activity.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActivity {
    pub action: String,
    pub system: String,
    pub status: ActivityStatus,
}

/// An activity as shown in the feed, with its age rendered as a label.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    #[serde(flatten)]
    pub activity: Activity,
    pub time: String,
}

impl ActivityEntry {
    pub fn new(activity: Activity, now: Timestamp) -> Self {
        let time = relative_time_label(activity.created_at, now);
        Self { activity, time }
    }
}
