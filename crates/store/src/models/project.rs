//! Project entity model and DTOs.

use railops_core::project::ProjectStatus;
use railops_core::types::{EntityId, Timestamp, UserId};
use serde::{Deserialize, Deserializer, Serialize};

use crate::collection::Entity;

/// A project owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub progress: u8,
    pub owner_id: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for Project {
    const NAME: &'static str = "Project";

    fn id(&self) -> &str {
        &self.id
    }
}

/// DTO for creating a new project. The owner comes from the session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `active` if omitted.
    pub status: Option<ProjectStatus>,
}

/// DTO for updating an existing project. All fields are optional; the
/// owner is not updatable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    /// `Some(None)` (an explicit `null`) clears the description.
    #[serde(default, deserialize_with = "present_or_null")]
    pub description: Option<Option<String>>,
    pub status: Option<ProjectStatus>,
    /// Validated to 0-100 before it reaches the store.
    pub progress: Option<i64>,
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field
/// (`None`, via `#[serde(default)]`).
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
