//! Repository for the projects collection.

use chrono::Utc;
use railops_core::project::{ProjectStatus, MAX_PROGRESS};

use crate::error::StoreError;
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::{new_id, Store};

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Create a project owned by `owner_id`.
    ///
    /// Status defaults to `active` and progress starts at 0.
    pub async fn create(
        store: &Store,
        owner_id: &str,
        input: &CreateProject,
    ) -> Result<Project, StoreError> {
        let now = Utc::now();
        let project = Project {
            id: new_id(),
            name: input.name.clone(),
            description: input.description.clone(),
            status: input.status.unwrap_or_default(),
            progress: 0,
            owner_id: owner_id.to_string(),
            created_at: now,
            updated_at: now,
        };
        let mut projects = store.projects.write().await;
        projects.insert(project).cloned()
    }

    /// Find a project by id regardless of owner.
    pub async fn find_by_id(store: &Store, id: &str) -> Option<Project> {
        store.projects.read().await.get(id).cloned()
    }

    /// List projects owned by `owner_id` in creation order, optionally
    /// filtered by status.
    pub async fn list_for_owner(
        store: &Store,
        owner_id: &str,
        status: Option<ProjectStatus>,
    ) -> Vec<Project> {
        store
            .projects
            .read()
            .await
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .filter(|p| status.map_or(true, |s| p.status == s))
            .cloned()
            .collect()
    }

    /// Shallow-merge the provided fields. Returns `None` if the id is absent.
    pub async fn update(store: &Store, id: &str, input: &UpdateProject) -> Option<Project> {
        let mut projects = store.projects.write().await;
        let project = projects.get_mut(id)?;

        if let Some(name) = &input.name {
            project.name = name.clone();
        }
        if let Some(description) = &input.description {
            project.description = description.clone();
        }
        if let Some(status) = input.status {
            project.status = status;
        }
        if let Some(progress) = input.progress {
            project.progress = progress.clamp(0, i64::from(MAX_PROGRESS)) as u8;
        }
        project.updated_at = Utc::now();

        Some(project.clone())
    }

    /// Remove a project. Returns `true` if it existed.
    pub async fn delete(store: &Store, id: &str) -> bool {
        store.projects.write().await.remove(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(name: &str) -> CreateProject {
        CreateProject {
            name: name.to_string(),
            description: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn create_applies_defaults() {
        let store = Store::new();
        let project = ProjectRepo::create(&store, "u1", &create_input("Demo"))
            .await
            .unwrap();

        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.progress, 0);
        assert_eq!(project.owner_id, "u1");
        assert!(ProjectRepo::find_by_id(&store, &project.id).await.is_some());
    }

    #[tokio::test]
    async fn list_is_scoped_to_owner_and_ordered() {
        let store = Store::new();
        let a = ProjectRepo::create(&store, "u1", &create_input("A")).await.unwrap();
        ProjectRepo::create(&store, "u2", &create_input("Other")).await.unwrap();
        let b = ProjectRepo::create(&store, "u1", &create_input("B")).await.unwrap();

        let ids: Vec<_> = ProjectRepo::list_for_owner(&store, "u1", None)
            .await
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let store = Store::new();
        let mut input = create_input("Done");
        input.status = Some(ProjectStatus::Completed);
        ProjectRepo::create(&store, "u1", &input).await.unwrap();
        ProjectRepo::create(&store, "u1", &create_input("Live")).await.unwrap();

        let completed =
            ProjectRepo::list_for_owner(&store, "u1", Some(ProjectStatus::Completed)).await;
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].name, "Done");
    }

    #[tokio::test]
    async fn update_merges_and_keeps_identity() {
        let store = Store::new();
        let original = ProjectRepo::create(&store, "u1", &create_input("Old")).await.unwrap();

        let patch = UpdateProject {
            progress: Some(40),
            ..Default::default()
        };
        let updated = ProjectRepo::update(&store, &original.id, &patch).await.unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, "Old");
        assert_eq!(updated.progress, 40);
        assert_eq!(updated.owner_id, "u1");
        assert_eq!(updated.created_at, original.created_at);
    }

    #[tokio::test]
    async fn update_can_clear_description() {
        let store = Store::new();
        let mut input = create_input("Described");
        input.description = Some("Phase 2".into());
        let original = ProjectRepo::create(&store, "u1", &input).await.unwrap();

        let untouched = ProjectRepo::update(&store, &original.id, &UpdateProject::default())
            .await
            .unwrap();
        assert_eq!(untouched.description.as_deref(), Some("Phase 2"));

        let patch = UpdateProject {
            description: Some(None),
            ..Default::default()
        };
        let cleared = ProjectRepo::update(&store, &original.id, &patch).await.unwrap();
        assert_eq!(cleared.description, None);
    }

    #[tokio::test]
    async fn update_missing_id_does_not_mutate() {
        let store = Store::new();
        ProjectRepo::create(&store, "u1", &create_input("Keep")).await.unwrap();

        let patch = UpdateProject {
            name: Some("Changed".into()),
            ..Default::default()
        };
        assert!(ProjectRepo::update(&store, "missing", &patch).await.is_none());

        let all = ProjectRepo::list_for_owner(&store, "u1", None).await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Keep");
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let store = Store::new();
        let p = ProjectRepo::create(&store, "u1", &create_input("Bye")).await.unwrap();

        assert!(ProjectRepo::delete(&store, &p.id).await);
        assert!(ProjectRepo::find_by_id(&store, &p.id).await.is_none());
        assert!(!ProjectRepo::delete(&store, &p.id).await);
    }
}
