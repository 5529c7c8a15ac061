//! Built-in fan-out hooks.
//!
//! These are the only mutations that trigger secondary writes:
//!
//! | Event            | Notification                          | Activity |
//! |------------------|---------------------------------------|----------|
//! | project created  | `success`, to the creator             | yes      |
//! | alert created    | `error` if critical/high, else `warning`, to the actor | no |

use async_trait::async_trait;
use railops_core::activity::ActivityStatus;
use railops_core::alert::notification_kind_for_severity;
use railops_core::notification::NotificationKind;
use railops_store::models::activity::CreateActivity;
use railops_store::repositories::{ActivityRepo, NotificationRepo};
use railops_store::{Store, StoreError};

use crate::hooks::{PostCommitHook, StoreEvent};

/// System label recorded on project activities.
pub const PROJECTS_SYSTEM: &str = "Projects";

/// Notifies the creator of a new project and logs it to the activity feed.
pub struct ProjectCreatedHook;

#[async_trait]
impl PostCommitHook for ProjectCreatedHook {
    fn name(&self) -> &'static str {
        "project_created"
    }

    async fn on_commit(&self, store: &Store, event: &StoreEvent) -> Result<bool, StoreError> {
        let StoreEvent::ProjectCreated { project, actor } = event else {
            return Ok(false);
        };

        NotificationRepo::notify(
            store,
            actor,
            NotificationKind::Success,
            "Project Created",
            format!("Project \"{}\" has been created successfully", project.name),
            Some(format!("/projects/{}", project.id)),
        )
        .await?;

        let activity = CreateActivity {
            action: format!("Project \"{}\" created", project.name),
            system: PROJECTS_SYSTEM.to_string(),
            status: ActivityStatus::Success,
        };
        ActivityRepo::create(store, &activity).await?;

        Ok(true)
    }
}

/// Notifies the acting user of a newly raised alert.
pub struct AlertCreatedHook;

#[async_trait]
impl PostCommitHook for AlertCreatedHook {
    fn name(&self) -> &'static str {
        "alert_created"
    }

    async fn on_commit(&self, store: &Store, event: &StoreEvent) -> Result<bool, StoreError> {
        let StoreEvent::AlertCreated { alert, actor } = event else {
            return Ok(false);
        };

        NotificationRepo::notify(
            store,
            actor,
            notification_kind_for_severity(&alert.severity),
            format!("New Alert: {}", alert.title),
            alert.message.clone(),
            Some("/alerts".to_string()),
        )
        .await?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use railops_store::models::alert::CreateAlert;
    use railops_store::models::project::CreateProject;
    use railops_store::repositories::{AlertRepo, ProjectRepo};

    use super::*;
    use crate::hooks::HookRegistry;

    async fn raise_alert(store: &Store, registry: &HookRegistry, severity: &str) {
        let input = CreateAlert {
            title: "Signal passed at danger".into(),
            message: "SPAD recorded at signal BN42".into(),
            severity: severity.into(),
            system: "Signalling".into(),
        };
        let alert = AlertRepo::create(store, &input).await.unwrap();
        registry
            .dispatch(
                store,
                &StoreEvent::AlertCreated {
                    alert,
                    actor: "controller".into(),
                },
            )
            .await;
    }

    #[tokio::test]
    async fn project_creation_fans_out_one_notification_and_one_activity() {
        let store = Store::new();
        let registry = HookRegistry::with_builtin_hooks();
        let input = CreateProject {
            name: "Demo".into(),
            description: None,
            status: None,
        };
        let project = ProjectRepo::create(&store, "u1", &input).await.unwrap();

        let report = registry
            .dispatch(
                &store,
                &StoreEvent::ProjectCreated {
                    project: project.clone(),
                    actor: "u1".into(),
                },
            )
            .await;
        assert_eq!(report.applied, vec!["project_created"]);

        let notifications = NotificationRepo::list_for_user(&store, "u1", false).await;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::Success);
        assert_eq!(
            notifications[0].action_url.as_deref(),
            Some(format!("/projects/{}", project.id).as_str())
        );

        let activities = ActivityRepo::list(&store, 10).await;
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].system, PROJECTS_SYSTEM);
        assert!(activities[0].action.contains("Demo"));
    }

    #[tokio::test]
    async fn alert_severity_selects_notification_kind() {
        let store = Store::new();
        let registry = HookRegistry::with_builtin_hooks();

        for (severity, expected) in [
            ("critical", NotificationKind::Error),
            ("high", NotificationKind::Error),
            ("medium", NotificationKind::Warning),
            ("low", NotificationKind::Warning),
        ] {
            raise_alert(&store, &registry, severity).await;
            let latest = NotificationRepo::list_for_user(&store, "controller", false)
                .await
                .into_iter()
                .next()
                .unwrap();
            assert_eq!(latest.kind, expected, "severity {severity}");
        }

        assert_eq!(ActivityRepo::count(&store).await, 0);
    }
}
