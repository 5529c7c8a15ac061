//! Hook trait, event envelope, and dispatcher.
//!
//! Hooks run after the primary write has been applied. They are not atomic
//! with it: a failing hook is logged and counted, and the primary entity
//! stays as written.

use std::sync::Arc;

use async_trait::async_trait;
use railops_core::types::UserId;
use railops_store::models::alert::Alert;
use railops_store::models::project::Project;
use railops_store::{Store, StoreError};

// ---------------------------------------------------------------------------
// StoreEvent
// ---------------------------------------------------------------------------

/// A committed mutation that hooks may react to.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    ProjectCreated { project: Project, actor: UserId },
    AlertCreated { alert: Alert, actor: UserId },
}

impl StoreEvent {
    /// Dot-separated event name, e.g. `"project.created"`.
    pub fn event_type(&self) -> &'static str {
        match self {
            StoreEvent::ProjectCreated { .. } => "project.created",
            StoreEvent::AlertCreated { .. } => "alert.created",
        }
    }

    pub fn actor(&self) -> &str {
        match self {
            StoreEvent::ProjectCreated { actor, .. } | StoreEvent::AlertCreated { actor, .. } => {
                actor
            }
        }
    }
}

// ---------------------------------------------------------------------------
// PostCommitHook
// ---------------------------------------------------------------------------

/// A secondary write triggered by a [`StoreEvent`].
///
/// Implementations ignore events they do not handle and return `Ok(false)`;
/// `Ok(true)` means the hook applied its effect.
#[async_trait]
pub trait PostCommitHook: Send + Sync {
    fn name(&self) -> &'static str;

    async fn on_commit(&self, store: &Store, event: &StoreEvent) -> Result<bool, StoreError>;
}

// ---------------------------------------------------------------------------
// HookRegistry
// ---------------------------------------------------------------------------

/// Outcome of a single dispatch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// Hooks that applied an effect.
    pub applied: Vec<&'static str>,
    /// Hooks that returned an error.
    pub failed: Vec<&'static str>,
}

/// Ordered list of hooks. Every hook sees every event exactly once per
/// dispatch, in registration order.
#[derive(Clone, Default)]
pub struct HookRegistry {
    hooks: Vec<Arc<dyn PostCommitHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in notification/activity hooks.
    pub fn with_builtin_hooks() -> Self {
        Self::new()
            .register(crate::builtin::ProjectCreatedHook)
            .register(crate::builtin::AlertCreatedHook)
    }

    pub fn register(mut self, hook: impl PostCommitHook + 'static) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every hook against `event`.
    ///
    /// Errors are logged and recorded in the report; they never stop the
    /// remaining hooks.
    pub async fn dispatch(&self, store: &Store, event: &StoreEvent) -> DispatchReport {
        let mut report = DispatchReport::default();
        for hook in &self.hooks {
            match hook.on_commit(store, event).await {
                Ok(true) => {
                    tracing::debug!(
                        hook = hook.name(),
                        event_type = event.event_type(),
                        actor = event.actor(),
                        "Post-commit hook applied"
                    );
                    report.applied.push(hook.name());
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        hook = hook.name(),
                        event_type = event.event_type(),
                        "Post-commit hook failed"
                    );
                    report.failed.push(hook.name());
                }
            }
        }
        report
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.hooks.iter().map(|h| h.name()))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
