//! Post-commit side effects for dashboard mutations.
//!
//! - [`StoreEvent`] -- what happened, and who did it.
//! - [`PostCommitHook`] -- a secondary write run after a primary mutation.
//! - [`HookRegistry`] -- the ordered hook list a handler dispatches into.
//! - [`builtin`] -- the notification/activity fan-out hooks.

pub mod builtin;
pub mod hooks;

pub use builtin::{AlertCreatedHook, ProjectCreatedHook};
pub use hooks::{DispatchReport, HookRegistry, PostCommitHook, StoreEvent};
