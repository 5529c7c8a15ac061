//! Repository for the notifications collection.
//!
//! Every read and mutation except `create` is scoped to the recipient.

use chrono::Utc;
use railops_core::notification::NotificationKind;

use crate::error::StoreError;
use crate::models::notification::{CreateNotification, Notification};
use crate::{new_id, Store};

/// Provides CRUD operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Create an unread notification for `user_id`.
    pub async fn create(
        store: &Store,
        user_id: &str,
        input: &CreateNotification,
    ) -> Result<Notification, StoreError> {
        let notification = Notification {
            id: new_id(),
            title: input.title.clone(),
            message: input.message.clone(),
            kind: input.kind,
            user_id: user_id.to_string(),
            action_url: input.action_url.clone(),
            read: false,
            created_at: Utc::now(),
        };
        store
            .notifications
            .write()
            .await
            .insert(notification)
            .cloned()
    }

    /// Convenience wrapper used by side-effect hooks.
    pub async fn notify(
        store: &Store,
        user_id: &str,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        action_url: Option<String>,
    ) -> Result<Notification, StoreError> {
        let input = CreateNotification {
            title: title.into(),
            message: message.into(),
            kind,
            action_url,
        };
        Self::create(store, user_id, &input).await
    }

    pub async fn find_by_id(store: &Store, id: &str) -> Option<Notification> {
        store.notifications.read().await.get(id).cloned()
    }

    /// List a user's notifications, newest first.
    ///
    /// When `unread_only` is `true`, only notifications with `read = false`
    /// are returned.
    pub async fn list_for_user(
        store: &Store,
        user_id: &str,
        unread_only: bool,
    ) -> Vec<Notification> {
        store
            .notifications
            .read()
            .await
            .iter()
            .rev()
            .filter(|n| n.user_id == user_id)
            .filter(|n| !unread_only || !n.read)
            .cloned()
            .collect()
    }

    /// Mark a single notification as read.
    ///
    /// Returns `true` if the notification exists and belongs to `user_id`
    /// (already-read notifications count as found), `false` otherwise.
    pub async fn mark_read(store: &Store, id: &str, user_id: &str) -> bool {
        let mut notifications = store.notifications.write().await;
        match notifications.get_mut(id) {
            Some(n) if n.user_id == user_id => {
                n.read = true;
                true
            }
            _ => false,
        }
    }

    /// Mark every unread notification of `user_id` as read.
    ///
    /// Returns the number of notifications that changed.
    pub async fn mark_all_read(store: &Store, user_id: &str) -> usize {
        let mut notifications = store.notifications.write().await;
        let mut count = 0;
        for n in notifications
            .iter_mut()
            .filter(|n| n.user_id == user_id && !n.read)
        {
            n.read = true;
            count += 1;
        }
        count
    }

    /// Delete a notification owned by `user_id`. Returns `true` if removed.
    pub async fn delete(store: &Store, id: &str, user_id: &str) -> bool {
        let mut notifications = store.notifications.write().await;
        let owned = notifications
            .get(id)
            .is_some_and(|n| n.user_id == user_id);
        owned && notifications.remove(id).is_some()
    }

    pub async fn unread_count(store: &Store, user_id: &str) -> usize {
        store
            .notifications
            .read()
            .await
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count()
    }
}
