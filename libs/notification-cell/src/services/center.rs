use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use shared_config::ClientConfig;
use shared_models::auth::Session;
use shared_models::error::ApiError;

use crate::models::Notification;
use crate::services::notification::NotificationService;

/// Owns the signed-in user's notification list and the poller that keeps it
/// fresh. Clones share the same list.
#[derive(Clone)]
pub struct NotificationCenter {
    service: NotificationService,
    notifications: Arc<RwLock<Vec<Notification>>>,
    poll_interval: Duration,
}

impl NotificationCenter {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_service(NotificationService::new(config), config.notification_poll_interval())
    }

    pub fn with_service(service: NotificationService, poll_interval: Duration) -> Self {
        Self {
            service,
            notifications: Arc::new(RwLock::new(Vec::new())),
            poll_interval,
        }
    }

    pub async fn notifications(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }

    pub async fn unread_count(&self) -> usize {
        self.notifications.read().await.iter().filter(|n| !n.read).count()
    }

    pub async fn clear(&self) {
        self.notifications.write().await.clear();
    }

    /// Replace the list with the server's. A 403 means notifications are not
    /// available for this account and leaves an empty list without an error.
    /// Any other failure also empties the list.
    pub async fn reload(&self, auth_token: &str) -> Result<usize, ApiError> {
        let loaded = self.service.my_notifications(auth_token).await;
        self.apply_load(loaded).await
    }

    async fn apply_load(&self, loaded: Result<Vec<Notification>, ApiError>) -> Result<usize, ApiError> {
        match loaded {
            Ok(items) => {
                let count = items.len();
                *self.notifications.write().await = items;
                debug!("Loaded {} notifications", count);
                Ok(count)
            }
            Err(e) if e.is_forbidden() => {
                debug!("Notifications not available (403)");
                self.clear().await;
                Ok(0)
            }
            Err(e) => {
                error!("Failed to load notifications: {}", e);
                self.clear().await;
                Err(e)
            }
        }
    }

    pub async fn mark_as_read(&self, notification_id: &str, auth_token: &str) -> Result<(), ApiError> {
        if notification_id.is_empty() {
            warn!("Cannot mark notification as read: id is missing");
            return Ok(());
        }

        if let Err(e) = self.service.mark_as_read(notification_id, auth_token).await {
            error!("Failed to mark notification {} as read: {}", notification_id, e);
            return Err(e);
        }

        let mut items = self.notifications.write().await;
        for item in items.iter_mut().filter(|n| n.id == notification_id) {
            item.read = true;
        }
        Ok(())
    }

    pub async fn mark_all_as_read(&self, auth_token: &str) -> Result<(), ApiError> {
        if let Err(e) = self.service.mark_all_as_read(auth_token).await {
            error!("Failed to mark all notifications as read: {}", e);
            return Err(e);
        }

        let mut items = self.notifications.write().await;
        for item in items.iter_mut() {
            item.read = true;
        }
        Ok(())
    }

    /// Follow the session: poll while logged in (first load immediately), clear
    /// on logout, restart when the token changes. Stops when `shutdown` fires
    /// or the session sender is dropped.
    pub fn spawn(&self, mut sessions: watch::Receiver<Session>, shutdown: CancellationToken) -> JoinHandle<()> {
        let center = self.clone();

        tokio::spawn(async move {
            loop {
                let token = sessions.borrow_and_update().token.clone();

                match token {
                    None => {
                        center.clear().await;
                        tokio::select! {
                            _ = shutdown.cancelled() => break,
                            changed = sessions.changed() => {
                                if changed.is_err() {
                                    break;
                                }
                            }
                        }
                    }
                    Some(token) => {
                        info!("Notification polling started");
                        let mut ticker = interval(center.poll_interval);
                        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

                        loop {
                            tokio::select! {
                                _ = shutdown.cancelled() => {
                                    center.clear().await;
                                    return;
                                }
                                changed = sessions.changed() => {
                                    if changed.is_err() {
                                        center.clear().await;
                                        return;
                                    }
                                    info!("Session changed, notification polling restarts");
                                    break;
                                }
                                _ = ticker.tick() => {}
                            }

                            // An in-flight load is dropped when the session changes or
                            // shutdown fires; its response is never applied.
                            let loaded = tokio::select! {
                                _ = shutdown.cancelled() => {
                                    center.clear().await;
                                    return;
                                }
                                changed = sessions.changed() => {
                                    if changed.is_err() {
                                        center.clear().await;
                                        return;
                                    }
                                    info!("Session changed during load, notification polling restarts");
                                    break;
                                }
                                loaded = center.service.my_notifications(&token) => loaded,
                            };

                            if shutdown.is_cancelled() || sessions.has_changed().unwrap_or(true) {
                                debug!("Discarding notifications loaded for a previous session");
                                continue;
                            }

                            // failures are logged inside apply_load
                            let _ = center.apply_load(loaded).await;
                        }
                    }
                }
            }

            center.clear().await;
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            message: format!("message {}", id),
            read,
            created_on: None,
        }
    }

    fn center() -> NotificationCenter {
        NotificationCenter::new(&ClientConfig::with_base_url("http://127.0.0.1:1/api"))
    }

    #[tokio::test]
    async fn test_unread_count_is_derived() {
        let center = center();
        *center.notifications.write().await = vec![note("1", false), note("2", true), note("3", false)];
        assert_eq!(center.unread_count().await, 2);

        center.clear().await;
        assert_eq!(center.unread_count().await, 0);
        assert!(center.notifications().await.is_empty());
    }

    #[tokio::test]
    async fn test_mark_as_read_without_id_is_a_no_op() {
        let center = center();
        *center.notifications.write().await = vec![note("1", false)];

        center.mark_as_read("", "token").await.unwrap();
        assert_eq!(center.unread_count().await, 1);
    }

    #[tokio::test]
    async fn test_failed_mark_keeps_flag() {
        let center = center();
        *center.notifications.write().await = vec![note("1", false)];

        assert!(center.mark_as_read("1", "token").await.is_err());
        assert_eq!(center.unread_count().await, 1);
    }
}
