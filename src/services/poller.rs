//! Fixed-interval status polling for an open load.
//!
//! Another dispatcher may move a load's status while it is on screen; the
//! editor polls the status endpoint and republishes changes on a watch
//! channel. Cancellation is tied to the handle: stopping (or dropping) it
//! aborts the task, so no update can land after the owning view is gone.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::LoadStatus;

use super::loads::LoadsService;

pub struct StatusPoller {
    handle: JoinHandle<()>,
    rx: watch::Receiver<LoadStatus>,
}

/// Publish a fetched status, waking subscribers only when it differs from
/// the last published value. Returns whether subscribers were notified.
fn publish_if_changed(tx: &watch::Sender<LoadStatus>, status: LoadStatus) -> bool {
    tx.send_if_modified(|current| {
        if *current == status {
            false
        } else {
            *current = status;
            true
        }
    })
}

impl StatusPoller {
    pub fn spawn(
        loads: LoadsService,
        load_id: i64,
        interval: Duration,
        initial: LoadStatus,
    ) -> Self {
        let (tx, rx) = watch::channel(initial);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // the immediate first tick would race the initial fetch
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match loads.status(load_id).await {
                    Ok(status) => {
                        // publish only on change to avoid downstream churn
                        publish_if_changed(&tx, status);
                    }
                    Err(e) => {
                        debug!(load_id, error = %e, "Status poll failed; will retry next tick");
                    }
                }
            }
        });

        Self { handle, rx }
    }

    /// Latest known status plus change notifications.
    pub fn subscribe(&self) -> watch::Receiver<LoadStatus> {
        self.rx.clone()
    }

    pub fn current(&self) -> LoadStatus {
        *self.rx.borrow()
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for StatusPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::ApiClient;

    fn unreachable_loads() -> LoadsService {
        LoadsService::new(ApiClient::new("http://127.0.0.1:1", 1).unwrap())
    }

    #[tokio::test]
    async fn poller_starts_with_the_initial_status() {
        let poller = StatusPoller::spawn(
            unreachable_loads(),
            1,
            Duration::from_secs(60),
            LoadStatus::Confirmed,
        );
        assert_eq!(poller.current(), LoadStatus::Confirmed);
        poller.stop();
    }

    #[test]
    fn repeated_status_does_not_wake_subscribers() {
        let (tx, mut rx) = watch::channel(LoadStatus::Confirmed);
        rx.borrow_and_update();

        assert!(!publish_if_changed(&tx, LoadStatus::Confirmed));
        assert!(!rx.has_changed().unwrap());

        assert!(publish_if_changed(&tx, LoadStatus::InTransit));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), LoadStatus::InTransit);

        // republish of the now-current value is again silent
        assert!(!publish_if_changed(&tx, LoadStatus::InTransit));
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn stopping_aborts_the_background_task() {
        let poller = StatusPoller::spawn(
            unreachable_loads(),
            1,
            Duration::from_millis(10),
            LoadStatus::Quoting,
        );
        let mut rx = poller.subscribe();
        poller.stop();
        // the sender side is gone once the task is aborted
        assert!(rx.changed().await.is_err());
    }
}
