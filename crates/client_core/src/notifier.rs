//! User-visible status banners with single-timer auto-dismiss.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
    time::Instant,
};
use tracing::debug;

use crate::ClientEvent;

pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub persistent: bool,
}

impl Banner {
    /// A banner that is cleared automatically after the notifier's dismiss delay.
    pub fn transient(kind: BannerKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            persistent: false,
        }
    }

    /// A banner that stays until replaced or dismissed.
    pub fn persistent(kind: BannerKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            persistent: true,
        }
    }
}

#[derive(Default)]
struct NotifierState {
    current: Option<Banner>,
    sequence: u64,
    dismiss_task: Option<JoinHandle<()>>,
}

#[derive(Clone)]
pub struct Notifier {
    inner: Arc<Mutex<NotifierState>>,
    events: broadcast::Sender<ClientEvent>,
    dismiss_after: Duration,
}

impl Notifier {
    pub fn new(events: broadcast::Sender<ClientEvent>, dismiss_after: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(NotifierState::default())),
            events,
            dismiss_after,
        }
    }

    pub async fn show(&self, banner: Banner) {
        let mut guard = self.inner.lock().await;
        if let Some(task) = guard.dismiss_task.take() {
            task.abort();
        }
        guard.sequence += 1;
        let sequence = guard.sequence;
        guard.current = Some(banner.clone());

        if !banner.persistent {
            let inner = Arc::clone(&self.inner);
            let events = self.events.clone();
            let deadline = Instant::now() + self.dismiss_after;
            guard.dismiss_task = Some(tokio::spawn(async move {
                tokio::time::sleep_until(deadline).await;
                let mut guard = inner.lock().await;
                // A newer banner owns the slot now.
                if guard.sequence != sequence {
                    return;
                }
                guard.current = None;
                guard.dismiss_task = None;
                let _ = events.send(ClientEvent::Banner(None));
            }));
        }

        debug!(kind = ?banner.kind, persistent = banner.persistent, message = %banner.message, "banner shown");
        let _ = self.events.send(ClientEvent::Banner(Some(banner)));
    }

    pub async fn dismiss(&self) {
        let mut guard = self.inner.lock().await;
        if let Some(task) = guard.dismiss_task.take() {
            task.abort();
        }
        guard.sequence += 1;
        if guard.current.take().is_some() {
            let _ = self.events.send(ClientEvent::Banner(None));
        }
    }

    pub async fn current(&self) -> Option<Banner> {
        self.inner.lock().await.current.clone()
    }
}

#[cfg(test)]
#[path = "tests/notifier_tests.rs"]
mod tests;
