//! Dashboard controller: fetches order statuses and owns the filter/page state.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{
    api::OrderApi,
    dashboard::{DashboardState, StatusFilter},
    notifier::{Banner, BannerKind, Notifier},
    view::DashboardView,
    ClientEvent,
};

pub const LOADING_MESSAGE: &str = "Loading orders...";
pub const LOADED_MESSAGE: &str = "Orders loaded successfully!";
pub const LOAD_FAILED_MESSAGE: &str = "Error loading orders. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied { count: usize },
    /// A newer refresh started while this one was in flight; its result was dropped.
    Superseded,
    Failed,
}

struct MonitorState {
    dashboard: DashboardState,
    generation: u64,
}

pub struct DashboardController {
    api: Arc<dyn OrderApi>,
    notifier: Notifier,
    inner: Mutex<MonitorState>,
    events: broadcast::Sender<ClientEvent>,
}

impl DashboardController {
    pub fn new(api: Arc<dyn OrderApi>, dismiss_after: Duration) -> Arc<Self> {
        let (events, _) = broadcast::channel(256);
        Arc::new(Self {
            api,
            notifier: Notifier::new(events.clone(), dismiss_after),
            inner: Mutex::new(MonitorState {
                dashboard: DashboardState::new(),
                generation: 0,
            }),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub async fn refresh(&self) -> RefreshOutcome {
        let generation = {
            let mut guard = self.inner.lock().await;
            guard.generation += 1;
            guard.generation
        };
        self.notifier
            .show(Banner::persistent(BannerKind::Info, LOADING_MESSAGE))
            .await;

        let result = self.api.fetch_order_statuses().await;

        let mut guard = self.inner.lock().await;
        if guard.generation != generation {
            debug!(
                generation,
                latest = guard.generation,
                "discarding superseded order status response"
            );
            return RefreshOutcome::Superseded;
        }

        match result {
            Ok(records) => {
                let count = records.len();
                guard.dashboard.replace_orders(records);
                drop(guard);
                info!(count, "order statuses loaded");
                let _ = self.events.send(ClientEvent::OrdersReplaced { count });
                self.notifier
                    .show(Banner::transient(BannerKind::Success, LOADED_MESSAGE))
                    .await;
                RefreshOutcome::Applied { count }
            }
            Err(err) => {
                drop(guard);
                warn!(%err, "failed to load order statuses");
                self.notifier
                    .show(Banner::persistent(BannerKind::Danger, LOAD_FAILED_MESSAGE))
                    .await;
                RefreshOutcome::Failed
            }
        }
    }

    /// Refreshes every `interval`, starting one interval from now, until the
    /// handle is aborted.
    pub fn poll(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                controller.refresh().await;
            }
        })
    }

    pub async fn set_status_filter(&self, status: StatusFilter) -> DashboardView {
        self.update(|dashboard| dashboard.set_status_filter(status))
            .await
    }

    pub async fn set_search(&self, search: impl Into<String>) -> DashboardView {
        let search = search.into();
        self.update(|dashboard| dashboard.set_search(search)).await
    }

    pub async fn clear_filters(&self) -> DashboardView {
        self.update(DashboardState::clear_filters).await
    }

    pub async fn go_to_page(&self, page: usize) -> DashboardView {
        self.update(|dashboard| {
            dashboard.go_to_page(page);
        })
        .await
    }

    pub async fn next_page(&self) -> DashboardView {
        self.update(|dashboard| {
            dashboard.next_page();
        })
        .await
    }

    pub async fn prev_page(&self) -> DashboardView {
        self.update(|dashboard| {
            dashboard.prev_page();
        })
        .await
    }

    pub async fn view(&self) -> DashboardView {
        self.inner.lock().await.dashboard.view()
    }

    pub async fn snapshot(&self) -> DashboardState {
        self.inner.lock().await.dashboard.clone()
    }

    async fn update(&self, change: impl FnOnce(&mut DashboardState)) -> DashboardView {
        let mut guard = self.inner.lock().await;
        change(&mut guard.dashboard);
        guard.dashboard.view()
    }
}

#[cfg(test)]
#[path = "tests/monitor_tests.rs"]
mod tests;
