//! Simulated post-submit progress timeline.
//!
//! Stages advance on a fixed delay and are not driven by backend state; the
//! order-status dashboard is the source of truth for real progress.

use std::time::Duration;

use shared::domain::OrderId;
use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
    time::Instant,
};
use tracing::debug;

use crate::ClientEvent;

pub const DEFAULT_STAGE_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStage {
    OrderReceived,
    Processing,
    Shipping,
    Completed,
}

impl ProgressStage {
    pub const SEQUENCE: [ProgressStage; 4] = [
        ProgressStage::OrderReceived,
        ProgressStage::Processing,
        ProgressStage::Shipping,
        ProgressStage::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProgressStage::OrderReceived => "Order Received",
            ProgressStage::Processing => "Processing",
            ProgressStage::Shipping => "Shipping",
            ProgressStage::Completed => "Completed",
        }
    }

    pub fn is_final(self) -> bool {
        self == ProgressStage::Completed
    }
}

pub struct ProgressTimeline {
    events: broadcast::Sender<ClientEvent>,
    stage_delay: Duration,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl ProgressTimeline {
    pub fn new(events: broadcast::Sender<ClientEvent>, stage_delay: Duration) -> Self {
        Self {
            events,
            stage_delay,
            task: Mutex::new(None),
        }
    }

    /// Restarts the timeline for `order_id`, cancelling any run still in progress.
    pub async fn start(&self, order_id: OrderId) {
        let mut task = self.task.lock().await;
        if let Some(previous) = task.take() {
            previous.abort();
        }

        let events = self.events.clone();
        let started = Instant::now();
        let delay = self.stage_delay;
        *task = Some(tokio::spawn(async move {
            for (index, stage) in ProgressStage::SEQUENCE.into_iter().enumerate() {
                tokio::time::sleep_until(started + delay * index as u32).await;
                debug!(%order_id, stage = stage.label(), "progress stage");
                let _ = events.send(ClientEvent::Progress { order_id, stage });
            }
        }));
    }

    pub async fn cancel(&self) {
        if let Some(previous) = self.task.lock().await.take() {
            previous.abort();
        }
    }
}
