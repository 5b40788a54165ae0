use std::{sync::Arc, time::Duration};

use shared::protocol::OrderResponse;
use thiserror::Error;
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

use crate::{
    api::{ClientError, OrderApi},
    form::{OrderForm, ValidationError},
    notifier::{Banner, BannerKind, Notifier, DEFAULT_DISMISS_AFTER},
    progress::{ProgressTimeline, DEFAULT_STAGE_DELAY},
    ClientEvent,
};

pub const PROCESSING_MESSAGE: &str = "Processing your order...";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Request(#[from] ClientError),
}

#[derive(Debug, Clone)]
pub struct OrderFormOptions {
    pub dismiss_after: Duration,
    pub stage_delay: Duration,
    pub simulate_progress: bool,
}

impl Default for OrderFormOptions {
    fn default() -> Self {
        Self {
            dismiss_after: DEFAULT_DISMISS_AFTER,
            stage_delay: DEFAULT_STAGE_DELAY,
            simulate_progress: false,
        }
    }
}

pub fn success_message(response: &OrderResponse) -> String {
    format!(
        "Order #{} submitted successfully! View details in Order Status",
        response.order_id
    )
}

pub struct OrderFormController {
    api: Arc<dyn OrderApi>,
    form: Mutex<OrderForm>,
    notifier: Notifier,
    progress: Option<ProgressTimeline>,
    events: broadcast::Sender<ClientEvent>,
}

impl OrderFormController {
    pub fn new(api: Arc<dyn OrderApi>, options: OrderFormOptions) -> Self {
        let (events, _) = broadcast::channel(256);
        let progress = options
            .simulate_progress
            .then(|| ProgressTimeline::new(events.clone(), options.stage_delay));
        Self {
            api,
            form: Mutex::new(OrderForm::new()),
            notifier: Notifier::new(events.clone(), options.dismiss_after),
            progress,
            events,
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Applies an edit to the form under the controller's lock.
    pub async fn edit<R>(&self, edit: impl FnOnce(&mut OrderForm) -> R) -> R {
        let mut form = self.form.lock().await;
        edit(&mut form)
    }

    pub async fn form(&self) -> OrderForm {
        self.form.lock().await.clone()
    }

    pub async fn submit(&self) -> Result<OrderResponse, SubmitError> {
        let validated = self.form.lock().await.validate();
        let request = match validated {
            Ok(request) => request,
            Err(err) => {
                warn!(%err, "order form rejected");
                self.notifier
                    .show(Banner::transient(BannerKind::Danger, err.to_string()))
                    .await;
                return Err(err.into());
            }
        };

        info!(
            customer_id = %request.customer_id,
            destination = %request.destination_country,
            items = request.order_items.len(),
            "submitting order"
        );
        self.notifier
            .show(Banner::transient(BannerKind::Success, PROCESSING_MESSAGE))
            .await;

        match self.api.submit_order(&request).await {
            Ok(response) => {
                info!(order_id = %response.order_id, "order created");
                self.notifier
                    .show(Banner::persistent(
                        BannerKind::Success,
                        success_message(&response),
                    ))
                    .await;
                self.form.lock().await.reset();
                let _ = self
                    .events
                    .send(ClientEvent::OrderSubmitted(response.clone()));
                if let Some(progress) = &self.progress {
                    progress.start(response.order_id).await;
                }
                Ok(response)
            }
            Err(err) => {
                warn!(%err, "order submission failed");
                self.notifier
                    .show(Banner::persistent(BannerKind::Danger, format!("Error: {err}")))
                    .await;
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/order_controller_tests.rs"]
mod tests;
