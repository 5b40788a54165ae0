//! Client-side controllers for the order form and the order-status dashboard.
//!
//! Both controllers are UI-agnostic: front ends feed them user actions, render
//! the values they return, and subscribe to [`ClientEvent`]s for banners and
//! background updates.

use shared::{domain::OrderId, protocol::OrderResponse};

pub mod api;
pub mod dashboard;
pub mod form;
pub mod monitor;
pub mod notifier;
pub mod order_controller;
pub mod progress;
pub mod view;

pub use api::{ApiEndpoints, ClientError, HttpOrderApi, OrderApi};
pub use dashboard::{DashboardState, FilterState, StatusFilter};
pub use form::{OrderForm, ProductRow, RowId, ValidationError};
pub use monitor::{DashboardController, RefreshOutcome};
pub use notifier::{Banner, BannerKind, Notifier};
pub use order_controller::{OrderFormController, OrderFormOptions, SubmitError};
pub use progress::ProgressStage;
pub use view::DashboardView;

#[derive(Debug, Clone)]
pub enum ClientEvent {
    /// The visible banner changed; `None` means it was dismissed.
    Banner(Option<Banner>),
    OrderSubmitted(OrderResponse),
    Progress {
        order_id: OrderId,
        stage: ProgressStage,
    },
    OrdersReplaced {
        count: usize,
    },
}

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
