use std::{
    collections::VecDeque,
    sync::atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use reqwest::StatusCode as HttpStatus;
use shared::{
    domain::{OrderId, StatusRecordId},
    protocol::{OrderRequest, OrderResponse, OrderStatusRecord},
};
use tokio::sync::{oneshot, Mutex};

use crate::api::{ClientError, OrderApi};

pub type FetchResult = Result<Vec<OrderStatusRecord>, ClientError>;

enum FetchReply {
    Ready(FetchResult),
    Gated(oneshot::Receiver<FetchResult>),
}

#[derive(Default)]
pub struct FakeOrderApi {
    submit_reply: Mutex<Option<Result<OrderResponse, ClientError>>>,
    submitted: Mutex<Vec<OrderRequest>>,
    fetch_replies: Mutex<VecDeque<FetchReply>>,
    fetch_calls: AtomicUsize,
}

impl FakeOrderApi {
    pub fn accepting(order_id: i64) -> Self {
        let api = Self::default();
        *api.submit_reply.try_lock().expect("fresh lock") = Some(Ok(order_response(order_id)));
        api
    }

    pub fn rejecting(status: HttpStatus) -> Self {
        let api = Self::default();
        *api.submit_reply.try_lock().expect("fresh lock") = Some(Err(ClientError::Status {
            status,
            detail: None,
        }));
        api
    }

    pub async fn push_fetch(&self, reply: FetchResult) {
        self.fetch_replies
            .lock()
            .await
            .push_back(FetchReply::Ready(reply));
    }

    /// Queues a fetch that blocks until the returned sender fires.
    pub async fn push_gated_fetch(&self) -> oneshot::Sender<FetchResult> {
        let (tx, rx) = oneshot::channel();
        self.fetch_replies
            .lock()
            .await
            .push_back(FetchReply::Gated(rx));
        tx
    }

    pub async fn submitted(&self) -> Vec<OrderRequest> {
        self.submitted.lock().await.clone()
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderApi for FakeOrderApi {
    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderResponse, ClientError> {
        self.submitted.lock().await.push(request.clone());
        self.submit_reply
            .lock()
            .await
            .take()
            .unwrap_or_else(|| Err(server_error()))
    }

    async fn fetch_order_statuses(&self) -> FetchResult {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.fetch_replies.lock().await.pop_front();
        match reply {
            Some(FetchReply::Ready(result)) => result,
            Some(FetchReply::Gated(rx)) => rx.await.unwrap_or_else(|_| Err(server_error())),
            None => Ok(Vec::new()),
        }
    }
}

pub fn server_error() -> ClientError {
    ClientError::Status {
        status: HttpStatus::INTERNAL_SERVER_ERROR,
        detail: None,
    }
}

pub fn order_response(order_id: i64) -> OrderResponse {
    OrderResponse {
        order_id: OrderId(order_id),
        customer_id: Some("C1".to_string()),
        destination_country: Some("US".to_string()),
        created_at: Some("2024-03-01T10:00:00".to_string()),
        order_items: Vec::new(),
    }
}

pub fn record(id: i64, customer_id: &str, status_code: i32) -> OrderStatusRecord {
    OrderStatusRecord {
        id: StatusRecordId(id),
        order_id: OrderId(1000 + id),
        customer_id: customer_id.to_string(),
        status_code: Some(status_code),
        status: None,
        created_at: "2024-03-01T10:00:00".to_string(),
    }
}

/// `count` records cycling through status codes 1..=6, customers `cust-<n % 3>`.
pub fn records(count: i64) -> Vec<OrderStatusRecord> {
    (1..=count)
        .map(|id| record(id, &format!("cust-{}", id % 3), ((id - 1) % 6 + 1) as i32))
        .collect()
}
