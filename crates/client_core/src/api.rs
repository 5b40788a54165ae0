//! HTTP seam between the page controllers and the order services.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use shared::{
    error::ApiError,
    protocol::{OrderRequest, OrderResponse, OrderStatusRecord},
};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_ORDERS_URL: &str = "http://localhost:8085/api/orders";
pub const DEFAULT_ORDER_STATUS_URL: &str = "http://localhost:8091/api/order-status/all";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint url '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("network request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server responded with {status}{}", detail_suffix(.detail))]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(" ({detail})"),
        None => String::new(),
    }
}

#[async_trait]
pub trait OrderApi: Send + Sync {
    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderResponse, ClientError>;
    async fn fetch_order_statuses(&self) -> Result<Vec<OrderStatusRecord>, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ApiEndpoints {
    pub orders_url: Url,
    pub order_status_url: Url,
    pub timeout: Duration,
}

impl ApiEndpoints {
    pub fn parse(
        orders_url: &str,
        order_status_url: &str,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            orders_url: parse_endpoint(orders_url)?,
            order_status_url: parse_endpoint(order_status_url)?,
            timeout,
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ClientError> {
    Url::parse(raw.trim()).map_err(|source| ClientError::InvalidEndpoint {
        url: raw.to_string(),
        source,
    })
}

pub struct HttpOrderApi {
    http: Client,
    endpoints: ApiEndpoints,
}

impl HttpOrderApi {
    pub fn new(endpoints: ApiEndpoints) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(endpoints.timeout)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self { http, endpoints })
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }
}

#[async_trait]
impl OrderApi for HttpOrderApi {
    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderResponse, ClientError> {
        debug!(
            customer_id = %request.customer_id,
            items = request.order_items.len(),
            "posting order"
        );
        let response = self
            .http
            .post(self.endpoints.orders_url.clone())
            .json(request)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        let response = ensure_success(response).await?;
        response.json().await.map_err(ClientError::Decode)
    }

    async fn fetch_order_statuses(&self) -> Result<Vec<OrderStatusRecord>, ClientError> {
        let response = self
            .http
            .get(self.endpoints.order_status_url.clone())
            .send()
            .await
            .map_err(ClientError::Transport)?;
        let response = ensure_success(response).await?;
        let records: Vec<OrderStatusRecord> =
            response.json().await.map_err(ClientError::Decode)?;
        debug!(count = records.len(), "fetched order statuses");
        Ok(records)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().clone();
    let body = response.text().await.unwrap_or_default();
    let detail = ApiError::from_body(&body).map(|err| err.summary());
    warn!(%url, %status, detail = detail.as_deref().unwrap_or(""), "order service request failed");
    Err(ClientError::Status { status, detail })
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
