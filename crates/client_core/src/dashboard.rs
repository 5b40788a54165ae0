//! Order-status dashboard pipeline: filter, paginate, and build the view.

use std::{ops::RangeInclusive, str::FromStr};

use shared::{
    domain::{StatusCode, UnknownStatus},
    protocol::OrderStatusRecord,
};

use crate::view::{DashboardView, OrderRow, PageButton, Pagination};

pub const PAGE_SIZE: usize = 10;
pub const MAX_PAGE_BUTTONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(StatusCode),
}

impl StatusFilter {
    pub fn matches(self, record: &OrderStatusRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => record.status_code == Some(status.code()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        raw.parse().map(StatusFilter::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub status: StatusFilter,
    pub search: String,
    pub current_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            search: String::new(),
            current_page: 1,
        }
    }
}

/// Records matching the status filter and, when `search` is non-empty, whose
/// customer id contains it case-insensitively.
pub fn filter_orders(
    orders: &[OrderStatusRecord],
    status: StatusFilter,
    search: &str,
) -> Vec<OrderStatusRecord> {
    let needle = search.to_lowercase();
    orders
        .iter()
        .filter(|record| status.matches(record))
        .filter(|record| needle.is_empty() || record.customer_id.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Records on 1-based `page`; empty when the page is out of range.
pub fn page_slice<T>(records: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(records.len());
    let end = start.saturating_add(PAGE_SIZE).min(records.len());
    &records[start..end]
}

/// Page numbers to show as buttons: up to five, around `current`, within `1..=total`.
pub fn page_window(current: usize, total: usize) -> RangeInclusive<usize> {
    let span = MAX_PAGE_BUTTONS - 1;
    let mut start = current.saturating_sub(2).max(1);
    let end = (start + span).min(total);
    if end < start + span {
        start = end.saturating_sub(span).max(1);
    }
    start..=end
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    orders: Vec<OrderStatusRecord>,
    filtered: Vec<OrderStatusRecord>,
    filter: FilterState,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[OrderStatusRecord] {
        &self.orders
    }

    pub fn filtered(&self) -> &[OrderStatusRecord] {
        &self.filtered
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn current_page(&self) -> usize {
        self.filter.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len())
    }

    /// Swaps in a freshly fetched list and re-applies the filters.
    pub fn replace_orders(&mut self, orders: Vec<OrderStatusRecord>) {
        self.orders = orders;
        self.apply_filters();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.apply_filters();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.apply_filters();
    }

    pub fn clear_filters(&mut self) {
        self.filter.status = StatusFilter::All;
        self.filter.search.clear();
        self.apply_filters();
    }

    fn apply_filters(&mut self) {
        self.filtered = filter_orders(&self.orders, self.filter.status, &self.filter.search);
        self.filter.current_page = 1;
    }

    /// Moves to `page`, clamped to the valid range. Returns the page now shown.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        let last = self.total_pages().max(1);
        self.filter.current_page = page.clamp(1, last);
        self.filter.current_page
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.filter.current_page + 1)
    }

    pub fn prev_page(&mut self) -> usize {
        self.go_to_page(self.filter.current_page.saturating_sub(1))
    }

    pub fn view(&self) -> DashboardView {
        let current = self.filter.current_page;
        let total = self.total_pages();
        let rows = page_slice(&self.filtered, current)
            .iter()
            .map(OrderRow::from_record)
            .collect();

        let pagination = (total > 1).then(|| Pagination {
            current_page: current,
            total_pages: total,
            prev_disabled: current == 1,
            next_disabled: current == total,
            buttons: page_window(current, total)
                .map(|number| PageButton {
                    number,
                    active: number == current,
                })
                .collect(),
        });

        DashboardView {
            rows,
            pagination,
            total_matches: self.filtered.len(),
        }
    }
}

#[cfg(test)]
#[path = "tests/dashboard_tests.rs"]
mod tests;
