//! Text rendering of the dashboard table and pagination bar.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use shared::{
    domain::{OrderId, StatusRecordId},
    protocol::OrderStatusRecord,
};

pub const NO_ORDERS_MESSAGE: &str = "No orders found matching your criteria.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub id: StatusRecordId,
    pub order_id: OrderId,
    pub customer_id: String,
    pub status_code: Option<i32>,
    pub status: String,
    pub created: String,
}

impl OrderRow {
    pub fn from_record(record: &OrderStatusRecord) -> Self {
        Self {
            id: record.id,
            order_id: record.order_id,
            customer_id: record.customer_id.clone(),
            status_code: record.status_code,
            status: record.display_status().to_string(),
            created: format_date(&record.created_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub buttons: Vec<PageButton>,
}

/// Everything needed to redraw the dashboard from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub rows: Vec<OrderRow>,
    /// `None` when everything fits on a single page.
    pub pagination: Option<Pagination>,
    pub total_matches: usize,
}

impl DashboardView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Formats a backend timestamp as `Mar 1, 2024`; unparsable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| raw.parse::<NaiveDateTime>().map(|dt| dt.date()))
        .or_else(|_| raw.parse::<NaiveDate>());
    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

const HEADERS: [&str; 5] = ["ID", "ORDER", "CUSTOMER", "STATUS", "CREATED"];

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 5]> = self
            .rows
            .iter()
            .map(|row| {
                [
                    row.id.to_string(),
                    row.order_id.to_string(),
                    row.customer_id.clone(),
                    row.status.clone(),
                    row.created.clone(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_line(f, &HEADERS.map(str::to_string), &widths)?;
        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        writeln!(f, "{}", rule.join("  "))?;

        if cells.is_empty() {
            writeln!(f, "{NO_ORDERS_MESSAGE}")?;
        }
        for row in &cells {
            write_line(f, row, &widths)?;
        }

        if let Some(pagination) = &self.pagination {
            writeln!(f)?;
            writeln!(f, "{pagination}")?;
        }
        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String; 5], widths: &[usize; 5]) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(f, "{}", padded.join("  ").trim_end())
}

impl fmt::Display for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prev = if self.prev_disabled { " " } else { "←" };
        let next = if self.next_disabled { " " } else { "→" };
        let buttons: Vec<String> = self
            .buttons
            .iter()
            .map(|button| {
                if button.active {
                    format!("[{}]", button.number)
                } else {
                    button.number.to_string()
                }
            })
            .collect();
        write!(
            f,
            "{prev} {} {next}  (page {} of {})",
            buttons.join(" "),
            self.current_page,
            self.total_pages
        )
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
