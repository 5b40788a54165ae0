use super::*;
use crate::test_support::record;

#[test]
fn formats_backend_timestamps_as_short_dates() {
    assert_eq!(format_date("2024-03-01T10:15:30"), "Mar 1, 2024");
    assert_eq!(format_date("2024-12-25T08:00:00.123456"), "Dec 25, 2024");
    assert_eq!(format_date("2024-07-04T23:59:59Z"), "Jul 4, 2024");
    assert_eq!(format_date("2024-01-09"), "Jan 9, 2024");
}

#[test]
fn unparsable_dates_are_shown_verbatim() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date(""), "");
}

#[test]
fn row_falls_back_to_code_table_for_status() {
    let row = OrderRow::from_record(&record(7, "cust-7", 4));
    assert_eq!(row.status, "NO_SHIP_AVAILABLE");
    assert_eq!(row.created, "Mar 1, 2024");
    assert_eq!(row.order_id, OrderId(1007));
}

#[test]
fn table_renders_header_rows_and_pagination() {
    let view = DashboardView {
        rows: vec![
            OrderRow::from_record(&record(1, "alice", 1)),
            OrderRow::from_record(&record(2, "bob", 3)),
        ],
        pagination: Some(Pagination {
            current_page: 1,
            total_pages: 2,
            prev_disabled: true,
            next_disabled: false,
            buttons: vec![
                PageButton {
                    number: 1,
                    active: true,
                },
                PageButton {
                    number: 2,
                    active: false,
                },
            ],
        }),
        total_matches: 12,
    };

    let rendered = view.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert!(lines[0].starts_with("ID"));
    assert!(lines[0].contains("CUSTOMER"));
    assert!(lines[2].contains("alice"));
    assert!(lines[2].contains("ORDER_RECEIVED"));
    assert!(lines[3].contains("SHIPPED_SUCCESSFUL"));
    assert!(!rendered.contains(NO_ORDERS_MESSAGE));
    assert!(rendered.contains("[1] 2 →"));
    assert!(rendered.contains("(page 1 of 2)"));
    assert!(!rendered.contains('←'));
}
