use super::*;

#[test]
fn catalog_labels_include_price() {
    let labels: Vec<String> = CATALOG.iter().map(Product::option_label).collect();
    assert_eq!(labels[0], "Smartphone - $899.99");
    assert_eq!(labels[1], "Laptop - $1299.99");
    assert_eq!(labels.len(), 5);
}

#[test]
fn find_product_only_matches_catalog_ids() {
    assert_eq!(
        find_product(ProductId(3)).map(|product| product.name),
        Some("Headphones")
    );
    assert!(find_product(ProductId(0)).is_none());
    assert!(find_product(ProductId(6)).is_none());
}

#[test]
fn status_codes_follow_backend_numbering() {
    for (expected, status) in (1..=6).zip(StatusCode::ALL) {
        assert_eq!(status.code(), expected);
        assert_eq!(StatusCode::from_code(expected), Some(status));
    }
    assert_eq!(StatusCode::from_code(0), None);
    assert_eq!(StatusCode::from_code(7), None);
}

#[test]
fn status_parses_from_number_or_label() {
    assert_eq!("3".parse(), Ok(StatusCode::ShippedSuccessful));
    assert_eq!(" order_failed ".parse(), Ok(StatusCode::OrderFailed));
    assert_eq!(
        "NO_SHIP_AVAILABLE_DLT".parse(),
        Ok(StatusCode::NoShipAvailableDlt)
    );
    assert_eq!(
        "9".parse::<StatusCode>(),
        Err(UnknownStatus("9".to_string()))
    );
    assert!("shipped".parse::<StatusCode>().is_err());
}
