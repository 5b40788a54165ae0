use super::*;

fn filled_form() -> OrderForm {
    let mut form = OrderForm::new();
    form.customer_id = "C1".to_string();
    form.destination_country = Some("US".to_string());
    let row = form.rows()[0].id;
    form.set_product(row, Some(ProductId(1)));
    form.set_quantity(row, Some(2));
    form
}

#[test]
fn new_form_starts_with_one_empty_row() {
    let form = OrderForm::new();
    assert_eq!(form.rows().len(), 1);
    assert_eq!(form.rows()[0].product_id, None);
    assert_eq!(form.rows()[0].quantity, None);
}

#[test]
fn product_options_lead_with_placeholder_then_catalog() {
    let options = product_options();
    assert_eq!(options.len(), CATALOG.len() + 1);
    assert_eq!(options[0].product_id, None);
    assert_eq!(options[0].label, PRODUCT_PLACEHOLDER);
    assert_eq!(options[2].product_id, Some(ProductId(2)));
    assert_eq!(options[2].label, "Laptop - $1299.99");
}

#[test]
fn rows_get_unique_ids_and_are_independent() {
    let mut form = OrderForm::new();
    let first = form.rows()[0].id;
    let second = form.add_row();
    let third = form.add_row();
    assert_ne!(first, second);
    assert_ne!(second, third);

    form.set_quantity(second, Some(5));
    assert_eq!(form.rows()[0].quantity, None);
    assert_eq!(form.rows()[1].quantity, Some(5));
    assert_eq!(form.rows()[2].quantity, None);

    assert!(form.remove_row(second));
    assert!(!form.remove_row(second));
    let ids: Vec<RowId> = form.rows().iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![first, third]);

    // Ids are never reused after removal.
    let fourth = form.add_row();
    assert!(fourth > third);
}

#[test]
fn editing_a_missing_row_is_a_no_op() {
    let mut form = OrderForm::new();
    let row = form.rows()[0].id;
    form.remove_row(row);
    assert!(!form.set_product(row, Some(ProductId(1))));
    assert!(!form.set_quantity(row, Some(1)));
}

#[test]
fn well_formed_form_serializes_to_order_request() {
    let mut form = filled_form();
    form.customer_id = "  C1  ".to_string();
    let request = form.validate().expect("valid");
    assert_eq!(request.customer_id, "C1");
    assert_eq!(request.destination_country, "US");
    assert_eq!(
        request.order_items,
        vec![OrderItem {
            product_id: ProductId(1),
            quantity: 2
        }]
    );
}

#[test]
fn validation_checks_fields_in_order() {
    let mut form = filled_form();
    form.customer_id = "   ".to_string();
    form.destination_country = None;
    assert_eq!(form.validate(), Err(ValidationError::MissingCustomerId));

    form.customer_id = "C1".to_string();
    assert_eq!(form.validate(), Err(ValidationError::MissingDestination));

    form.destination_country = Some(String::new());
    assert_eq!(form.validate(), Err(ValidationError::MissingDestination));
}

#[test]
fn zero_rows_are_rejected() {
    let mut form = filled_form();
    let row = form.rows()[0].id;
    form.remove_row(row);
    assert_eq!(form.validate(), Err(ValidationError::NoProducts));
    assert_eq!(
        ValidationError::NoProducts.to_string(),
        "Please add at least one product"
    );
}

#[test]
fn every_row_needs_product_and_positive_quantity() {
    let mut form = filled_form();
    let extra = form.add_row();
    form.set_product(extra, Some(ProductId(4)));
    assert_eq!(form.validate(), Err(ValidationError::IncompleteRow(extra)));

    form.set_quantity(extra, Some(0));
    assert_eq!(form.validate(), Err(ValidationError::InvalidQuantity(extra)));

    form.set_product(extra, Some(ProductId(42)));
    form.set_quantity(extra, Some(1));
    assert_eq!(
        form.validate(),
        Err(ValidationError::UnknownProduct {
            row: extra,
            product_id: ProductId(42)
        })
    );

    form.set_product(extra, Some(ProductId(5)));
    assert_eq!(form.validate().expect("valid").order_items.len(), 2);
}

#[test]
fn reset_leaves_one_empty_row() {
    let mut form = filled_form();
    form.add_row();
    form.add_row();
    form.reset();
    assert!(form.customer_id.is_empty());
    assert_eq!(form.destination_country, None);
    assert_eq!(form.rows().len(), 1);
    assert_eq!(form.rows()[0].product_id, None);
    assert_eq!(form.rows()[0].quantity, None);

    let row = form.rows()[0].id;
    form.remove_row(row);
    form.reset();
    assert_eq!(form.rows().len(), 1);
}
