//! Order form model: dynamic product rows and submit-time validation.

use std::fmt;

use shared::{
    domain::{find_product, ProductId, CATALOG},
    protocol::{OrderItem, OrderRequest},
};
use thiserror::Error;

pub const PRODUCT_PLACEHOLDER: &str = "Select Product";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: RowId,
    pub product_id: Option<ProductId>,
    pub quantity: Option<u32>,
}

impl ProductRow {
    fn empty(id: RowId) -> Self {
        Self {
            id,
            product_id: None,
            quantity: None,
        }
    }
}

/// One entry of the product dropdown; `product_id` is `None` for the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductOption {
    pub product_id: Option<ProductId>,
    pub label: String,
}

pub fn product_options() -> Vec<ProductOption> {
    std::iter::once(ProductOption {
        product_id: None,
        label: PRODUCT_PLACEHOLDER.to_string(),
    })
    .chain(CATALOG.iter().map(|product| ProductOption {
        product_id: Some(product.id),
        label: product.option_label(),
    }))
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a Customer ID")]
    MissingCustomerId,
    #[error("Please select a destination country")]
    MissingDestination,
    #[error("Please add at least one product")]
    NoProducts,
    #[error("Please fill in all product details")]
    IncompleteRow(RowId),
    #[error("Unknown product #{product_id}")]
    UnknownProduct { row: RowId, product_id: ProductId },
    #[error("Quantity must be at least 1")]
    InvalidQuantity(RowId),
}

#[derive(Debug, Clone)]
pub struct OrderForm {
    pub customer_id: String,
    pub destination_country: Option<String>,
    rows: Vec<ProductRow>,
    next_row_id: u64,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderForm {
    /// A blank form with one empty product row.
    pub fn new() -> Self {
        let mut form = Self {
            customer_id: String::new(),
            destination_country: None,
            rows: Vec::new(),
            next_row_id: 1,
        };
        form.add_row();
        form
    }

    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }

    pub fn add_row(&mut self) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        self.rows.push(ProductRow::empty(id));
        id
    }

    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    pub fn set_product(&mut self, id: RowId, product_id: Option<ProductId>) -> bool {
        self.row_mut(id)
            .map(|row| row.product_id = product_id)
            .is_some()
    }

    pub fn set_quantity(&mut self, id: RowId, quantity: Option<u32>) -> bool {
        self.row_mut(id).map(|row| row.quantity = quantity).is_some()
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut ProductRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    pub fn validate(&self) -> Result<OrderRequest, ValidationError> {
        let customer_id = self.customer_id.trim();
        if customer_id.is_empty() {
            return Err(ValidationError::MissingCustomerId);
        }

        let destination_country = self
            .destination_country
            .as_deref()
            .map(str::trim)
            .filter(|country| !country.is_empty())
            .ok_or(ValidationError::MissingDestination)?;

        if self.rows.is_empty() {
            return Err(ValidationError::NoProducts);
        }

        let order_items = self
            .rows
            .iter()
            .map(validate_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OrderRequest {
            customer_id: customer_id.to_string(),
            destination_country: destination_country.to_string(),
            order_items,
        })
    }

    /// Clears both fields and leaves exactly one empty row.
    pub fn reset(&mut self) {
        self.customer_id.clear();
        self.destination_country = None;
        self.rows.truncate(1);
        match self.rows.first_mut() {
            Some(first) => {
                first.product_id = None;
                first.quantity = None;
            }
            None => {
                self.add_row();
            }
        }
    }
}

fn validate_row(row: &ProductRow) -> Result<OrderItem, ValidationError> {
    let (Some(product_id), Some(quantity)) = (row.product_id, row.quantity) else {
        return Err(ValidationError::IncompleteRow(row.id));
    };
    if find_product(product_id).is_none() {
        return Err(ValidationError::UnknownProduct {
            row: row.id,
            product_id,
        });
    }
    if quantity == 0 {
        return Err(ValidationError::InvalidQuantity(row.id));
    }
    Ok(OrderItem {
        product_id,
        quantity,
    })
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
