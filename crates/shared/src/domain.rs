use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ProductId);
id_newtype!(OrderId);
id_newtype!(StatusRecordId);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub price: f64,
}

impl Product {
    /// Label shown in the product picker, e.g. `Laptop - $1299.99`.
    pub fn option_label(&self) -> String {
        format!("{} - ${}", self.name, self.price)
    }
}

pub const CATALOG: [Product; 5] = [
    Product {
        id: ProductId(1),
        name: "Smartphone",
        price: 899.99,
    },
    Product {
        id: ProductId(2),
        name: "Laptop",
        price: 1299.99,
    },
    Product {
        id: ProductId(3),
        name: "Headphones",
        price: 249.99,
    },
    Product {
        id: ProductId(4),
        name: "Tablet",
        price: 499.99,
    },
    Product {
        id: ProductId(5),
        name: "Smartwatch",
        price: 299.99,
    },
];

pub fn find_product(id: ProductId) -> Option<&'static Product> {
    CATALOG.iter().find(|product| product.id == id)
}

/// Processing stage reported by the order-status service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    OrderReceived,
    OrderProcess,
    ShippedSuccessful,
    NoShipAvailable,
    OrderFailed,
    NoShipAvailableDlt,
}

impl StatusCode {
    pub const ALL: [StatusCode; 6] = [
        StatusCode::OrderReceived,
        StatusCode::OrderProcess,
        StatusCode::ShippedSuccessful,
        StatusCode::NoShipAvailable,
        StatusCode::OrderFailed,
        StatusCode::NoShipAvailableDlt,
    ];

    pub fn code(self) -> i32 {
        match self {
            StatusCode::OrderReceived => 1,
            StatusCode::OrderProcess => 2,
            StatusCode::ShippedSuccessful => 3,
            StatusCode::NoShipAvailable => 4,
            StatusCode::OrderFailed => 5,
            StatusCode::NoShipAvailableDlt => 6,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusCode::OrderReceived => "ORDER_RECEIVED",
            StatusCode::OrderProcess => "ORDER_PROCESS",
            StatusCode::ShippedSuccessful => "SHIPPED_SUCCESSFUL",
            StatusCode::NoShipAvailable => "NO_SHIP_AVAILABLE",
            StatusCode::OrderFailed => "ORDER_FAILED",
            StatusCode::NoShipAvailableDlt => "NO_SHIP_AVAILABLE_DLT",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown order status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for StatusCode {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if let Ok(code) = trimmed.parse::<i32>() {
            return Self::from_code(code).ok_or_else(|| UnknownStatus(raw.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownStatus(raw.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
