//! Laptop entity owned by the laptop service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A laptop belonging to a user. Same reference semantics as [`super::Car`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Laptop {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub brand: String,
    pub is_in_stock: bool,
    pub description: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLaptop {
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub brand: String,
    pub is_in_stock: bool,
    pub description: Option<String>,
    pub user_id: i64,
}
