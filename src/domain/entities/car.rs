//! Car entity owned by the car service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A car belonging to a user.
///
/// `user_id` points at a user in the user service. The reference is not
/// enforced by the car store; the user service checks the owner exists before
/// proxying a car mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub brand: String,
    pub registration_number: String,
    pub is_in_stock: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating or fully replacing a car.
///
/// Also the JSON body the user service forwards to the car service, so it
/// shares the camelCase wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub brand: String,
    pub registration_number: String,
    pub is_in_stock: bool,
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_car_wire_format() {
        let car = NewCar {
            id: None,
            name: "Clio".to_string(),
            price: 12_500.0,
            brand: "Renault".to_string(),
            registration_number: "AB-123-CD".to_string(),
            is_in_stock: true,
            user_id: 3,
        };

        let value = serde_json::to_value(&car).unwrap();

        assert!(value.get("id").is_none());
        assert_eq!(value["registrationNumber"], json!("AB-123-CD"));
        assert_eq!(value["isInStock"], json!(true));
        assert_eq!(value["userId"], json!(3));
    }
}
