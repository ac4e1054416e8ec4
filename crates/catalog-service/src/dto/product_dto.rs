//! Product-related DTOs.

use catalog_core::validation::rules::not_blank;
use catalog_core::{NewProduct, Product, ProductId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a new product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    pub price: f64,

    #[serde(default)]
    pub description: String,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i32,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            price: request.price,
            description: request.description,
            quantity: request.quantity,
        }
    }
}

/// Response returned after a product is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductResponse {
    pub message: String,
    pub product_id: ProductId,
}

impl From<&Product> for CreateProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            message: "product created".to_string(),
            product_id: product.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, price: f64, quantity: i32) -> CreateProductRequest {
        CreateProductRequest {
            name: name.to_string(),
            price,
            description: String::new(),
            quantity,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("Widget", 9.99, 5).validate().is_ok());
        assert!(request("Widget", 0.01, 0).validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = request("   ", 9.99, 5).validate().unwrap_err();
        assert!(err.field_errors().contains_key("name"));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        assert!(request("Widget", 0.0, 5).validate().is_err());
        assert!(request("Widget", -1.0, 5).validate().is_err());
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let err = request("Widget", 9.99, -1).validate().unwrap_err();
        assert!(err.field_errors().contains_key("quantity"));
    }

    #[test]
    fn test_description_is_optional_in_json() {
        let parsed: CreateProductRequest =
            serde_json::from_str(r#"{"name":"Widget","price":9.99,"quantity":5}"#).unwrap();
        assert_eq!(parsed.description, "");
    }

    #[test]
    fn test_response_shape() {
        let response = CreateProductResponse {
            message: "product created".to_string(),
            product_id: ProductId::new(42),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"message": "product created", "product_id": 42}));
    }
}
