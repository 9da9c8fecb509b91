use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Wire shape of `POST /api/checkout`, mirroring the cart state the
/// frontend keeps per line: a product reference, the chosen variant with
/// the price snapshot from cart-add time, and a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckoutRequest {
    #[validate(length(min = 1), nested)]
    pub items: Vec<CheckoutItemRequest>,

    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckoutItemRequest {
    #[validate(nested)]
    pub product: ProductRef,

    #[validate(nested)]
    pub variant: VariantRef,

    #[validate(range(min = 1))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductRef {
    #[validate(range(min = 1))]
    pub product_id: i32,
}

/// The `price` here is the client's snapshot; placement re-reads the
/// authoritative price and only logs a mismatch.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct VariantRef {
    #[validate(range(min = 1))]
    pub variant_id: i32,

    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use validator::Validate;

    fn item(quantity: i32) -> CheckoutItemRequest {
        CheckoutItemRequest {
            product: ProductRef { product_id: 1 },
            variant: VariantRef {
                variant_id: 1,
                price: Decimal::new(1000, 2),
            },
            quantity,
        }
    }

    #[test]
    fn empty_items_fail_validation() {
        let req = CheckoutRequest {
            items: vec![],
            payment_method: "Cash".into(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_quantity_fails_validation() {
        let req = CheckoutRequest {
            items: vec![item(0)],
            payment_method: "Cash".into(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn deserializes_the_frontend_payload() {
        let body = serde_json::json!({
            "items": [{
                "product": {"product_id": 3},
                "variant": {"variant_id": 7, "price": "19.99"},
                "quantity": 2
            }],
            "paymentMethod": "PayPal"
        });

        let req: CheckoutRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].variant.variant_id, 7);
        assert_eq!(req.payment_method, "PayPal");
        assert!(req.validate().is_ok());
    }
}
