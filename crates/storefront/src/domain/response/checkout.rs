use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success body of `POST /api/checkout`, matching what the frontend's
/// order-confirmation page expects.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckoutResponse {
    pub success: bool,
    #[serde(rename = "orderId")]
    pub order_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_fields_sit_at_the_top_level() {
        let body = serde_json::to_value(CheckoutResponse {
            success: true,
            order_id: 7,
        })
        .unwrap();

        assert_eq!(body["success"], serde_json::json!(true));
        assert_eq!(body["orderId"], serde_json::json!(7));
        assert!(body.get("data").is_none());
    }
}
