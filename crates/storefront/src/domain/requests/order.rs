use rust_decimal::Decimal;

use crate::model::payment::PaymentMethod;

/// Fully validated write set handed to the checkout repository. By this
/// point prices are authoritative, quantities positive, and the payment
/// method normalized.
#[derive(Debug, Clone)]
pub struct PlaceOrderRecordRequest {
    pub customer_id: Option<i32>,
    pub employee_id: Option<i32>,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub items: Vec<PlaceOrderItemRecord>,
}

#[derive(Debug, Clone)]
pub struct PlaceOrderItemRecord {
    pub product_id: i32,
    pub variant_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
}
