use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    order::{Order, OrderItem, OrderStatus},
    payment::{Payment, PaymentMethod, PaymentStatus},
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub order_id: i32,
    pub customer_id: Option<i32>,
    pub employee_id: Option<i32>,
    pub order_date: NaiveDateTime,
    pub status: OrderStatus,
    pub total_amount: Decimal,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.order_id,
            customer_id: order.customer_id,
            employee_id: order.employee_id,
            order_date: order.order_date,
            status: order.status,
            total_amount: order.total_amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemResponse {
    pub order_item_id: i32,
    pub product_id: i32,
    pub variant_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            order_item_id: item.order_item_id,
            product_id: item.product_id,
            variant_id: item.variant_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            amount: payment.amount,
            payment_method: payment.payment_method,
            status: payment.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub items: Vec<OrderItemResponse>,
    pub payment: Option<PaymentResponse>,
}
