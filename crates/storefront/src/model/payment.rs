use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_method")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    PayPal,
}

impl PaymentMethod {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Cash" => Some(Self::Cash),
            "CreditCard" => Some(Self::CreditCard),
            "PayPal" => Some(Self::PayPal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::CreditCard => "CreditCard",
            Self::PayPal => "PayPal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_status")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

/// Exactly one payment per order, created alongside it with status Pending.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub payment_id: i32,
    pub order_id: i32,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_fixed_method_set() {
        assert_eq!(PaymentMethod::parse("Cash"), Some(PaymentMethod::Cash));
        assert_eq!(
            PaymentMethod::parse("CreditCard"),
            Some(PaymentMethod::CreditCard)
        );
        assert_eq!(PaymentMethod::parse("PayPal"), Some(PaymentMethod::PayPal));
    }

    #[test]
    fn unknown_methods_do_not_parse() {
        assert_eq!(PaymentMethod::parse("Bitcoin"), None);
        assert_eq!(PaymentMethod::parse("cash"), None);
        assert_eq!(PaymentMethod::parse(""), None);
    }
}
