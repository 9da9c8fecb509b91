use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Fixed category set of the catalog. Anything else is rejected at the
/// request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "product_category")]
pub enum ProductCategory {
    Men,
    Women,
    Girls,
    Boys,
    Accessories,
}

impl ProductCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Men" => Some(Self::Men),
            "Women" => Some(Self::Women),
            "Girls" => Some(Self::Girls),
            "Boys" => Some(Self::Boys),
            "Accessories" => Some(Self::Accessories),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Girls => "Girls",
            Self::Boys => "Boys",
            Self::Accessories => "Accessories",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    pub category: ProductCategory,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// One size/color/price/stock combination of a product.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductVariant {
    pub variant_id: i32,
    pub product_id: i32,
    pub size: String,
    pub color: String,
    pub price: Decimal,
    pub stock: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_categories() {
        assert_eq!(ProductCategory::parse("Men"), Some(ProductCategory::Men));
        assert_eq!(
            ProductCategory::parse("Accessories"),
            Some(ProductCategory::Accessories)
        );
    }

    #[test]
    fn rejects_unknown_category() {
        assert_eq!(ProductCategory::parse("Shoes"), None);
        assert_eq!(ProductCategory::parse("men"), None);
    }
}
