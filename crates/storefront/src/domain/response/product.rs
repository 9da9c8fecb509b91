use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::product::{Product, ProductCategory, ProductVariant};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VariantResponse {
    pub variant_id: i32,
    pub size: String,
    pub color: String,
    pub price: Decimal,
    pub stock: i32,
}

impl From<ProductVariant> for VariantResponse {
    fn from(variant: ProductVariant) -> Self {
        Self {
            variant_id: variant.variant_id,
            size: variant.size,
            color: variant.color,
            price: variant.price,
            stock: variant.stock,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub product_id: i32,
    pub product_name: String,
    pub category: ProductCategory,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub variants: Vec<VariantResponse>,
}

impl ProductResponse {
    pub fn from_parts(product: Product, variants: Vec<ProductVariant>) -> Self {
        Self {
            product_id: product.product_id,
            product_name: product.product_name,
            category: product.category,
            image_url: product.image_url,
            description: product.description,
            variants: variants.into_iter().map(VariantResponse::from).collect(),
        }
    }
}

/// Ranking entry: a product together with its lifetime units sold.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductRankingResponse {
    #[serde(flatten)]
    pub product: ProductResponse,
    #[serde(rename = "totalSold")]
    pub total_sold: i64,
}
