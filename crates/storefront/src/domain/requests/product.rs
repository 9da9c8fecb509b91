use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(ValidationError::new("price_negative"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100))]
    pub product_name: String,

    /// Must be one of the fixed category set; checked against
    /// `ProductCategory` in the service.
    #[validate(length(min = 1))]
    pub category: String,

    #[validate(url)]
    pub image_url: Option<String>,

    pub description: Option<String>,

    #[validate(length(min = 1), nested)]
    pub variants: Vec<CreateVariantRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 100))]
    pub product_name: String,

    #[validate(length(min = 1))]
    pub category: String,

    #[validate(url)]
    pub image_url: Option<String>,

    pub description: Option<String>,

    #[validate(length(min = 1), nested)]
    pub variants: Vec<CreateVariantRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateVariantRequest {
    #[validate(length(min = 1, max = 10))]
    pub size: String,

    #[validate(length(min = 1, max = 30))]
    pub color: String,

    #[validate(custom(function = validate_price))]
    pub price: Decimal,

    #[validate(range(min = 0))]
    pub stock: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn variant() -> CreateVariantRequest {
        CreateVariantRequest {
            size: "M".into(),
            color: "Black".into(),
            price: Decimal::new(2999, 2),
            stock: 10,
        }
    }

    #[test]
    fn product_without_variants_fails() {
        let req = CreateProductRequest {
            product_name: "Tee".into(),
            category: "Men".into(),
            image_url: None,
            description: None,
            variants: vec![],
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn negative_price_fails() {
        let mut bad = variant();
        bad.price = Decimal::new(-100, 2);

        let req = CreateProductRequest {
            product_name: "Tee".into(),
            category: "Men".into(),
            image_url: None,
            description: None,
            variants: vec![bad],
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn well_formed_product_passes() {
        let req = CreateProductRequest {
            product_name: "Tee".into(),
            category: "Men".into(),
            image_url: Some("https://cdn.example.com/tee.png".into()),
            description: Some("Plain tee".into()),
            variants: vec![variant()],
        };

        assert!(req.validate().is_ok());
    }
}
