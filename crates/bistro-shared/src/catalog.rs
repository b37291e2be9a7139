//! Products offered by the restaurant

use chrono::{DateTime, Utc};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::{
    const_config::validation::VALIDATION_MIN_PRICE, errors::ProductDraftError, id::DbId,
};

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    /// Decimal columns come back from the API as strings
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub price: f64,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for creating or updating a product
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
}

impl ProductDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
        }
    }

    /// Returns a copy with the name trimmed if the draft may be sent
    pub fn validated(&self) -> Result<Self, ProductDraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProductDraftError::NameRequired);
        }
        if !(self.price >= VALIDATION_MIN_PRICE) {
            return Err(ProductDraftError::PriceTooLow {
                min: VALIDATION_MIN_PRICE,
                actual: self.price,
            });
        }
        Ok(Self {
            name: name.to_string(),
            price: self.price,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::number(r#"{"id": 1, "name": "Tacos", "price": 8.5, "created_at": "2024-05-01T12:00:00Z"}"#)]
    #[case::decimal_string(r#"{"id": 1, "name": "Tacos", "price": "8.50", "createdAt": "2024-05-01T12:00:00.000Z"}"#)]
    fn product_from_wire(#[case] json: &str) {
        let actual: Product = serde_json::from_str(json).unwrap();
        assert_eq!(actual.price, 8.5);
        assert!(actual.created_at.is_some());
    }

    #[test]
    fn product_without_timestamp() {
        let actual: Product = serde_json::from_str(r#"{"id": 2, "name": "Agua", "price": 1}"#).unwrap();
        assert_eq!(actual.created_at, None);
    }

    #[rstest]
    #[case::blank_name("   ", 5.0, ProductDraftError::NameRequired)]
    #[case::zero_price("Tacos", 0.0, ProductDraftError::PriceTooLow { min: 0.01, actual: 0.0 })]
    #[case::negative_price("Tacos", -2.0, ProductDraftError::PriceTooLow { min: 0.01, actual: -2.0 })]
    fn invalid_drafts(#[case] name: &str, #[case] price: f64, #[case] expected: ProductDraftError) {
        let draft = ProductDraft {
            name: name.to_string(),
            price,
        };
        assert_eq!(draft.validated().unwrap_err(), expected);
    }

    #[test]
    fn nan_price_is_rejected() {
        let draft = ProductDraft {
            name: "Tacos".into(),
            price: f64::NAN,
        };
        assert!(draft.validated().is_err());
    }

    #[test]
    fn valid_draft_is_trimmed() {
        let draft = ProductDraft {
            name: "  Tacos al pastor ".into(),
            price: 0.01,
        };
        assert_eq!(draft.validated().unwrap().name, "Tacos al pastor");
    }
}
