//! Draft validation.
//!
//! The store trusts whatever it is given, so every draft passes through
//! [`ProductDraft::validate`] first. A rejected draft never reaches the store.

use crate::model::{ProductDraft, ProductFields};
use thiserror::Error;

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Reasons a draft is rejected. Rules are checked in declaration order and the
/// first failure is reported.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Price must be a finite number")]
    NonFinitePrice,

    #[error("Price cannot be negative")]
    NegativePrice,

    #[error("Description cannot exceed {max} characters (got {len})")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("Quantity cannot be negative")]
    NegativeQuantity,

    #[error("Quantity cannot exceed {max}")]
    QuantityTooLarge { max: u32 },
}

impl ProductDraft {
    /// Checks the draft and converts it into store-ready fields.
    pub fn validate(self) -> Result<ProductFields, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !self.price.is_finite() {
            return Err(ValidationError::NonFinitePrice);
        }
        if self.price < 0.0 {
            return Err(ValidationError::NegativePrice);
        }
        if let Some(description) = &self.description {
            let len = description.chars().count();
            if len > MAX_DESCRIPTION_LEN {
                return Err(ValidationError::DescriptionTooLong {
                    len,
                    max: MAX_DESCRIPTION_LEN,
                });
            }
        }
        let quantity = match self.quantity.unwrap_or(0) {
            q if q < 0 => return Err(ValidationError::NegativeQuantity),
            q => u32::try_from(q).map_err(|_| ValidationError::QuantityTooLarge { max: u32::MAX })?,
        };

        Ok(ProductFields {
            name: self.name,
            price: self.price,
            description: self.description,
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft_defaults_quantity_to_zero() {
        let fields = ProductDraft::new("Laptop", 999.99).validate().unwrap();
        assert_eq!(
            fields,
            ProductFields {
                name: "Laptop".to_string(),
                price: 999.99,
                description: None,
                quantity: 0,
            }
        );
    }

    #[test]
    fn test_zero_price_and_quantity_are_accepted() {
        let fields = ProductDraft::new("Sample", 0.0)
            .with_quantity(0)
            .validate()
            .unwrap();
        assert_eq!(fields.price, 0.0);
        assert_eq!(fields.quantity, 0);
    }

    #[test]
    fn test_empty_or_blank_name_is_rejected() {
        assert_eq!(
            ProductDraft::new("", 1.0).validate(),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            ProductDraft::new("   ", 1.0).validate(),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_negative_price_is_rejected() {
        assert_eq!(
            ProductDraft::new("Cable", -0.01).validate(),
            Err(ValidationError::NegativePrice)
        );
        assert_eq!(
            ProductDraft::new("Cable", f64::NAN).validate(),
            Err(ValidationError::NonFinitePrice)
        );
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        assert_eq!(
            ProductDraft::new("Cable", 5.0).with_quantity(-1).validate(),
            Err(ValidationError::NegativeQuantity)
        );
    }

    #[test]
    fn test_quantity_above_u32_is_rejected() {
        let too_many = i64::from(u32::MAX) + 1;
        assert_eq!(
            ProductDraft::new("Cable", 5.0)
                .with_quantity(too_many)
                .validate(),
            Err(ValidationError::QuantityTooLarge { max: u32::MAX })
        );
    }

    #[test]
    fn test_description_length_limit_counts_characters() {
        let at_limit = "é".repeat(MAX_DESCRIPTION_LEN);
        assert!(ProductDraft::new("Desk", 120.0)
            .with_description(at_limit)
            .validate()
            .is_ok());

        let over = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        assert_eq!(
            ProductDraft::new("Desk", 120.0)
                .with_description(over)
                .validate(),
            Err(ValidationError::DescriptionTooLong {
                len: MAX_DESCRIPTION_LEN + 1,
                max: MAX_DESCRIPTION_LEN,
            })
        );
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let draft = ProductDraft::new("", -5.0).with_quantity(-3);
        assert_eq!(draft.validate(), Err(ValidationError::EmptyName));
    }
}
