//! Pricing error model.

use thiserror::Error;

use pricelist_core::{DomainError, PriceListLineId};

/// Result type used by price computation and line validation.
pub type PricingResult<T> = Result<T, PricingError>;

/// Pricing-level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// A price list line references both a product and a category.
    ///
    /// `line` is the offending line's id when it has already been stored.
    #[error("Product and category can not be defined together")]
    ProductAndCategoryTogether { line: Option<PriceListLineId> },

    /// Failure raised by the base engine or the base line checks.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusivity_message_is_fixed() {
        let err = PricingError::ProductAndCategoryTogether { line: None };
        assert_eq!(err.to_string(), "Product and category can not be defined together");
    }

    #[test]
    fn domain_errors_pass_through_untranslated() {
        let err: PricingError = DomainError::validation("quantity cannot be negative").into();
        assert_eq!(err.to_string(), "validation failed: quantity cannot be negative");
    }
}
