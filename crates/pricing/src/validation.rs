//! Line validation run before a batch of price list lines is stored.

use rust_decimal::Decimal;
use tracing::warn;

use pricelist_core::DomainError;

use crate::error::PricingResult;
use crate::line::PriceListLine;

/// Validation hook over a batch of lines.
///
/// An error rejects the whole batch.
pub trait LineValidation: Send + Sync {
    fn validate(&self, lines: &[PriceListLine]) -> PricingResult<()>;
}

/// Stock line checks: non-negative minimum quantity and a sane formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseLineValidation;

impl LineValidation for BaseLineValidation {
    fn validate(&self, lines: &[PriceListLine]) -> PricingResult<()> {
        for line in lines {
            if line.quantity < Decimal::ZERO {
                return Err(DomainError::validation("quantity cannot be negative").into());
            }
            line.formula.check()?;
        }
        Ok(())
    }
}

/// Adds the product/category exclusivity check on top of a base validation.
#[derive(Debug, Clone, Default)]
pub struct CategoryLineValidation<V = BaseLineValidation> {
    base: V,
}

impl CategoryLineValidation {
    /// Exclusivity check over the stock line checks.
    pub fn standard() -> Self {
        Self::new(BaseLineValidation)
    }
}

impl<V> CategoryLineValidation<V> {
    pub fn new(base: V) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &V {
        &self.base
    }
}

impl<V: LineValidation> LineValidation for CategoryLineValidation<V> {
    fn validate(&self, lines: &[PriceListLine]) -> PricingResult<()> {
        self.base.validate(lines)?;
        for line in lines {
            if let Err(err) = line.check_product_and_category() {
                warn!(
                    line = ?line.id,
                    product = ?line.product,
                    category = ?line.category,
                    "rejecting price list line: {err}"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pricelist_core::{CategoryId, ProductId};

    use crate::error::PricingError;
    use crate::formula::PriceFormula;

    fn line() -> PriceListLine {
        PriceListLine::new(1, PriceFormula::UnitPrice)
    }

    /// Base validation double that counts calls and optionally fails.
    #[derive(Default)]
    struct CountingValidation {
        calls: AtomicUsize,
        fail: bool,
    }

    impl LineValidation for CountingValidation {
        fn validate(&self, _lines: &[PriceListLine]) -> PricingResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DomainError::validation("base says no").into());
            }
            Ok(())
        }
    }

    #[test]
    fn base_rejects_negative_quantity() {
        let lines = [line().with_min_quantity(Decimal::from(-1))];
        let err = BaseLineValidation.validate(&lines).unwrap_err();
        assert_eq!(
            err,
            PricingError::Domain(DomainError::validation("quantity cannot be negative"))
        );
    }

    #[test]
    fn base_rejects_negative_fixed_price() {
        let lines = [PriceListLine::new(1, PriceFormula::Fixed(Decimal::from(-3)))];
        assert!(BaseLineValidation.validate(&lines).is_err());
    }

    #[test]
    fn base_alone_tolerates_both_fields() {
        let lines = [line().for_product(ProductId::new(42)).for_category(CategoryId::new(7))];
        assert!(BaseLineValidation.validate(&lines).is_ok());
    }

    #[test]
    fn rejects_batch_with_one_offending_line() {
        let lines = [
            line().for_product(ProductId::new(42)),
            line().for_product(ProductId::new(42)).for_category(CategoryId::new(7)),
            line().for_category(CategoryId::new(7)),
        ];

        let err = CategoryLineValidation::standard().validate(&lines).unwrap_err();
        assert_eq!(err, PricingError::ProductAndCategoryTogether { line: None });
    }

    #[test]
    fn accepts_exclusive_lines() {
        let lines = [
            line().for_product(ProductId::new(42)),
            line().for_category(CategoryId::new(7)),
            line(),
        ];
        assert!(CategoryLineValidation::standard().validate(&lines).is_ok());
    }

    #[test]
    fn base_runs_first() {
        let validation = CategoryLineValidation::new(CountingValidation {
            fail: true,
            ..CountingValidation::default()
        });
        let lines = [line().for_product(ProductId::new(42)).for_category(CategoryId::new(7))];

        let err = validation.validate(&lines).unwrap_err();
        assert_eq!(err, PricingError::Domain(DomainError::validation("base says no")));
        assert_eq!(validation.base().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn base_is_consulted_on_success() {
        let validation = CategoryLineValidation::new(CountingValidation::default());
        validation.validate(&[line()]).unwrap();
        assert_eq!(validation.base().calls.load(Ordering::SeqCst), 1);
    }
}
