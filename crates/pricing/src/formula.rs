use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pricelist_core::{DomainError, DomainResult, ValueObject};

/// How a matching line turns the base unit price into the computed price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PriceFormula {
    /// Keep the base unit price.
    #[default]
    UnitPrice,
    /// Replace the price with a fixed amount.
    Fixed(Decimal),
    /// `unit_price * factor` (0.9 is a 10% discount).
    Factor(Decimal),
    /// `unit_price + delta`.
    Offset(Decimal),
}

impl PriceFormula {
    pub fn apply(&self, unit_price: Decimal) -> DomainResult<Decimal> {
        let price = match *self {
            PriceFormula::UnitPrice => Some(unit_price),
            PriceFormula::Fixed(price) => Some(price),
            PriceFormula::Factor(factor) => unit_price.checked_mul(factor),
            PriceFormula::Offset(delta) => unit_price.checked_add(delta),
        };
        price.ok_or_else(|| DomainError::validation("computed price overflows"))
    }

    /// Stock checks run when a line is saved.
    pub fn check(&self) -> DomainResult<()> {
        match *self {
            PriceFormula::Fixed(price) if price < Decimal::ZERO => {
                Err(DomainError::validation("fixed price cannot be negative"))
            }
            PriceFormula::Factor(factor) if factor < Decimal::ZERO => {
                Err(DomainError::validation("price factor cannot be negative"))
            }
            _ => Ok(()),
        }
    }
}

impl ValueObject for PriceFormula {}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn applies_each_formula() {
        let base = price(1000);
        assert_eq!(PriceFormula::UnitPrice.apply(base).unwrap(), price(1000));
        assert_eq!(PriceFormula::Fixed(price(750)).apply(base).unwrap(), price(750));
        assert_eq!(PriceFormula::Factor(Decimal::new(9, 1)).apply(base).unwrap(), price(900));
        assert_eq!(PriceFormula::Offset(price(-150)).apply(base).unwrap(), price(850));
    }

    #[test]
    fn overflow_is_a_validation_error() {
        let err = PriceFormula::Factor(Decimal::MAX).apply(Decimal::MAX).unwrap_err();
        assert_eq!(err, DomainError::validation("computed price overflows"));
    }

    #[test]
    fn check_rejects_negative_fixed_price_and_factor() {
        assert!(PriceFormula::Fixed(price(-1)).check().is_err());
        assert!(PriceFormula::Factor(Decimal::new(-5, 1)).check().is_err());
        assert!(PriceFormula::Offset(price(-100)).check().is_ok());
        assert!(PriceFormula::Fixed(Decimal::ZERO).check().is_ok());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(PriceFormula::Factor(Decimal::new(9, 1))).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "factor", "value": "0.9"}));
    }
}
