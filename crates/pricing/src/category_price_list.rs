//! Category matching for price computation.
//!
//! `CategoryPriceList` wraps a base engine and adds the product's category to
//! the match pattern, so a single category line prices every product filed
//! under that category. The base engine's matching is left as is: it already
//! compares every pattern key with the line field of the same name.

use rust_decimal::Decimal;
use serde_json::Value;

use pricelist_products::Product;

use crate::engine::{PriceEngine, PriceRequest};
use crate::error::PricingResult;
use crate::line::LineField;
use crate::pattern::Pattern;

/// Copy of `pattern` (or an empty one) with `category` set from `product`.
///
/// The key is always present: `null` when the product has no category. A
/// `category` supplied by the caller is overwritten.
pub fn augment_pattern(pattern: Option<&Pattern>, product: &Product) -> Pattern {
    let mut pattern = pattern.cloned().unwrap_or_default();
    let category = product.category().map_or(Value::Null, Value::from);
    pattern.insert(LineField::Category.key(), category);
    pattern
}

/// Price engine matching lines on product category as well as product.
#[derive(Debug, Clone)]
pub struct CategoryPriceList<E> {
    inner: E,
}

impl<E> CategoryPriceList<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: PriceEngine> PriceEngine for CategoryPriceList<E> {
    fn compute(
        &self,
        request: &PriceRequest<'_>,
        pattern: Option<&Pattern>,
    ) -> PricingResult<Decimal> {
        let pattern = augment_pattern(pattern, request.product);
        self.inner.compute(request, Some(&pattern))
    }
}
