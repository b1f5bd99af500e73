//! The price engine seam: anything able to turn a request into a unit price.

use std::sync::Arc;

use rust_decimal::Decimal;

use pricelist_core::{PartyId, UomId};
use pricelist_products::Product;

use crate::error::PricingResult;
use crate::pattern::Pattern;

/// Inputs of a single price computation (e.g. pricing a sales order line).
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRequest<'a> {
    pub party: Option<PartyId>,
    pub product: &'a Product,
    /// Base unit price, in company currency and the product's default unit.
    pub unit_price: Decimal,
    pub quantity: Decimal,
    pub uom: UomId,
}

impl<'a> PriceRequest<'a> {
    pub fn new(product: &'a Product, unit_price: Decimal, quantity: Decimal, uom: UomId) -> Self {
        Self {
            party: None,
            product,
            unit_price,
            quantity,
            uom,
        }
    }

    pub fn for_party(mut self, party: PartyId) -> Self {
        self.party = Some(party);
        self
    }
}

/// Computes a unit price from a request and an optional match pattern.
///
/// Implementations must treat `pattern` as read-only input; callers may reuse
/// it across computations.
pub trait PriceEngine: Send + Sync {
    fn compute(
        &self,
        request: &PriceRequest<'_>,
        pattern: Option<&Pattern>,
    ) -> PricingResult<Decimal>;
}

impl<E: PriceEngine + ?Sized> PriceEngine for &E {
    fn compute(
        &self,
        request: &PriceRequest<'_>,
        pattern: Option<&Pattern>,
    ) -> PricingResult<Decimal> {
        (**self).compute(request, pattern)
    }
}

impl<E: PriceEngine + ?Sized> PriceEngine for Box<E> {
    fn compute(
        &self,
        request: &PriceRequest<'_>,
        pattern: Option<&Pattern>,
    ) -> PricingResult<Decimal> {
        (**self).compute(request, pattern)
    }
}

impl<E: PriceEngine + ?Sized> PriceEngine for Arc<E> {
    fn compute(
        &self,
        request: &PriceRequest<'_>,
        pattern: Option<&Pattern>,
    ) -> PricingResult<Decimal> {
        (**self).compute(request, pattern)
    }
}
