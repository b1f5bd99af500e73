use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pricelist_core::{DomainError, Entity, PriceListId};

use crate::engine::{PriceEngine, PriceRequest};
use crate::error::{PricingError, PricingResult};
use crate::line::{LineField, PriceListLine};
use crate::pattern::Pattern;
use crate::validation::{CategoryLineValidation, LineValidation};

/// Stock price list: the first line matching the pattern prices the product.
///
/// Deserializing goes through [`StandardPriceList::save_lines`], so a loaded
/// list is sorted and validated like a saved one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredPriceList")]
pub struct StandardPriceList {
    id: PriceListId,
    name: String,
    lines: Vec<PriceListLine>,
}

/// Wire shape of a price list, before its lines are checked.
#[derive(Deserialize)]
struct StoredPriceList {
    id: PriceListId,
    name: String,
    #[serde(default)]
    lines: Vec<PriceListLine>,
}

impl TryFrom<StoredPriceList> for StandardPriceList {
    type Error = PricingError;

    fn try_from(stored: StoredPriceList) -> Result<Self, Self::Error> {
        let mut list = StandardPriceList::new(stored.id, stored.name)?;
        list.save_lines(stored.lines, &CategoryLineValidation::standard())?;
        Ok(list)
    }
}

impl StandardPriceList {
    pub fn new(id: PriceListId, name: impl Into<String>) -> PricingResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("price list name cannot be empty").into());
        }

        Ok(Self {
            id,
            name,
            lines: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lines in evaluation order (ascending `sequence`).
    pub fn lines(&self) -> &[PriceListLine] {
        &self.lines
    }

    /// Replaces the lines with `lines` once `validation` accepts the batch.
    ///
    /// A rejected batch leaves the current lines untouched.
    pub fn save_lines<V>(&mut self, lines: Vec<PriceListLine>, validation: &V) -> PricingResult<()>
    where
        V: LineValidation + ?Sized,
    {
        validation.validate(&lines)?;

        let mut lines = lines;
        // Stable: lines sharing a sequence keep their submitted order.
        lines.sort_by_key(|line| line.sequence);
        self.lines = lines;
        Ok(())
    }

    /// First line applying to `pattern` at `quantity`.
    pub fn matching_line(&self, pattern: &Pattern, quantity: Decimal) -> Option<&PriceListLine> {
        self.lines.iter().find(|line| line.matches(pattern, quantity))
    }
}

impl Entity for StandardPriceList {
    type Id = PriceListId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PriceEngine for StandardPriceList {
    fn compute(
        &self,
        request: &PriceRequest<'_>,
        pattern: Option<&Pattern>,
    ) -> PricingResult<Decimal> {
        let mut pattern = pattern.cloned().unwrap_or_default();
        pattern.insert(LineField::Product.key(), request.product.id_typed());

        let Some(line) = self.matching_line(&pattern, request.quantity) else {
            debug!(
                price_list = %self.id,
                product = %request.product.id_typed(),
                "no price list line matched; keeping unit price"
            );
            return Ok(request.unit_price);
        };

        debug!(
            price_list = %self.id,
            product = %request.product.id_typed(),
            line = ?line.id,
            sequence = line.sequence,
            "price list line matched"
        );
        Ok(line.formula.apply(request.unit_price)?)
    }
}
