//! Price list lines: one rule row of a price list.
//!
//! A line applies to a single product, to every product of a category, or
//! (when neither is set) to all products. Setting both is representable, so a
//! programmatic write can produce it, but validation rejects such a line before
//! it is stored.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use pricelist_core::{CategoryId, PriceListLineId, ProductId, ValueObject};

use crate::error::{PricingError, PricingResult};
use crate::formula::PriceFormula;
use crate::pattern::Pattern;

/// The two mutually exclusive reference fields of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineField {
    Product,
    Category,
}

impl LineField {
    /// Pattern key matched against this field.
    pub fn key(self) -> &'static str {
        match self {
            LineField::Product => "product",
            LineField::Category => "category",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "product" => Some(LineField::Product),
            "category" => Some(LineField::Category),
            _ => None,
        }
    }

    /// The field cleared when this one is set.
    pub fn opposite(self) -> Self {
        match self {
            LineField::Product => LineField::Category,
            LineField::Category => LineField::Product,
        }
    }
}

/// Which of `product` / `category` a line currently references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSelection {
    /// Applies to all products.
    Neither,
    Product,
    Category,
    /// Rejected by validation.
    Both,
}

/// Field updates proposed by an interactive change handler.
///
/// The only update a handler ever proposes is clearing a field, so the set
/// holds the fields to reset to empty. Serializes as `{"category": null}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineChanges {
    cleared: BTreeSet<LineField>,
}

impl LineChanges {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn clear(field: LineField) -> Self {
        Self {
            cleared: BTreeSet::from([field]),
        }
    }

    pub fn clears(&self, field: LineField) -> bool {
        self.cleared.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.cleared.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = LineField> + '_ {
        self.cleared.iter().copied()
    }
}

impl ValueObject for LineChanges {}

impl Serialize for LineChanges {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cleared.len()))?;
        for field in &self.cleared {
            map.serialize_entry(field.key(), &Value::Null)?;
        }
        map.end()
    }
}

/// One rule row of a price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceListLine {
    /// Assigned by storage; `None` until the line is saved.
    #[serde(default)]
    pub id: Option<PriceListLineId>,
    #[serde(default)]
    pub sequence: u32,
    #[serde(default)]
    pub product: Option<ProductId>,
    #[serde(default)]
    pub category: Option<CategoryId>,
    /// Minimum quantity for the line to apply.
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub formula: PriceFormula,
}

impl PriceListLine {
    /// A line applying to all products.
    pub fn new(sequence: u32, formula: PriceFormula) -> Self {
        Self {
            id: None,
            sequence,
            product: None,
            category: None,
            quantity: Decimal::ZERO,
            formula,
        }
    }

    pub fn with_id(mut self, id: PriceListLineId) -> Self {
        self.id = Some(id);
        self
    }

    /// Programmatic write: does not clear `category`.
    pub fn for_product(mut self, product: ProductId) -> Self {
        self.product = Some(product);
        self
    }

    /// Programmatic write: does not clear `product`.
    pub fn for_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_min_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn selection(&self) -> LineSelection {
        match (self.product.is_some(), self.category.is_some()) {
            (false, false) => LineSelection::Neither,
            (true, false) => LineSelection::Product,
            (false, true) => LineSelection::Category,
            (true, true) => LineSelection::Both,
        }
    }

    /// Change handler for an interactive edit of `product`.
    pub fn on_change_product(&self) -> LineChanges {
        if self.product.is_some() {
            LineChanges::clear(LineField::Category)
        } else {
            LineChanges::none()
        }
    }

    /// Change handler for an interactive edit of `category`.
    pub fn on_change_category(&self) -> LineChanges {
        if self.category.is_some() {
            LineChanges::clear(LineField::Product)
        } else {
            LineChanges::none()
        }
    }

    pub fn apply_changes(&mut self, changes: &LineChanges) {
        for field in changes.iter() {
            match field {
                LineField::Product => self.product = None,
                LineField::Category => self.category = None,
            }
        }
    }

    /// Interactive edit of `product`: sets it, runs the change handler and
    /// applies what it proposes.
    pub fn edit_product(&mut self, product: Option<ProductId>) -> LineChanges {
        self.product = product;
        let changes = self.on_change_product();
        self.apply_changes(&changes);
        changes
    }

    /// Interactive edit of `category`, symmetric to [`Self::edit_product`].
    pub fn edit_category(&mut self, category: Option<CategoryId>) -> LineChanges {
        self.category = category;
        let changes = self.on_change_category();
        self.apply_changes(&changes);
        changes
    }

    /// A field is read-only in forms while its opposite is set.
    pub fn is_readonly(&self, field: LineField) -> bool {
        match field.opposite() {
            LineField::Product => self.product.is_some(),
            LineField::Category => self.category.is_some(),
        }
    }

    pub fn check_product_and_category(&self) -> PricingResult<()> {
        if self.selection() == LineSelection::Both {
            return Err(PricingError::ProductAndCategoryTogether { line: self.id });
        }
        Ok(())
    }

    fn field_value(&self, key: &str) -> Option<Value> {
        match LineField::from_key(key)? {
            LineField::Product => self.product.map(Value::from),
            LineField::Category => self.category.map(Value::from),
        }
    }

    /// Whether the line applies to `pattern` at `quantity`.
    ///
    /// Unset line fields match any value; pattern keys the line has no field
    /// for are ignored.
    pub fn matches(&self, pattern: &Pattern, quantity: Decimal) -> bool {
        if self.quantity > quantity.abs() {
            return false;
        }
        pattern.iter().all(|(key, value)| match self.field_value(key) {
            Some(own) => own == *value,
            None => true,
        })
    }
}
