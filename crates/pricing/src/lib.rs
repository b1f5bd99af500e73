//! Price list domain module.
//!
//! Extends the stock price list with product categories:
//! - [`CategoryPriceList`] adds the product's category to the match pattern
//!   before delegating to a base [`PriceEngine`];
//! - [`PriceListLine`] references a product or a category, never both, with
//!   interactive change handlers keeping the two fields mutually clearing and
//!   [`CategoryLineValidation`] rejecting lines that set both.
//!
//! Pure domain logic: no IO, no storage.

pub mod category_price_list;
pub mod engine;
pub mod error;
pub mod formula;
pub mod line;
pub mod pattern;
pub mod price_list;
pub mod validation;

pub use category_price_list::{CategoryPriceList, augment_pattern};
pub use engine::{PriceEngine, PriceRequest};
pub use error::{PricingError, PricingResult};
pub use formula::PriceFormula;
pub use line::{LineChanges, LineField, LineSelection, PriceListLine};
pub use pattern::Pattern;
pub use price_list::StandardPriceList;
pub use validation::{BaseLineValidation, CategoryLineValidation, LineValidation};
