//! Products domain module.
//!
//! This crate contains the catalog records pricing works against, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::Product;
