use serde::{Deserialize, Serialize};

use pricelist_core::{CategoryId, DomainError, DomainResult, Entity, ProductId, UomId};

/// Product as seen by pricing: identity, default unit and (optional) category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    #[serde(default)]
    category: Option<CategoryId>,
    default_uom: UomId,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, default_uom: UomId) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            category: None,
            default_uom,
        })
    }

    /// Builder-style helper to file the product under a category.
    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category the product belongs to, if any.
    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    pub fn set_category(&mut self, category: Option<CategoryId>) {
        self.category = category;
    }

    pub fn default_uom(&self) -> UomId {
        self.default_uom
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> UomId {
        UomId::new(1)
    }

    #[test]
    fn new_product_has_no_category() {
        let product = Product::new(ProductId::new(42), "Sparkling Water", unit()).unwrap();
        assert_eq!(product.category(), None);
        assert_eq!(product.id(), &ProductId::new(42));
        assert_eq!(product.default_uom(), unit());
    }

    #[test]
    fn with_category_files_the_product() {
        let product = Product::new(ProductId::new(42), "Sparkling Water", unit())
            .unwrap()
            .with_category(CategoryId::new(7));
        assert_eq!(product.category(), Some(CategoryId::new(7)));
    }

    #[test]
    fn category_can_be_cleared() {
        let mut product = Product::new(ProductId::new(42), "Sparkling Water", unit())
            .unwrap()
            .with_category(CategoryId::new(7));
        product.set_category(None);
        assert_eq!(product.category(), None);
    }

    #[test]
    fn identity_survives_recategorization() {
        let before = Product::new(ProductId::new(42), "Sparkling Water", unit()).unwrap();
        let after = before.clone().with_category(CategoryId::new(7));
        assert_ne!(before, after);
        assert!(before.is_same(&after));
    }

    #[test]
    fn rejects_empty_name() {
        let err = Product::new(ProductId::new(1), "   ", unit()).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn deserializes_without_category() {
        let product: Product =
            serde_json::from_str(r#"{"id": 3, "name": "Bolt", "default_uom": 1}"#).unwrap();
        assert_eq!(product.category(), None);
        assert_eq!(product.name(), "Bolt");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the category reported is exactly the one assigned.
            #[test]
            fn category_round_trips_through_setter(
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                category in proptest::option::of(any::<u64>())
            ) {
                let mut product = Product::new(ProductId::new(1), name, UomId::new(1)).unwrap();
                product.set_category(category.map(CategoryId::new));
                prop_assert_eq!(product.category().map(CategoryId::get), category);
            }
        }
    }
}
