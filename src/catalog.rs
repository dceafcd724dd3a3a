//! Product Catalog
//!
//! Read-only product records as delivered by the (external) catalog
//! source. The triage core only cares about [`ProductId`]; every other
//! field passes through opaquely to the render layer, with fallbacks
//! for absent optional fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback asset path used when a product carries no image URL.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.png";

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog error types
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Payload could not be parsed as a product list
    #[error("failed to parse catalog payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// IO error while reading a catalog file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}

/// Opaque product identifier, the only field the core interprets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single catalog entry. Only `id` is required; everything else is
/// optional with rendering-time fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Brand name
    #[serde(default)]
    pub brand: Option<String>,

    /// Current price
    #[serde(default)]
    pub price: Option<f64>,

    /// Pre-discount price
    #[serde(default)]
    pub original_price: Option<f64>,

    /// Discount percentage, when on sale
    #[serde(default)]
    pub discount_percentage: Option<f64>,

    /// Card image URL
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    /// Create a bare product from an id (all optional fields empty).
    pub fn from_id(id: u64) -> Self {
        Self {
            id: ProductId(id),
            name: None,
            brand: None,
            price: None,
            original_price: None,
            discount_percentage: None,
            image_url: None,
        }
    }

    /// Image URL with placeholder fallback.
    pub fn image_url_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Price label for display; empty when the field is absent.
    pub fn price_label(&self) -> String {
        self.price.map(|p| format!("${p}")).unwrap_or_default()
    }

    /// Discount label ("<pct>% OFF <original>"); empty unless both
    /// discount fields are present.
    pub fn discount_label(&self) -> String {
        match (self.discount_percentage, self.original_price) {
            (Some(pct), Some(orig)) => format!("{pct}% OFF ${orig}"),
            _ => String::new(),
        }
    }
}

/// An ordered product catalog, as loaded from the external source.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an ordered product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from a JSON array payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(payload)?;
        Ok(Self { products })
    }

    /// Load a catalog from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let payload = std::fs::read_to_string(path)?;
        Self::from_json(&payload)
    }

    /// Catalog ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.products.iter().map(|p| p.id)
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let payload = r#"[{
            "id": 7,
            "name": "canvas tote",
            "brand": "acme",
            "price": 24.5,
            "originalPrice": 49.0,
            "discountPercentage": 50.0,
            "imageUrl": "https://cdn.example/tote.jpg"
        }]"#;

        let catalog = Catalog::from_json(payload).unwrap();
        assert_eq!(catalog.len(), 1);

        let product = catalog.get(ProductId(7)).unwrap();
        assert_eq!(product.name.as_deref(), Some("canvas tote"));
        assert_eq!(product.image_url_or_placeholder(), "https://cdn.example/tote.jpg");
        assert_eq!(product.price_label(), "$24.5");
        assert_eq!(product.discount_label(), "50% OFF $49");
    }

    #[test]
    fn test_parse_id_only_record() {
        let catalog = Catalog::from_json(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(catalog.len(), 2);

        let product = catalog.get(ProductId(1)).unwrap();
        assert_eq!(product.image_url_or_placeholder(), PLACEHOLDER_IMAGE);
        assert_eq!(product.price_label(), "");
        assert_eq!(product.discount_label(), "");
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result = Catalog::from_json(r#"[{"name": "no id"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_ids_preserve_catalog_order() {
        let catalog = Catalog::from_json(r#"[{"id": 3}, {"id": 1}, {"id": 2}]"#).unwrap();
        let ids: Vec<u64> = catalog.ids().map(|id| id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_discount_label_requires_both_fields() {
        let mut product = Product::from_id(1);
        product.discount_percentage = Some(20.0);
        assert_eq!(product.discount_label(), "");

        product.original_price = Some(80.0);
        assert_eq!(product.discount_label(), "20% OFF $80");
    }
}
