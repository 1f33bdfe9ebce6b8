// Product catalog
//
// The catalog is the fixed, ordered list of products shown in the browser.
// It is built once at startup (either the built-in set or a TOML file) and
// handed to the App; nothing mutates it afterwards.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A purchasable item
///
/// Identity is value equality: two products with identical fields are the
/// same product as far as selection is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Display-formatted price ("$100"), never parsed as a number
    pub price: String,
    pub description: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: description.into(),
        }
    }
}

/// Ordered, immutable product list (display order = catalog order)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

/// On-disk catalog layout: a list of `[[products]]` tables
#[derive(Debug, Deserialize, Default)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Self {
        Self::new(vec![
            Product::new(
                "Kayali | Vanilla",
                "$100",
                "This is a 1.7oz bottle of perfume. It has key notes of Vanilla Orchids, Tonka Absolute, and Amber Woods.",
            ),
            Product::new(
                "YSL | Black Opium",
                "$130",
                "This is a 1.6oz bottle of perfume. It has key notes of Black Coffee, White Flowers, and Vanilla.",
            ),
            Product::new(
                "Marc Jacobs | Daisy",
                "$186",
                "This is a 6.80z bottle of perfume. It has key notes of Strawberry, Violet Leaves, and Jasmine.",
            ),
        ])
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents).context("Invalid catalog TOML")?;
        Ok(Self::new(file.products))
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Row index of a product, by value equality
    pub fn position(&self, product: &Product) -> Option<usize> {
        self.products.iter().position(|p| p == product)
    }

    pub fn contains(&self, product: &Product) -> bool {
        self.position(product).is_some()
    }

    /// First product whose name matches exactly
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
