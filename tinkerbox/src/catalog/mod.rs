//! # Catalog
//!
//! A fixed, two-level lookup table: category name → ordered list of item
//! names. Tools never ask users to type free-form product or appliance
//! names; they walk them through a catalog with a [`CatalogSelector`].
//!
//! A catalog is built once, validated, and then only ever read. Category
//! order is insertion order and is the order in which categories are
//! numbered on screen.
//!
//! ## Building
//!
//! ```rust
//! use tinkerbox::catalog::Catalog;
//!
//! let catalog = Catalog::builder()
//!     .category("Bakery", ["Bread", "Bagel"])
//!     .category("Dairy", ["Milk", "Cheese"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(catalog.category_at(2).map(|c| c.name()), Some("Dairy"));
//! assert_eq!(catalog.find_item("Dairy", "mILK"), Some("Milk"));
//! ```
//!
//! ## Providers
//!
//! - [`Catalog::products`] and [`Catalog::appliances`] are the built-in
//!   tables used by the inventory and energy tools.
//! - With the `json-catalog` feature, `Catalog::from_json_str` and
//!   `Catalog::from_json_file` load a replacement table:
//!
//! ```json
//! [
//!   { "name": "Bakery", "items": ["Bread", "Bagel"] },
//!   { "name": "Dairy",  "items": ["Milk", "Cheese"] }
//! ]
//! ```

pub mod selector;
pub use selector::{CatalogSelector, Selection};

cfg_if::cfg_if! {
    if #[cfg(feature = "json-catalog")] {
        mod loader;
    }
}

use std::path::PathBuf;
use thiserror::Error;

/// Why a catalog could not be built or loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("the catalog has no categories")]
    Empty,

    #[error("a category name is blank")]
    BlankCategory,

    #[error("category '{0}' is declared more than once")]
    DuplicateCategory(String),

    #[error("category '{0}' has no items")]
    EmptyCategory(String),

    #[error("category '{0}' contains a blank item name")]
    BlankItem(String),

    #[error("item '{item}' appears more than once in category '{category}'")]
    DuplicateItem { category: String, item: String },

    #[error("couldn't read catalog file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Json(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// One category and its items, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json-catalog", derive(serde::Deserialize))]
pub struct Category {
    name: String,
    items: Vec<String>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Case-insensitive lookup returning the stored spelling.
    pub fn find(&self, typed: &str) -> Option<&str> {
        let typed = typed.trim().to_lowercase();
        self.items
            .iter()
            .find(|item| item.to_lowercase() == typed)
            .map(String::as_str)
    }
}

const PRODUCTS: &[(&str, &[&str])] = &[
    ("Bakery", &["Bread", "Bagel", "Croissant", "Muffin", "Baguette"]),
    ("Dairy", &["Milk", "Cheese", "Butter", "Yogurt", "Cream"]),
    ("Produce", &["Apple", "Banana", "Carrot", "Lettuce", "Tomato"]),
    ("Beverages", &["Coffee", "Tea", "Orange Juice", "Sparkling Water"]),
    ("Pantry", &["Rice", "Pasta", "Flour", "Sugar", "Olive Oil"]),
];

const APPLIANCES: &[(&str, &[&str])] = &[
    ("Kitchen", &["Refrigerator", "Microwave", "Oven", "Dishwasher", "Kettle"]),
    ("Laundry", &["Washing Machine", "Tumble Dryer", "Iron"]),
    ("Entertainment", &["Television", "Games Console", "Sound System", "Desktop Computer"]),
    ("Climate", &["Air Conditioner", "Space Heater", "Ceiling Fan", "Dehumidifier"]),
    ("Lighting", &["LED Bulb", "Halogen Lamp", "Fluorescent Tube"]),
];

/// Read-only category → items table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

/// Collects categories in display order; [`CatalogBuilder::build`] validates them.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    categories: Vec<Category>,
}

impl CatalogBuilder {
    pub fn category<N, I, S>(mut self, name: N, items: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.push(Category {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        Catalog::from_categories(self.categories)
    }
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Validates and wraps an ordered list of categories.
    ///
    /// Names are trimmed. Category names must be unique across the catalog
    /// and item names unique within their category, both ignoring case,
    /// since selection matches them case-insensitively.
    pub fn from_categories(categories: Vec<Category>) -> Result<Catalog, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut cleaned: Vec<Category> = Vec::with_capacity(categories.len());
        for category in categories {
            let name = category.name.trim().to_string();
            if name.is_empty() {
                return Err(CatalogError::BlankCategory);
            }
            if cleaned
                .iter()
                .any(|seen| seen.name.to_lowercase() == name.to_lowercase())
            {
                return Err(CatalogError::DuplicateCategory(name));
            }
            if category.items.is_empty() {
                return Err(CatalogError::EmptyCategory(name));
            }

            let mut items: Vec<String> = Vec::with_capacity(category.items.len());
            for item in category.items {
                let item = item.trim().to_string();
                if item.is_empty() {
                    return Err(CatalogError::BlankItem(name));
                }
                if items.iter().any(|seen| seen.to_lowercase() == item.to_lowercase()) {
                    return Err(CatalogError::DuplicateItem {
                        category: name,
                        item,
                    });
                }
                items.push(item);
            }

            cleaned.push(Category { name, items });
        }

        Ok(Catalog {
            categories: cleaned,
        })
    }

    /// Built-in tables are known to be valid; they skip [`Catalog::from_categories`].
    fn fixed(table: &[(&str, &[&str])]) -> Catalog {
        Catalog {
            categories: table
                .iter()
                .map(|(name, items)| Category {
                    name: name.to_string(),
                    items: items.iter().map(|item| item.to_string()).collect(),
                })
                .collect(),
        }
    }

    /// Grocery table used by the products list.
    pub fn products() -> Catalog {
        Catalog::fixed(PRODUCTS)
    }

    /// Household appliance table used by the energy calculator.
    pub fn appliances() -> Catalog {
        Catalog::fixed(APPLIANCES)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Exact-name category lookup.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn items(&self, category: &str) -> Option<&[String]> {
        self.category(category).map(Category::items)
    }

    /// 1-based positional lookup, matching the on-screen numbering.
    pub fn category_at(&self, position: usize) -> Option<&Category> {
        position
            .checked_sub(1)
            .and_then(|index| self.categories.get(index))
    }

    /// Canonical item name for `typed` inside `category`, ignoring case.
    pub fn find_item(&self, category: &str, typed: &str) -> Option<&str> {
        self.category(category).and_then(|c| c.find(typed))
    }
}
