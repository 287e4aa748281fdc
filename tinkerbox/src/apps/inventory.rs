//! # Products List
//!
//! An in-memory product list. Products are picked from a catalog
//! (category, then item), then priced and counted with bounded numeric
//! prompts. Nothing is persisted: the list lives as long as the session.

use crate::catalog::{Catalog, CatalogSelector, Selection};
use crate::utils::{NumericConstraint, Outcome, Terminal};
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::info;

/// A product line in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub category: String,
}

impl Product {
    pub fn new(selection: Selection, price: f64, quantity: u32) -> Self {
        Self {
            name: selection.item,
            price,
            quantity,
            category: selection.category,
        }
    }

    pub fn value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Product: {}, Category: {}, Price: {:.2}, Quantity: {}",
            self.name, self.category, self.price, self.quantity
        )
    }
}

/// Accepted prices: anything strictly positive.
pub fn price_constraint() -> NumericConstraint {
    NumericConstraint::new()
}

/// Accepted quantities: positive whole numbers that fit a `u32`.
pub fn quantity_constraint() -> NumericConstraint {
    NumericConstraint::new().at_most(f64::from(u32::MAX)).whole()
}

#[derive(Debug, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn total_value(&self) -> f64 {
        self.products.iter().map(Product::value).sum()
    }

    /// Selection, price, quantity, then the record is stored.
    ///
    /// Nothing is stored unless every step produced a value.
    pub fn add_product<R: BufRead, W: Write>(
        &mut self,
        terminal: &mut Terminal<R, W>,
        selector: &CatalogSelector<'_>,
    ) -> Outcome<()> {
        let selection = match selector.select(terminal) {
            Outcome::Value(selection) => selection,
            Outcome::Aborted => return Outcome::Aborted,
            Outcome::Exhausted => return Outcome::Exhausted,
        };

        let price = terminal.validate("Enter the price of the product:", &price_constraint());
        let price = match price {
            Outcome::Value(price) => price,
            Outcome::Aborted => return Outcome::Aborted,
            Outcome::Exhausted => return Outcome::Exhausted,
        };

        let quantity =
            terminal.validate("Enter the quantity of the product:", &quantity_constraint());
        // The constraint keeps the value whole and within u32, so the cast is exact.
        let quantity = match quantity {
            Outcome::Value(quantity) => quantity as u32,
            Outcome::Aborted => return Outcome::Aborted,
            Outcome::Exhausted => return Outcome::Exhausted,
        };

        let product = Product::new(selection, price, quantity);
        info!(
            name = %product.name,
            category = %product.category,
            price = product.price,
            quantity = product.quantity,
            "product added"
        );
        terminal.say("Product added successfully!");

        self.products.push(product);
        Outcome::Value(())
    }

    pub fn list<R: BufRead, W: Write>(&self, terminal: &mut Terminal<R, W>) {
        if self.products.is_empty() {
            terminal.say("No products available.");
            return;
        }

        for product in &self.products {
            terminal.say(product);
        }
        terminal.say(format_args!("Total value: {:.2}", self.total_value()));
    }

    /// Products sub-menu. Returns when the user quits or the input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, terminal: &mut Terminal<R, W>, catalog: &Catalog) {
        let selector = CatalogSelector::new(catalog);

        loop {
            let choice = terminal.menu(
                "Products List:",
                &["Add a product", "List product details", "Quit"],
            );
            match choice {
                Outcome::Value(1) => match self.add_product(terminal, &selector) {
                    Outcome::Value(()) => {}
                    Outcome::Aborted => terminal.say("No product added."),
                    Outcome::Exhausted => return,
                },
                Outcome::Value(2) => self.list(terminal),
                _ => {
                    terminal.say("Exiting the products list.");
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::terminal::tests::{output, terminal};

    fn groceries() -> Catalog {
        Catalog::builder()
            .category("Bakery", ["Bread", "Bagel"])
            .category("Dairy", ["Milk", "Cheese"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_add_product_end_to_end() {
        let catalog = groceries();
        let selector = CatalogSelector::new(&catalog);
        let mut inventory = Inventory::new();
        let mut t = terminal("1\nbread\n1.5\n10\n");

        let res = inventory.add_product(&mut t, &selector);
        let expected = Product {
            name: "Bread".to_string(),
            price: 1.5,
            quantity: 10,
            category: "Bakery".to_string(),
        };
        assert_eq!(res, Outcome::Value(()));
        assert_eq!(inventory.products(), &[expected]);
        assert!(output(&t).contains("Product added successfully!"));
    }

    #[test]
    fn test_add_product_rejects_fractional_quantity() {
        let catalog = groceries();
        let selector = CatalogSelector::new(&catalog);
        let mut inventory = Inventory::new();
        let mut t = terminal("1\nBread\n1.5\n0.7\n");

        let res = inventory.add_product(&mut t, &selector);
        assert_eq!(res, Outcome::Exhausted);
        assert!(inventory.is_empty());
        assert!(output(&t).contains("Value must be a whole number, try again!"));
    }

    #[test]
    fn test_add_product_exit_stores_nothing() {
        let catalog = groceries();
        let selector = CatalogSelector::new(&catalog);
        let mut inventory = Inventory::new();
        let mut t = terminal("3\n");

        assert_eq!(inventory.add_product(&mut t, &selector), Outcome::Aborted);
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_list_empty_and_filled() {
        let mut inventory = Inventory::new();
        let mut t = terminal("");
        inventory.list(&mut t);
        assert_eq!(output(&t), "No products available.\n");

        inventory.add(Product {
            name: "Milk".to_string(),
            price: 0.99,
            quantity: 2,
            category: "Dairy".to_string(),
        });
        let mut t = terminal("");
        inventory.list(&mut t);
        assert_eq!(
            output(&t),
            "Product: Milk, Category: Dairy, Price: 0.99, Quantity: 2\nTotal value: 1.98\n"
        );
    }

    #[test]
    fn test_run_adds_lists_and_quits() {
        let catalog = groceries();
        let mut inventory = Inventory::new();
        let mut t = terminal("1\n2\ncheese\n3.25\n4\n1\n3\n2\n3\n");

        inventory.run(&mut t, &catalog);
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.total_value(), 13.0);

        let out = output(&t);
        assert!(out.contains("No product added."));
        assert!(out.contains("Product: Cheese, Category: Dairy, Price: 3.25, Quantity: 4"));
        assert!(out.ends_with("Exiting the products list.\n"));
    }
}
