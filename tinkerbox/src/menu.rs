//! # Top-level Menu
//!
//! [`Toolbox`] owns everything a session needs (the injected catalogs and
//! the products list) and dispatches to the mini-tools until the user
//! quits.

use crate::apps::{encoder, energy, inventory::Inventory};
use crate::catalog::Catalog;
use crate::utils::{Outcome, Terminal};
use std::io::{BufRead, Write};
use tracing::info;

const OPTIONS: [&str; 4] = [
    "Run Energy Calculator",
    "Manage Products List",
    "Run Character Encoder",
    "Quit",
];

#[derive(Debug)]
pub struct Toolbox {
    products: Catalog,
    appliances: Catalog,
    inventory: Inventory,
}

impl Default for Toolbox {
    fn default() -> Self {
        Toolbox::new(Catalog::products(), Catalog::appliances())
    }
}

impl Toolbox {
    pub fn new(products: Catalog, appliances: Catalog) -> Self {
        Self {
            products,
            appliances,
            inventory: Inventory::new(),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Runs until "Quit" is picked or the input ends.
    ///
    /// The products list is kept between visits.
    pub fn run<R: BufRead, W: Write>(&mut self, terminal: &mut Terminal<R, W>) {
        loop {
            match terminal.menu("Main menu:", &OPTIONS) {
                Outcome::Value(1) => energy::run(terminal, &self.appliances),
                Outcome::Value(2) => self.inventory.run(terminal, &self.products),
                Outcome::Value(3) => encoder::run(terminal),
                _ => break,
            }
        }

        info!(products = self.inventory.len(), "session finished");
        terminal.say("Exiting the program.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::terminal::tests::{output, terminal};

    #[test]
    fn test_run_dispatches_and_quits() {
        let mut toolbox = Toolbox::default();
        let mut t = terminal("7\n3\nabc\n4\n");
        toolbox.run(&mut t);

        let out = output(&t);
        assert!(out.starts_with(concat!(
            "Main menu:\n",
            "1. Run Energy Calculator\n",
            "2. Manage Products List\n",
            "3. Run Character Encoder\n",
            "4. Quit\n",
        )));
        assert!(out.contains("Invalid choice, please pick a number between 1 and 4."));
        assert!(out.contains("Encoded string: 00001 00010 00011"));
        assert!(out.ends_with("Exiting the program.\n"));
    }

    #[test]
    fn test_inventory_survives_between_visits() {
        let mut toolbox = Toolbox::default();
        let mut t = terminal("2\n1\n1\nbread\n1.5\n10\n3\n2\n2\n3\n4\n");
        toolbox.run(&mut t);

        assert_eq!(toolbox.inventory().len(), 1);
        let out = output(&t);
        assert!(out.contains("Product: Bread, Category: Bakery, Price: 1.50, Quantity: 10"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut toolbox = Toolbox::default();
        let mut t = terminal("1\n");
        toolbox.run(&mut t);
        assert!(output(&t).ends_with("Exiting the program.\n"));
    }
}
