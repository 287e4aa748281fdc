//! # Catalog Selection
//!
//! Guided two-step selection over a [`Catalog`]:
//!
//! ```text
//! CategoryPick ──(1..=N)──> ItemPick ──(name)──> done
//!      │
//!      └──(N+1 "Exit")──> aborted
//! ```
//!
//! Categories are picked by their on-screen number. Items are picked by
//! typing their name in any case; `list` prints the items again. Once a
//! category is committed there is no way back to the category menu, the
//! "Exit" entry is the only early way out (plus the cancel token, when the
//! terminal's [`crate::utils::RetryPolicy`] defines one).
//!
//! ```rust
//! use std::io::Cursor;
//! use tinkerbox::catalog::{Catalog, CatalogSelector, Selection};
//! use tinkerbox::utils::{Outcome, Terminal};
//!
//! let catalog = Catalog::builder()
//!     .category("Bakery", ["Bread", "Bagel"])
//!     .category("Dairy", ["Milk", "Cheese"])
//!     .build()
//!     .unwrap();
//!
//! let mut terminal = Terminal::new(Cursor::new("2\nmilk\n"), Vec::new());
//! let picked = CatalogSelector::new(&catalog).select(&mut terminal);
//! assert_eq!(
//!     picked,
//!     Outcome::Value(Selection { category: "Dairy".into(), item: "Milk".into() })
//! );
//! ```

use super::{Catalog, Category};
use crate::utils::{FilterError, Outcome, Terminal, Verdict};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Typed at the item prompt to print the items again.
pub const LIST_TOKEN: &str = "list";

const ITEM_PROMPT: &str = "Enter the item name (or 'list' to see the items again):";

/// A committed (category, item) pair, using the catalog's spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub category: String,
    pub item: String,
}

/// Walks a user through a borrowed, read-only [`Catalog`].
#[derive(Debug, Clone, Copy)]
pub struct CatalogSelector<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogSelector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Numbered category menu followed by an `N+1. Exit` entry.
    ///
    /// Returns [`Outcome::Aborted`] when "Exit" is picked.
    pub fn select_category<R: BufRead, W: Write>(
        &self,
        terminal: &mut Terminal<R, W>,
    ) -> Outcome<&'a str> {
        let mut options: Vec<&str> =
            self.catalog.categories().iter().map(Category::name).collect();
        options.push("Exit");

        terminal
            .menu("Select a category:", &options)
            .and_then(|position| match self.catalog.category_at(position) {
                Some(category) => Outcome::Value(category.name()),
                // Only the trailing "Exit" entry lies past the categories.
                None => {
                    debug!("category selection exited");
                    Outcome::Aborted
                }
            })
    }

    /// Lists the items of `category` and asks for one by name.
    ///
    /// Matching ignores case and returns the catalog's own spelling. A
    /// category that isn't in the catalog is a caller bug: it is logged and
    /// reported as [`Outcome::Exhausted`] without reading any input.
    pub fn select_item<R: BufRead, W: Write>(
        &self,
        terminal: &mut Terminal<R, W>,
        category: &str,
    ) -> Outcome<&'a str> {
        let Some(entry) = self.catalog.category(category) else {
            warn!(category, "item selection asked for a category missing from the catalog");
            return Outcome::Exhausted;
        };

        let listing = Self::listing(entry);
        terminal.say(&listing);

        terminal.ask_with(ITEM_PROMPT, |answer| {
            if answer.eq_ignore_ascii_case(LIST_TOKEN) {
                return Verdict::Show(listing.clone());
            }
            if answer.is_empty() {
                return Verdict::Reject(FilterError::Empty);
            }
            match entry.find(answer) {
                Some(item) => Verdict::Accept(item),
                None => Verdict::Reject(FilterError::UnknownName(answer.to_string())),
            }
        })
    }

    /// Category pick, then item pick.
    pub fn select<R: BufRead, W: Write>(
        &self,
        terminal: &mut Terminal<R, W>,
    ) -> Outcome<Selection> {
        self.select_category(terminal).and_then(|category| {
            self.select_item(terminal, category).map(|item| Selection {
                category: category.to_string(),
                item: item.to_string(),
            })
        })
    }

    fn listing(category: &Category) -> String {
        let mut listing = format!("Items in {}:", category.name());
        for item in category.items() {
            listing.push_str("\n- ");
            listing.push_str(item);
        }
        listing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::RetryPolicy;
    use crate::utils::terminal::tests::{output, terminal};

    fn groceries() -> Catalog {
        Catalog::builder()
            .category("Bakery", ["Bread", "Bagel"])
            .category("Dairy", ["Milk", "Cheese"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_select_category_by_position() {
        let catalog = groceries();
        let mut t = terminal("1\n");
        let res = CatalogSelector::new(&catalog).select_category(&mut t);
        assert_eq!(res, Outcome::Value("Bakery"));
        assert!(output(&t).starts_with("Select a category:\n1. Bakery\n2. Dairy\n3. Exit\n"));
    }

    #[test]
    fn test_select_category_exit_aborts() {
        let catalog = groceries();
        let mut t = terminal("3\n");
        let res = CatalogSelector::new(&catalog).select_category(&mut t);
        assert_eq!(res, Outcome::Aborted);
    }

    #[test]
    fn test_select_category_rejects_out_of_range_and_junk() {
        let catalog = groceries();
        let mut t = terminal("9\nx\n0\n2\n");
        let res = CatalogSelector::new(&catalog).select_category(&mut t);
        assert_eq!(res, Outcome::Value("Dairy"));

        let out = output(&t);
        assert_eq!(
            out.matches("Invalid choice, please pick a number between 1 and 3.")
                .count(),
            2
        );
        assert!(out.contains("Invalid format, the value is not an integer."));
    }

    #[test]
    fn test_select_item_returns_canonical_name() {
        let catalog = groceries();
        for typed in ["milk", "MILK", "mIlK", "  Milk "] {
            let mut t = terminal(&format!("{typed}\n"));
            let res = CatalogSelector::new(&catalog).select_item(&mut t, "Dairy");
            assert_eq!(res, Outcome::Value("Milk"));
        }
    }

    #[test]
    fn test_select_item_list_reprints_items() {
        let catalog = groceries();
        let mut t = terminal("LIST\nlist\ncheese\n")
            .with_policy(RetryPolicy::unlimited().max_attempts(1));
        let res = CatalogSelector::new(&catalog).select_item(&mut t, "Dairy");
        assert_eq!(res, Outcome::Value("Cheese"));
        assert_eq!(output(&t).matches("Items in Dairy:\n- Milk\n- Cheese\n").count(), 3);
    }

    #[test]
    fn test_select_item_rejects_names_from_other_categories() {
        let catalog = groceries();
        let mut t = terminal("Bread\n\nMilk\n");
        let res = CatalogSelector::new(&catalog).select_item(&mut t, "Dairy");
        assert_eq!(res, Outcome::Value("Milk"));

        let out = output(&t);
        assert!(out.contains("'Bread' is not on the list."));
        assert!(out.contains("The value can't be empty, try again!"));
    }

    #[test]
    fn test_select_item_unknown_category() {
        let catalog = groceries();
        let mut t = terminal("Milk\n");
        let res = CatalogSelector::new(&catalog).select_item(&mut t, "Meat");
        assert_eq!(res, Outcome::Exhausted);
        assert!(output(&t).is_empty());
    }

    #[test]
    fn test_select_combined_flow() {
        let catalog = groceries();
        let mut t = terminal("7\n1\nmilk\nbagel\n");
        let res = CatalogSelector::new(&catalog).select(&mut t);
        assert_eq!(
            res,
            Outcome::Value(Selection {
                category: "Bakery".to_string(),
                item: "Bagel".to_string(),
            })
        );
    }

    #[test]
    fn test_select_combined_flow_exit() {
        let catalog = groceries();
        let mut t = terminal("3\n1\nBread\n");
        let res = CatalogSelector::new(&catalog).select(&mut t);
        assert_eq!(res, Outcome::Aborted);
    }
}
