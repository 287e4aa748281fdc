//! # Tinkerbox
//!
//! A small interactive terminal toolbox built around two reusable primitives:
//! guided selection from a fixed category → item catalog, and numeric input
//! that is re-asked until it fits its constraints.
//!
//! ## Features
//!
//! ### Input framework
//! - **Input Sanitization & Validation** - composable filters for format, range,
//!   whole-number and menu-choice checks
//! - **Interactive Terminal Interface** - prompt loops over any reader/writer,
//!   with an optional cancel token and attempt limit
//! - **Numeric Input** - `0 < value <= max`, optionally whole
//!
//! ### Catalog
//! - **Catalog** - ordered, validated, read-only category → items table
//! - **Catalog Selection** - numbered category menu with an "Exit" entry, then
//!   case-insensitive item pick with a `list` command
//! - **JSON catalogs** (`json-catalog` feature, on by default) - load a
//!   replacement table from a file
//!
//! ### Tools
//! - **Energy Calculator** - daily, monthly and yearly kWh of an appliance
//! - **Products List** - categorized product list with prices and quantities
//! - **Character Encoder** - letters to 5-bit binary codes
//!
//! ## Usage Examples
//!
//! ### Bounded numeric input
//!
//! ```rust,no_run
//! use tinkerbox::utils::{NumericConstraint, Outcome, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! if let Outcome::Value(hours) =
//!     terminal.validate("Enter the hours used per day:", &NumericConstraint::new().at_most(24.0))
//! {
//!     println!("Hours: {}", hours);
//! }
//! ```
//!
//! ### Catalog selection
//!
//! ```rust,no_run
//! use tinkerbox::catalog::{Catalog, CatalogSelector};
//! use tinkerbox::utils::{Outcome, Terminal};
//!
//! let catalog = Catalog::products();
//! let mut terminal = Terminal::stdio();
//!
//! match CatalogSelector::new(&catalog).select(&mut terminal) {
//!     Outcome::Value(selection) => println!("{} / {}", selection.category, selection.item),
//!     Outcome::Aborted => println!("Nothing selected"),
//!     Outcome::Exhausted => println!("Input closed"),
//! }
//! ```
//!
//! ### Retry policy
//!
//! ```rust
//! use std::io::Cursor;
//! use tinkerbox::utils::{NumericConstraint, Outcome, RetryPolicy, Terminal};
//!
//! let mut terminal = Terminal::new(Cursor::new("abc\n-1\n5\n"), Vec::new())
//!     .with_policy(RetryPolicy::unlimited().max_attempts(2));
//!
//! let res = terminal.validate("Price:", &NumericConstraint::new());
//! assert_eq!(res, Outcome::Exhausted);
//! ```
//!
//! ## Architecture
//!
//! - **`utils`** - sanitize filters, the terminal prompt loop, numeric input
//! - **`catalog`** - catalog data, JSON loading and the selector
//! - **`apps`** - the energy calculator, products list and character encoder
//! - **`menu`** - the top-level dispatch over the tools
//!
//! ## Error Handling
//!
//! Input errors never escape a prompt loop: they are printed and the
//! question is asked again. Loops end with an [`utils::Outcome`]; the only
//! `Result`s in the public API come from building or loading a catalog.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (rejected answers at `debug`, records
//! and session end at `info`, I/O trouble at `warn`). Installing a subscriber
//! is left to the binary.

pub mod utils;

pub mod catalog;

pub mod apps;

pub mod menu;
pub use menu::Toolbox;
