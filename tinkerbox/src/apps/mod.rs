//! The three mini-tools reachable from the top-level [`crate::menu`].
//!
//! - [`energy`]: appliance energy usage estimates.
//! - [`inventory`]: an in-memory products list.
//! - [`encoder`]: letters to 5-bit binary codes.

pub mod encoder;
pub mod energy;
pub mod inventory;
