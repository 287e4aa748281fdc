//! # Energy Calculator
//!
//! Estimates how much energy an appliance uses per day, month and year
//! from its power rating and daily hours of use.
//!
//! ```text
//! daily   = power rating (kW) × hours used per day
//! monthly = daily × 30
//! yearly  = daily × 365
//! ```

use crate::catalog::{Catalog, CatalogSelector};
use crate::utils::{NumericConstraint, Outcome, Terminal};
use std::io::{BufRead, Write};
use tracing::info;

pub const DAYS_PER_MONTH: f64 = 30.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const HOURS_PER_DAY: f64 = 24.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Appliance {
    pub name: String,
    pub category: String,
    /// Kilowatts.
    pub power_rating: f64,
    pub hours_used: f64,
}

/// Consumption in kWh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyUsage {
    pub daily: f64,
    pub monthly: f64,
    pub yearly: f64,
}

impl From<&Appliance> for EnergyUsage {
    fn from(appliance: &Appliance) -> Self {
        let daily = appliance.power_rating * appliance.hours_used;
        Self {
            daily,
            monthly: daily * DAYS_PER_MONTH,
            yearly: daily * DAYS_PER_YEAR,
        }
    }
}

/// Picks an appliance from the catalog and asks for its rating and usage.
pub fn read_appliance<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    selector: &CatalogSelector<'_>,
) -> Outcome<Appliance> {
    let selection = match selector.select(terminal) {
        Outcome::Value(selection) => selection,
        Outcome::Aborted => return Outcome::Aborted,
        Outcome::Exhausted => return Outcome::Exhausted,
    };

    let power_rating = match terminal.validate(
        "Enter the power rating (in kW):",
        &NumericConstraint::new(),
    ) {
        Outcome::Value(power_rating) => power_rating,
        Outcome::Aborted => return Outcome::Aborted,
        Outcome::Exhausted => return Outcome::Exhausted,
    };

    terminal
        .validate(
            "Enter the hours used per day:",
            &NumericConstraint::new().at_most(HOURS_PER_DAY),
        )
        .map(|hours_used| Appliance {
            name: selection.item,
            category: selection.category,
            power_rating,
            hours_used,
        })
}

pub fn report<R: BufRead, W: Write>(terminal: &mut Terminal<R, W>, appliance: &Appliance) {
    let usage = EnergyUsage::from(appliance);
    info!(
        appliance = %appliance.name,
        daily = usage.daily,
        "energy usage calculated"
    );

    terminal.say(format_args!(
        "The daily energy usage for your {} is: {:.2} kWh",
        appliance.name, usage.daily
    ));
    terminal.say(format_args!("Its monthly energy usage is: {:.2} kWh", usage.monthly));
    terminal.say(format_args!("Its yearly energy usage is: {:.2} kWh", usage.yearly));
}

/// Energy calculator sub-menu. Returns when the user quits or the input ends.
///
/// Exiting the appliance menu goes back to this sub-menu, not further.
pub fn run<R: BufRead, W: Write>(terminal: &mut Terminal<R, W>, catalog: &Catalog) {
    let selector = CatalogSelector::new(catalog);

    loop {
        match terminal.menu("Energy Calculator:", &["Calculate energy usage", "Quit"]) {
            Outcome::Value(1) => match read_appliance(terminal, &selector) {
                Outcome::Value(appliance) => report(terminal, &appliance),
                Outcome::Aborted => continue,
                Outcome::Exhausted => return,
            },
            _ => {
                terminal.say("Exiting the Energy Calculator.");
                return;
            }
        }
    }
}
