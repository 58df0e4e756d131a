// Beam UI: view models binding Beam wallet state to desktop UI.
//
// Written in 2022 by
//     Dr. Maxim Orlovsky <orlovsky@pandoraprime.ch>
//
// Copyright (C) 2022 by Pandora Prime Sarl, Switzerland.
//
// This software is distributed without any warranty. You should have received
// a copy of the AGPL-3.0 License along with this software. If not, see
// <https://www.gnu.org/licenses/agpl-3.0-standalone.html>.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::{Amount, Currency, ExchangeRate};

/// Latest exchange rates received from the engine together with the rate
/// unit the user has chosen to display balances in.
#[derive(Debug, Default)]
pub struct ExchangeRatesManager {
    rates: RefCell<BTreeMap<(Currency, Currency), Amount>>,
    rate_unit: Cell<Currency>,
}

impl ExchangeRatesManager {
    pub fn with(rate_unit: Currency) -> ExchangeRatesManager {
        ExchangeRatesManager {
            rates: empty!(),
            rate_unit: Cell::new(rate_unit),
        }
    }

    pub fn rate_unit_raw(&self) -> Currency { self.rate_unit.get() }

    /// Returns whether the unit changed.
    pub fn set_rate_unit(&self, unit: Currency) -> bool {
        self.rate_unit.replace(unit) != unit
    }

    /// Rate of `from` expressed in the active rate unit, 0 when unknown.
    pub fn rate(&self, from: Currency) -> Amount {
        self.rates
            .borrow()
            .get(&(from, self.rate_unit.get()))
            .copied()
            .unwrap_or_default()
    }

    /// Merges a batch of rates. Returns whether any rate into the active
    /// unit changed.
    pub fn on_rates(&self, rates: &[ExchangeRate]) -> bool {
        let unit = self.rate_unit.get();
        let mut stored = self.rates.borrow_mut();
        let mut active_changed = false;
        for rate in rates {
            let prev = stored.insert((rate.from, rate.to), rate.value);
            if rate.to == unit && prev != Some(rate.value) {
                active_changed = true;
            }
        }
        if active_changed {
            debug!("exchange rates into {} updated", unit);
        }
        active_changed
    }
}
