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

use std::rc::Rc;
use std::sync::{mpsc, Arc};

use super::Emitter;
use crate::model::settings::{self, NODE_ADDRESS_KEY, RATE_UNIT_KEY, SWAP_BETA_WARNING_KEY};
use crate::model::{Currency, ExchangeRatesManager, SettingsStore};
use crate::worker::WalletAsync;

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Signal {
    NodeAddressChanged,
    RateUnitChanged,
    SwapBetaWarningChanged,
}

pub struct SettingsViewModel {
    data: SettingsStore,
    model: Option<Arc<dyn WalletAsync>>,
    rates: Option<Rc<ExchangeRatesManager>>,
    signals: Emitter<Signal>,
}

impl SettingsViewModel {
    pub fn with(data: SettingsStore) -> SettingsViewModel {
        SettingsViewModel {
            data,
            model: None,
            rates: None,
            signals: default!(),
        }
    }

    pub fn init_model(&mut self, model: Arc<dyn WalletAsync>) { self.model = Some(model); }

    /// Attaches the shared exchange rates manager and switches it to the
    /// persisted rate unit.
    pub fn init_rates(&mut self, rates: Rc<ExchangeRatesManager>) {
        rates.set_rate_unit(self.rate_unit());
        self.rates = Some(rates);
    }

    pub fn connect(&mut self, sender: mpsc::Sender<Signal>) { self.signals.connect(sender) }

    pub fn store(&self) -> &SettingsStore { &self.data }

    pub fn node_address(&self) -> String {
        self.data.value(NODE_ADDRESS_KEY).unwrap_or_default().to_owned()
    }

    pub fn version(&self) -> &'static str { env!("CARGO_PKG_VERSION") }

    pub fn apply_changes(&mut self, addr: &str) -> Result<(), settings::Error> {
        if addr == self.node_address() {
            return Ok(());
        }
        self.data.set(NODE_ADDRESS_KEY, addr)?;
        if let Some(model) = &self.model {
            info!("switching wallet node to {}", addr);
            model.set_node_address(addr);
        }
        self.signals.emit(Signal::NodeAddressChanged);
        Ok(())
    }

    pub fn emergency_reset(&self) {
        if let Some(model) = &self.model {
            info!("requesting wallet emergency reset");
            model.emergency_reset();
        }
    }

    pub fn rate_unit(&self) -> Currency {
        self.data
            .value(RATE_UNIT_KEY)
            .and_then(|unit| unit.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_rate_unit(&mut self, unit: Currency) -> Result<(), settings::Error> {
        if unit == self.rate_unit() {
            return Ok(());
        }
        self.data.set(RATE_UNIT_KEY, unit)?;
        if let Some(rates) = &self.rates {
            debug!("showing exchange rates in {}", unit);
            rates.set_rate_unit(unit);
        }
        self.signals.emit(Signal::RateUnitChanged);
        Ok(())
    }

    pub fn show_swap_beta_warning(&self) -> bool {
        self.data.bool_value(SWAP_BETA_WARNING_KEY).unwrap_or(true)
    }

    pub fn set_show_swap_beta_warning(&mut self, show: bool) -> Result<(), settings::Error> {
        if show == self.show_swap_beta_warning() {
            return Ok(());
        }
        self.data.set(SWAP_BETA_WARNING_KEY, show)?;
        self.signals.emit(Signal::SwapBetaWarningChanged);
        Ok(())
    }
}
