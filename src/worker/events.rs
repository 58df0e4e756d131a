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
use std::sync::mpsc;

use crate::model::{
    Amount, AssetInfo, AssetsManager, AtomicSwapCoin, ChangeAction, ExchangeRate,
    ExchangeRatesManager, SwapClientStatus, SwapOffer, TxDescription, WalletStatus,
};

/// Change notification emitted by the wallet engine.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum WalletEvent {
    StatusChanged(WalletStatus),
    TransactionsChanged(ChangeAction, Vec<TxDescription>),
    SwapOffersChanged(ChangeAction, Vec<SwapOffer>),
    AssetInfo(AssetInfo),
    ExchangeRates(Vec<ExchangeRate>),
    SwapClientBalance(AtomicSwapCoin, Amount),
    SwapClientStatus(AtomicSwapCoin, SwapClientStatus),
    Error(String),
}

pub type EventSender = mpsc::Sender<WalletEvent>;
pub type EventReceiver = mpsc::Receiver<WalletEvent>;

/// Anything on the UI thread which keeps a projection of the wallet state.
pub trait WalletObserver {
    fn on_wallet_event(&mut self, event: &WalletEvent);

    /// Called after an exchange rate batch changed a rate into the active
    /// rate unit.
    fn on_active_rates_changed(&mut self) {}
}

/// Routes engine notifications to the view models.
///
/// Lives on the UI thread: [`EventPump::pump`] never blocks and is meant to
/// be called from the UI main loop idle handler. Shared metadata managers
/// are updated before any observer sees the event, so observers touching
/// rows in response always read fresh metadata.
pub struct EventPump {
    rx: EventReceiver,
    assets: Rc<AssetsManager>,
    rates: Rc<ExchangeRatesManager>,
}

impl EventPump {
    pub fn with(
        rx: EventReceiver,
        assets: Rc<AssetsManager>,
        rates: Rc<ExchangeRatesManager>,
    ) -> EventPump {
        EventPump { rx, assets, rates }
    }

    pub fn assets(&self) -> &Rc<AssetsManager> { &self.assets }

    pub fn rates(&self) -> &Rc<ExchangeRatesManager> { &self.rates }

    /// Drains all pending events. Returns the number of processed events.
    pub fn pump(&self, observers: &mut [&mut dyn WalletObserver]) -> usize {
        let mut count = 0usize;
        while let Ok(event) = self.rx.try_recv() {
            self.dispatch(&event, observers);
            count += 1;
        }
        count
    }

    pub fn dispatch(&self, event: &WalletEvent, observers: &mut [&mut dyn WalletObserver]) {
        let mut rates_changed = false;
        match event {
            WalletEvent::AssetInfo(info) => {
                self.assets.on_asset_info(info.clone());
            }
            WalletEvent::ExchangeRates(rates) => {
                rates_changed = self.rates.on_rates(rates);
            }
            WalletEvent::Error(err) => warn!("wallet engine reported an error: {}", err),
            _ => {}
        }
        for observer in observers.iter_mut() {
            observer.on_wallet_event(event);
            if rates_changed {
                observer.on_active_rates_changed();
            }
        }
    }
}
