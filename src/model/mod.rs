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

mod assets;
pub mod format;
pub mod i18n;
mod rates;
mod records;
pub mod settings;
mod types;

pub use assets::AssetsManager;
pub use i18n::Translations;
pub use rates::ExchangeRatesManager;
pub use records::{AssetBalance, AssetInfo, ExchangeRate, SwapOffer, TxDescription, WalletStatus};
pub use settings::SettingsStore;
pub use types::{
    Amount, AssetId, AtomicSwapCoin, ChangeAction, Currency, IdParseError, KernelId,
    SwapClientStatus, SwapOfferStatus, TxFailureReason, TxId, TxStatus, TxType, UnknownCurrency,
    COIN, PRECISION,
};
