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

//! Adapters projecting wallet engine state into role-based lists and
//! observable properties.

mod assets;
mod list;
pub mod settings;
pub mod swap_offers;
mod transactions;
mod tx_object;

pub use assets::{AssetObject, AssetRole, AssetsList};
pub use list::{Emitter, ListModel, RoleModel, RoleValue, Row, RowsChanged};
pub use settings::SettingsViewModel;
pub use swap_offers::{
    PaymentInfo, SwapCoinClientModel, SwapOfferRole, SwapOffersList, SwapOffersViewModel,
};
pub use transactions::{TxObjectList, TxRole};
pub use tx_object::TxObject;
