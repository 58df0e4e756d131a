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

//! Presentation-binding layer of the Beam desktop wallet.
//!
//! The wallet engine lives behind [`worker::WalletAsync`] and publishes
//! [`worker::WalletEvent`]s; the view models in [`view_model`] turn those
//! notifications into row and property projections a UI re-reads. For a good
//! starting point see [`worker::EventPump`], which routes engine events into
//! the view models on the UI thread.

#[macro_use]
extern crate amplify;
#[macro_use]
extern crate log;
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

pub mod model;
#[cfg(feature = "ui")]
pub mod view;
pub mod view_model;
pub mod worker;
