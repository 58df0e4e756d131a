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

mod events;
mod wallet;

pub use events::{EventPump, EventReceiver, EventSender, WalletEvent, WalletObserver};
pub use wallet::{EngineError, WalletAsync, WalletEngine, WalletWorker};
