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

//! Records published by the wallet engine. The view models only ever keep
//! denormalized copies of these for presentation.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    Amount, AssetId, AtomicSwapCoin, Currency, KernelId, SwapOfferStatus, TxFailureReason, TxId,
    TxStatus, TxType,
};

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", default)
)]
pub struct TxDescription {
    pub tx_id: TxId,
    pub tx_type: TxType,
    pub asset_id: AssetId,
    pub amount: Amount,
    pub fee: Amount,
    pub status: TxStatus,
    pub failure_reason: Option<TxFailureReason>,
    /// Whether this wallet is the sending side.
    pub sender: bool,
    pub self_tx: bool,
    pub peer_id: String,
    pub my_id: String,
    pub message: String,
    /// Unix timestamp, seconds.
    pub create_time: u64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub kernel_id: Option<KernelId>,
    pub token: String,
    pub sender_identity: String,
    pub receiver_identity: String,
    pub max_privacy: bool,
    pub offline_token: bool,
    /// Exchange rate of the asset captured when the transaction was created.
    pub rate: Option<Amount>,
    pub swap_coin: Option<AtomicSwapCoin>,
}

impl Default for TxDescription {
    fn default() -> Self {
        TxDescription {
            tx_id: TxId::default(),
            tx_type: TxType::Simple,
            asset_id: AssetId::BEAM,
            amount: 0,
            fee: 0,
            status: TxStatus::Pending,
            failure_reason: None,
            sender: false,
            self_tx: false,
            peer_id: none!(),
            my_id: none!(),
            message: none!(),
            create_time: 0,
            kernel_id: None,
            token: none!(),
            sender_identity: none!(),
            receiver_identity: none!(),
            max_privacy: false,
            offline_token: false,
            rate: None,
            swap_coin: None,
        }
    }
}

/// Atomic swap offer published on the offers board.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct SwapOffer {
    pub tx_id: TxId,
    pub status: SwapOfferStatus,
    pub publisher_id: String,
    pub coin: AtomicSwapCoin,
    /// BEAM side of the swap, groth.
    pub amount: Amount,
    /// Swap coin side, satoshi.
    pub swap_amount: Amount,
    /// Whether the publisher sends BEAM.
    pub is_beam_side: bool,
    pub is_own: bool,
    pub time_created: u64,
    pub time_expiration: u64,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", default)
)]
pub struct AssetBalance {
    pub available: Amount,
    pub receiving: Amount,
    pub sending: Amount,
    pub maturing: Amount,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct WalletStatus {
    pub balances: BTreeMap<AssetId, AssetBalance>,
}

impl WalletStatus {
    pub fn available(&self, asset_id: AssetId) -> Amount {
        self.balances
            .get(&asset_id)
            .map(|balance| balance.available)
            .unwrap_or_default()
    }
}

/// Confidential asset metadata as announced by the asset owner.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct AssetInfo {
    pub id: AssetId,
    pub name: String,
    pub unit_name: String,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct ExchangeRate {
    pub from: Currency,
    pub to: Currency,
    /// Fixed point with 8 fractional digits.
    pub value: Amount,
    pub update_time: u64,
}
