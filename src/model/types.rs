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

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use amplify::hex::{self, FromHex, ToHex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Amount in the smallest indivisible units of a coin: groth for BEAM and
/// confidential assets, satoshi for the swap coins.
pub type Amount = u64;

/// Number of groth in one BEAM (and satoshi in one swap coin).
pub const COIN: Amount = 100_000_000;

/// Number of fractional digits used when rendering amounts and rates.
pub const PRECISION: usize = 8;

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Default, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
#[display("{0}")]
pub struct AssetId(pub u32);

impl From<u32> for AssetId {
    fn from(id: u32) -> Self { AssetId(id) }
}

impl AssetId {
    pub const BEAM: AssetId = AssetId(0);

    /// Native coin is any asset with id below 1.
    pub fn is_beam(self) -> bool { self.0 < 1 }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum IdParseError {
    /// identifier must be {0} hex characters long, got {1}.
    Length(usize, usize),

    /// identifier is not a valid hex string: {0}.
    #[from]
    Hex(hex::Error),
}

fn parse_hex<const LEN: usize>(s: &str) -> Result<[u8; LEN], IdParseError> {
    if s.len() != LEN * 2 {
        return Err(IdParseError::Length(LEN * 2, s.len()));
    }
    Vec::<u8>::from_hex(s)?
        .try_into()
        .map_err(|_| IdParseError::Length(LEN * 2, s.len()))
}

/// Wallet-local transaction identifier.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub struct TxId(pub [u8; 16]);

impl Display for TxId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(&self.0.to_hex()) }
}

impl FromStr for TxId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { parse_hex(s).map(TxId) }
}

impl From<u128> for TxId {
    fn from(val: u128) -> Self { TxId(val.to_be_bytes()) }
}

/// Identifier of the transaction kernel as registered in the blockchain.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub struct KernelId(pub [u8; 32]);

impl Display for KernelId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(&self.0.to_hex()) }
}

impl FromStr for KernelId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { parse_hex(s).map(KernelId) }
}

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "lowercase")
)]
pub enum TxStatus {
    #[display("pending")]
    Pending,
    #[display("in-progress")]
    InProgress,
    #[display("canceled")]
    Canceled,
    #[display("completed")]
    Completed,
    #[display("failed")]
    Failed,
    #[display("registering")]
    Registering,
}

impl TxStatus {
    pub fn is_active(self) -> bool {
        matches!(
            self,
            TxStatus::Pending | TxStatus::InProgress | TxStatus::Registering
        )
    }
}

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "snake_case")
)]
pub enum TxType {
    #[display("simple")]
    Simple,
    #[display("reverted")]
    Reverted,
    #[display("atomic-swap")]
    AtomicSwap,
    #[display("asset-issue")]
    AssetIssue,
    #[display("asset-consume")]
    AssetConsume,
    #[display("asset-reg")]
    AssetReg,
    #[display("asset-unreg")]
    AssetUnreg,
    #[display("asset-info")]
    AssetInfo,
    #[display("push")]
    PushTransaction,
}

impl Default for TxType {
    fn default() -> Self { TxType::Simple }
}

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "snake_case")
)]
pub enum TxFailureReason {
    Unknown,
    Canceled,
    ReceiverRejected,
    NotEnoughFunds,
    TransactionExpired,
    NoInputs,
    MaxHeightIsUnacceptable,
    FailedToRegister,
    InvalidTransaction,
    NoPaymentProof,
    SwapFailed,
}

impl TxFailureReason {
    /// Translation id of the human-readable reason.
    pub fn tr_id(self) -> &'static str {
        match self {
            TxFailureReason::Unknown => "tx-failure-undefined",
            TxFailureReason::Canceled => "tx-failure-cancelled",
            TxFailureReason::ReceiverRejected => "tx-failure-receiver-not-authorized",
            TxFailureReason::NotEnoughFunds => "tx-failure-not-enough-funds",
            TxFailureReason::TransactionExpired => "tx-failure-expired",
            TxFailureReason::NoInputs => "tx-failure-no-inputs",
            TxFailureReason::MaxHeightIsUnacceptable => "tx-failure-max-height-unacceptable",
            TxFailureReason::FailedToRegister => "tx-failure-not-registered-in-blockchain",
            TxFailureReason::InvalidTransaction => "tx-failure-not-valid",
            TxFailureReason::NoPaymentProof => "tx-failure-no-payment-proof",
            TxFailureReason::SwapFailed => "tx-failure-swap-failed",
        }
    }
}

/// Kind of a change-feed notification.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "lowercase")
)]
pub enum ChangeAction {
    #[display("reset")]
    Reset,
    #[display("added")]
    Added,
    #[display("removed")]
    Removed,
    #[display("updated")]
    Updated,
}

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "lowercase")
)]
pub enum AtomicSwapCoin {
    #[display("BTC")]
    Bitcoin = 0,
    #[display("LTC")]
    Litecoin = 1,
    #[display("QTUM")]
    Qtum = 2,
}

impl AtomicSwapCoin {
    pub const ALL: [AtomicSwapCoin; 3] = [
        AtomicSwapCoin::Bitcoin,
        AtomicSwapCoin::Litecoin,
        AtomicSwapCoin::Qtum,
    ];

    pub fn from_index(index: i32) -> Option<AtomicSwapCoin> {
        match index {
            0 => Some(AtomicSwapCoin::Bitcoin),
            1 => Some(AtomicSwapCoin::Litecoin),
            2 => Some(AtomicSwapCoin::Qtum),
            _ => None,
        }
    }

    pub fn index(self) -> i32 { self as i32 }

    pub fn currency(self) -> Currency {
        match self {
            AtomicSwapCoin::Bitcoin => Currency::Bitcoin,
            AtomicSwapCoin::Litecoin => Currency::Litecoin,
            AtomicSwapCoin::Qtum => Currency::Qtum,
        }
    }
}

/// Currency an exchange rate is expressed in.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "lowercase")
)]
pub enum Currency {
    #[display("beam")]
    Beam,
    #[display("btc")]
    Bitcoin,
    #[display("ltc")]
    Litecoin,
    #[display("qtum")]
    Qtum,
    #[display("usd")]
    Usd,
    #[display("unknown")]
    Unknown,
}

impl Default for Currency {
    fn default() -> Self { Currency::Usd }
}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "beam" => Currency::Beam,
            "btc" | "bitcoin" => Currency::Bitcoin,
            "ltc" | "litecoin" => Currency::Litecoin,
            "qtum" => Currency::Qtum,
            "usd" => Currency::Usd,
            _ => return Err(UnknownCurrency(s.to_owned())),
        })
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Display, Error)]
#[display("unknown currency `{0}`")]
pub struct UnknownCurrency(pub String);

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "snake_case")
)]
pub enum SwapOfferStatus {
    #[display("pending")]
    Pending,
    #[display("in-progress")]
    InProgress,
    #[display("completed")]
    Completed,
    #[display("canceled")]
    Canceled,
    #[display("expired")]
    Expired,
    #[display("failed")]
    Failed,
}

/// Connection state of a swap coin client (a bitcoin, litecoin or qtum node
/// bridge).
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "lowercase")
)]
pub enum SwapClientStatus {
    #[display("uninitialized")]
    Uninitialized,
    #[display("connected")]
    Connected,
    #[display("failed")]
    Failed,
    #[display("unknown")]
    Unknown,
}

impl Default for SwapClientStatus {
    fn default() -> Self { SwapClientStatus::Uninitialized }
}
