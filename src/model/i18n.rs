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

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::{fs, io};

use once_cell::sync::Lazy;

static ENGLISH: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("wallet-txs-status-pending", "pending"),
        ("wallet-txs-status-waiting-sender", "waiting for sender"),
        ("wallet-txs-status-waiting-receiver", "waiting for receiver"),
        ("wallet-txs-status-in-progress", "in progress"),
        ("wallet-txs-status-own-sent", "sent to own address"),
        ("wallet-txs-status-own-sending", "sending to own address"),
        ("wallet-txs-status-received", "received"),
        ("wallet-txs-status-sent", "sent"),
        ("wallet-txs-status-cancelled", "cancelled"),
        ("wallet-txs-status-expired", "expired"),
        ("wallet-txs-status-failed", "failed"),
        ("wallet-txs-status-in-progress-max", "in progress\nmax privacy"),
        ("wallet-txs-status-in-progress-max-offline", "in progress\nmax privacy (offline)"),
        ("wallet-txs-status-sent-max", "sent\nmax privacy"),
        ("wallet-txs-status-sent-max-offline", "sent\nmax privacy (offline)"),
        ("wallet-txs-status-received-max", "received\nmax privacy"),
        ("wallet-txs-status-received-max-offline", "received\nmax privacy (offline)"),
        ("wallet-txs-status-canceled-max", "canceled\nmax privacy"),
        ("wallet-txs-status-canceled-max-offline", "canceled\nmax privacy (offline)"),
        ("wallet-txs-status-failed-max", "failed\nmax privacy"),
        ("wallet-txs-status-failed-max-offline", "failed\nmax privacy (offline)"),
        ("wallet-txs-status-unknown", "unknown"),
        ("tx-failure-undefined", "Unexpected reason, please send wallet logs to Beam support"),
        ("tx-failure-cancelled", "Transaction was cancelled"),
        ("tx-failure-receiver-not-authorized", "Receiver signature in not valid, please send wallet logs to Beam support"),
        ("tx-failure-not-enough-funds", "There are not enough funds to complete the transaction"),
        ("tx-failure-expired", "Transaction has expired"),
        ("tx-failure-no-inputs", "Not enough inputs to process the transaction"),
        ("tx-failure-max-height-unacceptable", "Transaction max height is unacceptable"),
        ("tx-failure-not-registered-in-blockchain", "Failed to register transaction with the blockchain"),
        ("tx-failure-not-valid", "Transaction is not valid, please send wallet logs to Beam support"),
        ("tx-failure-no-payment-proof", "Failed to get payment proof from the receiver"),
        ("tx-failure-swap-failed", "Atomic swap failed, please check the swap coin client"),
        ("tx-state-waiting-for-receiver", "The other side is offline. Transaction will continue once it gets online"),
        ("tx-state-waiting-for-sender", "Waiting for the sender to come online"),
        ("tx-state-registering", "The transaction is being registered in the blockchain"),
    ])
});

/// Translation ids for every status key a [`crate::view_model::TxObject`]
/// may report. Max privacy keys map to an `(online, offline)` pair.
fn status_tr_id(status: &str, offline_token: bool) -> &'static str {
    let pick = |online, offline| if offline_token { offline } else { online };
    match status {
        "pending" => "wallet-txs-status-pending",
        "waiting for sender" => "wallet-txs-status-waiting-sender",
        "waiting for receiver" => "wallet-txs-status-waiting-receiver",
        "in progress" => "wallet-txs-status-in-progress",
        "sent to own address" => "wallet-txs-status-own-sent",
        "sending to own address" => "wallet-txs-status-own-sending",
        "received" => "wallet-txs-status-received",
        "sent" => "wallet-txs-status-sent",
        "cancelled" => "wallet-txs-status-cancelled",
        "expired" => "wallet-txs-status-expired",
        "failed" => "wallet-txs-status-failed",
        "in progress max privacy" => pick(
            "wallet-txs-status-in-progress-max",
            "wallet-txs-status-in-progress-max-offline",
        ),
        "sent max privacy" => pick(
            "wallet-txs-status-sent-max",
            "wallet-txs-status-sent-max-offline",
        ),
        "received max privacy" => pick(
            "wallet-txs-status-received-max",
            "wallet-txs-status-received-max-offline",
        ),
        "canceled max privacy" => pick(
            "wallet-txs-status-canceled-max",
            "wallet-txs-status-canceled-max-offline",
        ),
        "failed max privacy" => pick(
            "wallet-txs-status-failed-max",
            "wallet-txs-status-failed-max-offline",
        ),
        _ => "wallet-txs-status-unknown",
    }
}

#[derive(Debug, Display, Error, From)]
#[display(inner)]
pub enum Error {
    #[from]
    File(io::Error),
    #[from]
    Yaml(serde_yaml::Error),
}

/// Lookup table from translation id to localized text. Ids missing from the
/// table fall back to English and then to the id itself.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Translations {
    overrides: BTreeMap<String, String>,
}

impl Translations {
    pub fn english() -> Translations { Translations::default() }

    pub fn with(overrides: BTreeMap<String, String>) -> Translations {
        Translations { overrides }
    }

    /// Reads a YAML map of `id: text` pairs.
    pub fn read_file(path: impl AsRef<Path>) -> Result<Translations, Error> {
        let file = fs::File::open(path)?;
        let overrides = serde_yaml::from_reader(file)?;
        Ok(Translations { overrides })
    }

    pub fn tr<'a>(&'a self, id: &'a str) -> &'a str {
        self.overrides
            .get(id)
            .map(String::as_str)
            .or_else(|| ENGLISH.get(id).copied())
            .unwrap_or(id)
    }

    /// Localized text for an internal transaction status key.
    pub fn status_text(&self, status: &str, offline_token: bool) -> String {
        self.tr(status_tr_id(status, offline_token)).to_owned()
    }
}
