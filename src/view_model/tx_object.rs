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

use super::Row;
use crate::model::format::amount_to_ui_string;
use crate::model::{
    Amount, AssetId, TxDescription, TxFailureReason, TxId, TxStatus, TxType, Translations,
};

/// Display projection of a single transaction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TxObject {
    tx: TxDescription,
}

impl From<TxDescription> for TxObject {
    fn from(tx: TxDescription) -> Self { TxObject { tx } }
}

impl Row for TxObject {
    type Key = TxId;

    fn key(&self) -> TxId { self.tx.tx_id }
}

impl TxObject {
    pub fn as_description(&self) -> &TxDescription { &self.tx }

    pub fn tx_id(&self) -> TxId { self.tx.tx_id }

    pub fn asset_id(&self) -> AssetId { self.tx.asset_id }

    pub fn time_created(&self) -> u64 { self.tx.create_time }

    pub fn amount_value(&self) -> Amount { self.tx.amount }

    pub fn amount(&self) -> String { amount_to_ui_string(self.tx.amount, "") }

    pub fn fee(&self) -> String { amount_to_ui_string(self.tx.fee, "") }

    pub fn rate(&self) -> String {
        self.tx
            .rate
            .map(|rate| amount_to_ui_string(rate, ""))
            .unwrap_or_default()
    }

    pub fn comment(&self) -> &str { &self.tx.message }

    pub fn transaction_id(&self) -> String { self.tx.tx_id.to_string() }

    pub fn kernel_id(&self) -> String {
        self.tx.kernel_id.map(|id| id.to_string()).unwrap_or_default()
    }

    pub fn address_from(&self) -> &str {
        if self.is_income() {
            &self.tx.peer_id
        } else {
            &self.tx.my_id
        }
    }

    pub fn address_to(&self) -> &str {
        if self.is_income() {
            &self.tx.my_id
        } else {
            &self.tx.peer_id
        }
    }

    pub fn token(&self) -> &str { &self.tx.token }

    pub fn sender_identity(&self) -> &str { &self.tx.sender_identity }

    pub fn receiver_identity(&self) -> &str { &self.tx.receiver_identity }

    pub fn is_max_privacy(&self) -> bool {
        self.tx.tx_type == TxType::PushTransaction && self.tx.max_privacy
    }

    pub fn is_offline_token(&self) -> bool { self.tx.offline_token }

    pub fn is_self_tx(&self) -> bool { self.tx.self_tx }

    pub fn is_income(&self) -> bool { !self.tx.sender }

    pub fn is_cancel_available(&self) -> bool {
        matches!(self.tx.status, TxStatus::Pending | TxStatus::InProgress)
    }

    pub fn is_delete_available(&self) -> bool {
        matches!(
            self.tx.status,
            TxStatus::Failed | TxStatus::Completed | TxStatus::Canceled
        )
    }

    pub fn is_in_progress(&self) -> bool { self.tx.status.is_active() }

    pub fn is_pending(&self) -> bool { self.tx.status == TxStatus::Pending }

    pub fn is_completed(&self) -> bool { self.tx.status == TxStatus::Completed }

    pub fn is_canceled(&self) -> bool { self.tx.status == TxStatus::Canceled }

    fn is_expired_reason(&self) -> bool {
        self.tx.failure_reason == Some(TxFailureReason::TransactionExpired)
    }

    pub fn is_failed(&self) -> bool {
        self.tx.status == TxStatus::Failed && !self.is_expired_reason()
    }

    pub fn is_expired(&self) -> bool {
        self.tx.status == TxStatus::Failed && self.is_expired_reason()
    }

    pub fn has_payment_proof(&self) -> bool {
        matches!(self.tx.tx_type, TxType::Simple | TxType::PushTransaction)
            && !self.is_income()
            && !self.is_self_tx()
            && self.is_completed()
    }

    /// Untranslated status key, see [`Translations::status_text`].
    pub fn status_key(&self) -> &'static str {
        let tx = &self.tx;
        if self.is_max_privacy() {
            return match tx.status {
                TxStatus::Pending | TxStatus::InProgress | TxStatus::Registering => {
                    "in progress max privacy"
                }
                TxStatus::Completed if tx.sender => "sent max privacy",
                TxStatus::Completed => "received max privacy",
                TxStatus::Canceled => "canceled max privacy",
                TxStatus::Failed => "failed max privacy",
            };
        }
        match tx.status {
            TxStatus::Pending => "pending",
            TxStatus::InProgress if tx.self_tx => "sending to own address",
            TxStatus::InProgress if tx.sender => "waiting for receiver",
            TxStatus::InProgress => "waiting for sender",
            TxStatus::Registering if tx.self_tx => "sending to own address",
            TxStatus::Registering => "in progress",
            TxStatus::Completed if tx.self_tx => "sent to own address",
            TxStatus::Completed if tx.sender => "sent",
            TxStatus::Completed => "received",
            TxStatus::Canceled => "cancelled",
            TxStatus::Failed if self.is_expired_reason() => "expired",
            TxStatus::Failed => "failed",
        }
    }

    pub fn status(&self, tr: &Translations) -> String {
        tr.status_text(self.status_key(), self.is_offline_token())
    }

    pub fn failure_reason(&self, tr: &Translations) -> String {
        if self.tx.status != TxStatus::Failed {
            return none!();
        }
        let reason = self.tx.failure_reason.unwrap_or(TxFailureReason::Unknown);
        tr.tr(reason.tr_id()).to_owned()
    }

    pub fn state_details(&self, tr: &Translations) -> String {
        let tx = &self.tx;
        if tx.tx_type != TxType::Simple || tx.self_tx {
            return none!();
        }
        let id = match tx.status {
            TxStatus::InProgress if tx.sender => "tx-state-waiting-for-receiver",
            TxStatus::InProgress => "tx-state-waiting-for-sender",
            TxStatus::Registering => "tx-state-registering",
            _ => return none!(),
        };
        tr.tr(id).to_owned()
    }

    /// Space-joined identifiers and texts the UI filters the list by.
    pub fn search_string(&self) -> String {
        [
            self.transaction_id().as_str(),
            self.kernel_id().as_str(),
            self.address_from(),
            self.address_to(),
            self.comment(),
            self.sender_identity(),
            self.receiver_identity(),
            self.token(),
        ]
        .join(" ")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::KernelId;

    fn tx(status: TxStatus, sender: bool) -> TxObject {
        TxObject::from(TxDescription {
            tx_id: TxId::from(7u128),
            status,
            sender,
            peer_id: s!("peer"),
            my_id: s!("mine"),
            ..default!()
        })
    }

    #[test]
    fn status_keys() {
        assert_eq!(tx(TxStatus::Pending, true).status_key(), "pending");
        assert_eq!(tx(TxStatus::InProgress, true).status_key(), "waiting for receiver");
        assert_eq!(tx(TxStatus::InProgress, false).status_key(), "waiting for sender");
        assert_eq!(tx(TxStatus::Registering, false).status_key(), "in progress");
        assert_eq!(tx(TxStatus::Completed, true).status_key(), "sent");
        assert_eq!(tx(TxStatus::Completed, false).status_key(), "received");
        assert_eq!(tx(TxStatus::Canceled, true).status_key(), "cancelled");
        assert_eq!(tx(TxStatus::Failed, true).status_key(), "failed");

        let mut expired = tx(TxStatus::Failed, true);
        expired.tx.failure_reason = Some(TxFailureReason::TransactionExpired);
        assert_eq!(expired.status_key(), "expired");
        assert!(expired.is_expired());
        assert!(!expired.is_failed());

        let mut own = tx(TxStatus::Completed, true);
        own.tx.self_tx = true;
        assert_eq!(own.status_key(), "sent to own address");
        own.tx.status = TxStatus::InProgress;
        assert_eq!(own.status_key(), "sending to own address");
    }

    #[test]
    fn max_privacy_statuses() {
        let mut obj = tx(TxStatus::Completed, false);
        obj.tx.tx_type = TxType::PushTransaction;
        obj.tx.max_privacy = true;
        obj.tx.offline_token = true;
        assert!(obj.is_max_privacy());
        assert_eq!(obj.status_key(), "received max privacy");
        assert_eq!(
            obj.status(&Translations::english()),
            "received\nmax privacy (offline)"
        );

        // the flag alone does not make a simple transaction max privacy
        obj.tx.tx_type = TxType::Simple;
        assert_eq!(obj.status_key(), "received");
    }

    #[test]
    fn flags() {
        let pending = tx(TxStatus::Pending, true);
        assert!(pending.is_cancel_available());
        assert!(!pending.is_delete_available());
        assert!(pending.is_in_progress());
        assert!(pending.is_pending());

        let registering = tx(TxStatus::Registering, true);
        assert!(!registering.is_cancel_available());
        assert!(registering.is_in_progress());

        let done = tx(TxStatus::Completed, true);
        assert!(done.is_delete_available());
        assert!(done.has_payment_proof());
        assert!(!tx(TxStatus::Completed, false).has_payment_proof());
    }

    #[test]
    fn addresses_follow_direction() {
        let out = tx(TxStatus::Completed, true);
        assert_eq!((out.address_from(), out.address_to()), ("mine", "peer"));
        let income = tx(TxStatus::Completed, false);
        assert_eq!((income.address_from(), income.address_to()), ("peer", "mine"));
    }

    #[test]
    fn failure_reason_only_when_failed() {
        let tr = Translations::english();
        let mut obj = tx(TxStatus::Failed, true);
        obj.tx.failure_reason = Some(TxFailureReason::NotEnoughFunds);
        assert_eq!(
            obj.failure_reason(&tr),
            "There are not enough funds to complete the transaction"
        );
        obj.tx.status = TxStatus::Completed;
        assert_eq!(obj.failure_reason(&tr), "");
    }

    #[test]
    fn search_joins_fields() {
        let mut obj = tx(TxStatus::Completed, true);
        obj.tx.kernel_id = Some(KernelId([0xab; 32]));
        obj.tx.message = s!("coffee");
        obj.tx.token = s!("tok");
        let search = obj.search_string();
        assert_eq!(
            search,
            format!(
                "{} {} mine peer coffee   tok",
                TxId::from(7u128),
                "ab".repeat(32)
            )
        );
    }

    #[test]
    fn amounts_are_formatted() {
        let mut obj = tx(TxStatus::Completed, true);
        obj.tx.amount = 250_000_000;
        obj.tx.fee = 100_000;
        obj.tx.rate = Some(45_000_000);
        assert_eq!(obj.amount(), "2.5");
        assert_eq!(obj.fee(), "0.001");
        assert_eq!(obj.rate(), "0.45");
    }
}
