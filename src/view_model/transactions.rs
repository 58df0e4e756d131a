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

use chrono::{FixedOffset, Local, Offset};

use super::{ListModel, RoleModel, RoleValue, RowsChanged, TxObject};
use crate::model::format::{amount_to_ui_string, format_time};
use crate::model::{AssetId, AssetsManager, ChangeAction, TxDescription, TxId, Translations};
use crate::worker::{WalletEvent, WalletObserver};

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum TxRole {
    TimeCreated,
    TimeCreatedSort,
    AmountGeneralWithCurrency,
    AmountGeneralWithCurrencySort,
    AmountGeneral,
    AmountGeneralSort,
    Rate,
    AddressFrom,
    AddressFromSort,
    AddressTo,
    AddressToSort,
    Status,
    StatusSort,
    Fee,
    Comment,
    TxId,
    KernelId,
    FailureReason,
    IsCancelAvailable,
    IsDeleteAvailable,
    IsSelfTransaction,
    IsIncome,
    IsInProgress,
    IsPending,
    IsCompleted,
    IsCanceled,
    IsFailed,
    IsExpired,
    HasPaymentProof,
    RawTxId,
    Search,
    StateDetails,
    Token,
    SenderIdentity,
    ReceiverIdentity,
    IsMaxPrivacy,
    IsOfflineToken,
    UnitName,
    Icon,
}

const TX_ROLES: [TxRole; 39] = [
    TxRole::TimeCreated,
    TxRole::TimeCreatedSort,
    TxRole::AmountGeneralWithCurrency,
    TxRole::AmountGeneralWithCurrencySort,
    TxRole::AmountGeneral,
    TxRole::AmountGeneralSort,
    TxRole::Rate,
    TxRole::AddressFrom,
    TxRole::AddressFromSort,
    TxRole::AddressTo,
    TxRole::AddressToSort,
    TxRole::Status,
    TxRole::StatusSort,
    TxRole::Fee,
    TxRole::Comment,
    TxRole::TxId,
    TxRole::KernelId,
    TxRole::FailureReason,
    TxRole::IsCancelAvailable,
    TxRole::IsDeleteAvailable,
    TxRole::IsSelfTransaction,
    TxRole::IsIncome,
    TxRole::IsInProgress,
    TxRole::IsPending,
    TxRole::IsCompleted,
    TxRole::IsCanceled,
    TxRole::IsFailed,
    TxRole::IsExpired,
    TxRole::HasPaymentProof,
    TxRole::RawTxId,
    TxRole::Search,
    TxRole::StateDetails,
    TxRole::Token,
    TxRole::SenderIdentity,
    TxRole::ReceiverIdentity,
    TxRole::IsMaxPrivacy,
    TxRole::IsOfflineToken,
    TxRole::UnitName,
    TxRole::Icon,
];

/// Transaction list exposed to the UI as a role-based table.
pub struct TxObjectList {
    list: ListModel<TxObject>,
    assets: Rc<AssetsManager>,
    tr: Rc<Translations>,
    offset: FixedOffset,
}

impl TxObjectList {
    pub fn with(assets: Rc<AssetsManager>, tr: Rc<Translations>) -> TxObjectList {
        TxObjectList {
            list: ListModel::new(),
            assets,
            tr,
            offset: Local::now().offset().fix(),
        }
    }

    /// Renders creation times in the given offset instead of the local one.
    pub fn set_time_offset(&mut self, offset: FixedOffset) {
        self.offset = offset;
        self.list.touch_where(|_| true);
    }

    pub fn connect(&mut self, sender: mpsc::Sender<RowsChanged>) { self.list.connect(sender) }

    pub fn len(&self) -> usize { self.list.len() }

    pub fn is_empty(&self) -> bool { self.list.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<TxObject> { self.list.iter() }

    pub fn get(&self, tx_id: TxId) -> Option<&TxObject> { self.list.find(&tx_id) }

    pub fn on_transactions_changed(&mut self, action: ChangeAction, items: Vec<TxDescription>) {
        debug!("transaction list: {} of {} item(s)", action, items.len());
        self.list
            .apply(action, items.into_iter().map(TxObject::from).collect());
    }

    pub fn on_asset_info(&self, asset_id: AssetId) {
        self.list.touch_where(|tx| tx.asset_id() == asset_id);
    }
}

impl RoleModel for TxObjectList {
    type Role = TxRole;

    fn roles() -> &'static [TxRole] { &TX_ROLES }

    fn role_name(role: TxRole) -> &'static str {
        match role {
            TxRole::TimeCreated => "timeCreated",
            TxRole::TimeCreatedSort => "timeCreatedSort",
            TxRole::AmountGeneralWithCurrency => "amountGeneralWithCurrency",
            TxRole::AmountGeneralWithCurrencySort => "amountGeneralWithCurrencySort",
            TxRole::AmountGeneral => "amountGeneral",
            TxRole::AmountGeneralSort => "amountGeneralSort",
            TxRole::Rate => "rate",
            TxRole::AddressFrom => "addressFrom",
            TxRole::AddressFromSort => "addressFromSort",
            TxRole::AddressTo => "addressTo",
            TxRole::AddressToSort => "addressToSort",
            TxRole::Status => "status",
            TxRole::StatusSort => "statusSort",
            TxRole::Fee => "fee",
            TxRole::Comment => "comment",
            TxRole::TxId => "txID",
            TxRole::KernelId => "kernelID",
            TxRole::FailureReason => "failureReason",
            TxRole::IsCancelAvailable => "isCancelAvailable",
            TxRole::IsDeleteAvailable => "isDeleteAvailable",
            TxRole::IsSelfTransaction => "isSelfTransaction",
            TxRole::IsIncome => "isIncome",
            TxRole::IsInProgress => "isInProgress",
            TxRole::IsPending => "isPending",
            TxRole::IsCompleted => "isCompleted",
            TxRole::IsCanceled => "isCanceled",
            TxRole::IsFailed => "isFailed",
            TxRole::IsExpired => "isExpired",
            TxRole::HasPaymentProof => "hasPaymentProof",
            TxRole::RawTxId => "rawTxID",
            TxRole::Search => "search",
            TxRole::StateDetails => "stateDetails",
            TxRole::Token => "token",
            TxRole::SenderIdentity => "senderIdentity",
            TxRole::ReceiverIdentity => "receiverIdentity",
            TxRole::IsMaxPrivacy => "isMaxPrivacy",
            TxRole::IsOfflineToken => "isOfflineToken",
            TxRole::UnitName => "unitName",
            TxRole::Icon => "icon",
        }
    }

    fn row_count(&self) -> usize { self.list.len() }

    fn data(&self, row: usize, role: TxRole) -> Option<RoleValue> {
        let value = self.list.get(row)?;
        let tr = self.tr.as_ref();
        Some(match role {
            TxRole::TimeCreated => format_time(value.time_created(), self.offset).into(),
            TxRole::TimeCreatedSort => RoleValue::UInt(value.time_created()),
            TxRole::AmountGeneralWithCurrency => amount_to_ui_string(
                value.amount_value(),
                &self.assets.unit_name(value.asset_id()),
            )
            .into(),
            TxRole::AmountGeneralWithCurrencySort | TxRole::AmountGeneralSort => {
                RoleValue::UInt(value.amount_value())
            }
            TxRole::AmountGeneral => value.amount().into(),
            TxRole::Rate => value.rate().into(),
            TxRole::AddressFrom | TxRole::AddressFromSort => value.address_from().into(),
            TxRole::AddressTo | TxRole::AddressToSort => value.address_to().into(),
            TxRole::Status | TxRole::StatusSort => value.status(tr).into(),
            TxRole::Fee => value.fee().into(),
            TxRole::Comment => value.comment().into(),
            TxRole::TxId => value.transaction_id().into(),
            TxRole::KernelId => value.kernel_id().into(),
            TxRole::FailureReason => value.failure_reason(tr).into(),
            TxRole::IsCancelAvailable => value.is_cancel_available().into(),
            TxRole::IsDeleteAvailable => value.is_delete_available().into(),
            TxRole::IsSelfTransaction => value.is_self_tx().into(),
            TxRole::IsIncome => value.is_income().into(),
            TxRole::IsInProgress => value.is_in_progress().into(),
            TxRole::IsPending => value.is_pending().into(),
            TxRole::IsCompleted => value.is_completed().into(),
            TxRole::IsCanceled => value.is_canceled().into(),
            TxRole::IsFailed => value.is_failed().into(),
            TxRole::IsExpired => value.is_expired().into(),
            TxRole::HasPaymentProof => value.has_payment_proof().into(),
            TxRole::RawTxId => RoleValue::TxId(value.tx_id()),
            TxRole::Search => value.search_string().into(),
            TxRole::StateDetails => value.state_details(tr).into(),
            TxRole::Token => value.token().into(),
            TxRole::SenderIdentity => value.sender_identity().into(),
            TxRole::ReceiverIdentity => value.receiver_identity().into(),
            TxRole::IsMaxPrivacy => value.is_max_privacy().into(),
            TxRole::IsOfflineToken => value.is_offline_token().into(),
            TxRole::UnitName => self.assets.unit_name(value.asset_id()).into(),
            TxRole::Icon => self.assets.icon(value.asset_id()).into(),
        })
    }
}

impl WalletObserver for TxObjectList {
    fn on_wallet_event(&mut self, event: &WalletEvent) {
        match event {
            WalletEvent::TransactionsChanged(action, items) => {
                self.on_transactions_changed(*action, items.clone())
            }
            WalletEvent::AssetInfo(info) => self.on_asset_info(info.id),
            _ => {}
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{AssetInfo, TxStatus};

    fn tx(id: u128, asset: u32, amount: u64) -> TxDescription {
        TxDescription {
            tx_id: TxId::from(id),
            asset_id: AssetId(asset),
            amount,
            status: TxStatus::Completed,
            sender: true,
            create_time: 1_600_000_000,
            ..default!()
        }
    }

    fn list() -> (TxObjectList, Rc<AssetsManager>, mpsc::Receiver<RowsChanged>) {
        let assets = Rc::new(AssetsManager::new());
        let mut list = TxObjectList::with(assets.clone(), Rc::new(Translations::english()));
        list.set_time_offset(FixedOffset::east_opt(0).unwrap());
        let (tx, rx) = mpsc::channel();
        list.connect(tx);
        (list, assets, rx)
    }

    #[test]
    fn role_names_are_unique() {
        let mut names = TxObjectList::roles()
            .iter()
            .map(|role| TxObjectList::role_name(*role))
            .collect::<Vec<_>>();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TX_ROLES.len());
    }

    #[test]
    fn displays_rows() {
        let (mut list, _, _) = list();
        list.on_transactions_changed(ChangeAction::Reset, vec![tx(1, 0, 150_000_000)]);

        assert_eq!(
            list.data(0, TxRole::AmountGeneralWithCurrency),
            Some(RoleValue::from("1.5 BEAM"))
        );
        assert_eq!(list.data(0, TxRole::AmountGeneral), Some(RoleValue::from("1.5")));
        assert_eq!(
            list.data(0, TxRole::AmountGeneralSort),
            Some(RoleValue::UInt(150_000_000))
        );
        assert_eq!(
            list.data(0, TxRole::TimeCreated),
            Some(RoleValue::from("13.09.2020 12:26"))
        );
        assert_eq!(list.data(0, TxRole::Status), Some(RoleValue::from("sent")));
        assert_eq!(list.data(0, TxRole::StatusSort), list.data(0, TxRole::Status));
        assert_eq!(
            list.data(0, TxRole::RawTxId),
            Some(RoleValue::TxId(TxId::from(1u128)))
        );
        assert_eq!(list.data(0, TxRole::IsIncome), Some(RoleValue::Bool(false)));
        assert_eq!(list.data(1, TxRole::Status), None);
    }

    #[test]
    fn asset_info_touches_matching_rows() {
        let (mut list, assets, rx) = list();
        list.on_transactions_changed(ChangeAction::Reset, vec![
            tx(1, 0, 1),
            tx(2, 3, 1),
            tx(3, 3, 1),
        ]);
        let _ = rx.try_iter().count();

        let info = AssetInfo {
            id: AssetId(3),
            name: s!("Gold"),
            unit_name: s!("GLD"),
        };
        assets.on_asset_info(info.clone());
        list.on_wallet_event(&WalletEvent::AssetInfo(info));

        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![
            RowsChanged::Touched(1),
            RowsChanged::Touched(2)
        ]);
        assert_eq!(list.data(1, TxRole::UnitName), Some(RoleValue::from("GLD")));
        assert_eq!(
            list.data(2, TxRole::AmountGeneralWithCurrency),
            Some(RoleValue::from("0.00000001 GLD"))
        );
    }

    #[test]
    fn change_feed_by_tx_id() {
        let (mut list, _, _) = list();
        list.on_wallet_event(&WalletEvent::TransactionsChanged(ChangeAction::Added, vec![
            tx(1, 0, 1),
            tx(2, 0, 2),
        ]));
        let mut updated = tx(2, 0, 2);
        updated.status = TxStatus::Failed;
        list.on_transactions_changed(ChangeAction::Updated, vec![updated]);
        list.on_transactions_changed(ChangeAction::Removed, vec![tx(1, 0, 0)]);

        assert_eq!(list.len(), 1);
        assert_eq!(list.data(0, TxRole::IsFailed), Some(RoleValue::Bool(true)));
        assert!(list.get(TxId::from(1u128)).is_none());
    }

    #[test]
    fn json_row() {
        let (mut list, _, _) = list();
        list.on_transactions_changed(ChangeAction::Reset, vec![tx(1, 0, 100_000_000)]);
        let row = list.row_json(0).unwrap();
        assert_eq!(row["amountGeneral"], "1");
        assert_eq!(row["isCompleted"], true);
        assert_eq!(row["timeCreatedSort"], 1_600_000_000u64);
        assert!(list.row_json(1).is_none());
    }
}
