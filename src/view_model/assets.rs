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
use std::sync::{mpsc, Arc};

use super::{ListModel, RoleModel, RoleValue, Row, RowsChanged};
use crate::model::format::{amount_to_ui_string, currency_unit_name};
use crate::model::{
    AssetId, AssetsManager, ChangeAction, Currency, ExchangeRatesManager, TxDescription, TxType,
    WalletStatus,
};
use crate::worker::{WalletAsync, WalletEvent, WalletObserver};

/// Row of the assets list: an asset and the number of its in-flight
/// transactions in each direction.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct AssetObject {
    id: AssetId,
    in_tx_cnt: u32,
    out_tx_cnt: u32,
}

impl Row for AssetObject {
    type Key = AssetId;

    fn key(&self) -> AssetId { self.id }
}

impl AssetObject {
    pub fn new(id: AssetId) -> AssetObject {
        AssetObject {
            id,
            in_tx_cnt: 0,
            out_tx_cnt: 0,
        }
    }

    pub fn id(&self) -> AssetId { self.id }

    pub fn in_tx_cnt(&self) -> u32 { self.in_tx_cnt }

    pub fn out_tx_cnt(&self) -> u32 { self.out_tx_cnt }

    fn reset_tx_cnt(&mut self) {
        self.in_tx_cnt = 0;
        self.out_tx_cnt = 0;
    }

    fn add_in_tx(&mut self) { self.in_tx_cnt += 1 }

    fn add_out_tx(&mut self) { self.out_tx_cnt += 1 }
}

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum AssetRole {
    Search,
    Id,
    UnitName,
    Amount,
    InTxCnt,
    OutTxCnt,
    Icon,
    Color,
    SelectionColor,
    RateUnit,
    Rate,
}

const ASSET_ROLES: [AssetRole; 11] = [
    AssetRole::Search,
    AssetRole::Id,
    AssetRole::UnitName,
    AssetRole::Amount,
    AssetRole::InTxCnt,
    AssetRole::OutTxCnt,
    AssetRole::Icon,
    AssetRole::Color,
    AssetRole::SelectionColor,
    AssetRole::RateUnit,
    AssetRole::Rate,
];

/// Assets list shown on the wallet main screen.
pub struct AssetsList {
    list: ListModel<AssetObject>,
    txlist: Vec<TxDescription>,
    status: WalletStatus,
    assets: Rc<AssetsManager>,
    rates: Rc<ExchangeRatesManager>,
}

impl AssetsList {
    /// Creates the list with the BEAM row and asks the wallet for the
    /// transactions the counters are computed from.
    pub fn with(
        wallet: Arc<dyn WalletAsync>,
        assets: Rc<AssetsManager>,
        rates: Rc<ExchangeRatesManager>,
    ) -> AssetsList {
        let mut list = ListModel::new();
        list.reset(vec![AssetObject::new(AssetId::BEAM)]);
        wallet.get_transactions();
        AssetsList {
            list,
            txlist: empty!(),
            status: default!(),
            assets,
            rates,
        }
    }

    pub fn connect(&mut self, sender: mpsc::Sender<RowsChanged>) { self.list.connect(sender) }

    pub fn get(&self, id: AssetId) -> Option<&AssetObject> { self.list.find(&id) }

    pub fn iter(&self) -> std::slice::Iter<AssetObject> { self.list.iter() }

    pub fn touch(&self, id: AssetId) { self.list.touch_where(|obj| obj.id() == id) }

    pub fn on_new_rates(&self) { self.touch(AssetId::BEAM) }

    /// Adds rows for assets which appeared in the wallet balances and
    /// refreshes every row.
    pub fn on_wallet_status(&mut self, status: WalletStatus) {
        for id in status.balances.keys() {
            if self.list.find(id).is_none() {
                let row = self.list.iter().take_while(|obj| obj.id() < *id).count();
                debug!("asset {} appeared in the wallet", id);
                self.list.insert(row, AssetObject::new(*id));
            }
        }
        self.status = status;
        self.recount();
    }

    pub fn on_asset_info(&self, id: AssetId) { self.touch(id) }

    pub fn on_transactions_changed(&mut self, action: ChangeAction, items: Vec<TxDescription>) {
        let modified = items
            .into_iter()
            .filter(|tx| matches!(tx.tx_type, TxType::Simple | TxType::PushTransaction))
            .collect::<Vec<_>>();

        match action {
            ChangeAction::Reset => self.txlist = modified,
            ChangeAction::Removed => {
                for del in modified {
                    self.txlist.retain(|tx| tx.tx_id != del.tx_id);
                }
            }
            ChangeAction::Added => self.txlist.extend(modified),
            ChangeAction::Updated => {
                for repl in modified {
                    for tx in self.txlist.iter_mut().filter(|tx| tx.tx_id == repl.tx_id) {
                        *tx = repl.clone();
                    }
                }
            }
        }

        self.recount();
    }

    /// Recomputes in-flight transaction counters of every row from the
    /// cached transactions and touches all rows.
    fn recount(&mut self) {
        let rows = self.list.items_mut();
        rows.iter_mut().for_each(AssetObject::reset_tx_cnt);
        for tx in self.txlist.iter().filter(|tx| tx.status.is_active()) {
            if let Some(obj) = rows.iter_mut().find(|obj| obj.id() == tx.asset_id) {
                if tx.sender {
                    obj.add_out_tx();
                } else {
                    obj.add_in_tx();
                }
            }
        }
        debug!("assets list: recounted counters over {} cached transaction(s)", self.txlist.len());

        self.list.touch_where(|_| true);
    }
}

impl RoleModel for AssetsList {
    type Role = AssetRole;

    fn roles() -> &'static [AssetRole] { &ASSET_ROLES }

    fn role_name(role: AssetRole) -> &'static str {
        match role {
            AssetRole::Search => "search",
            AssetRole::Id => "id",
            AssetRole::UnitName => "unitName",
            AssetRole::Amount => "amount",
            AssetRole::InTxCnt => "inTxCnt",
            AssetRole::OutTxCnt => "outTxCnt",
            AssetRole::Icon => "icon",
            AssetRole::Color => "color",
            AssetRole::SelectionColor => "selectionColor",
            AssetRole::RateUnit => "rateUnit",
            AssetRole::Rate => "rate",
        }
    }

    fn row_count(&self) -> usize { self.list.len() }

    fn data(&self, row: usize, role: AssetRole) -> Option<RoleValue> {
        let asset = self.list.get(row)?;
        let asset_id = asset.id();

        Some(match role {
            AssetRole::Id => RoleValue::Int(asset_id.0 as i64),
            AssetRole::UnitName => self.assets.unit_name(asset_id).into(),
            AssetRole::Amount => amount_to_ui_string(self.status.available(asset_id), "").into(),
            AssetRole::InTxCnt => RoleValue::Int(asset.in_tx_cnt() as i64),
            AssetRole::OutTxCnt => RoleValue::Int(asset.out_tx_cnt() as i64),
            AssetRole::Search => {
                let mut search = self.assets.name(asset_id);
                search.push_str(&self.assets.unit_name(asset_id));
                search.into()
            }
            AssetRole::Icon => self.assets.icon(asset_id).into(),
            AssetRole::Color => self.assets.color(asset_id).into(),
            AssetRole::SelectionColor => self.assets.selection_color(asset_id).into(),
            AssetRole::RateUnit if asset_id.is_beam() => {
                currency_unit_name(self.rates.rate_unit_raw()).into()
            }
            AssetRole::Rate if asset_id.is_beam() => {
                amount_to_ui_string(self.rates.rate(Currency::Beam), "").into()
            }
            AssetRole::RateUnit | AssetRole::Rate => RoleValue::from(""),
        })
    }
}

impl WalletObserver for AssetsList {
    fn on_wallet_event(&mut self, event: &WalletEvent) {
        match event {
            WalletEvent::StatusChanged(status) => self.on_wallet_status(status.clone()),
            WalletEvent::TransactionsChanged(action, items) => {
                self.on_transactions_changed(*action, items.clone())
            }
            WalletEvent::AssetInfo(info) => self.on_asset_info(info.id),
            _ => {}
        }
    }

    fn on_active_rates_changed(&mut self) { self.on_new_rates() }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{AssetBalance, AssetInfo, ExchangeRate, TxId, TxStatus};
    use crate::worker::mock::{Call, RecordingWallet};

    fn tx(id: u128, asset: u32, status: TxStatus, sender: bool) -> TxDescription {
        TxDescription {
            tx_id: TxId::from(id),
            asset_id: AssetId(asset),
            status,
            sender,
            ..default!()
        }
    }

    fn status(balances: &[(u32, u64)]) -> WalletStatus {
        WalletStatus {
            balances: balances
                .iter()
                .map(|(id, available)| {
                    (AssetId(*id), AssetBalance {
                        available: *available,
                        ..default!()
                    })
                })
                .collect(),
        }
    }

    fn assets_list() -> (AssetsList, Arc<RecordingWallet>, Rc<ExchangeRatesManager>) {
        let wallet = Arc::new(RecordingWallet::default());
        let rates = Rc::new(ExchangeRatesManager::with(Currency::Usd));
        let list = AssetsList::with(wallet.clone(), Rc::new(AssetsManager::new()), rates.clone());
        (list, wallet, rates)
    }

    fn counts(list: &AssetsList) -> Vec<(u32, u32, u32)> {
        list.iter()
            .map(|obj| (obj.id().0, obj.in_tx_cnt(), obj.out_tx_cnt()))
            .collect()
    }

    #[test]
    fn requests_transactions_on_creation() {
        let (list, wallet, _) = assets_list();
        assert_eq!(wallet.calls(), vec![Call::GetTransactions]);
        assert_eq!(list.row_count(), 1);
        assert_eq!(list.data(0, AssetRole::Id), Some(RoleValue::Int(0)));
    }

    #[test]
    fn wallet_status_adds_rows_in_order() {
        let (mut list, _, _) = assets_list();
        list.on_wallet_status(status(&[(0, 150_000_000), (5, 1), (2, 7)]));
        assert_eq!(counts(&list), vec![(0, 0, 0), (2, 0, 0), (5, 0, 0)]);
        assert_eq!(list.data(0, AssetRole::Amount), Some(RoleValue::from("1.5")));
        assert_eq!(list.data(2, AssetRole::Amount), Some(RoleValue::from("0.00000001")));
    }

    #[test]
    fn counts_active_transactions_per_direction() {
        let (mut list, _, _) = assets_list();
        list.on_wallet_status(status(&[(0, 0), (3, 0)]));

        list.on_transactions_changed(ChangeAction::Reset, vec![
            tx(1, 0, TxStatus::Pending, true),
            tx(2, 0, TxStatus::InProgress, false),
            tx(3, 0, TxStatus::Registering, false),
            tx(4, 0, TxStatus::Completed, true),
            tx(5, 3, TxStatus::InProgress, true),
            // unknown asset rows are not created from transactions
            tx(6, 9, TxStatus::InProgress, true),
        ]);
        assert_eq!(counts(&list), vec![(0, 2, 1), (3, 0, 1)]);

        list.on_transactions_changed(ChangeAction::Updated, vec![tx(
            2,
            0,
            TxStatus::Completed,
            false,
        )]);
        assert_eq!(counts(&list), vec![(0, 1, 1), (3, 0, 1)]);

        list.on_transactions_changed(ChangeAction::Removed, vec![tx(5, 3, TxStatus::Canceled, true)]);
        assert_eq!(counts(&list), vec![(0, 1, 1), (3, 0, 0)]);

        list.on_transactions_changed(ChangeAction::Added, vec![tx(7, 3, TxStatus::Pending, false)]);
        assert_eq!(counts(&list), vec![(0, 1, 1), (3, 1, 0)]);
    }

    #[test]
    fn ignores_other_transaction_types() {
        let (mut list, _, _) = assets_list();
        let mut swap = tx(1, 0, TxStatus::InProgress, true);
        swap.tx_type = TxType::AtomicSwap;
        let mut push = tx(2, 0, TxStatus::InProgress, true);
        push.tx_type = TxType::PushTransaction;
        list.on_transactions_changed(ChangeAction::Reset, vec![swap, push]);
        assert_eq!(counts(&list), vec![(0, 0, 1)]);
    }

    #[test]
    fn counts_transactions_received_before_status() {
        let (mut list, _, _) = assets_list();
        list.on_transactions_changed(ChangeAction::Reset, vec![
            tx(1, 3, TxStatus::InProgress, true),
            tx(2, 3, TxStatus::Pending, false),
            tx(3, 0, TxStatus::Registering, false),
        ]);
        assert_eq!(counts(&list), vec![(0, 1, 0)]);

        list.on_wallet_status(status(&[(0, 0), (3, 0)]));
        assert_eq!(counts(&list), vec![(0, 1, 0), (3, 1, 1)]);
        assert_eq!(list.data(1, AssetRole::InTxCnt), Some(RoleValue::Int(1)));
        assert_eq!(list.data(1, AssetRole::OutTxCnt), Some(RoleValue::Int(1)));
    }

    #[test]
    fn touches_every_row_after_recount() {
        let (mut list, _, _) = assets_list();
        list.on_wallet_status(status(&[(0, 0), (1, 0)]));
        let (tx, rx) = mpsc::channel();
        list.connect(tx);
        list.on_transactions_changed(ChangeAction::Reset, vec![]);
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![
            RowsChanged::Touched(0),
            RowsChanged::Touched(1)
        ]);
    }

    #[test]
    fn rate_only_for_beam() {
        let (mut list, _, rates) = assets_list();
        list.on_wallet_status(status(&[(0, 0), (4, 0)]));
        rates.on_rates(&[ExchangeRate {
            from: Currency::Beam,
            to: Currency::Usd,
            value: 41_000_000,
            update_time: 0,
        }]);
        let (tx, rx) = mpsc::channel();
        list.connect(tx);
        list.on_wallet_event(&WalletEvent::ExchangeRates(vec![]));
        assert!(rx.try_recv().is_err());
        list.on_active_rates_changed();

        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![RowsChanged::Touched(0)]);
        assert_eq!(list.data(0, AssetRole::Rate), Some(RoleValue::from("0.41")));
        assert_eq!(list.data(0, AssetRole::RateUnit), Some(RoleValue::from("USD")));
        assert_eq!(list.data(1, AssetRole::Rate), Some(RoleValue::from("")));
        assert_eq!(list.data(1, AssetRole::RateUnit), Some(RoleValue::from("")));
    }

    #[test]
    fn search_and_metadata() {
        let assets = Rc::new(AssetsManager::new());
        let mut list = AssetsList::with(
            Arc::new(RecordingWallet::default()),
            assets.clone(),
            Rc::new(ExchangeRatesManager::default()),
        );
        list.on_wallet_status(status(&[(6, 0)]));
        assets.on_asset_info(AssetInfo {
            id: AssetId(6),
            name: s!("Silver"),
            unit_name: s!("SLV"),
        });
        assert_eq!(list.data(0, AssetRole::Search), Some(RoleValue::from("BEAMBEAM")));
        assert_eq!(list.data(1, AssetRole::Search), Some(RoleValue::from("SilverSLV")));
        assert_eq!(list.data(1, AssetRole::UnitName), Some(RoleValue::from("SLV")));
        assert_eq!(list.data(2, AssetRole::Search), None);
    }
}
