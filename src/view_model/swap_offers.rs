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

use chrono::{FixedOffset, Local, Offset};

use super::{Emitter, ListModel, RoleModel, RoleValue, Row, RowsChanged, TxObjectList};
use crate::model::format::{amount_to_coins, amount_to_ui_string, format_time, ratio_to_ui_string};
use crate::model::{
    Amount, AssetId, AssetsManager, AtomicSwapCoin, ChangeAction, SwapClientStatus, SwapOffer,
    Translations, TxDescription, TxId, TxType, WalletStatus,
};
use crate::worker::{WalletAsync, WalletEvent, WalletObserver};

impl Row for SwapOffer {
    type Key = TxId;

    fn key(&self) -> TxId { self.tx_id }
}

/// Cached state of a single swap coin client.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct SwapCoinClientModel {
    coin: AtomicSwapCoin,
    available: Amount,
    status: SwapClientStatus,
}

impl SwapCoinClientModel {
    pub fn new(coin: AtomicSwapCoin) -> SwapCoinClientModel {
        SwapCoinClientModel {
            coin,
            available: 0,
            status: default!(),
        }
    }

    pub fn coin(&self) -> AtomicSwapCoin { self.coin }

    pub fn available(&self) -> Amount { self.available }

    pub fn status(&self) -> SwapClientStatus { self.status }

    pub fn is_ok(&self) -> bool { self.status == SwapClientStatus::Connected }

    /// Returns whether the balance changed.
    pub fn set_available(&mut self, available: Amount) -> bool {
        if self.available == available {
            return false;
        }
        self.available = available;
        true
    }

    /// Returns whether [`SwapCoinClientModel::is_ok`] flipped.
    pub fn set_status(&mut self, status: SwapClientStatus) -> bool {
        let was_ok = self.is_ok();
        self.status = status;
        was_ok != self.is_ok()
    }
}

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum SwapOfferRole {
    Id,
    RawTxId,
    Coin,
    Amount,
    AmountSwap,
    Rate,
    TimeCreated,
    Expiration,
    IsOwnOffer,
    IsBeamSide,
    Status,
}

const SWAP_OFFER_ROLES: [SwapOfferRole; 11] = [
    SwapOfferRole::Id,
    SwapOfferRole::RawTxId,
    SwapOfferRole::Coin,
    SwapOfferRole::Amount,
    SwapOfferRole::AmountSwap,
    SwapOfferRole::Rate,
    SwapOfferRole::TimeCreated,
    SwapOfferRole::Expiration,
    SwapOfferRole::IsOwnOffer,
    SwapOfferRole::IsBeamSide,
    SwapOfferRole::Status,
];

/// Offers board as a role-based table.
pub struct SwapOffersList {
    list: ListModel<SwapOffer>,
    offset: FixedOffset,
}

impl Default for SwapOffersList {
    fn default() -> Self {
        SwapOffersList {
            list: ListModel::new(),
            offset: Local::now().offset().fix(),
        }
    }
}

impl SwapOffersList {
    pub fn new() -> SwapOffersList { SwapOffersList::default() }

    pub fn set_time_offset(&mut self, offset: FixedOffset) {
        self.offset = offset;
        self.list.touch_where(|_| true);
    }

    pub fn connect(&mut self, sender: mpsc::Sender<RowsChanged>) { self.list.connect(sender) }

    pub fn len(&self) -> usize { self.list.len() }

    pub fn is_empty(&self) -> bool { self.list.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<SwapOffer> { self.list.iter() }

    pub fn get(&self, tx_id: TxId) -> Option<&SwapOffer> { self.list.find(&tx_id) }

    pub fn apply(&mut self, action: ChangeAction, offers: Vec<SwapOffer>) {
        debug!("swap offers: {} of {} offer(s)", action, offers.len());
        self.list.apply(action, offers);
    }
}

impl RoleModel for SwapOffersList {
    type Role = SwapOfferRole;

    fn roles() -> &'static [SwapOfferRole] { &SWAP_OFFER_ROLES }

    fn role_name(role: SwapOfferRole) -> &'static str {
        match role {
            SwapOfferRole::Id => "id",
            SwapOfferRole::RawTxId => "rawTxID",
            SwapOfferRole::Coin => "coin",
            SwapOfferRole::Amount => "amount",
            SwapOfferRole::AmountSwap => "amountSwap",
            SwapOfferRole::Rate => "rate",
            SwapOfferRole::TimeCreated => "timeCreated",
            SwapOfferRole::Expiration => "expiration",
            SwapOfferRole::IsOwnOffer => "isOwnOffer",
            SwapOfferRole::IsBeamSide => "isBeamSide",
            SwapOfferRole::Status => "status",
        }
    }

    fn row_count(&self) -> usize { self.list.len() }

    fn data(&self, row: usize, role: SwapOfferRole) -> Option<RoleValue> {
        let offer = self.list.get(row)?;
        Some(match role {
            SwapOfferRole::Id => offer.tx_id.to_string().into(),
            SwapOfferRole::RawTxId => RoleValue::TxId(offer.tx_id),
            SwapOfferRole::Coin => offer.coin.to_string().into(),
            SwapOfferRole::Amount => amount_to_ui_string(offer.amount, "").into(),
            SwapOfferRole::AmountSwap => amount_to_ui_string(offer.swap_amount, "").into(),
            SwapOfferRole::Rate => ratio_to_ui_string(offer.swap_amount, offer.amount).into(),
            SwapOfferRole::TimeCreated => format_time(offer.time_created, self.offset).into(),
            SwapOfferRole::Expiration => format_time(offer.time_expiration, self.offset).into(),
            SwapOfferRole::IsOwnOffer => offer.is_own.into(),
            SwapOfferRole::IsBeamSide => offer.is_beam_side.into(),
            SwapOfferRole::Status => offer.status.to_string().into(),
        })
    }
}

/// Details shown in the payment proof dialog of a swap transaction.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PaymentInfo {
    pub sender: String,
    pub receiver: String,
    pub amount: String,
    pub kernel_id: String,
}

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Signal {
    AllTransactionsChanged,
    AllOffersChanged,
    BeamAvailableChanged,
    AvailableChanged(AtomicSwapCoin),
    OkChanged(AtomicSwapCoin),
    CoinTypeChanged,
}

/// State behind the atomic swap screen.
pub struct SwapOffersViewModel {
    wallet: Arc<dyn WalletAsync>,
    transactions: TxObjectList,
    offers: SwapOffersList,
    beam_available: Amount,
    clients: [SwapCoinClientModel; 3],
    coin_type: AtomicSwapCoin,
    show_beta_warning: bool,
    signals: Emitter<Signal>,
}

impl SwapOffersViewModel {
    /// Creates the view model and asks the wallet for the offers board and
    /// the transactions.
    pub fn with(
        wallet: Arc<dyn WalletAsync>,
        assets: Rc<AssetsManager>,
        tr: Rc<Translations>,
        show_beta_warning: bool,
    ) -> SwapOffersViewModel {
        wallet.get_swap_offers();
        wallet.get_transactions();
        SwapOffersViewModel {
            wallet,
            transactions: TxObjectList::with(assets, tr),
            offers: SwapOffersList::new(),
            beam_available: 0,
            clients: [
                SwapCoinClientModel::new(AtomicSwapCoin::Bitcoin),
                SwapCoinClientModel::new(AtomicSwapCoin::Litecoin),
                SwapCoinClientModel::new(AtomicSwapCoin::Qtum),
            ],
            coin_type: AtomicSwapCoin::Bitcoin,
            show_beta_warning,
            signals: default!(),
        }
    }

    pub fn connect(&mut self, sender: mpsc::Sender<Signal>) { self.signals.connect(sender) }

    pub fn transactions(&self) -> &TxObjectList { &self.transactions }

    pub fn transactions_mut(&mut self) -> &mut TxObjectList { &mut self.transactions }

    pub fn all_offers(&self) -> &SwapOffersList { &self.offers }

    pub fn all_offers_mut(&mut self) -> &mut SwapOffersList { &mut self.offers }

    pub fn client(&self, coin: AtomicSwapCoin) -> &SwapCoinClientModel {
        &self.clients[coin.index() as usize]
    }

    fn client_mut(&mut self, coin: AtomicSwapCoin) -> &mut SwapCoinClientModel {
        &mut self.clients[coin.index() as usize]
    }

    pub fn beam_available(&self) -> f64 { amount_to_coins(self.beam_available) }

    pub fn btc_available(&self) -> f64 {
        amount_to_coins(self.client(AtomicSwapCoin::Bitcoin).available())
    }

    pub fn ltc_available(&self) -> f64 {
        amount_to_coins(self.client(AtomicSwapCoin::Litecoin).available())
    }

    pub fn qtum_available(&self) -> f64 {
        amount_to_coins(self.client(AtomicSwapCoin::Qtum).available())
    }

    pub fn btc_ok(&self) -> bool { self.client(AtomicSwapCoin::Bitcoin).is_ok() }

    pub fn ltc_ok(&self) -> bool { self.client(AtomicSwapCoin::Litecoin).is_ok() }

    pub fn qtum_ok(&self) -> bool { self.client(AtomicSwapCoin::Qtum).is_ok() }

    pub fn show_beta_warning(&self) -> bool { self.show_beta_warning }

    /// Number of swap transactions which are still running.
    pub fn active_tx_count(&self) -> usize {
        self.transactions.iter().filter(|tx| tx.is_in_progress()).count()
    }

    fn has_active_tx(&self, coin: AtomicSwapCoin) -> bool {
        self.transactions
            .iter()
            .any(|tx| tx.is_in_progress() && tx.as_description().swap_coin == Some(coin))
    }

    pub fn has_btc_tx(&self) -> bool { self.has_active_tx(AtomicSwapCoin::Bitcoin) }

    pub fn has_ltc_tx(&self) -> bool { self.has_active_tx(AtomicSwapCoin::Litecoin) }

    pub fn has_qtum_tx(&self) -> bool { self.has_active_tx(AtomicSwapCoin::Qtum) }

    pub fn coin_type(&self) -> AtomicSwapCoin { self.coin_type }

    pub fn set_coin_type(&mut self, index: i32) {
        match AtomicSwapCoin::from_index(index) {
            Some(coin) if coin == self.coin_type => {}
            Some(coin) => {
                self.coin_type = coin;
                self.signals.emit(Signal::CoinTypeChanged);
            }
            None => warn!("ignoring unknown swap coin index {}", index),
        }
    }

    pub fn cancel_tx(&self, tx_id: TxId) {
        info!("canceling swap transaction {}", tx_id);
        self.wallet.cancel_tx(tx_id);
    }

    pub fn delete_tx(&self, tx_id: TxId) {
        info!("deleting swap transaction {}", tx_id);
        self.wallet.delete_tx(tx_id);
    }

    pub fn payment_info(&self, tx_id: TxId) -> Option<PaymentInfo> {
        self.transactions.get(tx_id).map(|tx| PaymentInfo {
            sender: tx.address_from().to_owned(),
            receiver: tx.address_to().to_owned(),
            amount: tx.amount(),
            kernel_id: tx.kernel_id(),
        })
    }

    pub fn on_transactions_changed(&mut self, action: ChangeAction, items: Vec<TxDescription>) {
        let swaps = items
            .into_iter()
            .filter(|tx| tx.tx_type == TxType::AtomicSwap)
            .collect();
        self.transactions.on_transactions_changed(action, swaps);
        self.signals.emit(Signal::AllTransactionsChanged);
    }

    pub fn on_swap_offers_changed(&mut self, action: ChangeAction, offers: Vec<SwapOffer>) {
        self.offers.apply(action, offers);
        self.signals.emit(Signal::AllOffersChanged);
    }

    pub fn on_wallet_status(&mut self, status: &WalletStatus) {
        let available = status.available(AssetId::BEAM);
        if available != self.beam_available {
            self.beam_available = available;
            self.signals.emit(Signal::BeamAvailableChanged);
        }
    }

    pub fn on_client_balance(&mut self, coin: AtomicSwapCoin, available: Amount) {
        if self.client_mut(coin).set_available(available) {
            self.signals.emit(Signal::AvailableChanged(coin));
        }
    }

    pub fn on_client_status(&mut self, coin: AtomicSwapCoin, status: SwapClientStatus) {
        debug!("{} client is {}", coin, status);
        if self.client_mut(coin).set_status(status) {
            self.signals.emit(Signal::OkChanged(coin));
        }
    }
}

impl WalletObserver for SwapOffersViewModel {
    fn on_wallet_event(&mut self, event: &WalletEvent) {
        match event {
            WalletEvent::StatusChanged(status) => self.on_wallet_status(status),
            WalletEvent::TransactionsChanged(action, items) => {
                self.on_transactions_changed(*action, items.clone())
            }
            WalletEvent::SwapOffersChanged(action, offers) => {
                self.on_swap_offers_changed(*action, offers.clone())
            }
            WalletEvent::SwapClientBalance(coin, available) => {
                self.on_client_balance(*coin, *available)
            }
            WalletEvent::SwapClientStatus(coin, status) => self.on_client_status(*coin, *status),
            WalletEvent::AssetInfo(info) => self.transactions.on_asset_info(info.id),
            _ => {}
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{AssetBalance, KernelId, SwapOfferStatus, TxStatus};
    use crate::worker::mock::{Call, RecordingWallet};

    fn view_model() -> (SwapOffersViewModel, Arc<RecordingWallet>, mpsc::Receiver<Signal>) {
        let wallet = Arc::new(RecordingWallet::default());
        let mut vm = SwapOffersViewModel::with(
            wallet.clone(),
            Rc::new(AssetsManager::new()),
            Rc::new(Translations::english()),
            true,
        );
        let (tx, rx) = mpsc::channel();
        vm.connect(tx);
        (vm, wallet, rx)
    }

    fn swap(id: u128, coin: AtomicSwapCoin, status: TxStatus) -> TxDescription {
        TxDescription {
            tx_id: TxId::from(id),
            tx_type: TxType::AtomicSwap,
            swap_coin: Some(coin),
            status,
            sender: true,
            amount: 200_000_000,
            peer_id: s!("peer"),
            my_id: s!("mine"),
            ..default!()
        }
    }

    fn offer(id: u128) -> SwapOffer {
        SwapOffer {
            tx_id: TxId::from(id),
            status: SwapOfferStatus::Pending,
            publisher_id: s!("publisher"),
            coin: AtomicSwapCoin::Litecoin,
            amount: 400_000_000,
            swap_amount: 100_000_000,
            is_beam_side: true,
            is_own: false,
            time_created: 0,
            time_expiration: 43_200,
        }
    }

    fn signals(rx: &mpsc::Receiver<Signal>) -> Vec<Signal> { rx.try_iter().collect() }

    #[test]
    fn requests_offers_and_transactions() {
        let (vm, wallet, _) = view_model();
        assert_eq!(wallet.calls(), vec![Call::GetSwapOffers, Call::GetTransactions]);
        assert!(vm.show_beta_warning());
        assert_eq!(vm.coin_type(), AtomicSwapCoin::Bitcoin);
    }

    #[test]
    fn keeps_only_swap_transactions() {
        let (mut vm, _, rx) = view_model();
        let simple = TxDescription {
            tx_id: TxId::from(9u128),
            status: TxStatus::InProgress,
            ..default!()
        };
        vm.on_wallet_event(&WalletEvent::TransactionsChanged(ChangeAction::Reset, vec![
            swap(1, AtomicSwapCoin::Bitcoin, TxStatus::InProgress),
            swap(2, AtomicSwapCoin::Qtum, TxStatus::Completed),
            swap(3, AtomicSwapCoin::Qtum, TxStatus::Registering),
            simple,
        ]));

        assert_eq!(vm.transactions().len(), 3);
        assert_eq!(vm.active_tx_count(), 2);
        assert!(vm.has_btc_tx());
        assert!(!vm.has_ltc_tx());
        assert!(vm.has_qtum_tx());
        assert_eq!(signals(&rx), vec![Signal::AllTransactionsChanged]);

        vm.on_transactions_changed(ChangeAction::Updated, vec![swap(
            1,
            AtomicSwapCoin::Bitcoin,
            TxStatus::Completed,
        )]);
        assert!(!vm.has_btc_tx());
        assert_eq!(vm.active_tx_count(), 1);
    }

    #[test]
    fn balances_and_statuses_signal_on_change() {
        let (mut vm, _, rx) = view_model();
        let mut status = WalletStatus::default();
        status.balances.insert(AssetId::BEAM, AssetBalance {
            available: 250_000_000,
            ..default!()
        });

        vm.on_wallet_event(&WalletEvent::StatusChanged(status.clone()));
        vm.on_wallet_event(&WalletEvent::StatusChanged(status));
        vm.on_wallet_event(&WalletEvent::SwapClientBalance(AtomicSwapCoin::Litecoin, 50_000_000));
        vm.on_wallet_event(&WalletEvent::SwapClientBalance(AtomicSwapCoin::Litecoin, 50_000_000));
        vm.on_wallet_event(&WalletEvent::SwapClientStatus(
            AtomicSwapCoin::Bitcoin,
            SwapClientStatus::Connected,
        ));
        vm.on_wallet_event(&WalletEvent::SwapClientStatus(
            AtomicSwapCoin::Bitcoin,
            SwapClientStatus::Connected,
        ));
        // failed and unknown are both "not ok"
        vm.on_wallet_event(&WalletEvent::SwapClientStatus(
            AtomicSwapCoin::Qtum,
            SwapClientStatus::Failed,
        ));

        assert_eq!(signals(&rx), vec![
            Signal::BeamAvailableChanged,
            Signal::AvailableChanged(AtomicSwapCoin::Litecoin),
            Signal::OkChanged(AtomicSwapCoin::Bitcoin),
        ]);
        assert_eq!(vm.beam_available(), 2.5);
        assert_eq!(vm.ltc_available(), 0.5);
        assert_eq!(vm.btc_available(), 0.0);
        assert_eq!(vm.qtum_available(), 0.0);
        assert!(vm.btc_ok());
        assert!(!vm.ltc_ok());
        assert!(!vm.qtum_ok());
        assert_eq!(vm.client(AtomicSwapCoin::Qtum).status(), SwapClientStatus::Failed);
    }

    #[test]
    fn coin_type_selection() {
        let (mut vm, _, rx) = view_model();
        vm.set_coin_type(2);
        vm.set_coin_type(2);
        vm.set_coin_type(7);
        vm.set_coin_type(-1);
        assert_eq!(vm.coin_type(), AtomicSwapCoin::Qtum);
        assert_eq!(signals(&rx), vec![Signal::CoinTypeChanged]);
    }

    #[test]
    fn cancel_and_delete_forwarded() {
        let (vm, wallet, _) = view_model();
        vm.cancel_tx(TxId::from(1u128));
        vm.delete_tx(TxId::from(2u128));
        assert_eq!(wallet.calls()[2..], [
            Call::CancelTx(TxId::from(1u128)),
            Call::DeleteTx(TxId::from(2u128))
        ]);
    }

    #[test]
    fn payment_info_for_listed_swaps() {
        let (mut vm, _, _) = view_model();
        let mut tx = swap(5, AtomicSwapCoin::Bitcoin, TxStatus::Completed);
        tx.kernel_id = Some(KernelId([1u8; 32]));
        vm.on_transactions_changed(ChangeAction::Reset, vec![tx]);

        assert_eq!(
            vm.payment_info(TxId::from(5u128)),
            Some(PaymentInfo {
                sender: s!("mine"),
                receiver: s!("peer"),
                amount: s!("2"),
                kernel_id: "01".repeat(32),
            })
        );
        assert_eq!(vm.payment_info(TxId::from(6u128)), None);
    }

    #[test]
    fn offers_board() {
        let (mut vm, _, rx) = view_model();
        vm.all_offers_mut().set_time_offset(FixedOffset::east_opt(0).unwrap());
        vm.on_wallet_event(&WalletEvent::SwapOffersChanged(ChangeAction::Reset, vec![
            offer(1),
            offer(2),
        ]));
        vm.on_wallet_event(&WalletEvent::SwapOffersChanged(ChangeAction::Removed, vec![offer(1)]));
        assert_eq!(signals(&rx), vec![Signal::AllOffersChanged, Signal::AllOffersChanged]);

        let offers = vm.all_offers();
        assert_eq!(offers.row_count(), 1);
        assert_eq!(offers.data(0, SwapOfferRole::Rate), Some(RoleValue::from("0.25")));
        assert_eq!(offers.data(0, SwapOfferRole::Coin), Some(RoleValue::from("LTC")));
        assert_eq!(offers.data(0, SwapOfferRole::Amount), Some(RoleValue::from("4")));
        assert_eq!(offers.data(0, SwapOfferRole::AmountSwap), Some(RoleValue::from("1")));
        assert_eq!(
            offers.data(0, SwapOfferRole::Expiration),
            Some(RoleValue::from("01.01.1970 12:00"))
        );
        assert_eq!(
            offers.data(0, SwapOfferRole::RawTxId),
            Some(RoleValue::TxId(TxId::from(2u128)))
        );
        assert_eq!(offers.data(1, SwapOfferRole::Id), None);
    }
}
