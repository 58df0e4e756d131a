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

use std::sync::{mpsc, Mutex};
use std::thread::JoinHandle;
use std::{io, thread};

use super::{EventSender, WalletEvent};
use crate::model::TxId;

/// Asynchronous command surface of the wallet engine. All calls are
/// fire-and-forget: results come back as [`WalletEvent`]s.
pub trait WalletAsync: Send + Sync {
    fn set_node_address(&self, addr: &str);
    fn emergency_reset(&self);
    fn get_wallet_status(&self);
    fn get_transactions(&self);
    fn get_swap_offers(&self);
    fn cancel_tx(&self, tx_id: TxId);
    fn delete_tx(&self, tx_id: TxId);
}

#[derive(Clone, PartialEq, Eq, Debug, Display, Error)]
#[display("{0}")]
pub struct EngineError(pub String);

/// Blocking wallet engine driven by the [`WalletWorker`] thread. Engines
/// publish their notifications through the provided event sender.
pub trait WalletEngine: Send + 'static {
    fn set_node_address(&mut self, addr: &str, events: &EventSender) -> Result<(), EngineError>;
    fn emergency_reset(&mut self, events: &EventSender) -> Result<(), EngineError>;
    fn wallet_status(&mut self, events: &EventSender) -> Result<(), EngineError>;
    fn transactions(&mut self, events: &EventSender) -> Result<(), EngineError>;
    fn swap_offers(&mut self, events: &EventSender) -> Result<(), EngineError>;
    fn cancel_tx(&mut self, tx_id: TxId, events: &EventSender) -> Result<(), EngineError>;
    fn delete_tx(&mut self, tx_id: TxId, events: &EventSender) -> Result<(), EngineError>;
}

#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
enum Cmd {
    #[display("set node address")]
    SetNodeAddress(String),
    #[display("emergency reset")]
    EmergencyReset,
    #[display("get wallet status")]
    GetWalletStatus,
    #[display("get transactions")]
    GetTransactions,
    #[display("get swap offers")]
    GetSwapOffers,
    #[display("cancel transaction")]
    CancelTx(TxId),
    #[display("delete transaction")]
    DeleteTx(TxId),
}

/// Runs a [`WalletEngine`] on its own thread and exposes it as
/// [`WalletAsync`]. The thread stops once the worker is dropped.
pub struct WalletWorker {
    worker_thread: JoinHandle<()>,
    tx: Mutex<mpsc::Sender<Cmd>>,
}

impl WalletWorker {
    pub fn with(mut engine: impl WalletEngine, sender: EventSender) -> Result<Self, io::Error> {
        let (tx, rx) = mpsc::channel::<Cmd>();
        let worker_thread = thread::Builder::new()
            .name(s!("wallet"))
            .spawn(move || {
                while let Ok(cmd) = rx.recv() {
                    let name = cmd.to_string();
                    let res = match cmd {
                        Cmd::SetNodeAddress(addr) => engine.set_node_address(&addr, &sender),
                        Cmd::EmergencyReset => engine.emergency_reset(&sender),
                        Cmd::GetWalletStatus => engine.wallet_status(&sender),
                        Cmd::GetTransactions => engine.transactions(&sender),
                        Cmd::GetSwapOffers => engine.swap_offers(&sender),
                        Cmd::CancelTx(id) => engine.cancel_tx(id, &sender),
                        Cmd::DeleteTx(id) => engine.delete_tx(id, &sender),
                    };
                    if let Err(err) = res {
                        error!("wallet command `{}` failed: {}", name, err);
                        if sender.send(WalletEvent::Error(format!("{}: {}", name, err))).is_err() {
                            break;
                        }
                    }
                }
                debug!("wallet worker thread is stopped");
            })?;

        Ok(WalletWorker {
            worker_thread,
            tx: Mutex::new(tx),
        })
    }

    /// Stops accepting commands and waits for the queued ones to complete.
    pub fn join(self) -> thread::Result<()> {
        drop(self.tx);
        self.worker_thread.join()
    }

    fn cmd(&self, cmd: Cmd) {
        let tx = match self.tx.lock() {
            Ok(tx) => tx,
            Err(poisoned) => poisoned.into_inner(),
        };
        if tx.send(cmd).is_err() {
            warn!("wallet worker thread is dead, command ignored");
        }
    }
}

impl WalletAsync for WalletWorker {
    fn set_node_address(&self, addr: &str) { self.cmd(Cmd::SetNodeAddress(addr.to_owned())) }

    fn emergency_reset(&self) { self.cmd(Cmd::EmergencyReset) }

    fn get_wallet_status(&self) { self.cmd(Cmd::GetWalletStatus) }

    fn get_transactions(&self) { self.cmd(Cmd::GetTransactions) }

    fn get_swap_offers(&self) { self.cmd(Cmd::GetSwapOffers) }

    fn cancel_tx(&self, tx_id: TxId) { self.cmd(Cmd::CancelTx(tx_id)) }

    fn delete_tx(&self, tx_id: TxId) { self.cmd(Cmd::DeleteTx(tx_id)) }
}
