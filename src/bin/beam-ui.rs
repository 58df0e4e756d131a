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

#[macro_use]
extern crate clap;
#[macro_use]
extern crate amplify;
#[macro_use]
extern crate log;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use beamui::model::{
    i18n, settings, AssetInfo, AssetsManager, ChangeAction, Currency, ExchangeRate,
    ExchangeRatesManager, SettingsStore, Translations, TxDescription, TxId, WalletStatus,
};
use beamui::view_model::{AssetsList, RoleModel, SettingsViewModel, TxObjectList};
use beamui::worker::WalletAsync;
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use serde_crate::Deserialize;

/// Command-line arguments
#[derive(Parser)]
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[clap(
    author,
    version,
    name = "beam-ui",
    about = "Command-line tool rendering Beam wallet view models"
)]
pub struct Args {
    /// Settings file
    #[clap(short, long, global = true, default_value = "./beam-ui.yaml")]
    pub settings: PathBuf,

    /// YAML file with translation overrides
    #[clap(short, long, global = true)]
    pub translations: Option<PathBuf>,

    /// Increase verbosity level; can be repeated
    #[clap(short, long, global = true, parse(from_occurrences))]
    pub verbose: u8,

    /// Command to execute
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Command {
    /// Wallet settings
    Settings {
        #[clap(subcommand)]
        command: SettingsCommand,
    },

    /// Render a transaction list from a YAML file with transactions
    Txs {
        /// YAML list of transactions
        file: PathBuf,

        /// Print rows as JSON
        #[clap(long)]
        json: bool,
    },

    /// Render the assets list from a YAML wallet snapshot
    Assets {
        /// YAML snapshot with status, transactions, assets and rates
        file: PathBuf,

        /// Print rows as JSON
        #[clap(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum SettingsCommand {
    /// Print current settings
    Show,

    /// Change the address of the node the wallet connects to
    SetNode { address: String },

    /// Change the currency exchange rates are shown in
    SetRateUnit { currency: Currency },
}

/// Wallet snapshot read by the `assets` command.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(crate = "serde_crate", default)]
pub struct Snapshot {
    pub status: WalletStatus,
    pub transactions: Vec<TxDescription>,
    pub assets: Vec<AssetInfo>,
    pub rates: Vec<ExchangeRate>,
}

#[derive(Debug, Display, Error, From)]
#[display(inner)]
pub enum Error {
    #[from]
    Settings(settings::Error),

    #[from]
    Translations(i18n::Error),

    #[from]
    File(io::Error),

    #[from]
    Yaml(serde_yaml::Error),

    #[from]
    Json(serde_json::Error),

    Logger(String),
}

/// Command-line runs have no engine attached: requests are only logged.
struct Offline;

impl WalletAsync for Offline {
    fn set_node_address(&self, addr: &str) { debug!("offline: set node address {}", addr) }
    fn emergency_reset(&self) { debug!("offline: emergency reset") }
    fn get_wallet_status(&self) { debug!("offline: get wallet status") }
    fn get_transactions(&self) { debug!("offline: get transactions") }
    fn get_swap_offers(&self) { debug!("offline: get swap offers") }
    fn cancel_tx(&self, tx_id: TxId) { debug!("offline: cancel {}", tx_id) }
    fn delete_tx(&self, tx_id: TxId) { debug!("offline: delete {}", tx_id) }
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn setup_logger(&self) -> Result<(), Error> {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(
                "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
            )))
            .build();

        let config = LogConfig::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(self.log_level()))
            .map_err(|err| Error::Logger(format!("invalid logger configuration: {}", err)))?;

        log4rs::init_config(config)
            .map_err(|err| Error::Logger(format!("unable to set up logging: {}", err)))?;
        Ok(())
    }

    fn translations(&self) -> Result<Translations, Error> {
        Ok(match &self.translations {
            Some(path) => Translations::read_file(path)?,
            None => Translations::english(),
        })
    }

    pub fn exec(self) -> Result<(), Error> {
        let mut settings = SettingsViewModel::with(SettingsStore::open(&self.settings)?);
        settings.init_model(Arc::new(Offline));

        match &self.command {
            Command::Settings {
                command: SettingsCommand::Show,
            } => {
                println!("{}: {}", "Settings file".bright_white(), self.settings.display());
                println!("{}: {}", "Version".bright_white(), settings.version());
                println!("{}: {}", "Node address".bright_white(), settings.node_address());
                println!("{}: {}", "Rate unit".bright_white(), settings.rate_unit());
                println!(
                    "{}: {}",
                    "Swap beta warning".bright_white(),
                    settings.show_swap_beta_warning()
                );
            }
            Command::Settings {
                command: SettingsCommand::SetNode { address },
            } => {
                settings.apply_changes(address)?;
                println!("Node address is {}", settings.node_address());
            }
            Command::Settings {
                command: SettingsCommand::SetRateUnit { currency },
            } => {
                settings.set_rate_unit(*currency)?;
                println!("Rate unit is {}", settings.rate_unit());
            }
            Command::Txs { file, json } => {
                let txs: Vec<TxDescription> = serde_yaml::from_reader(fs::File::open(file)?)?;
                let mut list =
                    TxObjectList::with(Rc::new(AssetsManager::new()), Rc::new(self.translations()?));
                list.on_transactions_changed(ChangeAction::Reset, txs);
                print_rows(&list, *json)?;
            }
            Command::Assets { file, json } => {
                let snapshot: Snapshot = serde_yaml::from_reader(fs::File::open(file)?)?;
                let assets = Rc::new(AssetsManager::new());
                for info in snapshot.assets {
                    assets.on_asset_info(info);
                }
                let rates = Rc::new(ExchangeRatesManager::default());
                settings.init_rates(rates.clone());
                rates.on_rates(&snapshot.rates);

                let mut list = AssetsList::with(Arc::new(Offline), assets, rates);
                list.on_wallet_status(snapshot.status);
                list.on_transactions_changed(ChangeAction::Reset, snapshot.transactions);
                print_rows(&list, *json)?;
            }
        }
        Ok(())
    }
}

fn print_rows<M: RoleModel>(model: &M, json: bool) -> Result<(), Error> {
    if json {
        let rows = (0..model.row_count())
            .filter_map(|row| model.row_json(row))
            .collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in 0..model.row_count() {
        println!("{}", format!("#{}", row).bright_yellow());
        for role in M::roles() {
            if let Some(value) = model.data(row, *role) {
                println!("  {:>30}: {}", M::role_name(*role).bright_white(), value);
            }
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = args.setup_logger() {
        eprintln!("{}: {}\n", "Warning".yellow(), err);
    }
    if let Err(err) = args.exec() {
        eprintln!("{}: {}\n", "Error".bright_red(), err);
        std::process::exit(1);
    }
}
