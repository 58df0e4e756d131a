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

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{fs, io};

pub const NODE_ADDRESS_KEY: &str = "node/address";
pub const RATE_UNIT_KEY: &str = "rates/currency";
pub const SWAP_BETA_WARNING_KEY: &str = "swap/beta_warning";

#[derive(Debug, Display, Error, From)]
#[display(inner)]
pub enum Error {
    #[from]
    File(io::Error),

    #[from]
    Yaml(serde_yaml::Error),

    #[display("settings path {0} is a directory")]
    NotAFile(String),
}

/// File-backed key/value store with slash-separated keys (`node/address`).
///
/// Every accepted [`SettingsStore::set`] rewrites the file, so the file
/// always reflects the last change. A missing file reads as an empty store.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl SettingsStore {
    pub fn open(path: impl AsRef<Path>) -> Result<SettingsStore, Error> {
        let path = path.as_ref().to_path_buf();
        if path.is_dir() {
            return Err(Error::NotAFile(path.display().to_string()));
        }
        let values = match fs::read_to_string(&path) {
            Ok(data) if data.trim().is_empty() => empty!(),
            Ok(data) => serde_yaml::from_str(&data)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => empty!(),
            Err(err) => return Err(err.into()),
        };
        Ok(SettingsStore { path, values })
    }

    pub fn path(&self) -> &Path { &self.path }

    pub fn value(&self, key: &str) -> Option<&str> { self.values.get(key).map(String::as_str) }

    pub fn bool_value(&self, key: &str) -> Option<bool> {
        self.value(key).and_then(|val| val.parse().ok())
    }

    /// Stores the value and writes the file. The in-memory value is left
    /// untouched when the write fails.
    pub fn set(&mut self, key: &str, value: impl ToString) -> Result<(), Error> {
        let mut values = self.values.clone();
        values.insert(key.to_owned(), value.to_string());
        self.write(&values)?;
        self.values = values;
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Result<bool, Error> {
        if !self.values.contains_key(key) {
            return Ok(false);
        }
        let mut values = self.values.clone();
        values.remove(key);
        self.write(&values)?;
        self.values = values;
        Ok(true)
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<(), Error> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let file = fs::File::create(&self.path)?;
        serde_yaml::to_writer(file, values)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::open(dir.path().join("none.yaml")).unwrap();
        assert_eq!(store.value(NODE_ADDRESS_KEY), None);
    }

    #[test]
    fn set_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.yaml");
        let mut store = SettingsStore::open(&path).unwrap();
        store.set(NODE_ADDRESS_KEY, "127.0.0.1:10005").unwrap();
        store.set(SWAP_BETA_WARNING_KEY, false).unwrap();

        let reopened = SettingsStore::open(&path).unwrap();
        assert_eq!(reopened.value(NODE_ADDRESS_KEY), Some("127.0.0.1:10005"));
        assert_eq!(reopened.bool_value(SWAP_BETA_WARNING_KEY), Some(false));
        assert_eq!(reopened, store);
    }

    #[test]
    fn remove_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        let mut store = SettingsStore::open(&path).unwrap();
        assert!(!store.remove(RATE_UNIT_KEY).unwrap());
        store.set(RATE_UNIT_KEY, "usd").unwrap();
        assert!(store.remove(RATE_UNIT_KEY).unwrap());
        assert_eq!(SettingsStore::open(&path).unwrap().value(RATE_UNIT_KEY), None);
    }

    #[test]
    fn directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            SettingsStore::open(dir.path()),
            Err(Error::NotAFile(_))
        ));
    }
}
