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
use std::sync::mpsc;

use crate::model::{ChangeAction, TxId};

/// Fans a signal out to every connected receiver. Receivers which went away
/// are skipped silently.
#[derive(Debug)]
pub struct Emitter<S: Clone> {
    senders: Vec<mpsc::Sender<S>>,
}

impl<S: Clone> Default for Emitter<S> {
    fn default() -> Self { Emitter { senders: empty!() } }
}

impl<S: Clone> Emitter<S> {
    pub fn connect(&mut self, sender: mpsc::Sender<S>) { self.senders.push(sender); }

    pub fn emit(&self, signal: S) {
        for sender in &self.senders {
            let _ = sender.send(signal.clone());
        }
    }
}

/// What rows of a list a view has to re-read. Mirrors the row notifications
/// of GTK and Qt list models.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum RowsChanged {
    Reset,
    Inserted { first: usize, count: usize },
    Removed { first: usize, count: usize },
    Touched(usize),
}

/// Display value of a single role of a row.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RoleValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Text(String),
    TxId(TxId),
}

impl Display for RoleValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RoleValue::Bool(val) => Display::fmt(val, f),
            RoleValue::Int(val) => Display::fmt(val, f),
            RoleValue::UInt(val) => Display::fmt(val, f),
            RoleValue::Text(val) => f.write_str(val),
            RoleValue::TxId(val) => Display::fmt(val, f),
        }
    }
}

impl From<bool> for RoleValue {
    fn from(val: bool) -> Self { RoleValue::Bool(val) }
}

impl From<String> for RoleValue {
    fn from(val: String) -> Self { RoleValue::Text(val) }
}

impl From<&str> for RoleValue {
    fn from(val: &str) -> Self { RoleValue::Text(val.to_owned()) }
}

impl From<RoleValue> for serde_json::Value {
    fn from(val: RoleValue) -> Self {
        match val {
            RoleValue::Bool(val) => val.into(),
            RoleValue::Int(val) => val.into(),
            RoleValue::UInt(val) => val.into(),
            RoleValue::Text(val) => val.into(),
            RoleValue::TxId(val) => val.to_string().into(),
        }
    }
}

/// Role-based display contract every list adapter exposes to the UI.
pub trait RoleModel {
    type Role: Copy + 'static;

    fn roles() -> &'static [Self::Role];

    fn role_name(role: Self::Role) -> &'static str;

    fn row_count(&self) -> usize;

    /// `None` for rows out of range.
    fn data(&self, row: usize, role: Self::Role) -> Option<RoleValue>;

    /// Whole row as a JSON object keyed by role names.
    fn row_json(&self, row: usize) -> Option<serde_json::Value> {
        if row >= self.row_count() {
            return None;
        }
        let map = Self::roles()
            .iter()
            .filter_map(|role| {
                self.data(row, *role)
                    .map(|val| (Self::role_name(*role).to_owned(), val.into()))
            })
            .collect::<serde_json::Map<_, _>>();
        Some(serde_json::Value::Object(map))
    }
}

/// A list row which can be matched against change-feed records.
pub trait Row {
    type Key: PartialEq;

    fn key(&self) -> Self::Key;
}

/// Ordered row store keeping itself in sync with a change feed.
#[derive(Debug)]
pub struct ListModel<T: Row> {
    items: Vec<T>,
    emitter: Emitter<RowsChanged>,
}

impl<T: Row> Default for ListModel<T> {
    fn default() -> Self {
        ListModel {
            items: empty!(),
            emitter: default!(),
        }
    }
}

impl<T: Row> ListModel<T> {
    pub fn new() -> Self { Self::default() }

    pub fn connect(&mut self, sender: mpsc::Sender<RowsChanged>) { self.emitter.connect(sender) }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn get(&self, row: usize) -> Option<&T> { self.items.get(row) }

    pub fn iter(&self) -> std::slice::Iter<T> { self.items.iter() }

    pub fn position(&self, key: &T::Key) -> Option<usize> {
        self.items.iter().position(|item| &item.key() == key)
    }

    pub fn find(&self, key: &T::Key) -> Option<&T> {
        self.position(key).and_then(|row| self.items.get(row))
    }

    pub fn reset(&mut self, items: Vec<T>) {
        self.items = items;
        self.emitter.emit(RowsChanged::Reset);
    }

    pub fn append(&mut self, items: Vec<T>) {
        if items.is_empty() {
            return;
        }
        let first = self.items.len();
        let count = items.len();
        self.items.extend(items);
        self.emitter.emit(RowsChanged::Inserted { first, count });
    }

    pub fn insert(&mut self, row: usize, item: T) {
        let row = row.min(self.items.len());
        self.items.insert(row, item);
        self.emitter.emit(RowsChanged::Inserted { first: row, count: 1 });
    }

    /// Removes every row matching the key. Returns the number of removed
    /// rows.
    pub fn remove(&mut self, key: &T::Key) -> usize {
        let mut removed = 0usize;
        while let Some(row) = self.position(key) {
            self.items.remove(row);
            self.emitter.emit(RowsChanged::Removed { first: row, count: 1 });
            removed += 1;
        }
        removed
    }

    /// Replaces every row with the item key. Unknown keys are ignored.
    pub fn update(&mut self, item: T) -> usize
    where
        T: Clone,
    {
        let key = item.key();
        let mut updated = 0usize;
        for row in 0..self.items.len() {
            if self.items[row].key() == key {
                self.items[row] = item.clone();
                self.emitter.emit(RowsChanged::Touched(row));
                updated += 1;
            }
        }
        updated
    }

    pub fn apply(&mut self, action: ChangeAction, items: Vec<T>)
    where
        T: Clone,
    {
        match action {
            ChangeAction::Reset => self.reset(items),
            ChangeAction::Added => self.append(items),
            ChangeAction::Removed => {
                for item in items {
                    self.remove(&item.key());
                }
            }
            ChangeAction::Updated => {
                for item in items {
                    self.update(item);
                }
            }
        }
    }

    pub fn touch(&self, row: usize) {
        if row < self.items.len() {
            self.emitter.emit(RowsChanged::Touched(row));
        }
    }

    /// Touches every row for which the predicate holds.
    pub fn touch_where(&self, pred: impl Fn(&T) -> bool) {
        for (row, item) in self.items.iter().enumerate() {
            if pred(item) {
                self.emitter.emit(RowsChanged::Touched(row));
            }
        }
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<T> { &mut self.items }
}
