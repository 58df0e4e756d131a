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

use gtk::glib;
use gtk::prelude::*;

use crate::view_model::{RoleModel, RowsChanged};

/// Mirror of a [`RoleModel`] inside a [`gtk::ListStore`], one string column
/// per role in the order of [`RoleModel::roles`].
#[derive(Clone, Debug)]
pub struct RoleStore {
    store: gtk::ListStore,
}

impl RoleStore {
    pub fn with<M: RoleModel>(model: &M) -> RoleStore {
        let types = vec![glib::Type::STRING; M::roles().len()];
        let store = RoleStore {
            store: gtk::ListStore::new(&types),
        };
        store.rebuild(model);
        store
    }

    pub fn store(&self) -> &gtk::ListStore { &self.store }

    pub fn apply<M: RoleModel>(&self, model: &M, change: RowsChanged) {
        match change {
            RowsChanged::Reset => self.rebuild(model),
            RowsChanged::Inserted { first, count } => {
                for row in first..first + count {
                    let iter = self.store.insert(row as i32);
                    self.fill(model, row, &iter);
                }
            }
            RowsChanged::Removed { first, count } => {
                for _ in 0..count {
                    match self.store.iter_nth_child(None, first as i32) {
                        Some(iter) => {
                            self.store.remove(&iter);
                        }
                        None => break,
                    }
                }
            }
            RowsChanged::Touched(row) => {
                if let Some(iter) = self.store.iter_nth_child(None, row as i32) {
                    self.fill(model, row, &iter);
                }
            }
        }
    }

    fn rebuild<M: RoleModel>(&self, model: &M) {
        self.store.clear();
        for row in 0..model.row_count() {
            let iter = self.store.append();
            self.fill(model, row, &iter);
        }
    }

    fn fill<M: RoleModel>(&self, model: &M, row: usize, iter: &gtk::TreeIter) {
        for (col, role) in M::roles().iter().enumerate() {
            let text = model
                .data(row, *role)
                .map(|val| val.to_string())
                .unwrap_or_default();
            self.store.set_value(iter, col as u32, &text.to_value());
        }
    }
}
