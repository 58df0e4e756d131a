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

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{AssetId, AssetInfo};

const BEAM_ICON: &str = "qrc:/assets/icon-beam.svg";
const DEFAULT_UNIT: &str = "ASSET";

// Index 0 is reserved for BEAM.
const COLORS: [&str; 8] = [
    "#00f6d2", "#73ff7c", "#ffe75a", "#ff746b", "#d885ff", "#008eff", "#ff65b8", "#ff9a4d",
];
const SELECTION_COLORS: [&str; 8] = [
    "#00f6d2", "#3dc45f", "#d6c02f", "#d65149", "#a952d6", "#0066b8", "#d6438f", "#d6782f",
];

/// Metadata lookup for confidential assets. BEAM is always known; other
/// assets become known once the engine announces their info.
#[derive(Debug, Default)]
pub struct AssetsManager {
    infos: RefCell<BTreeMap<AssetId, AssetInfo>>,
}

impl AssetsManager {
    pub fn new() -> AssetsManager { AssetsManager::default() }

    fn palette_index(asset_id: AssetId) -> usize {
        if asset_id.is_beam() {
            0
        } else {
            1 + (asset_id.0 as usize - 1) % (COLORS.len() - 1)
        }
    }

    pub fn is_known(&self, asset_id: AssetId) -> bool {
        asset_id.is_beam() || self.infos.borrow().contains_key(&asset_id)
    }

    pub fn name(&self, asset_id: AssetId) -> String {
        if asset_id.is_beam() {
            return s!("BEAM");
        }
        self.infos
            .borrow()
            .get(&asset_id)
            .map(|info| info.name.clone())
            .unwrap_or_else(|| format!("Asset {}", asset_id))
    }

    pub fn unit_name(&self, asset_id: AssetId) -> String {
        if asset_id.is_beam() {
            return s!("BEAM");
        }
        self.infos
            .borrow()
            .get(&asset_id)
            .map(|info| info.unit_name.clone())
            .unwrap_or_else(|| DEFAULT_UNIT.to_owned())
    }

    pub fn icon(&self, asset_id: AssetId) -> String {
        match Self::palette_index(asset_id) {
            0 => BEAM_ICON.to_owned(),
            idx => format!("qrc:/assets/asset-{}.svg", idx),
        }
    }

    pub fn color(&self, asset_id: AssetId) -> String {
        COLORS[Self::palette_index(asset_id)].to_owned()
    }

    pub fn selection_color(&self, asset_id: AssetId) -> String {
        SELECTION_COLORS[Self::palette_index(asset_id)].to_owned()
    }

    /// Stores announced metadata. Returns whether anything displayable
    /// changed.
    pub fn on_asset_info(&self, info: AssetInfo) -> bool {
        let mut infos = self.infos.borrow_mut();
        if infos.get(&info.id) == Some(&info) {
            return false;
        }
        debug!("asset {} is now known as {} ({})", info.id, info.name, info.unit_name);
        infos.insert(info.id, info);
        true
    }
}
