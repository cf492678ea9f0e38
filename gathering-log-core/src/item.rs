use serde::{Deserialize, Serialize};

use crate::profession::Profession;

/// One normalized row of gathering data.
///
/// Field names on disk follow the items store layout (`job`, `level`,
/// `time`, `*_key`). `icon` and `locations` are filled in later by the
/// enrichment flows and are omitted from the file until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Key derived from the canonical item name.
    pub id: String,
    #[serde(rename = "job")]
    pub profession: Profession,
    /// Level range label (`"low-high"`) of the section the row appeared in.
    #[serde(rename = "level")]
    pub level_range: String,
    /// In-world time restriction; `None` means the node is always up.
    #[serde(rename = "time", default)]
    pub time_window: Option<String>,
    pub region_key: String,
    pub area_key: String,
    pub location_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
}

impl ItemRecord {
    pub fn has_icon(&self) -> bool {
        self.icon.as_deref().is_some_and(|i| !i.is_empty())
    }

    /// Copy enrichment output from an earlier version of the same record.
    ///
    /// Fields already set on `self` win.
    pub fn inherit_enrichment(&mut self, previous: &ItemRecord) {
        if self.icon.is_none() {
            self.icon = previous.icon.clone();
        }
        if self.locations.is_none() {
            self.locations = previous.locations.clone();
        }
    }
}
