//! CafeMaker (Chinese-region XIVAPI mirror): item details and place names.

use crate::client::{ApiClient, join_url};
use crate::error::ScrapeError;
use crate::lookup::{ItemDetail, ItemDetails, PlaceName, PlaceNames};
use crate::types::{CafeMakerItem, CafeMakerPlaceName};

#[derive(Debug, Clone)]
pub struct CafeMakerClient {
    api: ApiClient,
    base_url: String,
}

impl CafeMakerClient {
    pub fn new(api: ApiClient, base_url: impl Into<String>) -> Self {
        Self {
            api,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl ItemDetails for CafeMakerClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn item_detail(&self, external_id: u32) -> Result<ItemDetail, ScrapeError> {
        let url = join_url(&self.base_url, &format!("item/{external_id}"));
        let item: CafeMakerItem = self.api.get_json(&url, &[]).await?;
        Ok(item.into())
    }
}

impl PlaceNames for CafeMakerClient {
    async fn place_name(&self, zone_id: u32) -> Result<PlaceName, ScrapeError> {
        let url = join_url(&self.base_url, &format!("PlaceName/{zone_id}"));
        let place: CafeMakerPlaceName = self.api.get_json(&url, &[]).await?;
        Ok(place.into())
    }
}
