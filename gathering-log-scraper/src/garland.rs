//! Garland Tools: item name search and gathering-node documents.

use crate::client::{ApiClient, join_url};
use crate::error::ScrapeError;
use crate::lookup::{NameSearch, NodePartial, SearchHit, ZoneData};
use crate::types::{GarlandItemDoc, GarlandSearchResult};

#[derive(Debug, Clone)]
pub struct GarlandClient {
    api: ApiClient,
    base_url: String,
}

impl GarlandClient {
    pub fn new(api: ApiClient, base_url: impl Into<String>) -> Self {
        Self {
            api,
            base_url: base_url.into(),
        }
    }
}

impl NameSearch for GarlandClient {
    async fn search(&self, text: &str) -> Result<Vec<SearchHit>, ScrapeError> {
        let url = join_url(&self.base_url, "api/search.php");
        let results: Vec<GarlandSearchResult> = self
            .api
            .get_json(&url, &[("text", text), ("type", "item")])
            .await?;
        Ok(results
            .into_iter()
            .filter_map(GarlandSearchResult::into_hit)
            .collect())
    }
}

impl ZoneData for GarlandClient {
    async fn node_partials(&self, external_id: u32) -> Result<Vec<NodePartial>, ScrapeError> {
        let url = join_url(
            &self.base_url,
            &format!("db/doc/item/en/3/{external_id}.json"),
        );
        let doc: GarlandItemDoc = self.api.get_json(&url, &[]).await?;
        Ok(doc.partials.into_iter().map(NodePartial::from).collect())
    }
}
