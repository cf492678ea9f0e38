//! Wire types for the Garland Tools and CafeMaker responses.
//!
//! Only the fields the pipeline reads are modeled; everything else in the
//! upstream documents is ignored.

use serde::Deserialize;

use crate::lookup::{ItemDetail, NodePartial, PlaceName, SearchHit};

/// Ids show up both as numbers and as numeric strings depending on the endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlexibleId {
    Number(u64),
    Text(String),
}

impl FlexibleId {
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Number(n) => u32::try_from(*n).ok(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One entry of the Garland `search.php` response array.
#[derive(Debug, Deserialize)]
pub struct GarlandSearchResult {
    pub id: FlexibleId,
    #[serde(default)]
    pub obj: Option<GarlandSearchObj>,
}

#[derive(Debug, Deserialize)]
pub struct GarlandSearchObj {
    #[serde(default)]
    pub n: Option<String>,
}

impl GarlandSearchResult {
    /// Hits without a numeric id cannot be looked up and are dropped.
    pub fn into_hit(self) -> Option<SearchHit> {
        let external_id = self.id.as_u32()?;
        let display_name = self.obj.and_then(|o| o.n).unwrap_or_default();
        Some(SearchHit {
            external_id,
            display_name,
        })
    }
}

/// Garland item document (`db/doc/item/en/3/<id>.json`).
#[derive(Debug, Deserialize)]
pub struct GarlandItemDoc {
    #[serde(default)]
    pub partials: Vec<GarlandPartial>,
}

#[derive(Debug, Deserialize)]
pub struct GarlandPartial {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub obj: Option<GarlandPartialObj>,
}

#[derive(Debug, Deserialize)]
pub struct GarlandPartialObj {
    /// Zone id of the node.
    #[serde(default)]
    pub z: Option<FlexibleId>,
}

impl From<GarlandPartial> for NodePartial {
    fn from(p: GarlandPartial) -> Self {
        let zone_id = p.obj.and_then(|o| o.z).and_then(|z| z.as_u32()).filter(|&z| z != 0);
        NodePartial {
            kind: p.kind,
            zone_id,
        }
    }
}

/// CafeMaker `item/<id>` response.
#[derive(Debug, Deserialize)]
pub struct CafeMakerItem {
    #[serde(rename = "Icon", default)]
    pub icon: Option<String>,
    #[serde(rename = "Name_chs", default)]
    pub name_chs: Option<String>,
    #[serde(rename = "Name_ja", default)]
    pub name_ja: Option<String>,
}

impl From<CafeMakerItem> for ItemDetail {
    fn from(item: CafeMakerItem) -> Self {
        ItemDetail {
            icon: non_empty(item.icon),
            secondary_name: non_empty(item.name_chs),
            tertiary_name: non_empty(item.name_ja),
        }
    }
}

/// CafeMaker `PlaceName/<id>` response.
#[derive(Debug, Deserialize)]
pub struct CafeMakerPlaceName {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Name_chs", default)]
    pub name_chs: Option<String>,
}

impl From<CafeMakerPlaceName> for PlaceName {
    fn from(place: CafeMakerPlaceName) -> Self {
        PlaceName {
            name: non_empty(place.name),
            secondary_name: non_empty(place.name_chs),
        }
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_results_accept_string_and_numeric_ids() {
        let json = r#"[
            {"type": "item", "id": "5106", "obj": {"i": 5106, "n": "Copper Ore", "l": 1}},
            {"type": "item", "id": 12534, "obj": {"n": "Copper Ore Deposit"}},
            {"type": "item", "id": "not-a-number", "obj": {"n": "Broken"}}
        ]"#;
        let results: Vec<GarlandSearchResult> = serde_json::from_str(json).unwrap();
        let hits: Vec<SearchHit> = results.into_iter().filter_map(|r| r.into_hit()).collect();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].external_id, 5106);
        assert_eq!(hits[0].display_name, "Copper Ore");
        assert_eq!(hits[1].external_id, 12534);
    }

    #[test]
    fn item_doc_partials_map_zone_ids() {
        let json = r#"{
            "item": {"id": 5106},
            "partials": [
                {"type": "node", "id": "152", "obj": {"i": 152, "n": "Bronze Lake", "z": 54}},
                {"type": "node", "id": "153", "obj": {"i": 153, "z": "55"}},
                {"type": "npc", "id": "1000", "obj": {"n": "Merchant"}},
                {"type": "node", "id": "154", "obj": {"i": 154}}
            ]
        }"#;
        let doc: GarlandItemDoc = serde_json::from_str(json).unwrap();
        let partials: Vec<NodePartial> = doc.partials.into_iter().map(NodePartial::from).collect();
        assert_eq!(partials[0].zone_id, Some(54));
        assert_eq!(partials[1].zone_id, Some(55));
        assert_eq!(partials[2].kind, "npc");
        assert_eq!(partials[3].zone_id, None);
    }

    #[test]
    fn item_doc_without_partials_is_empty() {
        let doc: GarlandItemDoc = serde_json::from_str(r#"{"item": {"id": 1}}"#).unwrap();
        assert!(doc.partials.is_empty());
    }

    #[test]
    fn cafemaker_item_maps_to_detail() {
        let json = r#"{"ID": 5106, "Icon": "/i/021000/021203.png", "Name": "Copper Ore",
                       "Name_chs": "铜矿", "Name_ja": "銅鉱", "Name_en": "Copper Ore"}"#;
        let detail: ItemDetail = serde_json::from_str::<CafeMakerItem>(json).unwrap().into();
        assert_eq!(detail.icon.as_deref(), Some("/i/021000/021203.png"));
        assert_eq!(detail.secondary_name.as_deref(), Some("铜矿"));
        assert_eq!(detail.tertiary_name.as_deref(), Some("銅鉱"));
    }

    #[test]
    fn blank_fields_are_treated_as_missing() {
        let json = r#"{"Icon": "", "Name_chs": "  ", "Name_ja": null}"#;
        let detail: ItemDetail = serde_json::from_str::<CafeMakerItem>(json).unwrap().into();
        assert_eq!(detail, ItemDetail::default());
    }

    #[test]
    fn place_name_maps_both_languages() {
        let json = r#"{"ID": 54, "Name": "Lower La Noscea", "Name_chs": "拉诺西亚低地"}"#;
        let place: PlaceName = serde_json::from_str::<CafeMakerPlaceName>(json).unwrap().into();
        assert_eq!(place.preferred(), Some("拉诺西亚低地"));
        assert_eq!(place.name.as_deref(), Some("Lower La Noscea"));
    }
}
