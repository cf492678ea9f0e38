pub mod cafemaker;
pub mod client;
pub mod error;
pub mod garland;
pub mod lookup;
pub mod types;

pub use cafemaker::CafeMakerClient;
pub use client::ApiClient;
pub use error::ScrapeError;
pub use garland::GarlandClient;
pub use lookup::{
    ItemDetail, ItemDetails, NameSearch, NodePartial, PlaceName, PlaceNames, SearchHit, ZoneData,
    pick_match, resolve_id,
};
