//! Data model shared by every gathering-log crate: normalized item records,
//! the language-partitioned locale store, identifier derivation, whole-file
//! JSON persistence, and application settings.

pub mod error;
pub mod id;
pub mod item;
pub mod locale;
pub mod profession;
pub mod settings;
pub mod store;

pub use error::StoreError;
pub use id::derive_id;
pub use item::ItemRecord;
pub use locale::{CANONICAL_LANGUAGE, DEFAULT_LANGUAGES, LanguagePack, LocaleStore, Namespace};
pub use profession::{Profession, ProfessionParseError};
pub use settings::{Settings, SettingsError, load_settings, load_settings_from, settings_path};
pub use store::{
    ITEMS_FILE, LOCALES_FILE, load_items, load_items_or_empty, load_locales,
    load_locales_or_default, save_items, save_locales,
};
