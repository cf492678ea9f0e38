//! Language-partitioned translation catalog.
//!
//! Every language carries the same five namespaces: hand-authored `ui` text
//! plus four data namespaces (`item`, `region`, `area`, `location`) keyed by
//! [`derive_id`](crate::derive_id) output. Writes go through two operations
//! only: [`LocaleStore::ensure`] never replaces an existing entry, and
//! [`LocaleStore::set`] always does.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Language whose item names are used for upstream lookups.
pub const CANONICAL_LANGUAGE: &str = "en";

/// Languages created by [`LocaleStore::with_default_languages`].
pub const DEFAULT_LANGUAGES: &[&str] = &["zh-TW", "en", "ja"];

/// Interface strings for the default languages, keyed by UI key.
const DEFAULT_UI: &[(&str, &[(&str, &str)])] = &[
    (
        "zh-TW",
        &[
            ("title", "FFXIV 採集指南"),
            ("miner", "⛏️ 採礦工"),
            ("botanist", "🪓 園藝師"),
            ("progress", "進度"),
            ("jump_to", "快速跳轉 (等級)"),
            ("loading", "載入資料中..."),
            ("time_any", "常駐"),
            ("done", "完成"),
        ],
    ),
    (
        "en",
        &[
            ("title", "FFXIV Gathering Log"),
            ("miner", "⛏️ Miner"),
            ("botanist", "🪓 Botanist"),
            ("progress", "Progress"),
            ("jump_to", "JUMP TO (LEVEL)"),
            ("loading", "Loading data..."),
            ("time_any", "Anytime"),
            ("done", "Done"),
        ],
    ),
    (
        "ja",
        &[
            ("title", "FFXIV 採集手帳"),
            ("miner", "⛏️ 採掘師"),
            ("botanist", "🪓 園芸師"),
            ("progress", "達成度"),
            ("jump_to", "レベルジャンプ"),
            ("loading", "読み込み中..."),
            ("time_any", "常時"),
            ("done", "完了"),
        ],
    ),
];

/// Category of translatable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Ui,
    Item,
    Region,
    Area,
    Location,
}

impl Namespace {
    /// Namespaces filled from data rather than written by hand.
    pub const DATA: [Namespace; 4] = [
        Namespace::Item,
        Namespace::Region,
        Namespace::Area,
        Namespace::Location,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::Item => "item",
            Self::Region => "region",
            Self::Area => "area",
            Self::Location => "location",
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All namespaces of a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePack {
    #[serde(default)]
    pub ui: BTreeMap<String, String>,
    #[serde(default)]
    pub item: BTreeMap<String, String>,
    #[serde(default)]
    pub region: BTreeMap<String, String>,
    #[serde(default)]
    pub area: BTreeMap<String, String>,
    #[serde(default)]
    pub location: BTreeMap<String, String>,
}

impl LanguagePack {
    pub fn entries(&self, namespace: Namespace) -> &BTreeMap<String, String> {
        match namespace {
            Namespace::Ui => &self.ui,
            Namespace::Item => &self.item,
            Namespace::Region => &self.region,
            Namespace::Area => &self.area,
            Namespace::Location => &self.location,
        }
    }

    fn entries_mut(&mut self, namespace: Namespace) -> &mut BTreeMap<String, String> {
        match namespace {
            Namespace::Ui => &mut self.ui,
            Namespace::Item => &mut self.item,
            Namespace::Region => &mut self.region,
            Namespace::Area => &mut self.area,
            Namespace::Location => &mut self.location,
        }
    }
}

/// Translation catalog: language tag → [`LanguagePack`].
///
/// Serialized transparently as `{ "<lang>": { "ui": {..}, "item": {..}, .. } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleStore {
    languages: BTreeMap<String, LanguagePack>,
}

impl LocaleStore {
    /// An empty store with no languages.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh store with the default languages and their interface strings.
    pub fn with_default_languages() -> Self {
        let mut store = Self::new();
        store.ensure_default_languages();
        store
    }

    /// Add any missing default language and any missing interface string.
    ///
    /// Existing entries are left alone. Returns the number of entries added.
    pub fn ensure_default_languages(&mut self) -> usize {
        let mut added = 0;
        for (language, strings) in DEFAULT_UI {
            self.add_language(language);
            for (key, text) in strings.iter() {
                if self.ensure(language, Namespace::Ui, key, text) {
                    added += 1;
                }
            }
        }
        added
    }

    /// Add a language with empty namespaces. Returns `false` if it already existed.
    pub fn add_language(&mut self, language: &str) -> bool {
        if self.languages.contains_key(language) {
            return false;
        }
        self.languages
            .insert(language.to_string(), LanguagePack::default());
        true
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Language tags in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn pack(&self, language: &str) -> Option<&LanguagePack> {
        self.languages.get(language)
    }

    /// Insert `text` under `key` unless an entry already exists.
    ///
    /// Unknown languages are created first. Empty keys are never stored.
    /// Returns `true` if a new entry was written.
    pub fn ensure(&mut self, language: &str, namespace: Namespace, key: &str, text: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        let entries = self.pack_mut(language).entries_mut(namespace);
        if entries.contains_key(key) {
            return false;
        }
        entries.insert(key.to_string(), text.to_string());
        true
    }

    /// Overwrite the entry under `key`.
    ///
    /// Unknown languages are created first. Empty keys are never stored.
    /// Returns `true` if the stored text changed.
    pub fn set(&mut self, language: &str, namespace: Namespace, key: &str, text: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        let entries = self.pack_mut(language).entries_mut(namespace);
        let previous = entries.insert(key.to_string(), text.to_string());
        previous.as_deref() != Some(text)
    }

    pub fn get(&self, language: &str, namespace: Namespace, key: &str) -> Option<&str> {
        self.languages
            .get(language)?
            .entries(namespace)
            .get(key)
            .map(String::as_str)
    }

    /// Number of entries in one namespace of one language.
    pub fn count(&self, language: &str, namespace: Namespace) -> usize {
        self.languages
            .get(language)
            .map_or(0, |pack| pack.entries(namespace).len())
    }

    /// Whether `language` has an item name for `id` that differs from the
    /// `canonical` language's name (i.e. is not an untranslated placeholder).
    pub fn is_translated(&self, language: &str, canonical: &str, id: &str) -> bool {
        match self.get(language, Namespace::Item, id) {
            Some(text) => self.get(canonical, Namespace::Item, id) != Some(text),
            None => false,
        }
    }

    fn pack_mut(&mut self, language: &str) -> &mut LanguagePack {
        self.languages.entry(language.to_string()).or_default()
    }
}

#[cfg(test)]
#[path = "tests/locale_tests.rs"]
mod tests;
