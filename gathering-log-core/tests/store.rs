use gathering_log_core::*;
use std::fs;
use tempfile::TempDir;

fn copper_ore() -> ItemRecord {
    ItemRecord {
        id: "copper_ore".to_string(),
        profession: Profession::Miner,
        level_range: "1-5".to_string(),
        time_window: None,
        region_key: "la_noscea".to_string(),
        area_key: "lower_la_noscea".to_string(),
        location_key: "bronze_lake".to_string(),
        icon: None,
        locations: None,
    }
}

#[test]
fn items_survive_save_and_load() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("items.json");

    let mut enriched = copper_ore();
    enriched.icon = Some("https://cafemaker.wakingsands.com/i/021000/021203.png".to_string());
    enriched.locations = Some(vec!["Lower La Noscea".to_string()]);
    let items = vec![copper_ore(), enriched];

    save_items(&path, &items).unwrap();
    let loaded = load_items(&path).unwrap();
    assert_eq!(loaded, items);
    assert!(!tmp.path().join("items.json.tmp").exists());
}

#[test]
fn locales_keep_non_ascii_text_verbatim() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("locales.json");

    let mut locales = LocaleStore::with_default_languages();
    locales.set("ja", Namespace::Item, "copper_ore", "銅鉱");
    save_locales(&path, &locales).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("銅鉱"));
    assert!(raw.contains("FFXIV 採集手帳"));
    assert_eq!(load_locales(&path).unwrap(), locales);
}

#[test]
fn missing_stores_are_reported_or_defaulted() {
    let tmp = TempDir::new().unwrap();
    let items = tmp.path().join("items.json");
    let locales = tmp.path().join("locales.json");

    assert!(matches!(load_items(&items), Err(StoreError::NotFound(_))));
    assert!(matches!(load_locales(&locales), Err(StoreError::NotFound(_))));
    assert!(load_items_or_empty(&items).unwrap().is_empty());
    assert_eq!(
        load_locales_or_default(&locales).unwrap(),
        LocaleStore::with_default_languages()
    );
}

#[test]
fn save_creates_parent_directories() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("out").join("data").join("items.json");
    save_items(&path, &[copper_ore()]).unwrap();
    assert_eq!(load_items(&path).unwrap().len(), 1);
}

#[test]
fn corrupt_store_is_a_json_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("items.json");
    fs::write(&path, "[{\"id\": ").unwrap();
    assert!(matches!(load_items(&path), Err(StoreError::Json { .. })));
}

#[test]
fn save_into_missing_directory_that_is_a_file_fails() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let path = blocker.join("items.json");
    assert!(matches!(save_items(&path, &[copper_ore()]), Err(StoreError::Io { .. })));
}
