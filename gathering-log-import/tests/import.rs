use std::fs;
use std::path::PathBuf;

use gathering_log_core::*;
use gathering_log_import::*;
use tempfile::TempDir;

const MINER_CSV: &str = "\
Done,Item,Region,Area,Location,Time
1-15,,,,,
FALSE,Copper Ore,La Noscea,Lower La Noscea,Bronze Lake,
FALSE,Tin Ore,La Noscea,Lower La Noscea,Moraby Bay,
15-20,,,,,
FALSE,Cloud Mica,Coerthas,Central Highlands,Whitebrim,1AM/1PM
FALSE,Item,Region,Area,Location,Time
";

const BOTANIST_CSV: &str = "\
Done,Item,Region,Area,Location,Time
FALSE,Latex,The Black Shroud,Central Shroud,Bentbranch
";

fn write_sources(tmp: &TempDir) -> Vec<(Profession, PathBuf)> {
    let miner = tmp.path().join("miner.csv");
    let botanist = tmp.path().join("botanist.csv");
    fs::write(&miner, MINER_CSV).unwrap();
    fs::write(&botanist, BOTANIST_CSV).unwrap();
    vec![(Profession::Miner, miner), (Profession::Botanist, botanist)]
}

#[test]
fn import_writes_both_stores() {
    let tmp = TempDir::new().unwrap();
    let sources = write_sources(&tmp);
    let items_path = tmp.path().join("items.json");
    let locales_path = tmp.path().join("locales.json");

    let report = import_sources(&sources, &items_path, &locales_path).unwrap();
    assert_eq!(report.records, 4);
    assert_eq!(report.sources[0].records, Some(3));
    assert_eq!(report.sources[1].records, Some(1));

    let items = load_items(&items_path).unwrap();
    let ids: Vec<&str> = items.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["copper_ore", "tin_ore", "cloud_mica", "latex"]);
    assert_eq!(items[2].level_range, "15-20");
    assert_eq!(items[2].time_window.as_deref(), Some("1AM/1PM"));
    assert_eq!(items[3].profession, Profession::Botanist);
    assert_eq!(items[3].level_range, DEFAULT_LEVEL_RANGE);

    let locales = load_locales(&locales_path).unwrap();
    for language in DEFAULT_LANGUAGES {
        assert_eq!(locales.get(language, Namespace::Item, "latex"), Some("Latex"));
        assert_eq!(
            locales.get(language, Namespace::Area, "lower_la_noscea"),
            Some("Lower La Noscea")
        );
    }
    assert!(locales.get("en", Namespace::Ui, "title").is_some());
}

#[test]
fn reimport_keeps_enrichment_and_translations() {
    let tmp = TempDir::new().unwrap();
    let sources = write_sources(&tmp);
    let items_path = tmp.path().join("items.json");
    let locales_path = tmp.path().join("locales.json");
    import_sources(&sources, &items_path, &locales_path).unwrap();

    let mut items = load_items(&items_path).unwrap();
    items[0].icon = Some("https://cafemaker.wakingsands.com/i/021000/021203.png".to_string());
    items[3].locations = Some(vec!["黑衣森林中部林区".to_string()]);
    save_items(&items_path, &items).unwrap();

    let mut locales = load_locales(&locales_path).unwrap();
    locales.set("ja", Namespace::Item, "copper_ore", "銅鉱");
    locales.set("zh-CN", Namespace::Item, "copper_ore", "铜矿");
    save_locales(&locales_path, &locales).unwrap();

    let report = import_sources(&sources, &items_path, &locales_path).unwrap();
    assert_eq!(report.enrichment_inherited, 2);

    let items = load_items(&items_path).unwrap();
    assert!(items[0].has_icon());
    assert_eq!(items[3].locations.as_ref().map(Vec::len), Some(1));

    let locales = load_locales(&locales_path).unwrap();
    assert_eq!(locales.get("ja", Namespace::Item, "copper_ore"), Some("銅鉱"));
    // languages added after the first import are seeded too
    assert_eq!(locales.get("zh-CN", Namespace::Item, "copper_ore"), Some("铜矿"));
    assert_eq!(locales.get("zh-CN", Namespace::Item, "tin_ore"), Some("Tin Ore"));
}

#[test]
fn missing_source_does_not_stop_the_others() {
    let tmp = TempDir::new().unwrap();
    let mut sources = write_sources(&tmp);
    sources[0].1 = tmp.path().join("does-not-exist.csv");
    let items_path = tmp.path().join("items.json");
    let locales_path = tmp.path().join("locales.json");

    let report = import_sources(&sources, &items_path, &locales_path).unwrap();
    assert_eq!(report.sources[0].records, None);
    assert_eq!(report.records, 1);
    assert_eq!(load_items(&items_path).unwrap()[0].id, "latex");
}

#[test]
fn unreadable_store_aborts_import() {
    let tmp = TempDir::new().unwrap();
    let sources = write_sources(&tmp);
    let items_path = tmp.path().join("items.json");
    fs::write(&items_path, "not json").unwrap();

    let result = import_sources(&sources, &items_path, &tmp.path().join("locales.json"));
    assert!(matches!(result, Err(ImportError::Store(StoreError::Json { .. }))));
}

#[test]
fn import_into_empty_locale_file_seeds_default_languages() {
    let tmp = TempDir::new().unwrap();
    let sources = write_sources(&tmp);
    let items_path = tmp.path().join("items.json");
    let locales_path = tmp.path().join("locales.json");
    fs::write(&locales_path, "{}").unwrap();

    import_sources(&sources, &items_path, &locales_path).unwrap();

    let locales = load_locales(&locales_path).unwrap();
    let languages: Vec<&str> = locales.languages().collect();
    assert_eq!(languages, vec!["en", "ja", "zh-TW"]);
    for language in DEFAULT_LANGUAGES {
        assert_eq!(locales.get(language, Namespace::Item, "copper_ore"), Some("Copper Ore"));
        assert_eq!(locales.get(language, Namespace::Location, "bentbranch"), Some("Bentbranch"));
        assert!(locales.get(language, Namespace::Ui, "title").is_some());
    }
}

#[test]
fn import_adds_missing_language_to_existing_store() {
    let tmp = TempDir::new().unwrap();
    let sources = write_sources(&tmp);
    let items_path = tmp.path().join("items.json");
    let locales_path = tmp.path().join("locales.json");

    let mut partial = LocaleStore::new();
    partial.set("en", Namespace::Item, "copper_ore", "Copper Ore");
    partial.set("zh-TW", Namespace::Item, "copper_ore", "銅礦");
    save_locales(&locales_path, &partial).unwrap();

    import_sources(&sources, &items_path, &locales_path).unwrap();

    let locales = load_locales(&locales_path).unwrap();
    assert_eq!(locales.get("ja", Namespace::Region, "la_noscea"), Some("La Noscea"));
    assert_eq!(locales.get("ja", Namespace::Area, "central_shroud"), Some("Central Shroud"));
    assert_eq!(locales.get("zh-TW", Namespace::Item, "copper_ore"), Some("銅礦"));
}
