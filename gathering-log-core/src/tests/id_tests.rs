use super::*;

fn is_well_formed(key: &str) -> bool {
    key.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !key.starts_with('_')
        && !key.ends_with('_')
}

#[test]
fn simple_names() {
    assert_eq!(derive_id("Copper Ore"), "copper_ore");
    assert_eq!(derive_id("La Noscea"), "la_noscea");
    assert_eq!(derive_id("Bronze Lake"), "bronze_lake");
}

#[test]
fn punctuation_and_whitespace_are_stripped_at_edges() {
    assert_eq!(derive_id("  Cobalt Ore!  "), "cobalt_ore");
    assert_eq!(derive_id("(Hidden)"), "hidden");
    assert_eq!(derive_id("___"), "");
}

#[test]
fn inner_runs_are_not_collapsed() {
    assert_eq!(derive_id("Tree - East"), "tree___east");
    assert_eq!(derive_id("Grade 3 Clay"), "grade_3_clay");
}

#[test]
fn non_ascii_letters_become_underscores() {
    let key = derive_id("Ala Mhigan Ruïns");
    assert_eq!(key, "ala_mhigan_ru_ns");
    assert_eq!(derive_id("黒衣森"), "");
}

#[test]
fn empty_input_gives_empty_key() {
    assert_eq!(derive_id(""), "");
    assert_eq!(derive_id("   "), "");
}

#[test]
fn derivation_is_deterministic_and_well_formed() {
    let inputs = [
        "Copper Ore",
        "  Mythril Sand ",
        "Cloud Mica (Unspoiled)",
        "Coerthas Central Highlands",
        "?? 12-34 !!",
        "ÉLÉZEN",
        "",
    ];
    for input in inputs {
        let first = derive_id(input);
        let second = derive_id(input);
        assert_eq!(first, second, "derivation changed for {input:?}");
        assert!(is_well_formed(&first), "malformed key {first:?} for {input:?}");
    }
}
