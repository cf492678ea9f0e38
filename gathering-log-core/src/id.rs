//! Identifier derivation for items and places.
//!
//! Every key in the items store and the locale store goes through
//! [`derive_id`], so two records naming the same region or item always agree
//! on the key spelling.

/// Turn free text into a stable key.
///
/// The text is lowercased, every character outside `[a-z0-9]` becomes `_`,
/// and leading/trailing `_` are stripped. Runs of `_` inside the key are kept
/// as-is. Empty (or all-punctuation) input yields an empty key.
///
/// ```
/// use gathering_log_core::derive_id;
///
/// assert_eq!(derive_id("Copper Ore"), "copper_ore");
/// assert_eq!(derive_id(" Lower La Noscea "), "lower_la_noscea");
/// assert_eq!(derive_id("Raw Zircon (Grade 2)"), "raw_zircon__grade_2");
/// ```
pub fn derive_id(text: &str) -> String {
    let mapped: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '_'
            }
        })
        .collect();

    mapped.trim_matches('_').to_string()
}

#[cfg(test)]
#[path = "tests/id_tests.rs"]
mod tests;
