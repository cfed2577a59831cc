//! Style property passthrough.
//!
//! Caller-supplied style maps are merged verbatim into emitted markup
//! attributes. Keys use Rust-friendly `snake_case` and are rewritten
//! to the target markup's `kebab-case` (`text_anchor` →
//! `text-anchor`); later-specified properties override earlier
//! defaults. Values are not validated.

use indexmap::IndexMap;

/// Ordered string-to-string property map.
pub type StyleMap = IndexMap<String, String>;

/// Build a style map from key/value pairs.
pub fn style<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> StyleMap
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Merge a style map into a node's attribute map, rewriting key
/// underscores to hyphens. Existing attributes with the same rewritten
/// key are overridden.
pub fn merge_style(attributes: &mut IndexMap<String, String>, style: &StyleMap) {
    for (key, value) in style {
        attributes.insert(key.replace('_', "-"), value.clone());
    }
}
