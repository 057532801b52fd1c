//! Attribute ordering.
//!
//! Attributes are written sorted by `(rank, name)`. The rank comes from
//! [`WriterOptions::attribute_order`](crate::WriterOptions); names without a
//! rank get [`UNRANKED`] and therefore follow every ranked name, in plain
//! string order among themselves.

use indexmap::IndexMap;

/// Rank given to attributes missing from the configured order.
pub const UNRANKED: usize = usize::MAX;

/// Turns an ordered list of attribute names into a rank map.
///
/// The Nth name gets rank N. A name listed twice keeps its last rank.
///
/// # Examples
///
/// ```rust
/// use etwriter::attribute_order;
///
/// let ranks = attribute_order(["name", "format", "version"]);
/// assert_eq!(ranks.get("name"), Some(&0));
/// assert_eq!(ranks.get("version"), Some(&2));
/// assert!(attribute_order(Vec::<String>::new()).is_empty());
/// ```
#[must_use]
pub fn attribute_order<I, S>(names: I) -> IndexMap<String, usize>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .enumerate()
        .map(|(rank, name)| (name.into(), rank))
        .collect()
}

#[inline]
pub(crate) fn rank_of(ranks: &IndexMap<String, usize>, name: &str) -> usize {
    ranks.get(name).copied().unwrap_or(UNRANKED)
}

/// Sorts `(name, value)` pairs into output order.
pub(crate) fn sort_attributes<K: AsRef<str>, V>(ranks: &IndexMap<String, usize>, attrs: &mut [(K, V)]) {
    attrs.sort_by_cached_key(|(name, _)| {
        let name = name.as_ref();
        (rank_of(ranks, name), name.to_string())
    });
}
