use indexmap::IndexMap;

use crate::entry::Entry;

/// Entries bucketed by category, in the order each category first appeared.
pub type Groups<'a> = IndexMap<&'a str, Vec<&'a Entry>>;

/// Bucket `entries` by category in a single left-to-right pass.
///
/// A bucket is appended the first time its category is seen, and entries keep
/// their input order within each bucket.
pub fn group<'a, I>(entries: I) -> Groups<'a>
where
	I: IntoIterator<Item = &'a Entry>,
{
	let mut groups: Groups<'a> = IndexMap::new();
	for entry in entries {
		groups.entry(entry.category.as_str()).or_default().push(entry);
	}
	groups
}
