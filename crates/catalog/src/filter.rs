//! Case-insensitive substring filtering over catalog entries.

use crate::entry::Entry;

/// Keep the entries whose name or category contains `query`, ignoring case.
///
/// The query is matched literally: no trimming, no tokenization, and
/// whitespace is an ordinary character. An empty query keeps everything.
/// Retained entries keep their relative order.
pub fn filter<'a, I>(entries: I, query: &str) -> Vec<&'a Entry>
where
	I: IntoIterator<Item = &'a Entry>,
{
	let folded = query.to_lowercase();
	entries
		.into_iter()
		.filter(|entry| matches_folded(entry, &folded))
		.collect()
}

fn matches_folded(entry: &Entry, folded_query: &str) -> bool {
	folded_query.is_empty()
		|| entry.name.to_lowercase().contains(folded_query)
		|| entry.category.to_lowercase().contains(folded_query)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scenario() -> Vec<Entry> {
		vec![
			Entry::new("btn1", "Primary Button", "Buttons", "<Button />"),
			Entry::new("btn2", "Secondary Button", "Buttons", "<Button />"),
			Entry::new("card1", "Basic Card", "Cards", "<Card />"),
		]
	}

	fn ids<'a>(entries: &[&'a Entry]) -> Vec<&'a str> {
		entries.iter().map(|entry| entry.id.as_str()).collect()
	}

	#[test]
	fn matches_names_case_insensitively() {
		let catalog = scenario();
		assert_eq!(ids(&filter(&catalog, "button")), ["btn1", "btn2"]);
		assert_eq!(ids(&filter(&catalog, "BASIC")), ["card1"]);
	}

	#[test]
	fn matches_categories() {
		let catalog = scenario();
		assert_eq!(ids(&filter(&catalog, "car")), ["card1"]);
	}

	#[test]
	fn empty_query_is_identity() {
		let catalog = scenario();
		let all = filter(&catalog, "");
		assert_eq!(ids(&all), ["btn1", "btn2", "card1"]);
	}

	#[test]
	fn empty_catalog_yields_nothing() {
		let catalog: Vec<Entry> = Vec::new();
		assert!(filter(&catalog, "").is_empty());
		assert!(filter(&catalog, "button").is_empty());
	}

	#[test]
	fn whitespace_is_matched_literally() {
		let catalog = scenario();
		assert_eq!(ids(&filter(&catalog, " ")), ["btn1", "btn2", "card1"]);
		assert!(filter(&catalog, "  ").is_empty());
		assert_eq!(ids(&filter(&catalog, "y b")), ["btn1", "btn2"]);
		assert!(filter(&catalog, " button ").is_empty());
	}

	#[test]
	fn retained_and_excluded_entries_agree_with_substring_test() {
		let catalog = scenario();
		for query in ["", "b", "utt", "CARDS", "zzz", "on", " "] {
			let kept = filter(&catalog, query);
			let folded = query.to_lowercase();

			let mut cursor = 0;
			for entry in &kept {
				let position = catalog[cursor..]
					.iter()
					.position(|candidate| candidate.id == entry.id)
					.expect("result must be an ordered subsequence");
				cursor += position + 1;
			}

			for entry in &catalog {
				let contains = entry.name.to_lowercase().contains(&folded)
					|| entry.category.to_lowercase().contains(&folded);
				let retained = kept.iter().any(|kept| kept.id == entry.id);
				assert_eq!(contains, retained, "query {query:?}, entry {}", entry.id);
			}
		}
	}
}
