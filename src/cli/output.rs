use anyhow::Result;
use serde_json::json;
use showcase_catalog::{Catalog, Groups, filter, group};

const NO_MATCHES: &str = "No components found";

/// Render the catalog, filtered by `query`, one category block at a time.
pub(crate) fn format_plain(catalog: &Catalog, query: &str) -> String {
	let groups = group(filter(catalog, query));
	if groups.is_empty() {
		return format!("{NO_MATCHES}\n");
	}

	let width = id_width(&groups);
	let mut out = String::new();
	for (category, entries) in &groups {
		out.push_str(category);
		out.push('\n');
		for entry in entries {
			out.push_str(&format!("  {:<width$}  {}\n", entry.id, entry.name));
		}
	}
	out
}

fn id_width(groups: &Groups<'_>) -> usize {
	groups
		.values()
		.flatten()
		.map(|entry| entry.id.chars().count())
		.max()
		.unwrap_or(0)
}

/// The same listing as a JSON array of categories.
pub(crate) fn format_json(catalog: &Catalog, query: &str) -> Result<String> {
	let groups = group(filter(catalog, query));
	let payload: Vec<_> = groups
		.iter()
		.map(|(category, entries)| {
			json!({
				"category": category,
				"entries": entries
					.iter()
					.map(|entry| json!({
						"id": entry.id,
						"name": entry.name,
						"description": entry.description,
					}))
					.collect::<Vec<_>>(),
			})
		})
		.collect();
	Ok(serde_json::to_string_pretty(&payload)?)
}

#[cfg(test)]
mod tests {
	use serde_json::Value;
	use showcase_catalog::Entry;

	use super::*;

	fn scenario() -> Catalog {
		Catalog::new(vec![
			Entry::new("btn1", "Primary Button", "Buttons", "<Button />")
				.with_description("Main call to action"),
			Entry::new("btn2", "Secondary Button", "Buttons", "<Button />"),
			Entry::new("card1", "Basic Card", "Cards", "<Card />"),
		])
		.expect("valid catalog")
	}

	#[test]
	fn plain_listing_groups_and_aligns_ids() {
		insta::assert_snapshot!(format_plain(&scenario(), ""), @r"
		Buttons
		  btn1   Primary Button
		  btn2   Secondary Button
		Cards
		  card1  Basic Card
		");
	}

	#[test]
	fn plain_listing_honours_the_query() {
		let listing = format_plain(&scenario(), "car");
		assert_eq!(listing, "Cards\n  card1  Basic Card\n");
		assert_eq!(format_plain(&scenario(), "zzz"), "No components found\n");
	}

	#[test]
	fn json_listing_keeps_group_order() {
		let parsed: Value =
			serde_json::from_str(&format_json(&scenario(), "").expect("json")).expect("valid json");
		let categories: Vec<_> = parsed
			.as_array()
			.expect("array")
			.iter()
			.map(|group| group["category"].as_str().unwrap_or_default().to_string())
			.collect();
		assert_eq!(categories, ["Buttons", "Cards"]);
		assert_eq!(parsed[0]["entries"][0]["description"], "Main call to action");
		assert_eq!(parsed[0]["entries"][1]["id"], "btn2");
	}
}
