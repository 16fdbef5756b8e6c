use indexmap::IndexSet;

/// Compute the eligible results for `query`.
///
/// The query is trimmed and lower-cased; a blank query keeps every candidate,
/// otherwise a candidate is kept when its lower-cased form contains the query.
/// Selected names are then removed. Candidate order is preserved and the
/// result is not truncated.
#[must_use]
pub fn filter_candidates(
	candidates: &[String],
	selection: &IndexSet<String>,
	query: &str,
) -> Vec<String> {
	let needle = query.trim().to_lowercase();
	candidates
		.iter()
		.filter(|candidate| needle.is_empty() || candidate.to_lowercase().contains(&needle))
		.filter(|candidate| !selection.contains(candidate.as_str()))
		.cloned()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn names(items: &[&str]) -> Vec<String> {
		items.iter().map(|item| (*item).to_string()).collect()
	}

	#[test]
	fn blank_query_keeps_everything_in_order() {
		let candidates = names(&["b", "a", "c"]);
		let result = filter_candidates(&candidates, &IndexSet::new(), "   ");
		assert_eq!(result, candidates);
	}

	#[test]
	fn matching_ignores_case_and_surrounding_whitespace() {
		let candidates = names(&["HomeAssistant.Core", "aiohttp", "custom_components.HOME"]);
		let result = filter_candidates(&candidates, &IndexSet::new(), "  HOME ");
		assert_eq!(result, names(&["HomeAssistant.Core", "custom_components.HOME"]));
	}

	#[test]
	fn selected_names_are_excluded() {
		let candidates = names(&["a.one", "a.two", "b.one"]);
		let selection: IndexSet<String> = ["a.two".to_string()].into_iter().collect();
		let result = filter_candidates(&candidates, &selection, "a.");
		assert_eq!(result, names(&["a.one"]));
	}
}
