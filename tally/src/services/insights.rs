//! Deterministic insight generation over client-supplied feedback items.
//!
//! This is a pure formatting function, not a model call. If real inference
//! is added later it should sit behind the same items-to-text signature so
//! this version stays available as a fallback and test double.

use crate::models::InsightItem;

/// Fixed recommendation line appended whenever at least one item was analyzed.
pub const RECOMMENDED_ACTIONS: &str = "Recommended actions: tighten instruction following, \
    prefer concise answers, and ask clarifying questions when intent is ambiguous.";

/// Label used when rendering items that carried no category. The counting key
/// itself stays `None`; unlike the stored-side breakdown there is no
/// "Unknown" substitution here.
const MISSING_CATEGORY_LABEL: &str = "(none)";

/// How many categories the "Most frequent issues" line names at most.
const TOP_CATEGORIES: usize = 3;

/// Renders the templated summary for `items`.
///
/// `scope` ("week" or "all") is accepted but not yet applied; it is reserved
/// for time-window filtering.
pub fn summarize_items(items: &[InsightItem], _scope: &str) -> String {
    // First-encountered order is kept for equal counts, so tally into a Vec
    // and rely on the stable sort below.
    let mut counts: Vec<(Option<&str>, u64)> = Vec::new();
    for item in items {
        let key = item.category.as_deref();
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mut lines = vec![format!("Analyzed {} feedback item(s).", items.len())];

    if !counts.is_empty() {
        let head = counts
            .iter()
            .take(TOP_CATEGORIES)
            .map(|(key, n)| format!("{}: {}", key.unwrap_or(MISSING_CATEGORY_LABEL), n))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Most frequent issues: {head}."));
    }

    if !items.is_empty() {
        lines.push(RECOMMENDED_ACTIONS.to_string());
    }

    lines.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(category: &str) -> InsightItem {
        InsightItem {
            category: Some(category.to_string()),
        }
    }

    #[test]
    fn empty_input_yields_only_the_count_line() {
        assert_eq!(summarize_items(&[], "all"), "Analyzed 0 feedback item(s).");
    }

    #[test]
    fn counts_and_ranks_categories() {
        let items = vec![item("tone"), item("tone"), item("accuracy")];
        let summary = summarize_items(&items, "all");
        assert_eq!(
            summary,
            format!(
                "Analyzed 3 feedback item(s). Most frequent issues: tone: 2, accuracy: 1. {RECOMMENDED_ACTIONS}"
            )
        );
    }

    #[test]
    fn only_top_three_categories_are_listed() {
        let items = vec![
            item("a"),
            item("a"),
            item("a"),
            item("b"),
            item("b"),
            item("c"),
            item("c"),
            item("d"),
        ];
        let summary = summarize_items(&items, "all");
        assert!(summary.contains("Most frequent issues: a: 3, b: 2, c: 2."));
        assert!(!summary.contains("d: 1"));
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let items = vec![item("tone"), item("accuracy"), item("brevity")];
        let summary = summarize_items(&items, "all");
        assert!(summary.contains("Most frequent issues: tone: 1, accuracy: 1, brevity: 1."));
    }

    #[test]
    fn missing_category_is_not_relabeled_as_unknown() {
        let items = vec![InsightItem { category: None }, InsightItem { category: None }];
        let summary = summarize_items(&items, "all");
        assert!(summary.contains("Most frequent issues: (none): 2."));
        assert!(!summary.contains("Unknown"));
    }

    #[test]
    fn scope_has_no_effect_on_output() {
        let items = vec![item("tone")];
        assert_eq!(
            summarize_items(&items, "all"),
            summarize_items(&items, "week")
        );
    }

    #[test]
    fn recommendation_line_requires_at_least_one_item() {
        assert!(!summarize_items(&[], "all").contains("Recommended actions"));
        assert!(summarize_items(&[item("tone")], "all").contains("Recommended actions"));
    }
}
