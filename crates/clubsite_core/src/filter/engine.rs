//! Category restriction, free-text matching and section grouping.
//!
//! # Responsibility
//! - Compute the visible subset of a roster for one filter state.
//! - Group visible entries under their declared categories.
//!
//! # Invariants
//! - Output order is authoring order; no pass ever re-sorts.
//! - Matching is case-insensitive substring over `searchable_fields`.
//! - The query string is matched as typed; no trimming or tokenizing.

use crate::model::{CatalogEntity, Category};

/// Which slice of a roster the category filter admits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelector {
    /// The computed "all" pseudo-category: every entry passes.
    All,
    /// A single declared category id, matched exactly.
    Id(String),
}

impl CategorySelector {
    /// Parses a UI filter value. The literal "all" (any case, outer
    /// whitespace ignored) selects everything; anything else is kept
    /// verbatim as a category id.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Id(raw.to_string())
        }
    }

    /// Whether an entry with this category key passes the filter.
    pub fn admits(&self, category_key: &str) -> bool {
        match self {
            Self::All => true,
            Self::Id(id) => id == category_key,
        }
    }
}

/// Computes the entries visible under one filter state.
///
/// Both passes preserve authoring order. A selector naming a category
/// no entry belongs to yields an empty result. An empty query admits
/// every entry that passed the category pass.
pub fn select_visible<'a, T: CatalogEntity>(
    entries: &'a [T],
    selector: &CategorySelector,
    query: &str,
) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| selector.admits(entry.category_key()))
        .filter(|entry| needle.is_empty() || matches_needle(*entry, &needle))
        .collect()
}

fn matches_needle<T: CatalogEntity>(entry: &T, needle: &str) -> bool {
    entry
        .searchable_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// One render-ready section: a category and its visible entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBucket<'a, T> {
    pub category: &'a Category,
    pub members: Vec<&'a T>,
}

/// Partitions visible entries into sections, one per declared category,
/// in category declaration order. Categories left with no visible entry
/// produce no section.
pub fn group_by_category<'a, T: CatalogEntity>(
    categories: &'a [Category],
    visible: &[&'a T],
) -> Vec<CategoryBucket<'a, T>> {
    categories
        .iter()
        .filter_map(|category| {
            let members: Vec<&'a T> = visible
                .iter()
                .copied()
                .filter(|entry| entry.category_key() == category.id)
                .collect();
            if members.is_empty() {
                None
            } else {
                Some(CategoryBucket { category, members })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Card {
        id: &'static str,
        group: &'static str,
        name: &'static str,
        skills: Vec<&'static str>,
    }

    impl CatalogEntity for Card {
        fn entity_id(&self) -> &str {
            self.id
        }

        fn category_key(&self) -> &str {
            self.group
        }

        fn searchable_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.name];
            fields.extend(self.skills.iter().copied());
            fields
        }
    }

    fn card(id: &'static str, group: &'static str, name: &'static str, skills: Vec<&'static str>) -> Card {
        Card {
            id,
            group,
            name,
            skills,
        }
    }

    fn sample() -> Vec<Card> {
        vec![
            card("m1", "design", "Alice", vec!["figma"]),
            card("m2", "tech", "Bob", vec!["python", "ros"]),
            card("m3", "design", "Carol", vec!["blender"]),
        ]
    }

    fn ids(selected: &[&Card]) -> Vec<&'static str> {
        selected.iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn all_selector_with_empty_query_admits_everything_in_order() {
        let cards = sample();
        let visible = select_visible(&cards, &CategorySelector::All, "");
        assert_eq!(ids(&visible), vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn category_pass_runs_before_search_pass() {
        let cards = sample();
        let selector = CategorySelector::parse("design");
        let visible = select_visible(&cards, &selector, "python");
        assert!(visible.is_empty());

        let visible = select_visible(&cards, &CategorySelector::All, "python");
        assert_eq!(ids(&visible), vec!["m2"]);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let cards = sample();
        let visible = select_visible(&cards, &CategorySelector::All, "ALI");
        assert_eq!(ids(&visible), vec!["m1"]);

        let visible = select_visible(&cards, &CategorySelector::All, "yTho");
        assert_eq!(ids(&visible), vec!["m2"]);
    }

    #[test]
    fn query_is_matched_as_typed() {
        let cards = sample();
        let visible = select_visible(&cards, &CategorySelector::All, " alice");
        assert!(visible.is_empty());
    }

    #[test]
    fn unknown_category_degrades_to_empty() {
        let cards = sample();
        let selector = CategorySelector::parse("robotics");
        assert!(select_visible(&cards, &selector, "").is_empty());
    }

    #[test]
    fn all_keyword_parses_case_insensitively() {
        assert_eq!(CategorySelector::parse(" All "), CategorySelector::All);
        assert_eq!(
            CategorySelector::parse("design"),
            CategorySelector::Id("design".to_string())
        );
    }

    #[test]
    fn grouping_follows_category_declaration_order_and_drops_empty_sections() {
        let cards = sample();
        let categories = vec![
            Category {
                id: "tech".to_string(),
                label: "Tech".to_string(),
                description: None,
            },
            Category {
                id: "design".to_string(),
                label: "Design".to_string(),
                description: None,
            },
            Category {
                id: "pr".to_string(),
                label: "PR".to_string(),
                description: None,
            },
        ];
        let visible = select_visible(&cards, &CategorySelector::All, "");
        let buckets = group_by_category(&categories, &visible);

        let labels: Vec<&str> = buckets
            .iter()
            .map(|bucket| bucket.category.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Tech", "Design"]);
        assert_eq!(ids(&buckets[1].members), vec!["m1", "m3"]);
    }
}
