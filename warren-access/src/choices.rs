// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route-scoped page choice queries.
//!
//! Backs the link-field selector of the access list editor: only published
//! pages under the scope's route prefix are offered as choices.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::{AccessStore, Key};

/// A single selectable page, paired with its display title.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageChoice<ID> {
    pub page: ID,
    pub title: String,
}

/// Published pages under the given route scope, ordered by title.
///
/// `scope` is the route of the space being edited; `None` matches nothing,
/// which is the state before the route lookup has landed (or after it
/// failed). `search` narrows results to titles containing the given text,
/// case-insensitively. `start` and `limit` paginate the ordered result.
pub fn page_choices<ID, S>(
    store: &S,
    scope: Option<&str>,
    search: Option<&str>,
    start: usize,
    limit: usize,
) -> Result<Vec<PageChoice<ID>>, S::Error>
where
    ID: Key + Ord,
    S: AccessStore<ID>,
{
    let Some(scope) = scope else {
        return Ok(Vec::new());
    };

    let prefix = format!("{}/", scope);
    let search = search.map(str::to_lowercase);

    let mut choices: Vec<_> = store
        .pages()?
        .into_iter()
        .filter(|(_, page)| page.published && page.route.starts_with(&prefix))
        .filter(|(_, page)| match &search {
            Some(text) => page.title.to_lowercase().contains(text),
            None => true,
        })
        .map(|(id, page)| PageChoice {
            page: id,
            title: page.title,
        })
        .collect();

    // Ties are broken by page key so pagination stays stable across calls.
    choices.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.page.cmp(&b.page)));

    Ok(choices.into_iter().skip(start).take(limit).collect())
}

#[cfg(test)]
mod tests {
    use super::page_choices;
    use crate::test_utils::{MemoryStore, titled_page};

    fn store() -> MemoryStore<&'static str> {
        let mut store = MemoryStore::new();
        store.insert_page("intro", titled_page("eng", "eng/intro", "Introduction", true));
        store.insert_page("setup", titled_page("eng", "eng/setup", "Setup", true));
        store.insert_page("draft", titled_page("eng", "eng/draft", "Draft notes", false));
        store.insert_page("pricing", titled_page("sales", "sales/pricing", "Pricing", true));
        store
    }

    #[test]
    fn scoped_to_route_prefix_and_published() {
        let choices = page_choices(&store(), Some("eng"), None, 0, 20).expect("queries");
        let titles: Vec<_> = choices.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Introduction", "Setup"]);
    }

    #[test]
    fn unset_scope_matches_nothing() {
        let choices = page_choices::<&str, _>(&store(), None, None, 0, 20).expect("queries");
        assert!(choices.is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let choices = page_choices(&store(), Some("eng"), Some("INTRO"), 0, 20).expect("queries");
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].page, "intro");
    }

    #[test]
    fn pagination_windows_the_ordered_result() {
        let first = page_choices(&store(), Some("eng"), None, 0, 1).expect("queries");
        let second = page_choices(&store(), Some("eng"), None, 1, 1).expect("queries");
        assert_eq!(first[0].title, "Introduction");
        assert_eq!(second[0].title, "Setup");
    }

    #[test]
    fn sibling_space_routes_are_excluded() {
        // "eng" must not match a hypothetical "eng-archive" space route.
        let mut store = store();
        store.insert_page(
            "old",
            titled_page("eng-archive", "eng-archive/old", "Ancient", true),
        );

        let choices = page_choices(&store, Some("eng"), None, 0, 20).expect("queries");
        assert!(choices.iter().all(|c| c.page != "old"));
    }
}
