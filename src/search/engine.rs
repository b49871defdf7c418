//! Filtering and ordering of candidate definitions
//!
//! [`run`] is a pure function: it never touches browser state and can be
//! called on its own to filter any slice of definitions.
//!
//! # Matching rules
//!
//! - Definitions with an empty title are dropped whenever searching is on.
//! - A definition matches when its kind name contains the raw query
//!   (case-sensitive), or when every whitespace-separated term of the query
//!   is a case-insensitive substring of its search key.
//! - An empty or whitespace-only query matches every titled definition.
//! - Matches are ordered by sort key; ties keep their input order.

use std::collections::HashSet;

/// Key extractors used to filter and order definitions
pub struct SearchKeys<'a, D> {
    /// Display title; empty titles never match
    pub title: &'a dyn Fn(&D) -> String,
    /// Text the query terms are matched against
    pub search_key: &'a dyn Fn(&D) -> String,
    /// Text results are ordered by
    pub sort_key: &'a dyn Fn(&D) -> String,
    /// Name of the definition's concrete kind, matched against the raw query
    pub kind: &'a dyn Fn(&D) -> String,
}

/// Filtered, sorted definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<D> {
    /// Matching definitions in sort order
    pub matches: Vec<D>,
    /// Number of matches
    pub match_count: usize,
}

impl<D> Default for SearchResults<D> {
    fn default() -> Self {
        Self {
            matches: Vec::new(),
            match_count: 0,
        }
    }
}

/// Lower-cased, de-duplicated terms of `query`
#[must_use]
pub fn query_terms(query: &str) -> HashSet<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Filter `candidates` by `query` and sort the survivors
///
/// With `search` off the candidates are only sorted.
pub fn run<D: Clone>(query: &str, candidates: &[D], keys: &SearchKeys<'_, D>, search: bool) -> SearchResults<D> {
    let mut matches: Vec<D> = if search {
        let terms = query_terms(query);
        candidates
            .iter()
            .filter(|def| is_match(*def, query, &terms, keys))
            .cloned()
            .collect()
    } else {
        candidates.to_vec()
    };

    matches.sort_by_cached_key(|def| (keys.sort_key)(def));

    SearchResults {
        match_count: matches.len(),
        matches,
    }
}

fn is_match<D>(def: &D, query: &str, terms: &HashSet<String>, keys: &SearchKeys<'_, D>) -> bool {
    if (keys.title)(def).is_empty() {
        return false;
    }
    if (keys.kind)(def).contains(query) {
        return true;
    }
    let haystack = (keys.search_key)(def).to_lowercase();
    terms.iter().all(|term| haystack.contains(term.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Def, DefKind};

    fn title(def: &Def) -> String {
        def.name.clone()
    }

    fn search_key(def: &Def) -> String {
        format!("{} {}", def.name, def.description)
    }

    fn sort_key(def: &Def) -> String {
        def.name.clone()
    }

    fn kind(def: &Def) -> String {
        def.kind.to_string()
    }

    fn keys() -> SearchKeys<'static, Def> {
        SearchKeys {
            title: &title,
            search_key: &search_key,
            sort_key: &sort_key,
            kind: &kind,
        }
    }

    fn names(results: &SearchResults<Def>) -> Vec<&str> {
        results.matches.iter().map(|d| d.name.as_str()).collect()
    }

    fn catalog() -> Vec<Def> {
        vec![
            Def::new(3, "Longsword", DefKind::Weapon).describe("a versatile martial blade"),
            Def::new(1, "Chain Shirt", DefKind::Armor).describe("light metal armor"),
            Def::new(2, "Dagger", DefKind::Weapon).describe("a small blade"),
            Def::new(4, "", DefKind::Armor),
            Def::new(5, "Bless", DefKind::Spell).describe("bolsters allies"),
        ]
    }

    #[test]
    fn test_empty_query_matches_all_titled() {
        let results = run("", &catalog(), &keys(), true);
        assert_eq!(names(&results), vec!["Bless", "Chain Shirt", "Dagger", "Longsword"]);
        assert_eq!(results.match_count, 4);
    }

    #[test]
    fn test_whitespace_query_equals_empty_query() {
        let blank = run("   \t ", &catalog(), &keys(), true);
        let empty = run("", &catalog(), &keys(), true);
        assert_eq!(blank, empty);
    }

    #[test]
    fn test_all_terms_must_match() {
        let results = run("BLADE small", &catalog(), &keys(), true);
        assert_eq!(names(&results), vec!["Dagger"]);
    }

    #[test]
    fn test_duplicate_terms_collapse() {
        assert_eq!(query_terms("blade Blade BLADE").len(), 1);
        let results = run("blade blade", &catalog(), &keys(), true);
        assert_eq!(names(&results), vec!["Dagger", "Longsword"]);
    }

    #[test]
    fn test_kind_name_matches_raw_query() {
        let results = run("Weapon", &catalog(), &keys(), true);
        assert_eq!(names(&results), vec!["Dagger", "Longsword"]);
    }

    #[test]
    fn test_kind_name_match_is_case_sensitive() {
        let results = run("weapon", &catalog(), &keys(), true);
        assert!(results.matches.is_empty());
    }

    #[test]
    fn test_empty_title_excluded_even_by_kind() {
        let results = run("Armor", &catalog(), &keys(), true);
        assert_eq!(names(&results), vec!["Chain Shirt"]);
    }

    #[test]
    fn test_search_off_keeps_everything_sorted() {
        let results = run("nothing matches this", &catalog(), &keys(), false);
        assert_eq!(results.match_count, 5);
        assert_eq!(names(&results), vec!["", "Bless", "Chain Shirt", "Dagger", "Longsword"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let defs = vec![
            Def::new(10, "Potion", DefKind::Item),
            Def::new(11, "Potion", DefKind::Item),
            Def::new(12, "Antidote", DefKind::Item),
            Def::new(13, "Potion", DefKind::Item),
        ];
        let results = run("", &defs, &keys(), true);
        let ids: Vec<u32> = results.matches.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![12, 10, 11, 13]);
    }

    #[test]
    fn test_match_count_equals_len() {
        for query in ["", "a", "blade", "Spell", "zzz", "light armor"] {
            let results = run(query, &catalog(), &keys(), true);
            assert_eq!(results.match_count, results.matches.len(), "query={query}");
        }
    }
}
