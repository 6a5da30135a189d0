//! The search query accumulator handed to backend adapters.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::QueryConfig;
use crate::query::filter::{ClassFilter, FilterValue, IntoFilterValues};
use crate::query::term::SearchTerm;

/// A backend-neutral search query.
///
/// Built by one caller through a linear sequence of accumulator calls, then
/// handed by shared reference to an adapter which compiles it into the
/// engine's native syntax. Terms and filters only ever grow; pagination
/// fields are the only state with replace semantics.
///
/// Every method accepts its input as given. Field names are not checked
/// against any schema and empty search text is legal; whatever is malformed
/// for a particular backend surfaces as an adapter error, never here.
///
/// Not internally synchronized. Sharing one instance across threads during
/// construction requires an external lock; the usual lifecycle (build, then
/// read through `&SearchQuery`) needs none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    search: Vec<SearchTerm>,
    classes: Vec<ClassFilter>,
    require: HashMap<String, Vec<FilterValue>>,
    exclude: HashMap<String, Vec<FilterValue>>,
    start: usize,
    limit: i64,
    config: QueryConfig,
}

impl SearchQuery {
    /// Sentinel limit meaning "return all results".
    pub const UNLIMITED: i64 = -1;

    /// Create an empty query with the default configuration.
    pub fn new() -> Self {
        Self::with_config(QueryConfig::default())
    }

    /// Create an empty query with an explicit configuration.
    pub fn with_config(config: QueryConfig) -> Self {
        SearchQuery {
            search: Vec::new(),
            classes: Vec::new(),
            require: HashMap::new(),
            exclude: HashMap::new(),
            start: 0,
            limit: Self::UNLIMITED,
            config,
        }
    }

    /// Append an exact-match search term.
    ///
    /// The term's fuzzy flag is cleared regardless of how it was built; use
    /// [`add_fuzzy_search_term`](Self::add_fuzzy_search_term) for similarity
    /// matching.
    pub fn add_search_term<T: Into<SearchTerm>>(&mut self, term: T) -> &mut Self {
        self.search.push(term.into().fuzzy(false));
        self
    }

    /// Append a search term matched by similarity (stemming, edit distance).
    ///
    /// A term "fishing" would also likely find results containing "fish" or
    /// "fisher". What "similar" means exactly is up to the backend.
    pub fn add_fuzzy_search_term<T: Into<SearchTerm>>(&mut self, term: T) -> &mut Self {
        self.search.push(term.into().fuzzy(true));
        self
    }

    /// Restrict results to instances of a class.
    ///
    /// A bare class name includes subclasses; pass a
    /// [`ClassFilter`] to control that explicitly. Adapters are free to
    /// treat multiple class filters as a disjunction.
    pub fn add_class_filter<C: Into<ClassFilter>>(&mut self, class_filter: C) -> &mut Self {
        self.classes.push(class_filter.into());
        self
    }

    /// Require a field to match one of the given values.
    ///
    /// Values accumulate: repeated calls for the same field extend its
    /// value set, never replace it. Across fields the requirements are
    /// conjunctive.
    pub fn add_filter<F, V>(&mut self, field: F, values: V) -> &mut Self
    where
        F: Into<String>,
        V: IntoFilterValues,
    {
        self.require
            .entry(field.into())
            .or_default()
            .extend(values.into_filter_values());
        self
    }

    /// Exclude results where a field matches one of the given values,
    /// inverse of [`add_filter`](Self::add_filter).
    pub fn add_exclude<F, V>(&mut self, field: F, values: V) -> &mut Self
    where
        F: Into<String>,
        V: IntoFilterValues,
    {
        self.exclude
            .entry(field.into())
            .or_default()
            .extend(values.into_filter_values());
        self
    }

    /// Set the offset of the first result.
    pub fn set_start(&mut self, start: usize) -> &mut Self {
        self.start = start;
        self
    }

    /// Set the maximum number of results, [`UNLIMITED`](Self::UNLIMITED)
    /// for no limit.
    ///
    /// No bounds checking: any other negative value is stored as given and
    /// left to the adapter to interpret.
    pub fn set_limit(&mut self, limit: i64) -> &mut Self {
        self.limit = limit;
        self
    }

    /// Jump to the given zero-based page.
    ///
    /// Derives `start` and `limit` from the configured default page size at
    /// call time.
    pub fn set_page_size(&mut self, page: usize) -> &mut Self {
        let page_size = self.config.default_page_size;
        self.set_start(page * page_size);
        self.set_limit(page_size as i64);
        self
    }

    /// Get the search terms in insertion order.
    pub fn search_terms(&self) -> &[SearchTerm] {
        &self.search
    }

    /// Get the class filters in insertion order.
    pub fn class_filters(&self) -> &[ClassFilter] {
        &self.classes
    }

    /// Get the required values per field.
    pub fn filters(&self) -> &HashMap<String, Vec<FilterValue>> {
        &self.require
    }

    /// Get the excluded values per field.
    pub fn excludes(&self) -> &HashMap<String, Vec<FilterValue>> {
        &self.exclude
    }

    /// Get the offset of the first result.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the result limit, [`UNLIMITED`](Self::UNLIMITED) if none.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Items per page implied by the current limit,
    /// [`UNLIMITED`](Self::UNLIMITED) if no limit is set.
    pub fn page_size(&self) -> i64 {
        self.limit
    }

    /// Get the configuration this query was built with.
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Whether any criteria have been accumulated.
    ///
    /// An all-default query is unfiltered and adapters may treat it as
    /// "match everything". Pagination alone does not count as a criterion.
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty()
            || !self.classes.is_empty()
            || !self.require.is_empty()
            || !self.exclude.is_empty()
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<&str> = self.search.iter().map(|t| t.text.as_str()).collect();
        let classes: Vec<&str> = self.classes.iter().map(|c| c.class_name.as_str()).collect();
        write!(
            f,
            "SearchQuery(terms: [{}], classes: [{}], require: {}, exclude: {}, start: {}, limit: {})",
            terms.join(", "),
            classes.join(", "),
            self.require.len(),
            self.exclude.len(),
            self.start,
            self.limit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_query_is_unfiltered() {
        let query = SearchQuery::new();
        assert!(!query.is_filtered());
        assert_eq!(query.start(), 0);
        assert_eq!(query.limit(), SearchQuery::UNLIMITED);
        assert!(query.search_terms().is_empty());
        assert!(query.class_filters().is_empty());
        assert!(query.filters().is_empty());
        assert!(query.excludes().is_empty());
    }

    #[test]
    fn test_any_single_criterion_makes_filtered() {
        let mut query = SearchQuery::new();
        query.add_search_term("fish");
        assert!(query.is_filtered());

        let mut query = SearchQuery::new();
        query.add_class_filter("Article");
        assert!(query.is_filtered());

        let mut query = SearchQuery::new();
        query.add_filter("Status", "Published");
        assert!(query.is_filtered());

        let mut query = SearchQuery::new();
        query.add_exclude("Status", "Archived");
        assert!(query.is_filtered());
    }

    #[test]
    fn test_pagination_alone_is_not_filtered() {
        let mut query = SearchQuery::new();
        query.set_start(20).set_limit(10);
        assert!(!query.is_filtered());
    }

    #[test]
    fn test_term_order_preserved() {
        let mut query = SearchQuery::new();
        query.add_search_term("a").add_fuzzy_search_term("b");

        let terms = query.search_terms();
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].text, "a");
        assert!(!terms[0].fuzzy);
        assert_eq!(terms[1].text, "b");
        assert!(terms[1].fuzzy);
    }

    #[test]
    fn test_add_search_term_clears_fuzzy_flag() {
        let mut query = SearchQuery::new();
        query.add_search_term(SearchTerm::new("fish").fuzzy(true));
        assert!(!query.search_terms()[0].fuzzy);
    }

    #[test]
    fn test_boost_map_present_without_boosts() {
        let mut query = SearchQuery::new();
        query.add_search_term("fish");
        // Empty, not absent, so adapters can iterate unconditionally.
        assert!(query.search_terms()[0].boost.is_empty());
    }

    #[test]
    fn test_filters_accumulate_not_replace() {
        let mut query = SearchQuery::new();
        query.add_filter("Status", "Draft");
        query.add_filter("Status", "Published");

        let values = &query.filters()["Status"];
        assert_eq!(values.len(), 2);
        assert!(values.contains(&FilterValue::Text("Draft".to_string())));
        assert!(values.contains(&FilterValue::Text("Published".to_string())));
    }

    #[test]
    fn test_scalar_and_list_store_the_same_shape() {
        let mut scalar = SearchQuery::new();
        scalar.add_filter("Status", "Published");

        let mut list = SearchQuery::new();
        list.add_filter("Status", vec!["Published"]);

        assert_eq!(scalar.filters(), list.filters());
    }

    #[test]
    fn test_exclude_independent_of_require() {
        let mut query = SearchQuery::new();
        query.add_filter("Status", "Published");
        query.add_exclude("Status", "Archived");

        assert_eq!(
            query.filters()["Status"],
            vec![FilterValue::Text("Published".to_string())]
        );
        assert_eq!(
            query.excludes()["Status"],
            vec![FilterValue::Text("Archived".to_string())]
        );
    }

    #[test]
    fn test_page_derivation_with_default_config() {
        let mut query = SearchQuery::new();
        query.set_page_size(3);
        assert_eq!(query.start(), 30);
        assert_eq!(query.limit(), 10);
        assert_eq!(query.page_size(), 10);
    }

    #[test]
    fn test_page_zero() {
        let mut query = SearchQuery::new();
        query.set_page_size(0);
        assert_eq!(query.start(), 0);
        assert_eq!(query.limit(), 10);
        assert_eq!(query.page_size(), 10);
    }

    #[test]
    fn test_page_derivation_with_custom_config() {
        let config = QueryConfig {
            default_page_size: 25,
        };
        let mut query = SearchQuery::with_config(config);
        query.set_page_size(2);
        assert_eq!(query.start(), 50);
        assert_eq!(query.limit(), 25);
    }

    #[test]
    fn test_raw_setters_accept_anything() {
        let mut query = SearchQuery::new();
        query.set_limit(-5);
        assert_eq!(query.limit(), -5);
    }

    #[test]
    fn test_class_filter_forms() {
        let mut query = SearchQuery::new();
        query
            .add_class_filter("Article")
            .add_class_filter(ClassFilter::new("Page").include_subclasses(false));

        let classes = query.class_filters();
        assert_eq!(classes[0].class_name, "Article");
        assert!(classes[0].include_subclasses);
        assert_eq!(classes[1].class_name, "Page");
        assert!(!classes[1].include_subclasses);
    }

    #[test]
    fn test_display() {
        let mut query = SearchQuery::new();
        query
            .add_search_term("fish")
            .add_class_filter("Article")
            .set_limit(10);
        assert_eq!(
            query.to_string(),
            "SearchQuery(terms: [fish], classes: [Article], require: 0, exclude: 0, start: 0, limit: 10)"
        );
    }
}
