//! Search term representation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single search term with optional field targeting and per-field boosts.
///
/// Terms are appended to a [`SearchQuery`](crate::query::SearchQuery) and are
/// never modified afterwards. Their order within the query is the order they
/// were added, and adapters may treat earlier terms as primary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTerm {
    /// The search text. Exact interpretation (grouping, boolean expressions,
    /// tokenization) depends on the backend; an empty string is legal here.
    pub text: String,
    /// Composite field names this term is limited to. `None` means the
    /// adapter's default field set ("all indexed fields").
    pub fields: Option<Vec<String>>,
    /// Map of composite field names to boost weights. The higher the value,
    /// the more the field contributes to relevancy. Always present, possibly
    /// empty, so adapters can iterate it unconditionally.
    pub boost: HashMap<String, f32>,
    /// Whether the backend should match by similarity (stemming, edit
    /// distance) rather than exact tokens.
    pub fuzzy: bool,
}

impl SearchTerm {
    /// Create a new exact-match term searched across all indexed fields.
    pub fn new<T: Into<String>>(text: T) -> Self {
        SearchTerm {
            text: text.into(),
            fields: None,
            boost: HashMap::new(),
            fuzzy: false,
        }
    }

    /// Limit this term to a single field.
    ///
    /// Repeated calls accumulate, so a single field name normalizes to the
    /// same shape as a list passed to [`with_fields`](Self::with_fields).
    pub fn with_field<F: Into<String>>(mut self, field: F) -> Self {
        self.fields.get_or_insert_with(Vec::new).push(field.into());
        self
    }

    /// Limit this term to the given fields, in order.
    pub fn with_fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.fields
            .get_or_insert_with(Vec::new)
            .extend(fields.into_iter().map(Into::into));
        self
    }

    /// Set the boost weight for a field.
    pub fn boost<F: Into<String>>(mut self, field: F, weight: f32) -> Self {
        self.boost.insert(field.into(), weight);
        self
    }

    /// Set whether this term should be fuzzy-matched.
    pub fn fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }
}

impl From<&str> for SearchTerm {
    fn from(text: &str) -> Self {
        SearchTerm::new(text)
    }
}

impl From<String> for SearchTerm {
    fn from(text: String) -> Self {
        SearchTerm::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_defaults() {
        let term = SearchTerm::new("fish");
        assert_eq!(term.text, "fish");
        assert!(term.fields.is_none());
        assert!(term.boost.is_empty());
        assert!(!term.fuzzy);
    }

    #[test]
    fn test_single_field_normalizes_to_list() {
        let single = SearchTerm::new("fish").with_field("Title");
        let list = SearchTerm::new("fish").with_fields(["Title"]);
        assert_eq!(single.fields, Some(vec!["Title".to_string()]));
        assert_eq!(single, list);
    }

    #[test]
    fn test_fields_accumulate_in_order() {
        let term = SearchTerm::new("fish")
            .with_field("Title")
            .with_fields(["Content", "Summary"]);
        assert_eq!(
            term.fields,
            Some(vec![
                "Title".to_string(),
                "Content".to_string(),
                "Summary".to_string()
            ])
        );
    }

    #[test]
    fn test_boost_map() {
        let term = SearchTerm::new("fish").boost("Title", 2.0).boost("Content", 0.5);
        assert_eq!(term.boost.get("Title"), Some(&2.0));
        assert_eq!(term.boost.get("Content"), Some(&0.5));
    }

    #[test]
    fn test_from_str() {
        let term: SearchTerm = "fish".into();
        assert_eq!(term, SearchTerm::new("fish"));
    }
}
