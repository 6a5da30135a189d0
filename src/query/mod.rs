//! Query representation for search requests.
//!
//! The central type is [`SearchQuery`], a mutable accumulator that client
//! code fills through a fluent API and then hands, by shared reference, to a
//! search backend adapter. The adapter reads the accumulated terms, class
//! filters, require/exclude maps, and pagination and compiles them into its
//! engine's query syntax.

pub mod filter;
pub mod range;
pub mod search_query;
pub mod term;

pub use self::filter::{ClassFilter, FilterValue, IntoFilterValues};
pub use self::range::{Bound, ValueRange};
pub use self::search_query::SearchQuery;
pub use self::term::SearchTerm;

use serde::{Deserialize, Serialize};

/// Configuration for query construction.
///
/// Passed to [`SearchQuery::with_config`] to override the defaults. Keeping
/// this an explicit value (rather than process-wide state) means two queries
/// built in the same process can page differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Number of results per page used by [`SearchQuery::set_page_size`].
    pub default_page_size: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            default_page_size: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_config_default() {
        let config = QueryConfig::default();
        assert_eq!(config.default_page_size, 10);
    }
}
