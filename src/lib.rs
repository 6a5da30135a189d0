//! # Quiver
//!
//! A backend-neutral query representation for full-text and faceted search.
//!
//! Application code builds a [`query::SearchQuery`] by accumulating search
//! terms, class filters, field filters, exclusions, and pagination. A search
//! backend adapter then reads the finished query and renders it into the
//! engine's native syntax. Quiver itself never talks to an engine: it is a
//! pure in-memory value with no I/O and no validation against any schema.
//!
//! ## Example
//!
//! ```
//! use quiver::query::{SearchQuery, SearchTerm};
//!
//! let mut query = SearchQuery::new();
//! query
//!     .add_search_term(SearchTerm::new("fish").with_field("Title").boost("Title", 2.0))
//!     .add_class_filter("Article")
//!     .add_filter("Status", "Published")
//!     .add_exclude("Status", "Archived")
//!     .set_page_size(0);
//!
//! assert!(query.is_filtered());
//! ```

pub mod query;

pub mod prelude {
    pub use crate::query::{
        Bound, ClassFilter, FilterValue, QueryConfig, SearchQuery, SearchTerm, ValueRange,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
