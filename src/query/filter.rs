//! Filter values and class filters for narrowing search results.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::range::ValueRange;

/// A single acceptable (or excluded) value for a filtered field.
///
/// Scalar variants carry discrete values. [`Range`](FilterValue::Range)
/// matches an interval, and [`Missing`](FilterValue::Missing) /
/// [`Present`](FilterValue::Present) match on whether the field holds any
/// value at all, independent of what that value is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// DateTime value
    DateTime(DateTime<Utc>),
    /// Interval of values
    Range(Box<ValueRange>),
    /// The field has no value
    Missing,
    /// The field has some value
    Present,
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(value) => write!(f, "{value}"),
            FilterValue::Integer(value) => write!(f, "{value}"),
            FilterValue::Float(value) => write!(f, "{value}"),
            FilterValue::Boolean(value) => write!(f, "{value}"),
            FilterValue::DateTime(value) => write!(f, "{}", value.to_rfc3339()),
            FilterValue::Range(_) => write!(f, "<range>"),
            FilterValue::Missing => write!(f, "<missing>"),
            FilterValue::Present => write!(f, "<present>"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(value: DateTime<Utc>) -> Self {
        FilterValue::DateTime(value)
    }
}

impl From<ValueRange> for FilterValue {
    fn from(value: ValueRange) -> Self {
        FilterValue::Range(Box::new(value))
    }
}

/// Conversion of scalar-or-list input into filter values.
///
/// Lets [`SearchQuery::add_filter`](crate::query::SearchQuery::add_filter)
/// and [`add_exclude`](crate::query::SearchQuery::add_exclude) accept a bare
/// scalar, a range, a sentinel, or a list of any of those: a single scalar
/// normalizes to a one-element list.
pub trait IntoFilterValues {
    /// Convert into a list of filter values.
    fn into_filter_values(self) -> Vec<FilterValue>;
}

impl IntoFilterValues for FilterValue {
    fn into_filter_values(self) -> Vec<FilterValue> {
        vec![self]
    }
}

impl IntoFilterValues for &str {
    fn into_filter_values(self) -> Vec<FilterValue> {
        vec![self.into()]
    }
}

impl IntoFilterValues for String {
    fn into_filter_values(self) -> Vec<FilterValue> {
        vec![self.into()]
    }
}

impl IntoFilterValues for i64 {
    fn into_filter_values(self) -> Vec<FilterValue> {
        vec![self.into()]
    }
}

impl IntoFilterValues for f64 {
    fn into_filter_values(self) -> Vec<FilterValue> {
        vec![self.into()]
    }
}

impl IntoFilterValues for bool {
    fn into_filter_values(self) -> Vec<FilterValue> {
        vec![self.into()]
    }
}

impl IntoFilterValues for DateTime<Utc> {
    fn into_filter_values(self) -> Vec<FilterValue> {
        vec![self.into()]
    }
}

impl IntoFilterValues for ValueRange {
    fn into_filter_values(self) -> Vec<FilterValue> {
        vec![self.into()]
    }
}

impl<T: Into<FilterValue>> IntoFilterValues for Vec<T> {
    fn into_filter_values(self) -> Vec<FilterValue> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<FilterValue>, const N: usize> IntoFilterValues for [T; N] {
    fn into_filter_values(self) -> Vec<FilterValue> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<FilterValue> + Clone> IntoFilterValues for &[T] {
    fn into_filter_values(self) -> Vec<FilterValue> {
        self.iter().cloned().map(Into::into).collect()
    }
}

/// Restricts results to instances of a named entity class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFilter {
    /// Name of the entity class.
    pub class_name: String,
    /// Whether instances of subclasses also match. Resolving the actual
    /// class hierarchy is up to the adapter.
    pub include_subclasses: bool,
}

impl ClassFilter {
    /// Create a class filter that includes subclasses.
    pub fn new<C: Into<String>>(class_name: C) -> Self {
        ClassFilter {
            class_name: class_name.into(),
            include_subclasses: true,
        }
    }

    /// Set whether subclasses are included.
    pub fn include_subclasses(mut self, include: bool) -> Self {
        self.include_subclasses = include;
        self
    }
}

impl From<&str> for ClassFilter {
    fn from(class_name: &str) -> Self {
        ClassFilter::new(class_name)
    }
}

impl From<String> for ClassFilter {
    fn from(class_name: String) -> Self {
        ClassFilter::new(class_name)
    }
}
