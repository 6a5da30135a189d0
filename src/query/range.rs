//! Range filter values for querying within value intervals.

use serde::{Deserialize, Serialize};

use crate::query::filter::FilterValue;

/// Bound type for range filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Bound<T> {
    /// Inclusive bound.
    Included(T),
    /// Exclusive bound.
    Excluded(T),
    /// Unbounded (no limit).
    Unbounded,
}

impl<T: PartialOrd> Bound<T> {
    /// Check if a value satisfies this bound as a lower bound.
    pub fn contains_lower(&self, value: &T) -> bool {
        match self {
            Bound::Included(bound) => value >= bound,
            Bound::Excluded(bound) => value > bound,
            Bound::Unbounded => true,
        }
    }

    /// Check if a value satisfies this bound as an upper bound.
    pub fn contains_upper(&self, value: &T) -> bool {
        match self {
            Bound::Included(bound) => value <= bound,
            Bound::Excluded(bound) => value < bound,
            Bound::Unbounded => true,
        }
    }
}

/// A filter value matching field values within an interval.
///
/// Either end may be unbounded. How a backend compares values of different
/// kinds (text against numbers, say) is the adapter's business; the range
/// only carries the endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Lower bound of the range.
    pub lower: Bound<FilterValue>,
    /// Upper bound of the range.
    pub upper: Bound<FilterValue>,
}

impl ValueRange {
    /// Create a new range with both bounds inclusive.
    pub fn new<L, U>(lower: Option<L>, upper: Option<U>) -> Self
    where
        L: Into<FilterValue>,
        U: Into<FilterValue>,
    {
        let lower = match lower {
            Some(val) => Bound::Included(val.into()),
            None => Bound::Unbounded,
        };
        let upper = match upper {
            Some(val) => Bound::Included(val.into()),
            None => Bound::Unbounded,
        };

        ValueRange { lower, upper }
    }

    /// Create a range with custom bound types.
    pub fn with_bounds(lower: Bound<FilterValue>, upper: Bound<FilterValue>) -> Self {
        ValueRange { lower, upper }
    }

    /// Create a range for values greater than or equal to the given value.
    pub fn greater_than_or_equal<V: Into<FilterValue>>(value: V) -> Self {
        Self::with_bounds(Bound::Included(value.into()), Bound::Unbounded)
    }

    /// Create a range for values greater than the given value.
    pub fn greater_than<V: Into<FilterValue>>(value: V) -> Self {
        Self::with_bounds(Bound::Excluded(value.into()), Bound::Unbounded)
    }

    /// Create a range for values less than or equal to the given value.
    pub fn less_than_or_equal<V: Into<FilterValue>>(value: V) -> Self {
        Self::with_bounds(Bound::Unbounded, Bound::Included(value.into()))
    }

    /// Create a range for values less than the given value.
    pub fn less_than<V: Into<FilterValue>>(value: V) -> Self {
        Self::with_bounds(Bound::Unbounded, Bound::Excluded(value.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_contains() {
        let lower = Bound::Included(10i64);
        assert!(lower.contains_lower(&10));
        assert!(lower.contains_lower(&11));
        assert!(!lower.contains_lower(&9));

        let upper = Bound::Excluded(20i64);
        assert!(upper.contains_upper(&19));
        assert!(!upper.contains_upper(&20));

        let unbounded: Bound<i64> = Bound::Unbounded;
        assert!(unbounded.contains_lower(&i64::MIN));
        assert!(unbounded.contains_upper(&i64::MAX));
    }

    #[test]
    fn test_range_construction() {
        let range = ValueRange::new(Some(1i64), None::<i64>);
        assert_eq!(range.lower, Bound::Included(FilterValue::Integer(1)));
        assert_eq!(range.upper, Bound::Unbounded);

        let range = ValueRange::less_than(5i64);
        assert_eq!(range.lower, Bound::Unbounded);
        assert_eq!(range.upper, Bound::Excluded(FilterValue::Integer(5)));
    }
}
