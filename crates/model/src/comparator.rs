//! Comparators over document values.
//!
//! This module wraps the value total order for consumers that scan in a
//! chosen direction or order by several fields at once, such as index and
//! range-query layers.

use crate::value::Value;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// Sort order for a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Ascending order (smallest first)
    Asc,
    /// Descending order (largest first)
    Desc,
}

impl Order {
    /// Applies this order to a comparison result.
    #[inline]
    pub fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            Order::Asc => ord,
            Order::Desc => ord.reverse(),
        }
    }
}

/// Trait for comparing sort keys.
pub trait Comparator<K> {
    /// Compares two keys according to the comparator's ordering.
    fn compare(&self, a: &K, b: &K) -> Ordering;

    /// Returns true if a < b according to this comparator.
    fn is_less(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns true if a <= b according to this comparator.
    fn is_less_or_equal(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    /// Returns true if a > b according to this comparator.
    fn is_greater(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Returns true if a >= b according to this comparator.
    fn is_greater_or_equal(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) != Ordering::Less
    }

    /// Returns true if a == b according to this comparator.
    fn is_equal(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

/// A comparator over single values, honoring the cross-kind total order.
#[derive(Clone, Debug)]
pub struct ValueComparator {
    order: Order,
}

impl ValueComparator {
    /// Creates a value comparator with the given order.
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    /// Creates an ascending comparator.
    pub fn asc() -> Self {
        Self::new(Order::Asc)
    }

    /// Creates a descending comparator.
    pub fn desc() -> Self {
        Self::new(Order::Desc)
    }

    /// Returns the order of this comparator.
    pub fn order(&self) -> Order {
        self.order
    }
}

impl Comparator<Value> for ValueComparator {
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        self.order.apply(a.cmp(b))
    }
}

/// A comparator for composite keys with a per-position order.
///
/// Positions missing from the shorter key sort first.
#[derive(Clone, Debug)]
pub struct CompositeComparator {
    orders: Vec<Order>,
}

impl CompositeComparator {
    /// Creates a composite comparator with the given per-position orders.
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Creates a comparator over n positions sharing one order.
    pub fn uniform(n: usize, order: Order) -> Self {
        Self::new((0..n).map(|_| order).collect())
    }

    /// Returns the per-position orders of this comparator.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

impl Comparator<Vec<Value>> for CompositeComparator {
    fn compare(&self, a: &Vec<Value>, b: &Vec<Value>) -> Ordering {
        for (i, order) in self.orders.iter().enumerate() {
            let cmp = match (a.get(i), b.get(i)) {
                (Some(av), Some(bv)) => order.apply(av.cmp(bv)),
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            if cmp != Ordering::Equal {
                return cmp;
            }
        }
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_order_apply() {
        assert_eq!(Order::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Order::Asc.apply(Ordering::Greater), Ordering::Greater);
        assert_eq!(Order::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Order::Desc.apply(Ordering::Greater), Ordering::Less);
    }

    #[test]
    fn test_value_comparator_asc() {
        let cmp = ValueComparator::asc();
        assert_eq!(
            cmp.compare(&Value::Integer(1), &Value::Integer(2)),
            Ordering::Less
        );
        assert_eq!(
            cmp.compare(&Value::Integer(2), &Value::Double(2.0)),
            Ordering::Equal
        );
        assert_eq!(cmp.order(), Order::Asc);
    }

    #[test]
    fn test_value_comparator_desc_reverses_kind_precedence() {
        let cmp = ValueComparator::desc();
        // Null sorts first ascending, so it sorts last descending.
        assert_eq!(
            cmp.compare(&Value::NULL, &Value::from("text")),
            Ordering::Greater
        );
        assert_eq!(
            cmp.compare(&Value::Integer(1), &Value::Integer(2)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_comparator_helpers() {
        let cmp = ValueComparator::asc();
        let one = Value::Integer(1);
        let two = Value::Integer(2);

        assert!(cmp.is_less(&one, &two));
        assert!(cmp.is_less_or_equal(&one, &two));
        assert!(cmp.is_less_or_equal(&one, &one));
        assert!(cmp.is_greater(&two, &one));
        assert!(cmp.is_greater_or_equal(&two, &one));
        assert!(cmp.is_greater_or_equal(&one, &one));
        assert!(cmp.is_equal(&one, &one));
    }

    #[test]
    fn test_composite_comparator() {
        let cmp = CompositeComparator::new(vec![Order::Asc, Order::Desc]);

        // First position decides.
        let a = vec![Value::Integer(1), Value::Integer(10)];
        let b = vec![Value::Integer(2), Value::Integer(5)];
        assert_eq!(cmp.compare(&a, &b), Ordering::Less);

        // Tie on the first position, second position is descending.
        let c = vec![Value::Integer(1), Value::Integer(5)];
        assert_eq!(cmp.compare(&a, &c), Ordering::Less);
        assert_eq!(cmp.compare(&c, &a), Ordering::Greater);

        assert_eq!(cmp.compare(&a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_composite_comparator_mixed_kinds() {
        let cmp = CompositeComparator::uniform(2, Order::Asc);
        assert_eq!(cmp.orders(), &[Order::Asc, Order::Asc]);

        // Null sorts before any other kind in each position.
        let a = vec![Value::NULL, Value::Integer(9)];
        let b = vec![Value::Integer(0), Value::Integer(0)];
        assert_eq!(cmp.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_composite_comparator_short_key_sorts_first() {
        let cmp = CompositeComparator::uniform(3, Order::Asc);
        let short = vec![Value::Integer(1)];
        let long = vec![Value::Integer(1), Value::Integer(2)];
        assert_eq!(cmp.compare(&short, &long), Ordering::Less);
        assert_eq!(cmp.compare(&long, &short), Ordering::Greater);
    }
}
