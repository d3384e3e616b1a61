//! Value type definitions for the Folio document store.
//!
//! This module defines the `Value` enum, which represents any field value a
//! document can hold, together with the total order used by indexes, sorting
//! and range queries.

use crate::error::{Error, Result};
use crate::geo_point::GeoPoint;
use crate::map::MapValue;
use crate::numeric;
use crate::timestamp::{ServerTimestamp, Timestamp};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;

/// The kind of payload held by a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Absent value
    Null,
    /// Boolean value
    Boolean,
    /// 64-bit signed integer
    Integer,
    /// 64-bit IEEE 754 floating point
    Double,
    /// Committed point in time
    Timestamp,
    /// Pending server-assigned time
    ServerTimestamp,
    /// UTF-8 string
    String,
    /// Raw byte sequence
    Blob,
    /// Geographic coordinate
    GeoPoint,
    /// Ordered sequence of values
    Array,
    /// String-keyed mapping with sorted, unique keys
    Object,
}

impl ValueKind {
    /// Fixed precedence used when two kinds cannot be compared by payload.
    ///
    /// Kinds whose values compare against each other directly share one
    /// slot: Integer with Double, Timestamp with ServerTimestamp.
    fn order_rank(self) -> u8 {
        match self {
            ValueKind::Null => 0,
            ValueKind::Boolean => 1,
            ValueKind::Integer | ValueKind::Double => 2,
            ValueKind::Timestamp | ValueKind::ServerTimestamp => 3,
            ValueKind::String => 4,
            ValueKind::Blob => 5,
            ValueKind::GeoPoint => 6,
            ValueKind::Array => 7,
            ValueKind::Object => 8,
        }
    }

    /// Returns true if values of these two kinds compare by payload rather
    /// than by kind precedence: identical kinds, Integer against Double, and
    /// Timestamp against ServerTimestamp.
    pub fn is_comparable_with(self, other: ValueKind) -> bool {
        self.order_rank() == other.order_rank()
    }
}

/// A field value in a Folio document.
///
/// A `Value` holds exactly one of eleven kinds of payload. Any two values
/// can be ordered against each other: kinds sharing a precedence slot
/// compare by payload, every other mixed-kind pair falls back to the fixed
/// kind precedence. The resulting order is total, so mixed-kind collections
/// sort deterministically.
///
/// Equality is defined by the order (`cmp` returning `Equal`), so
/// `Value::from(5i64) == Value::from(5.0)` and two pending timestamps with
/// the same local estimate are equal.
#[derive(Clone, Debug)]
pub enum Value {
    /// Absent value, sorts before everything else
    Null,
    /// Boolean value
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit IEEE 754 floating point; may be NaN or infinite
    Double(f64),
    /// Committed point in time
    Timestamp(Timestamp),
    /// Pending server-assigned time; sorts after every committed timestamp
    ServerTimestamp(ServerTimestamp),
    /// UTF-8 string
    String(String),
    /// Raw byte sequence
    Blob(Vec<u8>),
    /// Geographic coordinate
    GeoPoint(GeoPoint),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// String-keyed mapping with sorted, unique keys
    Object(MapValue),
}

impl Value {
    /// The shared null instance.
    pub const NULL: Value = Value::Null;
    /// The shared true instance.
    pub const TRUE: Value = Value::Boolean(true);
    /// The shared false instance.
    pub const FALSE: Value = Value::Boolean(false);
    /// The shared not-a-number instance.
    pub const NAN: Value = Value::Double(f64::NAN);

    /// Returns the shared boolean instance for `value`.
    #[inline]
    pub fn boolean(value: bool) -> Value {
        if value {
            Value::TRUE
        } else {
            Value::FALSE
        }
    }

    /// Creates a pending server-assigned time from an explicit local
    /// estimate and prior committed value.
    pub fn server_timestamp(local: Timestamp, previous: Timestamp) -> Value {
        Value::ServerTimestamp(ServerTimestamp::new(local, previous))
    }

    /// Returns the kind of payload this value holds.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Double(_) => ValueKind::Double,
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::ServerTimestamp(_) => ValueKind::ServerTimestamp,
            Value::String(_) => ValueKind::String,
            Value::Blob(_) => ValueKind::Blob,
            Value::GeoPoint(_) => ValueKind::GeoPoint,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns the zero value of the given kind.
    ///
    /// Container kinds start empty without allocating; timestamp kinds start
    /// at the epoch origin rather than reading a clock.
    pub fn default_for_kind(kind: ValueKind) -> Value {
        match kind {
            ValueKind::Null => Value::NULL,
            ValueKind::Boolean => Value::FALSE,
            ValueKind::Integer => Value::Integer(0),
            ValueKind::Double => Value::Double(0.0),
            ValueKind::Timestamp => Value::Timestamp(Timestamp::ORIGIN),
            ValueKind::ServerTimestamp => {
                Value::server_timestamp(Timestamp::ORIGIN, Timestamp::ORIGIN)
            }
            ValueKind::String => Value::String(String::new()),
            ValueKind::Blob => Value::Blob(Vec::new()),
            ValueKind::GeoPoint => Value::GeoPoint(GeoPoint::new(0.0, 0.0)),
            ValueKind::Array => Value::Array(Vec::new()),
            ValueKind::Object => Value::Object(MapValue::new()),
        }
    }

    /// Moves the payload out in constant time, leaving `Null` behind.
    ///
    /// Heap-backed payloads transfer their storage without copying it.
    pub fn take(&mut self) -> Value {
        core::mem::take(self)
    }

    /// Returns true if this value is Null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean if this is a Boolean, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the integer if this is an Integer, None otherwise.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float if this is a Double, None otherwise.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the timestamp if this is a committed Timestamp, None
    /// otherwise.
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the pending timestamp if this is a ServerTimestamp, None
    /// otherwise.
    pub fn as_server_timestamp(&self) -> Option<ServerTimestamp> {
        match self {
            Value::ServerTimestamp(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None
    /// otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Returns a reference to the bytes if this is a Blob, None otherwise.
    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            Value::Blob(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Returns the coordinate if this is a GeoPoint, None otherwise.
    pub fn as_geo_point(&self) -> Option<GeoPoint> {
        match self {
            Value::GeoPoint(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns a reference to the elements if this is an Array, None
    /// otherwise.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Returns a mutable reference to the elements if this is an Array, None
    /// otherwise.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Returns a reference to the map if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&MapValue> {
        match self {
            Value::Object(v) => Some(v),
            _ => None,
        }
    }

    /// Returns a mutable reference to the map if this is an Object, None
    /// otherwise.
    pub fn as_object_mut(&mut self) -> Option<&mut MapValue> {
        match self {
            Value::Object(v) => Some(v),
            _ => None,
        }
    }

    /// Gets a field by key if this is an Object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Gets an element by index if this is an Array.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|arr| arr.get(index))
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl PartialEq for Value {
    /// Equality is implied by the total order rather than stored separately.
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    /// The total order over all values.
    ///
    /// Kinds sharing a precedence slot compare by payload: integers against
    /// doubles exactly (no lossy casts), committed timestamps below pending
    /// ones, pending timestamps by local estimate. Every other mixed-kind
    /// pair orders by kind precedence. NaN sorts below every number, arrays
    /// and objects compare lexicographically and recursively.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Integer(a), Value::Double(b)) => numeric::cmp_i64_f64(*a, *b),
            (Value::Double(a), Value::Integer(b)) => numeric::cmp_i64_f64(*b, *a).reverse(),
            (Value::Double(a), Value::Double(b)) => numeric::cmp_f64(*a, *b),
            (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
            // A committed time always sorts before a pending one, whatever
            // the pending local estimate says.
            (Value::Timestamp(_), Value::ServerTimestamp(_)) => Ordering::Less,
            (Value::ServerTimestamp(_), Value::Timestamp(_)) => Ordering::Greater,
            (Value::ServerTimestamp(a), Value::ServerTimestamp(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Blob(a), Value::Blob(b)) => a.cmp(b),
            (Value::GeoPoint(a), Value::GeoPoint(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => a.cmp(b),
            (Value::Object(a), Value::Object(b)) => a.cmp(b),
            // Remaining pairs are of non-comparable kinds with distinct
            // ranks.
            _ => self.kind().order_rank().cmp(&other.kind().order_rank()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Value::Timestamp(v)
    }
}

impl From<ServerTimestamp> for Value {
    fn from(v: ServerTimestamp) -> Self {
        Value::ServerTimestamp(v)
    }
}

impl From<GeoPoint> for Value {
    fn from(v: GeoPoint) -> Self {
        Value::GeoPoint(v)
    }
}

impl From<String> for Value {
    /// Takes ownership of the string without copying its buffer.
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    /// Copying overload of the String construction.
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    /// Takes ownership of the bytes without copying them.
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl From<&[u8]> for Value {
    /// Copying overload of the Blob construction.
    fn from(v: &[u8]) -> Self {
        Value::Blob(v.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    /// Takes ownership of the elements without copying them.
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<MapValue> for Value {
    /// Takes ownership of the map without copying its entries.
    fn from(v: MapValue) -> Self {
        Value::Object(v)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Value::Null,
        }
    }
}

macro_rules! impl_try_from_value {
    ($target:ty, $variant:ident) => {
        impl TryFrom<Value> for $target {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(Error::type_mismatch(ValueKind::$variant, other.kind())),
                }
            }
        }
    };
}

impl_try_from_value!(bool, Boolean);
impl_try_from_value!(i64, Integer);
impl_try_from_value!(f64, Double);
impl_try_from_value!(Timestamp, Timestamp);
impl_try_from_value!(ServerTimestamp, ServerTimestamp);
impl_try_from_value!(String, String);
impl_try_from_value!(Vec<u8>, Blob);
impl_try_from_value!(GeoPoint, GeoPoint);
impl_try_from_value!(Vec<Value>, Array);
impl_try_from_value!(MapValue, Object);
