//! Folio Model - value model layer for the Folio document store.
//!
//! This crate provides the dynamically typed value representation shared by
//! the storage, index and query layers:
//!
//! - `Value`: a document field value holding one of eleven kinds of payload
//! - `ValueKind`: the payload discriminant, with the cross-kind precedence
//! - `MapValue`: the object payload, a map with sorted, unique string keys
//! - `Timestamp` / `ServerTimestamp`: committed and pending points in time
//! - `GeoPoint`: a geographic coordinate
//! - `Comparator` and friends: order-aware wrappers for index scans
//! - `Error`: error types for checked extraction and validation
//!
//! Values of different kinds order against each other under a single total
//! order, so mixed-kind collections sort deterministically and range queries
//! behave the same everywhere.
//!
//! # Example
//!
//! ```rust
//! use folio_model::{MapValue, Value};
//!
//! let mut doc = MapValue::new();
//! doc.insert("name".into(), Value::from("Alice"));
//! doc.insert("age".into(), Value::from(25i64));
//!
//! let value = Value::from(doc);
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("Alice"));
//!
//! // Mixed kinds still sort deterministically.
//! let mut values = vec![Value::from("a"), Value::from(3.5), Value::NULL];
//! values.sort();
//! assert_eq!(values[0], Value::NULL);
//! ```

#![no_std]

extern crate alloc;

mod comparator;
mod error;
mod geo_point;
mod map;
mod numeric;
mod timestamp;
mod value;

pub use comparator::{Comparator, CompositeComparator, Order, ValueComparator};
pub use error::{Error, Result};
pub use geo_point::GeoPoint;
pub use map::MapValue;
pub use timestamp::{ServerTimestamp, Timestamp};
pub use value::{Value, ValueKind};
