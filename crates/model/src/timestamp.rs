//! Timestamp types for the Folio document store.
//!
//! `Timestamp` is a point in time with nanosecond resolution, independent of
//! any time zone or calendar. `ServerTimestamp` is a placeholder for a
//! server-assigned time that has not been committed yet.

use crate::error::{Error, Result};

/// Upper bound (exclusive) for the nanosecond field.
const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// A point in time, as seconds since the Unix epoch plus a nanosecond offset.
///
/// The nanosecond field counts forward in time even when `seconds` is
/// negative, and is always in `0..=999_999_999`. Ordering is by `seconds`,
/// then `nanos`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

impl Timestamp {
    /// The epoch origin, `(0, 0)`.
    pub const ORIGIN: Timestamp = Timestamp {
        seconds: 0,
        nanos: 0,
    };

    /// Creates a timestamp from seconds since the epoch and a nanosecond
    /// offset.
    ///
    /// Panics if `nanos` is not in `0..=999_999_999`; callers holding
    /// unvalidated input should use [`Timestamp::try_new`].
    pub fn new(seconds: i64, nanos: i32) -> Self {
        assert!(
            (0..NANOS_PER_SECOND).contains(&nanos),
            "timestamp nanos out of range: {}",
            nanos
        );
        Self { seconds, nanos }
    }

    /// Checked variant of [`Timestamp::new`].
    pub fn try_new(seconds: i64, nanos: i32) -> Result<Self> {
        if (0..NANOS_PER_SECOND).contains(&nanos) {
            Ok(Self { seconds, nanos })
        } else {
            Err(Error::invalid_timestamp(seconds, nanos))
        }
    }

    /// Seconds since the Unix epoch.
    #[inline]
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Nanoseconds after `seconds`, counting forward in time.
    #[inline]
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

/// A pending server-assigned time.
///
/// Carries the client's local estimate of what the server will assign and the
/// prior committed value it will replace (the origin when there is none).
/// Pending timestamps order and compare by `local` alone; `previous` is
/// bookkeeping for the document layer and never participates.
#[derive(Clone, Copy, Debug)]
pub struct ServerTimestamp {
    local: Timestamp,
    previous: Timestamp,
}

impl ServerTimestamp {
    /// Creates a pending timestamp from an explicit local estimate and prior
    /// committed value. No clock is ever read here.
    pub fn new(local: Timestamp, previous: Timestamp) -> Self {
        Self { local, previous }
    }

    /// The client's local estimate of the assigned time.
    #[inline]
    pub fn local(&self) -> Timestamp {
        self.local
    }

    /// The prior committed value this will replace.
    #[inline]
    pub fn previous(&self) -> Timestamp {
        self.previous
    }
}

impl PartialEq for ServerTimestamp {
    fn eq(&self, other: &Self) -> bool {
        self.local == other.local
    }
}

impl Eq for ServerTimestamp {}

impl PartialOrd for ServerTimestamp {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ServerTimestamp {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.local.cmp(&other.local)
    }
}
