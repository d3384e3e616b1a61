//! Geographic coordinate type for the Folio document store.

use crate::error::{Error, Result};
use crate::numeric::cmp_f64;
use core::cmp::Ordering;

/// A geographic point, as a WGS84 latitude/longitude pair.
///
/// Ordering is by latitude, then longitude, using the same total float order
/// as double values.
#[derive(Clone, Copy, Debug)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a geo point from a latitude in `[-90, 90]` and a longitude in
    /// `[-180, 180]`.
    ///
    /// Panics on out-of-range (or NaN) coordinates; callers holding
    /// unvalidated input should use [`GeoPoint::try_new`].
    pub fn new(latitude: f64, longitude: f64) -> Self {
        assert!(
            (-90.0..=90.0).contains(&latitude),
            "latitude out of range: {}",
            latitude
        );
        assert!(
            (-180.0..=180.0).contains(&longitude),
            "longitude out of range: {}",
            longitude
        );
        Self {
            latitude,
            longitude,
        }
    }

    /// Checked variant of [`GeoPoint::new`].
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(Error::invalid_geo_point(latitude, longitude))
        }
    }

    /// Latitude in degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GeoPoint {}

impl PartialOrd for GeoPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GeoPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_f64(self.latitude, other.latitude)
            .then_with(|| cmp_f64(self.longitude, other.longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_ordering_latitude_first() {
        assert!(GeoPoint::new(1.0, 100.0) < GeoPoint::new(2.0, -100.0));
        assert!(GeoPoint::new(1.0, -100.0) < GeoPoint::new(1.0, 100.0));
        assert_eq!(GeoPoint::new(1.0, 2.0), GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn test_geo_point_accessors() {
        let p = GeoPoint::new(-45.5, 170.25);
        assert_eq!(p.latitude(), -45.5);
        assert_eq!(p.longitude(), 170.25);
    }

    #[test]
    fn test_geo_point_try_new_validates_ranges() {
        assert!(GeoPoint::try_new(90.0, 180.0).is_ok());
        assert!(GeoPoint::try_new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::try_new(90.5, 0.0).is_err());
        assert!(GeoPoint::try_new(0.0, -180.5).is_err());
        assert!(GeoPoint::try_new(f64::NAN, 0.0).is_err());
    }

    #[test]
    #[should_panic(expected = "latitude out of range")]
    fn test_geo_point_new_panics_out_of_range() {
        let _ = GeoPoint::new(91.0, 0.0);
    }
}
