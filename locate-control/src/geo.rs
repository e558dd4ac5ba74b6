//! Geographic primitives used by the control.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Length of the equator in meters, used to convert an accuracy radius to degrees.
const EQUATOR_LENGTH: f64 = 40_075_017.0;

/// Geographic point in WGS84 latitude/longitude degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLon {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl LatLon {
    /// Creates a new point.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Axis-aligned geographic rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLonBounds {
    south_west: LatLon,
    north_east: LatLon,
}

impl LatLonBounds {
    /// Creates bounds from two corners given in any order.
    pub fn new(a: LatLon, b: LatLon) -> Self {
        Self {
            south_west: LatLon::new(a.lat.min(b.lat), a.lon.min(b.lon)),
            north_east: LatLon::new(a.lat.max(b.lat), a.lon.max(b.lon)),
        }
    }

    /// Bounds of the area within `accuracy` meters around `center`.
    ///
    /// Near the poles the longitude span is clamped to the full circle.
    pub fn around(center: LatLon, accuracy: f64) -> Self {
        let lat_accuracy = 180.0 * accuracy / EQUATOR_LENGTH;
        let lon_accuracy = (lat_accuracy / center.lat.to_radians().cos()).min(180.0);

        Self::new(
            LatLon::new(center.lat - lat_accuracy, center.lon - lon_accuracy),
            LatLon::new(center.lat + lat_accuracy, center.lon + lon_accuracy),
        )
    }

    /// South-west corner.
    pub fn south_west(&self) -> LatLon {
        self.south_west
    }

    /// North-east corner.
    pub fn north_east(&self) -> LatLon {
        self.north_east
    }

    /// Center point of the bounds.
    pub fn center(&self) -> LatLon {
        LatLon::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lon + self.north_east.lon) / 2.0,
        )
    }

    /// Returns true if the point lies inside the bounds or on their edge.
    pub fn contains(&self, point: LatLon) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lon >= self.south_west.lon
            && point.lon <= self.north_east.lon
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn corners_are_normalized() {
        let bounds = LatLonBounds::new(LatLon::new(10.0, 20.0), LatLon::new(-10.0, -20.0));
        assert_eq!(bounds.south_west(), LatLon::new(-10.0, -20.0));
        assert_eq!(bounds.north_east(), LatLon::new(10.0, 20.0));
    }

    #[test]
    fn contains_includes_edges() {
        let bounds = LatLonBounds::new(LatLon::new(0.0, 0.0), LatLon::new(1.0, 1.0));
        assert!(bounds.contains(LatLon::new(0.5, 0.5)));
        assert!(bounds.contains(LatLon::new(1.0, 0.0)));
        assert!(!bounds.contains(LatLon::new(1.1, 0.5)));
        assert!(!bounds.contains(LatLon::new(0.5, -0.1)));
    }

    #[test]
    fn around_equator() {
        let bounds = LatLonBounds::around(LatLon::new(0.0, 0.0), EQUATOR_LENGTH / 360.0);
        assert_abs_diff_eq!(bounds.north_east().lat, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.north_east().lon, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.south_west().lat, -0.5, epsilon = 1e-9);
    }

    #[test]
    fn around_widens_longitude_with_latitude() {
        let center = LatLon::new(60.0, 10.0);
        let bounds = LatLonBounds::around(center, 1000.0);
        let lat_span = bounds.north_east().lat - bounds.south_west().lat;
        let lon_span = bounds.north_east().lon - bounds.south_west().lon;
        assert_abs_diff_eq!(lon_span, lat_span * 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.center().lat, center.lat, epsilon = 1e-9);
    }

    #[test]
    fn around_zero_accuracy_is_a_point() {
        let center = LatLon::new(51.505, -0.09);
        let bounds = LatLonBounds::around(center, 0.0);
        assert_eq!(bounds.south_west(), center);
        assert_eq!(bounds.north_east(), center);
    }
}
