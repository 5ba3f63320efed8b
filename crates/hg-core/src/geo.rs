//! Geographic coordinate type and the distance model.
//!
//! Distances are great-circle distances on a sphere of radius
//! [`EARTH_RADIUS_MI`] statute miles, computed with the spherical law of
//! cosines.  `f64` throughout: road lengths are summed hop by hop and the
//! law of cosines loses precision quickly at short range in `f32`.

/// Radius of the Earth in statute miles.
pub const EARTH_RADIUS_MI: f64 = 3963.1;

/// Per-axis tolerance (degrees) under which two points are the same place.
const TOLERANCE_DEG: f64 = 0.00001;

/// A latitude/longitude pair in decimal degrees.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`; this
/// is a precondition, not checked.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance in statute miles.
    ///
    /// Returns exactly `0.0` for points that are [`approx_eq`](Self::approx_eq).
    /// The `acos` argument is clamped to `[-1, 1]` so near-coincident points
    /// outside the tolerance never produce `NaN`.
    pub fn distance_mi(self, other: GeoPoint) -> f64 {
        if self.approx_eq(other) {
            return 0.0;
        }

        let lat1 = self.lat.to_radians();
        let lng1 = self.lng.to_radians();
        let lat2 = other.lat.to_radians();
        let lng2 = other.lng.to_radians();

        // Grouped per point so swapping `self` and `other` only swaps the
        // operands of each multiplication, keeping the result symmetric.
        let cos_angle = (lat1.cos() * lng1.cos()) * (lat2.cos() * lng2.cos())
            + (lat1.cos() * lng1.sin()) * (lat2.cos() * lng2.sin())
            + lat1.sin() * lat2.sin();

        cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_MI
    }

    /// Tolerance equality: both axes differ by less than `1e-5` degrees.
    #[inline]
    pub fn approx_eq(self, other: GeoPoint) -> bool {
        (other.lat - self.lat).abs() < TOLERANCE_DEG && (other.lng - self.lng).abs() < TOLERANCE_DEG
    }
}

/// Cumulative great-circle length of a polyline, in statute miles.
///
/// Hops are summed front to back starting from `0.0`, so the same sequence
/// always yields the same bits.  Fewer than two points → `0.0`.
pub fn path_length_mi<I>(points: I) -> f64
where
    I: IntoIterator<Item = GeoPoint>,
{
    let mut points = points.into_iter();
    let Some(mut prev) = points.next() else {
        return 0.0;
    };

    let mut length = 0.0;
    for p in points {
        length += prev.distance_mi(p);
        prev = p;
    }
    length
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `{:?}` keeps the trailing `.0` on whole degrees.
        write!(f, "({:?},{:?})", self.lat, self.lng)
    }
}
