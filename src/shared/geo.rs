/// Earth's radius in kilometers (for the haversine formula)
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair. Value object: constructed once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle (haversine) distance to another position, in kilometers.
    pub fn distance_km(&self, other: &Position) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

/// Rectangular coordinate range used to filter candidates before any distance
/// computation. Both bounds are inclusive on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south_west: Position,
    pub north_east: Position,
}

impl BoundingBox {
    /// Square box of half-width `range_degrees` centered on `center`.
    ///
    /// Plain coordinate arithmetic: no wraparound at the antimeridian and no
    /// clamping at the poles, matching the upstream search behavior.
    pub fn around(center: &Position, range_degrees: f64) -> Self {
        Self {
            south_west: Position::new(center.lat - range_degrees, center.lng - range_degrees),
            north_east: Position::new(center.lat + range_degrees, center.lng + range_degrees),
        }
    }

    /// Whether `position` falls inside the box, corners and edges included.
    pub fn contains(&self, position: &Position) -> bool {
        position.lat >= self.south_west.lat
            && position.lat <= self.north_east.lat
            && position.lng >= self.south_west.lng
            && position.lng <= self.north_east.lng
    }
}
