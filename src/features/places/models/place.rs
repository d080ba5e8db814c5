use crate::shared::geo::Position;

const MINUTES_PER_HOUR: f64 = 60.0;

/// A point of interest shown on the map search. Identity is assigned once by
/// storage; this core only ever reads places.
#[derive(Debug, Clone)]
pub struct Place {
    pub id: i64,
    pub title: String,
    pub image_url: Option<String>,
    pub position: Position,
}

impl Place {
    /// Estimated travel time in whole minutes from `origin`, assuming
    /// straight-line travel at `average_speed_kmh`. No routing and no
    /// traffic model. Fractions of a minute are truncated toward zero.
    pub fn estimated_travel_minutes(&self, origin: &Position, average_speed_kmh: f64) -> i32 {
        let distance_km = self.position.distance_km(origin);

        (distance_km / average_speed_kmh * MINUTES_PER_HOUR) as i32
    }
}
