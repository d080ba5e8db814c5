use serde::{Deserialize, Serialize};

use crate::features::places::models::Place;
use crate::shared::geo::Position;

/// Response DTO for a place found near the caller's position. Derived fresh
/// per request, since `estimated_time` is relative to the input position;
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDto {
    pub id: i64,
    pub title: String,
    /// Serialized as an explicit null when the place has no image.
    pub image_url: Option<String>,
    /// Whole minutes of straight-line travel from the caller's position.
    pub estimated_time: i32,
}

impl PlaceDto {
    /// Pure field-copy mapping from a plain `Place`. The travel time is
    /// computed against `origin`, the caller's original input position.
    pub fn from_place(place: &Place, origin: &Position, average_speed_kmh: f64) -> Self {
        Self {
            id: place.id,
            title: place.title.clone(),
            image_url: place.image_url.clone(),
            estimated_time: place.estimated_travel_minutes(origin, average_speed_kmh),
        }
    }
}
