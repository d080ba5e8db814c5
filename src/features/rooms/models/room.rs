use crate::shared::geo::Position;

/// A lodging listing. Images are kept in stored order; the first one, when
/// present, is the listing's cover image.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: i64,
    pub title: String,
    pub position: Position,
    pub daily_price: i64,
    pub review_count: i32,
    pub rating_star_score: f32,
    pub images: Vec<RoomImage>,
}

#[derive(Debug, Clone)]
pub struct RoomImage {
    pub id: i64,
    pub image_url: String,
}
