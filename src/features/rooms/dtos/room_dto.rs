use serde::{Deserialize, Serialize};

use crate::features::rooms::models::Room;

/// Response DTO for a room listing. Flat read-side projection, request
/// scoped; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i64,
    pub title: String,
    /// Cover image, serialized as an explicit null for rooms without images.
    pub image_url: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub daily_price: i64,
    pub review_count: i32,
    pub rating_star_score: f32,
}

impl From<Room> for RoomDto {
    fn from(room: Room) -> Self {
        // The first image in stored order is the cover; no re-sorting.
        let image_url = room.images.into_iter().next().map(|image| image.image_url);

        Self {
            id: room.id,
            title: room.title,
            image_url,
            lat: room.position.lat,
            lng: room.position.lng,
            daily_price: room.daily_price,
            review_count: room.review_count,
            rating_star_score: room.rating_star_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::rooms::models::RoomImage;
    use crate::shared::geo::Position;

    fn room_with_images(images: Vec<RoomImage>) -> Room {
        Room {
            id: 42,
            title: "Hanok stay near the river".to_string(),
            position: Position::new(37.54, 127.02),
            daily_price: 95000,
            review_count: 128,
            rating_star_score: 4.5,
            images,
        }
    }

    #[test]
    fn test_room_without_images_maps_null_image_url() {
        let dto = RoomDto::from(room_with_images(Vec::new()));

        assert_eq!(dto.image_url, None);

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json["imageUrl"].is_null());
    }

    #[test]
    fn test_first_image_in_stored_order_is_the_cover() {
        let dto = RoomDto::from(room_with_images(vec![
            RoomImage {
                id: 9,
                image_url: "https://img.example.com/front.jpg".to_string(),
            },
            RoomImage {
                id: 3,
                image_url: "https://img.example.com/bedroom.jpg".to_string(),
            },
        ]));

        // First in sequence order, even though its id sorts later.
        assert_eq!(dto.image_url.as_deref(), Some("https://img.example.com/front.jpg"));
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = serde_json::to_value(RoomDto::from(room_with_images(Vec::new()))).unwrap();

        assert_eq!(json["id"], 42);
        assert_eq!(json["lat"], 37.54);
        assert_eq!(json["lng"], 127.02);
        assert_eq!(json["dailyPrice"], 95000);
        assert_eq!(json["reviewCount"], 128);
        // 4.5 is exactly representable, so the f32 to f64 widening is lossless.
        assert_eq!(json["ratingStarScore"], 4.5);
    }
}
