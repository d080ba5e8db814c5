use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::core::error::{AppError, Result};
use crate::features::rooms::models::{Room, RoomImage};
use crate::shared::geo::{BoundingBox, Position};

/// Read-only query gateway over persisted rooms. The production
/// implementation runs against Postgres; service tests substitute an
/// in-memory one.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// All persisted rooms whose coordinates fall inside `area`, both bounds
    /// inclusive on both axes, optionally narrowed to an inclusive daily
    /// price range. Order is by id ascending, images in stored order.
    async fn find_in_bounding_box(
        &self,
        area: &BoundingBox,
        min_daily_price: Option<i64>,
        max_daily_price: Option<i64>,
    ) -> Result<Vec<Room>>;
}

/// Row shape of the rooms table. Private: callers only ever see the plain
/// `Room` with its images attached.
#[derive(FromRow)]
struct RoomRow {
    id: i64,
    title: String,
    lat: f64,
    lng: f64,
    daily_price: i64,
    review_count: i32,
    rating_star_score: f32,
}

#[derive(FromRow)]
struct RoomImageRow {
    id: i64,
    room_id: i64,
    image_url: String,
}

pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    async fn find_in_bounding_box(
        &self,
        area: &BoundingBox,
        min_daily_price: Option<i64>,
        max_daily_price: Option<i64>,
    ) -> Result<Vec<Room>> {
        let rows = sqlx::query_as::<_, RoomRow>(
            r#"
            SELECT id, title, lat, lng, daily_price, review_count, rating_star_score
            FROM rooms
            WHERE lat BETWEEN $1 AND $2
            AND lng BETWEEN $3 AND $4
            AND ($5::BIGINT IS NULL OR daily_price >= $5)
            AND ($6::BIGINT IS NULL OR daily_price <= $6)
            ORDER BY id ASC
            "#,
        )
        .bind(area.south_west.lat)
        .bind(area.north_east.lat)
        .bind(area.south_west.lng)
        .bind(area.north_east.lng)
        .bind(min_daily_price)
        .bind(max_daily_price)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch rooms in bounding box: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::debug!("Bounding box query matched {} rooms", rows.len());

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let room_ids: Vec<i64> = rows.iter().map(|row| row.id).collect();

        let image_rows = sqlx::query_as::<_, RoomImageRow>(
            r#"
            SELECT id, room_id, image_url
            FROM room_images
            WHERE room_id = ANY($1)
            ORDER BY room_id ASC, id ASC
            "#,
        )
        .bind(&room_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch room images: {:?}", e);
            AppError::Database(e)
        })?;

        let mut images_by_room: HashMap<i64, Vec<RoomImage>> = HashMap::new();
        for image_row in image_rows {
            images_by_room
                .entry(image_row.room_id)
                .or_default()
                .push(RoomImage {
                    id: image_row.id,
                    image_url: image_row.image_url,
                });
        }

        let rooms = rows
            .into_iter()
            .map(|row| Room {
                images: images_by_room.remove(&row.id).unwrap_or_default(),
                id: row.id,
                title: row.title,
                position: Position::new(row.lat, row.lng),
                daily_price: row.daily_price,
                review_count: row.review_count,
                rating_star_score: row.rating_star_score,
            })
            .collect();

        Ok(rooms)
    }
}
