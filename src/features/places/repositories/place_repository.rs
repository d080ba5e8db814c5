use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::core::error::{AppError, Result};
use crate::features::places::models::Place;
use crate::shared::geo::{BoundingBox, Position};

/// Read-only query gateway over persisted places. The production
/// implementation runs against Postgres; service tests substitute an
/// in-memory one.
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// All persisted places whose coordinates fall inside `area`, both
    /// bounds inclusive on both axes. Order is by id ascending.
    async fn find_in_bounding_box(&self, area: &BoundingBox) -> Result<Vec<Place>>;
}

/// Row shape of the places table. Private: callers only ever see the plain
/// `Place`.
#[derive(FromRow)]
struct PlaceRow {
    id: i64,
    title: String,
    image_url: Option<String>,
    lat: f64,
    lng: f64,
}

impl From<PlaceRow> for Place {
    fn from(row: PlaceRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            image_url: row.image_url,
            position: Position::new(row.lat, row.lng),
        }
    }
}

pub struct PgPlaceRepository {
    pool: PgPool,
}

impl PgPlaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaceRepository for PgPlaceRepository {
    async fn find_in_bounding_box(&self, area: &BoundingBox) -> Result<Vec<Place>> {
        let rows = sqlx::query_as::<_, PlaceRow>(
            r#"
            SELECT id, title, image_url, lat, lng
            FROM places
            WHERE lat BETWEEN $1 AND $2
            AND lng BETWEEN $3 AND $4
            ORDER BY id ASC
            "#,
        )
        .bind(area.south_west.lat)
        .bind(area.north_east.lat)
        .bind(area.south_west.lng)
        .bind(area.north_east.lng)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch places in bounding box: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::debug!("Bounding box query matched {} places", rows.len());

        Ok(rows.into_iter().map(Place::from).collect())
    }
}
