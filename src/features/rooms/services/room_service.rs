use crate::core::config::SearchConfig;
use crate::core::error::Result;
use crate::features::rooms::dtos::RoomDto;
use crate::features::rooms::repositories::RoomRepository;
use crate::shared::geo::{BoundingBox, Position};

/// Orchestrates the map room search: bounding-box derivation, optional
/// daily-price narrowing, repository query, DTO mapping. Unlike the place
/// search there is no category tag to gate on.
pub struct RoomService<R> {
    repository: R,
    config: SearchConfig,
}

impl<R: RoomRepository> RoomService<R> {
    pub fn new(repository: R, config: SearchConfig) -> Self {
        Self { repository, config }
    }

    /// Finds rooms near `(lat, lng)`, optionally narrowed to an inclusive
    /// daily price range. A `None` bound leaves that side open.
    ///
    /// The coordinates are not range checked: the box is anchored wherever
    /// the caller points, and an off-globe input simply matches nothing.
    pub async fn find_by_position(
        &self,
        lat: f64,
        lng: f64,
        min_daily_price: Option<i64>,
        max_daily_price: Option<i64>,
    ) -> Result<Vec<RoomDto>> {
        let origin = Position::new(lat, lng);
        let area = BoundingBox::around(&origin, self.config.search_range_degrees);

        tracing::debug!(
            "Searching rooms around ({}, {}) within {} degrees",
            lat,
            lng,
            self.config.search_range_degrees
        );

        let rooms = self
            .repository
            .find_in_bounding_box(&area, min_daily_price, max_daily_price)
            .await?;

        Ok(rooms.into_iter().map(RoomDto::from).collect())
    }
}
