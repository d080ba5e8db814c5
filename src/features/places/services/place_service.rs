use crate::core::config::SearchConfig;
use crate::core::error::{AppError, Result};
use crate::features::places::dtos::PlaceDto;
use crate::features::places::repositories::PlaceRepository;
use crate::shared::geo::{BoundingBox, Position};

/// The only category tag the map search accepts.
const MAP_CATEGORY_TAG: &str = "map";

/// Orchestrates the map place search: tag gate, bounding-box derivation,
/// repository query, DTO mapping. Stateless across calls; a plain read path
/// with no transaction.
pub struct PlaceService<R> {
    repository: R,
    config: SearchConfig,
}

impl<R: PlaceRepository> PlaceService<R> {
    pub fn new(repository: R, config: SearchConfig) -> Self {
        Self { repository, config }
    }

    /// Finds places near `(lat, lng)`, each annotated with the estimated
    /// travel time from that exact input position.
    ///
    /// The tag must be `"map"` (case sensitive); anything else is an
    /// `InvalidArgument` error. The coordinates themselves are not range
    /// checked: the box is anchored wherever the caller points, and an
    /// off-globe input simply matches nothing.
    pub async fn find_by_position(&self, tag: &str, lat: f64, lng: f64) -> Result<Vec<PlaceDto>> {
        validate_tag(tag)?;

        let origin = Position::new(lat, lng);
        let area = BoundingBox::around(&origin, self.config.search_range_degrees);

        tracing::debug!(
            "Searching places around ({}, {}) within {} degrees",
            lat,
            lng,
            self.config.search_range_degrees
        );

        let places = self.repository.find_in_bounding_box(&area).await?;

        Ok(places
            .iter()
            .map(|place| PlaceDto::from_place(place, &origin, self.config.average_speed_kmh))
            .collect())
    }
}

fn validate_tag(tag: &str) -> Result<()> {
    if tag == MAP_CATEGORY_TAG {
        return Ok(());
    }

    Err(AppError::InvalidArgument(format!(
        "invalid category tag: '{}'",
        tag
    )))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use fake::faker::lorem::en::Word;
    use fake::Fake;
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::features::places::models::Place;

    /// In-memory stand-in for the Postgres gateway: filters a fixed set of
    /// places through the same inclusive bounds and records the queried box.
    struct InMemoryPlaceRepository {
        places: Vec<Place>,
        last_area: Mutex<Option<BoundingBox>>,
    }

    impl InMemoryPlaceRepository {
        fn with_places(places: Vec<Place>) -> Self {
            Self {
                places,
                last_area: Mutex::new(None),
            }
        }
    }

    #[async_trait::async_trait]
    impl PlaceRepository for InMemoryPlaceRepository {
        async fn find_in_bounding_box(&self, area: &BoundingBox) -> Result<Vec<Place>> {
            *self.last_area.lock().unwrap() = Some(*area);

            Ok(self
                .places
                .iter()
                .filter(|p| area.contains(&p.position))
                .cloned()
                .collect())
        }
    }

    fn place(id: i64, lat: f64, lng: f64) -> Place {
        Place {
            id,
            title: Word().fake(),
            image_url: None,
            position: Position::new(lat, lng),
        }
    }

    fn service_with(places: Vec<Place>) -> PlaceService<InMemoryPlaceRepository> {
        PlaceService::new(
            InMemoryPlaceRepository::with_places(places),
            SearchConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_rejects_any_tag_other_than_map() {
        let service = service_with(vec![place(1, 37.5, 127.0)]);

        for tag in ["", "MAP", "Map", "maps", "pension"] {
            let result = service.find_by_position(tag, 37.5, 127.0).await;

            assert!(
                matches!(result, Err(AppError::InvalidArgument(_))),
                "tag {:?} should be rejected",
                tag
            );
        }
    }

    #[tokio::test]
    async fn test_invalid_tag_rejected_regardless_of_coordinates() {
        let service = service_with(Vec::new());

        assert_err!(service.find_by_position("pension", 1000.0, 1000.0).await);
    }

    #[tokio::test]
    async fn test_coordinates_are_not_range_checked() {
        // 1000 is not a real latitude; the search still runs and comes back empty.
        let service = service_with(vec![place(1, 37.5, 127.0)]);

        let dtos = assert_ok!(service.find_by_position("map", 1000.0, 1000.0).await);

        assert!(dtos.is_empty());
    }

    #[tokio::test]
    async fn test_queries_box_two_degrees_around_input() {
        let service = service_with(Vec::new());

        assert_ok!(service.find_by_position("map", 37.5, 127.0).await);

        let area = service
            .repository
            .last_area
            .lock()
            .unwrap()
            .expect("repository was not queried");
        assert_eq!(area.south_west, Position::new(35.5, 125.0));
        assert_eq!(area.north_east, Position::new(39.5, 129.0));
    }

    #[tokio::test]
    async fn test_returns_only_places_inside_the_box() {
        let service = service_with(vec![
            place(1, 37.5, 127.0), // at the center
            place(2, 39.5, 129.0), // exactly on the north-east corner
            place(3, 40.0, 127.0), // north of the box
            place(4, 37.5, 124.0), // west of the box
        ]);

        let dtos = assert_ok!(service.find_by_position("map", 37.5, 127.0).await);

        let ids: Vec<i64> = dtos.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_empty_result_is_ok_not_error() {
        let service = service_with(Vec::new());

        let dtos = assert_ok!(service.find_by_position("map", 37.5, 127.0).await);

        assert!(dtos.is_empty());
    }

    #[tokio::test]
    async fn test_travel_time_is_relative_to_input_position() {
        let service = service_with(vec![place(1, 37.5, 127.0), place(2, 36.0, 126.0)]);

        let dtos = assert_ok!(service.find_by_position("map", 37.5, 127.0).await);

        // The place sitting on the input position is zero minutes away; the
        // other matches the model's own estimate from that same origin.
        let origin = Position::new(37.5, 127.0);
        let expected = place(2, 36.0, 126.0).estimated_travel_minutes(&origin, 80.0);

        assert_eq!(dtos[0].estimated_time, 0);
        assert_eq!(dtos[1].estimated_time, expected);
        assert!(dtos[1].estimated_time > 0);
    }
}
