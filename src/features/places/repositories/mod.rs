mod place_repository;

pub use place_repository::{PgPlaceRepository, PlaceRepository};
