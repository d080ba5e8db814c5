//! Map place search feature.
//!
//! Given a category tag and a latitude/longitude, finds points of interest
//! inside a fixed-size bounding box around that coordinate and annotates each
//! with a straight-line travel-time estimate relative to the input position.
//!
//! ## Operations
//!
//! | Operation | Description |
//! |-----------|-------------|
//! | `PlaceService::find_by_position(tag, lat, lng)` | Nearby places with estimated travel minutes |

pub mod dtos;
pub mod models;
pub mod repositories;
pub mod services;

pub use services::PlaceService;
