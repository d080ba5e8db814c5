//! Map room search feature.
//!
//! Given a latitude/longitude and an optional daily price range, finds room
//! listings inside a fixed-size bounding box around that coordinate. Each
//! result carries the listing's cover image, price and review summary.
//!
//! ## Operations
//!
//! | Operation | Description |
//! |-----------|-------------|
//! | `RoomService::find_by_position(lat, lng, min_daily_price, max_daily_price)` | Nearby rooms, optionally narrowed by price |

pub mod dtos;
pub mod models;
pub mod repositories;
pub mod services;

pub use services::RoomService;
