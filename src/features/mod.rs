pub mod places;
pub mod rooms;
