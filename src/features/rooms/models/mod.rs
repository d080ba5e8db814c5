mod room;

pub use room::{Room, RoomImage};
