mod room_dto;

pub use room_dto::RoomDto;
