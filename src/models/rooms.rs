use serde::{Deserialize, Serialize};

/// Upper bound for every room count field.
pub const MAX_ROOM_COUNT: u8 = 6;

/// Rooms and areas covered by the cleaning. Descriptive metadata on the
/// booking; never feeds the price. The backend contract keeps these keys
/// camelCase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSelection {
    pub master_bedroom: bool,
    pub master_bathroom: bool,
    pub dining_room: bool,
    pub kitchen: bool,
    pub living_room: bool,
    pub media_room: bool,
    pub game_room: bool,
    pub office: bool,
    other_bedrooms: u8,
    other_full_bathrooms: u8,
    half_bathrooms: u8,
}

impl RoomSelection {
    pub fn other_bedrooms(&self) -> u8 {
        self.other_bedrooms
    }

    pub fn other_full_bathrooms(&self) -> u8 {
        self.other_full_bathrooms
    }

    pub fn half_bathrooms(&self) -> u8 {
        self.half_bathrooms
    }

    pub fn set_other_bedrooms(&mut self, count: u8) {
        self.other_bedrooms = count.min(MAX_ROOM_COUNT);
    }

    pub fn set_other_full_bathrooms(&mut self, count: u8) {
        self.other_full_bathrooms = count.min(MAX_ROOM_COUNT);
    }

    pub fn set_half_bathrooms(&mut self, count: u8) {
        self.half_bathrooms = count.min(MAX_ROOM_COUNT);
    }
}
