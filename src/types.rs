pub type ShipId = String;
pub type Year = i32;
