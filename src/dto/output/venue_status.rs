use serde::Serialize;

#[derive(Serialize)]
pub struct VenueStatus {
    pub capacity: u32,
    pub committed_seats: u64,
    pub remaining_seats: u64,
    pub is_full: bool,
}
