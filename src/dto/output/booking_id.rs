use serde::Serialize;

#[derive(Serialize)]
pub struct BookingId {
    pub id: String,
}
