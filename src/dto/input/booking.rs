use serde::Deserialize;
use time::OffsetDateTime;

///
/// Contact email is taken from the authenticated user,
/// never from the request body.
///
#[derive(Debug, Deserialize)]
pub struct Booking {
    pub full_name: String,
    pub phone: String,

    pub number_of_tickets: Option<u32>,

    #[serde(default)]
    pub is_comedian_booking: bool,
    pub comedian_id: Option<String>,
    pub event_date: Option<OffsetDateTime>,
    pub event_location: Option<String>,
    pub event_duration_minutes: Option<u32>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn booking_json_deserialize_ticket() {
        let json = r#"{
            "full_name": "Jan Kowalski",
            "phone": "+48123456789",
            "number_of_tickets": 2
        }"#;

        let booking = serde_json::from_str::<Booking>(&json).unwrap();

        assert_eq!(booking.number_of_tickets, Some(2));
        assert_eq!(booking.is_comedian_booking, false);
        assert!(booking.comedian_id.is_none());
    }

    #[test]
    fn booking_json_deserialize_comedian() {
        let json = r#"{
            "full_name": "Jan Kowalski",
            "phone": "+48123456789",
            "is_comedian_booking": true,
            "comedian_id": "66b1d5b8f0a1b2c3d4e5f607",
            "event_location": "Warsaw",
            "event_duration_minutes": 60
        }"#;

        let booking = serde_json::from_str::<Booking>(&json).unwrap();

        assert_eq!(booking.is_comedian_booking, true);
        assert_eq!(
            booking.comedian_id.as_deref(),
            Some("66b1d5b8f0a1b2c3d4e5f607")
        );
        assert_eq!(booking.event_duration_minutes, Some(60));
    }
}
