use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BookingStatusUpdate {
    pub status: BookingDecision,
}

///
/// Moderation can only resolve a booking, never move it
/// back to pending.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingDecision {
    Approved,
    Declined,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn booking_status_update_json_deserialize_ok() {
        let update = serde_json::from_str::<BookingStatusUpdate>(r#"{"status":"approved"}"#);

        assert!(matches!(
            update.unwrap().status,
            BookingDecision::Approved
        ));
    }

    #[test]
    fn booking_status_update_json_deserialize_pending_rejected() {
        let update = serde_json::from_str::<BookingStatusUpdate>(r#"{"status":"pending"}"#);

        assert!(update.is_err());
    }
}
