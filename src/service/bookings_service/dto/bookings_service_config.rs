pub struct BookingsServiceConfig {
    pub venue_capacity: u32,
    pub max_tickets_per_booking: u32,
    /// Price of a single ticket in minor currency units,
    /// snapshotted on the booking at creation time.
    pub ticket_price_minor: i64,
}
