pub struct PaymentsServiceConfig {
    /// Secret shared with the payment gateway,
    /// used to verify confirmation signatures.
    pub gateway_key_secret: String,
    pub venue_capacity: u32,
}
