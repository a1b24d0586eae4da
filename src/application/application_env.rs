use crate::auth::util::{parse_jwt_algorithms, parse_jwt_key};
use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use std::net::SocketAddr;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    /// Algorithms must belong to the same family
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_key: DecodingKey,

    pub payment_gateway_url: String,
    pub payment_gateway_key_id: String,
    pub payment_gateway_key_secret: String,

    pub venue_capacity: u32,
    pub max_tickets_per_booking: u32,
    pub ticket_price_minor: i64,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("STANDUP_HUB_CORE_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("STANDUP_HUB_CORE_LOG_FILENAME")?;
        let bind_address = Self::env_var("STANDUP_HUB_CORE_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("STANDUP_HUB_CORE_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("STANDUP_HUB_CORE_DB_NAME")?;
        let max_http_content_len =
            Self::env_var("STANDUP_HUB_CORE_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let jwt_algorithms =
            parse_jwt_algorithms(Self::env_var("STANDUP_HUB_CORE_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "STANDUP_HUB_CORE_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_key(jwt_algorithm, Self::env_var("STANDUP_HUB_CORE_JWT_KEY")?)?;
        let payment_gateway_url = Self::env_var("STANDUP_HUB_CORE_PAYMENT_GATEWAY_URL")?;
        let payment_gateway_key_id = Self::env_var("STANDUP_HUB_CORE_PAYMENT_GATEWAY_KEY_ID")?;
        let payment_gateway_key_secret =
            Self::env_var("STANDUP_HUB_CORE_PAYMENT_GATEWAY_KEY_SECRET")?;
        let venue_capacity = Self::env_var("STANDUP_HUB_CORE_VENUE_CAPACITY")?.parse()?;
        let max_tickets_per_booking =
            Self::env_var("STANDUP_HUB_CORE_MAX_TICKETS_PER_BOOKING")?.parse()?;
        let ticket_price_minor = Self::env_var("STANDUP_HUB_CORE_TICKET_PRICE_MINOR")?.parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            jwt_algorithms,
            jwt_key,
            payment_gateway_url,
            payment_gateway_key_id,
            payment_gateway_key_secret,
            venue_capacity,
            max_tickets_per_booking,
            ticket_price_minor,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
