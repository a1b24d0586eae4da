#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("gateway request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("gateway rejected order: {0}")]
    Rejected(reqwest::StatusCode),
}
