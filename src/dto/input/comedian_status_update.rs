use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ComedianStatusUpdate {
    pub status: ComedianDecision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComedianDecision {
    Pending,
    Approved,
    Declined,
}
