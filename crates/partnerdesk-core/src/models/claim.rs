use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A scholarship claimed on behalf of a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScholarshipClaim {
    pub id: Uuid,
    pub partner_id: Uuid,
    pub scholarship_name: String,
    pub candidate_name: String,
    pub candidate_email: String,
    pub amount: f64,
    pub status: ClaimStatus,
    pub submitted_at: jiff::Timestamp,
    #[serde(default)]
    pub reviewed_at: Option<jiff::Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}
