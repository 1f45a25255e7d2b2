//! User-facing reasons for a denied report.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A denied report access, rendered verbatim to the partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InaccessibleReason {
    PaymentRequired,
    AssessmentIncomplete,
    NotAvailable,
}

impl InaccessibleReason {
    /// The text shown to the partner, verbatim.
    pub fn message(self) -> &'static str {
        match self {
            Self::PaymentRequired => "Payment required to access reports",
            Self::AssessmentIncomplete => "Assessment must be completed first",
            Self::NotAvailable => "Report not available",
        }
    }
}

impl fmt::Display for InaccessibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
