use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::payment::{PaidBy, PaymentStatus};
use super::report::ReportStatus;
use super::track::StatusTrack;
use crate::error::CoreError;

/// Progress of a candidate through a test, independent of payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl StatusTrack for AssessmentStatus {
    const TRACK: &'static str = "assessment";
    const STATES: &'static [Self] = &[Self::NotStarted, Self::InProgress, Self::Completed];

    fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl AssessmentStatus {
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One candidate's engagement with one test, reached through an affiliation code.
///
/// Owned by the persistence collaborator. The core reads records and derives
/// eligibility from them; it never mutates or repairs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub partner_id: Uuid,
    pub affiliation_code: String,
    pub candidate_name: String,
    pub candidate_email: String,
    pub test_name: String,
    pub assessment_status: AssessmentStatus,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub paid_by: Option<PaidBy>,
    pub report_status: ReportStatus,
    pub used_at: jiff::Timestamp,
    #[serde(default)]
    pub completed_at: Option<jiff::Timestamp>,
    #[serde(default)]
    pub report_generated_at: Option<jiff::Timestamp>,
    #[serde(default)]
    pub report_sent_at: Option<jiff::Timestamp>,
    #[serde(default)]
    pub discount_amount: Option<f64>,
    #[serde(default)]
    pub report_url: Option<String>,
    #[serde(default)]
    pub report_content: Option<serde_json::Value>,
}

impl AssessmentRecord {
    /// A freshly redeemed code: `not_started` / `unpaid` / `not_generated`.
    pub fn new(
        partner_id: Uuid,
        affiliation_code: impl Into<String>,
        candidate_name: impl Into<String>,
        candidate_email: impl Into<String>,
        test_name: impl Into<String>,
        used_at: jiff::Timestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            partner_id,
            affiliation_code: affiliation_code.into(),
            candidate_name: candidate_name.into(),
            candidate_email: candidate_email.into(),
            test_name: test_name.into(),
            assessment_status: AssessmentStatus::NotStarted,
            payment_status: PaymentStatus::Unpaid,
            paid_by: None,
            report_status: ReportStatus::NotGenerated,
            used_at,
            completed_at: None,
            report_generated_at: None,
            report_sent_at: None,
            discount_amount: None,
            report_url: None,
            report_content: None,
        }
    }

    /// Check the record against the data-model invariants.
    ///
    /// Returns the first violation found. Callers decide what to do with an
    /// invalid record; nothing here attempts to repair it.
    pub fn validate(&self) -> Result<(), CoreError> {
        let invalid = |reason: &str| CoreError::InvalidRecord {
            id: self.id,
            reason: reason.to_string(),
        };
        let paid = self.payment_status.is_paid();

        if self.paid_by.is_some() && !paid {
            return Err(invalid("paid_by is set on an unpaid record"));
        }
        if self.discount_amount.is_some() && !paid {
            return Err(invalid("discount_amount is set on an unpaid record"));
        }
        if self.report_status.is_produced() && !(paid && self.assessment_status.is_completed()) {
            return Err(invalid(
                "report advanced past not_generated before payment and completion",
            ));
        }
        if (self.report_url.is_some() || self.report_content.is_some())
            && !(paid && self.report_status.is_produced())
        {
            return Err(invalid("report url or content present before generation"));
        }

        if self.completed_at.is_some() && !self.assessment_status.is_completed() {
            return Err(invalid("completed_at is set before completion"));
        }
        if self.report_generated_at.is_some() && !self.report_status.is_produced() {
            return Err(invalid("report_generated_at is set before generation"));
        }
        if self.report_sent_at.is_some() && !self.report_status.reached(ReportStatus::Sent) {
            return Err(invalid("report_sent_at is set before the report was sent"));
        }

        let milestones = [
            ("used_at", Some(self.used_at)),
            ("completed_at", self.completed_at),
            ("report_generated_at", self.report_generated_at),
            ("report_sent_at", self.report_sent_at),
        ];
        let mut previous: Option<(&str, jiff::Timestamp)> = None;
        for (name, at) in milestones {
            let Some(at) = at else { continue };
            if let Some((prev_name, prev_at)) = previous
                && at < prev_at
            {
                return Err(invalid(&format!("{name} precedes {prev_name}")));
            }
            previous = Some((name, at));
        }

        Ok(())
    }
}
