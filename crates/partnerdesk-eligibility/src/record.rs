//! Per-record eligibility, as consumed by the candidate list.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use partnerdesk_core::models::assessment::AssessmentRecord;

use crate::{InaccessibleReason, can_access_report, can_generate_report, report_inaccessible_reason};

/// Derived report rights for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportEligibility {
    pub can_generate: bool,
    pub can_access: bool,
    /// Present exactly when `can_access` is false.
    pub reason: Option<InaccessibleReason>,
}

/// What the candidate list renders in the report column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "action", content = "reason", rename_all = "snake_case")]
#[ts(export)]
pub enum ReportAction {
    /// The report exists and may be opened.
    View,
    /// Payment and completion are in place; the report has not been produced yet.
    Generate,
    /// Disabled, with the reason shown as a tooltip.
    Unavailable(InaccessibleReason),
}

impl ReportEligibility {
    pub fn for_record(record: &AssessmentRecord) -> Self {
        let can_generate = can_generate_report(record.payment_status, record.assessment_status);
        let can_access = can_access_report(
            record.payment_status,
            record.assessment_status,
            record.report_status,
        );
        let reason = (!can_access).then(|| {
            report_inaccessible_reason(record.payment_status, record.assessment_status)
        });

        Self {
            can_generate,
            can_access,
            reason,
        }
    }

    pub fn action(&self) -> ReportAction {
        match (self.can_access, self.can_generate, self.reason) {
            (true, _, _) => ReportAction::View,
            (false, true, _) => ReportAction::Generate,
            (false, false, reason) => {
                ReportAction::Unavailable(reason.unwrap_or(InaccessibleReason::NotAvailable))
            }
        }
    }
}
