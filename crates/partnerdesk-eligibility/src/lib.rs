//! partnerdesk-eligibility
//!
//! Report eligibility rules. Pure functions over the three status tracks of
//! an assessment record; no I/O and no failure modes.
//!
//! A report can be generated once the assessment is paid for and completed.
//! It can be accessed once, in addition, it has actually been produced.

pub mod reason;
pub mod record;

use partnerdesk_core::models::assessment::AssessmentStatus;
use partnerdesk_core::models::payment::PaymentStatus;
use partnerdesk_core::models::report::ReportStatus;

pub use reason::InaccessibleReason;
pub use record::{ReportAction, ReportEligibility};

/// `true` iff the assessment is paid and completed.
pub fn can_generate_report(payment: PaymentStatus, assessment: AssessmentStatus) -> bool {
    match (payment, assessment) {
        (PaymentStatus::Paid, AssessmentStatus::Completed) => true,
        (PaymentStatus::Paid, AssessmentStatus::NotStarted | AssessmentStatus::InProgress)
        | (PaymentStatus::Unpaid, _) => false,
    }
}

/// `true` iff a report could be generated and one has been (`generated` or `sent`).
pub fn can_access_report(
    payment: PaymentStatus,
    assessment: AssessmentStatus,
    report: ReportStatus,
) -> bool {
    can_generate_report(payment, assessment) && report.is_produced()
}

/// Why a report cannot be accessed, first blocker wins.
///
/// Payment is reported ahead of completion. `report_status` is not consulted:
/// a paid, completed record falls through to [`InaccessibleReason::NotAvailable`]
/// whether or not its report exists, so only call this once access is denied.
pub fn report_inaccessible_reason(
    payment: PaymentStatus,
    assessment: AssessmentStatus,
) -> InaccessibleReason {
    match (payment, assessment) {
        (PaymentStatus::Unpaid, _) => InaccessibleReason::PaymentRequired,
        (PaymentStatus::Paid, AssessmentStatus::NotStarted | AssessmentStatus::InProgress) => {
            InaccessibleReason::AssessmentIncomplete
        }
        (PaymentStatus::Paid, AssessmentStatus::Completed) => InaccessibleReason::NotAvailable,
    }
}
