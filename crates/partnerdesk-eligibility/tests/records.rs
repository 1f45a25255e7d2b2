use jiff::Timestamp;
use uuid::Uuid;

use partnerdesk_core::models::assessment::{AssessmentRecord, AssessmentStatus};
use partnerdesk_core::models::payment::{PaidBy, PaymentStatus};
use partnerdesk_core::models::report::ReportStatus;
use partnerdesk_eligibility::{InaccessibleReason, ReportAction, ReportEligibility};

fn record(
    payment: PaymentStatus,
    assessment: AssessmentStatus,
    report: ReportStatus,
) -> AssessmentRecord {
    let mut record = AssessmentRecord::new(
        Uuid::new_v4(),
        "ORG-5",
        "Sam Okafor",
        "sam@example.com",
        "Situational Judgement",
        Timestamp::UNIX_EPOCH,
    );
    record.payment_status = payment;
    record.assessment_status = assessment;
    record.report_status = report;
    if payment == PaymentStatus::Paid {
        record.paid_by = Some(PaidBy::Partner);
    }
    record
}

#[test]
fn unpaid_completed_record_is_blocked_on_payment() {
    let r = record(
        PaymentStatus::Unpaid,
        AssessmentStatus::Completed,
        ReportStatus::NotGenerated,
    );
    let eligibility = ReportEligibility::for_record(&r);

    assert!(!eligibility.can_generate);
    assert!(!eligibility.can_access);
    assert_eq!(
        eligibility.reason.map(|r| r.to_string()).as_deref(),
        Some("Payment required to access reports")
    );
    assert_eq!(
        eligibility.action(),
        ReportAction::Unavailable(InaccessibleReason::PaymentRequired)
    );
}

#[test]
fn paid_completed_generated_record_is_viewable() {
    let r = record(
        PaymentStatus::Paid,
        AssessmentStatus::Completed,
        ReportStatus::Generated,
    );
    let eligibility = ReportEligibility::for_record(&r);

    assert!(eligibility.can_generate);
    assert!(eligibility.can_access);
    assert_eq!(eligibility.reason, None);
    assert_eq!(eligibility.action(), ReportAction::View);
}

#[test]
fn paid_completed_without_report_offers_generation() {
    let r = record(
        PaymentStatus::Paid,
        AssessmentStatus::Completed,
        ReportStatus::NotGenerated,
    );
    let eligibility = ReportEligibility::for_record(&r);

    assert!(eligibility.can_generate);
    assert!(!eligibility.can_access);
    assert_eq!(eligibility.reason, Some(InaccessibleReason::NotAvailable));
    assert_eq!(eligibility.action(), ReportAction::Generate);
}

#[test]
fn invalid_record_is_reported_as_inaccessible_not_repaired() {
    // A generated report on an unpaid, unstarted record violates the gating rule.
    let r = record(
        PaymentStatus::Unpaid,
        AssessmentStatus::NotStarted,
        ReportStatus::Generated,
    );
    assert!(r.validate().is_err());

    let eligibility = ReportEligibility::for_record(&r);
    assert!(!eligibility.can_access);
    assert_eq!(eligibility.reason, Some(InaccessibleReason::PaymentRequired));
    assert_eq!(r.report_status, ReportStatus::Generated);
}

#[test]
fn action_serializes_with_its_reason() {
    let action = ReportAction::Unavailable(InaccessibleReason::AssessmentIncomplete);
    let json = serde_json::to_value(action).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "action": "unavailable", "reason": "assessment_incomplete" })
    );
}
