use partnerdesk_core::models::assessment::AssessmentStatus;
use partnerdesk_core::models::payment::PaymentStatus;
use partnerdesk_core::models::report::ReportStatus;
use partnerdesk_eligibility::{
    InaccessibleReason, can_access_report, can_generate_report, report_inaccessible_reason,
};

const PAYMENTS: [PaymentStatus; 2] = [PaymentStatus::Unpaid, PaymentStatus::Paid];
const ASSESSMENTS: [AssessmentStatus; 3] = [
    AssessmentStatus::NotStarted,
    AssessmentStatus::InProgress,
    AssessmentStatus::Completed,
];
const REPORTS: [ReportStatus; 3] = [
    ReportStatus::NotGenerated,
    ReportStatus::Generated,
    ReportStatus::Sent,
];

#[test]
fn generation_requires_payment_and_completion() {
    for p in PAYMENTS {
        for a in ASSESSMENTS {
            let expected = p == PaymentStatus::Paid && a == AssessmentStatus::Completed;
            assert_eq!(can_generate_report(p, a), expected, "{p} / {a}");
        }
    }
}

#[test]
fn access_additionally_requires_a_produced_report() {
    for p in PAYMENTS {
        for a in ASSESSMENTS {
            for r in REPORTS {
                let expected = p == PaymentStatus::Paid
                    && a == AssessmentStatus::Completed
                    && matches!(r, ReportStatus::Generated | ReportStatus::Sent);
                assert_eq!(can_access_report(p, a, r), expected, "{p} / {a} / {r}");
            }
        }
    }
}

#[test]
fn access_implies_generation_eligibility() {
    for p in PAYMENTS {
        for a in ASSESSMENTS {
            for r in REPORTS {
                if can_access_report(p, a, r) {
                    assert!(can_generate_report(p, a), "{p} / {a} / {r}");
                }
            }
        }
    }
}

#[test]
fn unpaid_always_reports_payment_first() {
    for a in ASSESSMENTS {
        let reason = report_inaccessible_reason(PaymentStatus::Unpaid, a);
        assert_eq!(reason, InaccessibleReason::PaymentRequired);
        assert_eq!(reason.to_string(), "Payment required to access reports");
    }
}

#[test]
fn paid_but_incomplete_reports_completion() {
    for a in [AssessmentStatus::NotStarted, AssessmentStatus::InProgress] {
        assert_eq!(
            report_inaccessible_reason(PaymentStatus::Paid, a).to_string(),
            "Assessment must be completed first"
        );
    }
}

#[test]
fn paid_and_completed_falls_back_to_not_available() {
    assert_eq!(
        report_inaccessible_reason(PaymentStatus::Paid, AssessmentStatus::Completed).to_string(),
        "Report not available"
    );
}

#[test]
fn reason_serializes_as_snake_case_code() {
    let json = serde_json::to_string(&InaccessibleReason::AssessmentIncomplete).unwrap();
    assert_eq!(json, "\"assessment_incomplete\"");
}

#[test]
fn display_is_the_message() {
    for reason in [
        InaccessibleReason::PaymentRequired,
        InaccessibleReason::AssessmentIncomplete,
        InaccessibleReason::NotAvailable,
    ] {
        assert_eq!(reason.to_string(), reason.message());
    }
}
