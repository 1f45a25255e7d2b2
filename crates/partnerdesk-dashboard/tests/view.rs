use jiff::{Timestamp, ToSpan};
use uuid::Uuid;

use partnerdesk_core::models::assessment::{AssessmentRecord, AssessmentStatus};
use partnerdesk_core::models::partner::{DashboardContext, NotificationKind, PartnerType};
use partnerdesk_core::models::payment::{PaidBy, PaymentStatus};
use partnerdesk_core::models::report::ReportStatus;
use partnerdesk_core::models::transaction::{EarningTransaction, TransactionStatus, TransactionType};
use partnerdesk_dashboard::error::DashboardError;
use partnerdesk_dashboard::view::{ListParams, candidate_page, overview};
use partnerdesk_eligibility::{InaccessibleReason, ReportAction};
use partnerdesk_query::SortDirection;
use partnerdesk_query::fields::RecordField;

fn record(
    name: &str,
    hour: i64,
    payment: PaymentStatus,
    assessment: AssessmentStatus,
    report: ReportStatus,
) -> AssessmentRecord {
    let mut r = AssessmentRecord::new(
        Uuid::nil(),
        "PD-7",
        name,
        format!("{}@example.com", name.to_lowercase()),
        "Personality Inventory",
        Timestamp::UNIX_EPOCH + hour.hours(),
    );
    r.payment_status = payment;
    r.assessment_status = assessment;
    r.report_status = report;
    if payment.is_paid() {
        r.paid_by = Some(PaidBy::Candidate);
    }
    r
}

fn roster() -> Vec<AssessmentRecord> {
    vec![
        record("Ada", 1, PaymentStatus::Unpaid, AssessmentStatus::Completed, ReportStatus::NotGenerated),
        record("Grace", 2, PaymentStatus::Paid, AssessmentStatus::Completed, ReportStatus::Generated),
        record("Linus", 3, PaymentStatus::Paid, AssessmentStatus::InProgress, ReportStatus::NotGenerated),
        record("Barbara", 4, PaymentStatus::Paid, AssessmentStatus::Completed, ReportStatus::NotGenerated),
        record("Ken", 5, PaymentStatus::Paid, AssessmentStatus::Completed, ReportStatus::Sent),
    ]
}

#[test]
fn default_params_list_newest_first() {
    let query = ListParams::default().into_query(25).unwrap();
    assert_eq!(query.sort(), Some((RecordField::UsedAt, SortDirection::Desc)));

    let page = candidate_page(&roster(), &query);
    let names: Vec<_> = page.rows.iter().map(|r| r.record.candidate_name.as_str()).collect();
    assert_eq!(names, ["Ken", "Barbara", "Linus", "Grace", "Ada"]);
    assert_eq!(page.total, 5);
    assert_eq!(page.page_count, 1);
}

#[test]
fn rows_carry_the_report_action() {
    let query = ListParams {
        sort: Some("candidate_name".to_string()),
        ..ListParams::default()
    }
    .into_query(25)
    .unwrap();

    let page = candidate_page(&roster(), &query);
    let actions: Vec<_> = page
        .rows
        .iter()
        .map(|r| (r.record.candidate_name.as_str(), r.action))
        .collect();
    assert_eq!(
        actions,
        [
            ("Ada", ReportAction::Unavailable(InaccessibleReason::PaymentRequired)),
            ("Barbara", ReportAction::Generate),
            ("Grace", ReportAction::View),
            ("Ken", ReportAction::View),
            ("Linus", ReportAction::Unavailable(InaccessibleReason::AssessmentIncomplete)),
        ]
    );
}

#[test]
fn status_filters_and_all_sentinel() {
    let records = roster();

    let query = ListParams {
        status: "completed".to_string(),
        report_status: "not_generated".to_string(),
        ..ListParams::default()
    }
    .into_query(25)
    .unwrap();
    assert_eq!(candidate_page(&records, &query).total, 2);

    let query = ListParams {
        status: "all".to_string(),
        payment_status: "paid".to_string(),
        ..ListParams::default()
    }
    .into_query(25)
    .unwrap();
    assert_eq!(candidate_page(&records, &query).total, 4);
}

#[test]
fn paging_past_the_end_is_empty() {
    let query = ListParams {
        page: 4,
        ..ListParams::default()
    }
    .into_query(2)
    .unwrap();
    let page = candidate_page(&roster(), &query);
    assert!(page.rows.is_empty());
    assert_eq!(page.total, 5);
    assert_eq!(page.page_count, 3);
}

#[test]
fn unknown_sort_column_is_rejected() {
    let err = ListParams {
        sort: Some("salary".to_string()),
        ..ListParams::default()
    }
    .into_query(25)
    .unwrap_err();
    assert!(matches!(err, DashboardError::Query(_)));
}

#[test]
fn params_deserialize_with_defaults() {
    let params: ListParams = serde_json::from_str(r#"{ "search": "ada", "page": 1 }"#).unwrap();
    assert_eq!(params.search, "ada");
    assert_eq!(params.page, 1);
    assert!(params.sort.is_none());
}

#[test]
fn overview_counts() {
    let mut ctx = DashboardContext::new(PartnerType::Organization);
    ctx.notify(NotificationKind::Info, "New candidate", "Ada redeemed PD-7", Timestamp::UNIX_EPOCH);

    let ledger = vec![EarningTransaction {
        id: Uuid::new_v4(),
        partner_id: Uuid::nil(),
        transaction_type: TransactionType::Commission,
        status: TransactionStatus::Completed,
        amount: 15.0,
        description: "Commission: PD-7".to_string(),
        record_id: None,
        created_at: Timestamp::UNIX_EPOCH,
    }];

    let overview = overview(&ctx, &roster(), &ledger);
    assert_eq!(overview.partner_type, PartnerType::Organization);
    assert_eq!(overview.total_candidates, 5);
    assert_eq!(overview.completed_assessments, 4);
    assert_eq!(overview.paid_assessments, 4);
    assert_eq!(overview.reports_available, 2);
    assert_eq!(overview.earnings.total_earned, 15.0);
    assert_eq!(overview.unread_notifications, 1);
}
