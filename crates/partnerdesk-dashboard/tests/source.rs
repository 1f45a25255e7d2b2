use jiff::Timestamp;
use uuid::Uuid;

use partnerdesk_core::models::assessment::AssessmentRecord;
use partnerdesk_core::models::report::ReportStatus;
use partnerdesk_core::models::transaction::{EarningTransaction, TransactionStatus, TransactionType};
use partnerdesk_dashboard::source::{
    InMemorySource, JsonFileSource, RECORDS_FILE, RecordSource, TRANSACTIONS_FILE,
};

fn record(partner_id: Uuid, name: &str) -> AssessmentRecord {
    AssessmentRecord::new(
        partner_id,
        "PD-1",
        name,
        format!("{}@example.com", name.to_lowercase()),
        "Logical Reasoning",
        Timestamp::UNIX_EPOCH,
    )
}

#[tokio::test]
async fn json_source_filters_by_partner_and_drops_invalid_records() {
    let dir = tempfile::tempdir().unwrap();
    let me = Uuid::new_v4();
    let other = Uuid::new_v4();

    let mut broken = record(me, "Broken");
    broken.report_status = ReportStatus::Generated;
    let records = vec![record(me, "Ada"), record(other, "Grace"), broken, record(me, "Linus")];
    std::fs::write(
        dir.path().join(RECORDS_FILE),
        serde_json::to_vec(&records).unwrap(),
    )
    .unwrap();

    let source = JsonFileSource::new(dir.path());
    let loaded = source.fetch_records(me).await.unwrap();
    let names: Vec<_> = loaded.iter().map(|r| r.candidate_name.as_str()).collect();
    assert_eq!(names, ["Ada", "Linus"]);
}

#[tokio::test]
async fn missing_files_are_empty_lists() {
    let dir = tempfile::tempdir().unwrap();
    let source = JsonFileSource::new(dir.path());
    assert!(source.fetch_records(Uuid::nil()).await.unwrap().is_empty());
    assert!(source.fetch_transactions(Uuid::nil()).await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(TRANSACTIONS_FILE), b"{ not json").unwrap();
    let source = JsonFileSource::new(dir.path());
    assert!(source.fetch_transactions(Uuid::nil()).await.is_err());
}

#[tokio::test]
async fn in_memory_source_scopes_transactions_to_the_partner() {
    let me = Uuid::new_v4();
    let txn = |partner_id| EarningTransaction {
        id: Uuid::new_v4(),
        partner_id,
        transaction_type: TransactionType::Commission,
        status: TransactionStatus::Completed,
        amount: 10.0,
        description: "Commission".to_string(),
        record_id: None,
        created_at: Timestamp::UNIX_EPOCH,
    };
    let source = InMemorySource {
        records: vec![record(me, "Ada")],
        transactions: vec![txn(me), txn(Uuid::new_v4()), txn(me)],
    };

    assert_eq!(source.fetch_transactions(me).await.unwrap().len(), 2);
    assert_eq!(source.fetch_records(me).await.unwrap().len(), 1);
}
