//! Where the dashboard's rows come from.
//!
//! The hosted backend is abstracted behind [`RecordSource`]. Records that
//! break the data-model invariants are dropped at this boundary with a
//! warning; they are never patched up.

use std::future::Future;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use uuid::Uuid;

use partnerdesk_core::models::assessment::AssessmentRecord;
use partnerdesk_core::models::transaction::EarningTransaction;

use crate::error::DashboardError;

pub const RECORDS_FILE: &str = "records.json";
pub const TRANSACTIONS_FILE: &str = "transactions.json";

pub trait RecordSource {
    /// Assessment records reached through this partner's affiliation codes.
    fn fetch_records(
        &self,
        partner_id: Uuid,
    ) -> impl Future<Output = Result<Vec<AssessmentRecord>, DashboardError>> + Send;

    /// This partner's earnings ledger.
    fn fetch_transactions(
        &self,
        partner_id: Uuid,
    ) -> impl Future<Output = Result<Vec<EarningTransaction>, DashboardError>> + Send;
}

fn keep_valid(records: Vec<AssessmentRecord>) -> Vec<AssessmentRecord> {
    records
        .into_iter()
        .filter(|record| match record.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(record_id = %record.id, error = %e, "skipping invalid record");
                false
            }
        })
        .collect()
}

/// Reads JSON arrays from a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    data_dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// A missing file is an empty list.
    async fn read_list<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, DashboardError> {
        let path = self.data_dir.join(file);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no data file found, using empty list");
                return Ok(Vec::new());
            }
            Err(source) => return Err(DashboardError::Read { path, source }),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl RecordSource for JsonFileSource {
    async fn fetch_records(&self, partner_id: Uuid) -> Result<Vec<AssessmentRecord>, DashboardError> {
        let all: Vec<AssessmentRecord> = self.read_list(RECORDS_FILE).await?;
        let total = all.len();
        let mine: Vec<_> = all.into_iter().filter(|r| r.partner_id == partner_id).collect();
        let records = keep_valid(mine);
        tracing::info!(%partner_id, total, returned = records.len(), "records loaded");
        Ok(records)
    }

    async fn fetch_transactions(
        &self,
        partner_id: Uuid,
    ) -> Result<Vec<EarningTransaction>, DashboardError> {
        let all: Vec<EarningTransaction> = self.read_list(TRANSACTIONS_FILE).await?;
        let transactions: Vec<_> = all
            .into_iter()
            .filter(|t| t.partner_id == partner_id)
            .collect();
        tracing::info!(%partner_id, returned = transactions.len(), "transactions loaded");
        Ok(transactions)
    }
}

/// Resident rows, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub records: Vec<AssessmentRecord>,
    pub transactions: Vec<EarningTransaction>,
}

impl RecordSource for InMemorySource {
    async fn fetch_records(&self, partner_id: Uuid) -> Result<Vec<AssessmentRecord>, DashboardError> {
        let mine = self
            .records
            .iter()
            .filter(|r| r.partner_id == partner_id)
            .cloned()
            .collect();
        Ok(keep_valid(mine))
    }

    async fn fetch_transactions(
        &self,
        partner_id: Uuid,
    ) -> Result<Vec<EarningTransaction>, DashboardError> {
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.partner_id == partner_id)
            .cloned()
            .collect())
    }
}
