//! View models handed to the UI layer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use partnerdesk_core::models::assessment::AssessmentRecord;
use partnerdesk_core::models::partner::{DashboardContext, PartnerType};
use partnerdesk_core::models::transaction::{EarningTransaction, EarningsSummary};
use partnerdesk_eligibility::{ReportAction, ReportEligibility};
use partnerdesk_query::fields::RecordField;
use partnerdesk_query::{ListQuery, SortDirection};

use crate::error::DashboardError;

/// One row of the candidate table.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct CandidateRow {
    pub record: AssessmentRecord,
    pub eligibility: ReportEligibility,
    pub action: ReportAction,
}

impl CandidateRow {
    pub fn new(record: &AssessmentRecord) -> Self {
        let eligibility = ReportEligibility::for_record(record);
        Self {
            record: record.clone(),
            eligibility,
            action: eligibility.action(),
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct CandidatePage {
    pub rows: Vec<CandidateRow>,
    pub total: usize,
    pub page_index: usize,
    pub page_size: usize,
    pub page_count: usize,
}

pub fn candidate_page(records: &[AssessmentRecord], query: &ListQuery<RecordField>) -> CandidatePage {
    let page = query.run(records);
    CandidatePage {
        rows: page.items.iter().map(|r| CandidateRow::new(r)).collect(),
        total: page.total,
        page_index: page.page_index,
        page_size: page.page_size,
        page_count: page.page_count(),
    }
}

/// Candidate-list controls as the UI submits them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListParams {
    pub search: String,
    /// Assessment status filter; empty or `"all"` means no filter.
    pub status: String,
    pub payment_status: String,
    pub report_status: String,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: usize,
}

impl ListParams {
    pub fn into_query(self, page_size: usize) -> Result<ListQuery<RecordField>, DashboardError> {
        let mut query = ListQuery::new(RecordField::SEARCHABLE);
        query.set_page_size(page_size)?;
        query.set_search(self.search);

        for (field, value) in [
            (RecordField::AssessmentStatus, self.status),
            (RecordField::PaymentStatus, self.payment_status),
            (RecordField::ReportStatus, self.report_status),
        ] {
            if !value.is_empty() {
                query.set_category(field, value);
            }
        }

        // Newest first unless the caller picks a column.
        let field = match self.sort.as_deref() {
            Some(name) => name.parse()?,
            None => RecordField::UsedAt,
        };
        let direction = match self.direction.as_deref() {
            Some(dir) => dir.parse()?,
            None if self.sort.is_none() => SortDirection::Desc,
            None => SortDirection::Asc,
        };
        query.set_sort(field, direction);

        query.set_page(self.page);
        Ok(query)
    }
}

/// Header figures for the dashboard home page.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct DashboardOverview {
    pub partner_type: PartnerType,
    pub total_candidates: usize,
    pub completed_assessments: usize,
    pub paid_assessments: usize,
    pub reports_available: usize,
    pub earnings: EarningsSummary,
    pub unread_notifications: usize,
}

pub fn overview(
    ctx: &DashboardContext,
    records: &[AssessmentRecord],
    transactions: &[EarningTransaction],
) -> DashboardOverview {
    DashboardOverview {
        partner_type: ctx.partner_type,
        total_candidates: records.len(),
        completed_assessments: records
            .iter()
            .filter(|r| r.assessment_status.is_completed())
            .count(),
        paid_assessments: records
            .iter()
            .filter(|r| r.payment_status.is_paid())
            .count(),
        reports_available: records
            .iter()
            .filter(|r| ReportEligibility::for_record(r).can_access)
            .count(),
        earnings: EarningsSummary::from_transactions(transactions),
        unread_notifications: ctx.unread_count(),
    }
}
