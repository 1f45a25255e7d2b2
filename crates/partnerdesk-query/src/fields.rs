//! Column definitions for every list the dashboard renders.
//!
//! Field names parse from the snake_case names the UI sends; a few short
//! aliases (`status`, `type`) match the column keys used by the tables.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use partnerdesk_core::models::affiliation::AffiliationCode;
use partnerdesk_core::models::assessment::AssessmentRecord;
use partnerdesk_core::models::claim::ScholarshipClaim;
use partnerdesk_core::models::track::StatusTrack;
use partnerdesk_core::models::transaction::EarningTransaction;

use crate::error::QueryError;
use crate::field::{FieldValue, Queryable};

fn optional_instant<'a>(at: Option<jiff::Timestamp>) -> FieldValue<'a> {
    at.map_or(FieldValue::Empty, FieldValue::Instant)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecordField {
    CandidateName,
    CandidateEmail,
    TestName,
    AffiliationCode,
    AssessmentStatus,
    PaymentStatus,
    PaidBy,
    ReportStatus,
    UsedAt,
    CompletedAt,
    ReportGeneratedAt,
    ReportSentAt,
    DiscountAmount,
}

impl RecordField {
    /// Columns the candidate search box looks at.
    pub const SEARCHABLE: &'static [Self] = &[
        Self::CandidateName,
        Self::CandidateEmail,
        Self::TestName,
        Self::AffiliationCode,
    ];
}

impl Queryable for AssessmentRecord {
    type Field = RecordField;

    fn field(&self, field: RecordField) -> FieldValue<'_> {
        match field {
            RecordField::CandidateName => FieldValue::Text(&self.candidate_name),
            RecordField::CandidateEmail => FieldValue::Text(&self.candidate_email),
            RecordField::TestName => FieldValue::Text(&self.test_name),
            RecordField::AffiliationCode => FieldValue::Text(&self.affiliation_code),
            RecordField::AssessmentStatus => FieldValue::Text(self.assessment_status.as_str()),
            RecordField::PaymentStatus => FieldValue::Text(self.payment_status.as_str()),
            RecordField::PaidBy => self
                .paid_by
                .map_or(FieldValue::Empty, |by| FieldValue::Text(by.as_str())),
            RecordField::ReportStatus => FieldValue::Text(self.report_status.as_str()),
            RecordField::UsedAt => FieldValue::Instant(self.used_at),
            RecordField::CompletedAt => optional_instant(self.completed_at),
            RecordField::ReportGeneratedAt => optional_instant(self.report_generated_at),
            RecordField::ReportSentAt => optional_instant(self.report_sent_at),
            RecordField::DiscountAmount => self
                .discount_amount
                .map_or(FieldValue::Empty, FieldValue::Number),
        }
    }
}

impl FromStr for RecordField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "candidate_name" | "name" => Self::CandidateName,
            "candidate_email" | "email" => Self::CandidateEmail,
            "test_name" => Self::TestName,
            "affiliation_code" | "code" => Self::AffiliationCode,
            "assessment_status" | "status" => Self::AssessmentStatus,
            "payment_status" => Self::PaymentStatus,
            "paid_by" => Self::PaidBy,
            "report_status" => Self::ReportStatus,
            "used_at" => Self::UsedAt,
            "completed_at" => Self::CompletedAt,
            "report_generated_at" => Self::ReportGeneratedAt,
            "report_sent_at" => Self::ReportSentAt,
            "discount_amount" => Self::DiscountAmount,
            other => {
                return Err(QueryError::UnknownField {
                    list: "record",
                    field: other.to_string(),
                });
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TransactionField {
    Description,
    TransactionType,
    Status,
    Amount,
    CreatedAt,
}

impl Queryable for EarningTransaction {
    type Field = TransactionField;

    fn field(&self, field: TransactionField) -> FieldValue<'_> {
        match field {
            TransactionField::Description => FieldValue::Text(&self.description),
            TransactionField::TransactionType => FieldValue::Text(self.transaction_type.as_str()),
            TransactionField::Status => FieldValue::Text(self.status.as_str()),
            TransactionField::Amount => FieldValue::Number(self.amount),
            TransactionField::CreatedAt => FieldValue::Instant(self.created_at),
        }
    }
}

impl FromStr for TransactionField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "description" => Self::Description,
            "transaction_type" | "type" => Self::TransactionType,
            "status" => Self::Status,
            "amount" => Self::Amount,
            "created_at" | "date" => Self::CreatedAt,
            other => {
                return Err(QueryError::UnknownField {
                    list: "transaction",
                    field: other.to_string(),
                });
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ClaimField {
    ScholarshipName,
    CandidateName,
    CandidateEmail,
    Status,
    Amount,
    SubmittedAt,
    ReviewedAt,
}

impl Queryable for ScholarshipClaim {
    type Field = ClaimField;

    fn field(&self, field: ClaimField) -> FieldValue<'_> {
        match field {
            ClaimField::ScholarshipName => FieldValue::Text(&self.scholarship_name),
            ClaimField::CandidateName => FieldValue::Text(&self.candidate_name),
            ClaimField::CandidateEmail => FieldValue::Text(&self.candidate_email),
            ClaimField::Status => FieldValue::Text(self.status.as_str()),
            ClaimField::Amount => FieldValue::Number(self.amount),
            ClaimField::SubmittedAt => FieldValue::Instant(self.submitted_at),
            ClaimField::ReviewedAt => optional_instant(self.reviewed_at),
        }
    }
}

impl FromStr for ClaimField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "scholarship_name" | "scholarship" => Self::ScholarshipName,
            "candidate_name" | "name" => Self::CandidateName,
            "candidate_email" | "email" => Self::CandidateEmail,
            "status" => Self::Status,
            "amount" => Self::Amount,
            "submitted_at" => Self::SubmittedAt,
            "reviewed_at" => Self::ReviewedAt,
            other => {
                return Err(QueryError::UnknownField {
                    list: "claim",
                    field: other.to_string(),
                });
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AffiliationField {
    Code,
    DiscountPercent,
    UsageCount,
    Active,
    ExpiresAt,
    CreatedAt,
}

impl Queryable for AffiliationCode {
    type Field = AffiliationField;

    fn field(&self, field: AffiliationField) -> FieldValue<'_> {
        match field {
            AffiliationField::Code => FieldValue::Text(&self.code),
            AffiliationField::DiscountPercent => FieldValue::Number(self.discount_percent),
            AffiliationField::UsageCount => FieldValue::Number(f64::from(self.usage_count)),
            AffiliationField::Active => FieldValue::Text(if self.active { "true" } else { "false" }),
            AffiliationField::ExpiresAt => optional_instant(self.expires_at),
            AffiliationField::CreatedAt => FieldValue::Instant(self.created_at),
        }
    }
}

impl FromStr for AffiliationField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "code" => Self::Code,
            "discount_percent" | "discount" => Self::DiscountPercent,
            "usage_count" | "usage" => Self::UsageCount,
            "active" | "status" => Self::Active,
            "expires_at" => Self::ExpiresAt,
            "created_at" => Self::CreatedAt,
            other => {
                return Err(QueryError::UnknownField {
                    list: "affiliation",
                    field: other.to_string(),
                });
            }
        })
    }
}
