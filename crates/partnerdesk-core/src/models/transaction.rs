use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A movement on a partner's earnings ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EarningTransaction {
    pub id: Uuid,
    pub partner_id: Uuid,
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
    pub amount: f64,
    pub description: String,
    /// The assessment record that produced a commission, if any.
    #[serde(default)]
    pub record_id: Option<Uuid>,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TransactionType {
    Commission,
    Bonus,
    Withdrawal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Commission => "commission",
            Self::Bonus => "bonus",
            Self::Withdrawal => "withdrawal",
        }
    }
}

impl TransactionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// Totals shown on the earnings overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EarningsSummary {
    /// Completed commissions and bonuses.
    pub total_earned: f64,
    /// Commissions and bonuses not yet cleared.
    pub pending: f64,
    /// Completed withdrawals.
    pub withdrawn: f64,
    /// Withdrawals requested but not yet paid out.
    pub pending_withdrawal: f64,
    pub available_balance: f64,
}

impl EarningsSummary {
    /// Fold a ledger into totals. Failed transactions are ignored.
    pub fn from_transactions<'a>(
        transactions: impl IntoIterator<Item = &'a EarningTransaction>,
    ) -> Self {
        let mut summary = Self::default();
        for txn in transactions {
            match (txn.transaction_type, txn.status) {
                (_, TransactionStatus::Failed) => {}
                (TransactionType::Commission | TransactionType::Bonus, TransactionStatus::Completed) => {
                    summary.total_earned += txn.amount;
                }
                (TransactionType::Commission | TransactionType::Bonus, TransactionStatus::Pending) => {
                    summary.pending += txn.amount;
                }
                (TransactionType::Withdrawal, TransactionStatus::Completed) => {
                    summary.withdrawn += txn.amount;
                }
                (TransactionType::Withdrawal, TransactionStatus::Pending) => {
                    summary.pending_withdrawal += txn.amount;
                }
            }
        }
        summary.available_balance =
            summary.total_earned - summary.withdrawn - summary.pending_withdrawal;
        summary
    }
}
