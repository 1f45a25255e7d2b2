use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A shareable referral code. Redeeming it attributes the candidate to the
/// partner and applies `discount_percent` to the test price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AffiliationCode {
    pub id: Uuid,
    pub partner_id: Uuid,
    pub code: String,
    pub discount_percent: f64,
    /// `None` means unlimited redemptions.
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub usage_count: u32,
    #[serde(default)]
    pub expires_at: Option<jiff::Timestamp>,
    pub active: bool,
    pub created_at: jiff::Timestamp,
}

impl AffiliationCode {
    pub fn is_expired(&self, now: jiff::Timestamp) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }

    pub fn remaining_uses(&self) -> Option<u32> {
        self.usage_limit
            .map(|limit| limit.saturating_sub(self.usage_count))
    }

    pub fn is_redeemable(&self, now: jiff::Timestamp) -> bool {
        self.active && !self.is_expired(now) && self.remaining_uses() != Some(0)
    }

    /// Discount applied to `price`, with the percentage clamped to `[0, 100]`.
    pub fn discount_for(&self, price: f64) -> f64 {
        price * self.discount_percent.clamp(0.0, 100.0) / 100.0
    }
}
