use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// The two partner personas the dashboard serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PartnerType {
    #[default]
    Individual,
    Organization,
}

impl PartnerType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Organization => "organization",
        }
    }

    /// Team administration is only offered to organizational partners.
    pub fn manages_team(self) -> bool {
        matches!(self, Self::Organization)
    }
}

impl fmt::Display for PartnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartnerType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(Self::Individual),
            "organization" => Ok(Self::Organization),
            other => Err(CoreError::InvalidStatus {
                track: "partner type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: jiff::Timestamp,
}

/// Dashboard-wide state handed down to views explicitly.
///
/// Starts from [`Default`] (individual partner, no notifications) and changes
/// only through the setters below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardContext {
    pub partner_type: PartnerType,
    pub notifications: Vec<Notification>,
}

impl DashboardContext {
    pub fn new(partner_type: PartnerType) -> Self {
        Self {
            partner_type,
            notifications: Vec::new(),
        }
    }

    pub fn set_partner_type(&mut self, partner_type: PartnerType) {
        self.partner_type = partner_type;
    }

    /// Push an unread notification and return its id. Newest first.
    pub fn notify(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        at: jiff::Timestamp,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.notifications.insert(
            0,
            Notification {
                id,
                kind,
                title: title.into(),
                message: message.into(),
                read: false,
                created_at: at,
            },
        );
        id
    }

    /// Returns `false` when no notification has this id.
    pub fn mark_read(&mut self, id: Uuid) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}
