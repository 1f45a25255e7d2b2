use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::track::StatusTrack;
use crate::error::CoreError;

/// Report lifecycle: `not_generated -> generated -> sent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReportStatus {
    #[default]
    NotGenerated,
    Generated,
    Sent,
}

impl StatusTrack for ReportStatus {
    const TRACK: &'static str = "report";
    const STATES: &'static [Self] = &[Self::NotGenerated, Self::Generated, Self::Sent];

    fn as_str(self) -> &'static str {
        match self {
            Self::NotGenerated => "not_generated",
            Self::Generated => "generated",
            Self::Sent => "sent",
        }
    }
}

impl ReportStatus {
    /// A report exists once it has been generated; `Sent` implies `Generated`.
    pub fn is_produced(self) -> bool {
        match self {
            Self::NotGenerated => false,
            Self::Generated | Self::Sent => true,
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
