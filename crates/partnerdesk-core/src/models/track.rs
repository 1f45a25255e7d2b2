//! Forward-only status tracks.
//!
//! Each of the three record tracks (assessment, payment, report) advances one
//! state at a time and never regresses. Collaborators that own a record call
//! [`StatusTrack::advance_to`] before persisting a new status.

use crate::error::CoreError;

pub trait StatusTrack: Copy + Eq + Sized + 'static {
    /// Track name used in error messages (e.g. "assessment").
    const TRACK: &'static str;

    /// Every state of the track, in transition order.
    const STATES: &'static [Self];

    /// Wire representation (snake_case), identical to the serde form.
    fn as_str(self) -> &'static str;

    /// Position of this state within [`Self::STATES`].
    fn rank(self) -> usize {
        Self::STATES
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    /// Whether `self` is at or past `other` on the track.
    fn reached(self, other: Self) -> bool {
        self.rank() >= other.rank()
    }

    /// Validate a single-step transition to `next`.
    fn advance_to(self, next: Self) -> Result<Self, CoreError> {
        if next.rank() == self.rank() + 1 {
            Ok(next)
        } else {
            Err(CoreError::InvalidTransition {
                track: Self::TRACK,
                from: self.as_str(),
                to: next.as_str(),
            })
        }
    }

    /// Parse the wire representation.
    fn parse(value: &str) -> Result<Self, CoreError> {
        Self::STATES
            .iter()
            .copied()
            .find(|s| s.as_str() == value)
            .ok_or_else(|| CoreError::InvalidStatus {
                track: Self::TRACK,
                value: value.to_string(),
            })
    }
}
