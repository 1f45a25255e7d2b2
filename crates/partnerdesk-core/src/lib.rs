//! partnerdesk-core
//!
//! Pure domain types for the partner dashboard: assessment records and their
//! three status tracks, affiliation codes, earnings, scholarship claims and
//! the dashboard context. No I/O — this is the shared vocabulary of PartnerDesk.

pub mod error;
pub mod models;
