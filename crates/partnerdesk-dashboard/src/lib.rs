//! partnerdesk-dashboard
//!
//! Application seam for the partner dashboard: versioned config, the record
//! source the UI fetches from, and the view models it renders (candidate
//! pages with report actions, the overview header).

pub mod config;
pub mod error;
pub mod source;
pub mod view;
