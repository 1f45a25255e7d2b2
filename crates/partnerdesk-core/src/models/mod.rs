pub mod affiliation;
pub mod assessment;
pub mod claim;
pub mod partner;
pub mod payment;
pub mod report;
pub mod track;
pub mod transaction;
