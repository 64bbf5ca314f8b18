pub mod envelope;
pub mod mailto;
pub mod report;
pub mod search;
pub mod validation;
