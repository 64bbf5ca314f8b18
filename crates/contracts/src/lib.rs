//! Shared contracts of the salon admin panel: entity DTOs, form validation,
//! client-side search, report rendering and mail drafts.
//!
//! Nothing here touches the browser, so the whole crate is testable on the host.

pub mod domain;
pub mod shared;
