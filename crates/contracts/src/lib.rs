//! Target-independent core of the OHADA business suite: records, list
//! filtering, form validation, the auth flow and the data-access seam.

pub mod dashboards;
pub mod data;
pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
