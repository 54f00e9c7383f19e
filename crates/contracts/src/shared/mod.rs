//! Pure helpers shared by every page: list filtering, row expansion,
//! wizard stepping, form validation, formatting and CSV export.

pub mod expansion;
pub mod export;
pub mod format;
pub mod list_filter;
pub mod status;
pub mod validation;
pub mod wizard;

pub use expansion::ExpansionSet;
pub use list_filter::{filter_records, DateRange, ListFilter, Searchable};
pub use status::{BadgeTone, StatusDisplay};
pub use wizard::WizardState;
