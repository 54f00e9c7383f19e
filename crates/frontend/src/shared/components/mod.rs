pub mod detail_grid;
pub mod filter_panel;
pub mod list_header;
pub mod page_header;
pub mod row_toggle;
pub mod stat_card;
pub mod ui;
pub mod wizard_steps;

pub use detail_grid::DetailGrid;
pub use filter_panel::FilterPanel;
pub use list_header::ListHeader;
pub use page_header::PageHeader;
pub use row_toggle::RowToggle;
pub use stat_card::{StatCard, StatFormat, StatTone};
pub use wizard_steps::WizardSteps;
