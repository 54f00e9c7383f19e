//! Employee record: view.rs renders, view_model.rs loads, validates and
//! submits.

mod view;
mod view_model;

pub use view::EmployeeDetails;
pub use view_model::EmployeeDetailsViewModel;
