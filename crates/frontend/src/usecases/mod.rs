//! Multi-step wizards.
//!
//! Steps never block on validation; the last step submits through the data
//! source after a short simulated delay, then hands over to the matching
//! list page.

pub mod common;
pub mod u501_tax_payment;
pub mod u502_customer_payment;
