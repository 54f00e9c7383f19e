pub mod common;
pub mod u501_tax_payment;
pub mod u502_customer_payment;
