//! Business records of the suite, one module per entity.
//!
//! Accounting: a001-a008, HR: a009-a012, purchasing / sales / inventory /
//! billing: a013-a016, workflows: a017.

pub mod a001_account;
pub mod a002_supplier;
pub mod a003_customer;
pub mod a004_invoice;
pub mod a005_payment;
pub mod a006_journal_entry;
pub mod a007_budget;
pub mod a008_tax_payment;
pub mod a009_employee;
pub mod a010_disciplinary_case;
pub mod a011_compliance_item;
pub mod a012_training;
pub mod a013_purchase_order;
pub mod a014_sales_order;
pub mod a015_stock_item;
pub mod a016_subscription;
pub mod a017_workflow_template;
