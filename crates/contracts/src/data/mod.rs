//! Data access for the pages. Records are loaded when a page mounts;
//! edits go back through [`DataSource::submit`].

pub mod fixtures;

pub use fixtures::FixtureDataSource;

use crate::domain::a001_account::Account;
use crate::domain::a002_supplier::Supplier;
use crate::domain::a003_customer::Customer;
use crate::domain::a004_invoice::Invoice;
use crate::domain::a005_payment::Payment;
use crate::domain::a006_journal_entry::JournalEntry;
use crate::domain::a007_budget::Budget;
use crate::domain::a008_tax_payment::TaxPayment;
use crate::domain::a009_employee::{Employee, EmployeeUpdateRequest};
use crate::domain::a010_disciplinary_case::{DisciplinaryCase, DisciplinaryCaseRequest};
use crate::domain::a011_compliance_item::ComplianceItem;
use crate::domain::a012_training::Training;
use crate::domain::a013_purchase_order::PurchaseOrder;
use crate::domain::a014_sales_order::SalesOrder;
use crate::domain::a015_stock_item::StockItem;
use crate::domain::a016_subscription::Subscription;
use crate::domain::a017_workflow_template::WorkflowTemplate;
use crate::usecases::u501_tax_payment::TaxPaymentRequest;
use crate::usecases::u502_customer_payment::CustomerPaymentRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("{entity} introuvable : {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("Demande refusée : {0}")]
    Rejected(String),
}

impl DataError {
    pub fn not_found(entity: &'static str, id: &str) -> Self {
        DataError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Everything a page may hand back for processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum SubmitRequest {
    EmployeeUpdate(EmployeeUpdateRequest),
    DisciplinaryCase(DisciplinaryCaseRequest),
    TaxPayment(TaxPaymentRequest),
    CustomerPayment(CustomerPaymentRequest),
}

impl SubmitRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitRequest::EmployeeUpdate(_) => "employee_update",
            SubmitRequest::DisciplinaryCase(_) => "disciplinary_case",
            SubmitRequest::TaxPayment(_) => "tax_payment",
            SubmitRequest::CustomerPayment(_) => "customer_payment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub reference: String,
    pub kind: String,
    pub received_at: DateTime<Utc>,
}

#[async_trait(?Send)]
pub trait DataSource {
    async fn list_accounts(&self) -> Result<Vec<Account>, DataError>;
    async fn list_suppliers(&self) -> Result<Vec<Supplier>, DataError>;
    async fn list_customers(&self) -> Result<Vec<Customer>, DataError>;
    async fn list_invoices(&self) -> Result<Vec<Invoice>, DataError>;
    async fn list_payments(&self) -> Result<Vec<Payment>, DataError>;
    async fn list_journal_entries(&self) -> Result<Vec<JournalEntry>, DataError>;
    async fn list_budgets(&self) -> Result<Vec<Budget>, DataError>;
    async fn list_tax_payments(&self) -> Result<Vec<TaxPayment>, DataError>;
    async fn list_employees(&self) -> Result<Vec<Employee>, DataError>;
    async fn list_disciplinary_cases(&self) -> Result<Vec<DisciplinaryCase>, DataError>;
    async fn list_compliance_items(&self) -> Result<Vec<ComplianceItem>, DataError>;
    async fn list_trainings(&self) -> Result<Vec<Training>, DataError>;
    async fn list_purchase_orders(&self) -> Result<Vec<PurchaseOrder>, DataError>;
    async fn list_sales_orders(&self) -> Result<Vec<SalesOrder>, DataError>;
    async fn list_stock_items(&self) -> Result<Vec<StockItem>, DataError>;
    async fn list_subscriptions(&self) -> Result<Vec<Subscription>, DataError>;
    async fn list_workflow_templates(&self) -> Result<Vec<WorkflowTemplate>, DataError>;

    async fn get_employee_by_id(&self, id: &str) -> Result<Employee, DataError> {
        self.list_employees()
            .await?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| DataError::not_found("Employé", id))
    }

    async fn get_invoice_by_id(&self, id: &str) -> Result<Invoice, DataError> {
        self.list_invoices()
            .await?
            .into_iter()
            .find(|i| i.id == id)
            .ok_or_else(|| DataError::not_found("Facture", id))
    }

    async fn get_payment_by_id(&self, id: &str) -> Result<Payment, DataError> {
        self.list_payments()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DataError::not_found("Paiement", id))
    }

    /// Integration point for edits and wizard submissions.
    async fn submit(&self, request: SubmitRequest) -> Result<SubmitReceipt, DataError>;
}
