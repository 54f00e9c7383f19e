//! Sample records served when no remote data service is wired in.

mod accounting;
mod hr;
mod trade;
mod workflow;

use super::{DataError, DataSource, SubmitReceipt, SubmitRequest};
use crate::domain::a001_account::Account;
use crate::domain::a002_supplier::Supplier;
use crate::domain::a003_customer::Customer;
use crate::domain::a004_invoice::Invoice;
use crate::domain::a005_payment::Payment;
use crate::domain::a006_journal_entry::JournalEntry;
use crate::domain::a007_budget::Budget;
use crate::domain::a008_tax_payment::TaxPayment;
use crate::domain::a009_employee::Employee;
use crate::domain::a010_disciplinary_case::DisciplinaryCase;
use crate::domain::a011_compliance_item::ComplianceItem;
use crate::domain::a012_training::Training;
use crate::domain::a013_purchase_order::PurchaseOrder;
use crate::domain::a014_sales_order::SalesOrder;
use crate::domain::a015_stock_item::StockItem;
use crate::domain::a016_subscription::Subscription;
use crate::domain::a017_workflow_template::WorkflowTemplate;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Read-only data source over the built-in sample arrays. Submissions
/// are validated and logged, never persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureDataSource;

impl FixtureDataSource {
    pub fn new() -> Self {
        Self
    }

    fn check(&self, request: &SubmitRequest) -> Result<(), DataError> {
        match request {
            SubmitRequest::EmployeeUpdate(update) => {
                if !hr::employees().iter().any(|e| e.id == update.employee_id) {
                    return Err(DataError::not_found("Employé", &update.employee_id));
                }
                Ok(())
            }
            SubmitRequest::DisciplinaryCase(case) => case
                .validate()
                .map_err(|errors| DataError::Rejected(format!("{} champ(s) invalide(s)", errors.len()))),
            SubmitRequest::TaxPayment(_) | SubmitRequest::CustomerPayment(_) => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl DataSource for FixtureDataSource {
    async fn list_accounts(&self) -> Result<Vec<Account>, DataError> {
        Ok(accounting::accounts())
    }

    async fn list_suppliers(&self) -> Result<Vec<Supplier>, DataError> {
        Ok(trade::suppliers())
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, DataError> {
        Ok(trade::customers())
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>, DataError> {
        Ok(accounting::invoices())
    }

    async fn list_payments(&self) -> Result<Vec<Payment>, DataError> {
        Ok(accounting::payments())
    }

    async fn list_journal_entries(&self) -> Result<Vec<JournalEntry>, DataError> {
        Ok(accounting::journal_entries())
    }

    async fn list_budgets(&self) -> Result<Vec<Budget>, DataError> {
        Ok(accounting::budgets())
    }

    async fn list_tax_payments(&self) -> Result<Vec<TaxPayment>, DataError> {
        Ok(accounting::tax_payments())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, DataError> {
        Ok(hr::employees())
    }

    async fn list_disciplinary_cases(&self) -> Result<Vec<DisciplinaryCase>, DataError> {
        Ok(hr::disciplinary_cases())
    }

    async fn list_compliance_items(&self) -> Result<Vec<ComplianceItem>, DataError> {
        Ok(hr::compliance_items())
    }

    async fn list_trainings(&self) -> Result<Vec<Training>, DataError> {
        Ok(hr::trainings())
    }

    async fn list_purchase_orders(&self) -> Result<Vec<PurchaseOrder>, DataError> {
        Ok(trade::purchase_orders())
    }

    async fn list_sales_orders(&self) -> Result<Vec<SalesOrder>, DataError> {
        Ok(trade::sales_orders())
    }

    async fn list_stock_items(&self) -> Result<Vec<StockItem>, DataError> {
        Ok(trade::stock_items())
    }

    async fn list_subscriptions(&self) -> Result<Vec<Subscription>, DataError> {
        Ok(trade::subscriptions())
    }

    async fn list_workflow_templates(&self) -> Result<Vec<WorkflowTemplate>, DataError> {
        Ok(workflow::workflow_templates())
    }

    async fn submit(&self, request: SubmitRequest) -> Result<SubmitReceipt, DataError> {
        self.check(&request)?;
        let payload = serde_json::to_string(&request)
            .map_err(|e| DataError::Rejected(e.to_string()))?;
        log::info!("submit {}: {}", request.kind(), payload);

        Ok(SubmitReceipt {
            reference: Uuid::new_v4().to_string(),
            kind: request.kind().to_string(),
            received_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a009_employee::EmployeeUpdateRequest;
    use crate::domain::a010_disciplinary_case::DisciplinaryCaseRequest;
    use crate::shared::list_filter::Searchable;
    use std::collections::HashSet;

    fn assert_unique_ids<T: Searchable>(records: &[T]) {
        let ids: HashSet<&str> = records.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        assert_unique_ids(&accounting::accounts());
        assert_unique_ids(&accounting::invoices());
        assert_unique_ids(&accounting::payments());
        assert_unique_ids(&accounting::journal_entries());
        assert_unique_ids(&accounting::budgets());
        assert_unique_ids(&accounting::tax_payments());
        assert_unique_ids(&hr::employees());
        assert_unique_ids(&hr::disciplinary_cases());
        assert_unique_ids(&hr::compliance_items());
        assert_unique_ids(&hr::trainings());
        assert_unique_ids(&trade::suppliers());
        assert_unique_ids(&trade::customers());
        assert_unique_ids(&trade::purchase_orders());
        assert_unique_ids(&trade::sales_orders());
        assert_unique_ids(&trade::stock_items());
        assert_unique_ids(&trade::subscriptions());
        assert_unique_ids(&workflow::workflow_templates());
    }

    #[test]
    fn test_dates_are_real_calendar_days() {
        let epoch = NaiveDate::default();
        assert!(accounting::invoices().iter().all(|i| i.issue_date != epoch && i.due_date != epoch));
        assert!(hr::employees().iter().all(|e| e.hire_date != epoch));
        assert!(trade::sales_orders().iter().all(|o| o.order_date != epoch));
    }

    #[test]
    fn test_references_point_to_existing_records() {
        let customers: HashSet<String> = trade::customers().into_iter().map(|c| c.id).collect();
        assert!(accounting::invoices().iter().all(|i| customers.contains(&i.customer_id)));
        assert!(accounting::payments().iter().all(|p| customers.contains(&p.customer_id)));

        let employees: HashSet<String> = hr::employees().into_iter().map(|e| e.id).collect();
        assert!(hr::disciplinary_cases().iter().all(|c| employees.contains(&c.employee_id)));
    }

    #[tokio::test]
    async fn test_lookup_by_id() {
        let source = FixtureDataSource::new();
        let employee = source.get_employee_by_id("emp-002").await.unwrap();
        assert_eq!(employee.id, "emp-002");
        let invoice = source.get_invoice_by_id("inv-001").await.unwrap();
        assert_eq!(invoice.id, "inv-001");
        let payment = source.get_payment_by_id("pay-001").await.unwrap();
        assert_eq!(payment.id, "pay-001");
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let source = FixtureDataSource::new();
        let err = source.get_employee_by_id("emp-999").await.unwrap_err();
        assert_eq!(err, DataError::not_found("Employé", "emp-999"));
        assert!(matches!(
            source.get_invoice_by_id("nope").await,
            Err(DataError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_submit_employee_update() {
        let source = FixtureDataSource::new();
        let employee = source.get_employee_by_id("emp-001").await.unwrap();
        let receipt = source
            .submit(SubmitRequest::EmployeeUpdate(EmployeeUpdateRequest::from(&employee)))
            .await
            .unwrap();
        assert_eq!(receipt.kind, "employee_update");
        assert!(!receipt.reference.is_empty());

        // Nothing is persisted.
        let again = source.get_employee_by_id("emp-001").await.unwrap();
        assert_eq!(again, employee);
    }

    #[tokio::test]
    async fn test_submit_rejects_unknown_employee_and_invalid_case() {
        let source = FixtureDataSource::new();
        let mut update = EmployeeUpdateRequest::from(&hr::employees()[0]);
        update.employee_id = "ghost".into();
        assert!(matches!(
            source.submit(SubmitRequest::EmployeeUpdate(update)).await,
            Err(DataError::NotFound { .. })
        ));

        let case = DisciplinaryCaseRequest::default();
        assert!(matches!(
            source.submit(SubmitRequest::DisciplinaryCase(case)).await,
            Err(DataError::Rejected(_))
        ));
    }
}
