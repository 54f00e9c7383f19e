use crate::domain::a004_invoice::{Invoice, InvoiceStatus};
use crate::domain::a009_employee::{Employee, EmployeeStatus};
use crate::domain::a015_stock_item::{StockItem, StockStatus};
use crate::domain::a016_subscription::{Subscription, SubscriptionStatus};
use serde::{Deserialize, Serialize};

/// Headline figures of the overview dashboard. Derived for display only;
/// nothing is reconciled against the detail records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewSummary {
    /// Total incl. tax of pending and overdue invoices.
    pub receivables_outstanding: f64,
    pub overdue_invoices: usize,
    /// Employees at work or on leave.
    pub active_employees: usize,
    /// Items at or below their reorder level, out-of-stock included.
    pub low_stock_items: usize,
    pub active_subscriptions: usize,
    pub recurring_revenue: f64,
}

impl OverviewSummary {
    pub fn from_records(
        invoices: &[Invoice],
        employees: &[Employee],
        stock: &[StockItem],
        subscriptions: &[Subscription],
    ) -> Self {
        let open_invoices = invoices
            .iter()
            .filter(|i| matches!(i.status, InvoiceStatus::Pending | InvoiceStatus::Overdue));
        let active_subs: Vec<&Subscription> = subscriptions
            .iter()
            .filter(|s| s.status == SubscriptionStatus::Active)
            .collect();

        Self {
            receivables_outstanding: open_invoices.map(|i| i.total_incl_tax).sum(),
            overdue_invoices: invoices
                .iter()
                .filter(|i| i.status == InvoiceStatus::Overdue)
                .count(),
            active_employees: employees
                .iter()
                .filter(|e| matches!(e.status, EmployeeStatus::Active | EmployeeStatus::OnLeave))
                .count(),
            low_stock_items: stock
                .iter()
                .filter(|s| s.status != StockStatus::InStock)
                .count(),
            active_subscriptions: active_subs.len(),
            recurring_revenue: active_subs.iter().map(|s| s.amount).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs() {
        let summary = OverviewSummary::from_records(&[], &[], &[], &[]);
        assert_eq!(summary, OverviewSummary::default());
    }
}
