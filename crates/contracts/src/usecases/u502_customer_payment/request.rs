use crate::domain::a004_invoice::{Invoice, InvoiceStatus};
use crate::domain::a005_payment::{PaymentAllocation, PaymentMethod};
use crate::shared::format::parse_input_date;
use crate::usecases::common::parse_amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One open invoice offered for allocation in the second step.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationDraft {
    pub invoice_number: String,
    pub open_amount: f64,
    pub selected: bool,
    pub amount: String,
}

impl AllocationDraft {
    pub fn from_invoice(invoice: &Invoice) -> Self {
        Self {
            invoice_number: invoice.number.clone(),
            open_amount: invoice.total_incl_tax,
            selected: false,
            amount: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerPaymentDraft {
    pub customer_id: String,
    pub customer_name: String,
    /// "YYYY-MM-DD"
    pub date: String,
    pub method: PaymentMethod,
    pub account_number: String,
    pub amount: String,
    pub allocations: Vec<AllocationDraft>,
}

impl Default for CustomerPaymentDraft {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            customer_name: String::new(),
            date: String::new(),
            method: PaymentMethod::BankTransfer,
            account_number: "521100".to_string(),
            amount: String::new(),
            allocations: Vec::new(),
        }
    }
}

impl CustomerPaymentDraft {
    /// Switches to another customer and offers that customer's unpaid
    /// invoices for allocation.
    pub fn select_customer(
        &mut self,
        customer_id: &str,
        customer_name: &str,
        invoices: &[Invoice],
    ) {
        self.customer_id = customer_id.to_string();
        self.customer_name = customer_name.to_string();
        self.allocations = invoices
            .iter()
            .filter(|inv| inv.customer_id == customer_id)
            .filter(|inv| matches!(inv.status, InvoiceStatus::Pending | InvoiceStatus::Overdue))
            .map(AllocationDraft::from_invoice)
            .collect();
    }

    /// Sum of the selected allocation amounts, for display only.
    pub fn allocated_total(&self) -> f64 {
        self.allocations
            .iter()
            .filter(|a| a.selected)
            .map(|a| parse_amount(&a.amount))
            .sum()
    }

    pub fn to_request(&self) -> CustomerPaymentRequest {
        CustomerPaymentRequest {
            customer_id: self.customer_id.clone(),
            customer_name: self.customer_name.clone(),
            date: parse_input_date(&self.date),
            method: self.method,
            account_number: self.account_number.trim().to_string(),
            amount: parse_amount(&self.amount),
            allocations: self
                .allocations
                .iter()
                .filter(|a| a.selected)
                .map(|a| PaymentAllocation {
                    invoice_number: a.invoice_number.clone(),
                    amount: parse_amount(&a.amount),
                })
                .collect(),
        }
    }
}

/// Payload handed to the data source. `amount` and the allocations are
/// not reconciled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPaymentRequest {
    pub customer_id: String,
    pub customer_name: String,
    pub date: Option<NaiveDate>,
    pub method: PaymentMethod,
    pub account_number: String,
    pub amount: f64,
    pub allocations: Vec<PaymentAllocation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_invoice::InvoiceLine;

    fn invoice(number: &str, customer_id: &str, status: InvoiceStatus) -> Invoice {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        Invoice {
            id: number.to_string(),
            number: number.to_string(),
            customer_id: customer_id.to_string(),
            customer_name: "Client".to_string(),
            issue_date: date,
            due_date: date,
            lines: Vec::<InvoiceLine>::new(),
            total_excl_tax: 100.0,
            vat: 19.25,
            total_incl_tax: 119.25,
            status,
        }
    }

    #[test]
    fn test_select_customer_offers_open_invoices_only() {
        let invoices = vec![
            invoice("F-1", "c1", InvoiceStatus::Pending),
            invoice("F-2", "c1", InvoiceStatus::Paid),
            invoice("F-3", "c2", InvoiceStatus::Overdue),
            invoice("F-4", "c1", InvoiceStatus::Overdue),
        ];
        let mut draft = CustomerPaymentDraft::default();
        draft.select_customer("c1", "Client", &invoices);
        let numbers: Vec<&str> = draft
            .allocations
            .iter()
            .map(|a| a.invoice_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["F-1", "F-4"]);
    }

    #[test]
    fn test_request_keeps_selected_allocations() {
        let mut draft = CustomerPaymentDraft::default();
        draft.select_customer(
            "c1",
            "Client",
            &[
                invoice("F-1", "c1", InvoiceStatus::Pending),
                invoice("F-4", "c1", InvoiceStatus::Overdue),
            ],
        );
        draft.amount = "500 000".into();
        draft.allocations[1].selected = true;
        draft.allocations[1].amount = "200 000".into();

        let request = draft.to_request();
        assert_eq!(request.amount, 500_000.0);
        assert_eq!(request.allocations.len(), 1);
        assert_eq!(request.allocations[0].invoice_number, "F-4");
        assert_eq!(draft.allocated_total(), 200_000.0);
    }
}
