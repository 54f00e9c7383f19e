use crate::shared::export::CsvExportable;
use crate::shared::format::{format_amount, format_date};
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Posted,
    Cancelled,
}

crate::status_display!(PaymentStatus {
    Pending => ("pending", "En attente", Warning),
    Posted => ("posted", "Comptabilisé", Success),
    Cancelled => ("cancelled", "Annulé", Neutral),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    Cheque,
    MobileMoney,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::BankTransfer,
        PaymentMethod::Cheque,
        PaymentMethod::MobileMoney,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::BankTransfer => "transfer",
            PaymentMethod::Cheque => "cheque",
            PaymentMethod::MobileMoney => "mobile_money",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Espèces",
            PaymentMethod::BankTransfer => "Virement",
            PaymentMethod::Cheque => "Chèque",
            PaymentMethod::MobileMoney => "Mobile Money",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }
}

/// Share of a payment applied to one invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentAllocation {
    pub invoice_number: String,
    pub amount: f64,
}

/// Customer receipt. `amount` is not tied to the sum of allocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub reference: String,
    pub date: NaiveDate,
    pub customer_id: String,
    pub customer_name: String,
    /// Treasury account receiving the funds (class 5).
    pub account_number: String,
    pub method: PaymentMethod,
    pub amount: f64,
    pub allocations: Vec<PaymentAllocation>,
    pub status: PaymentStatus,
}

impl Searchable for Payment {
    type Status = PaymentStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.reference.as_str(), self.customer_name.as_str()];
        fields.extend(self.allocations.iter().map(|a| a.invoice_number.as_str()));
        fields
    }

    fn status(&self) -> PaymentStatus {
        self.status
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

impl CsvExportable for Payment {
    fn headers() -> Vec<&'static str> {
        vec!["Référence", "Date", "Client", "Compte", "Mode", "Montant", "Factures", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let invoices: Vec<&str> = self
            .allocations
            .iter()
            .map(|a| a.invoice_number.as_str())
            .collect();
        vec![
            self.reference.clone(),
            format_date(self.date),
            self.customer_name.clone(),
            self.account_number.clone(),
            self.method.label().to_string(),
            format_amount(self.amount),
            invoices.join(", "),
            self.status.label().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_codes_round_trip() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_code(method.code()), Some(method));
        }
        assert_eq!(PaymentMethod::from_code("barter"), None);
    }
}
