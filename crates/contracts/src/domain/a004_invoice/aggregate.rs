use crate::shared::export::CsvExportable;
use crate::shared::format::{format_amount, format_date};
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Draft,
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

crate::status_display!(InvoiceStatus {
    Draft => ("draft", "Brouillon", Neutral),
    Pending => ("pending", "En attente", Warning),
    Paid => ("paid", "Payée", Success),
    Overdue => ("overdue", "En retard", Error),
    Cancelled => ("cancelled", "Annulée", Neutral),
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub amount: f64,
}

/// Customer invoice. Totals are stored as issued and are not recomputed
/// from the lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub number: String,
    pub customer_id: String,
    pub customer_name: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub lines: Vec<InvoiceLine>,
    pub total_excl_tax: f64,
    pub vat: f64,
    pub total_incl_tax: f64,
    pub status: InvoiceStatus,
}

impl Searchable for Invoice {
    type Status = InvoiceStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.number.as_str(), self.customer_name.as_str()]
    }

    fn status(&self) -> InvoiceStatus {
        self.status
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.issue_date)
    }
}

impl CsvExportable for Invoice {
    fn headers() -> Vec<&'static str> {
        vec!["Numéro", "Client", "Date", "Échéance", "Total HT", "TVA", "Total TTC", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.number.clone(),
            self.customer_name.clone(),
            format_date(self.issue_date),
            format_date(self.due_date),
            format_amount(self.total_excl_tax),
            format_amount(self.vat),
            format_amount(self.total_incl_tax),
            self.status.label().to_string(),
        ]
    }
}
