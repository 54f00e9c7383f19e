use crate::shared::export::CsvExportable;
use crate::shared::format::{format_amount, format_date};
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalesStatus {
    Quote,
    Confirmed,
    Delivered,
    Invoiced,
    Cancelled,
}

crate::status_display!(SalesStatus {
    Quote => ("quote", "Devis", Neutral),
    Confirmed => ("confirmed", "Confirmée", Primary),
    Delivered => ("delivered", "Livrée", Warning),
    Invoiced => ("invoiced", "Facturée", Success),
    Cancelled => ("cancelled", "Annulée", Error),
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    pub id: String,
    pub number: String,
    pub customer_id: String,
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub salesperson: String,
    pub item_count: u32,
    pub total: f64,
    pub status: SalesStatus,
}

impl Searchable for SalesOrder {
    type Status = SalesStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.number.as_str(),
            self.customer_name.as_str(),
            self.salesperson.as_str(),
        ]
    }

    fn status(&self) -> SalesStatus {
        self.status
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.order_date)
    }
}

impl CsvExportable for SalesOrder {
    fn headers() -> Vec<&'static str> {
        vec!["Numéro", "Client", "Date", "Commercial", "Articles", "Total", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.number.clone(),
            self.customer_name.clone(),
            format_date(self.order_date),
            self.salesperson.clone(),
            self.item_count.to_string(),
            format_amount(self.total),
            self.status.label().to_string(),
        ]
    }
}
