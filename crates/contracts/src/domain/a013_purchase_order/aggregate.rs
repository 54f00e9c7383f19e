use crate::shared::export::CsvExportable;
use crate::shared::format::{format_amount, format_date};
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseStatus {
    Draft,
    Sent,
    Received,
    Cancelled,
}

crate::status_display!(PurchaseStatus {
    Draft => ("draft", "Brouillon", Neutral),
    Sent => ("sent", "Envoyée", Primary),
    Received => ("received", "Réceptionnée", Success),
    Cancelled => ("cancelled", "Annulée", Error),
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderLine {
    pub item: String,
    pub quantity: f64,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    pub number: String,
    pub supplier_id: String,
    pub supplier_name: String,
    pub order_date: NaiveDate,
    pub expected_date: NaiveDate,
    pub lines: Vec<PurchaseOrderLine>,
    pub total: f64,
    pub status: PurchaseStatus,
}

impl Searchable for PurchaseOrder {
    type Status = PurchaseStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.number.as_str(), self.supplier_name.as_str()];
        fields.extend(self.lines.iter().map(|l| l.item.as_str()));
        fields
    }

    fn status(&self) -> PurchaseStatus {
        self.status
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.order_date)
    }
}

impl CsvExportable for PurchaseOrder {
    fn headers() -> Vec<&'static str> {
        vec!["Numéro", "Fournisseur", "Commande", "Livraison prévue", "Total", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.number.clone(),
            self.supplier_name.clone(),
            format_date(self.order_date),
            format_date(self.expected_date),
            format_amount(self.total),
            self.status.label().to_string(),
        ]
    }
}
