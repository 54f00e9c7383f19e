use crate::shared::export::CsvExportable;
use crate::shared::format::{format_amount, format_date};
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplierStatus {
    Active,
    Suspended,
    Blocked,
}

crate::status_display!(SupplierStatus {
    Active => ("active", "Actif", Success),
    Suspended => ("suspended", "Suspendu", Warning),
    Blocked => ("blocked", "Bloqué", Error),
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub code: String,
    pub name: String,
    /// Taxpayer number (NIU / NCC depending on the country).
    pub tax_id: String,
    pub city: String,
    pub country: String,
    pub contact_email: String,
    pub phone: String,
    pub balance_due: f64,
    pub created_on: NaiveDate,
    pub status: SupplierStatus,
}

impl Searchable for Supplier {
    type Status = SupplierStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.code.as_str(),
            self.name.as_str(),
            self.tax_id.as_str(),
            self.city.as_str(),
        ]
    }

    fn status(&self) -> SupplierStatus {
        self.status
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.created_on)
    }
}

impl CsvExportable for Supplier {
    fn headers() -> Vec<&'static str> {
        vec!["Code", "Raison sociale", "NIU", "Ville", "Pays", "Solde dû", "Créé le", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.tax_id.clone(),
            self.city.clone(),
            self.country.clone(),
            format_amount(self.balance_due),
            format_date(self.created_on),
            self.status.label().to_string(),
        ]
    }
}
