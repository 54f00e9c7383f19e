use crate::shared::export::CsvExportable;
use crate::shared::format::format_amount;
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerStatus {
    Active,
    Inactive,
}

crate::status_display!(CustomerStatus {
    Active => ("active", "Actif", Success),
    Inactive => ("inactive", "Inactif", Neutral),
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub code: String,
    pub name: String,
    pub tax_id: String,
    pub city: String,
    pub email: String,
    pub credit_limit: f64,
    pub outstanding: f64,
    pub status: CustomerStatus,
}

impl Searchable for Customer {
    type Status = CustomerStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.code.as_str(),
            self.name.as_str(),
            self.city.as_str(),
            self.email.as_str(),
        ]
    }

    fn status(&self) -> CustomerStatus {
        self.status
    }
}

impl CsvExportable for Customer {
    fn headers() -> Vec<&'static str> {
        vec!["Code", "Nom", "NIU", "Ville", "E-mail", "Plafond", "Encours", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.tax_id.clone(),
            self.city.clone(),
            self.email.clone(),
            format_amount(self.credit_limit),
            format_amount(self.outstanding),
            self.status.label().to_string(),
        ]
    }
}
