use crate::shared::export::CsvExportable;
use crate::shared::format::{format_amount, format_number_int};
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use serde::{Deserialize, Serialize};

/// Stock level as recorded in the warehouse file; it is not derived from
/// `quantity` and `reorder_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    Low,
    OutOfStock,
}

crate::status_display!(StockStatus {
    InStock => ("in_stock", "En stock", Success),
    Low => ("low", "Stock bas", Warning),
    OutOfStock => ("out_of_stock", "Rupture", Error),
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub warehouse: String,
    pub quantity: f64,
    pub unit: String,
    pub reorder_level: f64,
    pub unit_cost: f64,
    pub status: StockStatus,
}

impl StockItem {
    pub fn stock_value(&self) -> f64 {
        self.quantity * self.unit_cost
    }
}

impl Searchable for StockItem {
    type Status = StockStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.sku.as_str(),
            self.name.as_str(),
            self.category.as_str(),
            self.warehouse.as_str(),
        ]
    }

    fn status(&self) -> StockStatus {
        self.status
    }
}

impl CsvExportable for StockItem {
    fn headers() -> Vec<&'static str> {
        vec!["Référence", "Article", "Catégorie", "Entrepôt", "Quantité", "Unité", "Seuil", "Coût unitaire", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.sku.clone(),
            self.name.clone(),
            self.category.clone(),
            self.warehouse.clone(),
            format_number_int(self.quantity),
            self.unit.clone(),
            format_number_int(self.reorder_level),
            format_amount(self.unit_cost),
            self.status.label().to_string(),
        ]
    }
}
