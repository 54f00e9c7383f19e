use crate::shared::export::CsvExportable;
use crate::shared::format::{format_amount, format_date};
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    Draft,
    Approved,
    Closed,
}

crate::status_display!(BudgetStatus {
    Draft => ("draft", "Brouillon", Neutral),
    Approved => ("approved", "Approuvé", Success),
    Closed => ("closed", "Clôturé", Primary),
});

/// One revision of a budget's envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetVersion {
    pub version: u32,
    pub date: NaiveDate,
    pub total: f64,
    pub author: String,
    pub note: String,
}

/// Departmental budget. `total`, `spent` and `remaining` are recorded
/// figures; no reconciliation between them is assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub code: String,
    pub name: String,
    pub department: String,
    pub fiscal_year: i32,
    pub start_date: NaiveDate,
    pub total: f64,
    pub spent: f64,
    pub remaining: f64,
    pub versions: Vec<BudgetVersion>,
    pub status: BudgetStatus,
}

impl Budget {
    /// Share of the envelope consumed, as recorded. Zero when the total is
    /// not positive.
    pub fn consumption_ratio(&self) -> f64 {
        if self.total > 0.0 {
            self.spent / self.total
        } else {
            0.0
        }
    }

    pub fn latest_version(&self) -> Option<&BudgetVersion> {
        self.versions.iter().max_by_key(|v| v.version)
    }
}

impl Searchable for Budget {
    type Status = BudgetStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.name.as_str(), self.department.as_str()]
    }

    fn status(&self) -> BudgetStatus {
        self.status
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.start_date)
    }
}

impl CsvExportable for Budget {
    fn headers() -> Vec<&'static str> {
        vec!["Code", "Budget", "Département", "Exercice", "Début", "Total", "Consommé", "Restant", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.department.clone(),
            self.fiscal_year.to_string(),
            format_date(self.start_date),
            format_amount(self.total),
            format_amount(self.spent),
            format_amount(self.remaining),
            self.status.label().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(total: f64, spent: f64) -> Budget {
        Budget {
            id: "b".into(),
            code: "BUD".into(),
            name: "Test".into(),
            department: "Finance".into(),
            fiscal_year: 2024,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            total,
            spent,
            remaining: 0.0,
            versions: vec![
                BudgetVersion { version: 1, date: NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(), total: 10.0, author: "A".into(), note: String::new() },
                BudgetVersion { version: 3, date: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(), total: 12.0, author: "B".into(), note: String::new() },
                BudgetVersion { version: 2, date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), total: 11.0, author: "C".into(), note: String::new() },
            ],
            status: BudgetStatus::Approved,
        }
    }

    #[test]
    fn test_consumption_ratio() {
        assert_eq!(budget(200.0, 50.0).consumption_ratio(), 0.25);
        assert_eq!(budget(0.0, 50.0).consumption_ratio(), 0.0);
    }

    #[test]
    fn test_latest_version() {
        assert_eq!(budget(1.0, 0.0).latest_version().map(|v| v.version), Some(3));
    }
}
