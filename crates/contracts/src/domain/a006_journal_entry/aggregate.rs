use crate::shared::export::CsvExportable;
use crate::shared::format::{format_amount, format_date};
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    Draft,
    Posted,
    Cancelled,
}

crate::status_display!(EntryStatus {
    Draft => ("draft", "Brouillard", Neutral),
    Posted => ("posted", "Validée", Success),
    Cancelled => ("cancelled", "Annulée", Error),
});

/// Accounting journal the entry is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JournalCode {
    Sales,
    Purchases,
    Bank,
    Cash,
    Miscellaneous,
}

impl JournalCode {
    pub fn code(&self) -> &'static str {
        match self {
            JournalCode::Sales => "VE",
            JournalCode::Purchases => "AC",
            JournalCode::Bank => "BQ",
            JournalCode::Cash => "CA",
            JournalCode::Miscellaneous => "OD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JournalCode::Sales => "Ventes",
            JournalCode::Purchases => "Achats",
            JournalCode::Bank => "Banque",
            JournalCode::Cash => "Caisse",
            JournalCode::Miscellaneous => "Opérations diverses",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalLine {
    pub account_number: String,
    pub label: String,
    pub debit: f64,
    pub credit: f64,
}

/// Journal entry. Debit and credit totals are shown side by side but the
/// balance is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub number: String,
    pub date: NaiveDate,
    pub journal: JournalCode,
    pub description: String,
    pub lines: Vec<JournalLine>,
    pub status: EntryStatus,
}

impl JournalEntry {
    pub fn total_debit(&self) -> f64 {
        self.lines.iter().map(|l| l.debit).sum()
    }

    pub fn total_credit(&self) -> f64 {
        self.lines.iter().map(|l| l.credit).sum()
    }
}

impl Searchable for JournalEntry {
    type Status = EntryStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.number.as_str(),
            self.description.as_str(),
            self.journal.code(),
        ];
        fields.extend(self.lines.iter().map(|l| l.account_number.as_str()));
        fields
    }

    fn status(&self) -> EntryStatus {
        self.status
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

impl CsvExportable for JournalEntry {
    fn headers() -> Vec<&'static str> {
        vec!["Pièce", "Date", "Journal", "Libellé", "Débit", "Crédit", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.number.clone(),
            format_date(self.date),
            self.journal.code().to_string(),
            self.description.clone(),
            format_amount(self.total_debit()),
            format_amount(self.total_credit()),
            self.status.label().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbalanced_entry_is_kept_as_is() {
        let entry = JournalEntry {
            id: "je".into(),
            number: "OD-0001".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            journal: JournalCode::Miscellaneous,
            description: "Régularisation".into(),
            lines: vec![
                JournalLine { account_number: "601000".into(), label: "Achats".into(), debit: 100.0, credit: 0.0 },
                JournalLine { account_number: "401000".into(), label: "Fournisseur".into(), debit: 0.0, credit: 90.0 },
            ],
            status: EntryStatus::Draft,
        };
        assert_eq!(entry.total_debit(), 100.0);
        assert_eq!(entry.total_credit(), 90.0);
        assert!(entry.matches_filter("401000"));
        assert!(entry.matches_filter("od"));
    }
}
