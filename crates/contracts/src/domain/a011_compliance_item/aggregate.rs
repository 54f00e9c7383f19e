use crate::domain::a010_disciplinary_case::Severity;
use crate::shared::export::CsvExportable;
use crate::shared::format::format_date;
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Compliant,
    Pending,
    NonCompliant,
}

crate::status_display!(ComplianceStatus {
    Compliant => ("compliant", "Conforme", Success),
    Pending => ("pending", "À vérifier", Warning),
    NonCompliant => ("non_compliant", "Non conforme", Error),
});

/// Regulatory obligation tracked by HR (labour code, social security,
/// health and safety).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub id: String,
    pub title: String,
    pub regulation: String,
    pub owner: String,
    pub due_date: NaiveDate,
    pub severity: Severity,
    pub notes: String,
    pub status: ComplianceStatus,
}

impl Searchable for ComplianceItem {
    type Status = ComplianceStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.regulation.as_str(), self.owner.as_str()]
    }

    fn status(&self) -> ComplianceStatus {
        self.status
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.due_date)
    }
}

impl CsvExportable for ComplianceItem {
    fn headers() -> Vec<&'static str> {
        vec!["Obligation", "Référence légale", "Responsable", "Échéance", "Gravité", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.regulation.clone(),
            self.owner.clone(),
            format_date(self.due_date),
            self.severity.label().to_string(),
            self.status.label().to_string(),
        ]
    }
}
