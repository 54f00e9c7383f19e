use crate::shared::export::CsvExportable;
use crate::shared::format::format_date;
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use crate::shared::validation::{FieldErrors, ValidationRules};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Open,
    UnderReview,
    Closed,
}

crate::status_display!(CaseStatus {
    Open => ("open", "Ouvert", Warning),
    UnderReview => ("under_review", "En instruction", Primary),
    Closed => ("closed", "Clos", Neutral),
});

/// Gravity of a case or a compliance gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

crate::status_display!(Severity {
    Low => ("low", "Faible", Neutral),
    Medium => ("medium", "Moyenne", Primary),
    High => ("high", "Élevée", Warning),
    Critical => ("critical", "Critique", Error),
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplinaryCase {
    pub id: String,
    pub reference: String,
    pub employee_id: String,
    pub employee_name: String,
    pub opened_on: NaiveDate,
    pub category: String,
    pub description: String,
    pub severity: Severity,
    pub sanction: Option<String>,
    pub status: CaseStatus,
}

impl Searchable for DisciplinaryCase {
    type Status = CaseStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.reference.as_str(),
            self.employee_name.as_str(),
            self.category.as_str(),
        ]
    }

    fn status(&self) -> CaseStatus {
        self.status
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.opened_on)
    }
}

impl CsvExportable for DisciplinaryCase {
    fn headers() -> Vec<&'static str> {
        vec!["Référence", "Employé", "Ouvert le", "Motif", "Gravité", "Sanction", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.reference.clone(),
            self.employee_name.clone(),
            format_date(self.opened_on),
            self.category.clone(),
            self.severity.label().to_string(),
            self.sanction.clone().unwrap_or_default(),
            self.status.label().to_string(),
        ]
    }
}

/// Payload of the "new disciplinary case" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplinaryCaseRequest {
    pub employee_id: String,
    pub opened_on: Option<NaiveDate>,
    pub category: String,
    pub description: String,
    pub severity: Severity,
}

impl Default for DisciplinaryCaseRequest {
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            opened_on: None,
            category: String::new(),
            description: String::new(),
            severity: Severity::Low,
        }
    }
}

impl DisciplinaryCaseRequest {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        let required = ValidationRules::required();
        errors.check("employee_id", required.validate_string(&self.employee_id, "Employé"));
        errors.check("category", required.validate_string(&self.category, "Motif"));
        errors.check(
            "description",
            ValidationRules::required()
                .min_length(10)
                .validate_string(&self.description, "Description des faits"),
        );
        if self.opened_on.is_none() {
            errors.insert("opened_on", "Date des faits est obligatoire");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_lists_every_required_field() {
        let errors = DisciplinaryCaseRequest::default().validate().unwrap_err();
        for field in ["employee_id", "category", "description", "opened_on"] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn test_complete_request() {
        let request = DisciplinaryCaseRequest {
            employee_id: "emp-3".into(),
            opened_on: NaiveDate::from_ymd_opt(2024, 4, 2),
            category: "Absence injustifiée".into(),
            description: "Trois jours d'absence sans justificatif".into(),
            severity: Severity::Medium,
        };
        assert!(request.validate().is_ok());
    }
}
