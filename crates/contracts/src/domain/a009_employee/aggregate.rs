use crate::shared::export::CsvExportable;
use crate::shared::format::{format_amount, format_date};
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use crate::shared::validation::{FieldErrors, ValidationRules};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Suspended,
    Terminated,
}

crate::status_display!(EmployeeStatus {
    Active => ("active", "Actif", Success),
    OnLeave => ("on_leave", "En congé", Primary),
    Suspended => ("suspended", "Suspendu", Warning),
    Terminated => ("terminated", "Sorti", Neutral),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    Permanent,
    FixedTerm,
    Internship,
}

impl ContractType {
    pub const ALL: [ContractType; 3] = [
        ContractType::Permanent,
        ContractType::FixedTerm,
        ContractType::Internship,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ContractType::Permanent => "cdi",
            ContractType::FixedTerm => "cdd",
            ContractType::Internship => "stage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContractType::Permanent => "CDI",
            ContractType::FixedTerm => "CDD",
            ContractType::Internship => "Stage",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    /// Staff number, e.g. "MAT-0042".
    pub registration_number: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub hire_date: NaiveDate,
    pub base_salary: f64,
    pub contract: ContractType,
    /// Social security (CNPS) number.
    pub social_security_number: String,
    pub status: EmployeeStatus,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Required fields of the edit form.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        let required = ValidationRules::required();
        errors.check("first_name", required.validate_string(&self.first_name, "Prénom"));
        errors.check("last_name", required.validate_string(&self.last_name, "Nom"));
        errors.check("position", required.validate_string(&self.position, "Poste"));
        errors.check(
            "email",
            ValidationRules::required()
                .email()
                .validate_string(&self.email, "E-mail"),
        );
        errors.check(
            "base_salary",
            ValidationRules::none()
                .min(0.0)
                .validate_number(self.base_salary, "Salaire de base"),
        );
        errors.into_result()
    }
}

impl Searchable for Employee {
    type Status = EmployeeStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.registration_number.as_str(),
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.position.as_str(),
            self.department.as_str(),
            self.email.as_str(),
        ]
    }

    fn status(&self) -> EmployeeStatus {
        self.status
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.hire_date)
    }
}

impl CsvExportable for Employee {
    fn headers() -> Vec<&'static str> {
        vec!["Matricule", "Nom", "Poste", "Département", "Contrat", "Embauche", "Salaire de base", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.registration_number.clone(),
            self.full_name(),
            self.position.clone(),
            self.department.clone(),
            self.contract.label().to_string(),
            format_date(self.hire_date),
            format_amount(self.base_salary),
            self.status.label().to_string(),
        ]
    }
}

/// Payload sent when the employee form is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdateRequest {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub base_salary: f64,
    pub contract: ContractType,
    pub status: EmployeeStatus,
}

impl From<&Employee> for EmployeeUpdateRequest {
    fn from(e: &Employee) -> Self {
        Self {
            employee_id: e.id.clone(),
            first_name: e.first_name.trim().to_string(),
            last_name: e.last_name.trim().to_string(),
            position: e.position.trim().to_string(),
            department: e.department.trim().to_string(),
            email: e.email.trim().to_string(),
            phone: e.phone.trim().to_string(),
            base_salary: e.base_salary,
            contract: e.contract,
            status: e.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> Employee {
        Employee {
            id: "emp-1".into(),
            registration_number: "MAT-0001".into(),
            first_name: "Awa".into(),
            last_name: "Diallo".into(),
            position: "Comptable".into(),
            department: "Finance".into(),
            email: "awa.diallo@example.sn".into(),
            phone: "+221 77 000 00 00".into(),
            hire_date: NaiveDate::from_ymd_opt(2021, 9, 1).unwrap(),
            base_salary: 450_000.0,
            contract: ContractType::Permanent,
            social_security_number: "CNPS-1".into(),
            status: EmployeeStatus::Active,
        }
    }

    #[test]
    fn test_valid_employee() {
        assert!(employee().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let mut e = employee();
        e.last_name = " ".into();
        e.email = "awa.diallo".into();
        e.base_salary = -1.0;
        let errors = e.validate().unwrap_err();
        assert!(errors.get("last_name").is_some());
        assert!(errors.get("email").is_some());
        assert!(errors.get("base_salary").is_some());
        assert!(errors.get("first_name").is_none());
    }

    #[test]
    fn test_update_request_trims() {
        let mut e = employee();
        e.position = "  Chef comptable ".into();
        let request = EmployeeUpdateRequest::from(&e);
        assert_eq!(request.position, "Chef comptable");
        assert_eq!(request.employee_id, "emp-1");
    }
}
