use super::date;
use crate::domain::a009_employee::{ContractType, Employee, EmployeeStatus};
use crate::domain::a010_disciplinary_case::{CaseStatus, DisciplinaryCase, Severity};
use crate::domain::a011_compliance_item::{ComplianceItem, ComplianceStatus};
use crate::domain::a012_training::{Training, TrainingStatus};
use chrono::NaiveDate;

#[allow(clippy::too_many_arguments)]
fn employee(
    n: u32,
    (first_name, last_name): (&str, &str),
    position: &str,
    department: &str,
    phone: &str,
    hire_date: NaiveDate,
    base_salary: f64,
    contract: ContractType,
    status: EmployeeStatus,
) -> Employee {
    Employee {
        id: format!("emp-{:03}", n),
        registration_number: format!("MAT-{:04}", n),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        position: position.to_string(),
        department: department.to_string(),
        email: format!(
            "{}.{}@ohada-suite.cm",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone: phone.to_string(),
        hire_date,
        base_salary,
        contract,
        social_security_number: format!("CNPS-{:08}", 10_450_000 + n * 137),
        status,
    }
}

pub fn employees() -> Vec<Employee> {
    use ContractType::*;
    use EmployeeStatus::*;
    vec![
        employee(1, ("Aminata", "Diallo"), "Directrice administrative et financière", "Finance", "+237 6 77 12 34 56", date(2015, 3, 2), 1_850_000.0, Permanent, Active),
        employee(2, ("Jean", "Mbarga"), "Responsable informatique", "Systèmes d'information", "+237 6 99 45 12 03", date(2018, 9, 17), 1_200_000.0, Permanent, Active),
        employee(3, ("Fatou", "Ndiaye"), "Responsable RH", "Ressources humaines", "+237 6 55 78 90 11", date(2017, 1, 9), 1_100_000.0, Permanent, OnLeave),
        employee(4, ("Koffi", "Kouassi"), "Comptable", "Finance", "+237 6 70 11 22 33", date(2020, 6, 1), 650_000.0, Permanent, Active),
        employee(5, ("Seydou", "Traoré"), "Chef magasinier", "Logistique", "+237 6 91 02 47 58", date(2016, 11, 14), 480_000.0, Permanent, Active),
        employee(6, ("Mariam", "Ouédraogo"), "Commerciale terrain", "Commercial", "+237 6 52 63 74 85", date(2022, 2, 1), 420_000.0, FixedTerm, Active),
        employee(7, ("Paul", "Essomba"), "Chauffeur livreur", "Logistique", "+237 6 78 89 90 12", date(2019, 4, 23), 260_000.0, Permanent, Suspended),
        employee(8, ("Awa", "Coulibaly"), "Assistante comptable", "Finance", "+237 6 93 14 25 36", date(2024, 1, 8), 150_000.0, Internship, Active),
        employee(9, ("Ibrahim", "Sanogo"), "Technicien maintenance", "Production", "+237 6 67 58 49 30", date(2014, 7, 7), 390_000.0, Permanent, Terminated),
        employee(10, ("Grace", "Nkoulou"), "Chargée de clientèle", "Commercial", "+237 6 50 41 32 23", date(2023, 5, 15), 350_000.0, FixedTerm, Active),
    ]
}

pub fn disciplinary_cases() -> Vec<DisciplinaryCase> {
    vec![
        DisciplinaryCase {
            id: "dc-001".to_string(),
            reference: "DISC-2024-001".to_string(),
            employee_id: "emp-007".to_string(),
            employee_name: "Paul Essomba".to_string(),
            opened_on: date(2024, 2, 12),
            category: "Absences injustifiées".to_string(),
            description: "Trois absences non justifiées en janvier malgré un premier rappel écrit.".to_string(),
            severity: Severity::High,
            sanction: Some("Mise à pied de 5 jours".to_string()),
            status: CaseStatus::Closed,
        },
        DisciplinaryCase {
            id: "dc-002".to_string(),
            reference: "DISC-2024-002".to_string(),
            employee_id: "emp-005".to_string(),
            employee_name: "Seydou Traoré".to_string(),
            opened_on: date(2024, 3, 4),
            category: "Écart d'inventaire".to_string(),
            description: "Écart de stock constaté lors de l'inventaire tournant du magasin central.".to_string(),
            severity: Severity::Medium,
            sanction: None,
            status: CaseStatus::UnderReview,
        },
        DisciplinaryCase {
            id: "dc-003".to_string(),
            reference: "DISC-2024-003".to_string(),
            employee_id: "emp-006".to_string(),
            employee_name: "Mariam Ouédraogo".to_string(),
            opened_on: date(2024, 4, 18),
            category: "Retards répétés".to_string(),
            description: "Retards répétés aux réunions commerciales hebdomadaires.".to_string(),
            severity: Severity::Low,
            sanction: Some("Avertissement oral".to_string()),
            status: CaseStatus::Open,
        },
        DisciplinaryCase {
            id: "dc-004".to_string(),
            reference: "DISC-2023-014".to_string(),
            employee_id: "emp-009".to_string(),
            employee_name: "Ibrahim Sanogo".to_string(),
            opened_on: date(2023, 10, 2),
            category: "Manquement à la sécurité".to_string(),
            description: "Intervention sur machine sous tension sans consignation préalable.".to_string(),
            severity: Severity::Critical,
            sanction: Some("Licenciement pour faute grave".to_string()),
            status: CaseStatus::Closed,
        },
    ]
}

pub fn compliance_items() -> Vec<ComplianceItem> {
    vec![
        ComplianceItem {
            id: "cmp-001".to_string(),
            title: "Déclaration mensuelle CNPS".to_string(),
            regulation: "Code de sécurité sociale".to_string(),
            owner: "Fatou Ndiaye".to_string(),
            due_date: date(2024, 4, 15),
            severity: Severity::High,
            notes: "Télédéclaration effectuée, accusé reçu.".to_string(),
            status: ComplianceStatus::Compliant,
        },
        ComplianceItem {
            id: "cmp-002".to_string(),
            title: "Registre du personnel à jour".to_string(),
            regulation: "Code du travail, art. 116".to_string(),
            owner: "Fatou Ndiaye".to_string(),
            due_date: date(2024, 6, 30),
            severity: Severity::Medium,
            notes: "Deux contrats CDD à enregistrer.".to_string(),
            status: ComplianceStatus::Pending,
        },
        ComplianceItem {
            id: "cmp-003".to_string(),
            title: "Visite médicale annuelle".to_string(),
            regulation: "Code du travail, médecine du travail".to_string(),
            owner: "Aminata Diallo".to_string(),
            due_date: date(2024, 3, 31),
            severity: Severity::High,
            notes: "Quatre salariés non examinés.".to_string(),
            status: ComplianceStatus::NonCompliant,
        },
        ComplianceItem {
            id: "cmp-004".to_string(),
            title: "Dépôt des états financiers SYSCOHADA".to_string(),
            regulation: "Acte uniforme OHADA relatif au droit comptable".to_string(),
            owner: "Koffi Kouassi".to_string(),
            due_date: date(2024, 6, 30),
            severity: Severity::Critical,
            notes: String::new(),
            status: ComplianceStatus::Pending,
        },
        ComplianceItem {
            id: "cmp-005".to_string(),
            title: "Affichage du règlement intérieur".to_string(),
            regulation: "Code du travail".to_string(),
            owner: "Fatou Ndiaye".to_string(),
            due_date: date(2024, 1, 31),
            severity: Severity::Low,
            notes: "Version visée par l'inspection du travail.".to_string(),
            status: ComplianceStatus::Compliant,
        },
    ]
}

pub fn trainings() -> Vec<Training> {
    vec![
        Training {
            id: "trn-001".to_string(),
            title: "SYSCOHADA révisé : nouveautés".to_string(),
            provider: "Ordre des Experts-Comptables".to_string(),
            start_date: date(2024, 2, 19),
            end_date: date(2024, 2, 21),
            participants: 4,
            capacity: 6,
            cost: 1_350_000.0,
            status: TrainingStatus::Completed,
        },
        Training {
            id: "trn-002".to_string(),
            title: "Sécurité incendie et évacuation".to_string(),
            provider: "Sapeurs-pompiers de Douala".to_string(),
            start_date: date(2024, 4, 8),
            end_date: date(2024, 4, 8),
            participants: 18,
            capacity: 20,
            cost: 400_000.0,
            status: TrainingStatus::InProgress,
        },
        Training {
            id: "trn-003".to_string(),
            title: "Techniques de vente B2B".to_string(),
            provider: "Africa Business School".to_string(),
            start_date: date(2024, 5, 13),
            end_date: date(2024, 5, 17),
            participants: 3,
            capacity: 12,
            cost: 2_100_000.0,
            status: TrainingStatus::Planned,
        },
        Training {
            id: "trn-004".to_string(),
            title: "Conduite de chariot élévateur".to_string(),
            provider: "CFPM Logistique".to_string(),
            start_date: date(2024, 3, 11),
            end_date: date(2024, 3, 13),
            participants: 0,
            capacity: 8,
            cost: 0.0,
            status: TrainingStatus::Cancelled,
        },
    ]
}
