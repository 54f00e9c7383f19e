use crate::shared::export::CsvExportable;
use crate::shared::format::{format_amount, format_date, format_optional_date};
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxPaymentStatus {
    Draft,
    Submitted,
    Paid,
    Overdue,
}

crate::status_display!(TaxPaymentStatus {
    Draft => ("draft", "Brouillon", Neutral),
    Submitted => ("submitted", "Déclarée", Primary),
    Paid => ("paid", "Payée", Success),
    Overdue => ("overdue", "En retard", Error),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxType {
    Vat,
    CorporateIncomeTax,
    PayrollTax,
    WithholdingTax,
    BusinessLicense,
}

impl TaxType {
    pub const ALL: [TaxType; 5] = [
        TaxType::Vat,
        TaxType::CorporateIncomeTax,
        TaxType::PayrollTax,
        TaxType::WithholdingTax,
        TaxType::BusinessLicense,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TaxType::Vat => "tva",
            TaxType::CorporateIncomeTax => "is",
            TaxType::PayrollTax => "its",
            TaxType::WithholdingTax => "ras",
            TaxType::BusinessLicense => "patente",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaxType::Vat => "TVA",
            TaxType::CorporateIncomeTax => "Impôt sur les sociétés",
            TaxType::PayrollTax => "Impôt sur traitements et salaires",
            TaxType::WithholdingTax => "Retenue à la source",
            TaxType::BusinessLicense => "Patente",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

/// Tax remittance to the revenue authority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxPayment {
    pub id: String,
    pub reference: String,
    pub tax_type: TaxType,
    /// Declared period, e.g. "2024-03".
    pub period: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub paid_on: Option<NaiveDate>,
    pub bank_account: String,
    pub status: TaxPaymentStatus,
}

impl Searchable for TaxPayment {
    type Status = TaxPaymentStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.reference.as_str(),
            self.tax_type.label(),
            self.period.as_str(),
        ]
    }

    fn status(&self) -> TaxPaymentStatus {
        self.status
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.due_date)
    }
}

impl CsvExportable for TaxPayment {
    fn headers() -> Vec<&'static str> {
        vec!["Référence", "Impôt", "Période", "Montant", "Échéance", "Payée le", "Compte", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.reference.clone(),
            self.tax_type.label().to_string(),
            self.period.clone(),
            format_amount(self.amount),
            format_date(self.due_date),
            format_optional_date(self.paid_on),
            self.bank_account.clone(),
            self.status.label().to_string(),
        ]
    }
}
