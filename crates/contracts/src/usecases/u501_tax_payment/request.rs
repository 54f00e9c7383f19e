use crate::domain::a008_tax_payment::TaxType;
use crate::shared::format::parse_input_date;
use crate::usecases::common::parse_amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wizard inputs as typed by the user. Nothing here gates navigation
/// between steps.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxPaymentDraft {
    pub tax_type: TaxType,
    /// "YYYY-MM"
    pub period: String,
    pub amount: String,
    /// "YYYY-MM-DD", as produced by a date input.
    pub due_date: String,
    pub bank_account: String,
    pub note: String,
}

impl Default for TaxPaymentDraft {
    fn default() -> Self {
        Self {
            tax_type: TaxType::Vat,
            period: String::new(),
            amount: String::new(),
            due_date: String::new(),
            bank_account: "521100".to_string(),
            note: String::new(),
        }
    }
}

impl TaxPaymentDraft {
    pub fn to_request(&self) -> TaxPaymentRequest {
        TaxPaymentRequest {
            tax_type: self.tax_type,
            period: self.period.trim().to_string(),
            amount: parse_amount(&self.amount),
            due_date: parse_input_date(&self.due_date),
            bank_account: self.bank_account.trim().to_string(),
            note: self.note.trim().to_string(),
        }
    }
}

/// Payload handed to the data source when the wizard is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxPaymentRequest {
    pub tax_type: TaxType,
    pub period: String,
    pub amount: f64,
    pub due_date: Option<NaiveDate>,
    pub bank_account: String,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_to_request() {
        let draft = TaxPaymentDraft {
            tax_type: TaxType::PayrollTax,
            period: " 2024-03 ".into(),
            amount: "1 250 000".into(),
            due_date: "2024-04-15".into(),
            ..TaxPaymentDraft::default()
        };
        let request = draft.to_request();
        assert_eq!(request.period, "2024-03");
        assert_eq!(request.amount, 1_250_000.0);
        assert_eq!(request.due_date, NaiveDate::from_ymd_opt(2024, 4, 15));
        assert_eq!(request.bank_account, "521100");
    }

    #[test]
    fn test_incomplete_draft_still_builds() {
        let request = TaxPaymentDraft::default().to_request();
        assert_eq!(request.amount, 0.0);
        assert_eq!(request.due_date, None);
    }
}
