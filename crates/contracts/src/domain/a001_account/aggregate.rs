use crate::shared::export::CsvExportable;
use crate::shared::format::format_amount;
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use serde::{Deserialize, Serialize};

/// SYSCOHADA account class, the first digit of the account number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountClass {
    Equity = 1,
    FixedAssets = 2,
    Inventory = 3,
    ThirdParties = 4,
    Treasury = 5,
    Expenses = 6,
    Revenue = 7,
    OtherItems = 8,
    Analytical = 9,
}

impl AccountClass {
    pub fn label(&self) -> &'static str {
        match self {
            AccountClass::Equity => "Classe 1 - Ressources durables",
            AccountClass::FixedAssets => "Classe 2 - Actif immobilisé",
            AccountClass::Inventory => "Classe 3 - Stocks",
            AccountClass::ThirdParties => "Classe 4 - Tiers",
            AccountClass::Treasury => "Classe 5 - Trésorerie",
            AccountClass::Expenses => "Classe 6 - Charges",
            AccountClass::Revenue => "Classe 7 - Produits",
            AccountClass::OtherItems => "Classe 8 - Autres charges et produits",
            AccountClass::Analytical => "Classe 9 - Comptabilité analytique",
        }
    }

    /// Class of an account number, from its leading digit.
    pub fn of_number(number: &str) -> Option<Self> {
        match number.chars().next()? {
            '1' => Some(AccountClass::Equity),
            '2' => Some(AccountClass::FixedAssets),
            '3' => Some(AccountClass::Inventory),
            '4' => Some(AccountClass::ThirdParties),
            '5' => Some(AccountClass::Treasury),
            '6' => Some(AccountClass::Expenses),
            '7' => Some(AccountClass::Revenue),
            '8' => Some(AccountClass::OtherItems),
            '9' => Some(AccountClass::Analytical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Inactive,
}

crate::status_display!(AccountStatus {
    Active => ("active", "Actif", Success),
    Inactive => ("inactive", "Inactif", Neutral),
});

/// Ledger account of the chart of accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    /// Six-digit SYSCOHADA number, e.g. "411100".
    pub number: String,
    pub label: String,
    pub class: AccountClass,
    pub balance: f64,
    pub status: AccountStatus,
}

impl Searchable for Account {
    type Status = AccountStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.number.as_str(), self.label.as_str()]
    }

    fn status(&self) -> AccountStatus {
        self.status
    }
}

impl CsvExportable for Account {
    fn headers() -> Vec<&'static str> {
        vec!["Numéro", "Intitulé", "Classe", "Solde", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.number.clone(),
            self.label.clone(),
            self.class.label().to_string(),
            format_amount(self.balance),
            self.status.label().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_of_number() {
        assert_eq!(AccountClass::of_number("411100"), Some(AccountClass::ThirdParties));
        assert_eq!(AccountClass::of_number("521000"), Some(AccountClass::Treasury));
        assert_eq!(AccountClass::of_number("X1"), None);
        assert_eq!(AccountClass::of_number(""), None);
    }
}
