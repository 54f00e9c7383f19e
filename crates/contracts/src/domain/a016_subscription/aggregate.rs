use crate::shared::export::CsvExportable;
use crate::shared::format::{format_amount, format_date};
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    Trial,
    Active,
    PastDue,
    Cancelled,
}

crate::status_display!(SubscriptionStatus {
    Trial => ("trial", "Essai", Primary),
    Active => ("active", "Actif", Success),
    PastDue => ("past_due", "Impayé", Error),
    Cancelled => ("cancelled", "Résilié", Neutral),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingCycle {
    Monthly,
    Quarterly,
    Yearly,
}

impl BillingCycle {
    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Mensuel",
            BillingCycle::Quarterly => "Trimestriel",
            BillingCycle::Yearly => "Annuel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub reference: String,
    pub customer_name: String,
    pub plan: String,
    pub cycle: BillingCycle,
    pub started_on: NaiveDate,
    pub next_billing: NaiveDate,
    pub amount: f64,
    pub status: SubscriptionStatus,
}

impl Searchable for Subscription {
    type Status = SubscriptionStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.reference.as_str(),
            self.customer_name.as_str(),
            self.plan.as_str(),
        ]
    }

    fn status(&self) -> SubscriptionStatus {
        self.status
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.next_billing)
    }
}

impl CsvExportable for Subscription {
    fn headers() -> Vec<&'static str> {
        vec!["Référence", "Client", "Formule", "Cycle", "Début", "Prochaine facture", "Montant", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.reference.clone(),
            self.customer_name.clone(),
            self.plan.clone(),
            self.cycle.label().to_string(),
            format_date(self.started_on),
            format_date(self.next_billing),
            format_amount(self.amount),
            self.status.label().to_string(),
        ]
    }
}
