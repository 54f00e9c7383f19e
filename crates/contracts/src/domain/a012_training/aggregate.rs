use crate::shared::export::CsvExportable;
use crate::shared::format::{format_amount, format_date};
use crate::shared::list_filter::Searchable;
use crate::shared::status::StatusDisplay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

crate::status_display!(TrainingStatus {
    Planned => ("planned", "Planifiée", Primary),
    InProgress => ("in_progress", "En cours", Warning),
    Completed => ("completed", "Terminée", Success),
    Cancelled => ("cancelled", "Annulée", Neutral),
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Training {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub participants: u32,
    pub capacity: u32,
    pub cost: f64,
    pub status: TrainingStatus,
}

impl Training {
    pub fn seats_left(&self) -> u32 {
        self.capacity.saturating_sub(self.participants)
    }
}

impl Searchable for Training {
    type Status = TrainingStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.provider.as_str()]
    }

    fn status(&self) -> TrainingStatus {
        self.status
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.start_date)
    }
}

impl CsvExportable for Training {
    fn headers() -> Vec<&'static str> {
        vec!["Formation", "Organisme", "Début", "Fin", "Participants", "Capacité", "Coût", "Statut"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.provider.clone(),
            format_date(self.start_date),
            format_date(self.end_date),
            self.participants.to_string(),
            self.capacity.to_string(),
            format_amount(self.cost),
            self.status.label().to_string(),
        ]
    }
}
