//! Reactive state of a master list page: loaded rows, filter criteria and
//! the set of expanded rows.

use super::export::export_to_csv;
use contracts::data::DataError;
use contracts::shared::export::CsvExportable;
use contracts::shared::{filter_records, DateRange, ExpansionSet, ListFilter, Searchable};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

pub struct MasterList<T: Searchable + 'static> {
    pub rows: RwSignal<Vec<T>>,
    pub filter: RwSignal<ListFilter<T::Status>>,
    /// Raw `yyyy-mm-dd` values of the period inputs.
    pub date_inputs: RwSignal<(String, String)>,
    pub expanded: RwSignal<ExpansionSet>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: Searchable + 'static> Clone for MasterList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Searchable + 'static> Copy for MasterList<T> {}

impl<T> MasterList<T>
where
    T: Searchable + Clone + Send + Sync + 'static,
    T::Status: Send + Sync,
{
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            filter: RwSignal::new(ListFilter::default()),
            date_inputs: RwSignal::new((String::new(), String::new())),
            expanded: RwSignal::new(ExpansionSet::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Replaces the rows with the result of `fetch`. Errors end up in the
    /// page's error banner.
    pub fn load<F, Fut>(&self, fetch: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, DataError>> + 'static,
    {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);
        spawn_local(async move {
            match fetch().await {
                Ok(rows) => {
                    log::debug!("master list loaded {} rows", rows.len());
                    this.rows.set(rows);
                }
                Err(e) => {
                    log::error!("master list load failed: {}", e);
                    this.error.set(Some(e.to_string()));
                }
            }
            this.loading.set(false);
        });
    }

    /// Rows passing the current filter, in load order.
    pub fn filtered(&self) -> Vec<T> {
        self.filter
            .with(|filter| self.rows.with(|rows| filter_records(rows, filter)))
    }

    pub fn filtered_count(&self) -> usize {
        self.filter
            .with(|filter| self.rows.with(|rows| rows.iter().filter(|r| filter.matches(*r)).count()))
    }

    pub fn total_count(&self) -> usize {
        self.rows.with(|rows| rows.len())
    }

    pub fn query(&self) -> Signal<String> {
        let filter = self.filter;
        Signal::derive(move || filter.with(|f| f.query.clone()))
    }

    pub fn set_query(&self, query: String) {
        self.filter.update(|f| f.query = query);
    }

    pub fn set_status(&self, status: Option<T::Status>) {
        self.filter.update(|f| f.status = status);
    }

    pub fn set_date_from(&self, value: String) {
        self.date_inputs.update(|(from, _)| *from = value);
        self.sync_date_range();
    }

    pub fn set_date_to(&self, value: String) {
        self.date_inputs.update(|(_, to)| *to = value);
        self.sync_date_range();
    }

    fn sync_date_range(&self) {
        let range = self
            .date_inputs
            .with_untracked(|(from, to)| DateRange::from_inputs(from, to));
        self.filter.update(|f| f.date_range = range);
    }

    pub fn reset_filters(&self) {
        self.date_inputs.set((String::new(), String::new()));
        self.filter.set(ListFilter::default());
    }

    pub fn active_filter_count(&self) -> usize {
        self.filter.with(|f| f.active_count())
    }

    pub fn toggle(&self, id: &str) {
        self.expanded.update(|set| {
            set.toggle(id);
        });
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.with(|set| set.is_expanded(id))
    }

    /// Downloads the filtered rows as CSV.
    pub fn export(&self, filename: &str)
    where
        T: CsvExportable,
    {
        let rows = self
            .filter
            .with_untracked(|filter| self.rows.with_untracked(|rows| filter_records(rows, filter)));
        if let Err(e) = export_to_csv(&rows, filename) {
            self.error.set(Some(e));
        }
    }
}

impl<T> Default for MasterList<T>
where
    T: Searchable + Clone + Send + Sync + 'static,
    T::Status: Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
