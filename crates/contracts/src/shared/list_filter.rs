//! Master-list filtering: free-text query, status and date range.
//!
//! Filtering never reorders: the output is the matching subsequence of the
//! input in its original order.

use super::format::parse_input_date;
use super::status::StatusDisplay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A record that can be shown in a filterable master list.
pub trait Searchable {
    type Status: StatusDisplay;

    /// Row identifier, also the key of the expansion set.
    fn id(&self) -> &str;

    /// String fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn status(&self) -> Self::Status;

    /// Date used by the period filter. Records without one never match an
    /// active date range.
    fn record_date(&self) -> Option<NaiveDate> {
        None
    }

    /// Case-insensitive substring match against any search field. The query
    /// is matched as typed; only a blank query matches everything.
    fn matches_filter(&self, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Closed date interval; either bound may be left open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_unset(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    /// Parses the `yyyy-mm-dd` values produced by `<input type="date">`.
    /// Empty or malformed values leave the bound open.
    pub fn from_inputs(from: &str, to: &str) -> Self {
        Self::new(parse_input_date(from), parse_input_date(to))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListFilter<S> {
    pub query: String,
    pub status: Option<S>,
    pub date_range: DateRange,
}

impl<S> Default for ListFilter<S> {
    fn default() -> Self {
        Self {
            query: String::new(),
            status: None,
            date_range: DateRange::default(),
        }
    }
}

impl<S: StatusDisplay> ListFilter<S> {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_status(mut self, status: S) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }

    /// Number of active criteria, shown on the filter panel badge.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.query.trim().is_empty() {
            count += 1;
        }
        if self.status.is_some() {
            count += 1;
        }
        if !self.date_range.is_unset() {
            count += 1;
        }
        count
    }

    pub fn matches<T>(&self, record: &T) -> bool
    where
        T: Searchable<Status = S>,
    {
        if !record.matches_filter(&self.query) {
            return false;
        }
        if let Some(status) = self.status {
            if record.status() != status {
                return false;
            }
        }
        if self.date_range.is_unset() {
            return true;
        }
        record
            .record_date()
            .map_or(false, |date| self.date_range.contains(date))
    }
}

/// Returns the records matching `filter`, preserving input order.
pub fn filter_records<T>(records: &[T], filter: &ListFilter<T::Status>) -> Vec<T>
where
    T: Searchable + Clone,
{
    records
        .iter()
        .filter(|record| filter.matches(*record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ExpansionSet;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Stage {
        Open,
        Done,
        Archived,
    }

    crate::status_display!(Stage {
        Open => ("open", "Ouvert", Primary),
        Done => ("done", "Terminé", Success),
        Archived => ("archived", "Archivé", Neutral),
    });

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        city: String,
        stage: Stage,
        date: Option<NaiveDate>,
    }

    impl Searchable for Row {
        type Status = Stage;

        fn id(&self) -> &str {
            &self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.city.as_str()]
        }

        fn status(&self) -> Stage {
            self.stage
        }

        fn record_date(&self) -> Option<NaiveDate> {
            self.date
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn row(id: &str, name: &str, city: &str, stage: Stage, date: Option<NaiveDate>) -> Row {
        Row {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            stage,
            date,
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            row(
                "1",
                "Société Ivoirienne de Ciment",
                "Abidjan",
                Stage::Open,
                Some(d(2024, 1, 10)),
            ),
            row("2", "Brasseries du Cameroun", "Douala", Stage::Done, Some(d(2024, 2, 5))),
            row("3", "Sonatel", "Dakar", Stage::Open, Some(d(2024, 3, 1))),
            row("4", "Orange Mali", "Bamako", Stage::Done, None),
        ]
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let data = rows();
        let out = filter_records(&data, &ListFilter::default());
        assert_eq!(out, data);
    }

    #[test]
    fn test_query_is_case_insensitive_over_any_field() {
        let data = rows();
        let out = filter_records(&data, &ListFilter::default().with_query("DAKAR"));
        assert_eq!(ids(&out), vec!["3"]);
        let out = filter_records(&data, &ListFilter::default().with_query("ou"));
        assert_eq!(ids(&out), vec!["2"]);
    }

    #[test]
    fn test_whitespace_query_counts_as_empty() {
        let data = rows();
        let out = filter_records(&data, &ListFilter::default().with_query("   "));
        assert_eq!(out.len(), data.len());
    }

    #[test]
    fn test_surrounding_spaces_are_part_of_the_query() {
        let data = rows();
        let out = filter_records(&data, &ListFilter::default().with_query("Sonatel "));
        assert!(out.is_empty());
        let out = filter_records(&data, &ListFilter::default().with_query("orange "));
        assert_eq!(ids(&out), vec!["4"]);
    }

    #[test]
    fn test_expanded_row_survives_being_filtered_out() {
        let data = rows();
        let mut expanded = ExpansionSet::new();
        expanded.toggle("3");

        let narrowed = filter_records(&data, &ListFilter::default().with_query("Douala"));
        assert!(!ids(&narrowed).contains(&"3"));
        assert!(expanded.is_expanded("3"));

        let relaxed = filter_records(&data, &ListFilter::default().with_query(""));
        assert!(ids(&relaxed).contains(&"3"));
        assert!(expanded.is_expanded("3"));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let data = rows();
        let filters = vec![
            ListFilter::default().with_query("a"),
            ListFilter::default().with_status(Stage::Open),
            ListFilter::default()
                .with_query("o")
                .with_status(Stage::Done)
                .with_date_range(DateRange::new(Some(d(2024, 1, 1)), None)),
        ];
        for filter in filters {
            let once = filter_records(&data, &filter);
            let twice = filter_records(&once, &filter);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_unmatched_status_yields_empty_output() {
        let data = rows();
        let out = filter_records(&data, &ListFilter::default().with_status(Stage::Archived));
        assert!(out.is_empty());
    }

    #[test]
    fn test_status_and_query_combine() {
        let data = rows();
        let filter = ListFilter::default().with_query("a").with_status(Stage::Open);
        assert_eq!(ids(&filter_records(&data, &filter)), vec!["1", "3"]);
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let data = rows();
        let range = DateRange::new(Some(d(2024, 1, 10)), Some(d(2024, 2, 5)));
        let out = filter_records(&data, &ListFilter::default().with_date_range(range));
        assert_eq!(ids(&out), vec!["1", "2"]);
    }

    #[test]
    fn test_half_open_range_and_undated_records() {
        let data = rows();
        let range = DateRange::new(Some(d(2024, 2, 1)), None);
        let out = filter_records(&data, &ListFilter::default().with_date_range(range));
        assert_eq!(ids(&out), vec!["2", "3"]);
    }

    #[test]
    fn test_range_from_inputs() {
        let range = DateRange::from_inputs("2024-01-01", "");
        assert_eq!(range.from, Some(d(2024, 1, 1)));
        assert_eq!(range.to, None);
        assert!(DateRange::from_inputs("", "not-a-date").is_unset());
    }

    #[test]
    fn test_active_count() {
        let filter: ListFilter<Stage> = ListFilter::default();
        assert_eq!(filter.active_count(), 0);
        let filter = filter
            .with_query("x")
            .with_status(Stage::Done)
            .with_date_range(DateRange::new(None, Some(d(2024, 1, 1))));
        assert_eq!(filter.active_count(), 3);
    }
}
