use contracts::data::{DataSource, FixtureDataSource};
use leptos::prelude::*;
use std::sync::Arc;

/// Data source shared by every page through the Leptos context.
#[derive(Clone)]
pub struct DataContext(Arc<dyn DataSource + Send + Sync>);

impl DataContext {
    pub fn new(source: Arc<dyn DataSource + Send + Sync>) -> Self {
        Self(source)
    }

    /// In-memory sample records.
    pub fn fixtures() -> Self {
        Self::new(Arc::new(FixtureDataSource::new()))
    }

    pub fn source(&self) -> Arc<dyn DataSource + Send + Sync> {
        Arc::clone(&self.0)
    }
}

pub fn use_data() -> DataContext {
    use_context::<DataContext>().expect("DataContext not found in component tree")
}
