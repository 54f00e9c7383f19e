pub mod dto;

pub use dto::OverviewSummary;

use crate::data::{DataError, DataSource};

/// Loads every list the overview needs and summarises it.
pub async fn load_overview<D>(source: &D) -> Result<OverviewSummary, DataError>
where
    D: DataSource + ?Sized,
{
    let invoices = source.list_invoices().await?;
    let employees = source.list_employees().await?;
    let stock = source.list_stock_items().await?;
    let subscriptions = source.list_subscriptions().await?;
    Ok(OverviewSummary::from_records(
        &invoices,
        &employees,
        &stock,
        &subscriptions,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FixtureDataSource;

    #[tokio::test]
    async fn test_load_from_fixtures() {
        let summary = load_overview(&FixtureDataSource::new()).await.unwrap();
        assert_eq!(summary.overdue_invoices, 2);
        assert_eq!(summary.low_stock_items, 3);
        assert!(summary.active_employees > 0);
        assert!(summary.receivables_outstanding > 0.0);
    }
}
