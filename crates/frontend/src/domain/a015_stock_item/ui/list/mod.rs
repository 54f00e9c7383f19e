use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a015_stock_item::StockItem;
use contracts::shared::format::{format_amount, format_number_with_decimals};
use leptos::prelude::*;
use thaw::*;

fn quantity(value: f64, unit: &str) -> String {
    format!("{} {}", format_number_with_decimals(value, 0), unit)
}

/// Quantity to order to get back to the reorder level; zero above it.
fn shortfall(item: &StockItem) -> f64 {
    (item.reorder_level - item.quantity).max(0.0)
}

fn stock_detail(item: &StockItem) -> impl IntoView {
    view! {
        <DetailGrid items=vec![
            ("Catégorie", item.category.clone()),
            ("Entrepôt", item.warehouse.clone()),
            ("En stock", quantity(item.quantity, &item.unit)),
            ("Seuil de réapprovisionnement", quantity(item.reorder_level, &item.unit)),
            ("À commander", quantity(shortfall(item), &item.unit)),
            ("Coût unitaire", format_amount(item.unit_cost)),
            ("Valeur du stock", format_amount(item.stock_value())),
        ] />
    }
}

#[component]
pub fn StockItemList() -> impl IntoView {
    let data = use_data();
    let list = MasterList::<StockItem>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_stock_items().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a015_stock_item--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Stocks"
                list=list
                export_filename="stocks.csv"
                on_reload=fetch
            />

            <div class="page__content">
                <FilterPanel list=list placeholder="Référence, désignation, entrepôt..." status_label="Niveau" />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a015-stock-item-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Référence"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Désignation"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Entrepôt"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Quantité"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Valeur"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Niveau"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || list.filtered().into_iter().map(|item| {
                                let id = item.id.clone();
                                let toggle_id = id.clone();
                                let detail = StoredValue::new(item.clone());
                                let stock_value = format_amount(item.stock_value());
                                view! {
                                    <TableRow>
                                        <RowToggle list=list id=toggle_id />
                                        <TableCell>
                                            <TableCellLayout>
                                                {highlighted(item.sku.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(item.name.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(item.warehouse.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{quantity(item.quantity, &item.unit)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="amount">{stock_value}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=item.status />
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || list.is_expanded(&id)>
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                {detail.with_value(|detail| stock_detail(detail))}
                                            </TableCell>
                                        </TableRow>
                                    </Show>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a015_stock_item::StockStatus;

    fn item(quantity: f64, reorder_level: f64) -> StockItem {
        StockItem {
            id: "stk-t".to_string(),
            sku: "ART-1".to_string(),
            name: "Ciment 50 kg".to_string(),
            category: "Matériaux".to_string(),
            warehouse: "Douala".to_string(),
            quantity,
            unit: "sac".to_string(),
            reorder_level,
            unit_cost: 5_000.0,
            status: StockStatus::Low,
        }
    }

    #[test]
    fn test_shortfall() {
        assert_eq!(shortfall(&item(20.0, 50.0)), 30.0);
        assert_eq!(shortfall(&item(80.0, 50.0)), 0.0);
    }
}
