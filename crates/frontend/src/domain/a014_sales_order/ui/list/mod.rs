use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a014_sales_order::SalesOrder;
use contracts::shared::format::{format_amount, format_date};
use contracts::shared::StatusDisplay;
use leptos::prelude::*;
use thaw::*;

fn order_detail(order: &SalesOrder) -> impl IntoView {
    let average = if order.item_count > 0 {
        format_amount(order.total / f64::from(order.item_count))
    } else {
        "-".to_string()
    };
    view! {
        <DetailGrid items=vec![
            ("Client", order.customer_name.clone()),
            ("Commercial", order.salesperson.clone()),
            ("Date", format_date(order.order_date)),
            ("Articles", order.item_count.to_string()),
            ("Panier moyen par article", average),
            ("Total", format_amount(order.total)),
            ("Statut", order.status.label().to_string()),
        ] />
    }
}

#[component]
pub fn SalesOrderList() -> impl IntoView {
    let data = use_data();
    let list = MasterList::<SalesOrder>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_sales_orders().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a014_sales_order--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Commandes clients"
                list=list
                export_filename="commandes_clients.csv"
                on_reload=fetch
            />

            <div class="page__content">
                <FilterPanel list=list placeholder="Numéro, client, commercial..." with_dates=true />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a014-sales-order-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Numéro"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Client"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Date"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Commercial"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Total"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Statut"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || list.filtered().into_iter().map(|order| {
                                let id = order.id.clone();
                                let toggle_id = id.clone();
                                let detail = StoredValue::new(order.clone());
                                view! {
                                    <TableRow>
                                        <RowToggle list=list id=toggle_id />
                                        <TableCell>
                                            <TableCellLayout>
                                                {highlighted(order.number.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(order.customer_name.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(order.order_date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(order.salesperson.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="amount">{format_amount(order.total)}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=order.status />
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || list.is_expanded(&id)>
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                {detail.with_value(|detail| order_detail(detail))}
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
