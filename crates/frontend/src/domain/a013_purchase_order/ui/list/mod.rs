use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a013_purchase_order::PurchaseOrder;
use contracts::shared::format::{format_amount, format_date, format_number_with_decimals};
use leptos::prelude::*;
use thaw::*;

fn order_detail(order: &PurchaseOrder) -> impl IntoView {
    let lines = order
        .lines
        .iter()
        .map(|line| {
            view! {
                <tr>
                    <td>{line.item.clone()}</td>
                    <td class="amount">{format_number_with_decimals(line.quantity, 2)}</td>
                    <td class="amount">{format_amount(line.unit_price)}</td>
                    <td class="amount">{format_amount(line.quantity * line.unit_price)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <DetailGrid items=vec![
            ("Fournisseur", order.supplier_name.clone()),
            ("Commandé le", format_date(order.order_date)),
            ("Livraison prévue", format_date(order.expected_date)),
            ("Total", format_amount(order.total)),
        ]>
            <table class="row-detail__lines">
                <thead>
                    <tr>
                        <th>"Article"</th>
                        <th>"Quantité"</th>
                        <th>"Prix unitaire"</th>
                        <th>"Montant"</th>
                    </tr>
                </thead>
                <tbody>{lines}</tbody>
            </table>
        </DetailGrid>
    }
}

#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    let data = use_data();
    let list = MasterList::<PurchaseOrder>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_purchase_orders().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a013_purchase_order--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Bons de commande"
                list=list
                export_filename="bons_de_commande.csv"
                on_reload=fetch
            />

            <div class="page__content">
                <FilterPanel list=list placeholder="Numéro ou fournisseur..." with_dates=true />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a013-purchase-order-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Numéro"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Fournisseur"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Date"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Livraison"</TableHeaderCell>
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
                                                {highlighted(order.supplier_name.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(order.order_date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(order.expected_date)}</TableCellLayout>
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
