use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_invoice::Invoice;
use contracts::shared::format::{format_amount, format_date, format_number_with_decimals};
use contracts::shared::StatusDisplay;
use leptos::prelude::*;
use thaw::*;

fn invoice_detail(invoice: &Invoice) -> impl IntoView {
    let lines = invoice
        .lines
        .iter()
        .map(|line| {
            view! {
                <tr>
                    <td>{line.description.clone()}</td>
                    <td class="amount">{format_number_with_decimals(line.quantity, 2)}</td>
                    <td class="amount">{format_amount(line.unit_price)}</td>
                    <td class="amount">{format_amount(line.amount)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <DetailGrid items=vec![
            ("Client", invoice.customer_name.clone()),
            ("Date d'émission", format_date(invoice.issue_date)),
            ("Échéance", format_date(invoice.due_date)),
            ("Total HT", format_amount(invoice.total_excl_tax)),
            ("TVA", format_amount(invoice.vat)),
            ("Total TTC", format_amount(invoice.total_incl_tax)),
            ("Statut", invoice.status.label().to_string()),
        ]>
            <table class="row-detail__lines">
                <thead>
                    <tr>
                        <th>"Désignation"</th>
                        <th>"Quantité"</th>
                        <th>"Prix unitaire"</th>
                        <th>"Montant HT"</th>
                    </tr>
                </thead>
                <tbody>{lines}</tbody>
            </table>
        </DetailGrid>
    }
}

#[component]
pub fn InvoiceList() -> impl IntoView {
    let data = use_data();
    let list = MasterList::<Invoice>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_invoices().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a004_invoice--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Factures"
                list=list
                export_filename="factures.csv"
                on_reload=fetch
            />

            <div class="page__content">
                <FilterPanel list=list placeholder="Numéro ou client..." with_dates=true />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a004-invoice-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Numéro"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Client"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Émission"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Échéance"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Total TTC"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Statut"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || list.filtered().into_iter().map(|invoice| {
                                let id = invoice.id.clone();
                                let toggle_id = id.clone();
                                let detail = StoredValue::new(invoice.clone());
                                view! {
                                    <TableRow>
                                        <RowToggle list=list id=toggle_id />
                                        <TableCell>
                                            <TableCellLayout>
                                                {highlighted(invoice.number.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(invoice.customer_name.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(invoice.issue_date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(invoice.due_date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="amount">{format_amount(invoice.total_incl_tax)}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=invoice.status />
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || list.is_expanded(&id)>
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                {detail.with_value(|detail| invoice_detail(detail))}
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
