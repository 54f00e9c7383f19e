use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::icons::icon;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_payment::Payment;
use contracts::shared::format::{format_amount, format_date};
use contracts::shared::StatusDisplay;
use contracts::system::auth::Navigator;
use contracts::system::paths;
use leptos::prelude::*;
use thaw::*;

/// Part of the payment not matched against any invoice.
fn unallocated(payment: &Payment) -> f64 {
    let allocated: f64 = payment.allocations.iter().map(|a| a.amount).sum();
    payment.amount - allocated
}

fn payment_detail(payment: &Payment) -> impl IntoView {
    let allocations = if payment.allocations.is_empty() {
        view! { <p class="row-detail__empty">"Aucune facture imputée"</p> }.into_any()
    } else {
        let rows = payment
            .allocations
            .iter()
            .map(|a| {
                view! {
                    <tr>
                        <td>{a.invoice_number.clone()}</td>
                        <td class="amount">{format_amount(a.amount)}</td>
                    </tr>
                }
            })
            .collect_view();
        view! {
            <table class="row-detail__lines">
                <thead>
                    <tr>
                        <th>"Facture"</th>
                        <th>"Montant imputé"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <DetailGrid items=vec![
            ("Client", payment.customer_name.clone()),
            ("Date", format_date(payment.date)),
            ("Mode", payment.method.label().to_string()),
            ("Compte de trésorerie", payment.account_number.clone()),
            ("Montant", format_amount(payment.amount)),
            ("Non imputé", format_amount(unallocated(payment))),
        ]>
            {allocations}
        </DetailGrid>
    }
}

#[component]
pub fn PaymentList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let data = use_data();
    let list = MasterList::<Payment>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_payments().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a005_payment--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Encaissements"
                list=list
                export_filename="encaissements.csv"
                on_reload=fetch
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(paths::PAYMENT_NEW)
                >
                    {icon("plus")}
                    " Nouvel encaissement"
                </Button>
            </ListHeader>

            <div class="page__content">
                <FilterPanel list=list placeholder="Référence, client, compte..." with_dates=true />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a005-payment-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Référence"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Date"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Client"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Mode"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Montant"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Statut"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || list.filtered().into_iter().map(|payment| {
                                let id = payment.id.clone();
                                let toggle_id = id.clone();
                                let detail = StoredValue::new(payment.clone());
                                view! {
                                    <TableRow>
                                        <RowToggle list=list id=toggle_id />
                                        <TableCell>
                                            <TableCellLayout>
                                                {highlighted(payment.reference.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(payment.date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(payment.customer_name.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{payment.method.label()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="amount">{format_amount(payment.amount)}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=payment.status />
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || list.is_expanded(&id)>
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                {detail.with_value(|detail| payment_detail(detail))}
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
