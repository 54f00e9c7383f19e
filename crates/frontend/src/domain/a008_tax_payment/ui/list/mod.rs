use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::icons::icon;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a008_tax_payment::TaxPayment;
use contracts::shared::format::{format_amount, format_date, format_optional_date};
use contracts::shared::StatusDisplay;
use contracts::system::auth::Navigator;
use contracts::system::paths;
use leptos::prelude::*;
use thaw::*;

fn tax_payment_detail(payment: &TaxPayment) -> impl IntoView {
    view! {
        <DetailGrid items=vec![
            ("Référence", payment.reference.clone()),
            ("Impôt", payment.tax_type.label().to_string()),
            ("Période", payment.period.clone()),
            ("Échéance", format_date(payment.due_date)),
            ("Payé le", format_optional_date(payment.paid_on)),
            ("Compte bancaire", payment.bank_account.clone()),
            ("Montant", format_amount(payment.amount)),
            ("Statut", payment.status.label().to_string()),
        ] />
    }
}

#[component]
pub fn TaxPaymentList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let data = use_data();
    let list = MasterList::<TaxPayment>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_tax_payments().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a008_tax_payment--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Impôts et taxes"
                list=list
                export_filename="impots_taxes.csv"
                on_reload=fetch
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(paths::TAX_PAYMENT_NEW)
                >
                    {icon("plus")}
                    " Nouveau paiement"
                </Button>
            </ListHeader>

            <div class="page__content">
                <FilterPanel list=list placeholder="Référence, impôt, période..." with_dates=true />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a008-tax-payment-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Référence"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Impôt"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Période"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Échéance"</TableHeaderCell>
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
                                            <TableCellLayout truncate=true>
                                                {highlighted(payment.tax_type.label().to_string(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {highlighted(payment.period.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(payment.due_date)}</TableCellLayout>
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
                                                {detail.with_value(|detail| tax_payment_detail(detail))}
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
