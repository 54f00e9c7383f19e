use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_customer::Customer;
use contracts::shared::format::{format_amount, format_percent};
use contracts::shared::StatusDisplay;
use leptos::prelude::*;
use thaw::*;

/// Share of the credit limit already used; `None` without a limit.
fn credit_usage(outstanding: f64, credit_limit: f64) -> Option<f64> {
    (credit_limit > 0.0).then(|| outstanding / credit_limit)
}

fn customer_detail(customer: &Customer) -> impl IntoView {
    let usage = credit_usage(customer.outstanding, customer.credit_limit)
        .map(format_percent)
        .unwrap_or_else(|| "-".to_string());
    let available = (customer.credit_limit - customer.outstanding).max(0.0);

    view! {
        <DetailGrid items=vec![
            ("Code", customer.code.clone()),
            ("Raison sociale", customer.name.clone()),
            ("NIU", customer.tax_id.clone()),
            ("Ville", customer.city.clone()),
            ("E-mail", customer.email.clone()),
            ("Plafond de crédit", format_amount(customer.credit_limit)),
            ("Encours", format_amount(customer.outstanding)),
            ("Crédit disponible", format_amount(available)),
            ("Utilisation", usage),
        ] />
    }
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let data = use_data();
    let list = MasterList::<Customer>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_customers().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a003_customer--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Clients"
                list=list
                export_filename="clients.csv"
                on_reload=fetch
            />

            <div class="page__content">
                <FilterPanel list=list placeholder="Code, nom, ville, e-mail..." />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a003-customer-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Code"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Raison sociale"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Ville"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Encours"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Plafond"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Statut"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || list.filtered().into_iter().map(|customer| {
                                let id = customer.id.clone();
                                let toggle_id = id.clone();
                                let detail = StoredValue::new(customer.clone());
                                let over_limit = customer.credit_limit > 0.0
                                    && customer.outstanding > customer.credit_limit;
                                view! {
                                    <TableRow>
                                        <RowToggle list=list id=toggle_id />
                                        <TableCell>
                                            <TableCellLayout>
                                                {highlighted(customer.code.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(customer.name.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(customer.city.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="amount" class:amount--negative=over_limit>
                                                    {format_amount(customer.outstanding)}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="amount">{format_amount(customer.credit_limit)}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=customer.status />
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || list.is_expanded(&id)>
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                {detail.with_value(|detail| customer_detail(detail))}
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

    #[test]
    fn test_credit_usage() {
        assert_eq!(credit_usage(500_000.0, 1_000_000.0), Some(0.5));
        assert_eq!(credit_usage(100.0, 0.0), None);
    }
}
