use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a016_subscription::{BillingCycle, Subscription};
use contracts::shared::format::{format_amount, format_date};
use leptos::prelude::*;
use thaw::*;

/// Amount billed over twelve months.
fn annual_amount(amount: f64, cycle: BillingCycle) -> f64 {
    match cycle {
        BillingCycle::Monthly => amount * 12.0,
        BillingCycle::Quarterly => amount * 4.0,
        BillingCycle::Yearly => amount,
    }
}

fn subscription_detail(sub: &Subscription) -> impl IntoView {
    view! {
        <DetailGrid items=vec![
            ("Client", sub.customer_name.clone()),
            ("Formule", sub.plan.clone()),
            ("Périodicité", sub.cycle.label().to_string()),
            ("Début", format_date(sub.started_on)),
            ("Prochaine facturation", format_date(sub.next_billing)),
            ("Montant par échéance", format_amount(sub.amount)),
            ("Montant annuel", format_amount(annual_amount(sub.amount, sub.cycle))),
        ] />
    }
}

#[component]
pub fn SubscriptionList() -> impl IntoView {
    let data = use_data();
    let list = MasterList::<Subscription>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_subscriptions().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a016_subscription--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Abonnements"
                list=list
                export_filename="abonnements.csv"
                on_reload=fetch
            />

            <div class="page__content">
                <FilterPanel list=list placeholder="Référence, client, formule..." with_dates=true />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a016-subscription-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Référence"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Client"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Formule"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Périodicité"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Prochaine échéance"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Montant"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Statut"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || list.filtered().into_iter().map(|sub| {
                                let id = sub.id.clone();
                                let toggle_id = id.clone();
                                let detail = StoredValue::new(sub.clone());
                                view! {
                                    <TableRow>
                                        <RowToggle list=list id=toggle_id />
                                        <TableCell>
                                            <TableCellLayout>
                                                {highlighted(sub.reference.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(sub.customer_name.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(sub.plan.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{sub.cycle.label()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(sub.next_billing)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="amount">{format_amount(sub.amount)}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=sub.status />
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || list.is_expanded(&id)>
                                        <TableRow>
                                            <TableCell attr:colspan="8">
                                                {detail.with_value(|detail| subscription_detail(detail))}
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
    fn test_annual_amount() {
        assert_eq!(annual_amount(25_000.0, BillingCycle::Monthly), 300_000.0);
        assert_eq!(annual_amount(60_000.0, BillingCycle::Quarterly), 240_000.0);
        assert_eq!(annual_amount(500_000.0, BillingCycle::Yearly), 500_000.0);
    }
}
