use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_account::Account;
use contracts::shared::format::format_amount;
use contracts::shared::StatusDisplay;
use leptos::prelude::*;
use thaw::*;

/// Debit or credit side of a balance, as read on a trial balance.
fn balance_side(balance: f64) -> &'static str {
    if balance > 0.0 {
        "Débiteur"
    } else if balance < 0.0 {
        "Créditeur"
    } else {
        "Soldé"
    }
}

fn account_detail(account: &Account) -> impl IntoView {
    view! {
        <DetailGrid items=vec![
            ("Numéro", account.number.clone()),
            ("Intitulé", account.label.clone()),
            ("Classe", account.class.label().to_string()),
            ("Solde", format_amount(account.balance.abs())),
            ("Sens", balance_side(account.balance).to_string()),
            ("Statut", account.status.label().to_string()),
        ] />
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AccountList() -> impl IntoView {
    let data = use_data();
    let list = MasterList::<Account>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_accounts().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a001_account--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Plan comptable"
                list=list
                export_filename="plan_comptable.csv"
                on_reload=fetch
            />

            <div class="page__content">
                <FilterPanel list=list placeholder="Numéro ou intitulé..." />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a001-account-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Numéro"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=260.0>"Intitulé"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Classe"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Solde"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Statut"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || list.filtered().into_iter().map(|account| {
                                let id = account.id.clone();
                                let toggle_id = id.clone();
                                let detail = StoredValue::new(account.clone());
                                view! {
                                    <TableRow>
                                        <RowToggle list=list id=toggle_id />
                                        <TableCell>
                                            <TableCellLayout>
                                                {highlighted(account.number.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(account.label.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {account.class.label()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="amount">{format_amount(account.balance)}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=account.status />
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || list.is_expanded(&id)>
                                        <TableRow>
                                            <TableCell attr:colspan="6">
                                                {detail.with_value(|detail| account_detail(detail))}
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
    fn test_balance_side() {
        assert_eq!(balance_side(1500.0), "Débiteur");
        assert_eq!(balance_side(-20.0), "Créditeur");
        assert_eq!(balance_side(0.0), "Soldé");
    }
}
