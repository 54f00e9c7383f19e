use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a007_budget::Budget;
use contracts::shared::format::{format_amount, format_date, format_percent};
use contracts::shared::StatusDisplay;
use leptos::prelude::*;
use thaw::*;

/// Badge variant of a consumption ratio: over 75 % warns, over 100 % alerts.
fn consumption_variant(ratio: f64) -> &'static str {
    if ratio > 1.0 {
        "error"
    } else if ratio > 0.75 {
        "warning"
    } else {
        "success"
    }
}

fn budget_detail(budget: &Budget) -> impl IntoView {
    let mut versions: Vec<_> = budget.versions.iter().collect();
    versions.sort_by(|a, b| b.version.cmp(&a.version));
    let history = versions
        .into_iter()
        .map(|v| {
            view! {
                <tr>
                    <td>{format!("v{}", v.version)}</td>
                    <td>{format_date(v.date)}</td>
                    <td class="amount">{format_amount(v.total)}</td>
                    <td>{v.author.clone()}</td>
                    <td>{v.note.clone()}</td>
                </tr>
            }
        })
        .collect_view();
    let current_version = budget
        .latest_version()
        .map(|v| format!("v{}", v.version))
        .unwrap_or_else(|| "-".to_string());

    view! {
        <DetailGrid items=vec![
            ("Département", budget.department.clone()),
            ("Exercice", budget.fiscal_year.to_string()),
            ("Début", format_date(budget.start_date)),
            ("Enveloppe", format_amount(budget.total)),
            ("Consommé", format_amount(budget.spent)),
            ("Restant", format_amount(budget.remaining)),
            ("Version en vigueur", current_version),
            ("Statut", budget.status.label().to_string()),
        ]>
            <h4 class="row-detail__subtitle">"Historique des versions"</h4>
            <table class="row-detail__lines">
                <thead>
                    <tr>
                        <th>"Version"</th>
                        <th>"Date"</th>
                        <th>"Montant"</th>
                        <th>"Auteur"</th>
                        <th>"Commentaire"</th>
                    </tr>
                </thead>
                <tbody>{history}</tbody>
            </table>
        </DetailGrid>
    }
}

#[component]
pub fn BudgetList() -> impl IntoView {
    let data = use_data();
    let list = MasterList::<Budget>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_budgets().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a007_budget--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Budgets"
                list=list
                export_filename="budgets.csv"
                on_reload=fetch
            />

            <div class="page__content">
                <FilterPanel list=list placeholder="Code, libellé, département..." with_dates=true />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a007-budget-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Code"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Libellé"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Département"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Exercice"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Enveloppe"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Consommation"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Statut"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || list.filtered().into_iter().map(|budget| {
                                let id = budget.id.clone();
                                let toggle_id = id.clone();
                                let detail = StoredValue::new(budget.clone());
                                let ratio = budget.consumption_ratio();
                                view! {
                                    <TableRow>
                                        <RowToggle list=list id=toggle_id />
                                        <TableCell>
                                            <TableCellLayout>
                                                {highlighted(budget.code.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(budget.name.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(budget.department.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{budget.fiscal_year}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="amount">{format_amount(budget.total)}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Badge variant=consumption_variant(ratio).to_string()>
                                                {format_percent(ratio)}
                                            </Badge>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=budget.status />
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || list.is_expanded(&id)>
                                        <TableRow>
                                            <TableCell attr:colspan="8">
                                                {detail.with_value(|detail| budget_detail(detail))}
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
    fn test_consumption_variant() {
        assert_eq!(consumption_variant(0.4), "success");
        assert_eq!(consumption_variant(0.8), "warning");
        assert_eq!(consumption_variant(1.0), "warning");
        assert_eq!(consumption_variant(1.2), "error");
    }
}
