use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use chrono::NaiveDate;
use contracts::domain::a011_compliance_item::{ComplianceItem, ComplianceStatus};
use contracts::shared::format::format_date;
use contracts::shared::StatusDisplay;
use leptos::prelude::*;
use thaw::*;

/// Distance to the deadline, as shown next to the due date.
fn deadline_label(due: NaiveDate, today: NaiveDate) -> String {
    let days = (due - today).num_days();
    match days {
        0 => "Aujourd'hui".to_string(),
        d if d < 0 => format!("En retard de {} j", -d),
        d => format!("Dans {} j", d),
    }
}

fn compliance_detail(item: &ComplianceItem, today: NaiveDate) -> impl IntoView {
    let deadline = if item.status == ComplianceStatus::Compliant {
        "Conforme".to_string()
    } else {
        deadline_label(item.due_date, today)
    };
    let notes = item.notes.clone();
    view! {
        <DetailGrid items=vec![
            ("Texte de référence", item.regulation.clone()),
            ("Responsable", item.owner.clone()),
            ("Échéance", format_date(item.due_date)),
            ("Délai", deadline),
            ("Gravité", item.severity.label().to_string()),
        ]>
            <p class="row-detail__text">{notes}</p>
        </DetailGrid>
    }
}

#[component]
pub fn ComplianceItemList() -> impl IntoView {
    let data = use_data();
    let list = MasterList::<ComplianceItem>::new();
    let query = list.query();
    let today = chrono::Local::now().date_naive();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_compliance_items().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a011_compliance_item--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Conformité sociale"
                list=list
                export_filename="conformite.csv"
                on_reload=fetch
            />

            <div class="page__content">
                <FilterPanel list=list placeholder="Exigence, texte, responsable..." with_dates=true />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a011-compliance-item-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=240.0>"Exigence"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Texte"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Responsable"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Échéance"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Gravité"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Statut"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || list.filtered().into_iter().map(|item| {
                                let id = item.id.clone();
                                let toggle_id = id.clone();
                                let detail = StoredValue::new(item.clone());
                                view! {
                                    <TableRow>
                                        <RowToggle list=list id=toggle_id />
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(item.title.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(item.regulation.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(item.owner.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(item.due_date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=item.severity />
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=item.status />
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || list.is_expanded(&id)>
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                {detail.with_value(|detail| compliance_detail(detail, today))}
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

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_deadline_label() {
        assert_eq!(deadline_label(d(10), d(10)), "Aujourd'hui");
        assert_eq!(deadline_label(d(15), d(10)), "Dans 5 j");
        assert_eq!(deadline_label(d(7), d(10)), "En retard de 3 j");
    }
}
