use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::icons::icon;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a010_disciplinary_case::DisciplinaryCase;
use contracts::shared::format::format_date;
use contracts::shared::StatusDisplay;
use contracts::system::auth::Navigator;
use contracts::system::paths;
use leptos::prelude::*;
use thaw::*;

fn case_detail(case: &DisciplinaryCase) -> impl IntoView {
    let description = case.description.clone();
    view! {
        <DetailGrid items=vec![
            ("Employé", case.employee_name.clone()),
            ("Date des faits", format_date(case.opened_on)),
            ("Motif", case.category.clone()),
            ("Gravité", case.severity.label().to_string()),
            ("Sanction", case.sanction.clone().unwrap_or_else(|| "Aucune à ce jour".to_string())),
        ]>
            <p class="row-detail__text">{description}</p>
        </DetailGrid>
    }
}

#[component]
pub fn DisciplinaryCaseList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let data = use_data();
    let list = MasterList::<DisciplinaryCase>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_disciplinary_cases().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a010_disciplinary_case--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Dossiers disciplinaires"
                list=list
                export_filename="dossiers_disciplinaires.csv"
                on_reload=fetch
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(paths::DISCIPLINARY_NEW)
                >
                    {icon("plus")}
                    " Nouveau dossier"
                </Button>
            </ListHeader>

            <div class="page__content">
                <FilterPanel list=list placeholder="Référence, employé, motif..." with_dates=true />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a010-disciplinary-case-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Référence"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Date"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Employé"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Motif"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Gravité"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Statut"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || list.filtered().into_iter().map(|case| {
                                let id = case.id.clone();
                                let toggle_id = id.clone();
                                let detail = StoredValue::new(case.clone());
                                view! {
                                    <TableRow>
                                        <RowToggle list=list id=toggle_id />
                                        <TableCell>
                                            <TableCellLayout>
                                                {highlighted(case.reference.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(case.opened_on)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(case.employee_name.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(case.category.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=case.severity />
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=case.status />
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || list.is_expanded(&id)>
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                {detail.with_value(|detail| case_detail(detail))}
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
