use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a012_training::Training;
use contracts::shared::format::{format_amount, format_date};
use leptos::prelude::*;
use thaw::*;

fn cost_per_participant(training: &Training) -> Option<f64> {
    (training.participants > 0).then(|| training.cost / f64::from(training.participants))
}

fn training_detail(training: &Training) -> impl IntoView {
    view! {
        <DetailGrid items=vec![
            ("Organisme", training.provider.clone()),
            ("Période", format!("du {} au {}", format_date(training.start_date), format_date(training.end_date))),
            ("Inscrits", format!("{} / {}", training.participants, training.capacity)),
            ("Places restantes", training.seats_left().to_string()),
            ("Coût total", format_amount(training.cost)),
            ("Coût par participant", cost_per_participant(training).map(format_amount).unwrap_or_else(|| "-".to_string())),
        ] />
    }
}

#[component]
pub fn TrainingList() -> impl IntoView {
    let data = use_data();
    let list = MasterList::<Training>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_trainings().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a012_training--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Formations"
                list=list
                export_filename="formations.csv"
                on_reload=fetch
            />

            <div class="page__content">
                <FilterPanel list=list placeholder="Intitulé ou organisme..." with_dates=true />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a012-training-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=240.0>"Intitulé"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Organisme"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Début"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Fin"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Inscrits"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Statut"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || list.filtered().into_iter().map(|training| {
                                let id = training.id.clone();
                                let toggle_id = id.clone();
                                let detail = StoredValue::new(training.clone());
                                let full = training.seats_left() == 0;
                                view! {
                                    <TableRow>
                                        <RowToggle list=list id=toggle_id />
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(training.title.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(training.provider.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(training.start_date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(training.end_date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Badge variant=if full { "warning" } else { "neutral" }.to_string()>
                                                {format!("{} / {}", training.participants, training.capacity)}
                                            </Badge>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=training.status />
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || list.is_expanded(&id)>
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                {detail.with_value(|detail| training_detail(detail))}
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
