use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a017_workflow_template::WorkflowTemplate;
use leptos::prelude::*;
use thaw::*;

fn workflow_steps(template: &WorkflowTemplate) -> impl IntoView {
    let steps = template
        .ordered_steps()
        .into_iter()
        .map(|step| {
            view! {
                <li class="workflow-steps__item">
                    <span class="workflow-steps__order">{step.order}</span>
                    <span class="workflow-steps__name">{step.name.clone()}</span>
                    <span class="workflow-steps__role">{step.role.clone()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="row-detail">
            <p class="row-detail__text">{template.description.clone()}</p>
            <ol class="workflow-steps">{steps}</ol>
        </div>
    }
}

#[component]
pub fn WorkflowTemplateList() -> impl IntoView {
    let data = use_data();
    let list = MasterList::<WorkflowTemplate>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_workflow_templates().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a017_workflow_template--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Modèles de workflow"
                list=list
                export_filename="workflows.csv"
                on_reload=fetch
            />

            <div class="page__content">
                <FilterPanel list=list placeholder="Nom ou description..." status_label="Domaine" />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a017-workflow-template-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=240.0>"Nom"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=320.0>"Description"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Domaine"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Étapes"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || list.filtered().into_iter().map(|template| {
                                let id = template.id.clone();
                                let toggle_id = id.clone();
                                let detail = StoredValue::new(template.clone());
                                view! {
                                    <TableRow>
                                        <RowToggle list=list id=toggle_id />
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(template.name.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(template.description.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=template.area />
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{template.steps.len()}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || list.is_expanded(&id)>
                                        <TableRow>
                                            <TableCell attr:colspan="5">
                                                {detail.with_value(|detail| workflow_steps(detail))}
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
