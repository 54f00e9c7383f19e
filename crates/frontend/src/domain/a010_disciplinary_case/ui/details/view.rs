use super::view_model::NewDisciplinaryCaseViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::PageHeader;
use crate::shared::data_context::use_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a010_disciplinary_case::Severity;
use contracts::shared::StatusDisplay;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn NewDisciplinaryCase(on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = NewDisciplinaryCaseViewModel::new(ctx, use_data());
    vm.load_employees();

    let field_error = move |field: &'static str| {
        move || {
            vm.field_errors
                .with(|errors| errors.get(field).map(str::to_string))
                .map(|message| view! { <div class="form-error">{message}</div> })
        }
    };

    view! {
        <PageFrame page_id="a010_disciplinary_case--detail" category=PAGE_CAT_DETAIL>
            <PageHeader
                title="Nouveau dossier disciplinaire"
                subtitle="Ouverture d'une procédure à l'encontre d'un salarié".to_string()
            />

            <div class="details-container">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="employee_id">"Employé"</label>
                        <select
                            id="employee_id"
                            prop:value=move || vm.form.with(|f| f.employee_id.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.employee_id = value);
                            }
                        >
                            <option value="">"-- Sélectionner --"</option>
                            {move || vm.employees.get().into_iter().map(|e| view! {
                                <option value=e.id.clone()>
                                    {format!("{} - {}", e.registration_number, e.full_name())}
                                </option>
                            }).collect_view()}
                        </select>
                        {field_error("employee_id")}
                    </div>

                    <div class="form-group">
                        <label for="opened_on">"Date des faits"</label>
                        <input
                            type="date"
                            id="opened_on"
                            prop:value=move || vm.opened_on_input.get()
                            on:input=move |ev| vm.set_opened_on(event_target_value(&ev))
                        />
                        {field_error("opened_on")}
                    </div>

                    <div class="form-group">
                        <label for="category">"Motif"</label>
                        <input
                            type="text"
                            id="category"
                            placeholder="Absence injustifiée, retard répété..."
                            prop:value=move || vm.form.with(|f| f.category.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.category = value);
                            }
                        />
                        {field_error("category")}
                    </div>

                    <div class="form-group">
                        <label for="severity">"Gravité"</label>
                        <select
                            id="severity"
                            prop:value=move || vm.form.with(|f| f.severity.code())
                            on:change=move |ev| {
                                if let Some(severity) = Severity::from_code(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.severity = severity);
                                }
                            }
                        >
                            {Severity::ALL.iter().map(|s| view! {
                                <option value=s.code()>{s.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="description">"Description des faits"</label>
                        <textarea
                            id="description"
                            rows="5"
                            prop:value=move || vm.form.with(|f| f.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.description = value);
                            }
                        />
                        {field_error("description")}
                    </div>
                </div>

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_close)
                        disabled=Signal::derive(move || vm.saving.get())
                    >
                        {move || if vm.saving.get() { "Enregistrement..." } else { "Ouvrir le dossier" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=Signal::derive(move || vm.saving.get())
                    >
                        "Annuler"
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}
