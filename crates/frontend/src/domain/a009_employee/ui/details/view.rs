use super::view_model::EmployeeDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::StatusBadge;
use crate::shared::data_context::use_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a009_employee::{ContractType, Employee, EmployeeStatus};
use contracts::shared::format::format_date;
use contracts::shared::StatusDisplay;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn EmployeeDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = EmployeeDetailsViewModel::new(ctx, use_data());
    vm.load(id);

    let field_error = move |field: &'static str| {
        move || {
            vm.field_errors
                .with(|errors| errors.get(field).map(str::to_string))
                .map(|message| view! { <div class="form-error">{message}</div> })
        }
    };

    // Text input bound to one field of the edited copy.
    let text_field = move |field: &'static str,
                           label: &'static str,
                           read: fn(&Employee) -> String,
                           write: fn(&mut Employee, String)| {
        view! {
            <div class="form-group">
                <label for=field>{label}</label>
                <input
                    type="text"
                    id=field
                    prop:value=move || vm.form.with(|f| f.as_ref().map(read).unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update(|e| write(e, value));
                    }
                />
                {field_error(field)}
            </div>
        }
    };

    view! {
        <PageFrame page_id="a009_employee--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container employee-details">
                <div class="details-header">
                    <h3>
                        {move || vm.form.with(|f| {
                            f.as_ref()
                                .map(|e| format!("{} - {}", e.registration_number, e.full_name()))
                                .unwrap_or_else(|| "Chargement...".to_string())
                        })}
                    </h3>
                    {move || vm.original.with(|o| o.as_ref().map(|e| view! { <StatusBadge status=e.status /> }))}
                </div>

                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || vm.notice.get().map(|n| view! { <div class="info-box">{n}</div> })}

                <Show when=move || vm.form.with(|f| f.is_some())>
                    <div class="details-form">
                        {text_field("first_name", "Prénom", |e| e.first_name.clone(), |e, v| e.first_name = v)}
                        {text_field("last_name", "Nom", |e| e.last_name.clone(), |e, v| e.last_name = v)}
                        {text_field("position", "Poste", |e| e.position.clone(), |e, v| e.position = v)}
                        {text_field("department", "Département", |e| e.department.clone(), |e, v| e.department = v)}
                        {text_field("email", "E-mail", |e| e.email.clone(), |e, v| e.email = v)}
                        {text_field("phone", "Téléphone", |e| e.phone.clone(), |e, v| e.phone = v)}

                        <div class="form-group">
                            <label for="base_salary">"Salaire de base (FCFA)"</label>
                            <input
                                type="text"
                                id="base_salary"
                                inputmode="decimal"
                                prop:value=move || vm.salary_input.get()
                                on:input=move |ev| vm.salary_input.set(event_target_value(&ev))
                            />
                            {field_error("base_salary")}
                        </div>

                        <div class="form-group">
                            <label for="contract">"Contrat"</label>
                            <select
                                id="contract"
                                prop:value=move || vm.form.with(|f| f.as_ref().map(|e| e.contract.code()).unwrap_or_default())
                                on:change=move |ev| {
                                    if let Some(contract) = ContractType::from_code(&event_target_value(&ev)) {
                                        vm.update(|e| e.contract = contract);
                                    }
                                }
                            >
                                {ContractType::ALL.iter().map(|c| view! {
                                    <option value=c.code()>{c.label()}</option>
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="status">"Statut"</label>
                            <select
                                id="status"
                                prop:value=move || vm.form.with(|f| f.as_ref().map(|e| e.status.code()).unwrap_or_default())
                                on:change=move |ev| {
                                    if let Some(status) = EmployeeStatus::from_code(&event_target_value(&ev)) {
                                        vm.update(|e| e.status = status);
                                    }
                                }
                            >
                                {EmployeeStatus::ALL.iter().map(|s| view! {
                                    <option value=s.code()>{s.label()}</option>
                                }).collect_view()}
                            </select>
                        </div>

                        // Read-only administrative data
                        <div class="form-group">
                            <label>"Date d'embauche"</label>
                            <div class="form-static">
                                {move || vm.form.with(|f| f.as_ref().map(|e| format_date(e.hire_date)).unwrap_or_default())}
                            </div>
                        </div>
                        <div class="form-group">
                            <label>"N° CNPS"</label>
                            <div class="form-static">
                                {move || vm.form.with(|f| f.as_ref().map(|e| e.social_security_number.clone()).unwrap_or_default())}
                            </div>
                        </div>
                    </div>
                </Show>

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command()
                        disabled=Signal::derive(move || vm.saving.get() || !vm.is_dirty())
                    >
                        {move || if vm.saving.get() { "Enregistrement..." } else { "Enregistrer" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.reset()
                        disabled=Signal::derive(move || vm.saving.get())
                    >
                        "Annuler"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        "Fermer"
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}
