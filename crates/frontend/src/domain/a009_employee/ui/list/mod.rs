use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a009_employee::Employee;
use contracts::shared::format::{format_amount, format_date};
use contracts::system::auth::Navigator;
use contracts::system::paths;
use leptos::prelude::*;
use thaw::*;

fn employee_detail(employee: &Employee) -> impl IntoView {
    view! {
        <DetailGrid items=vec![
            ("E-mail", employee.email.clone()),
            ("Téléphone", employee.phone.clone()),
            ("Contrat", employee.contract.label().to_string()),
            ("Salaire de base", format_amount(employee.base_salary)),
            ("N° CNPS", employee.social_security_number.clone()),
        ] />
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let data = use_data();
    let list = MasterList::<Employee>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_employees().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a009_employee--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Employés"
                list=list
                export_filename="employes.csv"
                on_reload=fetch
            />

            <div class="page__content">
                <FilterPanel
                    list=list
                    placeholder="Matricule, nom, poste, département..."
                    with_dates=true
                />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a009-employee-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Matricule"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Nom"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Poste"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Département"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Embauche"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Statut"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || list.filtered().into_iter().map(|employee| {
                                let id = employee.id.clone();
                                let toggle_id = id.clone();
                                let detail_path = paths::employee_detail(&id);
                                let detail = StoredValue::new(employee.clone());
                                let full_name = employee.full_name();
                                view! {
                                    <TableRow>
                                        <RowToggle list=list id=toggle_id />
                                        <TableCell>
                                            <TableCellLayout>
                                                {highlighted(employee.registration_number.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(full_name, query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(employee.position.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(employee.department.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(employee.hire_date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=employee.status />
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Secondary
                                                on_click=move |_| ctx.navigate(&detail_path)
                                            >
                                                "Ouvrir"
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || list.is_expanded(&id)>
                                        <TableRow>
                                            <TableCell attr:colspan="8">
                                                {detail.with_value(|detail| employee_detail(detail))}
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
