use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::SUBMIT_DELAY_MS;
use crate::shared::data_context::DataContext;
use contracts::data::SubmitRequest;
use contracts::domain::a009_employee::{Employee, EmployeeStatus};
use contracts::domain::a010_disciplinary_case::DisciplinaryCaseRequest;
use contracts::shared::format::parse_input_date;
use contracts::shared::validation::FieldErrors;
use contracts::system::auth::Navigator;
use contracts::system::paths;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Employees a case can be opened against: everyone still on the payroll.
pub(crate) fn selectable_employees(employees: Vec<Employee>) -> Vec<Employee> {
    employees
        .into_iter()
        .filter(|e| e.status != EmployeeStatus::Terminated)
        .collect()
}

#[derive(Clone, Copy)]
pub struct NewDisciplinaryCaseViewModel {
    pub form: RwSignal<DisciplinaryCaseRequest>,
    /// Raw value of the date input.
    pub opened_on_input: RwSignal<String>,
    pub employees: RwSignal<Vec<Employee>>,
    pub field_errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    ctx: AppGlobalContext,
    data: StoredValue<DataContext>,
}

impl NewDisciplinaryCaseViewModel {
    pub fn new(ctx: AppGlobalContext, data: DataContext) -> Self {
        Self {
            form: RwSignal::new(DisciplinaryCaseRequest::default()),
            opened_on_input: RwSignal::new(String::new()),
            employees: RwSignal::new(Vec::new()),
            field_errors: RwSignal::new(FieldErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            ctx,
            data: StoredValue::new(data),
        }
    }

    pub fn load_employees(&self) {
        let this = *self;
        let source = self.data.with_value(|d| d.source());
        spawn_local(async move {
            match source.list_employees().await {
                Ok(list) => this.employees.set(selectable_employees(list)),
                Err(e) => this.error.set(Some(format!("Erreur de chargement : {}", e))),
            }
        });
    }

    pub fn set_opened_on(&self, value: String) {
        let date = parse_input_date(&value);
        self.opened_on_input.set(value);
        self.form.update(|f| f.opened_on = date);
    }

    /// Validates, submits, then leaves for the case list. `on_done` closes
    /// the form's tab.
    pub fn save_command(&self, on_done: Callback<()>) {
        let request = self.form.get_untracked();
        if let Err(errors) = request.validate() {
            self.field_errors.set(errors);
            return;
        }
        self.field_errors.set(FieldErrors::new());
        self.error.set(None);
        self.saving.set(true);

        let this = *self;
        let source = self.data.with_value(|d| d.source());
        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            match source.submit(SubmitRequest::DisciplinaryCase(request)).await {
                Ok(receipt) => {
                    log::info!("disciplinary case submitted as {}", receipt.reference);
                    this.ctx.navigate(paths::DISCIPLINARY);
                    on_done.run(());
                }
                Err(e) => {
                    this.error.set(Some(e.to_string()));
                    this.saving.set(false);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::data::{DataSource, FixtureDataSource};

    #[tokio::test]
    async fn test_selectable_employees_skip_terminated() {
        let all = FixtureDataSource::new().list_employees().await.unwrap();
        let selectable = selectable_employees(all.clone());
        assert!(selectable.iter().all(|e| e.status != EmployeeStatus::Terminated));
        let terminated = all.iter().filter(|e| e.status == EmployeeStatus::Terminated).count();
        assert_eq!(selectable.len() + terminated, all.len());
    }
}
