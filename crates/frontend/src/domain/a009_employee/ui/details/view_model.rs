use crate::layout::global_context::AppGlobalContext;
use crate::shared::data_context::DataContext;
use contracts::data::SubmitRequest;
use contracts::domain::a009_employee::{Employee, EmployeeUpdateRequest};
use contracts::shared::format::format_number_int;
use contracts::shared::validation::FieldErrors;
use contracts::system::paths;
use contracts::usecases::common::parse_number;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Salary input as typed: spaces are thousands separators, a decimal comma
/// is accepted. Unlike the wizards, junk is an error rather than zero.
pub(crate) fn parse_salary(input: &str) -> Result<f64, String> {
    if input.trim().is_empty() {
        return Ok(0.0);
    }
    parse_number(input).ok_or_else(|| "Salaire de base invalide".to_string())
}

/// State of the employee form. Edits apply to a copy; the loaded record is
/// kept for "Annuler".
#[derive(Clone, Copy)]
pub struct EmployeeDetailsViewModel {
    pub original: RwSignal<Option<Employee>>,
    pub form: RwSignal<Option<Employee>>,
    pub salary_input: RwSignal<String>,
    pub field_errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    ctx: AppGlobalContext,
    data: StoredValue<DataContext>,
}

impl EmployeeDetailsViewModel {
    pub fn new(ctx: AppGlobalContext, data: DataContext) -> Self {
        Self {
            original: RwSignal::new(None),
            form: RwSignal::new(None),
            salary_input: RwSignal::new(String::new()),
            field_errors: RwSignal::new(FieldErrors::new()),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            saving: RwSignal::new(false),
            ctx,
            data: StoredValue::new(data),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.form.with(|form| self.original.with(|original| form != original))
            || self.salary_changed()
    }

    fn salary_changed(&self) -> bool {
        let typed = self.salary_input.with(|s| parse_salary(s).ok());
        let saved = self
            .original
            .with(|o| o.as_ref().map(|e| e.base_salary));
        match (typed, saved) {
            (Some(typed), Some(saved)) => typed != saved,
            (None, Some(_)) => true,
            _ => false,
        }
    }

    pub fn update(&self, edit: impl FnOnce(&mut Employee)) {
        self.form.update(|form| {
            if let Some(employee) = form.as_mut() {
                edit(employee);
            }
        });
    }

    fn show(&self, employee: Employee) {
        self.salary_input.set(format_number_int(employee.base_salary));
        self.form.set(Some(employee.clone()));
        self.original.set(Some(employee));
    }

    pub fn load(&self, id: String) {
        let this = *self;
        let source = self.data.with_value(|d| d.source());
        spawn_local(async move {
            match source.get_employee_by_id(&id).await {
                Ok(employee) => {
                    this.ctx
                        .update_tab_title(&paths::employee_detail(&id), &employee.full_name());
                    this.show(employee);
                }
                Err(e) => {
                    log::error!("employee {} not loaded: {}", id, e);
                    this.error.set(Some(format!("Erreur de chargement : {}", e)));
                }
            }
        });
    }

    /// Back to the loaded record.
    pub fn reset(&self) {
        if let Some(employee) = self.original.get_untracked() {
            self.show(employee);
        }
        self.field_errors.set(FieldErrors::new());
        self.error.set(None);
    }

    pub fn save_command(&self) {
        let Some(mut current) = self.form.get_untracked() else {
            return;
        };
        self.notice.set(None);
        self.error.set(None);

        let salary = self.salary_input.with_untracked(|s| parse_salary(s));
        let mut errors = match &salary {
            Ok(value) => {
                current.base_salary = *value;
                current.validate().err().unwrap_or_default()
            }
            Err(_) => current.validate().err().unwrap_or_default(),
        };
        if let Err(message) = salary {
            errors.insert("base_salary", message);
        }
        if !errors.is_empty() {
            self.field_errors.set(errors);
            return;
        }
        self.field_errors.set(FieldErrors::new());

        let request = SubmitRequest::EmployeeUpdate(EmployeeUpdateRequest::from(&current));
        let source = self.data.with_value(|d| d.source());
        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            match source.submit(request).await {
                Ok(receipt) => {
                    log::info!("employee {} submitted as {}", current.id, receipt.reference);
                    this.ctx.update_tab_title(
                        &paths::employee_detail(&current.id),
                        &current.full_name(),
                    );
                    this.show(current);
                    this.notice.set(Some(format!(
                        "Modifications enregistrées (réf. {})",
                        receipt.reference
                    )));
                }
                Err(e) => this.error.set(Some(e.to_string())),
            }
            this.saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_salary() {
        assert_eq!(parse_salary("450 000"), Ok(450_000.0));
        assert_eq!(parse_salary("1250,5"), Ok(1250.5));
        assert_eq!(parse_salary(""), Ok(0.0));
        assert!(parse_salary("beaucoup").is_err());
        assert!(parse_salary("NaN").is_err());
        assert!(parse_salary("inf").is_err());
    }
}
