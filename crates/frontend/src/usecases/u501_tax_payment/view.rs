use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::WizardSteps;
use crate::shared::data_context::use_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::usecases::common::{submit_wizard, WizardNav};
use contracts::data::SubmitRequest;
use contracts::domain::a001_account::{Account, AccountClass};
use contracts::domain::a008_tax_payment::TaxType;
use contracts::shared::format::{format_amount, format_optional_date, parse_input_date};
use contracts::shared::WizardState;
use contracts::system::paths;
use contracts::usecases::common::{parse_amount, UseCaseMetadata};
use contracts::usecases::u501_tax_payment::{CreateTaxPayment, TaxPaymentDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Points the confirmation step draws attention to. None of them blocks
/// the submission.
fn draft_warnings(draft: &TaxPaymentDraft) -> Vec<&'static str> {
    let mut warnings = Vec::new();
    if draft.period.trim().is_empty() {
        warnings.push("Aucune période déclarée");
    }
    if parse_amount(&draft.amount) <= 0.0 {
        warnings.push("Montant nul ou non saisi");
    }
    if parse_input_date(&draft.due_date).is_none() {
        warnings.push("Date d'échéance absente");
    }
    warnings
}

#[component]
pub fn TaxPaymentWizard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let data = use_data();

    let draft = RwSignal::new(TaxPaymentDraft::default());
    let state = RwSignal::new(WizardState::new(CreateTaxPayment::steps().len()));
    let bank_accounts = RwSignal::new(Vec::<Account>::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    {
        let source = data.source();
        spawn_local(async move {
            match source.list_accounts().await {
                Ok(accounts) => bank_accounts.set(
                    accounts
                        .into_iter()
                        .filter(|a| a.class == AccountClass::Treasury)
                        .collect(),
                ),
                Err(e) => log::warn!("treasury accounts unavailable: {}", e),
            }
        });
    }

    let data = StoredValue::new(data);
    let on_submit = Callback::new(move |_| {
        let request = SubmitRequest::TaxPayment(draft.get_untracked().to_request());
        submit_wizard(
            ctx,
            &data.get_value(),
            request,
            paths::TAX_PAYMENT_NEW,
            paths::TAX_PAYMENTS,
            submitting,
            error,
        );
    });

    view! {
        <PageFrame page_id="u501_tax_payment--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{CreateTaxPayment::display_name()}</h1>
                </div>
            </div>

            <div class="page__content wizard">
                <p class="wizard__description">{CreateTaxPayment::description()}</p>
                <WizardSteps state=state steps=CreateTaxPayment::steps() />

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {move || match state.get().current() {
                    1 => view! {
                        <div class="wizard__step">
                            <h3 class="section-title">"Impôt et période"</h3>
                            <div class="form__group">
                                <label class="form__label" for="tax_type">"Type d'impôt"</label>
                                <select
                                    id="tax_type"
                                    class="form__select"
                                    prop:value=move || draft.with(|d| d.tax_type.code())
                                    on:change=move |ev| {
                                        if let Some(tax_type) = TaxType::from_code(&event_target_value(&ev)) {
                                            draft.update(|d| d.tax_type = tax_type);
                                        }
                                    }
                                >
                                    {TaxType::ALL.iter().map(|t| view! {
                                        <option value=t.code()>{t.label()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="period">"Période"</label>
                                <input
                                    type="month"
                                    id="period"
                                    class="form__input"
                                    prop:value=move || draft.with(|d| d.period.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.period = value);
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="due_date">"Échéance"</label>
                                <input
                                    type="date"
                                    id="due_date"
                                    class="form__input"
                                    prop:value=move || draft.with(|d| d.due_date.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.due_date = value);
                                    }
                                />
                            </div>
                        </div>
                    }.into_any(),
                    2 => view! {
                        <div class="wizard__step">
                            <h3 class="section-title">"Montant et compte"</h3>
                            <div class="form__group">
                                <label class="form__label" for="amount">"Montant (FCFA)"</label>
                                <input
                                    type="text"
                                    id="amount"
                                    class="form__input"
                                    inputmode="decimal"
                                    placeholder="0"
                                    prop:value=move || draft.with(|d| d.amount.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.amount = value);
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="bank_account">"Compte de trésorerie"</label>
                                <select
                                    id="bank_account"
                                    class="form__select"
                                    prop:value=move || draft.with(|d| d.bank_account.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.bank_account = value);
                                    }
                                >
                                    {move || {
                                        let current = draft.with(|d| d.bank_account.clone());
                                        let accounts = bank_accounts.get();
                                        // Keep a typed-in or default number selectable.
                                        let extra = (!accounts.iter().any(|a| a.number == current))
                                            .then(|| view! { <option value=current.clone()>{current.clone()}</option> });
                                        view! {
                                            {extra}
                                            {accounts.into_iter().map(|a| view! {
                                                <option value=a.number.clone()>
                                                    {format!("{} - {}", a.number, a.label)}
                                                </option>
                                            }).collect_view()}
                                        }
                                    }}
                                </select>
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="note">"Observation"</label>
                                <textarea
                                    id="note"
                                    class="form__input"
                                    rows="3"
                                    prop:value=move || draft.with(|d| d.note.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.note = value);
                                    }
                                />
                            </div>
                        </div>
                    }.into_any(),
                    _ => view! {
                        <div class="wizard__step">
                            <h3 class="section-title">"Confirmation"</h3>
                            <div class="info-box">
                                {move || {
                                    let d = draft.get();
                                    let request = d.to_request();
                                    view! {
                                        <dl class="row-detail__grid">
                                            <dt>"Impôt"</dt><dd>{request.tax_type.label()}</dd>
                                            <dt>"Période"</dt><dd>{request.period.clone()}</dd>
                                            <dt>"Échéance"</dt><dd>{format_optional_date(request.due_date)}</dd>
                                            <dt>"Montant"</dt><dd>{format_amount(request.amount)}</dd>
                                            <dt>"Compte"</dt><dd>{request.bank_account.clone()}</dd>
                                            <dt>"Observation"</dt><dd>{request.note.clone()}</dd>
                                        </dl>
                                    }
                                }}
                            </div>
                            {move || {
                                let warnings = draft.with(draft_warnings);
                                (!warnings.is_empty()).then(|| view! {
                                    <div class="warning-box">
                                        <ul>
                                            {warnings.into_iter().map(|w| view! { <li>{w}</li> }).collect_view()}
                                        </ul>
                                    </div>
                                })
                            }}
                        </div>
                    }.into_any(),
                }}

                <WizardNav
                    state=state
                    submitting=submitting
                    submit_label="Enregistrer le paiement"
                    on_submit=on_submit
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_warnings() {
        let empty = TaxPaymentDraft::default();
        assert_eq!(draft_warnings(&empty).len(), 3);

        let complete = TaxPaymentDraft {
            period: "2024-03".into(),
            amount: "450 000".into(),
            due_date: "2024-04-15".into(),
            ..TaxPaymentDraft::default()
        };
        assert!(draft_warnings(&complete).is_empty());

        let not_a_number = TaxPaymentDraft {
            amount: "NaN".into(),
            ..complete
        };
        assert_eq!(draft_warnings(&not_a_number), vec!["Montant nul ou non saisi"]);
        assert_eq!(not_a_number.to_request().amount, 0.0);
    }
}
