use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::WizardSteps;
use crate::shared::data_context::use_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::usecases::common::{submit_wizard, WizardNav};
use contracts::data::SubmitRequest;
use contracts::domain::a003_customer::Customer;
use contracts::domain::a004_invoice::Invoice;
use contracts::domain::a005_payment::PaymentMethod;
use contracts::shared::format::{format_amount, format_optional_date};
use contracts::shared::WizardState;
use contracts::system::paths;
use contracts::usecases::common::{parse_amount, UseCaseMetadata};
use contracts::usecases::u502_customer_payment::{CustomerPaymentDraft, ReceiveCustomerPayment};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Ticks or unticks an open invoice. A freshly ticked invoice with no
/// amount yet is proposed its full open amount.
fn set_allocation_selected(draft: &mut CustomerPaymentDraft, index: usize, selected: bool) {
    if let Some(allocation) = draft.allocations.get_mut(index) {
        allocation.selected = selected;
        if selected && allocation.amount.trim().is_empty() {
            allocation.amount = format!("{:.0}", allocation.open_amount);
        }
    }
}

/// Difference between the amount received and the amounts allocated.
/// Shown for information only.
fn unallocated_remainder(draft: &CustomerPaymentDraft) -> f64 {
    parse_amount(&draft.amount) - draft.allocated_total()
}

#[component]
pub fn CustomerPaymentWizard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let data = use_data();

    let draft = RwSignal::new(CustomerPaymentDraft::default());
    let state = RwSignal::new(WizardState::new(ReceiveCustomerPayment::steps().len()));
    let customers = RwSignal::new(Vec::<Customer>::new());
    let invoices = StoredValue::new(Vec::<Invoice>::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    {
        let source = data.source();
        spawn_local(async move {
            match source.list_customers().await {
                Ok(list) => customers.set(list),
                Err(e) => error.set(Some(e.to_string())),
            }
            match source.list_invoices().await {
                Ok(list) => invoices.set_value(list),
                Err(e) => log::warn!("invoices unavailable for allocation: {}", e),
            }
        });
    }

    let on_customer_change = move |customer_id: String| {
        let name = customers.with_untracked(|list| {
            list.iter()
                .find(|c| c.id == customer_id)
                .map(|c| c.name.clone())
                .unwrap_or_default()
        });
        invoices.with_value(|all| {
            draft.update(|d| d.select_customer(&customer_id, &name, all));
        });
    };

    let data = StoredValue::new(data);
    let on_submit = Callback::new(move |_| {
        let request = SubmitRequest::CustomerPayment(draft.get_untracked().to_request());
        submit_wizard(
            ctx,
            &data.get_value(),
            request,
            paths::PAYMENT_NEW,
            paths::PAYMENTS,
            submitting,
            error,
        );
    });

    view! {
        <PageFrame page_id="u502_customer_payment--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{ReceiveCustomerPayment::display_name()}</h1>
                </div>
            </div>

            <div class="page__content wizard">
                <p class="wizard__description">{ReceiveCustomerPayment::description()}</p>
                <WizardSteps state=state steps=ReceiveCustomerPayment::steps() />

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {move || match state.get().current() {
                    1 => view! {
                        <div class="wizard__step">
                            <h3 class="section-title">"Client et règlement"</h3>
                            <div class="form__group">
                                <label class="form__label" for="customer">"Client"</label>
                                <select
                                    id="customer"
                                    class="form__select"
                                    prop:value=move || draft.with(|d| d.customer_id.clone())
                                    on:change=move |ev| on_customer_change(event_target_value(&ev))
                                >
                                    <option value="">"-- Sélectionner --"</option>
                                    {move || customers.get().into_iter().map(|c| view! {
                                        <option value=c.id.clone()>{format!("{} - {}", c.code, c.name)}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="date">"Date du règlement"</label>
                                <input
                                    type="date"
                                    id="date"
                                    class="form__input"
                                    prop:value=move || draft.with(|d| d.date.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.date = value);
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="method">"Mode de règlement"</label>
                                <select
                                    id="method"
                                    class="form__select"
                                    prop:value=move || draft.with(|d| d.method.code())
                                    on:change=move |ev| {
                                        if let Some(method) = PaymentMethod::from_code(&event_target_value(&ev)) {
                                            draft.update(|d| d.method = method);
                                        }
                                    }
                                >
                                    {PaymentMethod::ALL.iter().map(|m| view! {
                                        <option value=m.code()>{m.label()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="account_number">"Compte de trésorerie"</label>
                                <input
                                    type="text"
                                    id="account_number"
                                    class="form__input"
                                    prop:value=move || draft.with(|d| d.account_number.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.account_number = value);
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="amount">"Montant reçu (FCFA)"</label>
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
                        </div>
                    }.into_any(),
                    2 => view! {
                        <div class="wizard__step">
                            <h3 class="section-title">"Imputation des factures"</h3>
                            <Show
                                when=move || draft.with(|d| !d.allocations.is_empty())
                                fallback=|| view! {
                                    <div class="info-box">"Aucune facture ouverte pour ce client."</div>
                                }
                            >
                                <table class="row-detail__table">
                                    <thead>
                                        <tr>
                                            <th></th>
                                            <th>"Facture"</th>
                                            <th>"Montant TTC"</th>
                                            <th>"Montant imputé"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || draft.with(|d| d.allocations.clone()).into_iter().enumerate().map(|(index, a)| view! {
                                            <tr>
                                                <td>
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=a.selected
                                                        on:change=move |ev| {
                                                            let checked = event_target_checked(&ev);
                                                            draft.update(|d| set_allocation_selected(d, index, checked));
                                                        }
                                                    />
                                                </td>
                                                <td>{a.invoice_number.clone()}</td>
                                                <td class="amount">{format_amount(a.open_amount)}</td>
                                                <td>
                                                    <input
                                                        type="text"
                                                        class="form__input"
                                                        inputmode="decimal"
                                                        disabled=!a.selected
                                                        prop:value=a.amount.clone()
                                                        on:change=move |ev| {
                                                            let value = event_target_value(&ev);
                                                            draft.update(|d| {
                                                                if let Some(allocation) = d.allocations.get_mut(index) {
                                                                    allocation.amount = value;
                                                                }
                                                            });
                                                        }
                                                    />
                                                </td>
                                            </tr>
                                        }).collect_view()}
                                    </tbody>
                                    <tfoot>
                                        <tr>
                                            <td></td>
                                            <td colspan="2">"Total imputé"</td>
                                            <td class="amount">{move || format_amount(draft.with(|d| d.allocated_total()))}</td>
                                        </tr>
                                    </tfoot>
                                </table>
                            </Show>
                        </div>
                    }.into_any(),
                    _ => view! {
                        <div class="wizard__step">
                            <h3 class="section-title">"Confirmation"</h3>
                            <div class="info-box">
                                {move || {
                                    let request = draft.with(|d| d.to_request());
                                    let allocated: f64 = request.allocations.iter().map(|a| a.amount).sum();
                                    view! {
                                        <dl class="row-detail__grid">
                                            <dt>"Client"</dt><dd>{request.customer_name.clone()}</dd>
                                            <dt>"Date"</dt><dd>{format_optional_date(request.date)}</dd>
                                            <dt>"Mode"</dt><dd>{request.method.label()}</dd>
                                            <dt>"Compte"</dt><dd>{request.account_number.clone()}</dd>
                                            <dt>"Montant reçu"</dt><dd>{format_amount(request.amount)}</dd>
                                            <dt>"Factures imputées"</dt><dd>{request.allocations.len()}</dd>
                                            <dt>"Total imputé"</dt><dd>{format_amount(allocated)}</dd>
                                        </dl>
                                    }
                                }}
                            </div>
                            {move || {
                                let remainder = draft.with(unallocated_remainder);
                                (remainder.abs() >= 0.5).then(|| view! {
                                    <div class="warning-box">
                                        {format!("Écart entre montant reçu et montant imputé : {}", format_amount(remainder))}
                                    </div>
                                })
                            }}
                        </div>
                    }.into_any(),
                }}

                <WizardNav
                    state=state
                    submitting=submitting
                    submit_label="Enregistrer l'encaissement"
                    on_submit=on_submit
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u502_customer_payment::AllocationDraft;

    fn draft_with_two_invoices() -> CustomerPaymentDraft {
        CustomerPaymentDraft {
            customer_id: "c1".into(),
            customer_name: "Client".into(),
            amount: "300000".into(),
            allocations: vec![
                AllocationDraft {
                    invoice_number: "F-1".into(),
                    open_amount: 238_500.0,
                    selected: false,
                    amount: String::new(),
                },
                AllocationDraft {
                    invoice_number: "F-2".into(),
                    open_amount: 100_000.0,
                    selected: false,
                    amount: "40000".into(),
                },
            ],
            ..CustomerPaymentDraft::default()
        }
    }

    #[test]
    fn test_ticking_proposes_open_amount() {
        let mut draft = draft_with_two_invoices();
        set_allocation_selected(&mut draft, 0, true);
        assert_eq!(draft.allocations[0].amount, "238500");

        // An amount already typed is kept.
        set_allocation_selected(&mut draft, 1, true);
        assert_eq!(draft.allocations[1].amount, "40000");

        set_allocation_selected(&mut draft, 5, true);
        assert_eq!(draft.allocated_total(), 278_500.0);
    }

    #[test]
    fn test_unallocated_remainder() {
        let mut draft = draft_with_two_invoices();
        assert_eq!(unallocated_remainder(&draft), 300_000.0);
        set_allocation_selected(&mut draft, 0, true);
        assert_eq!(unallocated_remainder(&draft), 61_500.0);
    }
}
