use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::SUBMIT_DELAY_MS;
use crate::shared::data_context::DataContext;
use contracts::data::SubmitRequest;
use contracts::shared::WizardState;
use contracts::system::auth::Navigator;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Sends the wizard's request, then opens `list_path` and closes the
/// wizard's own tab. Failures stay on the wizard in `error`.
pub fn submit_wizard(
    ctx: AppGlobalContext,
    data: &DataContext,
    request: SubmitRequest,
    wizard_path: &'static str,
    list_path: &'static str,
    submitting: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    let source = data.source();
    submitting.set(true);
    error.set(None);
    spawn_local(async move {
        TimeoutFuture::new(SUBMIT_DELAY_MS).await;
        let kind = request.kind();
        match source.submit(request).await {
            Ok(receipt) => {
                log::info!("{} submitted as {}", kind, receipt.reference);
                ctx.navigate(list_path);
                ctx.close_tab(wizard_path);
            }
            Err(e) => {
                log::error!("{} rejected: {}", kind, e);
                error.set(Some(e.to_string()));
                submitting.set(false);
            }
        }
    });
}

/// Previous / next buttons; the last step shows `submit_label` instead of
/// "Suivant".
#[component]
pub fn WizardNav(
    state: RwSignal<WizardState>,
    submitting: RwSignal<bool>,
    submit_label: &'static str,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="wizard-actions">
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| state.update(|s| s.previous())
                disabled=Signal::derive(move || state.get().is_first() || submitting.get())
            >
                "Précédent"
            </Button>
            <Show
                when=move || state.get().is_last()
                fallback=move || view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.update(|s| s.next())
                    >
                        "Suivant"
                    </Button>
                }
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_submit.run(())
                    disabled=Signal::derive(move || submitting.get())
                >
                    {move || if submitting.get() { "Enregistrement..." } else { submit_label }}
                </Button>
            </Show>
        </div>
    }
}
