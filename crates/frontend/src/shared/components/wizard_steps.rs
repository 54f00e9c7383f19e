use contracts::shared::WizardState;
use leptos::prelude::*;

/// Step indicator and progress bar of a multi-step form.
#[component]
pub fn WizardSteps(
    state: RwSignal<WizardState>,
    steps: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="wizard-steps">
            <div class="wizard-steps__list">
                {steps
                    .iter()
                    .enumerate()
                    .map(|(index, title)| {
                        let number = index + 1;
                        view! {
                            <div
                                class="wizard-steps__item"
                                class:wizard-steps__item--active=move || state.get().current() == number
                                class:wizard-steps__item--done={move || state.get().current() > number}
                            >
                                <span class="wizard-steps__number">{number}</span>
                                <span class="wizard-steps__title">{*title}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="wizard-steps__progress">
                <div
                    class="wizard-steps__bar"
                    style:width=move || format!("{}%", state.get().progress_percent())
                ></div>
            </div>
        </div>
    }
}
