use crate::shared::icons::icon;
use crate::shared::list_state::MasterList;
use contracts::shared::{Searchable, StatusDisplay};
use leptos::prelude::*;
use thaw::*;

/// Collapsible filter panel of a master list: free-text search in the
/// header, status and period in the collapsible part.
///
/// Every change re-filters immediately.
#[component]
pub fn FilterPanel<T>(
    list: MasterList<T>,
    #[prop(default = "Rechercher...")]
    placeholder: &'static str,
    #[prop(default = "Statut")]
    status_label: &'static str,
    /// Shows the period inputs; only for records with a date.
    #[prop(optional)]
    with_dates: bool,
) -> impl IntoView
where
    T: Searchable + Clone + Send + Sync + 'static,
    T::Status: Send + Sync,
{
    let is_expanded = RwSignal::new(false);
    let active_filters_count = Signal::derive(move || list.active_filter_count());

    let status_options = <T::Status as StatusDisplay>::ALL
        .iter()
        .map(|status| {
            view! { <option value=status.code()>{status.label()}</option> }
        })
        .collect_view();

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtres"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    <input
                        type="search"
                        class="form__input filter-panel__search"
                        placeholder=placeholder
                        prop:value=move || list.filter.with(|f| f.query.clone())
                        on:input=move |ev| list.set_query(event_target_value(&ev))
                    />
                </div>
                <div class="filter-panel-header__right">
                    <span class="filter-panel__count">
                        {move || format!("{} / {}", list.filtered_count(), list.total_count())}
                    </span>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div class="form__group">
                            <label class="form__label">{status_label}</label>
                            <select
                                class="form__select"
                                prop:value=move || {
                                    list.filter.with(|f| f.status.map(|s| s.code()).unwrap_or_default().to_string())
                                }
                                on:change=move |ev| {
                                    let code = event_target_value(&ev);
                                    list.set_status(<T::Status as StatusDisplay>::from_code(&code));
                                }
                            >
                                <option value="">"Tous"</option>
                                {status_options}
                            </select>
                        </div>

                        {with_dates.then(|| view! {
                            <div class="form__group">
                                <label class="form__label">"Du"</label>
                                <input
                                    type="date"
                                    class="form__input"
                                    prop:value=move || list.date_inputs.with(|(from, _)| from.clone())
                                    on:input=move |ev| list.set_date_from(event_target_value(&ev))
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Au"</label>
                                <input
                                    type="date"
                                    class="form__input"
                                    prop:value=move || list.date_inputs.with(|(_, to)| to.clone())
                                    on:input=move |ev| list.set_date_to(event_target_value(&ev))
                                />
                            </div>
                        })}

                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| list.reset_filters()
                            disabled=Signal::derive(move || active_filters_count.get() == 0)
                        >
                            "Réinitialiser"
                        </Button>
                    </Flex>
                </div>
            </div>
        </div>
    }
}
