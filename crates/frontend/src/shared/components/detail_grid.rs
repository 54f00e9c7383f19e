use leptos::prelude::*;

/// Label / value pairs of an expanded master-list row.
#[component]
pub fn DetailGrid(
    items: Vec<(&'static str, String)>,
    /// Rendered under the pairs (line tables, version history...).
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="row-detail">
            <dl class="row-detail__grid">
                {items
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="row-detail__item">
                                <dt class="row-detail__label">{label}</dt>
                                <dd class="row-detail__value">{value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
            {children.map(|c| c())}
        </div>
    }
}
