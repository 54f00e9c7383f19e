use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_state::MasterList;
use contracts::shared::export::CsvExportable;
use contracts::shared::Searchable;
use leptos::prelude::*;
use thaw::*;

/// `page__header` of a master list: title, row count, CSV export and
/// reload. Extra actions go in `children`.
#[component]
pub fn ListHeader<T, R>(
    title: &'static str,
    list: MasterList<T>,
    /// Name of the downloaded CSV file.
    export_filename: &'static str,
    on_reload: R,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView
where
    T: Searchable + CsvExportable + Clone + Send + Sync + 'static,
    T::Status: Send + Sync,
    R: Fn() + Send + Sync + 'static,
{
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <Badge variant="primary".to_string()>
                    {move || list.total_count().to_string()}
                </Badge>
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| list.export(export_filename)
                    disabled=Signal::derive(move || list.loading.get())
                >
                    {icon("download")}
                    " Exporter"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_reload()
                    disabled=Signal::derive(move || list.loading.get())
                >
                    {move || if list.loading.get() { "Chargement..." } else { "Actualiser" }}
                </Button>
            </div>
        </div>
    }
}
