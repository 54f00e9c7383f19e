use crate::shared::icons::icon;
use crate::shared::list_state::MasterList;
use contracts::shared::Searchable;
use leptos::prelude::*;
use thaw::*;

/// First cell of a master-list row: shows or hides the row's detail.
#[component]
pub fn RowToggle<T>(list: MasterList<T>, id: String) -> impl IntoView
where
    T: Searchable + Clone + Send + Sync + 'static,
    T::Status: Send + Sync,
{
    let id = StoredValue::new(id);

    view! {
        <TableCell>
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Subtle
                on_click=move |_| id.with_value(|id| list.toggle(id))
            >
                {move || {
                    if id.with_value(|id| list.is_expanded(id)) {
                        icon("chevron-down")
                    } else {
                        icon("chevron-right")
                    }
                }}
            </Button>
        </TableCell>
    }
}
