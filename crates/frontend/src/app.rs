use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::data_context::DataContext;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tabs and panel state shared by the whole shell.
    provide_context(AppGlobalContext::new());

    // Record source for every page.
    provide_context(DataContext::fixtures());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
