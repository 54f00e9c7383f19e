use contracts::system::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::context::use_auth;

/// Renders `children` only with a session token; otherwise sends the user
/// to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <RedirectToLogin /> }
        >
            {children()}
        </Show>
    }
}

#[component]
fn RedirectToLogin() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        navigate(paths::LOGIN, NavigateOptions::default());
    });

    view! { <div class="page__status">"Redirection vers la connexion..."</div> }
}
