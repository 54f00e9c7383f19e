//! Top bar: brand, sidebar toggle, signed-in user and sign-out.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::navigation::use_router_navigator;
use contracts::system::auth::Navigator;
use contracts::system::paths;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();
    let navigator = use_router_navigator();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        ctx.close_all();
        do_logout(set_auth_state);
        navigator.navigate(paths::LOGIN);
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Masquer le menu" } else { "Afficher le menu" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Suite OHADA"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.get().user_info
                            .map(|u| u.full_name.unwrap_or(u.email))
                            .unwrap_or_else(|| "Utilisateur".to_string())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Déconnexion">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
