use contracts::system::auth::demo::{DEMO_EMAIL, DEMO_PASSWORD};
use contracts::system::auth::{submit_login, LoginForm, Navigator, SubmitError};
use contracts::shared::validation::FieldErrors;
use contracts::system::paths;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::{auth_mode, AuthMode};
use crate::system::auth::client::AuthClient;
use crate::system::auth::context::{use_auth, SignalTokenStore};
use crate::system::navigation::use_router_navigator;

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let field_errors = RwSignal::new(FieldErrors::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (auth_state, set_auth_state) = use_auth();
    let navigator = use_router_navigator();

    // A restored session skips the form.
    let navigator_on_mount = navigator.clone();
    Effect::new(move |_| {
        if auth_state.with_untracked(|s| s.is_authenticated()) {
            navigator_on_mount.navigate(paths::DASHBOARD);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let current = form.get_untracked();
        set_is_loading.set(true);
        set_error_message.set(None);
        field_errors.set(FieldErrors::new());

        let navigator = navigator.clone();
        spawn_local(async move {
            let client = AuthClient::from_config();
            let store = SignalTokenStore::new(set_auth_state);
            match submit_login(&current, &client, &store, &navigator).await {
                Ok(()) => {
                    let user = client.current_user(current.email.trim());
                    set_auth_state.update(|state| state.user_info = Some(user));
                }
                Err(SubmitError::Invalid(errors)) => {
                    field_errors.set(errors);
                    set_is_loading.set(false);
                }
                Err(SubmitError::Failed(message)) => {
                    set_error_message.set(Some(message));
                    set_is_loading.set(false);
                }
            }
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            field_errors
                .with(|errors| errors.get(field).map(str::to_string))
                .map(|message| view! { <div class="form-error">{message}</div> })
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Suite de gestion OHADA"</h1>
                <h2>"Connexion"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit novalidate=true>
                    <div class="form-group">
                        <label for="email">"Adresse e-mail"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="nom@entreprise.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {field_error("email")}
                    </div>

                    <div class="form-group">
                        <label for="password">"Mot de passe"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {field_error("password")}
                    </div>

                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="remember_me"
                            prop:checked=move || form.with(|f| f.remember_me)
                            on:change=move |ev| form.update(|f| f.remember_me = event_target_checked(&ev))
                            disabled=move || is_loading.get()
                        />
                        <label for="remember_me">"Se souvenir de moi"</label>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>

                {(auth_mode() == AuthMode::Demo).then(|| view! {
                    <div class="login-info">
                        <p>"Compte de démonstration :"</p>
                        <p>"E-mail : " <strong>{DEMO_EMAIL}</strong></p>
                        <p>"Mot de passe : " <strong>{DEMO_PASSWORD}</strong></p>
                    </div>
                })}
            </div>
        </div>
    }
}
