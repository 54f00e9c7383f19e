use contracts::shared::validation::FieldErrors;
use contracts::system::auth::{submit_reset_password, ResetPasswordForm, SubmitError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;
use web_sys::window;

use crate::system::auth::client::AuthClient;
use crate::system::navigation::use_router_navigator;

/// Query string of the link sent by e-mail: `?token=...`.
#[derive(Debug, Default, Deserialize)]
struct ResetLinkQuery {
    #[serde(default)]
    token: String,
}

fn parse_reset_token(search: &str) -> String {
    serde_qs::from_str::<ResetLinkQuery>(search.trim_start_matches('?'))
        .map(|q| q.token)
        .unwrap_or_default()
}

fn token_from_location() -> String {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_reset_token(&search)
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let form = RwSignal::new(ResetPasswordForm {
        token: token_from_location(),
        ..ResetPasswordForm::default()
    });
    let field_errors = RwSignal::new(FieldErrors::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let navigator = use_router_navigator();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let current = form.get_untracked();
        set_is_loading.set(true);
        set_error_message.set(None);
        field_errors.set(FieldErrors::new());

        let navigator = navigator.clone();
        spawn_local(async move {
            let client = AuthClient::from_config();
            match submit_reset_password(&current, &client, &navigator).await {
                Ok(()) => {}
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
                <h2>"Nouveau mot de passe"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>
                {field_error("token")}

                <form on:submit=on_submit novalidate=true>
                    <div class="form-group">
                        <label for="password">"Nouveau mot de passe"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {field_error("password")}
                    </div>

                    <div class="form-group">
                        <label for="confirmation">"Confirmation"</label>
                        <input
                            type="password"
                            id="confirmation"
                            prop:value=move || form.with(|f| f.confirmation.clone())
                            on:input=move |ev| form.update(|f| f.confirmation = event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {field_error("confirmation")}
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Enregistrement..." } else { "Réinitialiser" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reset_token() {
        assert_eq!(parse_reset_token("?token=abc123"), "abc123");
        assert_eq!(parse_reset_token("token=abc&lang=fr"), "abc");
        assert_eq!(parse_reset_token(""), "");
        assert_eq!(parse_reset_token("?lang=fr"), "");
    }
}
