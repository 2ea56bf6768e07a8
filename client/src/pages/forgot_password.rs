//! Password recovery request. The API answers with the same acknowledgement
//! whether or not the address is registered.

use leptos::prelude::*;
use leptos_router::components::A;

use super::login::looks_like_email;
use crate::state::submit::InFlight;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(None::<(bool, String)>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get().trim().to_owned();
        if !looks_like_email(&email_value) {
            message.set(Some((false, "Enter a valid email address.".to_owned())));
            return;
        }
        let Some(guard) = InFlight::begin(busy) else {
            return;
        };
        message.set(None);
        leptos::task::spawn_local(async move {
            let _guard = guard;
            let outcome = match crate::net::auth::forgot_password(&email_value).await {
                Ok(ack) if !ack.is_empty() => (true, ack),
                Ok(_) => (true, "If an account exists for that email, a reset link is on its way.".to_owned()),
                Err(e) => (false, e.message()),
            };
            let _ = message.try_set(Some(outcome));
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Reset your password"</h1>
                <input
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Send reset link"
                </button>
                {move || {
                    message
                        .get()
                        .map(|(ok, text)| view! { <p class:form-info=ok class:form-error=!ok>{text}</p> })
                }}
                <p class="auth-form__links">
                    <A href="/login">"Back to login"</A>
                </p>
            </form>
        </div>
    }
}
