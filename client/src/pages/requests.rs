//! Appointment requests for the signed-in user.
//!
//! Patients see requests they sent and may edit or cancel pending ones.
//! Providers see requests addressed to them and approve or reject with an
//! optional response. Every successful change reloads the list.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use leptos::prelude::*;

use super::{authed_error_message, non_blank};
use crate::net::requests::normalize_time;
use crate::net::types::{RequestItem, RequestStatus, UpdateRequest};
use crate::session::{Role, SessionService};
use crate::state::submit::InFlight;

/// Only pending requests change; patients edit, providers decide.
pub fn allowed_actions(role: Option<Role>, item: &RequestItem) -> (bool, bool) {
    let pending = item.status == RequestStatus::Pending;
    (pending && role == Some(Role::Patient), pending && role == Some(Role::Provider))
}

/// Patient edit body with only the fields that changed, or `None` when
/// nothing did.
pub fn edit_update(item: &RequestItem, message: &str, date: &str, time: &str) -> Option<UpdateRequest> {
    let changed = |before: &str, after: Option<String>| after.filter(|a| a != before.trim());
    let update = UpdateRequest {
        message: changed(&item.message, non_blank(message)),
        date: changed(&item.requested_date, non_blank(date)),
        time: changed(&item.requested_time, non_blank(time).map(|t| normalize_time(&t))),
        ..UpdateRequest::default()
    };
    (update != UpdateRequest::default()).then_some(update)
}

/// Provider decision body.
pub fn decision_update(status: RequestStatus, response: &str) -> UpdateRequest {
    UpdateRequest { status: Some(status), response: non_blank(response), ..UpdateRequest::default() }
}

#[derive(Clone, Debug, PartialEq)]
enum Change {
    Update(String, UpdateRequest),
    Cancel(String),
}

#[component]
pub fn RequestsPage() -> impl IntoView {
    let service = expect_context::<SessionService>();
    let role = service.snapshot().role();

    let items = RwSignal::new(None::<Vec<RequestItem>>);
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let reload = RwSignal::new(0_u32);

    let loader = service.clone();
    Effect::new(move || {
        reload.track();
        let Some(token) = loader.bearer() else {
            return;
        };
        let service = loader.clone();
        leptos::task::spawn_local(async move {
            match crate::net::requests::list_requests(&token).await {
                Ok(list) => {
                    let _ = items.try_set(Some(list));
                }
                Err(e) => {
                    let _ = error.try_set(Some(authed_error_message(&service, &e)));
                }
            }
        });
    });

    let applier = service.clone();
    let apply = Callback::new(move |change: Change| {
        let Some(token) = applier.bearer() else {
            return;
        };
        let Some(guard) = InFlight::begin(busy) else {
            return;
        };
        error.set(None);
        info.set(None);
        let service = applier.clone();
        leptos::task::spawn_local(async move {
            let _guard = guard;
            let result = match &change {
                Change::Update(id, body) => crate::net::requests::update_request(&token, id, body).await,
                Change::Cancel(id) => crate::net::requests::cancel_request(&token, id).await,
            };
            match result {
                Ok(message) => {
                    let _ = info.try_set(non_blank(&message));
                    let _ = reload.try_update(|n| *n += 1);
                }
                Err(e) => {
                    let _ = error.try_set(Some(authed_error_message(&service, &e)));
                }
            }
        });
    });

    view! {
        <div class="requests-page">
            <h1>{if role == Some(Role::Provider) { "Patient requests" } else { "My requests" }}</h1>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || info.get().map(|m| view! { <p class="form-info">{m}</p> })}
            {move || match items.get() {
                None => view! { <p>"Loading..."</p> }.into_any(),
                Some(list) if list.is_empty() => view! { <p>"No requests yet."</p> }.into_any(),
                Some(list) => list
                    .into_iter()
                    .map(|item| view! { <RequestRow item=item role=role busy=busy apply=apply/> })
                    .collect::<Vec<_>>()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn RequestRow(item: RequestItem, role: Option<Role>, busy: RwSignal<bool>, apply: Callback<Change>) -> impl IntoView {
    let (can_edit, can_decide) = allowed_actions(role, &item);
    let message = RwSignal::new(item.message.clone());
    let date = RwSignal::new(item.requested_date.clone());
    let time = RwSignal::new(item.requested_time.clone());
    let response = RwSignal::new(String::new());
    let edit_error = RwSignal::new(None::<&'static str>);

    let id = item.id.clone();
    let original = item.clone();
    let on_save = move |_| match edit_update(&original, &message.get(), &date.get(), &time.get()) {
        Some(body) => {
            edit_error.set(None);
            apply.run(Change::Update(original.id.clone(), body));
        }
        None => edit_error.set(Some("Nothing to save.")),
    };
    let cancel_id = id.clone();
    let on_cancel = move |_| apply.run(Change::Cancel(cancel_id.clone()));
    let approve_id = id.clone();
    let on_approve = move |_| {
        apply.run(Change::Update(approve_id.clone(), decision_update(RequestStatus::Approved, &response.get())));
    };
    let reject_id = id;
    let on_reject = move |_| {
        apply.run(Change::Update(reject_id.clone(), decision_update(RequestStatus::Rejected, &response.get())));
    };

    let when = [item.requested_date.as_str(), item.requested_time.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    view! {
        <article class=format!("request-row request-row--{}", item.status)>
            <header>
                <strong>{item.provider_name.clone()}</strong>
                " "
                <span class="request-row__specialty">{item.specialty.clone()}</span>
                " "
                <span class="status">{item.status.label()}</span>
            </header>
            <p class="request-row__when">{when}</p>
            <p class="request-row__message">{item.message.clone()}</p>
            {(!item.response.is_empty()).then(|| view! { <p class="request-row__response">{format!("Response: {}", item.response)}</p> })}
            <div class="request-row__edit" hidden=!can_edit>
                <textarea prop:value=move || message.get() on:input=move |ev| message.set(event_target_value(&ev))></textarea>
                <input type="date" prop:value=move || date.get() on:input=move |ev| date.set(event_target_value(&ev))/>
                <input type="time" prop:value=move || time.get() on:input=move |ev| time.set(event_target_value(&ev))/>
                <button class="btn" disabled=move || busy.get() on:click=on_save>"Save changes"</button>
                <button class="btn btn--danger" disabled=move || busy.get() on:click=on_cancel>"Cancel request"</button>
                {move || edit_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            </div>
            <div class="request-row__decide" hidden=!can_decide>
                <textarea
                    placeholder="Response to the patient (optional)"
                    prop:value=move || response.get()
                    on:input=move |ev| response.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" disabled=move || busy.get() on:click=on_approve>"Approve"</button>
                <button class="btn btn--danger" disabled=move || busy.get() on:click=on_reject>"Reject"</button>
            </div>
        </article>
    }
}
