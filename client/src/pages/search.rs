//! Provider search (patients).
//!
//! DESIGN
//! ======
//! Results mix affiliated providers (who can receive requests) and NPI
//! registry entries (display only). Favorites are keyed by provider id or
//! NPI number, see `net::favorites::favorite_key`. Choosing "Request
//! appointment" opens an inline composer for that provider.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::collections::HashSet;

use leptos::prelude::*;

use super::{authed_error_message, bound_input};
use crate::components::provider_card::ProviderCard;
use crate::net::favorites::{favorite_key, is_favorite};
use crate::net::providers::ProviderQuery;
use crate::net::requests::build_create_request;
use crate::net::types::{ProviderSummary, SearchResponse};
use crate::session::{Role, SessionService};
use crate::state::submit::InFlight;

pub fn result_heading(response: &SearchResponse) -> String {
    let shown = response.results.len();
    match (shown, response.result_count.max(shown)) {
        (0, _) => "No providers matched your search.".to_owned(),
        (1, 1) => "1 provider found".to_owned(),
        (shown, total) if total > shown => format!("Showing {shown} of {total} providers"),
        (shown, _) => format!("{shown} providers found"),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RequestDraft {
    message: String,
    date: String,
    time: String,
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let service = expect_context::<SessionService>();
    let is_patient = service.snapshot().role() == Some(Role::Patient);

    let query = RwSignal::new(ProviderQuery::default());
    let results = RwSignal::new(None::<SearchResponse>);
    let favorites = RwSignal::new(HashSet::<String>::new());
    let error = RwSignal::new(None::<String>);
    let searching = RwSignal::new(false);

    let selected = RwSignal::new(None::<ProviderSummary>);
    let draft = RwSignal::new(RequestDraft::default());
    let request_info = RwSignal::new(None::<(bool, String)>);
    let sending = RwSignal::new(false);

    let loader = service.clone();
    Effect::new(move || {
        if !is_patient {
            return;
        }
        let Some(token) = loader.bearer() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::favorites::list_favorite_ids(&token).await {
                Ok(ids) => {
                    let _ = favorites.try_set(ids);
                }
                Err(e) => leptos::logging::warn!("favorite ids load failed: {e}"),
            }
        });
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = query.get();
        if current.is_empty() {
            error.set(Some("Enter at least one search field.".to_owned()));
            return;
        }
        let Some(guard) = InFlight::begin(searching) else {
            return;
        };
        error.set(None);
        leptos::task::spawn_local(async move {
            let _guard = guard;
            match crate::net::providers::search_providers(&current).await {
                Ok(response) => {
                    let _ = results.try_set(Some(response));
                }
                Err(e) => {
                    let _ = error.try_set(Some(e.message()));
                }
            }
        });
    };

    let toggler = service.clone();
    let on_toggle_favorite = Callback::new(move |provider: ProviderSummary| {
        let Some(token) = toggler.bearer() else {
            return;
        };
        let key = favorite_key(&provider).to_owned();
        let currently = favorites.with_untracked(|f| f.contains(&key));
        let service = toggler.clone();
        leptos::task::spawn_local(async move {
            let result = if currently {
                crate::net::favorites::remove_favorite(&token, &key).await
            } else {
                crate::net::favorites::add_favorite(&token, &key).await
            };
            match result {
                Ok(_) => {
                    let _ = favorites.try_update(|f| {
                        if currently {
                            f.remove(&key);
                        } else {
                            f.insert(key);
                        }
                    });
                }
                Err(e) => {
                    let _ = error.try_set(Some(authed_error_message(&service, &e)));
                }
            }
        });
    });

    let on_request = Callback::new(move |provider: ProviderSummary| {
        draft.set(RequestDraft::default());
        request_info.set(None);
        selected.set(Some(provider));
    });

    let sender = service.clone();
    let on_send_request = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(provider) = selected.get() else {
            return;
        };
        let current = draft.get();
        let body = match build_create_request(&provider.id, &current.message, &current.date, &current.time, provider.npi()) {
            Ok(body) => body,
            Err(reason) => {
                request_info.set(Some((false, reason.to_owned())));
                return;
            }
        };
        let Some(token) = sender.bearer() else {
            return;
        };
        let Some(guard) = InFlight::begin(sending) else {
            return;
        };
        let service = sender.clone();
        leptos::task::spawn_local(async move {
            let _guard = guard;
            match crate::net::requests::create_request(&token, &body).await {
                Ok(message) => {
                    let text = if message.is_empty() { "Request sent.".to_owned() } else { message };
                    let _ = request_info.try_set(Some((true, text)));
                    let _ = selected.try_set(None);
                }
                Err(e) => {
                    let _ = request_info.try_set(Some((false, authed_error_message(&service, &e))));
                }
            }
        });
    };

    view! {
        <div class="search-page">
            <h1>"Find a provider"</h1>
            <form class="search-page__form" on:submit=on_search>
                {bound_input(query, "First name", "text", |q| &q.first_name, |q| &mut q.first_name)}
                {bound_input(query, "Last name", "text", |q| &q.last_name, |q| &mut q.last_name)}
                {bound_input(query, "Specialty", "text", |q| &q.specialty, |q| &mut q.specialty)}
                {bound_input(query, "Organization", "text", |q| &q.organization_name, |q| &mut q.organization_name)}
                {bound_input(query, "City", "text", |q| &q.city, |q| &mut q.city)}
                {bound_input(query, "State", "text", |q| &q.state, |q| &mut q.state)}
                {bound_input(query, "ZIP code", "text", |q| &q.postal_code, |q| &mut q.postal_code)}
                <button class="btn btn--primary" type="submit" disabled=move || searching.get()>
                    {move || if searching.get() { "Searching..." } else { "Search" }}
                </button>
            </form>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || request_info.get().map(|(ok, text)| view! { <p class:form-info=ok class:form-error=!ok>{text}</p> })}

            <form class="search-page__composer" on:submit=on_send_request hidden=move || selected.with(Option::is_none)>
                <h2>{move || selected.with(|p| p.as_ref().map(|p| format!("Request an appointment with {}", p.name)))}</h2>
                <textarea
                    placeholder="What would you like to be seen for?"
                    prop:value=move || draft.with(|d| d.message.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.message = value);
                    }
                ></textarea>
                {bound_input(draft, "Preferred date", "date", |d| &d.date, |d| &mut d.date)}
                {bound_input(draft, "Preferred time", "time", |d| &d.time, |d| &mut d.time)}
                <button class="btn btn--primary" type="submit" disabled=move || sending.get()>"Send request"</button>
                <button class="btn" type="button" on:click=move |_| selected.set(None)>"Cancel"</button>
            </form>

            {move || {
                results
                    .get()
                    .map(|response| {
                        let heading = result_heading(&response);
                        let cards = response
                            .results
                            .into_iter()
                            .map(|provider| {
                                let key_provider = provider.clone();
                                let favorite = Signal::derive(move || favorites.with(|f| is_favorite(f, &key_provider)));
                                if is_patient {
                                    view! {
                                        <ProviderCard
                                            provider=provider
                                            favorite=favorite
                                            on_toggle_favorite=on_toggle_favorite
                                            on_request=on_request
                                        />
                                    }
                                        .into_any()
                                } else {
                                    view! { <ProviderCard provider=provider favorite=favorite/> }.into_any()
                                }
                            })
                            .collect::<Vec<_>>();
                        view! {
                            <section class="search-page__results">
                                <p class="search-page__count">{heading}</p>
                                {cards}
                            </section>
                        }
                    })
            }}
        </div>
    }
}
