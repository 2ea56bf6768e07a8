//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached after login and registration. Shows request counts for both
//! roles; patients also get their favorite providers and the care assistant.
//! Data is fetched once on mount.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use super::authed_error_message;
use crate::components::care_assistant::CareAssistant;
use crate::components::provider_card::ProviderCard;
use crate::net::types::{ProviderSummary, RequestItem, RequestStatus};
use crate::session::identity::display_name;
use crate::session::{Role, SessionService};

/// Recent requests shown on the dashboard.
pub const RECENT_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSummary {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl RequestSummary {
    pub fn from_requests(requests: &[RequestItem]) -> Self {
        requests.iter().fold(Self::default(), |mut acc, r| {
            match r.status {
                RequestStatus::Pending => acc.pending += 1,
                RequestStatus::Approved => acc.approved += 1,
                RequestStatus::Rejected => acc.rejected += 1,
            }
            acc
        })
    }

    pub fn total(self) -> usize {
        self.pending + self.approved + self.rejected
    }
}

/// Newest first by `created_at` (ISO timestamps sort lexically).
pub fn recent_requests(requests: &[RequestItem], limit: usize) -> Vec<RequestItem> {
    let mut sorted = requests.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let service = expect_context::<SessionService>();
    let snapshot = service.snapshot();
    let role = snapshot.role();
    let name = display_name(snapshot.profile.as_ref());
    let is_patient = role == Some(Role::Patient);

    let requests = RwSignal::new(None::<Vec<RequestItem>>);
    let favorites = RwSignal::new(Vec::<ProviderSummary>::new());
    let error = RwSignal::new(None::<String>);

    let loader = service.clone();
    Effect::new(move || {
        let Some(token) = loader.bearer() else {
            return;
        };
        let service = loader.clone();
        leptos::task::spawn_local(async move {
            match crate::net::requests::list_requests(&token).await {
                Ok(items) => {
                    let _ = requests.try_set(Some(items));
                }
                Err(e) => {
                    let _ = error.try_set(Some(authed_error_message(&service, &e)));
                    return;
                }
            }
            if is_patient {
                match crate::net::favorites::list_favorite_providers(&token).await {
                    Ok(providers) => {
                        let _ = favorites.try_set(providers);
                    }
                    Err(e) => leptos::logging::warn!("favorites load failed: {e}"),
                }
            }
        });
    });

    let summary = move || requests.with(|r| r.as_deref().map(RequestSummary::from_requests));

    view! {
        <div class="dashboard-page">
            <h1>{format!("Welcome, {name}")}</h1>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <section class="dashboard-page__summary">
                {move || match summary() {
                    None => view! { <p>"Loading requests..."</p> }.into_any(),
                    Some(s) if s.total() == 0 => {
                        let hint = if is_patient {
                            "No requests yet. Find a provider to get started."
                        } else {
                            "No patient requests yet."
                        };
                        view! { <p>{hint}</p> }.into_any()
                    }
                    Some(s) => view! {
                        <ul class="dashboard-page__counts">
                            <li>{format!("{} pending", s.pending)}</li>
                            <li>{format!("{} approved", s.approved)}</li>
                            <li>{format!("{} rejected", s.rejected)}</li>
                        </ul>
                    }
                        .into_any(),
                }}
                <ul class="dashboard-page__recent">
                    {move || {
                        requests
                            .get()
                            .map(|r| recent_requests(&r, RECENT_LIMIT))
                            .unwrap_or_default()
                            .into_iter()
                            .map(|r| {
                                view! {
                                    <li>
                                        <span>{r.provider_name}</span>
                                        " "
                                        <span class="status">{r.status.label()}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <A href="/requests">"All requests"</A>
            </section>
            <Show when=move || is_patient>
                <section class="dashboard-page__favorites">
                    <h2>"Favorite providers"</h2>
                    {move || {
                        let list = favorites.get();
                        if list.is_empty() {
                            return view! { <p>"No favorites yet. " <A href="/search">"Search providers"</A></p> }
                                .into_any();
                        }
                        list.into_iter()
                            .map(|p| view! { <ProviderCard provider=p favorite=true/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </section>
                <CareAssistant/>
            </Show>
        </div>
    }
}
