//! Card for one provider in search results and the favorites list.

#[cfg(test)]
#[path = "provider_card_test.rs"]
mod provider_card_test;

use leptos::prelude::*;

use crate::net::types::ProviderSummary;

/// "Accepts: A, B" line, or `None` when no plans are listed.
pub fn insurance_line(insurance: &[String]) -> Option<String> {
    let plans: Vec<&str> = insurance.iter().map(|s| s.trim()).filter(|s| !s.is_empty()).collect();
    (!plans.is_empty()).then(|| format!("Accepts: {}", plans.join(", ")))
}

#[component]
pub fn ProviderCard(
    provider: ProviderSummary,
    #[prop(into)] favorite: Signal<bool>,
    #[prop(optional)] on_toggle_favorite: Option<Callback<ProviderSummary>>,
    #[prop(optional)] on_request: Option<Callback<ProviderSummary>>,
) -> impl IntoView {
    let insurance = insurance_line(&provider.insurance);
    let accepts_requests = provider.accepts_requests();
    let favorite_target = provider.clone();
    let request_target = provider.clone();

    view! {
        <article class="provider-card" class:provider-card--affiliated=accepts_requests>
            <h3 class="provider-card__name">{provider.name.clone()}</h3>
            <p class="provider-card__specialty">{provider.specialty.clone()}</p>
            <p class="provider-card__location">{provider.location.clone()}</p>
            {(!provider.phone.is_empty()).then(|| view! { <p class="provider-card__phone">{provider.phone.clone()}</p> })}
            {insurance.map(|line| view! { <p class="provider-card__insurance">{line}</p> })}
            <div class="provider-card__actions">
                {on_toggle_favorite
                    .map(|cb| {
                        view! {
                            <button
                                class="btn provider-card__favorite"
                                class:provider-card__favorite--on=move || favorite.get()
                                on:click=move |_| cb.run(favorite_target.clone())
                            >
                                {move || if favorite.get() { "Unfavorite" } else { "Favorite" }}
                            </button>
                        }
                    })}
                {on_request
                    .filter(|_| accepts_requests)
                    .map(|cb| {
                        view! {
                            <button class="btn btn--primary provider-card__request" on:click=move |_| cb.run(request_target.clone())>
                                "Request appointment"
                            </button>
                        }
                    })}
            </div>
        </article>
    }
}
