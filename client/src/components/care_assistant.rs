//! Care assistant panel: a short conversation with the symptom-triage chat.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shown on the dashboard. The whole transcript is posted on every turn;
//! the API keeps no conversation state. Failures are shown inline and are
//! not added to the transcript, so a retry resends the same user turn.

#[cfg(test)]
#[path = "care_assistant_test.rs"]
mod care_assistant_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::net::chat::validate_transcript;
use crate::net::types::ChatMessage;
use crate::state::submit::InFlight;

#[component]
pub fn CareAssistant() -> impl IntoView {
    let messages = RwSignal::new(Vec::<ChatMessage>::new());
    let input = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let do_send = move || {
        let text = input.get_untracked();
        let mut transcript = messages.get_untracked();
        // Retry after a failure: the last user turn is still pending.
        if !text.trim().is_empty() {
            transcript.push(ChatMessage::user(text.trim()));
        }
        if let Err(reason) = validate_transcript(&transcript) {
            error.set(Some(reason.to_owned()));
            return;
        }
        let Some(guard) = InFlight::begin(busy) else {
            return;
        };
        messages.set(transcript.clone());
        input.set(String::new());
        error.set(None);

        leptos::task::spawn_local(async move {
            let _guard = guard;
            match crate::net::chat::send_chat(&transcript).await {
                Ok(reply) => {
                    let _ = messages.try_update(|m| m.push(ChatMessage::assistant(reply)));
                }
                Err(e) => {
                    let _ = error.try_set(Some(e.message()));
                }
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    view! {
        <section class="care-assistant">
            <h2>"Care assistant"</h2>
            <div class="care-assistant__messages">
                {move || {
                    let messages = messages.get();
                    if messages.is_empty() {
                        return view! {
                            <p class="care-assistant__empty">"Describe your symptoms to get a suggested specialty."</p>
                        }
                            .into_any();
                    }
                    messages
                        .into_iter()
                        .map(|msg| {
                            let is_user = msg.is_user();
                            let body = if is_user {
                                view! { <span>{msg.content}</span> }.into_any()
                            } else {
                                let rendered = render_markdown_html(&msg.content);
                                view! { <div class="care-assistant__markdown" inner_html=rendered></div> }.into_any()
                            };
                            view! {
                                <div class="care-assistant__message" class:care-assistant__message--user=is_user>
                                    {body}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
                {move || busy.get().then(|| view! { <div class="care-assistant__loading">"Thinking..."</div> })}
            </div>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <form class="care-assistant__input-row" on:submit=on_submit>
                <input
                    class="care-assistant__input"
                    type="text"
                    placeholder="Ask the care assistant..."
                    disabled=move || busy.get()
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Send"
                </button>
            </form>
        </section>
    }
}

/// Render assistant markdown to HTML with raw HTML stripped.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
