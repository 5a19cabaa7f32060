//! 結果表示コンポーネント

use bfhl_form_common::view::{FILTERED_HEADING, RESPONSE_HEADING};
use bfhl_form_common::{filtered_lines, FormState};
use leptos::prelude::*;

#[component]
pub fn ErrorBanner(state: RwSignal<FormState>) -> impl IntoView {
    move || {
        state
            .with(|s| s.error.clone())
            .map(|error| view! { <p class="error">{error}</p> })
    }
}

#[component]
pub fn ResultView(state: RwSignal<FormState>) -> impl IntoView {
    // フィルタ未適用（None）の間は何も表示しない
    let filtered = move || {
        state.with(|s| s.filtered.clone()).map(|result| {
            let lines = filtered_lines(&result)
                .into_iter()
                .map(|line| view! { <p>{format!("{}: {}", line.label, line.text)}</p> })
                .collect_view();
            view! {
                <div class="filtered-response">
                    <h3>{FILTERED_HEADING}</h3>
                    {lines}
                </div>
            }
        })
    };

    let response = move || {
        state.with(|s| s.response.as_ref().map(|r| r.to_pretty())).map(|pretty| {
            view! {
                <div class="server-response">
                    <h3>{RESPONSE_HEADING}</h3>
                    <pre>{pretty}</pre>
                </div>
            }
        })
    };

    view! {
        {filtered}
        {response}
    }
}
