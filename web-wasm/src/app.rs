//! メインアプリケーションコンポーネント

use bfhl_form_common::{Classifier, FormState, DEFAULT_ENDPOINT};
use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::bfhl::FetchClassifier;
use crate::components::{
    header::Header,
    json_input::JsonInput,
    file_input::FileInput,
    filter_panel::FilterPanel,
    result_view::{ErrorBanner, ResultView},
};

/// 送信ボタンの表示文言
pub fn submit_label(is_submitting: bool) -> &'static str {
    if is_submitting { "Submitting..." } else { "Submit" }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // フォーム状態（送信中フラグで同時送信を防ぐ）
    let state = RwSignal::new(FormState::new());
    let is_submitting = move || state.with(|s| s.is_submitting());

    // 送信ハンドラ
    let on_submit = move |_| {
        let request = match state.try_update(|s| s.begin_submission()) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                gloo::console::warn!(e.to_string());
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let outcome = FetchClassifier::new(DEFAULT_ENDPOINT).classify(&request).await;
            state.update(|s| {
                if let Err(e) = s.finish_submission(outcome) {
                    gloo::console::error!(e.to_string());
                }
            });
        });
    };

    // フィルタ適用ハンドラ
    let on_apply = move |_| {
        let warning = state.try_update(|s| s.apply_filters().err().map(|e| e.warning()));
        if let Some(Some(message)) = warning {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
    };

    view! {
        <div class="container">
            <Header />

            <JsonInput state=state />

            <FileInput state=state />

            <button
                class="btn btn-primary"
                disabled=is_submitting
                on:click=on_submit
            >
                {move || submit_label(is_submitting())}
            </button>

            <ErrorBanner state=state />

            <FilterPanel state=state on_apply=on_apply />

            <ResultView state=state />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(false), "Submit");
        assert_eq!(submit_label(true), "Submitting...");
    }
}
