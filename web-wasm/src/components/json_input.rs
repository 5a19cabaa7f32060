//! JSON入力欄コンポーネント

use bfhl_form_common::FormState;
use leptos::prelude::*;

#[component]
pub fn JsonInput(state: RwSignal<FormState>) -> impl IntoView {
    view! {
        <fieldset class="form-group">
            <legend>"API Input (JSON only)"</legend>
            <input
                type="text"
                id="api-input"
                placeholder="Enter JSON input here"
                prop:value=move || state.with(|s| s.input.json_text.clone())
                on:input=move |ev| {
                    state.update(|s| s.set_json_text(event_target_value(&ev)));
                }
            />
        </fieldset>
    }
}
