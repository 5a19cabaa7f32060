//! ファイル選択コンポーネント
//!
//! 選択された先頭ファイルをData URLとして読み込み、Base64部分を保存する

use bfhl_form_common::{base64_from_data_url, mime_type_from_data_url, FormState};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};

#[component]
pub fn FileInput(state: RwSignal<FormState>) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            read_file(file, move |payload| {
                state.update(|s| s.set_file_base64(payload));
            });
        }
    };

    view! {
        <fieldset class="form-group">
            <legend>"Upload File"</legend>
            <input type="file" id="file-input" on:change=on_change />
        </fieldset>
    }
}

fn read_file<F>(file: File, on_loaded: F)
where
    F: Fn(String) + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            gloo::console::error!(format!("FileReader unavailable: {:?}", e));
            return;
        }
    };

    let file_name = file.name();
    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Some(data_url) = reader_clone.result().ok().and_then(|r| r.as_string()) {
            gloo::console::log!(format!(
                "{} loaded ({})",
                file_name,
                mime_type_from_data_url(&data_url).unwrap_or("unknown type")
            ));
            on_loaded(base64_from_data_url(&data_url).to_string());
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onloadend(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
