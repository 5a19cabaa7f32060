//! フィルタ選択コンポーネント

use bfhl_form_common::{FormState, Toggle};
use leptos::prelude::*;
use web_sys::HtmlInputElement;

/// チェックボックスのid属性
pub fn checkbox_id(toggle: Toggle) -> String {
    toggle.as_str().to_lowercase()
}

#[component]
pub fn FilterPanel<F>(state: RwSignal<FormState>, on_apply: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let checkboxes = Toggle::ALL
        .into_iter()
        .map(|toggle| {
            let id = checkbox_id(toggle);
            view! {
                <div class="filter-option">
                    <input
                        type="checkbox"
                        id=id.clone()
                        name=toggle.as_str()
                        prop:checked=move || state.with(|s| s.toggles.get(toggle))
                        on:change=move |ev| {
                            let input: HtmlInputElement = event_target(&ev);
                            if let Some(changed) = Toggle::from_name(&input.name()) {
                                state.update(|s| s.set_toggle(changed, input.checked()));
                            }
                        }
                    />
                    <label for=id>{toggle.label()}</label>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="filter-panel">
            <label>"Multi Filter"</label>
            {checkboxes}
            <button
                class="btn btn-secondary"
                on:click={
                    let on_apply = on_apply.clone();
                    move |_| on_apply(())
                }
            >
                "Apply Filter"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_ids() {
        let ids: Vec<String> = Toggle::ALL.into_iter().map(checkbox_id).collect();
        assert_eq!(ids, vec!["alpha", "numbers", "heigh"]);
    }

    #[test]
    fn test_checkbox_names_resolve_to_toggles() {
        for toggle in Toggle::ALL {
            assert_eq!(Toggle::from_name(toggle.as_str()), Some(toggle));
        }
        assert_eq!(Toggle::from_name("alpha"), None);
    }
}
