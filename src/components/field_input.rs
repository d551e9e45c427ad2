//! One labelled form control bound to shared form state.

use leptos::prelude::*;
use records::form::{FieldKind, FieldSpec, FormState};

/// Render the control for a field spec and wire it to the form state.
/// Validation errors from the last submit attempt render inline; editing
/// the field clears its error.
#[component]
pub fn FieldInput(spec: FieldSpec, state: RwSignal<FormState>) -> impl IntoView {
    let name = spec.name;
    let value = move || state.with(|s| s.value(name));
    let error = move || state.with(|s| s.error(name));

    let control = match spec.kind.clone() {
        FieldKind::Select(options) => view! {
            <select
                class="field__control"
                prop:value=value
                on:change=move |ev| state.update(|s| s.set(name, event_target_value(&ev)))
            >
                {options
                    .into_iter()
                    .map(|option| view! { <option value=option.clone()>{option.clone()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                class="field__control field__control--textarea"
                rows="3"
                prop:value=value
                on:input=move |ev| state.update(|s| s.set(name, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
        kind => {
            let input_type = match kind {
                FieldKind::Email => "email",
                FieldKind::Amount => "number",
                FieldKind::Date => "date",
                _ => "text",
            };
            view! {
                <input
                    class="field__control"
                    type=input_type
                    prop:value=value
                    on:input=move |ev| state.update(|s| s.set(name, event_target_value(&ev)))
                />
            }
            .into_any()
        }
    };

    view! {
        <label class="field">
            <span class="field__label">
                {spec.label}
                {spec.required.then(|| view! { <span class="field__required">"*"</span> })}
            </span>
            {control}
            {move || {
                error().map(|message| view! { <span class="field__error">{message}</span> })
            }}
        </label>
    }
}
