//! The generic create/edit form.
//!
//! Pages supply a field schema and an injected submit handler; this
//! component owns collection, validation, the simulated save latency, and
//! the saving flag. On a failed validation the errors render inline and
//! nothing is submitted.

use std::collections::BTreeMap;

use leptos::prelude::*;
use records::form::{FieldSpec, FormState};

use crate::components::field_input::FieldInput;

/// Simulated latency between a valid submit and its side effect, standing
/// in for the network call this suite does not make.
pub const SIMULATED_SAVE_MS: u32 = 600;

/// Run the injected submit side effect after the simulated save delay.
/// Outside the browser the effect runs immediately.
pub fn run_submit<F>(saving: RwSignal<bool>, effect: F)
where
    F: FnOnce() + 'static,
{
    saving.set(true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(SIMULATED_SAVE_MS).await;
        effect();
        saving.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        effect();
        saving.set(false);
    }
}

/// Generic form screen driven by a field schema.
#[component]
pub fn FormScreen(
    #[prop(into)] title: String,
    fields: Vec<FieldSpec>,
    /// Route of the list screen the Cancel link returns to.
    #[prop(into)]
    back_path: String,
    #[prop(into)] submit_label: String,
    /// Receives the validated values; owns the insert/toast/navigate.
    on_submit: Callback<BTreeMap<String, String>>,
) -> impl IntoView {
    let state = RwSignal::new(FormState::for_fields(&fields));
    let saving = RwSignal::new(false);

    let fields_for_submit = fields.clone();
    let submit = move |_| {
        if saving.get_untracked() {
            return;
        }
        let mut valid = false;
        state.update(|s| valid = s.validate(&fields_for_submit));
        if !valid {
            return;
        }
        let values = state.with_untracked(FormState::values);
        run_submit(saving, move || on_submit.run(values));
    };

    let inputs = fields
        .iter()
        .map(|field| view! { <FieldInput spec=field.clone() state=state/> })
        .collect::<Vec<_>>();

    let button_label = move || {
        if saving.get() { "Saving...".to_owned() } else { submit_label.clone() }
    };

    view! {
        <section class="form-screen">
            <header class="form-screen__header">
                <h1>{title}</h1>
            </header>
            <div class="form-screen__fields">{inputs}</div>
            <div class="form-screen__actions">
                <a class="btn" href=back_path>"Cancel"</a>
                <button
                    class="btn btn--primary"
                    prop:disabled=move || saving.get()
                    on:click=submit
                >
                    {button_label}
                </button>
            </div>
        </section>
    }
}
