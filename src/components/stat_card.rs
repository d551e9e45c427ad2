//! Summary card shown above a record list.

use leptos::prelude::*;

use crate::state::theme::ThemeState;

/// One aggregate number with its label, accented with the theme's primary
/// color.
#[component]
pub fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <div class="stat-card" style:border-top-color=move || theme.get().primary>
            <span class="stat-card__value">{move || value.get()}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
