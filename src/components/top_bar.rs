//! Suite-wide top bar with module navigation.

use leptos::prelude::*;

use crate::state::theme::ThemeState;

const LINKS: &[(&str, &str)] = &[
    ("Dashboard", "/"),
    ("CRM", "/crm/companies"),
    ("Finance", "/finance/invoices"),
    ("Banking", "/banking/accounts"),
    ("HR", "/hr/employees"),
    ("Inventory", "/inventory/warehouses"),
    ("Manufacturing", "/mfg/orders"),
    ("Sourcing", "/sourcing/rfqs"),
    ("Admin", "/admin/roles"),
];

/// Top navigation bar, brand accented with the theme's primary color.
#[component]
pub fn TopBar() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <header class="top-bar">
            <a class="top-bar__brand" href="/" style:color=move || theme.get().primary>
                "Meridian"
            </a>
            <nav class="top-bar__nav">
                {LINKS
                    .iter()
                    .map(|(label, path)| {
                        view! { <a class="top-bar__link" href=*path>{*label}</a> }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </header>
    }
}
