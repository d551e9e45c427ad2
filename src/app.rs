//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::components::top_bar::TopBar;
use crate::pages::admin::RolesPage;
use crate::pages::banking::{AccountCreatePage, AccountsPage, ReconciliationsPage};
use crate::pages::crm::{CommunicationsPage, CompaniesPage, CompanyCreatePage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::finance::{InvoiceCreatePage, InvoicesPage};
use crate::pages::hr::{EmployeeCreatePage, EmployeesPage, LeavesPage};
use crate::pages::inventory::WarehousesPage;
use crate::pages::manufacturing::{
    BomCreatePage, BomsPage, ProductionOrdersPage, QualityChecksPage,
};
use crate::pages::sourcing::RfqsPage;
use crate::state::stores::Stores;
use crate::state::theme::ThemeState;
use crate::state::toasts::ToastStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared contexts (theme, toasts, entity stores) and sets up
/// the static client-side route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    let toasts = ToastStore::new();
    let stores = Stores::seeded();

    provide_context(theme);
    provide_context(toasts);
    provide_context(stores);

    // Restore a stored theme override, then reapply whenever it changes.
    #[cfg(feature = "hydrate")]
    {
        if let Some(saved) = crate::util::theme::read_override() {
            theme.set(saved);
        }
        Effect::new(move || crate::util::theme::apply(&theme.get()));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/meridian.css"/>
        <Title text="Meridian"/>

        <Router>
            <TopBar/>
            <ToastHost/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route
                        path=(StaticSegment("crm"), StaticSegment("companies"))
                        view=CompaniesPage
                    />
                    <Route
                        path=(
                            StaticSegment("crm"),
                            StaticSegment("companies"),
                            StaticSegment("new"),
                        )
                        view=CompanyCreatePage
                    />
                    <Route
                        path=(StaticSegment("crm"), StaticSegment("communications"))
                        view=CommunicationsPage
                    />
                    <Route
                        path=(StaticSegment("finance"), StaticSegment("invoices"))
                        view=InvoicesPage
                    />
                    <Route
                        path=(
                            StaticSegment("finance"),
                            StaticSegment("invoices"),
                            StaticSegment("new"),
                        )
                        view=InvoiceCreatePage
                    />
                    <Route
                        path=(StaticSegment("banking"), StaticSegment("accounts"))
                        view=AccountsPage
                    />
                    <Route
                        path=(
                            StaticSegment("banking"),
                            StaticSegment("accounts"),
                            StaticSegment("new"),
                        )
                        view=AccountCreatePage
                    />
                    <Route
                        path=(StaticSegment("banking"), StaticSegment("reconciliations"))
                        view=ReconciliationsPage
                    />
                    <Route
                        path=(StaticSegment("hr"), StaticSegment("employees"))
                        view=EmployeesPage
                    />
                    <Route
                        path=(
                            StaticSegment("hr"),
                            StaticSegment("employees"),
                            StaticSegment("new"),
                        )
                        view=EmployeeCreatePage
                    />
                    <Route path=(StaticSegment("hr"), StaticSegment("leaves")) view=LeavesPage/>
                    <Route
                        path=(StaticSegment("inventory"), StaticSegment("warehouses"))
                        view=WarehousesPage
                    />
                    <Route
                        path=(StaticSegment("mfg"), StaticSegment("orders"))
                        view=ProductionOrdersPage
                    />
                    <Route
                        path=(StaticSegment("mfg"), StaticSegment("quality"))
                        view=QualityChecksPage
                    />
                    <Route path=(StaticSegment("mfg"), StaticSegment("boms")) view=BomsPage/>
                    <Route
                        path=(
                            StaticSegment("mfg"),
                            StaticSegment("boms"),
                            StaticSegment("new"),
                        )
                        view=BomCreatePage
                    />
                    <Route path=(StaticSegment("sourcing"), StaticSegment("rfqs")) view=RfqsPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("roles")) view=RolesPage/>
                </Routes>
            </main>
        </Router>
    }
}
