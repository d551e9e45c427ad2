//! Dashboard: module tiles and suite-wide aggregates.

use leptos::prelude::*;
use records::totals::format_amount;

use crate::components::stat_card::StatCard;
use crate::domain::crm::CompanyStatus;
use crate::domain::hr::LeaveStatus;
use crate::state::stores::Stores;
use crate::state::theme::ThemeState;

const MODULES: &[(&str, &str, &[(&str, &str)])] = &[
    ("CRM", "Customers, vendors, and outreach", &[
        ("Companies", "/crm/companies"),
        ("Communication log", "/crm/communications"),
    ]),
    ("Finance", "Payables", &[
        ("A/P invoices", "/finance/invoices"),
        ("New invoice", "/finance/invoices/new"),
    ]),
    ("Banking", "House banks and statements", &[
        ("Accounts", "/banking/accounts"),
        ("Reconciliations", "/banking/reconciliations"),
    ]),
    ("HR", "People and absence", &[
        ("Employees", "/hr/employees"),
        ("Leave requests", "/hr/leaves"),
    ]),
    ("Inventory", "Stock locations", &[("Warehouses", "/inventory/warehouses")]),
    ("Manufacturing", "Shop floor", &[
        ("Production orders", "/mfg/orders"),
        ("Quality checks", "/mfg/quality"),
        ("Bills of materials", "/mfg/boms"),
    ]),
    ("Sourcing", "Vendor selection", &[("RFQs", "/sourcing/rfqs")]),
    ("Admin", "Access control", &[("Roles", "/admin/roles")]),
];

/// Landing page. The aggregate cards are recomputed from the stores on
/// every render, the same way every list screen computes its stats.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let theme = expect_context::<RwSignal<ThemeState>>();

    let open_invoices = move || {
        stores
            .invoices
            .get()
            .items()
            .iter()
            .filter(|i| i.status.is_outstanding())
            .count()
            .to_string()
    };
    let outstanding_amount = move || {
        let total: f64 = stores
            .invoices
            .get()
            .items()
            .iter()
            .filter(|i| i.status.is_outstanding())
            .map(|i| i.totals.grand_total)
            .sum();
        format_amount(total)
    };
    let active_companies = move || {
        stores
            .companies
            .get()
            .items()
            .iter()
            .filter(|c| c.status == CompanyStatus::Active)
            .count()
            .to_string()
    };
    let pending_leaves = move || {
        stores
            .leaves
            .get()
            .items()
            .iter()
            .filter(|l| l.status == LeaveStatus::Pending)
            .count()
            .to_string()
    };

    let tiles = MODULES
        .iter()
        .map(|(name, blurb, screens)| {
            let links = screens
                .iter()
                .map(|(label, path)| {
                    view! { <a class="module-tile__link" href=*path>{*label}</a> }
                })
                .collect::<Vec<_>>();
            view! {
                <div class="module-tile" style:border-left-color=move || theme.get().secondary>
                    <h2 class="module-tile__name">{*name}</h2>
                    <p class="module-tile__blurb">{*blurb}</p>
                    <nav class="module-tile__links">{links}</nav>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="dashboard">
            <header class="dashboard__header">
                <h1>"Meridian"</h1>
                <p class="dashboard__subtitle">"Business suite overview"</p>
            </header>
            <div class="dashboard__stats">
                <StatCard label="Open A/P invoices" value=Signal::derive(open_invoices)/>
                <StatCard label="Outstanding amount" value=Signal::derive(outstanding_amount)/>
                <StatCard label="Active companies" value=Signal::derive(active_companies)/>
                <StatCard label="Pending leave requests" value=Signal::derive(pending_leaves)/>
            </div>
            <div class="dashboard__grid">{tiles}</div>
        </section>
    }
}
