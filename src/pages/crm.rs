//! CRM pages: companies and the communication log.

use std::collections::BTreeMap;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use records::collection::{DEFAULT_PAGE_SIZE, FilterSpec, StatSpec, StatValue, count_where};
use records::form::{FieldKind, FieldSpec};

use crate::components::form_screen::FormScreen;
use crate::components::list_screen::{Column, ListConfig, ListScreen};
use crate::domain::crm::{
    Channel, CommStatus, Communication, Company, CompanyStatus, PartnerKind,
};
use crate::domain::option_list;
use crate::pages::next_id;
use crate::state::stores::{Stores, insert_into, remove_from};
use crate::state::toasts::ToastStore;

fn companies_config(on_delete: Option<Callback<String>>) -> ListConfig<Company> {
    ListConfig {
        title: "Companies",
        create_path: Some("/crm/companies/new"),
        create_label: "+ New company",
        search_placeholder: "Search name or city...",
        search_fields: vec![|c: &Company| c.name.clone(), |c: &Company| c.city.clone()],
        filters: vec![
            FilterSpec::new("Status", option_list(CompanyStatus::OPTIONS), |c: &Company| {
                c.status.label().to_owned()
            }),
            FilterSpec::new("Kind", option_list(PartnerKind::OPTIONS), |c: &Company| {
                c.kind.label().to_owned()
            }),
        ],
        columns: vec![
            Column::new("ID", |c: &Company| c.id.clone()),
            Column::new("Name", |c: &Company| c.name.clone()),
            Column::new("Industry", |c: &Company| c.industry.clone()),
            Column::new("City", |c: &Company| c.city.clone()),
            Column::new("Email", |c: &Company| c.email.clone()),
            Column::new("Kind", |c: &Company| c.kind.label().to_owned()),
            Column::new("Status", |c: &Company| c.status.label().to_owned()),
        ],
        stats: vec![
            StatSpec { label: "Companies", compute: |cs: &[Company]| StatValue::Count(cs.len()) },
            StatSpec {
                label: "Active",
                compute: |cs: &[Company]| {
                    StatValue::Count(count_where(cs, |c: &Company| {
                        c.status == CompanyStatus::Active
                    }))
                },
            },
            StatSpec {
                label: "Vendors",
                compute: |cs: &[Company]| {
                    StatValue::Count(count_where(cs, |c: &Company| c.kind.is_vendor()))
                },
            },
        ],
        page_size: DEFAULT_PAGE_SIZE,
        empty_message: "No companies match the current filters.",
        row_id: |c: &Company| c.id.clone(),
        on_delete,
    }
}

/// Company list with row deletion.
#[component]
pub fn CompaniesPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let toasts = expect_context::<ToastStore>();

    let on_delete = Callback::new(move |id: String| {
        if remove_from(stores.companies, |c| c.id == id) {
            #[cfg(feature = "hydrate")]
            log::info!("company {id} deleted");
            toasts.info(format!("Company {id} deleted"));
        } else {
            toasts.error(format!("Company {id} no longer exists"));
        }
    });

    let records = Signal::derive(move || stores.companies.get().to_vec());
    view! { <ListScreen config=companies_config(Some(on_delete)) records=records/> }
}

/// Create-company form.
#[component]
pub fn CompanyCreatePage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let toasts = expect_context::<ToastStore>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let fields = vec![
        FieldSpec::required("name", "Company name", FieldKind::Text),
        FieldSpec::required("kind", "Kind", FieldKind::Select(option_list(PartnerKind::OPTIONS))),
        FieldSpec::optional("industry", "Industry", FieldKind::Text),
        FieldSpec::optional("city", "City", FieldKind::Text),
        FieldSpec::required("email", "Contact email", FieldKind::Email),
        FieldSpec::required(
            "status",
            "Status",
            FieldKind::Select(option_list(CompanyStatus::OPTIONS)),
        ),
    ];

    let on_submit = Callback::new(move |values: BTreeMap<String, String>| {
        let value = |name: &str| values.get(name).cloned().unwrap_or_default();
        let id = next_id(
            stores.companies.get_untracked().items(),
            |c: &Company| c.id.clone(),
            "C-",
            1000,
        );
        let company = Company {
            id: id.clone(),
            name: value("name"),
            kind: PartnerKind::from_label(&value("kind")),
            industry: value("industry"),
            city: value("city"),
            email: value("email"),
            status: CompanyStatus::from_label(&value("status")),
        };
        insert_into(stores.companies, company);
        #[cfg(feature = "hydrate")]
        log::info!("company {id} created");
        toasts.success(format!("Company {id} created"));
        #[cfg(feature = "hydrate")]
        navigate("/crm/companies", NavigateOptions::default());
    });

    view! {
        <FormScreen
            title="New company"
            fields=fields
            back_path="/crm/companies"
            submit_label="Create company"
            on_submit=on_submit
        />
    }
}

fn communications_config() -> ListConfig<Communication> {
    ListConfig {
        title: "Communication log",
        create_path: None,
        create_label: "",
        search_placeholder: "Search subject or company...",
        search_fields: vec![
            |c: &Communication| c.subject.clone(),
            |c: &Communication| c.company.clone(),
        ],
        filters: vec![
            FilterSpec::new("Channel", option_list(Channel::OPTIONS), |c: &Communication| {
                c.channel.label().to_owned()
            }),
            FilterSpec::new("Status", option_list(CommStatus::OPTIONS), |c: &Communication| {
                c.status.label().to_owned()
            }),
        ],
        columns: vec![
            Column::new("ID", |c: &Communication| c.id.clone()),
            Column::new("Date", |c: &Communication| c.date.clone()),
            Column::new("Subject", |c: &Communication| c.subject.clone()),
            Column::new("Channel", |c: &Communication| c.channel.label().to_owned()),
            Column::new("Company", |c: &Communication| c.company.clone()),
            Column::new("Owner", |c: &Communication| c.owner.clone()),
            Column::new("Status", |c: &Communication| c.status.label().to_owned()),
        ],
        stats: vec![
            StatSpec {
                label: "Entries",
                compute: |cs: &[Communication]| StatValue::Count(cs.len()),
            },
            StatSpec {
                label: "Open",
                compute: |cs: &[Communication]| {
                    StatValue::Count(count_where(cs, |c: &Communication| {
                        c.status == CommStatus::Open
                    }))
                },
            },
        ],
        page_size: DEFAULT_PAGE_SIZE,
        empty_message: "No log entries match the current filters.",
        row_id: |c: &Communication| c.id.clone(),
        on_delete: None,
    }
}

/// Communication log, read-only.
#[component]
pub fn CommunicationsPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let records = Signal::derive(move || stores.communications.get().to_vec());
    view! { <ListScreen config=communications_config() records=records/> }
}
