//! Banking pages: house bank accounts and reconciliations.

use std::collections::BTreeMap;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use records::collection::{
    DEFAULT_PAGE_SIZE, FilterSpec, StatSpec, StatValue, count_where, sum_by,
};
use records::form::{FieldKind, FieldSpec};
use records::totals::format_amount;

use crate::components::form_screen::FormScreen;
use crate::components::list_screen::{Column, ListConfig, ListScreen};
use crate::domain::banking::{
    AccountStatus, BankAccount, CURRENCIES, ReconStatus, Reconciliation,
};
use crate::domain::option_list;
use crate::pages::next_id;
use crate::state::stores::{Stores, insert_into};
use crate::state::toasts::ToastStore;

fn accounts_config() -> ListConfig<BankAccount> {
    ListConfig {
        title: "Bank accounts",
        create_path: Some("/banking/accounts/new"),
        create_label: "+ New account",
        search_placeholder: "Search account or bank...",
        search_fields: vec![|a: &BankAccount| a.name.clone(), |a: &BankAccount| a.bank.clone()],
        filters: vec![
            FilterSpec::new("Status", option_list(AccountStatus::OPTIONS), |a: &BankAccount| {
                a.status.label().to_owned()
            }),
            FilterSpec::new("Currency", option_list(CURRENCIES), |a: &BankAccount| {
                a.currency.clone()
            }),
        ],
        columns: vec![
            Column::new("ID", |a: &BankAccount| a.id.clone()),
            Column::new("Name", |a: &BankAccount| a.name.clone()),
            Column::new("Bank", |a: &BankAccount| a.bank.clone()),
            Column::new("Number", |a: &BankAccount| a.number.clone()),
            Column::new("Currency", |a: &BankAccount| a.currency.clone()),
            Column::new("Status", |a: &BankAccount| a.status.label().to_owned()),
        ],
        stats: vec![
            StatSpec { label: "Accounts", compute: |a: &[BankAccount]| StatValue::Count(a.len()) },
            StatSpec {
                label: "Active",
                compute: |a: &[BankAccount]| {
                    StatValue::Count(count_where(a, |a: &BankAccount| {
                        a.status == AccountStatus::Active
                    }))
                },
            },
        ],
        page_size: DEFAULT_PAGE_SIZE,
        empty_message: "No accounts match the current filters.",
        row_id: |a: &BankAccount| a.id.clone(),
        on_delete: None,
    }
}

/// Bank account list.
#[component]
pub fn AccountsPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let records = Signal::derive(move || stores.accounts.get().to_vec());
    view! { <ListScreen config=accounts_config() records=records/> }
}

/// Create-account form.
#[component]
pub fn AccountCreatePage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let toasts = expect_context::<ToastStore>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let fields = vec![
        FieldSpec::required("name", "Account name", FieldKind::Text),
        FieldSpec::required("bank", "Bank", FieldKind::Text),
        FieldSpec::required("number", "Account number", FieldKind::Text),
        FieldSpec::required("currency", "Currency", FieldKind::Select(option_list(CURRENCIES))),
        FieldSpec::required(
            "status",
            "Status",
            FieldKind::Select(option_list(AccountStatus::OPTIONS)),
        ),
    ];

    let on_submit = Callback::new(move |values: BTreeMap<String, String>| {
        let value = |name: &str| values.get(name).cloned().unwrap_or_default();
        let id = next_id(
            stores.accounts.get_untracked().items(),
            |a: &BankAccount| a.id.clone(),
            "BA-",
            100,
        );
        let account = BankAccount {
            id: id.clone(),
            name: value("name"),
            bank: value("bank"),
            number: value("number"),
            currency: value("currency"),
            status: AccountStatus::from_label(&value("status")),
        };
        insert_into(stores.accounts, account);
        #[cfg(feature = "hydrate")]
        log::info!("bank account {id} created");
        toasts.success(format!("Account {id} created"));
        #[cfg(feature = "hydrate")]
        navigate("/banking/accounts", NavigateOptions::default());
    });

    view! {
        <FormScreen
            title="New bank account"
            fields=fields
            back_path="/banking/accounts"
            submit_label="Create account"
            on_submit=on_submit
        />
    }
}

fn reconciliations_config() -> ListConfig<Reconciliation> {
    ListConfig {
        title: "Reconciliations",
        create_path: None,
        create_label: "",
        search_placeholder: "Search account or id...",
        search_fields: vec![
            |r: &Reconciliation| r.account.clone(),
            |r: &Reconciliation| r.id.clone(),
        ],
        filters: vec![FilterSpec::new(
            "Status",
            option_list(ReconStatus::OPTIONS),
            |r: &Reconciliation| r.status.label().to_owned(),
        )],
        columns: vec![
            Column::new("ID", |r: &Reconciliation| r.id.clone()),
            Column::new("Account", |r: &Reconciliation| r.account.clone()),
            Column::new("Statement date", |r: &Reconciliation| r.statement_date.clone()),
            Column::numeric("Statement", |r: &Reconciliation| {
                format_amount(r.statement_balance)
            }),
            Column::numeric("Ledger", |r: &Reconciliation| format_amount(r.ledger_balance)),
            Column::numeric("Difference", |r: &Reconciliation| format_amount(r.difference)),
            Column::new("Status", |r: &Reconciliation| r.status.label().to_owned()),
        ],
        stats: vec![
            StatSpec {
                label: "Reconciliations",
                compute: |rs: &[Reconciliation]| StatValue::Count(rs.len()),
            },
            StatSpec {
                label: "Pending",
                compute: |rs: &[Reconciliation]| {
                    StatValue::Count(count_where(rs, |r: &Reconciliation| {
                        r.status == ReconStatus::Pending
                    }))
                },
            },
            StatSpec {
                label: "Unmatched difference",
                compute: |rs: &[Reconciliation]| {
                    StatValue::Amount(sum_by(rs, |r: &Reconciliation| {
                        if r.status == ReconStatus::Pending { r.difference } else { 0.0 }
                    }))
                },
            },
        ],
        page_size: DEFAULT_PAGE_SIZE,
        empty_message: "No reconciliations match the current filters.",
        row_id: |r: &Reconciliation| r.id.clone(),
        on_delete: None,
    }
}

/// Reconciliation list, read-only.
#[component]
pub fn ReconciliationsPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let records = Signal::derive(move || stores.reconciliations.get().to_vec());
    view! { <ListScreen config=reconciliations_config() records=records/> }
}
