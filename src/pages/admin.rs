//! Administration pages: roles.

use leptos::prelude::*;
use records::collection::{DEFAULT_PAGE_SIZE, FilterSpec, StatSpec, StatValue, count_where};

use crate::components::list_screen::{Column, ListConfig, ListScreen};
use crate::domain::admin::{Role, RoleStatus};
use crate::domain::option_list;
use crate::state::stores::Stores;

fn roles_config() -> ListConfig<Role> {
    ListConfig {
        title: "Roles",
        create_path: None,
        create_label: "",
        search_placeholder: "Search role...",
        search_fields: vec![|r: &Role| r.name.clone(), |r: &Role| r.description.clone()],
        filters: vec![FilterSpec::new("Status", option_list(RoleStatus::OPTIONS), |r: &Role| {
            r.status.label().to_owned()
        })],
        columns: vec![
            Column::new("ID", |r: &Role| r.id.clone()),
            Column::new("Name", |r: &Role| r.name.clone()),
            Column::new("Description", |r: &Role| r.description.clone()),
            Column::numeric("Members", |r: &Role| r.members.to_string()),
            Column::new("Status", |r: &Role| r.status.label().to_owned()),
        ],
        stats: vec![
            StatSpec { label: "Roles", compute: |rs: &[Role]| StatValue::Count(rs.len()) },
            StatSpec {
                label: "Active",
                compute: |rs: &[Role]| {
                    StatValue::Count(count_where(rs, |r: &Role| r.status == RoleStatus::Active))
                },
            },
            StatSpec {
                label: "Members",
                compute: |rs: &[Role]| {
                    StatValue::Count(rs.iter().map(|r| r.members as usize).sum())
                },
            },
        ],
        page_size: DEFAULT_PAGE_SIZE,
        empty_message: "No roles match the current filters.",
        row_id: |r: &Role| r.id.clone(),
        on_delete: None,
    }
}

/// Role list, read-only.
#[component]
pub fn RolesPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let records = Signal::derive(move || stores.roles.get().to_vec());
    view! { <ListScreen config=roles_config() records=records/> }
}
