//! Sourcing pages: requests for quotation.

use leptos::prelude::*;
use records::collection::{DEFAULT_PAGE_SIZE, FilterSpec, StatSpec, StatValue, count_where};

use crate::components::list_screen::{Column, ListConfig, ListScreen};
use crate::domain::option_list;
use crate::domain::sourcing::{Rfq, RfqStatus};
use crate::state::stores::Stores;

fn rfqs_config() -> ListConfig<Rfq> {
    ListConfig {
        title: "Requests for quotation",
        create_path: None,
        create_label: "",
        search_placeholder: "Search title...",
        search_fields: vec![|r: &Rfq| r.title.clone(), |r: &Rfq| r.id.clone()],
        filters: vec![FilterSpec::new("Status", option_list(RfqStatus::OPTIONS), |r: &Rfq| {
            r.status.label().to_owned()
        })],
        columns: vec![
            Column::new("ID", |r: &Rfq| r.id.clone()),
            Column::new("Title", |r: &Rfq| r.title.clone()),
            Column::numeric("Vendors invited", |r: &Rfq| r.vendors_invited.to_string()),
            Column::new("Due", |r: &Rfq| r.due_date.clone()),
            Column::new("Status", |r: &Rfq| r.status.label().to_owned()),
        ],
        stats: vec![
            StatSpec { label: "RFQs", compute: |rs: &[Rfq]| StatValue::Count(rs.len()) },
            StatSpec {
                label: "Sent",
                compute: |rs: &[Rfq]| {
                    StatValue::Count(count_where(rs, |r: &Rfq| r.status == RfqStatus::Sent))
                },
            },
            StatSpec {
                label: "Draft",
                compute: |rs: &[Rfq]| {
                    StatValue::Count(count_where(rs, |r: &Rfq| r.status == RfqStatus::Draft))
                },
            },
        ],
        page_size: DEFAULT_PAGE_SIZE,
        empty_message: "No RFQs match the current filters.",
        row_id: |r: &Rfq| r.id.clone(),
        on_delete: None,
    }
}

/// RFQ list, read-only.
#[component]
pub fn RfqsPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let records = Signal::derive(move || stores.rfqs.get().to_vec());
    view! { <ListScreen config=rfqs_config() records=records/> }
}
