//! Inventory pages: warehouses.

use leptos::prelude::*;
use records::collection::{DEFAULT_PAGE_SIZE, FilterSpec, StatSpec, StatValue, count_where};

use crate::components::list_screen::{Column, ListConfig, ListScreen};
use crate::domain::inventory::{Warehouse, WarehouseStatus};
use crate::domain::option_list;
use crate::state::stores::{Stores, remove_from};
use crate::state::toasts::ToastStore;

fn warehouses_config(on_delete: Option<Callback<String>>) -> ListConfig<Warehouse> {
    ListConfig {
        title: "Warehouses",
        create_path: None,
        create_label: "",
        search_placeholder: "Search name or city...",
        search_fields: vec![|w: &Warehouse| w.name.clone(), |w: &Warehouse| w.city.clone()],
        filters: vec![FilterSpec::new(
            "Status",
            option_list(WarehouseStatus::OPTIONS),
            |w: &Warehouse| w.status.label().to_owned(),
        )],
        columns: vec![
            Column::new("ID", |w: &Warehouse| w.id.clone()),
            Column::new("Name", |w: &Warehouse| w.name.clone()),
            Column::new("City", |w: &Warehouse| w.city.clone()),
            Column::numeric("Bins", |w: &Warehouse| w.bins.to_string()),
            Column::new("Status", |w: &Warehouse| w.status.label().to_owned()),
        ],
        stats: vec![
            StatSpec { label: "Warehouses", compute: |ws: &[Warehouse]| StatValue::Count(ws.len()) },
            StatSpec {
                label: "Active",
                compute: |ws: &[Warehouse]| {
                    StatValue::Count(count_where(ws, |w: &Warehouse| {
                        w.status == WarehouseStatus::Active
                    }))
                },
            },
            StatSpec {
                label: "Total bins",
                compute: |ws: &[Warehouse]| {
                    StatValue::Count(ws.iter().map(|w| w.bins as usize).sum())
                },
            },
        ],
        page_size: DEFAULT_PAGE_SIZE,
        empty_message: "No warehouses match the current filters.",
        row_id: |w: &Warehouse| w.id.clone(),
        on_delete,
    }
}

/// Warehouse list with row deletion.
#[component]
pub fn WarehousesPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let toasts = expect_context::<ToastStore>();

    let on_delete = Callback::new(move |id: String| {
        if remove_from(stores.warehouses, |w| w.id == id) {
            #[cfg(feature = "hydrate")]
            log::info!("warehouse {id} deleted");
            toasts.info(format!("Warehouse {id} deleted"));
        } else {
            toasts.error(format!("Warehouse {id} no longer exists"));
        }
    });

    let records = Signal::derive(move || stores.warehouses.get().to_vec());
    view! { <ListScreen config=warehouses_config(Some(on_delete)) records=records/> }
}
