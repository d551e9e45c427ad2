//! Manufacturing pages: production orders, quality checks, and BOMs.

use std::collections::BTreeMap;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use records::collection::{
    DEFAULT_PAGE_SIZE, FilterSpec, StatSpec, StatValue, count_where, sum_by,
};
use records::form::{FieldKind, FieldSpec, parse_amount};

use crate::components::form_screen::FormScreen;
use crate::components::list_screen::{Column, ListConfig, ListScreen};
use crate::domain::manufacturing::{
    Bom, CheckResult, ProductionOrder, ProductionStatus, QualityCheck,
};
use crate::domain::option_list;
use crate::pages::next_id;
use crate::state::stores::{Stores, insert_into};
use crate::state::toasts::ToastStore;

fn production_config() -> ListConfig<ProductionOrder> {
    ListConfig {
        title: "Production orders",
        create_path: None,
        create_label: "",
        search_placeholder: "Search product or order...",
        search_fields: vec![
            |o: &ProductionOrder| o.product.clone(),
            |o: &ProductionOrder| o.id.clone(),
        ],
        filters: vec![FilterSpec::new(
            "Status",
            option_list(ProductionStatus::OPTIONS),
            |o: &ProductionOrder| o.status.label().to_owned(),
        )],
        columns: vec![
            Column::new("ID", |o: &ProductionOrder| o.id.clone()),
            Column::new("Product", |o: &ProductionOrder| o.product.clone()),
            Column::numeric("Qty", |o: &ProductionOrder| format!("{:.0}", o.quantity)),
            Column::new("Due", |o: &ProductionOrder| o.due_date.clone()),
            Column::new("Status", |o: &ProductionOrder| o.status.label().to_owned()),
        ],
        stats: vec![
            StatSpec {
                label: "Orders",
                compute: |os: &[ProductionOrder]| StatValue::Count(os.len()),
            },
            StatSpec {
                label: "In progress",
                compute: |os: &[ProductionOrder]| {
                    StatValue::Count(count_where(os, |o: &ProductionOrder| {
                        o.status == ProductionStatus::InProgress
                    }))
                },
            },
            StatSpec {
                label: "Units planned",
                compute: |os: &[ProductionOrder]| {
                    StatValue::Amount(sum_by(os, |o: &ProductionOrder| o.quantity))
                },
            },
        ],
        page_size: DEFAULT_PAGE_SIZE,
        empty_message: "No production orders match the current filters.",
        row_id: |o: &ProductionOrder| o.id.clone(),
        on_delete: None,
    }
}

/// Production order list, read-only.
#[component]
pub fn ProductionOrdersPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let records = Signal::derive(move || stores.production_orders.get().to_vec());
    view! { <ListScreen config=production_config() records=records/> }
}

fn quality_config() -> ListConfig<QualityCheck> {
    ListConfig {
        title: "Quality checks",
        create_path: None,
        create_label: "",
        search_placeholder: "Search order or inspector...",
        search_fields: vec![
            |q: &QualityCheck| q.order_id.clone(),
            |q: &QualityCheck| q.inspector.clone(),
        ],
        filters: vec![FilterSpec::new(
            "Result",
            option_list(CheckResult::OPTIONS),
            |q: &QualityCheck| q.result.label().to_owned(),
        )],
        columns: vec![
            Column::new("ID", |q: &QualityCheck| q.id.clone()),
            Column::new("Order", |q: &QualityCheck| q.order_id.clone()),
            Column::new("Inspector", |q: &QualityCheck| q.inspector.clone()),
            Column::new("Date", |q: &QualityCheck| q.date.clone()),
            Column::new("Result", |q: &QualityCheck| q.result.label().to_owned()),
        ],
        stats: vec![
            StatSpec { label: "Checks", compute: |qs: &[QualityCheck]| StatValue::Count(qs.len()) },
            StatSpec {
                label: "Failed",
                compute: |qs: &[QualityCheck]| {
                    StatValue::Count(count_where(qs, |q: &QualityCheck| {
                        q.result == CheckResult::Fail
                    }))
                },
            },
            StatSpec {
                label: "Rework",
                compute: |qs: &[QualityCheck]| {
                    StatValue::Count(count_where(qs, |q: &QualityCheck| {
                        q.result == CheckResult::Rework
                    }))
                },
            },
        ],
        page_size: DEFAULT_PAGE_SIZE,
        empty_message: "No quality checks match the current filters.",
        row_id: |q: &QualityCheck| q.id.clone(),
        on_delete: None,
    }
}

/// Quality check list, read-only.
#[component]
pub fn QualityChecksPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let records = Signal::derive(move || stores.quality_checks.get().to_vec());
    view! { <ListScreen config=quality_config() records=records/> }
}

fn boms_config() -> ListConfig<Bom> {
    ListConfig {
        title: "Bills of materials",
        create_path: Some("/mfg/boms/new"),
        create_label: "+ New BOM",
        search_placeholder: "Search product...",
        search_fields: vec![|b: &Bom| b.product.clone(), |b: &Bom| b.id.clone()],
        filters: vec![],
        columns: vec![
            Column::new("ID", |b: &Bom| b.id.clone()),
            Column::new("Product", |b: &Bom| b.product.clone()),
            Column::new("Revision", |b: &Bom| b.revision.clone()),
            Column::numeric("Output qty", |b: &Bom| format!("{:.0}", b.output_qty)),
            Column::new("Warehouse", |b: &Bom| b.warehouse.clone()),
            Column::numeric("Components", |b: &Bom| b.component_count.to_string()),
        ],
        stats: vec![StatSpec { label: "BOMs", compute: |bs: &[Bom]| StatValue::Count(bs.len()) }],
        page_size: DEFAULT_PAGE_SIZE,
        empty_message: "No BOMs match the current search.",
        row_id: |b: &Bom| b.id.clone(),
        on_delete: None,
    }
}

/// BOM list.
#[component]
pub fn BomsPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let records = Signal::derive(move || stores.boms.get().to_vec());
    view! { <ListScreen config=boms_config() records=records/> }
}

/// Create-BOM form. The component list starts empty; components are added
/// from the BOM detail screen in a full deployment.
#[component]
pub fn BomCreatePage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let toasts = expect_context::<ToastStore>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let warehouse_options: Vec<String> = stores
        .warehouses
        .get_untracked()
        .items()
        .iter()
        .map(|w| w.name.clone())
        .collect();

    let fields = vec![
        FieldSpec::required("product", "Product", FieldKind::Text),
        FieldSpec::optional("revision", "Revision", FieldKind::Text),
        FieldSpec::required("output_qty", "Output quantity", FieldKind::Amount),
        FieldSpec::required("warehouse", "Warehouse", FieldKind::Select(warehouse_options)),
    ];

    let on_submit = Callback::new(move |values: BTreeMap<String, String>| {
        let value = |name: &str| values.get(name).cloned().unwrap_or_default();
        let id = next_id(stores.boms.get_untracked().items(), |b: &Bom| b.id.clone(), "BOM-", 100);
        let bom = Bom {
            id: id.clone(),
            product: value("product"),
            revision: if value("revision").is_empty() { "A".to_owned() } else { value("revision") },
            output_qty: parse_amount(&value("output_qty")).unwrap_or(1.0),
            warehouse: value("warehouse"),
            component_count: 0,
        };
        insert_into(stores.boms, bom);
        #[cfg(feature = "hydrate")]
        log::info!("bom {id} created");
        toasts.success(format!("BOM {id} created"));
        #[cfg(feature = "hydrate")]
        navigate("/mfg/boms", NavigateOptions::default());
    });

    view! {
        <FormScreen
            title="New bill of materials"
            fields=fields
            back_path="/mfg/boms"
            submit_label="Create BOM"
            on_submit=on_submit
        />
    }
}
