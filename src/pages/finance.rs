//! Finance pages: the A/P invoice list and the invoice entry form.

#[cfg(test)]
#[path = "finance_test.rs"]
mod finance_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use records::collection::{
    DEFAULT_PAGE_SIZE, FilterSpec, StatSpec, StatValue, count_where, sum_by,
};
use records::form::{FieldKind, FieldSpec, FormState};
use records::totals::{DocumentTotals, format_amount};

use crate::components::field_input::FieldInput;
use crate::components::form_screen::run_submit;
use crate::components::line_editor::{
    AdjustmentDrafts, AdjustmentField, LineDraft, LineEditor, LineSignals, amount_or_zero,
};
use crate::components::list_screen::{Column, ListConfig, ListScreen};
use crate::domain::finance::{Invoice, InvoiceStatus, LineItem};
use crate::domain::option_list;
use crate::pages::next_id;
use crate::state::stores::{Stores, insert_into};
use crate::state::toasts::ToastStore;
use crate::util::dates::today_iso;

fn invoices_config() -> ListConfig<Invoice> {
    ListConfig {
        title: "A/P invoices",
        create_path: Some("/finance/invoices/new"),
        create_label: "+ New invoice",
        search_placeholder: "Search vendor or number...",
        search_fields: vec![|i: &Invoice| i.vendor_name.clone(), |i: &Invoice| i.id.clone()],
        filters: vec![FilterSpec::new(
            "Status",
            option_list(InvoiceStatus::OPTIONS),
            |i: &Invoice| i.status.label().to_owned(),
        )],
        columns: vec![
            Column::new("Number", |i: &Invoice| i.id.clone()),
            Column::new("Vendor", |i: &Invoice| i.vendor_name.clone()),
            Column::new("Posted", |i: &Invoice| i.posting_date.clone()),
            Column::new("Due", |i: &Invoice| i.due_date.clone()),
            Column::new("Status", |i: &Invoice| i.status.label().to_owned()),
            Column::numeric("Grand total", |i: &Invoice| format_amount(i.totals.grand_total)),
        ],
        stats: vec![
            StatSpec { label: "Invoices", compute: |is: &[Invoice]| StatValue::Count(is.len()) },
            StatSpec {
                label: "Outstanding",
                compute: |is: &[Invoice]| {
                    StatValue::Count(count_where(is, |i: &Invoice| i.status.is_outstanding()))
                },
            },
            StatSpec {
                label: "Outstanding amount",
                compute: |is: &[Invoice]| {
                    StatValue::Amount(sum_by(is, |i: &Invoice| {
                        if i.status.is_outstanding() { i.totals.grand_total } else { 0.0 }
                    }))
                },
            },
            StatSpec {
                label: "Total billed",
                compute: |is: &[Invoice]| {
                    StatValue::Amount(sum_by(is, |i: &Invoice| i.totals.grand_total))
                },
            },
        ],
        page_size: DEFAULT_PAGE_SIZE,
        empty_message: "No invoices match the current filters.",
        row_id: |i: &Invoice| i.id.clone(),
        on_delete: None,
    }
}

/// A/P invoice list.
#[component]
pub fn InvoicesPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let records = Signal::derive(move || stores.invoices.get().to_vec());
    view! { <ListScreen config=invoices_config() records=records/> }
}

/// A/P invoice entry: header fields, the line grid, and the totals panel.
/// Line and document totals recompute on every field edit.
#[component]
pub fn InvoiceCreatePage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let toasts = expect_context::<ToastStore>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let vendor_options: Vec<String> = stores
        .companies
        .get_untracked()
        .items()
        .iter()
        .filter(|c| c.kind.is_vendor())
        .map(|c| c.name.clone())
        .collect();

    let fields = vec![
        FieldSpec::required("vendor", "Vendor", FieldKind::Select(vendor_options)),
        FieldSpec::optional("contact", "Contact email", FieldKind::Email),
        FieldSpec::required("posting_date", "Posting date", FieldKind::Date),
        FieldSpec::required("due_date", "Due date", FieldKind::Date),
    ];

    let state = RwSignal::new({
        let mut initial = FormState::for_fields(&fields);
        initial.set("posting_date", today_iso());
        initial
    });
    let lines = RwSignal::new(vec![LineSignals::new()]);
    let adjustments = AdjustmentDrafts::new();
    let saving = RwSignal::new(false);

    let totals = Memo::new(move |_| {
        let line_totals: Vec<f64> = lines.get().iter().map(LineSignals::total).collect();
        DocumentTotals::compute(&line_totals, adjustments.to_adjustments())
    });

    let fields_for_submit = fields.clone();
    let submit = move |_| {
        if saving.get_untracked() {
            return;
        }
        let mut valid = false;
        state.update(|s| valid = s.validate(&fields_for_submit));
        if !valid {
            return;
        }

        let values = state.with_untracked(FormState::values);
        let drafts: Vec<LineDraft> =
            lines.get_untracked().iter().map(LineSignals::draft_untracked).collect();
        let doc_adjustments = adjustments.to_adjustments_untracked();
        #[cfg(feature = "hydrate")]
        let navigate = navigate.clone();
        run_submit(saving, move || {
            let value = |name: &str| values.get(name).cloned().unwrap_or_default();
            let vendor_name = value("vendor");
            let vendor_id = stores
                .companies
                .get_untracked()
                .find(|c| c.name == vendor_name)
                .map(|c| c.id.clone())
                .unwrap_or_default();
            let line_items: Vec<LineItem> = drafts
                .iter()
                .enumerate()
                .map(|(i, draft)| {
                    LineItem::new(
                        (i + 1) as u32,
                        draft.description.clone(),
                        amount_or_zero(&draft.quantity),
                        amount_or_zero(&draft.unit_price),
                        amount_or_zero(&draft.discount_pct),
                        draft.tax_code.clone(),
                    )
                })
                .collect();
            let id = next_id(
                stores.invoices.get_untracked().items(),
                |i: &Invoice| i.id.clone(),
                "INV-",
                1000,
            );
            let invoice = Invoice::assemble(
                id.clone(),
                vendor_id,
                vendor_name,
                value("contact"),
                value("posting_date"),
                value("due_date"),
                InvoiceStatus::Open,
                line_items,
                doc_adjustments,
            );
            insert_into(stores.invoices, invoice);
            #[cfg(feature = "hydrate")]
            log::info!("invoice {id} posted");
            toasts.success(format!("Invoice {id} posted"));
            #[cfg(feature = "hydrate")]
            navigate("/finance/invoices", NavigateOptions::default());
        });
    };

    let subtotal = move || format_amount(totals.get().subtotal);
    let grand = move || format_amount(totals.get().grand_total);
    let button_label = move || if saving.get() { "Posting..." } else { "Post invoice" };

    view! {
        <section class="form-screen form-screen--document">
            <header class="form-screen__header">
                <h1>"New A/P invoice"</h1>
            </header>
            <div class="form-screen__fields">
                {fields
                    .iter()
                    .map(|field| view! { <FieldInput spec=field.clone() state=state/> })
                    .collect::<Vec<_>>()}
            </div>

            <h2 class="form-screen__section">"Lines"</h2>
            <LineEditor lines=lines/>

            <h2 class="form-screen__section">"Totals"</h2>
            <div class="totals-panel">
                <div class="totals-panel__row">
                    <span>"Subtotal"</span>
                    <span class="totals-panel__amount">{subtotal}</span>
                </div>
                <AdjustmentField label="Discount" value=adjustments.discount/>
                <AdjustmentField label="Freight" value=adjustments.freight/>
                <AdjustmentField label="Rounding" value=adjustments.rounding/>
                <AdjustmentField label="Tax" value=adjustments.tax/>
                <AdjustmentField label="Withholding tax" value=adjustments.withholding/>
                <div class="totals-panel__row totals-panel__row--grand">
                    <span>"Grand total"</span>
                    <span class="totals-panel__amount">{grand}</span>
                </div>
            </div>

            <div class="form-screen__actions">
                <a class="btn" href="/finance/invoices">"Cancel"</a>
                <button
                    class="btn btn--primary"
                    prop:disabled=move || saving.get()
                    on:click=submit
                >
                    {button_label}
                </button>
            </div>
        </section>
    }
}
