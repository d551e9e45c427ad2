//! Editable invoice line grid with live totals.
//!
//! Each line is a row of raw input strings; bad numeric input counts as
//! zero in the live totals, the same way the screens always treated it.
//! Line totals and the document totals recompute on every field edit.

#[cfg(test)]
#[path = "line_editor_test.rs"]
mod line_editor_test;

use leptos::prelude::*;
use records::form::parse_amount;
use records::totals::{Adjustments, format_amount, line_total};

/// One invoice line as entered, before parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineDraft {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub discount_pct: String,
    pub tax_code: String,
}

/// Parse an amount field the way the screens do: anything unparsable
/// counts as zero until validation flags it.
#[must_use]
pub fn amount_or_zero(input: &str) -> f64 {
    parse_amount(input).unwrap_or(0.0)
}

/// Live total for one draft line.
#[must_use]
pub fn draft_total(line: &LineDraft) -> f64 {
    line_total(
        amount_or_zero(&line.quantity),
        amount_or_zero(&line.unit_price),
        amount_or_zero(&line.discount_pct),
    )
}

/// One editable line, a signal per field so edits re-render only the cells
/// that depend on them.
#[derive(Clone, Copy)]
pub struct LineSignals {
    pub description: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub unit_price: RwSignal<String>,
    pub discount_pct: RwSignal<String>,
    pub tax_code: RwSignal<String>,
}

impl LineSignals {
    /// A fresh line: quantity 1, everything else zero or empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            description: RwSignal::new(String::new()),
            quantity: RwSignal::new("1".to_owned()),
            unit_price: RwSignal::new("0".to_owned()),
            discount_pct: RwSignal::new("0".to_owned()),
            tax_code: RwSignal::new("V1".to_owned()),
        }
    }

    /// Tracked snapshot, for reactive totals.
    #[must_use]
    pub fn draft(&self) -> LineDraft {
        LineDraft {
            description: self.description.get(),
            quantity: self.quantity.get(),
            unit_price: self.unit_price.get(),
            discount_pct: self.discount_pct.get(),
            tax_code: self.tax_code.get(),
        }
    }

    /// Untracked snapshot, for submit handlers.
    #[must_use]
    pub fn draft_untracked(&self) -> LineDraft {
        LineDraft {
            description: self.description.get_untracked(),
            quantity: self.quantity.get_untracked(),
            unit_price: self.unit_price.get_untracked(),
            discount_pct: self.discount_pct.get_untracked(),
            tax_code: self.tax_code.get_untracked(),
        }
    }

    /// Tracked live total for this line.
    #[must_use]
    pub fn total(&self) -> f64 {
        draft_total(&self.draft())
    }
}

impl Default for LineSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// Document-level adjustment fields as entered.
#[derive(Clone, Copy)]
pub struct AdjustmentDrafts {
    pub discount: RwSignal<String>,
    pub freight: RwSignal<String>,
    pub rounding: RwSignal<String>,
    pub tax: RwSignal<String>,
    pub withholding: RwSignal<String>,
}

impl AdjustmentDrafts {
    #[must_use]
    pub fn new() -> Self {
        let zero = || RwSignal::new("0".to_owned());
        Self { discount: zero(), freight: zero(), rounding: zero(), tax: zero(), withholding: zero() }
    }

    /// Tracked parse of every adjustment field.
    #[must_use]
    pub fn to_adjustments(&self) -> Adjustments {
        Adjustments {
            discount: amount_or_zero(&self.discount.get()),
            freight: amount_or_zero(&self.freight.get()),
            rounding: amount_or_zero(&self.rounding.get()),
            tax: amount_or_zero(&self.tax.get()),
            withholding: amount_or_zero(&self.withholding.get()),
        }
    }

    /// Untracked parse, for submit handlers.
    #[must_use]
    pub fn to_adjustments_untracked(&self) -> Adjustments {
        Adjustments {
            discount: amount_or_zero(&self.discount.get_untracked()),
            freight: amount_or_zero(&self.freight.get_untracked()),
            rounding: amount_or_zero(&self.rounding.get_untracked()),
            tax: amount_or_zero(&self.tax.get_untracked()),
            withholding: amount_or_zero(&self.withholding.get_untracked()),
        }
    }
}

impl Default for AdjustmentDrafts {
    fn default() -> Self {
        Self::new()
    }
}

/// One labelled adjustment input on the totals panel.
#[component]
pub fn AdjustmentField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="adjustment-field">
            <span>{label}</span>
            <input
                type="number"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// The line grid itself: one input row per line, a live total per row,
/// and add/remove controls.
#[component]
pub fn LineEditor(lines: RwSignal<Vec<LineSignals>>) -> impl IntoView {
    let add_line = move |_| lines.update(|ls| ls.push(LineSignals::new()));

    let rows = move || {
        let count = lines.with(Vec::len);
        lines
            .get()
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let removable = count > 1;
                let remove = move |_| {
                    lines.update(|ls| {
                        if i < ls.len() {
                            ls.remove(i);
                        }
                    });
                };
                let total = move || format_amount(line.total());
                view! {
                    <tr class="line-editor__row">
                        <td>{i + 1}</td>
                        <td>
                            <input
                                class="line-editor__description"
                                prop:value=move || line.description.get()
                                on:input=move |ev| line.description.set(event_target_value(&ev))
                            />
                        </td>
                        <td>
                            <input
                                type="number"
                                prop:value=move || line.quantity.get()
                                on:input=move |ev| line.quantity.set(event_target_value(&ev))
                            />
                        </td>
                        <td>
                            <input
                                type="number"
                                prop:value=move || line.unit_price.get()
                                on:input=move |ev| line.unit_price.set(event_target_value(&ev))
                            />
                        </td>
                        <td>
                            <input
                                type="number"
                                prop:value=move || line.discount_pct.get()
                                on:input=move |ev| line.discount_pct.set(event_target_value(&ev))
                            />
                        </td>
                        <td>
                            <input
                                class="line-editor__tax"
                                prop:value=move || line.tax_code.get()
                                on:input=move |ev| line.tax_code.set(event_target_value(&ev))
                            />
                        </td>
                        <td class="line-editor__total">{total}</td>
                        <td>
                            <button
                                class="btn btn--danger"
                                prop:disabled=!removable
                                on:click=remove
                            >
                                "Remove"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="line-editor">
            <table class="line-editor__table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Description"</th>
                        <th>"Qty"</th>
                        <th>"Unit price"</th>
                        <th>"Disc %"</th>
                        <th>"Tax"</th>
                        <th>"Line total"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <button class="btn line-editor__add" on:click=add_line>"+ Add line"</button>
        </div>
    }
}
