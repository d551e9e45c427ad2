//! The generic filtered record list.
//!
//! Every list page in the suite renders through this one component: a
//! search box matched against designated fields, exact-match select
//! filters, stat cards reduced over the whole array, a fixed-size page of
//! rows, and a pager. The page supplies a [`ListConfig`] and a signal of
//! records; all derivation goes through `records::collection`.

use leptos::prelude::*;
use records::collection::{self, Accessor, CollectionSpec, FilterSpec, Query, StatSpec};

use crate::components::pagination::Pagination;
use crate::components::stat_card::StatCard;

/// One table column: header text plus the cell projection.
#[derive(Clone)]
pub struct Column<T> {
    pub header: &'static str,
    pub cell: Accessor<T>,
    pub numeric: bool,
}

impl<T> Column<T> {
    #[must_use]
    pub fn new(header: &'static str, cell: Accessor<T>) -> Self {
        Self { header, cell, numeric: false }
    }

    /// A right-aligned column for quantities and amounts.
    #[must_use]
    pub fn numeric(header: &'static str, cell: Accessor<T>) -> Self {
        Self { header, cell, numeric: true }
    }
}

/// Everything that varies between list screens.
#[derive(Clone)]
pub struct ListConfig<T: 'static> {
    pub title: &'static str,
    /// Route of the create form, when the entity has one.
    pub create_path: Option<&'static str>,
    pub create_label: &'static str,
    pub search_placeholder: &'static str,
    pub search_fields: Vec<Accessor<T>>,
    pub filters: Vec<FilterSpec<T>>,
    pub columns: Vec<Column<T>>,
    pub stats: Vec<StatSpec<T>>,
    pub page_size: usize,
    pub empty_message: &'static str,
    /// Identifier shown to the user and passed to `on_delete`.
    pub row_id: Accessor<T>,
    /// Row delete action, when the screen supports it.
    pub on_delete: Option<Callback<String>>,
}

/// Generic list screen over any record type.
#[component]
pub fn ListScreen<T>(config: ListConfig<T>, #[prop(into)] records: Signal<Vec<T>>) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let ListConfig {
        title,
        create_path,
        create_label,
        search_placeholder,
        search_fields,
        filters,
        columns,
        stats,
        page_size,
        empty_message,
        row_id,
        on_delete,
    } = config;

    let search = RwSignal::new(String::new());
    let selections = RwSignal::new(vec![String::new(); filters.len()]);
    let page = RwSignal::new(1_usize);

    let spec = CollectionSpec::new(search_fields).with_page_size(page_size);
    let filters_for_view = filters.clone();
    let page_view = Memo::new(move |_| {
        let query = Query { search: search.get(), selections: selections.get() };
        collection::paged_view(&records.get(), &spec, &filters_for_view, &query, page.get())
    });

    let stat_cards = stats
        .iter()
        .map(|stat| {
            let stat = *stat;
            let value = Signal::derive(move || (stat.compute)(&records.get()).display());
            view! { <StatCard label=stat.label value=value/> }
        })
        .collect::<Vec<_>>();

    let filter_controls = filters
        .iter()
        .enumerate()
        .map(|(i, filter)| {
            let options = filter.options.clone();
            view! {
                <label class="list-screen__filter">
                    <span>{filter.label}</span>
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        selections.update(|s| {
                            if let Some(slot) = s.get_mut(i) {
                                *slot = value;
                            }
                        });
                        page.set(1);
                    }>
                        <option value="">"All"</option>
                        {options
                            .into_iter()
                            .map(|option| view! { <option value=option.clone()>{option.clone()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            }
        })
        .collect::<Vec<_>>();

    let count_line = move || {
        let pv = page_view.get();
        format!("{} of {} records", pv.filtered_len, pv.total_len)
    };

    let table = move || {
        let pv = page_view.get();
        if pv.items.is_empty() {
            return view! { <p class="list-screen__empty">{empty_message}</p> }.into_any();
        }
        let headers = columns
            .iter()
            .map(|col| {
                let class = if col.numeric {
                    "list-screen__th list-screen__th--numeric"
                } else {
                    "list-screen__th"
                };
                view! { <th class=class>{col.header}</th> }
            })
            .collect::<Vec<_>>();
        let actions_header =
            on_delete.map(|_| view! { <th class="list-screen__th list-screen__th--actions"></th> });
        let rows = pv
            .items
            .iter()
            .map(|record| {
                let cells = columns
                    .iter()
                    .map(|col| {
                        let text = (col.cell)(record);
                        let class = if col.numeric {
                            "list-screen__td list-screen__td--numeric"
                        } else {
                            "list-screen__td"
                        };
                        view! { <td class=class>{text}</td> }
                    })
                    .collect::<Vec<_>>();
                let actions = on_delete.map(|delete| {
                    let id = row_id(record);
                    view! {
                        <td class="list-screen__td list-screen__td--actions">
                            <button class="btn btn--danger" on:click=move |_| delete.run(id.clone())>
                                "Delete"
                            </button>
                        </td>
                    }
                });
                view! { <tr class="list-screen__row">{cells}{actions}</tr> }
            })
            .collect::<Vec<_>>();
        view! {
            <table class="list-screen__table">
                <thead>
                    <tr>{headers}{actions_header}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <section class="list-screen">
            <header class="list-screen__header">
                <h1>{title}</h1>
                {create_path
                    .map(|path| view! { <a class="btn btn--primary" href=path>{create_label}</a> })}
            </header>
            <div class="list-screen__stats">{stat_cards}</div>
            <div class="list-screen__controls">
                <input
                    class="list-screen__search"
                    type="search"
                    placeholder=search_placeholder
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        search.set(event_target_value(&ev));
                        page.set(1);
                    }
                />
                {filter_controls}
            </div>
            <p class="list-screen__count">{count_line}</p>
            {table}
            <Pagination page=page total_pages=Signal::derive(move || page_view.get().total_pages)/>
        </section>
    }
}
