//! HR pages: employees and leave requests.

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

use crate::components::form_screen::FormScreen;
use crate::components::list_screen::{Column, ListConfig, ListScreen};
use crate::domain::hr::{
    DEPARTMENTS, Employee, EmployeeStatus, LeaveKind, LeaveRequest, LeaveStatus,
};
use crate::domain::option_list;
use crate::pages::next_id;
use crate::state::stores::{Stores, insert_into};
use crate::state::toasts::ToastStore;
use crate::util::dates::today_iso;

fn employees_config() -> ListConfig<Employee> {
    ListConfig {
        title: "Employees",
        create_path: Some("/hr/employees/new"),
        create_label: "+ New employee",
        search_placeholder: "Search name or email...",
        search_fields: vec![|e: &Employee| e.name.clone(), |e: &Employee| e.email.clone()],
        filters: vec![
            FilterSpec::new("Department", option_list(DEPARTMENTS), |e: &Employee| {
                e.department.clone()
            }),
            FilterSpec::new("Status", option_list(EmployeeStatus::OPTIONS), |e: &Employee| {
                e.status.label().to_owned()
            }),
        ],
        columns: vec![
            Column::new("ID", |e: &Employee| e.id.clone()),
            Column::new("Name", |e: &Employee| e.name.clone()),
            Column::new("Email", |e: &Employee| e.email.clone()),
            Column::new("Department", |e: &Employee| e.department.clone()),
            Column::new("Title", |e: &Employee| e.title.clone()),
            Column::new("Hired", |e: &Employee| e.hire_date.clone()),
            Column::new("Status", |e: &Employee| e.status.label().to_owned()),
        ],
        stats: vec![
            StatSpec { label: "Headcount", compute: |es: &[Employee]| StatValue::Count(es.len()) },
            StatSpec {
                label: "Active",
                compute: |es: &[Employee]| {
                    StatValue::Count(count_where(es, |e: &Employee| {
                        e.status == EmployeeStatus::Active
                    }))
                },
            },
            StatSpec {
                label: "On leave",
                compute: |es: &[Employee]| {
                    StatValue::Count(count_where(es, |e: &Employee| {
                        e.status == EmployeeStatus::OnLeave
                    }))
                },
            },
        ],
        page_size: DEFAULT_PAGE_SIZE,
        empty_message: "No employees match the current filters.",
        row_id: |e: &Employee| e.id.clone(),
        on_delete: None,
    }
}

/// Employee list.
#[component]
pub fn EmployeesPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let records = Signal::derive(move || stores.employees.get().to_vec());
    view! { <ListScreen config=employees_config() records=records/> }
}

/// Create-employee form. New employees start Active.
#[component]
pub fn EmployeeCreatePage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let toasts = expect_context::<ToastStore>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let fields = vec![
        FieldSpec::required("name", "Full name", FieldKind::Text),
        FieldSpec::required("email", "Work email", FieldKind::Email),
        FieldSpec::required(
            "department",
            "Department",
            FieldKind::Select(option_list(DEPARTMENTS)),
        ),
        FieldSpec::optional("title", "Job title", FieldKind::Text),
        FieldSpec::required("hire_date", "Hire date", FieldKind::Date),
    ];

    let on_submit = Callback::new(move |values: BTreeMap<String, String>| {
        let value = |name: &str| values.get(name).cloned().unwrap_or_default();
        let id = next_id(
            stores.employees.get_untracked().items(),
            |e: &Employee| e.id.clone(),
            "E-",
            100,
        );
        let hire_date =
            if value("hire_date").is_empty() { today_iso() } else { value("hire_date") };
        let employee = Employee {
            id: id.clone(),
            name: value("name"),
            email: value("email"),
            department: value("department"),
            title: value("title"),
            hire_date,
            status: EmployeeStatus::Active,
        };
        insert_into(stores.employees, employee);
        #[cfg(feature = "hydrate")]
        log::info!("employee {id} created");
        toasts.success(format!("Employee {id} created"));
        #[cfg(feature = "hydrate")]
        navigate("/hr/employees", NavigateOptions::default());
    });

    view! {
        <FormScreen
            title="New employee"
            fields=fields
            back_path="/hr/employees"
            submit_label="Create employee"
            on_submit=on_submit
        />
    }
}

fn leaves_config() -> ListConfig<LeaveRequest> {
    ListConfig {
        title: "Leave requests",
        create_path: None,
        create_label: "",
        search_placeholder: "Search employee...",
        search_fields: vec![|l: &LeaveRequest| l.employee.clone()],
        filters: vec![
            FilterSpec::new("Type", option_list(LeaveKind::OPTIONS), |l: &LeaveRequest| {
                l.kind.label().to_owned()
            }),
            FilterSpec::new("Status", option_list(LeaveStatus::OPTIONS), |l: &LeaveRequest| {
                l.status.label().to_owned()
            }),
        ],
        columns: vec![
            Column::new("ID", |l: &LeaveRequest| l.id.clone()),
            Column::new("Employee", |l: &LeaveRequest| l.employee.clone()),
            Column::new("Type", |l: &LeaveRequest| l.kind.label().to_owned()),
            Column::new("From", |l: &LeaveRequest| l.from_date.clone()),
            Column::new("To", |l: &LeaveRequest| l.to_date.clone()),
            Column::numeric("Days", |l: &LeaveRequest| format!("{:.1}", l.days)),
            Column::new("Status", |l: &LeaveRequest| l.status.label().to_owned()),
        ],
        stats: vec![
            StatSpec {
                label: "Requests",
                compute: |ls: &[LeaveRequest]| StatValue::Count(ls.len()),
            },
            StatSpec {
                label: "Pending",
                compute: |ls: &[LeaveRequest]| {
                    StatValue::Count(count_where(ls, |l: &LeaveRequest| {
                        l.status == LeaveStatus::Pending
                    }))
                },
            },
            StatSpec {
                label: "Days approved",
                compute: |ls: &[LeaveRequest]| {
                    StatValue::Amount(sum_by(ls, |l: &LeaveRequest| {
                        if l.status == LeaveStatus::Approved { l.days } else { 0.0 }
                    }))
                },
            },
        ],
        page_size: DEFAULT_PAGE_SIZE,
        empty_message: "No leave requests match the current filters.",
        row_id: |l: &LeaveRequest| l.id.clone(),
        on_delete: None,
    }
}

/// Leave request list, read-only.
#[component]
pub fn LeavesPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let records = Signal::derive(move || stores.leaves.get().to_vec());
    view! { <ListScreen config=leaves_config() records=records/> }
}
