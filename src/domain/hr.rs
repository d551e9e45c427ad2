//! HR records: employees and leave requests.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    OnLeave,
    Terminated,
}

impl EmployeeStatus {
    pub const OPTIONS: &'static [&'static str] = &["Active", "On leave", "Terminated"];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On leave",
            Self::Terminated => "Terminated",
        }
    }
}

pub const DEPARTMENTS: &[&str] =
    &["Finance", "Operations", "Sales", "Warehouse", "Production", "IT"];

/// An employee master record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub title: String,
    pub hire_date: String,
    pub status: EmployeeStatus,
}

#[must_use]
pub fn seed_employees() -> Vec<Employee> {
    let employee = |id: &str, name: &str, email: &str, department: &str, title: &str, hire_date: &str, status| Employee {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        department: department.to_owned(),
        title: title.to_owned(),
        hire_date: hire_date.to_owned(),
        status,
    };
    vec![
        employee("E-204", "Dagny Halvorsen", "d.halvorsen@meridian.example", "Sales", "Account manager", "2019-03-11", EmployeeStatus::Active),
        employee("E-211", "Pelumi Okafor", "p.okafor@meridian.example", "Sales", "Sales support", "2021-09-01", EmployeeStatus::Active),
        employee("E-188", "Signe Lindqvist", "s.lindqvist@meridian.example", "Finance", "AP accountant", "2017-05-22", EmployeeStatus::Active),
        employee("E-230", "Marek Dvořák", "m.dvorak@meridian.example", "Production", "Shift lead", "2022-11-14", EmployeeStatus::OnLeave),
        employee("E-172", "Imani Njoroge", "i.njoroge@meridian.example", "Warehouse", "Forklift operator", "2016-08-02", EmployeeStatus::Active),
        employee("E-241", "Tomas Ruiz", "t.ruiz@meridian.example", "IT", "Systems administrator", "2023-02-06", EmployeeStatus::Active),
        employee("E-150", "Greta Bauer", "g.bauer@meridian.example", "Operations", "Planner", "2014-10-27", EmployeeStatus::Terminated),
    ]
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveKind {
    #[default]
    Annual,
    Sick,
    Unpaid,
}

impl LeaveKind {
    pub const OPTIONS: &'static [&'static str] = &["Annual", "Sick", "Unpaid"];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Annual => "Annual",
            Self::Sick => "Sick",
            Self::Unpaid => "Unpaid",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub const OPTIONS: &'static [&'static str] = &["Pending", "Approved", "Rejected"];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// A leave request as listed on the HR screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub employee: String,
    pub kind: LeaveKind,
    pub from_date: String,
    pub to_date: String,
    pub days: f64,
    pub status: LeaveStatus,
}

#[must_use]
pub fn seed_leaves() -> Vec<LeaveRequest> {
    let leave = |id: &str, employee: &str, kind, from: &str, to: &str, days: f64, status| {
        LeaveRequest {
            id: id.to_owned(),
            employee: employee.to_owned(),
            kind,
            from_date: from.to_owned(),
            to_date: to.to_owned(),
            days,
            status,
        }
    };
    vec![
        leave("LV-501", "Dagny Halvorsen", LeaveKind::Annual, "2025-08-04", "2025-08-15", 10.0, LeaveStatus::Approved),
        leave("LV-502", "Marek Dvořák", LeaveKind::Sick, "2025-07-21", "2025-08-01", 10.0, LeaveStatus::Approved),
        leave("LV-503", "Imani Njoroge", LeaveKind::Annual, "2025-09-01", "2025-09-05", 5.0, LeaveStatus::Pending),
        leave("LV-504", "Tomas Ruiz", LeaveKind::Unpaid, "2025-08-18", "2025-08-20", 3.0, LeaveStatus::Pending),
        leave("LV-505", "Signe Lindqvist", LeaveKind::Annual, "2025-07-28", "2025-07-29", 2.0, LeaveStatus::Rejected),
        leave("LV-506", "Pelumi Okafor", LeaveKind::Annual, "2025-10-13", "2025-10-17", 5.0, LeaveStatus::Pending),
    ]
}
