//! Entity repositories behind the screens.
//!
//! Each entity lives in a `RwSignal<Repository<T>>`: creation and deletion
//! swap a whole new repository value in, never mutating the old one in
//! place, so every screen reading the signal re-derives its view from a
//! consistent snapshot.

#[cfg(test)]
#[path = "stores_test.rs"]
mod stores_test;

use leptos::prelude::*;
use records::repo::Repository;

use crate::domain::admin::{self, Role};
use crate::domain::banking::{self, BankAccount, Reconciliation};
use crate::domain::crm::{self, Communication, Company};
use crate::domain::finance::{self, Invoice};
use crate::domain::hr::{self, Employee, LeaveRequest};
use crate::domain::inventory::{self, Warehouse};
use crate::domain::manufacturing::{self, Bom, ProductionOrder, QualityCheck};
use crate::domain::sourcing::{self, Rfq};

/// Every entity repository in the suite, provided once via context.
#[derive(Clone, Copy)]
pub struct Stores {
    pub companies: RwSignal<Repository<Company>>,
    pub communications: RwSignal<Repository<Communication>>,
    pub invoices: RwSignal<Repository<Invoice>>,
    pub accounts: RwSignal<Repository<BankAccount>>,
    pub reconciliations: RwSignal<Repository<Reconciliation>>,
    pub employees: RwSignal<Repository<Employee>>,
    pub leaves: RwSignal<Repository<LeaveRequest>>,
    pub warehouses: RwSignal<Repository<Warehouse>>,
    pub production_orders: RwSignal<Repository<ProductionOrder>>,
    pub quality_checks: RwSignal<Repository<QualityCheck>>,
    pub boms: RwSignal<Repository<Bom>>,
    pub rfqs: RwSignal<Repository<Rfq>>,
    pub roles: RwSignal<Repository<Role>>,
}

impl Stores {
    /// All repositories seeded from the mock arrays.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            companies: RwSignal::new(Repository::seeded(crm::seed_companies())),
            communications: RwSignal::new(Repository::seeded(crm::seed_communications())),
            invoices: RwSignal::new(Repository::seeded(finance::seed_invoices())),
            accounts: RwSignal::new(Repository::seeded(banking::seed_accounts())),
            reconciliations: RwSignal::new(Repository::seeded(banking::seed_reconciliations())),
            employees: RwSignal::new(Repository::seeded(hr::seed_employees())),
            leaves: RwSignal::new(Repository::seeded(hr::seed_leaves())),
            warehouses: RwSignal::new(Repository::seeded(inventory::seed_warehouses())),
            production_orders: RwSignal::new(Repository::seeded(
                manufacturing::seed_production_orders(),
            )),
            quality_checks: RwSignal::new(Repository::seeded(manufacturing::seed_quality_checks())),
            boms: RwSignal::new(Repository::seeded(manufacturing::seed_boms())),
            rfqs: RwSignal::new(Repository::seeded(sourcing::seed_rfqs())),
            roles: RwSignal::new(Repository::seeded(admin::seed_roles())),
        }
    }
}

/// Append a record to a repository signal.
pub fn insert_into<T: Clone + Send + Sync + 'static>(
    store: RwSignal<Repository<T>>,
    record: T,
) {
    store.update(|repo| *repo = repo.insert(record));
}

/// Remove the records matching `pred`; `false` when nothing matched.
pub fn remove_from<T: Clone + Send + Sync + 'static>(
    store: RwSignal<Repository<T>>,
    pred: impl Fn(&T) -> bool,
) -> bool {
    let mut removed = false;
    store.update(|repo| {
        if let Ok(next) = repo.remove_where(&pred) {
            *repo = next;
            removed = true;
        }
    });
    removed
}
