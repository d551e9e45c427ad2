use super::*;

#[test]
fn seeded_stores_are_populated() {
    let stores = Stores::seeded();
    assert_eq!(stores.companies.get_untracked().len(), 8);
    assert_eq!(stores.invoices.get_untracked().len(), 6);
    assert!(!stores.warehouses.get_untracked().is_empty());
    assert!(!stores.roles.get_untracked().is_empty());
}

#[test]
fn insert_into_appends_a_record() {
    let stores = Stores::seeded();
    let before = stores.warehouses.get_untracked().len();
    insert_into(
        stores.warehouses,
        crate::domain::inventory::Warehouse {
            id: "WH-90".to_owned(),
            name: "Test annex".to_owned(),
            city: "Utrecht".to_owned(),
            bins: 10,
            status: crate::domain::inventory::WarehouseStatus::Active,
        },
    );
    let repo = stores.warehouses.get_untracked();
    assert_eq!(repo.len(), before + 1);
    assert!(repo.find(|w| w.id == "WH-90").is_some());
}

#[test]
fn remove_from_reports_whether_anything_matched() {
    let stores = Stores::seeded();
    assert!(remove_from(stores.warehouses, |w| w.id == "WH-01"));
    assert!(!remove_from(stores.warehouses, |w| w.id == "WH-01"));
    assert!(stores.warehouses.get_untracked().find(|w| w.id == "WH-01").is_none());
}
