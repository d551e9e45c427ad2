use super::*;

#[test]
fn seed_company_ids_are_unique() {
    let companies = seed_companies();
    let mut ids: Vec<&str> = companies.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), companies.len());
}

#[test]
fn abc_suppliers_is_a_seeded_vendor() {
    let companies = seed_companies();
    let abc = companies
        .iter()
        .find(|c| c.name == "ABC Suppliers")
        .expect("ABC Suppliers seeded");
    assert!(abc.kind.is_vendor());
    assert_eq!(abc.status, CompanyStatus::Active);
}

#[test]
fn partner_kind_vendor_check() {
    assert!(PartnerKind::Vendor.is_vendor());
    assert!(PartnerKind::Both.is_vendor());
    assert!(!PartnerKind::Customer.is_vendor());
}

#[test]
fn seed_communications_have_valid_dates() {
    for comm in seed_communications() {
        assert!(records::form::date_valid(&comm.date), "bad date on {}", comm.id);
    }
}
