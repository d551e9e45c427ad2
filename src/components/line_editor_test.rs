use super::*;

const EPSILON: f64 = 1e-9;

#[test]
fn amount_or_zero_tolerates_garbage() {
    assert!((amount_or_zero("150") - 150.0).abs() < EPSILON);
    assert!((amount_or_zero("1,250.50") - 1250.5).abs() < EPSILON);
    assert!(amount_or_zero("").abs() < EPSILON);
    assert!(amount_or_zero("abc").abs() < EPSILON);
    assert!(amount_or_zero("-3").abs() < EPSILON);
}

#[test]
fn draft_total_recomputes_from_raw_input() {
    let line = LineDraft {
        description: "Hex bolts M8, box of 500".to_owned(),
        quantity: "10".to_owned(),
        unit_price: "150".to_owned(),
        discount_pct: "0".to_owned(),
        tax_code: "V0".to_owned(),
    };
    assert!((draft_total(&line) - 1500.0).abs() < EPSILON);
}

#[test]
fn draft_total_applies_discount() {
    let line = LineDraft {
        quantity: "4".to_owned(),
        unit_price: "25".to_owned(),
        discount_pct: "10".to_owned(),
        ..LineDraft::default()
    };
    assert!((draft_total(&line) - 90.0).abs() < EPSILON);
}

#[test]
fn fresh_line_defaults_to_quantity_one() {
    let line = LineSignals::new();
    let draft = line.draft_untracked();
    assert_eq!(draft.quantity, "1");
    assert_eq!(draft.unit_price, "0");
    assert!(draft.description.is_empty());
}

#[test]
fn adjustment_drafts_parse_untracked() {
    let adjustments = AdjustmentDrafts::new();
    adjustments.tax.set("84".to_owned());
    adjustments.freight.set("25".to_owned());
    let parsed = adjustments.to_adjustments_untracked();
    assert!((parsed.tax - 84.0).abs() < EPSILON);
    assert!((parsed.freight - 25.0).abs() < EPSILON);
    assert!(parsed.discount.abs() < EPSILON);
}
