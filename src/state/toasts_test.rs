use super::*;

#[test]
fn push_returns_a_real_id() {
    let store = ToastStore::new();
    let id = store.success("Saved");
    assert_ne!(id, Uuid::nil());
}

#[test]
fn pushes_keep_insertion_order() {
    let store = ToastStore::new();
    store.info("one");
    store.error("two");
    store.success("three");
    let messages: Vec<String> =
        store.toasts_untracked().into_iter().map(|t| t.message).collect();
    assert_eq!(messages, vec!["one", "two", "three"]);
}

#[test]
fn dismiss_removes_only_the_given_id() {
    let store = ToastStore::new();
    let first = store.info("first");
    store.info("second");
    store.dismiss(first);
    let toasts = store.toasts_untracked();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "second");
    // Dismissing again is a no-op, as when the auto-dismiss timer fires
    // after a manual dismissal.
    store.dismiss(first);
    assert_eq!(store.toasts_untracked().len(), 1);
}
