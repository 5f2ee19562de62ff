use super::*;

#[test]
fn fresh_tag_is_current() {
    let seq = RequestSequencer::new();
    let tag = seq.issue();
    assert!(seq.is_current(tag));
}

#[test]
fn newer_tag_supersedes_older() {
    let seq = RequestSequencer::new();
    let first = seq.issue();
    let second = seq.issue();
    assert!(second > first);
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));
}

#[test]
fn out_of_order_resolution_keeps_latest_result() {
    let seq = RequestSequencer::new();
    let slow = seq.issue();
    let fast = seq.issue();
    let mut shown = Vec::new();

    // The later request resolves first, then the stale one arrives.
    assert!(seq.apply_if_current(fast, "filtered", |v| shown.push(v)));
    assert!(!seq.apply_if_current(slow, "all", |v| shown.push(v)));
    assert_eq!(shown, vec!["filtered"]);
}

#[test]
fn clones_share_the_counter() {
    let a = RequestSequencer::new();
    let b = a.clone();
    let tag = a.issue();
    let _ = b.issue();
    assert!(!a.is_current(tag));
}
