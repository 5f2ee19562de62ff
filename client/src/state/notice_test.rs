use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "saved");
    let b = state.push(NoticeKind::Error, "failed");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].kind, NoticeKind::Success);
    assert_eq!(state.items[1].text, "failed");
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Info, "one");
    let b = state.push(NoticeKind::Info, "two");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = NoticeState::default();
    state.push(NoticeKind::Info, "one");
    state.dismiss(99);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Info, "one");
    state.dismiss(a);
    let b = state.push(NoticeKind::Info, "two");
    assert_ne!(a, b);
}

#[test]
fn kind_classes_are_distinct() {
    assert_ne!(NoticeKind::Success.class(), NoticeKind::Error.class());
    assert_ne!(NoticeKind::Info.class(), NoticeKind::Error.class());
}
