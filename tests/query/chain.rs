use crate::fixtures::{MyError, NotFound};
use fail_chain::{
    chain, get_inner, get_location, get_original_error, get_stack_trace, is_error, new,
    new_with_inner, newf, news, root_cause, Error,
};

struct Scenario {
    e1: Error,
    e2: Error,
    e1c: Error,
    e2c: Error,
}

fn scenario() -> Scenario {
    let e1 = newf!("Error {} occurred.", 1);
    let e2 = news("Error 2 occurred.");
    let e1c = new_with_inner(e2.clone(), e1.clone());
    let e2c = new(MyError::new("msg", e1c.clone()));
    Scenario { e1, e2, e1c, e2c }
}

#[test]
fn plain_errors_have_empty_defaults() {
    let err = Error::msg("plain");

    assert!(get_inner(&err).is_none());
    assert_eq!(get_location(&err), "");
    assert_eq!(get_stack_trace(&err), "");
    assert!(Error::ptr_eq(get_original_error(&err), &err));
}

#[test]
fn get_inner_follows_the_chain() {
    let s = scenario();

    let first = get_inner(&s.e2c).unwrap();
    assert_eq!(first.to_string(), s.e2.to_string());

    let second = get_inner(first).unwrap();
    assert_eq!(second.to_string(), s.e1.to_string());
    assert!(get_inner(second).is_none());
}

#[test]
fn decorated_error_uses_inner_when_original_has_no_cause() {
    let s = scenario();

    // e2 is itself decorated but has no cause, so e1c falls back to e1.
    assert!(get_inner(&s.e2).is_none());
    assert!(Error::ptr_eq(get_inner(&s.e1c).unwrap(), &s.e1));
}

#[test]
fn original_error_looks_through_nested_decorators() {
    let s = scenario();

    assert!(Error::ptr_eq(get_original_error(&s.e1c), get_original_error(&s.e2)));

    let twice = new(new(s.e1c.clone()));
    assert!(Error::ptr_eq(get_original_error(&twice), get_original_error(&s.e2)));
}

#[test]
fn original_error_is_idempotent() {
    let s = scenario();

    for err in [&s.e1, &s.e2, &s.e1c, &s.e2c] {
        let once = get_original_error(err);
        assert!(Error::ptr_eq(get_original_error(once), once));
    }
}

#[test]
fn chain_yields_every_node_outermost_first() {
    let s = scenario();

    let messages: Vec<String> = chain(&s.e2c).map(ToString::to_string).collect();
    assert_eq!(messages, ["msg", "Error 2 occurred.", "Error 1 occurred."]);
    assert!(Error::ptr_eq(root_cause(&s.e2c), &s.e1));
}

#[test]
fn root_cause_of_single_error_is_itself() {
    let err = Error::new(NotFound);

    assert!(Error::ptr_eq(root_cause(&err), &err));
}

#[test]
fn is_error_matches_by_identity() {
    let s = scenario();

    assert!(is_error(&s.e2c, &s.e2c));
    assert!(is_error(&s.e2c, &s.e1c));
    assert!(is_error(&s.e2c, &s.e1));
}

#[test]
fn is_error_ignores_equal_messages() {
    let s = scenario();
    let lookalike = newf!("Error {} occurred.", 1);

    assert!(!is_error(&s.e2c, &lookalike));
}

#[test]
fn is_error_does_not_look_through_decorators() {
    let s = scenario();

    // e2 is decorated by e1c, it is not a cause in the chain.
    assert!(!is_error(&s.e2c, &s.e2));
}

#[test]
fn std_source_follows_inner() {
    let s = scenario();

    let source = std::error::Error::source(&s.e2c).unwrap();
    assert_eq!(source.to_string(), "Error 2 occurred.");
    let next = source.source().unwrap();
    assert_eq!(next.to_string(), "Error 1 occurred.");
    assert!(next.source().is_none());
}
